//! DTOs de creación de reservas

use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

/// Request para crear una reserva (contrato en borrador)
#[derive(Debug, Deserialize, Validate)]
pub struct CreateBookingRequest {
    pub car_id: Uuid,
    pub client_id: Uuid,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,

    pub pickup_district_id: Option<Uuid>,
    #[validate(length(max = 200))]
    pub pickup_hotel: Option<String>,
    #[validate(length(max = 50))]
    pub pickup_room: Option<String>,

    pub return_district_id: Option<Uuid>,
    #[validate(length(max = 200))]
    pub return_hotel: Option<String>,
    #[validate(length(max = 50))]
    pub return_room: Option<String>,

    #[serde(default)]
    pub full_insurance: bool,
    #[serde(default)]
    pub baby_seat: bool,
    #[serde(default)]
    pub island_trip: bool,
    #[serde(default)]
    pub krabi_trip: bool,

    #[validate(length(max = 2000))]
    pub notes: Option<String>,
}
