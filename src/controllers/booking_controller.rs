use crate::dto::booking_dto::CreateBookingRequest;
use crate::dto::common_dto::ApiResponse;
use crate::dto::contract_dto::ContractResponse;
use crate::middleware::requester::Requester;
use crate::models::car::CarStatus;
use crate::models::company_settings::CompanySettings;
use crate::models::contract::{Contract, ContractStatus};
use crate::repositories::audit_repository::AuditRepository;
use crate::repositories::car_repository::CarRepository;
use crate::repositories::company_settings_repository::CompanySettingsRepository;
use crate::repositories::contract_repository::ContractRepository;
use crate::repositories::district_repository::DistrictRepository;
use crate::repositories::season_repository::SeasonRepository;
use crate::repositories::tier_repository::TierRepository;
use crate::services::contract_lifecycle::{ensure_car_available, AuditEntry};
use crate::services::pricing_service::{compute_booking_total, BookingPricingInput};
use crate::services::season_table::SeasonTable;
use crate::utils::errors::AppError;
use chrono::Utc;
use rust_decimal::Decimal;
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

pub struct BookingController {
    contracts: ContractRepository,
    cars: CarRepository,
    tiers: TierRepository,
    seasons: SeasonRepository,
    settings: CompanySettingsRepository,
    districts: DistrictRepository,
    audits: AuditRepository,
}

impl BookingController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            contracts: ContractRepository::new(pool.clone()),
            cars: CarRepository::new(pool.clone()),
            tiers: TierRepository::new(pool.clone()),
            seasons: SeasonRepository::new(pool.clone()),
            settings: CompanySettingsRepository::new(pool.clone()),
            districts: DistrictRepository::new(pool.clone()),
            audits: AuditRepository::new(pool),
        }
    }

    /// Crear una reserva: calcula el total autoritativo, inserta el
    /// contrato en borrador y marca el coche como reservado, todo en una
    /// transacción.
    pub async fn create(
        &self,
        requester: Requester,
        request: CreateBookingRequest,
        currency: String,
    ) -> Result<ApiResponse<ContractResponse>, AppError> {
        request.validate()?;

        let car = self
            .cars
            .find_by_id(request.car_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Car not found".to_string()))?;

        if !requester.can_access(car.company_id) {
            return Err(AppError::Forbidden(
                "Car does not belong to this company".to_string(),
            ));
        }
        ensure_car_available(&car)?;

        let tiers = self.tiers.list_by_company(car.company_id).await?;
        let season_table = SeasonTable::new(self.seasons.list().await?);

        let any_add_on =
            request.full_insurance || request.baby_seat || request.island_trip || request.krabi_trip;
        let settings = match self.settings.get(car.company_id).await? {
            Some(settings) => settings,
            None if any_add_on => {
                return Err(AppError::ValidationError(
                    "company has no add-on prices configured".to_string(),
                ));
            }
            None => CompanySettings {
                company_id: car.company_id,
                baby_seat_price_per_day: Decimal::ZERO,
                island_trip_price: Decimal::ZERO,
                krabi_trip_price: Decimal::ZERO,
                full_insurance_min_price: Decimal::ZERO,
            },
        };

        let pickup_delivery = match request.pickup_district_id {
            Some(district_id) => Some(self.delivery_price(district_id).await?),
            None => None,
        };
        let return_delivery = match request.return_district_id {
            Some(district_id) => Some(self.delivery_price(district_id).await?),
            None => None,
        };

        let pricing = compute_booking_total(BookingPricingInput {
            price_per_day: car.price_per_day,
            start_date: request.start_date,
            end_date: request.end_date,
            seasons: &season_table,
            tiers: &tiers,
            settings: &settings,
            full_insurance: request.full_insurance,
            baby_seat: request.baby_seat,
            island_trip: request.island_trip,
            krabi_trip: request.krabi_trip,
            pickup_delivery,
            return_delivery,
        })?;

        let contract = Contract {
            id: Uuid::new_v4(),
            company_id: car.company_id,
            company_car_id: car.id,
            client_id: request.client_id,
            start_date: request.start_date,
            end_date: request.end_date,
            actual_end_date: None,
            total_amount: pricing.total_amount,
            currency,
            status: ContractStatus::Draft,
            full_insurance: request.full_insurance,
            full_insurance_price: pricing.full_insurance_price,
            baby_seat: request.baby_seat,
            baby_seat_price: pricing.baby_seat_price,
            island_trip: request.island_trip,
            island_trip_price: pricing.island_trip_price,
            krabi_trip: request.krabi_trip,
            krabi_trip_price: pricing.krabi_trip_price,
            pickup_district_id: request.pickup_district_id,
            pickup_delivery_price: pricing.pickup_delivery_price,
            pickup_hotel: request.pickup_hotel,
            pickup_room: request.pickup_room,
            return_district_id: request.return_district_id,
            return_delivery_price: pricing.return_delivery_price,
            return_hotel: request.return_hotel,
            return_room: request.return_room,
            start_mileage: None,
            end_mileage: None,
            fuel_level: None,
            cleanliness: None,
            notes: request.notes,
            created_at: Utc::now(),
        };

        let audit = AuditEntry {
            entity_type: "contract",
            entity_id: contract.id,
            action: "create",
            before: json!({}),
            after: json!({
                "status": contract.status,
                "total_amount": contract.total_amount,
                "car_status": CarStatus::Booked,
            }),
        };

        let mut tx = self
            .contracts
            .pool()
            .begin()
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error starting transaction: {}", e)))?;

        self.contracts.insert(&mut tx, &contract).await?;
        self.cars
            .update_status(&mut tx, car.id, CarStatus::Booked)
            .await?;
        self.audits
            .record(&mut tx, &audit, requester.company_id)
            .await?;

        tx.commit()
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error committing booking: {}", e)))?;

        tracing::info!(
            "📝 Contrato {} creado ({} días, total {})",
            contract.id,
            pricing.days,
            contract.total_amount
        );

        Ok(ApiResponse::success_with_message(
            ContractResponse::from(contract),
            "Booking created successfully".to_string(),
        ))
    }

    async fn delivery_price(&self, district_id: Uuid) -> Result<Decimal, AppError> {
        let district = self
            .districts
            .find_by_id(district_id)
            .await?
            .ok_or_else(|| AppError::NotFound("District not found".to_string()))?;
        Ok(district.delivery_price)
    }
}
