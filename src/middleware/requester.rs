//! Identidad del solicitante
//!
//! La autenticación vive en un servicio externo; este módulo solo extrae
//! la identidad ya verificada que ese servicio inyecta en los headers
//! `X-Company-Id` y `X-Admin` de cada request.

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use uuid::Uuid;

use crate::utils::errors::AppError;

/// Empresa autenticada que se inyecta en las requests
#[derive(Debug, Clone, Copy)]
pub struct Requester {
    pub company_id: Uuid,
    pub is_admin: bool,
}

impl Requester {
    /// Verificar si puede operar sobre recursos de la empresa dada
    pub fn can_access(&self, company_id: Uuid) -> bool {
        self.is_admin || self.company_id == company_id
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Requester
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let company_id = parts
            .headers
            .get("x-company-id")
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| AppError::Unauthorized("X-Company-Id header requerido".to_string()))?;

        let company_id = Uuid::parse_str(company_id)
            .map_err(|_| AppError::Unauthorized("X-Company-Id inválido".to_string()))?;

        let is_admin = parts
            .headers
            .get("x-admin")
            .and_then(|value| value.to_str().ok())
            .map(|value| value.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Ok(Requester { company_id, is_admin })
    }
}
