//! DTOs de la calculadora de financiación

use serde::{Deserialize, Serialize};

use crate::services::finance_service::{LoanBreakdown, LoanParameters};

/// Request de cálculo de financiación (los campos que mueve el
/// formulario de la calculadora)
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanRequest {
    pub vehicle_price: f64,
    pub deposit: f64,
    pub term_months: i32,
    pub annual_rate_percent: f64,
}

impl From<LoanRequest> for LoanParameters {
    fn from(request: LoanRequest) -> Self {
        Self {
            vehicle_price: request.vehicle_price,
            deposit: request.deposit,
            term_months: request.term_months,
            annual_rate_percent: request.annual_rate_percent,
        }
    }
}

/// Desglose del préstamo para la API
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanBreakdownResponse {
    pub monthly_payment: f64,
    pub total_payment: f64,
    pub total_interest: f64,
    pub principal: f64,
}

impl From<LoanBreakdown> for LoanBreakdownResponse {
    fn from(breakdown: LoanBreakdown) -> Self {
        Self {
            monthly_payment: breakdown.monthly_payment,
            total_payment: breakdown.total_payment,
            total_interest: breakdown.total_interest,
            principal: breakdown.principal,
        }
    }
}
