//! Controller de la calculadora de financiación

use crate::dto::finance_dto::{LoanBreakdownResponse, LoanRequest};
use crate::services::finance_service::{self, LoanParameters};
use crate::utils::errors::{validation_error, AppResult};
use crate::utils::validation;

/// Valida los montos en la frontera y delega el cálculo puro.
/// El plazo no se valida aquí: la calculadora lo rechaza por su cuenta
/// con InvalidParameter.
pub fn calculate(request: LoanRequest) -> AppResult<LoanBreakdownResponse> {
    if validation::validate_non_negative(request.vehicle_price).is_err() {
        return Err(validation_error("vehiclePrice", "el precio no puede ser negativo"));
    }
    if validation::validate_non_negative(request.deposit).is_err() {
        return Err(validation_error("deposit", "el depósito no puede ser negativo"));
    }
    if validation::validate_non_negative(request.annual_rate_percent).is_err() {
        return Err(validation_error("annualRatePercent", "la tasa no puede ser negativa"));
    }

    let params: LoanParameters = request.into();
    let breakdown = finance_service::compute_loan(&params)?;

    Ok(LoanBreakdownResponse::from(breakdown))
}
