//! Rutas de la calculadora de financiación

use axum::{routing::post, Json, Router};

use crate::controllers::finance_controller;
use crate::dto::finance_dto::{LoanBreakdownResponse, LoanRequest};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_finance_router() -> Router<AppState> {
    Router::new().route("/calculate", post(calculate_loan))
}

async fn calculate_loan(
    Json(request): Json<LoanRequest>,
) -> Result<Json<LoanBreakdownResponse>, AppError> {
    let response = finance_controller::calculate(request)?;
    Ok(Json(response))
}
