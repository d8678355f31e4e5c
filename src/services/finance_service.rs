//! Calculadora de financiación
//!
//! Fórmula estándar de cuota fija (anualidad) para un préstamo
//! amortizable. Función pura y determinista: mismos cuatro inputs,
//! mismo resultado, sin estado entre invocaciones.

use crate::utils::errors::{AppError, AppResult};

/// Parámetros de un cálculo de financiación.
/// El depósito puede superar el precio: la fórmula se evalúa tal cual
/// y el resultado degenerado es responsabilidad del caller.
#[derive(Debug, Clone)]
pub struct LoanParameters {
    pub vehicle_price: f64,
    pub deposit: f64,
    pub term_months: i32,
    pub annual_rate_percent: f64,
}

/// Desglose del préstamo calculado
#[derive(Debug, Clone, PartialEq)]
pub struct LoanBreakdown {
    pub monthly_payment: f64,
    pub total_payment: f64,
    pub total_interest: f64,
    pub principal: f64,
}

/// Calcula la cuota mensual y el interés total.
///
/// Casos especiales:
/// - tasa 0%: la fórmula de anualidad queda 0/0, se reparte el capital
///   en partes iguales y el interés es 0.
/// - plazo <= 0: `InvalidParameter`, nunca un resultado numérico.
/// - resultado no finito (overflow de la potencia): se devuelven ceros
///   en cuota/total/interés para que la capa de presentación nunca
///   muestre NaN.
pub fn compute_loan(params: &LoanParameters) -> AppResult<LoanBreakdown> {
    if params.term_months <= 0 {
        return Err(AppError::InvalidParameter(format!(
            "term_months debe ser positivo, se recibió {}",
            params.term_months
        )));
    }

    let principal = params.vehicle_price - params.deposit;
    let monthly_rate = params.annual_rate_percent / 100.0 / 12.0;
    let term = params.term_months as f64;

    if monthly_rate == 0.0 {
        let monthly_payment = principal / term;
        return Ok(LoanBreakdown {
            monthly_payment,
            total_payment: monthly_payment * term,
            total_interest: 0.0,
            principal,
        });
    }

    let growth = (1.0 + monthly_rate).powi(params.term_months);
    let monthly_payment = principal * monthly_rate * growth / (growth - 1.0);
    let total_payment = monthly_payment * term;
    let total_interest = total_payment - principal;

    if !monthly_payment.is_finite() || !total_payment.is_finite() || !total_interest.is_finite() {
        return Ok(LoanBreakdown {
            monthly_payment: 0.0,
            total_payment: 0.0,
            total_interest: 0.0,
            principal,
        });
    }

    Ok(LoanBreakdown {
        monthly_payment,
        total_payment,
        total_interest,
        principal,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_rate_splits_principal_evenly() {
        let result = compute_loan(&LoanParameters {
            vehicle_price: 300_000.0,
            deposit: 30_000.0,
            term_months: 60,
            annual_rate_percent: 0.0,
        })
        .unwrap();

        assert_eq!(result.principal, 270_000.0);
        assert_eq!(result.monthly_payment, 4_500.0);
        assert_eq!(result.total_interest, 0.0);
    }

    #[test]
    fn test_standard_amortization_case() {
        let result = compute_loan(&LoanParameters {
            vehicle_price: 300_000.0,
            deposit: 30_000.0,
            term_months: 60,
            annual_rate_percent: 11.5,
        })
        .unwrap();

        assert_eq!(result.principal, 270_000.0);
        // anualidad a 60 meses al 11.5% nominal anual
        assert!((result.monthly_payment - 5_937.97).abs() < 1.0);
        assert!(result.total_interest > 0.0);
        assert!((result.total_payment - result.monthly_payment * 60.0).abs() < 1e-6);
    }

    #[test]
    fn test_non_positive_term_is_rejected() {
        for term in [0, -12] {
            let result = compute_loan(&LoanParameters {
                vehicle_price: 300_000.0,
                deposit: 30_000.0,
                term_months: term,
                annual_rate_percent: 11.5,
            });
            assert!(matches!(result, Err(AppError::InvalidParameter(_))));
        }
    }

    #[test]
    fn test_overflow_clamps_to_zero_instead_of_nan() {
        // la potencia (1+r)^n desborda a infinito con plazos absurdos
        let result = compute_loan(&LoanParameters {
            vehicle_price: 300_000.0,
            deposit: 0.0,
            term_months: 1_000_000,
            annual_rate_percent: 12.0,
        })
        .unwrap();

        assert_eq!(result.monthly_payment, 0.0);
        assert_eq!(result.total_payment, 0.0);
        assert_eq!(result.total_interest, 0.0);
    }

    #[test]
    fn test_negative_principal_evaluates_unclamped() {
        // depósito mayor que el precio: permitido pero degenerado
        let result = compute_loan(&LoanParameters {
            vehicle_price: 300_000.0,
            deposit: 350_000.0,
            term_months: 60,
            annual_rate_percent: 11.5,
        })
        .unwrap();

        assert_eq!(result.principal, -50_000.0);
        assert!(result.monthly_payment.is_finite());
        assert!(result.monthly_payment < 0.0);
    }

    #[test]
    fn test_same_inputs_same_output() {
        let params = LoanParameters {
            vehicle_price: 185_000.0,
            deposit: 15_000.0,
            term_months: 72,
            annual_rate_percent: 13.25,
        };

        assert_eq!(compute_loan(&params).unwrap(), compute_loan(&params).unwrap());
    }
}
