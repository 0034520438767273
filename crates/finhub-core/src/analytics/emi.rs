//! Loan installment (EMI) calculation

use serde::Serialize;

use crate::error::{Error, Result};

/// Fixed monthly installment for a loan, rounded to the nearest whole unit
///
/// Uses `P * r * (1+r)^n / ((1+r)^n - 1)` with `r` the monthly rate. A zero
/// rate repays the principal in equal parts.
pub fn emi(principal: f64, annual_rate: f64, tenure_months: u32) -> Result<f64> {
    if !principal.is_finite() || principal < 0.0 {
        return Err(Error::InvalidData(format!(
            "principal must be a non-negative number, got {}",
            principal
        )));
    }
    if !annual_rate.is_finite() || annual_rate < 0.0 {
        return Err(Error::InvalidData(format!(
            "interest rate must be a non-negative number, got {}",
            annual_rate
        )));
    }
    if tenure_months == 0 {
        return Err(Error::InvalidData(
            "tenure must be at least one month".to_string(),
        ));
    }

    let n = f64::from(tenure_months);
    let r = annual_rate / 12.0 / 100.0;
    if r == 0.0 {
        return Ok((principal / n).round());
    }

    let growth = (1.0 + r).powf(n);
    Ok((principal * r * growth / (growth - 1.0)).round())
}

/// Installment together with what the loan costs over its tenure
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EmiBreakdown {
    pub emi: f64,
    pub total_payment: f64,
    pub total_interest: f64,
}

pub fn emi_breakdown(principal: f64, annual_rate: f64, tenure_months: u32) -> Result<EmiBreakdown> {
    let emi = emi(principal, annual_rate, tenure_months)?;
    let total_payment = emi * f64::from(tenure_months);
    Ok(EmiBreakdown {
        emi,
        total_payment,
        total_interest: total_payment - principal,
    })
}
