//! Debt overview

use serde::Serialize;

use super::aggregate::total_of;
use crate::models::Debt;

#[derive(Debug, Clone, Serialize)]
pub struct DebtSummary {
    pub count: usize,
    pub total_outstanding: f64,
    pub total_monthly_emi: f64,
    /// Simple mean of the annual rates; 0 with no debts
    pub average_interest_rate: f64,
    /// Debts whose rate is strictly above the configured threshold
    pub high_interest: Vec<Debt>,
}

pub fn debt_summary(debts: &[Debt], high_interest_threshold: f64) -> DebtSummary {
    let average_interest_rate = if debts.is_empty() {
        0.0
    } else {
        total_of(debts, |d| d.interest_rate) / debts.len() as f64
    };

    DebtSummary {
        count: debts.len(),
        total_outstanding: total_of(debts, |d| d.outstanding_amount),
        total_monthly_emi: total_of(debts, |d| d.monthly_emi),
        average_interest_rate,
        high_interest: debts
            .iter()
            .filter(|d| d.interest_rate > high_interest_threshold)
            .cloned()
            .collect(),
    }
}
