//! Portfolio overview, overall and per asset class

use serde::Serialize;

use super::aggregate::{investment_returns, total_of, Returns};
use crate::models::{Investment, InvestmentType};

#[derive(Debug, Clone, Serialize)]
pub struct TypeBreakdown {
    #[serde(rename = "type")]
    pub investment_type: InvestmentType,
    pub count: usize,
    pub invested: f64,
    pub current_value: f64,
    pub returns: Returns,
}

#[derive(Debug, Clone, Serialize)]
pub struct InvestmentSummary {
    pub total_invested: f64,
    pub total_current: f64,
    pub returns: Returns,
    /// Per type, in first-encountered order
    pub by_type: Vec<TypeBreakdown>,
}

pub fn investment_summary(investments: &[Investment]) -> InvestmentSummary {
    let total_invested = total_of(investments, |i| i.amount_invested);
    let total_current = total_of(investments, |i| i.current_value);

    let mut by_type: Vec<TypeBreakdown> = Vec::new();
    for inv in investments {
        match by_type
            .iter_mut()
            .find(|t| t.investment_type == inv.investment_type)
        {
            Some(entry) => {
                entry.count += 1;
                entry.invested += inv.amount_invested;
                entry.current_value += inv.current_value;
            }
            None => by_type.push(TypeBreakdown {
                investment_type: inv.investment_type,
                count: 1,
                invested: inv.amount_invested,
                current_value: inv.current_value,
                returns: investment_returns(0.0, 0.0),
            }),
        }
    }
    for entry in &mut by_type {
        entry.returns = investment_returns(entry.invested, entry.current_value);
    }

    InvestmentSummary {
        total_invested,
        total_current,
        returns: investment_returns(total_invested, total_current),
        by_type,
    }
}
