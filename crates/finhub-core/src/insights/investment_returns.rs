//! Investment Returns Insight
//!
//! Reports the combined return across every investment once anything has
//! been invested.

use serde_json::json;

use crate::analytics::{investment_returns, total_of};
use crate::error::Result;

use super::engine::{AnalysisContext, Insight};
use super::types::{Finding, InsightType, Severity};

pub struct InvestmentReturnsInsight;

impl InvestmentReturnsInsight {
    pub fn new() -> Self {
        Self
    }
}

impl Default for InvestmentReturnsInsight {
    fn default() -> Self {
        Self::new()
    }
}

impl Insight for InvestmentReturnsInsight {
    fn id(&self) -> InsightType {
        InsightType::InvestmentReturns
    }

    fn name(&self) -> &'static str {
        "Investment Returns"
    }

    fn analyze(&self, ctx: &AnalysisContext<'_>) -> Result<Vec<Finding>> {
        let invested = total_of(&ctx.snapshot.investments, |i| i.amount_invested);
        if invested <= 0.0 {
            return Ok(vec![]);
        }
        let current = total_of(&ctx.snapshot.investments, |i| i.current_value);
        let returns = investment_returns(invested, current);
        let gained = returns.percentage >= 0.0;

        let (severity, sign, verb, action) = if gained {
            (
                Severity::Success,
                "+",
                "gained",
                "Your investments are performing well",
            )
        } else {
            (
                Severity::Warning,
                "",
                "lost",
                "Review your investment strategy and consider rebalancing",
            )
        };

        let finding = Finding::new(
            InsightType::InvestmentReturns,
            "investment_returns",
            severity,
            format!("Investment Returns: {}{:.2}%", sign, returns.percentage),
            format!(
                "Your investments have {} {}.",
                verb,
                ctx.money(returns.amount.abs())
            ),
        )
        .with_action(action)
        .with_data(json!({
            "invested": invested,
            "current_value": current,
            "returns": returns,
        }));

        Ok(vec![finding])
    }
}
