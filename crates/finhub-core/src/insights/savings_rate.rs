//! Savings Rate Insight
//!
//! Rates all-time savings against the recommended band: below the low mark
//! warns, above the high mark is a success, anything in between is silent.
//! With no recorded income the rate is undefined and the rule stays quiet.

use serde_json::json;

use crate::analytics::{savings_rate, total_of};
use crate::error::Result;

use super::engine::{AnalysisContext, Insight};
use super::types::{Finding, InsightType, Severity};

pub struct SavingsRateInsight;

impl SavingsRateInsight {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SavingsRateInsight {
    fn default() -> Self {
        Self::new()
    }
}

impl Insight for SavingsRateInsight {
    fn id(&self) -> InsightType {
        InsightType::SavingsRate
    }

    fn name(&self) -> &'static str {
        "Savings Rate"
    }

    fn analyze(&self, ctx: &AnalysisContext<'_>) -> Result<Vec<Finding>> {
        let income = total_of(&ctx.snapshot.income, |i| i.amount);
        let expenses = total_of(&ctx.snapshot.expenses, |e| e.amount);
        let rate = savings_rate(income, expenses);
        let low = ctx.thresholds.low_savings_rate;
        let high = ctx.thresholds.high_savings_rate;

        let finding = if rate < low {
            Finding::new(
                InsightType::SavingsRate,
                "savings_rate:low",
                Severity::Warning,
                "Low Savings Rate",
                format!(
                    "Your savings rate is {:.1}%. Financial experts recommend saving at least {:.0}% of your income.",
                    rate, low
                ),
            )
            .with_action("Try to increase your savings by reducing discretionary expenses")
        } else if rate > high {
            Finding::new(
                InsightType::SavingsRate,
                "savings_rate:high",
                Severity::Success,
                "Excellent Savings Rate!",
                format!(
                    "You're saving {:.1}% of your income. This is above the recommended {:.0}%.",
                    rate, low
                ),
            )
            .with_action("Consider investing your surplus savings for better returns")
        } else {
            return Ok(vec![]);
        };

        Ok(vec![finding.with_data(json!({
            "total_income": income,
            "total_expenses": expenses,
            "savings_rate": rate,
        }))])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::testing::*;
    use crate::analytics::Period;
    use crate::config::FinhubConfig;
    use crate::models::ExpenseCategory;
    use crate::store::Snapshot;

    fn analyze(income_total: f64, expense_total: f64) -> Vec<Finding> {
        let snapshot = Snapshot {
            // Spread over different months: the rate is all-time
            income: vec![income(date(2023, 6, 1), income_total)],
            expenses: vec![expense(
                date(2024, 1, 1),
                ExpenseCategory::Housing,
                expense_total,
                "Rent",
            )],
            ..Default::default()
        };
        let config = FinhubConfig::default();
        let ctx = AnalysisContext::new(&snapshot, Period::new(2024, 3).unwrap(), &config);
        SavingsRateInsight::new().analyze(&ctx).unwrap()
    }

    #[test]
    fn test_low_rate_warns() {
        let findings = analyze(100_000.0, 90_000.0);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::Warning);
        assert_eq!(findings[0].title, "Low Savings Rate");
        assert_eq!(findings[0].data["savings_rate"], 10.0);
    }

    #[test]
    fn test_high_rate_succeeds() {
        let findings = analyze(100_000.0, 60_000.0);
        assert_eq!(findings[0].severity, Severity::Success);
    }

    #[test]
    fn test_band_is_silent() {
        assert!(analyze(100_000.0, 80_000.0).is_empty()); // 20
        assert!(analyze(100_000.0, 75_000.0).is_empty()); // 25
        assert!(analyze(100_000.0, 70_000.0).is_empty()); // 30
    }

    #[test]
    fn test_no_income_reads_as_zero_rate() {
        let findings = analyze(0.0, 5_000.0);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::Warning);
        assert_eq!(findings[0].key, "savings_rate:low");
        assert_eq!(findings[0].data["savings_rate"], 0.0);
    }
}
