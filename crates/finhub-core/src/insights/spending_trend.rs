//! Spending Trend Insight
//!
//! Compares this month's total spending with last month's. Fires when the
//! absolute change exceeds the configured threshold; a month with no prior
//! spending has no change to report.

use serde_json::json;

use crate::analytics::{percent_change, total_of};
use crate::error::Result;

use super::engine::{AnalysisContext, Insight};
use super::types::{Finding, InsightType, Severity};

pub struct SpendingTrendInsight;

impl SpendingTrendInsight {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SpendingTrendInsight {
    fn default() -> Self {
        Self::new()
    }
}

impl Insight for SpendingTrendInsight {
    fn id(&self) -> InsightType {
        InsightType::SpendingTrend
    }

    fn name(&self) -> &'static str {
        "Spending Trend"
    }

    fn analyze(&self, ctx: &AnalysisContext<'_>) -> Result<Vec<Finding>> {
        let current = total_of(&ctx.month_expenses(), |e| e.amount);
        let previous = total_of(&ctx.previous_month_expenses(), |e| e.amount);
        let change = percent_change(previous, current);

        if change.abs() <= ctx.thresholds.spending_change_threshold {
            return Ok(vec![]);
        }

        let rose = change > 0.0;
        let (severity, direction, action) = if rose {
            (
                Severity::Warning,
                "Increased",
                "Review your expenses and identify areas to cut back",
            )
        } else {
            (
                Severity::Success,
                "Decreased",
                "Great job! Keep up the good spending habits",
            )
        };

        let finding = Finding::new(
            InsightType::SpendingTrend,
            format!("spending_trend:{}", ctx.period),
            severity,
            format!("Spending {} by {:.1}%", direction, change.abs()),
            format!(
                "You spent {} this month compared to {} last month.",
                ctx.money(current),
                ctx.money(previous)
            ),
        )
        .with_action(action)
        .with_data(json!({
            "current": current,
            "previous": previous,
            "percent_change": change,
        }));

        Ok(vec![finding])
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

    fn run(previous: f64, current: f64, period: Period) -> Vec<Finding> {
        let prev = period.previous();
        let snapshot = Snapshot {
            expenses: vec![
                expense(date(prev.year, prev.month, 10), ExpenseCategory::Food, previous, "a"),
                expense(date(period.year, period.month, 10), ExpenseCategory::Food, current, "b"),
            ],
            ..Default::default()
        };
        let config = FinhubConfig::default();
        let ctx = AnalysisContext::new(&snapshot, period, &config);
        SpendingTrendInsight::new().analyze(&ctx).unwrap()
    }

    #[test]
    fn test_increase_above_threshold_warns() {
        let findings = run(1_000.0, 1_200.0, Period::new(2024, 3).unwrap());
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::Warning);
        assert_eq!(findings[0].data["percent_change"], 20.0);
        assert_eq!(findings[0].title, "Spending Increased by 20.0%");
        assert_eq!(
            findings[0].description,
            "You spent ₹1,200 this month compared to ₹1,000 last month."
        );
    }

    #[test]
    fn test_small_change_is_silent() {
        assert!(run(1_000.0, 1_050.0, Period::new(2024, 3).unwrap()).is_empty());
        // Exactly at the threshold does not fire
        assert!(run(1_000.0, 1_100.0, Period::new(2024, 3).unwrap()).is_empty());
    }

    #[test]
    fn test_decrease_is_success() {
        let findings = run(1_000.0, 700.0, Period::new(2024, 3).unwrap());
        assert_eq!(findings[0].severity, Severity::Success);
        assert_eq!(findings[0].title, "Spending Decreased by 30.0%");
    }

    #[test]
    fn test_no_previous_spending_is_silent() {
        assert!(run(0.0, 5_000.0, Period::new(2024, 3).unwrap()).is_empty());
    }

    #[test]
    fn test_january_compares_with_previous_december() {
        let findings = run(1_000.0, 2_000.0, Period::new(2024, 1).unwrap());
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].data["previous"], 1_000.0);
    }
}
