//! Top Category Insight
//!
//! Names the category with the most spending this month.

use serde_json::json;

use crate::analytics::sum_by_category;
use crate::error::Result;

use super::engine::{AnalysisContext, Insight};
use super::types::{Finding, InsightType, Severity};

pub struct TopCategoryInsight;

impl TopCategoryInsight {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TopCategoryInsight {
    fn default() -> Self {
        Self::new()
    }
}

impl Insight for TopCategoryInsight {
    fn id(&self) -> InsightType {
        InsightType::TopCategory
    }

    fn name(&self) -> &'static str {
        "Top Spending Category"
    }

    fn analyze(&self, ctx: &AnalysisContext<'_>) -> Result<Vec<Finding>> {
        let totals = sum_by_category(ctx.month_expenses());
        let Some((category, amount)) = totals.top() else {
            return Ok(vec![]);
        };

        let finding = Finding::new(
            InsightType::TopCategory,
            format!("top_category:{}", ctx.period),
            Severity::Info,
            format!("Highest Spending: {}", category),
            format!(
                "You've spent {} on {} this month.",
                ctx.money(amount),
                category
            ),
        )
        .with_action("Consider if this aligns with your financial priorities")
        .with_data(json!({
            "category": category,
            "amount": amount,
            "categories": totals,
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

    fn analyze(snapshot: &Snapshot) -> Vec<Finding> {
        let config = FinhubConfig::default();
        let ctx = AnalysisContext::new(snapshot, Period::new(2024, 3).unwrap(), &config);
        TopCategoryInsight::new().analyze(&ctx).unwrap()
    }

    #[test]
    fn test_names_highest_category() {
        let snapshot = Snapshot {
            expenses: vec![
                expense(date(2024, 3, 1), ExpenseCategory::Food, 4_000.0, "Groceries"),
                expense(date(2024, 3, 2), ExpenseCategory::Housing, 18_000.0, "Rent"),
                // Last month's spending doesn't count
                expense(date(2024, 2, 2), ExpenseCategory::Shopping, 50_000.0, "TV"),
            ],
            ..Default::default()
        };

        let findings = analyze(&snapshot);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::Info);
        assert_eq!(findings[0].title, "Highest Spending: Housing");
        assert_eq!(
            findings[0].description,
            "You've spent ₹18,000 on Housing this month."
        );
    }

    #[test]
    fn test_tie_goes_to_first_encountered() {
        let snapshot = Snapshot {
            expenses: vec![
                expense(date(2024, 3, 1), ExpenseCategory::Education, 2_000.0, "Course"),
                expense(date(2024, 3, 2), ExpenseCategory::Healthcare, 2_000.0, "Doctor"),
            ],
            ..Default::default()
        };
        assert_eq!(analyze(&snapshot)[0].data["category"], "Education");
    }

    #[test]
    fn test_no_expenses_this_month() {
        let snapshot = Snapshot {
            expenses: vec![expense(date(2024, 1, 1), ExpenseCategory::Food, 10.0, "Tea")],
            ..Default::default()
        };
        assert!(analyze(&snapshot).is_empty());
    }
}
