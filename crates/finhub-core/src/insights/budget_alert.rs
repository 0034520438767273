//! Budget Alert Insight
//!
//! One warning per budget whose spending this month is strictly above the
//! alert threshold (90% by default).

use serde_json::json;

use crate::analytics::{budget_utilization, spent_in_category};
use crate::error::Result;

use super::engine::{AnalysisContext, Insight};
use super::types::{Finding, InsightType, Severity};

pub struct BudgetAlertInsight;

impl BudgetAlertInsight {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BudgetAlertInsight {
    fn default() -> Self {
        Self::new()
    }
}

impl Insight for BudgetAlertInsight {
    fn id(&self) -> InsightType {
        InsightType::BudgetAlert
    }

    fn name(&self) -> &'static str {
        "Budget Alert"
    }

    fn analyze(&self, ctx: &AnalysisContext<'_>) -> Result<Vec<Finding>> {
        let mut findings = Vec::new();

        for budget in &ctx.snapshot.budgets {
            let spent = spent_in_category(budget, &ctx.snapshot.expenses, ctx.period);
            let utilization = budget_utilization(spent, budget.monthly_limit);
            if utilization <= ctx.thresholds.budget_alert_threshold {
                continue;
            }

            let finding = Finding::new(
                InsightType::BudgetAlert,
                format!("budget_alert:{}:{}", ctx.period, budget.category),
                Severity::Warning,
                format!("{} Budget Alert", budget.category),
                format!(
                    "You've used {:.0}% of your {} budget ({} / {})",
                    utilization,
                    budget.category,
                    ctx.money(spent),
                    ctx.money(budget.monthly_limit)
                ),
            )
            .with_action("Reduce spending in this category for the rest of the month")
            .with_data(json!({
                "budget_id": budget.id,
                "category": budget.category,
                "spent": spent,
                "monthly_limit": budget.monthly_limit,
                "utilization": utilization,
            }));

            findings.push(finding);
        }

        Ok(findings)
    }
}
