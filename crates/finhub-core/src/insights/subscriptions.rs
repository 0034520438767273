//! Subscription Insight
//!
//! Keyword heuristic over this month's expense descriptions. There is no
//! subscription record type, so misses and false matches are expected.

use serde_json::json;

use crate::analytics::total_of;
use crate::error::Result;

use super::engine::{AnalysisContext, Insight};
use super::types::{Finding, InsightType, Severity};

pub struct SubscriptionInsight;

impl SubscriptionInsight {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SubscriptionInsight {
    fn default() -> Self {
        Self::new()
    }
}

/// Case-insensitive match of `description` against `keywords`
pub fn looks_like_subscription(description: &str, keywords: &[String]) -> bool {
    let description = description.to_lowercase();
    keywords
        .iter()
        .any(|k| description.contains(&k.to_lowercase()))
}

impl Insight for SubscriptionInsight {
    fn id(&self) -> InsightType {
        InsightType::Subscriptions
    }

    fn name(&self) -> &'static str {
        "Subscription Review"
    }

    fn analyze(&self, ctx: &AnalysisContext<'_>) -> Result<Vec<Finding>> {
        let keywords = &ctx.thresholds.subscription_keywords;
        let matches: Vec<_> = ctx
            .month_expenses()
            .into_iter()
            .filter(|e| looks_like_subscription(&e.description, keywords))
            .collect();

        if matches.is_empty() {
            return Ok(vec![]);
        }

        let total = total_of(&matches, |e| e.amount);
        let descriptions: Vec<&str> = matches.iter().map(|e| e.description.as_str()).collect();

        let finding = Finding::new(
            InsightType::Subscriptions,
            format!("subscriptions:{}", ctx.period),
            Severity::Info,
            "Subscription Review",
            format!(
                "You're spending {} on subscriptions this month.",
                ctx.money(total)
            ),
        )
        .with_action("Review and cancel any subscriptions you no longer use")
        .with_data(json!({
            "count": matches.len(),
            "total": total,
            "descriptions": descriptions,
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

    #[test]
    fn test_keyword_matching() {
        let keywords = FinhubConfig::default().insights.subscription_keywords;
        assert!(looks_like_subscription("Netflix subscription", &keywords));
        assert!(looks_like_subscription("SPOTIFY family", &keywords));
        assert!(!looks_like_subscription("Grocery shopping", &keywords));
    }

    #[test]
    fn test_mixed_case_keywords_match() {
        let keywords = vec!["Hotstar".to_string(), "YouTube Premium".to_string()];
        assert!(looks_like_subscription("hotstar premium", &keywords));
        assert!(looks_like_subscription("YOUTUBE PREMIUM family", &keywords));
        assert!(!looks_like_subscription("youtube rental", &keywords));
    }

    #[test]
    fn test_sums_matching_expenses_this_month() {
        let snapshot = Snapshot {
            expenses: vec![
                expense(
                    date(2024, 3, 1),
                    ExpenseCategory::Entertainment,
                    649.0,
                    "Netflix subscription",
                ),
                expense(
                    date(2024, 3, 2),
                    ExpenseCategory::Entertainment,
                    119.0,
                    "Spotify",
                ),
                expense(
                    date(2024, 3, 3),
                    ExpenseCategory::Food,
                    2_500.0,
                    "Grocery shopping",
                ),
                expense(
                    date(2024, 2, 1),
                    ExpenseCategory::Entertainment,
                    649.0,
                    "Netflix subscription",
                ),
            ],
            ..Default::default()
        };
        let config = FinhubConfig::default();
        let ctx = AnalysisContext::new(&snapshot, Period::new(2024, 3).unwrap(), &config);

        let findings = SubscriptionInsight::new().analyze(&ctx).unwrap();
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::Info);
        assert_eq!(findings[0].data["count"], 2);
        assert_eq!(findings[0].data["total"], 768.0);
        assert_eq!(
            findings[0].description,
            "You're spending ₹768 on subscriptions this month."
        );
    }

    #[test]
    fn test_custom_keywords() {
        let snapshot = Snapshot {
            expenses: vec![expense(
                date(2024, 3, 1),
                ExpenseCategory::Entertainment,
                299.0,
                "Hotstar annual",
            )],
            ..Default::default()
        };
        let mut config = FinhubConfig::default();
        let ctx = AnalysisContext::new(&snapshot, Period::new(2024, 3).unwrap(), &config);
        assert!(SubscriptionInsight::new().analyze(&ctx).unwrap().is_empty());

        config.insights.subscription_keywords.push("hotstar".to_string());
        let ctx = AnalysisContext::new(&snapshot, Period::new(2024, 3).unwrap(), &config);
        assert_eq!(SubscriptionInsight::new().analyze(&ctx).unwrap().len(), 1);
    }
}
