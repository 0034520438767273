//! Core types for the insight engine

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The built-in insight rules, in evaluation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightType {
    /// Month-over-month change in total spending
    SpendingTrend,
    /// Category with the most spending this month
    TopCategory,
    /// Budgets close to or past their limit
    BudgetAlert,
    /// All-time savings rate against the recommended band
    SavingsRate,
    /// Combined gain or loss across investments
    InvestmentReturns,
    /// Recurring services spotted in expense descriptions
    Subscriptions,
}

impl InsightType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InsightType::SpendingTrend => "spending_trend",
            InsightType::TopCategory => "top_category",
            InsightType::BudgetAlert => "budget_alert",
            InsightType::SavingsRate => "savings_rate",
            InsightType::InvestmentReturns => "investment_returns",
            InsightType::Subscriptions => "subscriptions",
        }
    }
}

impl fmt::Display for InsightType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for InsightType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "spending_trend" => Ok(InsightType::SpendingTrend),
            "top_category" => Ok(InsightType::TopCategory),
            "budget_alert" => Ok(InsightType::BudgetAlert),
            "savings_rate" => Ok(InsightType::SavingsRate),
            "investment_returns" => Ok(InsightType::InvestmentReturns),
            "subscriptions" => Ok(InsightType::Subscriptions),
            _ => Err(format!("Unknown insight type: {}", s)),
        }
    }
}

/// How a finding should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Something going well
    Success,
    /// Neutral observation
    Info,
    /// Worth acting on
    Warning,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Info => "info",
            Severity::Warning => "warning",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "success" => Ok(Severity::Success),
            "info" => Ok(Severity::Info),
            "warning" => Ok(Severity::Warning),
            _ => Err(format!("Unknown severity: {}", s)),
        }
    }
}

/// An advisory message produced by one rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    /// Rule that produced this finding
    pub insight_type: InsightType,
    /// Stable key, e.g. "budget_alert:2024-03:Food"
    pub key: String,
    pub severity: Severity,
    /// Short headline (e.g., "Food Budget Alert")
    pub title: String,
    /// One or two sentences with the figures behind the finding
    pub description: String,
    /// Suggested next step
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    /// Rule-specific structured data
    #[serde(default)]
    pub data: serde_json::Value,
}

impl Finding {
    pub fn new(
        insight_type: InsightType,
        key: impl Into<String>,
        severity: Severity,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            insight_type,
            key: key.into(),
            severity,
            title: title.into(),
            description: description.into(),
            action: None,
            data: serde_json::Value::Null,
        }
    }

    /// Add a suggested action
    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    /// Add structured data payload
    pub fn with_data(mut self, data: serde_json::Value) -> Self {
        self.data = data;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insight_type_roundtrip_names() {
        for t in [
            InsightType::SpendingTrend,
            InsightType::TopCategory,
            InsightType::BudgetAlert,
            InsightType::SavingsRate,
            InsightType::InvestmentReturns,
            InsightType::Subscriptions,
        ] {
            assert_eq!(t.as_str().parse::<InsightType>().unwrap(), t);
        }
        assert!("spending_explainer".parse::<InsightType>().is_err());
    }

    #[test]
    fn test_finding_serializes_presentation_fields() {
        let finding = Finding::new(
            InsightType::TopCategory,
            "top_category:2024-03",
            Severity::Info,
            "Highest Spending: Food",
            "You've spent ₹500 on Food this month.",
        )
        .with_action("Consider if this aligns with your financial priorities");

        let json = serde_json::to_value(&finding).unwrap();
        assert_eq!(json["severity"], "info");
        assert_eq!(json["insight_type"], "top_category");
        assert_eq!(json["title"], "Highest Spending: Food");
        assert!(json["action"].is_string());
    }
}
