//! Insight Engine - runs the rule battery over a snapshot

use crate::analytics::{filter_by_month, Period};
use crate::config::{CurrencyConfig, FinhubConfig, InsightThresholds};
use crate::format::format_currency;
use crate::models::Expense;
use crate::store::{RecordStore, Snapshot};
use crate::Result;

use super::types::{Finding, InsightType};
use super::{
    BudgetAlertInsight, InvestmentReturnsInsight, SavingsRateInsight, SpendingTrendInsight,
    SubscriptionInsight, TopCategoryInsight,
};

/// Context provided to insight rules
pub struct AnalysisContext<'a> {
    /// Records to analyze
    pub snapshot: &'a Snapshot,
    /// The "current" month; its predecessor is the comparison month
    pub period: Period,
    pub thresholds: &'a InsightThresholds,
    pub currency: &'a CurrencyConfig,
}

impl<'a> AnalysisContext<'a> {
    pub fn new(snapshot: &'a Snapshot, period: Period, config: &'a FinhubConfig) -> Self {
        Self {
            snapshot,
            period,
            thresholds: &config.insights,
            currency: &config.currency,
        }
    }

    /// Expenses dated in the analysis month
    pub fn month_expenses(&self) -> Vec<&'a Expense> {
        filter_by_month(&self.snapshot.expenses, |e| e.date, self.period)
    }

    /// Expenses dated in the month before the analysis month
    pub fn previous_month_expenses(&self) -> Vec<&'a Expense> {
        filter_by_month(&self.snapshot.expenses, |e| e.date, self.period.previous())
    }

    /// Format an amount in the configured currency
    pub fn money(&self, amount: f64) -> String {
        format_currency(amount, &self.currency.symbol)
    }
}

/// An independent, pure insight rule
pub trait Insight: Send + Sync {
    /// Unique identifier for this rule
    fn id(&self) -> InsightType;

    /// Human-readable name
    fn name(&self) -> &'static str;

    /// Evaluate the rule; an untriggered rule returns no findings
    fn analyze(&self, ctx: &AnalysisContext<'_>) -> Result<Vec<Finding>>;
}

/// Runs registered rules in order and concatenates their findings
pub struct InsightEngine {
    insights: Vec<Box<dyn Insight>>,
}

impl Default for InsightEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl InsightEngine {
    /// Create an engine with the six built-in rules in display order
    pub fn new() -> Self {
        let mut engine = Self { insights: vec![] };

        engine.register(Box::new(SpendingTrendInsight::new()));
        engine.register(Box::new(TopCategoryInsight::new()));
        engine.register(Box::new(BudgetAlertInsight::new()));
        engine.register(Box::new(SavingsRateInsight::new()));
        engine.register(Box::new(InvestmentReturnsInsight::new()));
        engine.register(Box::new(SubscriptionInsight::new()));

        engine
    }

    /// Append a rule; it runs after every rule already registered
    pub fn register(&mut self, insight: Box<dyn Insight>) {
        self.insights.push(insight);
    }

    /// Run every rule and collect findings in rule order
    ///
    /// A rule that errors is logged and skipped.
    pub fn analyze_all(&self, ctx: &AnalysisContext<'_>) -> Vec<Finding> {
        let mut all_findings = vec![];

        for insight in &self.insights {
            match insight.analyze(ctx) {
                Ok(findings) => {
                    tracing::debug!(
                        insight = insight.id().as_str(),
                        count = findings.len(),
                        "Insight analysis complete"
                    );
                    all_findings.extend(findings);
                }
                Err(e) => {
                    tracing::warn!(
                        insight = insight.id().as_str(),
                        error = %e,
                        "Insight analysis failed"
                    );
                }
            }
        }

        all_findings
    }

    /// Fetch a fresh snapshot from `store` and analyze it
    pub fn run(
        &self,
        store: &dyn RecordStore,
        period: Period,
        config: &FinhubConfig,
    ) -> Vec<Finding> {
        let snapshot = Snapshot::fetch(store);
        let ctx = AnalysisContext::new(&snapshot, period, config);
        let findings = self.analyze_all(&ctx);
        tracing::info!(period = %period, findings = findings.len(), "Generated insights");
        findings
    }

    /// Registered rule types, in evaluation order
    pub fn insight_types(&self) -> Vec<InsightType> {
        self.insights.iter().map(|i| i.id()).collect()
    }
}
