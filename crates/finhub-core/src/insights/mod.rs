//! Insight Engine - rule-based advisory messages
//!
//! A fixed battery of independent rules runs over one [`Snapshot`] of records
//! and a reference month. Each rule is pure and contributes zero or more
//! findings; output keeps rule order.
//!
//! ## Built-in rules (in order)
//!
//! - **Spending Trend** - month-over-month spending change
//! - **Top Category** - where most of this month's money went
//! - **Budget Alert** - budgets above the alert threshold
//! - **Savings Rate** - all-time rate against the recommended band
//! - **Investment Returns** - combined portfolio gain or loss
//! - **Subscriptions** - recurring services in expense descriptions
//!
//! ## Usage
//!
//! ```rust,ignore
//! use finhub_core::insights::InsightEngine;
//!
//! let engine = InsightEngine::new();
//! let findings = engine.run(&db, Period::current(), &config);
//! ```
//!
//! [`Snapshot`]: crate::store::Snapshot

pub mod budget_alert;
pub mod engine;
pub mod investment_returns;
pub mod savings_rate;
pub mod spending_trend;
pub mod subscriptions;
pub mod top_category;
pub mod types;

pub use budget_alert::BudgetAlertInsight;
pub use engine::{AnalysisContext, Insight, InsightEngine};
pub use investment_returns::InvestmentReturnsInsight;
pub use savings_rate::SavingsRateInsight;
pub use spending_trend::SpendingTrendInsight;
pub use subscriptions::{looks_like_subscription, SubscriptionInsight};
pub use top_category::TopCategoryInsight;
pub use types::{Finding, InsightType, Severity};
