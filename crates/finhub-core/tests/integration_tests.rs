//! Integration tests for finhub-core
//!
//! These tests exercise the full record → snapshot → analytics/insights
//! workflow against a real database.

use chrono::NaiveDate;
use finhub_core::{
    analytics::{budget_report, dashboard, emi, BudgetState},
    db::Database,
    models::*,
    Error, FinhubConfig, InsightEngine, InsightType, Period, RecordStore, Result, Severity,
    Snapshot,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn add_expense(db: &Database, when: NaiveDate, category: ExpenseCategory, amount: f64, desc: &str) {
    db.insert_expense(&NewExpense {
        date: when,
        category,
        amount,
        payment_method: PaymentMethod::Upi,
        description: desc.to_string(),
        notes: None,
    })
    .expect("Failed to insert expense");
}

/// One household: salary in March, a February baseline, a tight food
/// budget, a stock gain, a streaming subscription and a home loan.
fn seeded_database() -> Database {
    let db = Database::in_memory().expect("Failed to create in-memory database");

    db.insert_income(&NewIncome {
        date: date(2024, 3, 1),
        amount: 100_000.0,
        source: IncomeSource::Salary,
        income_type: IncomeType::Regular,
        notes: None,
    })
    .unwrap();

    add_expense(&db, date(2024, 2, 10), ExpenseCategory::Food, 10_000.0, "Groceries");
    add_expense(&db, date(2024, 3, 5), ExpenseCategory::Food, 9_500.0, "Groceries");
    add_expense(&db, date(2024, 3, 8), ExpenseCategory::Entertainment, 649.0, "Netflix");
    add_expense(&db, date(2024, 3, 12), ExpenseCategory::Housing, 25_000.0, "Rent");

    db.insert_budget(&NewBudget {
        category: ExpenseCategory::Food,
        monthly_limit: 10_000.0,
        rollover_enabled: false,
        notes: None,
    })
    .unwrap();

    db.insert_investment(&NewInvestment {
        date: date(2023, 6, 1),
        investment_type: InvestmentType::Stocks,
        amount_invested: 50_000.0,
        current_value: 55_000.0,
        platform: "Zerodha".to_string(),
        notes: None,
    })
    .unwrap();

    db.insert_debt(&NewDebt {
        debt_type: DebtType::HomeLoan,
        lender: "HDFC".to_string(),
        interest_rate: 8.5,
        outstanding_amount: 2_000_000.0,
        monthly_emi: 20_000.0,
        due_date: 5,
    })
    .unwrap();

    db
}

fn march() -> Period {
    Period::new(2024, 3).unwrap()
}

// =============================================================================
// Insight Workflow
// =============================================================================

#[test]
fn test_every_rule_fires_in_order() {
    let db = seeded_database();
    let findings = InsightEngine::new().run(&db, march(), &FinhubConfig::default());

    let types: Vec<InsightType> = findings.iter().map(|f| f.insight_type).collect();
    assert_eq!(
        types,
        vec![
            InsightType::SpendingTrend,
            InsightType::TopCategory,
            InsightType::BudgetAlert,
            InsightType::SavingsRate,
            InsightType::InvestmentReturns,
            InsightType::Subscriptions,
        ]
    );

    assert_eq!(findings[0].severity, Severity::Warning);
    assert_eq!(findings[1].title, "Highest Spending: Housing");
    assert_eq!(findings[2].title, "Food Budget Alert");
    assert_eq!(findings[3].title, "Excellent Savings Rate!");
    assert_eq!(findings[4].title, "Investment Returns: +10.00%");
    assert_eq!(
        findings[5].description,
        "You're spending ₹649 on subscriptions this month."
    );
}

#[test]
fn test_empty_database_warns_about_savings_rate() {
    let db = Database::in_memory().unwrap();
    let findings = InsightEngine::new().run(&db, march(), &FinhubConfig::default());
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].insight_type, InsightType::SavingsRate);
    assert_eq!(findings[0].severity, Severity::Warning);
    assert_eq!(findings[0].title, "Low Savings Rate");
}

#[test]
fn test_month_without_activity_keeps_all_time_rules() {
    let db = seeded_database();
    // Nothing was recorded in May; only the all-time rules have anything to say
    let may = Period::new(2024, 5).unwrap();
    let findings = InsightEngine::new().run(&db, may, &FinhubConfig::default());

    let types: Vec<InsightType> = findings.iter().map(|f| f.insight_type).collect();
    assert_eq!(
        types,
        vec![InsightType::SavingsRate, InsightType::InvestmentReturns]
    );
}

#[test]
fn test_same_month_of_another_year_is_not_mixed_in() {
    let db = seeded_database();
    add_expense(&db, date(2023, 3, 15), ExpenseCategory::Shopping, 90_000.0, "Laptop");

    let findings = InsightEngine::new().run(&db, march(), &FinhubConfig::default());
    let top = findings
        .iter()
        .find(|f| f.insight_type == InsightType::TopCategory)
        .unwrap();
    assert_eq!(top.title, "Highest Spending: Housing");
}

/// A store whose reads all fail
struct UnavailableStore;

impl RecordStore for UnavailableStore {
    fn list_expenses(&self) -> Result<Vec<Expense>> {
        Err(Error::NotFound("store offline".into()))
    }
    fn list_income(&self) -> Result<Vec<Income>> {
        Err(Error::NotFound("store offline".into()))
    }
    fn list_budgets(&self) -> Result<Vec<Budget>> {
        Err(Error::NotFound("store offline".into()))
    }
    fn list_goals(&self) -> Result<Vec<SavingsGoal>> {
        Err(Error::NotFound("store offline".into()))
    }
    fn list_investments(&self) -> Result<Vec<Investment>> {
        Err(Error::NotFound("store offline".into()))
    }
    fn list_debts(&self) -> Result<Vec<Debt>> {
        Err(Error::NotFound("store offline".into()))
    }
    fn insert_expense(&self, _: &NewExpense) -> Result<Expense> {
        Err(Error::InvalidData("read-only".into()))
    }
    fn insert_income(&self, _: &NewIncome) -> Result<Income> {
        Err(Error::InvalidData("read-only".into()))
    }
    fn insert_budget(&self, _: &NewBudget) -> Result<Budget> {
        Err(Error::InvalidData("read-only".into()))
    }
    fn insert_goal(&self, _: &NewSavingsGoal) -> Result<SavingsGoal> {
        Err(Error::InvalidData("read-only".into()))
    }
    fn insert_investment(&self, _: &NewInvestment) -> Result<Investment> {
        Err(Error::InvalidData("read-only".into()))
    }
    fn insert_debt(&self, _: &NewDebt) -> Result<Debt> {
        Err(Error::InvalidData("read-only".into()))
    }
    fn delete(&self, _: EntityKind, _: i64) -> Result<()> {
        Err(Error::InvalidData("read-only".into()))
    }
}

#[test]
fn test_unavailable_store_degrades_to_empty() {
    let snapshot = Snapshot::fetch(&UnavailableStore);
    assert!(snapshot.is_empty());

    // Same result as an empty database
    let findings = InsightEngine::new().run(&UnavailableStore, march(), &FinhubConfig::default());
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].insight_type, InsightType::SavingsRate);
}

// =============================================================================
// Analytics Workflow
// =============================================================================

#[test]
fn test_dashboard_from_database() {
    let db = seeded_database();
    let snapshot = Snapshot::fetch(&db);
    let view = dashboard(&snapshot, march());

    assert_eq!(view.stats.total_income, 100_000.0);
    assert_eq!(view.stats.total_expenses, 45_149.0);
    assert_eq!(view.stats.net_savings, 54_851.0);
    assert_eq!(view.stats.total_investments, 55_000.0);
    assert_eq!(view.stats.net_worth, -1_945_000.0);
    assert_eq!(view.month_income, 100_000.0);
    assert_eq!(view.month_expenses, 35_149.0);
    assert_eq!(view.expenses_by_category.get(ExpenseCategory::Food), Some(19_500.0));
}

#[test]
fn test_budget_status_from_database() {
    let db = seeded_database();
    let snapshot = Snapshot::fetch(&db);
    let report = budget_report(&snapshot.budgets, &snapshot.expenses, march(), 80.0);

    assert_eq!(report.items.len(), 1);
    assert_eq!(report.items[0].spent, 9_500.0);
    assert_eq!(report.items[0].state, BudgetState::Warning);
}

#[test]
fn test_emi_for_seeded_loan_terms() {
    assert_eq!(emi(5_000_000.0, 8.5, 240).unwrap(), 43_391.0);
}

// =============================================================================
// Backup Workflow
// =============================================================================

#[test]
fn test_backup_restore_yields_same_insights() {
    let source = seeded_database();
    let backup = source.export_full_backup().unwrap();
    assert_eq!(backup.metadata.total_records, 8);

    let target = Database::in_memory().unwrap();
    target.import_full_backup(&backup, false).unwrap();

    let config = FinhubConfig::default();
    let engine = InsightEngine::new();
    let before = engine.run(&source, march(), &config);
    let after = engine.run(&target, march(), &config);
    assert_eq!(before, after);

    // Restored ids keep counting from where the backup left off
    add_expense(&target, date(2024, 3, 20), ExpenseCategory::Food, 100.0, "Snacks");
    let newest = target.list_expenses().unwrap();
    assert_eq!(newest[0].id, 5);
}
