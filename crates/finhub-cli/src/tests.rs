//! CLI command tests
//!
//! This module contains all tests for the CLI commands.

use chrono::NaiveDate;
use clap::Parser;
use finhub_core::db::Database;
use finhub_core::models::*;
use finhub_core::{FinhubConfig, Period};

use crate::cli::{BudgetsAction, Cli, Commands, ExpensesAction, ExportTarget};
use crate::commands::{self, truncate};

fn setup_test_db() -> Database {
    Database::in_memory().unwrap()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn new_expense(amount: f64, category: ExpenseCategory, description: &str) -> NewExpense {
    NewExpense {
        date: date(2024, 3, 10),
        category,
        amount,
        payment_method: PaymentMethod::Upi,
        description: description.to_string(),
        notes: None,
    }
}

fn seed(db: &Database) {
    db.insert_expense(&new_expense(9_500.0, ExpenseCategory::Food, "Groceries"))
        .unwrap();
    db.insert_expense(&new_expense(649.0, ExpenseCategory::Entertainment, "Netflix"))
        .unwrap();
    db.insert_income(&NewIncome {
        date: date(2024, 3, 1),
        amount: 80_000.0,
        source: IncomeSource::Salary,
        income_type: IncomeType::Regular,
        notes: None,
    })
    .unwrap();
    db.insert_budget(&NewBudget {
        category: ExpenseCategory::Food,
        monthly_limit: 10_000.0,
        rollover_enabled: false,
        notes: None,
    })
    .unwrap();
}

// ========== Argument Parsing Tests ==========

#[test]
fn test_parse_expense_add() {
    let cli = Cli::try_parse_from([
        "finhub",
        "expenses",
        "add",
        "--amount",
        "450",
        "--category",
        "food",
        "--description",
        "Lunch",
        "--payment-method",
        "credit card",
    ])
    .unwrap();

    match cli.command {
        Commands::Expenses {
            action:
                Some(ExpensesAction::Add {
                    amount,
                    category,
                    payment_method,
                    date,
                    ..
                }),
        } => {
            assert_eq!(amount, 450.0);
            assert_eq!(category, ExpenseCategory::Food);
            assert_eq!(payment_method, PaymentMethod::CreditCard);
            assert!(date.is_none());
        }
        _ => panic!("expected expenses add"),
    }
}

#[test]
fn test_parse_unknown_category_fails() {
    let result = Cli::try_parse_from([
        "finhub", "expenses", "add", "-a", "10", "-c", "Pets", "-d", "Food",
    ]);
    assert!(result.is_err());
}

#[test]
fn test_parse_month_argument() {
    let cli = Cli::try_parse_from(["finhub", "budgets", "status", "--month", "2024-02"]).unwrap();
    match cli.command {
        Commands::Budgets {
            action: Some(BudgetsAction::Status { month }),
        } => assert_eq!(month, Some(Period::new(2024, 2).unwrap())),
        _ => panic!("expected budgets status"),
    }

    assert!(Cli::try_parse_from(["finhub", "insights", "--month", "2024-13"]).is_err());
}

#[test]
fn test_parse_export_target() {
    let cli = Cli::try_parse_from(["finhub", "export", "--entity", "goals"]).unwrap();
    match cli.command {
        Commands::Export { entity, output } => {
            assert_eq!(entity, ExportTarget::One(EntityKind::Goals));
            assert!(output.is_none());
        }
        _ => panic!("expected export"),
    }

    let cli = Cli::try_parse_from(["finhub", "export"]).unwrap();
    assert!(matches!(
        cli.command,
        Commands::Export {
            entity: ExportTarget::All,
            ..
        }
    ));

    assert!(Cli::try_parse_from(["finhub", "export", "--entity", "transactions"]).is_err());
}

#[test]
fn test_default_db_path() {
    // FINHUB_DB may be set in the environment; only check when it isn't
    if std::env::var("FINHUB_DB").is_err() {
        let cli = Cli::try_parse_from(["finhub", "status"]).unwrap();
        assert_eq!(cli.db, std::path::PathBuf::from("finhub.db"));
    }
}

// ========== Record Command Tests ==========

#[test]
fn test_cmd_expenses_add_and_list() {
    let db = setup_test_db();
    let config = FinhubConfig::default();

    let result = commands::cmd_expenses_add(
        &db,
        &config,
        new_expense(450.0, ExpenseCategory::Food, "Lunch"),
    );
    assert!(result.is_ok());
    assert_eq!(db.list_expenses().unwrap().len(), 1);

    assert!(commands::cmd_expenses_list(&db, &config, None, None).is_ok());
    assert!(
        commands::cmd_expenses_list(&db, &config, Some(ExpenseCategory::Food), Some("lun")).is_ok()
    );
}

#[test]
fn test_cmd_expenses_add_invalid() {
    let db = setup_test_db();
    let result = commands::cmd_expenses_add(
        &db,
        &FinhubConfig::default(),
        new_expense(-5.0, ExpenseCategory::Food, "Refund"),
    );
    assert!(result.is_err());
    assert!(db.list_expenses().unwrap().is_empty());
}

#[test]
fn test_cmd_expenses_list_empty() {
    let db = setup_test_db();
    let result = commands::cmd_expenses_list(&db, &FinhubConfig::default(), None, None);
    assert!(result.is_ok());
}

#[test]
fn test_cmd_income_add_and_list() {
    let db = setup_test_db();
    let config = FinhubConfig::default();

    let result = commands::cmd_income_add(
        &db,
        &config,
        NewIncome {
            date: date(2024, 3, 1),
            amount: 12_000.0,
            source: IncomeSource::Freelance,
            income_type: IncomeType::OneTime,
            notes: Some("Logo design".to_string()),
        },
    );
    assert!(result.is_ok());

    let income = db.list_income().unwrap();
    assert_eq!(income.len(), 1);
    assert_eq!(income[0].source, IncomeSource::Freelance);
    assert!(commands::cmd_income_list(&db, &config).is_ok());
}

#[test]
fn test_cmd_budgets_add_duplicate() {
    let db = setup_test_db();
    let config = FinhubConfig::default();
    let budget = NewBudget {
        category: ExpenseCategory::Shopping,
        monthly_limit: 5_000.0,
        rollover_enabled: false,
        notes: None,
    };

    assert!(commands::cmd_budgets_add(&db, &config, budget.clone()).is_ok());
    let result = commands::cmd_budgets_add(&db, &config, budget);
    assert!(result.is_err());
    assert!(format!("{:#}", result.unwrap_err()).contains("already exists"));
}

#[test]
fn test_cmd_budgets_status() {
    let db = setup_test_db();
    seed(&db);
    let config = FinhubConfig::default();

    assert!(commands::cmd_budgets_list(&db, &config).is_ok());
    let result = commands::cmd_budgets_status(&db, &config, Some(Period::new(2024, 3).unwrap()));
    assert!(result.is_ok());
}

#[test]
fn test_cmd_goals_add_and_list() {
    let db = setup_test_db();
    let config = FinhubConfig::default();

    let result = commands::cmd_goals_add(
        &db,
        &config,
        NewSavingsGoal {
            name: "Emergency Fund".to_string(),
            target_amount: 300_000.0,
            current_amount: 50_000.0,
            monthly_contribution: 10_000.0,
            target_date: date(2030, 1, 1),
        },
    );
    assert!(result.is_ok());
    assert_eq!(db.list_goals().unwrap()[0].name, "Emergency Fund");
    assert!(commands::cmd_goals_list(&db, &config).is_ok());
}

#[test]
fn test_cmd_investments_and_debts() {
    let db = setup_test_db();
    let config = FinhubConfig::default();

    let result = commands::cmd_investments_add(
        &db,
        &config,
        NewInvestment {
            date: date(2024, 1, 15),
            investment_type: InvestmentType::MutualFund,
            amount_invested: 25_000.0,
            current_value: 27_500.0,
            platform: "Groww".to_string(),
            notes: None,
        },
    );
    assert!(result.is_ok());
    assert!(commands::cmd_investments_list(&db, &config).is_ok());

    let result = commands::cmd_debts_add(
        &db,
        &config,
        NewDebt {
            debt_type: DebtType::CreditCard,
            lender: "ICICI".to_string(),
            interest_rate: 36.0,
            outstanding_amount: 40_000.0,
            monthly_emi: 5_000.0,
            due_date: 15,
        },
    );
    assert!(result.is_ok());
    assert!(commands::cmd_debts_list(&db, &config).is_ok());
}

#[test]
fn test_cmd_debts_add_invalid_due_day() {
    let db = setup_test_db();
    let result = commands::cmd_debts_add(
        &db,
        &FinhubConfig::default(),
        NewDebt {
            debt_type: DebtType::PersonalLoan,
            lender: "Bajaj".to_string(),
            interest_rate: 14.0,
            outstanding_amount: 100_000.0,
            monthly_emi: 4_000.0,
            due_date: 32,
        },
    );
    assert!(result.is_err());
}

#[test]
fn test_cmd_delete() {
    let db = setup_test_db();
    seed(&db);
    let id = db.list_expenses().unwrap()[0].id;

    assert!(commands::cmd_delete(&db, EntityKind::Expenses, id).is_ok());
    assert_eq!(db.list_expenses().unwrap().len(), 1);
}

#[test]
fn test_cmd_delete_not_found() {
    let db = setup_test_db();
    let result = commands::cmd_delete(&db, EntityKind::Debts, 999);
    assert!(result.is_err());
    assert!(format!("{:#}", result.unwrap_err()).contains("not found"));
}

// ========== Analysis Command Tests ==========

#[test]
fn test_cmd_dashboard() {
    let db = setup_test_db();
    let config = FinhubConfig::default();
    assert!(commands::cmd_dashboard(&db, &config, None).is_ok());

    seed(&db);
    let result = commands::cmd_dashboard(&db, &config, Some(Period::new(2024, 3).unwrap()));
    assert!(result.is_ok());
}

#[test]
fn test_cmd_insights() {
    let db = setup_test_db();
    seed(&db);
    let config = FinhubConfig::default();
    let march = Some(Period::new(2024, 3).unwrap());

    assert!(commands::cmd_insights(&db, &config, march, false).is_ok());
    assert!(commands::cmd_insights(&db, &config, march, true).is_ok());
}

#[test]
fn test_cmd_emi() {
    let config = FinhubConfig::default();
    assert!(commands::cmd_emi(100_000.0, 12.0, 12, &config).is_ok());
    assert!(commands::cmd_emi(100_000.0, 12.0, 0, &config).is_err());
}

#[test]
fn test_resolve_period_prefers_argument() {
    let feb = Period::new(2024, 2).unwrap();
    assert_eq!(commands::resolve_period(Some(feb)), feb);
    assert_eq!(
        commands::resolve_period(None),
        Period::containing(commands::today())
    );
}

// ========== Database Lifecycle Tests ==========

#[test]
fn test_cmd_init() {
    use tempfile::tempdir;

    let dir = tempdir().unwrap();
    let db_path = dir.path().join("finhub.db");

    assert!(commands::cmd_init(&db_path).is_ok());
    assert!(db_path.exists());
    // Re-running init on an existing database is harmless
    assert!(commands::cmd_init(&db_path).is_ok());
}

#[test]
fn test_cmd_status() {
    use tempfile::tempdir;

    let dir = tempdir().unwrap();
    let db_path = dir.path().join("status.db");

    // Missing database is reported, not an error
    assert!(commands::cmd_status(&db_path).is_ok());

    commands::cmd_init(&db_path).unwrap();
    assert!(commands::cmd_status(&db_path).is_ok());
}

#[test]
fn test_cmd_reset() {
    use tempfile::tempdir;

    let dir = tempdir().unwrap();
    let db_path = dir.path().join("reset.db");
    let db = commands::open_db(&db_path).unwrap();
    seed(&db);

    assert!(commands::cmd_reset(&db_path, true).is_ok());
    assert_eq!(db.record_counts().unwrap().total(), 0);
}

#[test]
fn test_cmd_reset_missing_db() {
    use tempfile::tempdir;

    let dir = tempdir().unwrap();
    let result = commands::cmd_reset(&dir.path().join("nope.db"), true);
    assert!(result.is_err());
}

// ========== Export Tests ==========

#[test]
fn test_cmd_export_csv() {
    use tempfile::tempdir;

    let dir = tempdir().unwrap();
    let output_path = dir.path().join("expenses.csv");

    let db = setup_test_db();
    seed(&db);

    let result = commands::cmd_export_csv(&db, EntityKind::Expenses, Some(output_path.as_path()));
    assert!(result.is_ok());

    let contents = std::fs::read_to_string(&output_path).unwrap();
    assert!(contents.starts_with("id,date,category,amount"));
    assert!(contents.contains("Netflix"));
}

#[test]
fn test_cmd_export_csv_empty_table() {
    use tempfile::tempdir;

    let dir = tempdir().unwrap();
    let output_path = dir.path().join("debts.csv");

    let db = setup_test_db();
    assert!(commands::cmd_export_csv(&db, EntityKind::Debts, Some(output_path.as_path())).is_ok());
    assert!(!output_path.exists());
}

#[test]
fn test_cmd_export_all_to_directory() {
    use tempfile::tempdir;

    let dir = tempdir().unwrap();
    let out = dir.path().join("csv");

    let db = setup_test_db();
    seed(&db);

    assert!(commands::cmd_export_all(&db, Some(out.as_path())).is_ok());
    assert!(out.join("expenses.csv").exists());
    assert!(out.join("income.csv").exists());
    assert!(out.join("budgets.csv").exists());
    // Empty tables produce no file
    assert!(!out.join("goals.csv").exists());
}

#[test]
fn test_cmd_backup() {
    use tempfile::tempdir;

    let dir = tempdir().unwrap();
    let output_path = dir.path().join("backup.json");

    let db = setup_test_db();
    seed(&db);

    let result = commands::cmd_backup(&db, &output_path);
    assert!(result.is_ok());

    let contents = std::fs::read_to_string(&output_path).unwrap();
    let backup: finhub_core::FullBackup = serde_json::from_str(&contents).unwrap();
    assert!(!backup.metadata.version.is_empty());
    assert_eq!(backup.metadata.total_records, 4);

    // Refuses to overwrite
    assert!(commands::cmd_backup(&db, &output_path).is_err());
}

#[test]
fn test_backup_restore_round_trip() {
    use tempfile::tempdir;

    let dir = tempdir().unwrap();
    let backup_path = dir.path().join("backup.json");
    let restored_path = dir.path().join("restored.db");

    let db = setup_test_db();
    seed(&db);
    commands::cmd_backup(&db, &backup_path).unwrap();

    let result = commands::cmd_restore(&restored_path, &backup_path, false, true);
    assert!(result.is_ok());

    let restored = commands::open_db(&restored_path).unwrap();
    assert_eq!(restored.list_expenses().unwrap(), db.list_expenses().unwrap());
    assert_eq!(restored.list_budgets().unwrap(), db.list_budgets().unwrap());

    // A second import without --clear is refused
    assert!(commands::cmd_restore(&restored_path, &backup_path, false, true).is_err());
    assert!(commands::cmd_restore(&restored_path, &backup_path, true, true).is_ok());
    assert_eq!(restored.record_counts().unwrap().total(), 4);
}

#[test]
fn test_cmd_restore_missing_file() {
    use tempfile::tempdir;

    let dir = tempdir().unwrap();
    let result = commands::cmd_restore(
        &dir.path().join("db.db"),
        &dir.path().join("missing.json"),
        false,
        true,
    );
    assert!(result.is_err());
}

// ========== Utility Tests ==========

#[test]
fn test_truncate() {
    assert_eq!(truncate("short", 10), "short");
    assert_eq!(truncate("a long grocery description", 10), "a long ...");
    assert_eq!(truncate("₹₹₹₹₹₹", 5), "₹₹...");
}
