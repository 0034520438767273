//! Domain models for FinHub
//!
//! Records are immutable once fetched. Each `New*` type is the insert shape
//! and is validated at the store boundary via `validate()`.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Normalize a user-supplied choice for comparison ("Credit_Card" == "credit card")
fn normalize_choice(s: &str) -> String {
    s.trim().to_lowercase().replace(['_', '-'], " ")
}

fn parse_choice<T: Copy>(s: &str, all: &[T], name: fn(&T) -> &'static str) -> Option<T> {
    let wanted = normalize_choice(s);
    all.iter().copied().find(|v| normalize_choice(name(v)) == wanted)
}

/// Deserialize through `FromStr`, so JSON accepts the same spellings as the CLI
macro_rules! deserialize_via_from_str {
    ($($ty:ty),* $(,)?) => {
        $(
            impl TryFrom<String> for $ty {
                type Error = String;

                fn try_from(s: String) -> std::result::Result<Self, Self::Error> {
                    s.parse()
                }
            }
        )*
    };
}

deserialize_via_from_str!(
    ExpenseCategory,
    PaymentMethod,
    IncomeSource,
    IncomeType,
    InvestmentType,
    DebtType,
);

/// Expense categories (also the budget categories)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum ExpenseCategory {
    Housing,
    Food,
    Transportation,
    Utilities,
    Entertainment,
    Healthcare,
    Shopping,
    Education,
    Insurance,
    Miscellaneous,
}

impl ExpenseCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Housing => "Housing",
            Self::Food => "Food",
            Self::Transportation => "Transportation",
            Self::Utilities => "Utilities",
            Self::Entertainment => "Entertainment",
            Self::Healthcare => "Healthcare",
            Self::Shopping => "Shopping",
            Self::Education => "Education",
            Self::Insurance => "Insurance",
            Self::Miscellaneous => "Miscellaneous",
        }
    }

    pub fn all() -> &'static [ExpenseCategory] {
        &[
            Self::Housing,
            Self::Food,
            Self::Transportation,
            Self::Utilities,
            Self::Entertainment,
            Self::Healthcare,
            Self::Shopping,
            Self::Education,
            Self::Insurance,
            Self::Miscellaneous,
        ]
    }
}

impl std::str::FromStr for ExpenseCategory {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        parse_choice(s, Self::all(), Self::as_str)
            .ok_or_else(|| format!("Unknown expense category: {}", s))
    }
}

impl std::fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How an expense was paid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum PaymentMethod {
    Cash,
    #[serde(rename = "UPI")]
    Upi,
    #[serde(rename = "Credit Card")]
    CreditCard,
    #[serde(rename = "Debit Card")]
    DebitCard,
    #[serde(rename = "Net Banking")]
    NetBanking,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cash => "Cash",
            Self::Upi => "UPI",
            Self::CreditCard => "Credit Card",
            Self::DebitCard => "Debit Card",
            Self::NetBanking => "Net Banking",
        }
    }

    pub fn all() -> &'static [PaymentMethod] {
        &[
            Self::Cash,
            Self::Upi,
            Self::CreditCard,
            Self::DebitCard,
            Self::NetBanking,
        ]
    }
}

impl std::str::FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        parse_choice(s, Self::all(), Self::as_str)
            .ok_or_else(|| format!("Unknown payment method: {}", s))
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Where income came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum IncomeSource {
    Salary,
    Freelance,
    Business,
    #[serde(rename = "Investment Returns")]
    InvestmentReturns,
    Gift,
    Other,
}

impl IncomeSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Salary => "Salary",
            Self::Freelance => "Freelance",
            Self::Business => "Business",
            Self::InvestmentReturns => "Investment Returns",
            Self::Gift => "Gift",
            Self::Other => "Other",
        }
    }

    pub fn all() -> &'static [IncomeSource] {
        &[
            Self::Salary,
            Self::Freelance,
            Self::Business,
            Self::InvestmentReturns,
            Self::Gift,
            Self::Other,
        ]
    }
}

impl std::str::FromStr for IncomeSource {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        parse_choice(s, Self::all(), Self::as_str)
            .ok_or_else(|| format!("Unknown income source: {}", s))
    }
}

impl std::fmt::Display for IncomeSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Regularity of an income entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum IncomeType {
    Regular,
    Bonus,
    #[serde(rename = "One-time")]
    OneTime,
}

impl IncomeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Regular => "Regular",
            Self::Bonus => "Bonus",
            Self::OneTime => "One-time",
        }
    }

    pub fn all() -> &'static [IncomeType] {
        &[Self::Regular, Self::Bonus, Self::OneTime]
    }
}

impl std::str::FromStr for IncomeType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        parse_choice(s, Self::all(), Self::as_str)
            .ok_or_else(|| format!("Unknown income type: {}", s))
    }
}

impl std::fmt::Display for IncomeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Asset class of an investment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum InvestmentType {
    #[serde(rename = "Mutual Fund")]
    MutualFund,
    Stocks,
    #[serde(rename = "Index Fund")]
    IndexFund,
    #[serde(rename = "Fixed Deposit")]
    FixedDeposit,
    #[serde(rename = "PPF")]
    Ppf,
    #[serde(rename = "NPS")]
    Nps,
    Crypto,
    Gold,
    #[serde(rename = "Real Estate")]
    RealEstate,
}

impl InvestmentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MutualFund => "Mutual Fund",
            Self::Stocks => "Stocks",
            Self::IndexFund => "Index Fund",
            Self::FixedDeposit => "Fixed Deposit",
            Self::Ppf => "PPF",
            Self::Nps => "NPS",
            Self::Crypto => "Crypto",
            Self::Gold => "Gold",
            Self::RealEstate => "Real Estate",
        }
    }

    pub fn all() -> &'static [InvestmentType] {
        &[
            Self::MutualFund,
            Self::Stocks,
            Self::IndexFund,
            Self::FixedDeposit,
            Self::Ppf,
            Self::Nps,
            Self::Crypto,
            Self::Gold,
            Self::RealEstate,
        ]
    }
}

impl std::str::FromStr for InvestmentType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        parse_choice(s, Self::all(), Self::as_str)
            .ok_or_else(|| format!("Unknown investment type: {}", s))
    }
}

impl std::fmt::Display for InvestmentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Kind of loan or credit line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum DebtType {
    #[serde(rename = "Credit Card")]
    CreditCard,
    #[serde(rename = "Personal Loan")]
    PersonalLoan,
    #[serde(rename = "Home Loan")]
    HomeLoan,
    #[serde(rename = "Car Loan")]
    CarLoan,
    #[serde(rename = "Education Loan")]
    EducationLoan,
    Other,
}

impl DebtType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CreditCard => "Credit Card",
            Self::PersonalLoan => "Personal Loan",
            Self::HomeLoan => "Home Loan",
            Self::CarLoan => "Car Loan",
            Self::EducationLoan => "Education Loan",
            Self::Other => "Other",
        }
    }

    pub fn all() -> &'static [DebtType] {
        &[
            Self::CreditCard,
            Self::PersonalLoan,
            Self::HomeLoan,
            Self::CarLoan,
            Self::EducationLoan,
            Self::Other,
        ]
    }
}

impl std::str::FromStr for DebtType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        parse_choice(s, Self::all(), Self::as_str)
            .ok_or_else(|| format!("Unknown debt type: {}", s))
    }
}

impl std::fmt::Display for DebtType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The six record tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Expenses,
    Income,
    Budgets,
    Goals,
    Investments,
    Debts,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Expenses => "expenses",
            Self::Income => "income",
            Self::Budgets => "budgets",
            Self::Goals => "goals",
            Self::Investments => "investments",
            Self::Debts => "debts",
        }
    }

    /// Backing SQLite table
    pub fn table(&self) -> &'static str {
        match self {
            Self::Goals => "savings_goals",
            other => other.as_str(),
        }
    }

    pub fn all() -> &'static [EntityKind] {
        &[
            Self::Expenses,
            Self::Income,
            Self::Budgets,
            Self::Goals,
            Self::Investments,
            Self::Debts,
        ]
    }
}

impl std::str::FromStr for EntityKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "expenses" | "expense" => Ok(Self::Expenses),
            "income" | "incomes" => Ok(Self::Income),
            "budgets" | "budget" => Ok(Self::Budgets),
            "goals" | "goal" | "savings_goals" => Ok(Self::Goals),
            "investments" | "investment" => Ok(Self::Investments),
            "debts" | "debt" => Ok(Self::Debts),
            _ => Err(format!("Unknown entity: {}", s)),
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ========== Records ==========

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: i64,
    pub date: NaiveDate,
    pub category: ExpenseCategory,
    pub amount: f64,
    pub payment_method: PaymentMethod,
    pub description: String,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewExpense {
    pub date: NaiveDate,
    pub category: ExpenseCategory,
    pub amount: f64,
    pub payment_method: PaymentMethod,
    pub description: String,
    #[serde(default)]
    pub notes: Option<String>,
}

impl NewExpense {
    pub fn validate(&self) -> Result<()> {
        ensure_non_negative("amount", self.amount)?;
        ensure_non_empty("description", &self.description)
    }
}

/// A recorded income entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Income {
    pub id: i64,
    pub date: NaiveDate,
    pub amount: f64,
    pub source: IncomeSource,
    #[serde(rename = "type")]
    pub income_type: IncomeType,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewIncome {
    pub date: NaiveDate,
    pub amount: f64,
    pub source: IncomeSource,
    #[serde(rename = "type")]
    pub income_type: IncomeType,
    #[serde(default)]
    pub notes: Option<String>,
}

impl NewIncome {
    pub fn validate(&self) -> Result<()> {
        ensure_non_negative("amount", self.amount)
    }
}

/// A monthly spending limit for one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    pub id: i64,
    pub category: ExpenseCategory,
    pub monthly_limit: f64,
    pub rollover_enabled: bool,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewBudget {
    pub category: ExpenseCategory,
    pub monthly_limit: f64,
    #[serde(default)]
    pub rollover_enabled: bool,
    #[serde(default)]
    pub notes: Option<String>,
}

impl NewBudget {
    pub fn validate(&self) -> Result<()> {
        ensure_positive("monthly_limit", self.monthly_limit)
    }
}

/// A savings target with a deadline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsGoal {
    pub id: i64,
    pub name: String,
    pub target_amount: f64,
    /// May exceed `target_amount`; overshooting a goal is allowed
    pub current_amount: f64,
    pub monthly_contribution: f64,
    pub target_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewSavingsGoal {
    pub name: String,
    pub target_amount: f64,
    #[serde(default)]
    pub current_amount: f64,
    #[serde(default)]
    pub monthly_contribution: f64,
    pub target_date: NaiveDate,
}

impl NewSavingsGoal {
    pub fn validate(&self) -> Result<()> {
        ensure_non_empty("name", &self.name)?;
        ensure_positive("target_amount", self.target_amount)?;
        ensure_non_negative("current_amount", self.current_amount)?;
        ensure_non_negative("monthly_contribution", self.monthly_contribution)
    }
}

/// A holding with its cost basis and current valuation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Investment {
    pub id: i64,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub investment_type: InvestmentType,
    pub amount_invested: f64,
    pub current_value: f64,
    pub platform: String,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewInvestment {
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub investment_type: InvestmentType,
    pub amount_invested: f64,
    pub current_value: f64,
    #[serde(default)]
    pub platform: String,
    #[serde(default)]
    pub notes: Option<String>,
}

impl NewInvestment {
    pub fn validate(&self) -> Result<()> {
        ensure_positive("amount_invested", self.amount_invested)?;
        ensure_non_negative("current_value", self.current_value)
    }
}

/// An outstanding loan or credit balance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Debt {
    pub id: i64,
    #[serde(rename = "type")]
    pub debt_type: DebtType,
    pub lender: String,
    /// Annual percentage rate
    pub interest_rate: f64,
    pub outstanding_amount: f64,
    pub monthly_emi: f64,
    /// Day of month the installment is due (1-31)
    pub due_date: u8,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewDebt {
    #[serde(rename = "type")]
    pub debt_type: DebtType,
    pub lender: String,
    pub interest_rate: f64,
    pub outstanding_amount: f64,
    #[serde(default)]
    pub monthly_emi: f64,
    pub due_date: u8,
}

impl NewDebt {
    pub fn validate(&self) -> Result<()> {
        ensure_non_empty("lender", &self.lender)?;
        ensure_non_negative("interest_rate", self.interest_rate)?;
        ensure_non_negative("outstanding_amount", self.outstanding_amount)?;
        ensure_non_negative("monthly_emi", self.monthly_emi)?;
        if !(1..=31).contains(&self.due_date) {
            return Err(Error::InvalidData(format!(
                "due_date must be a day of month (1-31), got {}",
                self.due_date
            )));
        }
        Ok(())
    }
}

fn ensure_non_negative(field: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(Error::InvalidData(format!(
            "{} must be a non-negative number, got {}",
            field, value
        )));
    }
    Ok(())
}

fn ensure_positive(field: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(Error::InvalidData(format!(
            "{} must be greater than zero, got {}",
            field, value
        )));
    }
    Ok(())
}

fn ensure_non_empty(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::InvalidData(format!("{} must not be empty", field)));
    }
    Ok(())
}

/// Insert shape of a stored record, used to re-validate restored backups
impl From<&Expense> for NewExpense {
    fn from(e: &Expense) -> Self {
        Self {
            date: e.date,
            category: e.category,
            amount: e.amount,
            payment_method: e.payment_method,
            description: e.description.clone(),
            notes: e.notes.clone(),
        }
    }
}

impl From<&Income> for NewIncome {
    fn from(i: &Income) -> Self {
        Self {
            date: i.date,
            amount: i.amount,
            source: i.source,
            income_type: i.income_type,
            notes: i.notes.clone(),
        }
    }
}

impl From<&Budget> for NewBudget {
    fn from(b: &Budget) -> Self {
        Self {
            category: b.category,
            monthly_limit: b.monthly_limit,
            rollover_enabled: b.rollover_enabled,
            notes: b.notes.clone(),
        }
    }
}

impl From<&SavingsGoal> for NewSavingsGoal {
    fn from(g: &SavingsGoal) -> Self {
        Self {
            name: g.name.clone(),
            target_amount: g.target_amount,
            current_amount: g.current_amount,
            monthly_contribution: g.monthly_contribution,
            target_date: g.target_date,
        }
    }
}

impl From<&Investment> for NewInvestment {
    fn from(i: &Investment) -> Self {
        Self {
            date: i.date,
            investment_type: i.investment_type,
            amount_invested: i.amount_invested,
            current_value: i.current_value,
            platform: i.platform.clone(),
            notes: i.notes.clone(),
        }
    }
}

impl From<&Debt> for NewDebt {
    fn from(d: &Debt) -> Self {
        Self {
            debt_type: d.debt_type,
            lender: d.lender.clone(),
            interest_rate: d.interest_rate,
            outstanding_amount: d.outstanding_amount,
            monthly_emi: d.monthly_emi,
            due_date: d.due_date,
        }
    }
}

/// Row counts per table (for `finhub status`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecordCounts {
    pub expenses: i64,
    pub income: i64,
    pub budgets: i64,
    pub goals: i64,
    pub investments: i64,
    pub debts: i64,
}

impl RecordCounts {
    pub fn total(&self) -> i64 {
        self.expenses + self.income + self.budgets + self.goals + self.investments + self.debts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_parse_display_and_snake_case() {
        assert_eq!(
            PaymentMethod::from_str("Credit Card").unwrap(),
            PaymentMethod::CreditCard
        );
        assert_eq!(
            PaymentMethod::from_str("credit_card").unwrap(),
            PaymentMethod::CreditCard
        );
        assert_eq!(IncomeType::from_str("one-time").unwrap(), IncomeType::OneTime);
        assert_eq!(IncomeType::from_str("ONE_TIME").unwrap(), IncomeType::OneTime);
        assert_eq!(
            ExpenseCategory::from_str(" food ").unwrap(),
            ExpenseCategory::Food
        );
        assert!(ExpenseCategory::from_str("Groceries").is_err());
    }

    #[test]
    fn test_serde_uses_display_strings() {
        let json = serde_json::to_string(&InvestmentType::MutualFund).unwrap();
        assert_eq!(json, "\"Mutual Fund\"");
        let parsed: DebtType = serde_json::from_str("\"home_loan\"").unwrap();
        assert_eq!(parsed, DebtType::HomeLoan);
    }

    #[test]
    fn test_serde_accepts_any_case() {
        let category: ExpenseCategory = serde_json::from_str("\"food\"").unwrap();
        assert_eq!(category, ExpenseCategory::Food);
        let method: PaymentMethod = serde_json::from_str("\"cash\"").unwrap();
        assert_eq!(method, PaymentMethod::Cash);
        let source: IncomeSource = serde_json::from_str("\"investment returns\"").unwrap();
        assert_eq!(source, IncomeSource::InvestmentReturns);
        let kind: InvestmentType = serde_json::from_str("\"ppf\"").unwrap();
        assert_eq!(kind, InvestmentType::Ppf);

        let err = serde_json::from_str::<ExpenseCategory>("\"Groceries\"").unwrap_err();
        assert!(err.to_string().contains("Unknown expense category"));
    }

    #[test]
    fn test_entity_kind_table_names() {
        assert_eq!(EntityKind::Goals.table(), "savings_goals");
        assert_eq!(EntityKind::Expenses.table(), "expenses");
        assert_eq!(EntityKind::from_str("goal").unwrap(), EntityKind::Goals);
    }

    #[test]
    fn test_new_expense_validation() {
        let mut expense = NewExpense {
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            category: ExpenseCategory::Food,
            amount: 250.0,
            payment_method: PaymentMethod::Upi,
            description: "Lunch".to_string(),
            notes: None,
        };
        assert!(expense.validate().is_ok());

        expense.amount = -1.0;
        assert!(matches!(expense.validate(), Err(Error::InvalidData(_))));

        expense.amount = f64::NAN;
        assert!(expense.validate().is_err());

        expense.amount = 0.0;
        expense.description = "   ".to_string();
        assert!(expense.validate().is_err());
    }

    #[test]
    fn test_budget_limit_must_be_positive() {
        let budget = NewBudget {
            category: ExpenseCategory::Housing,
            monthly_limit: 0.0,
            rollover_enabled: false,
            notes: None,
        };
        assert!(budget.validate().is_err());
    }

    #[test]
    fn test_goal_allows_overshoot() {
        let goal = NewSavingsGoal {
            name: "Laptop".to_string(),
            target_amount: 50_000.0,
            current_amount: 60_000.0,
            monthly_contribution: 0.0,
            target_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        };
        assert!(goal.validate().is_ok());
    }

    #[test]
    fn test_debt_due_date_range() {
        let mut debt = NewDebt {
            debt_type: DebtType::CarLoan,
            lender: "HDFC".to_string(),
            interest_rate: 9.5,
            outstanding_amount: 300_000.0,
            monthly_emi: 12_000.0,
            due_date: 5,
        };
        assert!(debt.validate().is_ok());
        debt.due_date = 0;
        assert!(debt.validate().is_err());
        debt.due_date = 32;
        assert!(debt.validate().is_err());
    }
}
