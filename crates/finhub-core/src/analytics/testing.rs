//! Record fixtures shared by analytics and insight tests

use chrono::{NaiveDate, Utc};

use crate::models::*;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn expense(date: NaiveDate, category: ExpenseCategory, amount: f64, description: &str) -> Expense {
    Expense {
        id: 0,
        date,
        category,
        amount,
        payment_method: PaymentMethod::Upi,
        description: description.to_string(),
        notes: None,
        created_at: Utc::now(),
    }
}

pub fn income(date: NaiveDate, amount: f64) -> Income {
    Income {
        id: 0,
        date,
        amount,
        source: IncomeSource::Salary,
        income_type: IncomeType::Regular,
        notes: None,
        created_at: Utc::now(),
    }
}

pub fn budget(category: ExpenseCategory, monthly_limit: f64) -> Budget {
    Budget {
        id: 0,
        category,
        monthly_limit,
        rollover_enabled: false,
        notes: None,
        created_at: Utc::now(),
    }
}

pub fn goal(target: f64, current: f64, monthly: f64, target_date: NaiveDate) -> SavingsGoal {
    SavingsGoal {
        id: 0,
        name: "Goal".to_string(),
        target_amount: target,
        current_amount: current,
        monthly_contribution: monthly,
        target_date,
        created_at: Utc::now(),
    }
}

pub fn investment(investment_type: InvestmentType, invested: f64, current: f64) -> Investment {
    Investment {
        id: 0,
        date: date(2024, 1, 1),
        investment_type,
        amount_invested: invested,
        current_value: current,
        platform: "Groww".to_string(),
        notes: None,
        created_at: Utc::now(),
    }
}

pub fn debt(debt_type: DebtType, rate: f64, outstanding: f64, emi: f64) -> Debt {
    Debt {
        id: 0,
        debt_type,
        lender: "Bank".to_string(),
        interest_rate: rate,
        outstanding_amount: outstanding,
        monthly_emi: emi,
        due_date: 5,
        created_at: Utc::now(),
    }
}
