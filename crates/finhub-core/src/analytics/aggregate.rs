//! Pure reducers over record collections
//!
//! Every function here is total: empty input contributes zero and ratios with
//! a zero denominator are defined as 0 instead of NaN or infinity.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Local, NaiveDate};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::error::{Error, Result};
use crate::models::{Expense, ExpenseCategory};

/// A calendar month (month is 1-12)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Period {
    pub year: i32,
    pub month: u32,
}

impl Period {
    pub fn new(year: i32, month: u32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(Error::InvalidData(format!(
                "month must be 1-12, got {}",
                month
            )));
        }
        Ok(Self { year, month })
    }

    /// The month containing `date`
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The month containing today's local date
    pub fn current() -> Self {
        Self::containing(Local::now().date_naive())
    }

    /// The month before this one (January wraps to December of the prior year)
    pub fn previous(&self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Human label, e.g. "March 2024"
    pub fn label(&self) -> String {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .map(|d| d.format("%B %Y").to_string())
            .unwrap_or_else(|| self.to_string())
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for Period {
    type Err = Error;

    /// Parse "YYYY-MM"
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidData(format!("expected YYYY-MM, got '{}'", s));
        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        Self::new(year, month)
    }
}

/// Sum a numeric field across records
pub fn total_of<T>(records: &[T], amount: impl Fn(&T) -> f64) -> f64 {
    records.iter().map(amount).sum()
}

/// Records whose date falls in the calendar month `period`
pub fn filter_by_month<'a, T>(
    records: &'a [T],
    date: impl Fn(&T) -> NaiveDate,
    period: Period,
) -> Vec<&'a T> {
    records.iter().filter(|r| period.contains(date(*r))).collect()
}

/// Category totals in first-encountered order
///
/// Categories with no expenses are absent rather than zero.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryTotals {
    entries: Vec<(ExpenseCategory, f64)>,
}

impl CategoryTotals {
    pub fn get(&self, category: ExpenseCategory) -> Option<f64> {
        self.entries
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, total)| *total)
    }

    /// Highest total; ties go to the category encountered first
    pub fn top(&self) -> Option<(ExpenseCategory, f64)> {
        let mut best: Option<(ExpenseCategory, f64)> = None;
        for &(category, total) in &self.entries {
            match best {
                Some((_, best_total)) if total <= best_total => {}
                _ => best = Some((category, total)),
            }
        }
        best
    }

    pub fn iter(&self) -> impl Iterator<Item = (ExpenseCategory, f64)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn add(&mut self, category: ExpenseCategory, amount: f64) {
        match self.entries.iter_mut().find(|(c, _)| *c == category) {
            Some((_, total)) => *total += amount,
            None => self.entries.push((category, amount)),
        }
    }
}

impl Serialize for CategoryTotals {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (category, total) in &self.entries {
            map.serialize_entry(category.as_str(), total)?;
        }
        map.end()
    }
}

/// Group expense amounts by category
pub fn sum_by_category<'a, I>(expenses: I) -> CategoryTotals
where
    I: IntoIterator<Item = &'a Expense>,
{
    let mut totals = CategoryTotals::default();
    for expense in expenses {
        totals.add(expense.category, expense.amount);
    }
    totals
}

/// Percentage of income not spent; 0 when income is 0
pub fn savings_rate(income: f64, expenses: f64) -> f64 {
    if income == 0.0 {
        return 0.0;
    }
    (income - expenses) / income * 100.0
}

/// Absolute and percentage gain of `current` over `invested`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Returns {
    pub amount: f64,
    pub percentage: f64,
}

/// Returns on an investment; percentage is 0 when nothing was invested
pub fn investment_returns(invested: f64, current: f64) -> Returns {
    let amount = current - invested;
    let percentage = if invested > 0.0 {
        amount / invested * 100.0
    } else {
        0.0
    };
    Returns { amount, percentage }
}

/// Share of a budget consumed, as a percentage
///
/// A non-positive limit yields 0.
pub fn budget_utilization(spent: f64, limit: f64) -> f64 {
    if limit <= 0.0 {
        return 0.0;
    }
    spent / limit * 100.0
}

/// Investments minus debts; may be negative
pub fn net_worth(total_investments: f64, total_debts: f64) -> f64 {
    total_investments - total_debts
}

/// Change from `previous` to `current` as a percentage; 0 when previous is 0
pub fn percent_change(previous: f64, current: f64) -> f64 {
    if previous == 0.0 {
        return 0.0;
    }
    (current - previous) / previous * 100.0
}
