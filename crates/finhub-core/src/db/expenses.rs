//! Expense operations

use rusqlite::{params, Row};

use super::{date_column, ensure_deleted, enum_column, parse_datetime, Database, DATE_FORMAT};
use crate::error::Result;
use crate::models::{EntityKind, Expense, ExpenseCategory, NewExpense};

const EXPENSE_COLUMNS: &str =
    "id, date, category, amount, payment_method, description, notes, created_at";

/// Filter for expense listings
///
/// `search` matches description or category text, case-insensitively.
#[derive(Debug, Default, Clone)]
pub struct ExpenseFilter<'query> {
    pub category: Option<ExpenseCategory>,
    pub search: Option<&'query str>,
}

impl<'query> ExpenseFilter<'query> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(mut self, category: Option<ExpenseCategory>) -> Self {
        self.category = category;
        self
    }

    pub fn search(mut self, query: Option<&'query str>) -> Self {
        self.search = query.map(str::trim).filter(|q| !q.is_empty());
        self
    }

    /// WHERE clause (with keyword, or empty) and its parameters
    fn build(&self) -> (String, Vec<Box<dyn rusqlite::ToSql>>) {
        let mut conditions = Vec::new();
        let mut params: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        if let Some(category) = self.category {
            conditions.push("category = ?");
            params.push(Box::new(category.as_str()));
        }

        if let Some(search) = self.search {
            conditions.push(
                "(LOWER(description) LIKE ? ESCAPE '\\' OR LOWER(category) LIKE ? ESCAPE '\\')",
            );
            let pattern = format!("%{}%", escape_like(&search.to_lowercase()));
            params.push(Box::new(pattern.clone()));
            params.push(Box::new(pattern));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        (where_clause, params)
    }
}

/// Make `%`, `_` and `\` match literally under `ESCAPE '\'`
fn escape_like(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

fn row_to_expense(row: &Row) -> rusqlite::Result<Expense> {
    let created_at: String = row.get(7)?;
    Ok(Expense {
        id: row.get(0)?,
        date: date_column(1, row.get(1)?)?,
        category: enum_column(2, row.get(2)?)?,
        amount: row.get(3)?,
        payment_method: enum_column(4, row.get(4)?)?,
        description: row.get(5)?,
        notes: row.get(6)?,
        created_at: parse_datetime(&created_at),
    })
}

impl Database {
    /// Insert a validated expense and return the stored record
    pub fn insert_expense(&self, expense: &NewExpense) -> Result<Expense> {
        expense.validate()?;
        let conn = self.conn()?;

        conn.execute(
            r#"
            INSERT INTO expenses (date, category, amount, payment_method, description, notes)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
            params![
                expense.date.format(DATE_FORMAT).to_string(),
                expense.category.as_str(),
                expense.amount,
                expense.payment_method.as_str(),
                expense.description.trim(),
                expense.notes,
            ],
        )?;

        let id = conn.last_insert_rowid();
        drop(conn);
        self.require_expense(id)
    }

    /// Get an expense by ID
    pub fn get_expense(&self, id: i64) -> Result<Option<Expense>> {
        let conn = self.conn()?;
        let sql = format!("SELECT {} FROM expenses WHERE id = ?", EXPENSE_COLUMNS);
        let mut stmt = conn.prepare(&sql)?;
        let mut rows = stmt.query_map(params![id], row_to_expense)?;
        Ok(rows.next().transpose()?)
    }

    fn require_expense(&self, id: i64) -> Result<Expense> {
        self.get_expense(id)?.ok_or_else(|| {
            crate::error::Error::NotFound(format!("expenses record {} not found", id))
        })
    }

    /// List all expenses, newest first
    pub fn list_expenses(&self) -> Result<Vec<Expense>> {
        self.list_expenses_filtered(&ExpenseFilter::new())
    }

    /// List expenses matching a filter, newest first
    pub fn list_expenses_filtered(&self, filter: &ExpenseFilter) -> Result<Vec<Expense>> {
        let conn = self.conn()?;
        let (where_clause, params) = filter.build();
        let sql = format!(
            "SELECT {} FROM expenses {} ORDER BY date DESC, id DESC",
            EXPENSE_COLUMNS, where_clause
        );

        let param_refs: Vec<&dyn rusqlite::ToSql> = params.iter().map(|p| p.as_ref()).collect();
        let mut stmt = conn.prepare(&sql)?;
        let expenses = stmt
            .query_map(param_refs.as_slice(), row_to_expense)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(expenses)
    }

    /// Delete an expense
    pub fn delete_expense(&self, id: i64) -> Result<()> {
        let conn = self.conn()?;
        let rows = conn.execute("DELETE FROM expenses WHERE id = ?", params![id])?;
        ensure_deleted(EntityKind::Expenses, id, rows)
    }
}
