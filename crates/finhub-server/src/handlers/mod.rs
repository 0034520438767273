//! HTTP request handlers organized by domain
//!
//! Each submodule contains handlers for a specific API area.

pub mod analytics;
pub mod export;
pub mod insights;
pub mod records;

// Re-export all handlers for use in router
pub use analytics::*;
pub use export::*;
pub use insights::*;
pub use records::*;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::AppError;
use finhub_core::Period;

/// `?month=YYYY-MM`, defaulting to the current month
#[derive(Debug, Default, Deserialize)]
pub struct MonthQuery {
    pub month: Option<String>,
}

impl MonthQuery {
    pub fn period(&self) -> Result<Period, AppError> {
        match self.month.as_deref() {
            None | Some("") => Ok(Period::current()),
            Some(s) => s.parse().map_err(|_| {
                AppError::bad_request(&format!("Invalid month: {} (use YYYY-MM)", s))
            }),
        }
    }
}

/// Parse a JSON request body
pub(crate) fn parse_body<T: DeserializeOwned>(body: &str) -> Result<T, AppError> {
    serde_json::from_str(body).map_err(|e| AppError::bad_request(&format!("Invalid JSON: {}", e)))
}
