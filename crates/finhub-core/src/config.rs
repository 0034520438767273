//! FinHub configuration
//!
//! Config is loaded with a layered resolution:
//! 1. Explicit path (`--config`), if it exists
//! 2. User override in the config dir (~/.config/finhub/config.toml)
//! 3. Embedded defaults (compiled into binary)
//!
//! Keys missing from a file fall back to the built-in defaults, so an
//! override only needs the values it changes.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Embedded default config (compiled into binary)
const DEFAULT_CONFIG: &str = include_str!("../../../config/finhub.toml");

/// Currency display settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyConfig {
    pub symbol: String,
    pub code: String,
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        Self {
            symbol: "₹".to_string(),
            code: "INR".to_string(),
        }
    }
}

/// Thresholds used by the insight rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightThresholds {
    /// Absolute month-over-month change (percent) that must be exceeded
    pub spending_change_threshold: f64,
    /// Budget utilization (percent) that must be exceeded
    pub budget_alert_threshold: f64,
    /// Savings rate strictly below this is a warning
    pub low_savings_rate: f64,
    /// Savings rate strictly above this is a success
    pub high_savings_rate: f64,
    /// Lowercase description fragments that mark a subscription
    pub subscription_keywords: Vec<String>,
}

impl Default for InsightThresholds {
    fn default() -> Self {
        Self {
            spending_change_threshold: 10.0,
            budget_alert_threshold: 90.0,
            low_savings_rate: 20.0,
            high_savings_rate: 30.0,
            subscription_keywords: vec![
                "subscription".to_string(),
                "netflix".to_string(),
                "spotify".to_string(),
            ],
        }
    }
}

/// Thresholds for the per-view summaries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleThresholds {
    pub high_interest_threshold: f64,
    pub budget_warning_threshold: f64,
}

impl Default for RuleThresholds {
    fn default() -> Self {
        Self {
            high_interest_threshold: 15.0,
            budget_warning_threshold: 80.0,
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FinhubConfig {
    pub currency: CurrencyConfig,
    pub insights: InsightThresholds,
    pub rules: RuleThresholds,
}

impl FinhubConfig {
    /// Load configuration, preferring `override_path`, then the user config
    /// dir, then the embedded defaults
    pub fn load(override_path: Option<&Path>) -> Result<Self> {
        if let Some(path) = override_path {
            if path.exists() {
                return Self::from_file(path);
            }
            tracing::warn!(path = %path.display(), "Config file not found, using defaults");
        } else if let Some(default_path) = default_config_path() {
            if default_path.exists() {
                return Self::from_file(&default_path);
            }
        }

        parse_config(DEFAULT_CONFIG)
    }

    /// Load configuration from a specific TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read {}: {}", path.display(), e)))?;
        let config = parse_config(&content)?;
        tracing::debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }
}

/// Default config override path
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("finhub").join("config.toml"))
}

/// Raw config structure for TOML parsing
#[derive(Debug, Deserialize)]
struct RawConfig {
    currency: Option<RawCurrency>,
    insights: Option<RawInsights>,
    rules: Option<RawRules>,
}

#[derive(Debug, Deserialize)]
struct RawCurrency {
    symbol: Option<String>,
    code: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawInsights {
    spending_change_threshold: Option<f64>,
    budget_alert_threshold: Option<f64>,
    low_savings_rate: Option<f64>,
    high_savings_rate: Option<f64>,
    subscription_keywords: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
struct RawRules {
    high_interest_threshold: Option<f64>,
    budget_warning_threshold: Option<f64>,
}

/// Parse config from TOML content
fn parse_config(content: &str) -> Result<FinhubConfig> {
    let raw: RawConfig = toml::from_str(content)
        .map_err(|e| Error::Config(format!("Invalid config TOML: {}", e)))?;

    let mut config = FinhubConfig::default();

    if let Some(currency) = raw.currency {
        if let Some(symbol) = currency.symbol {
            config.currency.symbol = symbol;
        }
        if let Some(code) = currency.code {
            config.currency.code = code;
        }
    }

    if let Some(insights) = raw.insights {
        let t = &mut config.insights;
        if let Some(v) = insights.spending_change_threshold {
            t.spending_change_threshold = v;
        }
        if let Some(v) = insights.budget_alert_threshold {
            t.budget_alert_threshold = v;
        }
        if let Some(v) = insights.low_savings_rate {
            t.low_savings_rate = v;
        }
        if let Some(v) = insights.high_savings_rate {
            t.high_savings_rate = v;
        }
        if let Some(keywords) = insights.subscription_keywords {
            t.subscription_keywords = keywords
                .into_iter()
                .map(|k| k.trim().to_lowercase())
                .filter(|k| !k.is_empty())
                .collect();
        }
    }

    if let Some(rules) = raw.rules {
        if let Some(v) = rules.high_interest_threshold {
            config.rules.high_interest_threshold = v;
        }
        if let Some(v) = rules.budget_warning_threshold {
            config.rules.budget_warning_threshold = v;
        }
    }

    validate(&config)?;
    Ok(config)
}

fn validate(config: &FinhubConfig) -> Result<()> {
    let t = &config.insights;
    let numbers = [
        ("spending_change_threshold", t.spending_change_threshold),
        ("budget_alert_threshold", t.budget_alert_threshold),
        ("low_savings_rate", t.low_savings_rate),
        ("high_savings_rate", t.high_savings_rate),
        (
            "high_interest_threshold",
            config.rules.high_interest_threshold,
        ),
        (
            "budget_warning_threshold",
            config.rules.budget_warning_threshold,
        ),
    ];
    for (name, value) in numbers {
        if !value.is_finite() || value < 0.0 {
            return Err(Error::Config(format!(
                "{} must be a non-negative number",
                name
            )));
        }
    }
    if t.low_savings_rate > t.high_savings_rate {
        return Err(Error::Config(
            "low_savings_rate must not exceed high_savings_rate".to_string(),
        ));
    }
    Ok(())
}
