//! Insight command implementation

use anyhow::Result;
use finhub_core::{Database, FinhubConfig, InsightEngine, Period, Severity};

use super::resolve_period;

pub fn cmd_insights(
    db: &Database,
    config: &FinhubConfig,
    month: Option<Period>,
    json: bool,
) -> Result<()> {
    let period = resolve_period(month);
    let findings = InsightEngine::new().run(db, period, config);

    if json {
        println!("{}", serde_json::to_string_pretty(&findings)?);
        return Ok(());
    }

    if findings.is_empty() {
        println!("💡 No insights for {}. Add more data to get suggestions.", period.label());
        return Ok(());
    }

    println!();
    println!("💡 Insights for {}", period.label());
    println!("   ─────────────────────────────────────────────────────────────");

    for finding in &findings {
        let icon = match finding.severity {
            Severity::Success => "✅",
            Severity::Info => "ℹ️ ",
            Severity::Warning => "⚠️ ",
        };
        println!("   {} {}", icon, finding.title);
        println!("      {}", finding.description);
        if let Some(action) = &finding.action {
            println!("      → {}", action);
        }
        println!();
    }

    Ok(())
}
