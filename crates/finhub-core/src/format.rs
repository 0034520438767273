//! Display helpers for amounts and calendar arithmetic

use chrono::{Datelike, NaiveDate};

/// Format an amount as whole currency units with Indian digit grouping
///
/// `format_currency(120000.0, "₹")` gives `"₹1,20,000"`. The last three digits
/// form one group and every group above it has two digits.
pub fn format_currency(amount: f64, symbol: &str) -> String {
    if !amount.is_finite() {
        return format!("{}0", symbol);
    }

    let rounded = amount.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    let digits = format!("{:.0}", rounded.abs());

    format!("{}{}{}", sign, symbol, group_indian(&digits))
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

/// Whole calendar months from `start` to `end`, ignoring the day of month
///
/// Negative when `end` falls in an earlier month than `start`.
pub fn months_between(start: NaiveDate, end: NaiveDate) -> i32 {
    (end.year() - start.year()) * 12 + end.month() as i32 - start.month() as i32
}

/// Indian financial year (April to March) containing `date`, e.g. `"2024-2025"`
pub fn financial_year(date: NaiveDate) -> String {
    let year = date.year();
    if date.month() >= 4 {
        format!("{}-{}", year, year + 1)
    } else {
        format!("{}-{}", year - 1, year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_indian_grouping() {
        assert_eq!(format_currency(0.0, "₹"), "₹0");
        assert_eq!(format_currency(999.0, "₹"), "₹999");
        assert_eq!(format_currency(1000.0, "₹"), "₹1,000");
        assert_eq!(format_currency(120000.0, "₹"), "₹1,20,000");
        assert_eq!(format_currency(12345678.0, "₹"), "₹1,23,45,678");
    }

    #[test]
    fn test_currency_rounds_and_signs() {
        assert_eq!(format_currency(1499.6, "₹"), "₹1,500");
        assert_eq!(format_currency(-2500.0, "₹"), "-₹2,500");
        assert_eq!(format_currency(f64::NAN, "$"), "$0");
    }

    #[test]
    fn test_months_between() {
        assert_eq!(months_between(date(2024, 1, 31), date(2024, 2, 1)), 1);
        assert_eq!(months_between(date(2024, 11, 15), date(2025, 2, 15)), 3);
        assert_eq!(months_between(date(2024, 5, 1), date(2024, 3, 1)), -2);
    }

    #[test]
    fn test_financial_year_starts_in_april() {
        assert_eq!(financial_year(date(2024, 4, 1)), "2024-2025");
        assert_eq!(financial_year(date(2025, 3, 31)), "2024-2025");
        assert_eq!(financial_year(date(2025, 1, 10)), "2024-2025");
    }
}
