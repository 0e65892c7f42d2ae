//! Display formatting shared by the variable and block resolvers.
//!
//! Dates, amounts and addresses are rendered the way Italian documents print
//! them: `3 gennaio 2025`, `1.234,56 €`, `Via Roma 1, 20100, Milano, (MI)`.

use chrono::{Locale, NaiveDate, NaiveTime, TimeZone, Utc};

pub const CURRENCY_SYMBOL: &str = "€";

/// Separator between the amount and the currency symbol.
const NBSP: char = '\u{a0}';

/// Long localized date, e.g. `3 gennaio 2025`.
pub fn long_date(date: NaiveDate) -> String {
    Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN))
        .format_localized("%-d %B %Y", Locale::it_IT)
        .to_string()
}

/// Short numeric date, e.g. `3/1/2025`.
pub fn short_date(date: NaiveDate) -> String {
    date.format("%-d/%-m/%Y").to_string()
}

/// Euro amount with two decimals and dot-grouped thousands.
pub fn currency(amount: f64) -> String {
    let cents = (amount * 100.0).round() as i64;
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();
    let units = group_thousands(cents / 100);
    format!("{sign}{units},{:02}{NBSP}{CURRENCY_SYMBOL}", cents % 100)
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}

/// Bare number without a trailing `.0` for whole values.
pub fn number(value: f64) -> String {
    format!("{value}")
}

/// Bare number followed by `%`.
pub fn percent(value: f64) -> String {
    format!("{}%", number(value))
}

/// Trimmed copy of a text field, `None` when absent or blank.
pub fn text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Escapes a plain value for insertion into HTML text or attributes.
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Joins `[street, postal code, city, "(province)"]` with `", "`.
///
/// Absent and blank segments are both omitted; `None` when nothing is left.
pub fn join_address(
    street: Option<&str>,
    postal_code: Option<&str>,
    city: Option<&str>,
    province: Option<&str>,
) -> Option<String> {
    let province = text(province).map(|p| format!("({p})"));
    let parts: Vec<String> = [street, postal_code, city]
        .into_iter()
        .filter_map(text)
        .chain(province)
        .collect();

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(", "))
    }
}
