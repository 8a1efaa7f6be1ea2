//! Text and date formatting for the site's single (Egyptian Arabic) locale.

use chrono::{DateTime, Datelike, NaiveDate};

const MONTHS: [&str; 12] = [
    "يناير",
    "فبراير",
    "مارس",
    "أبريل",
    "مايو",
    "يونيو",
    "يوليو",
    "أغسطس",
    "سبتمبر",
    "أكتوبر",
    "نوفمبر",
    "ديسمبر",
];

/// Format a date string as `day month year` in Arabic.
///
/// Year ranges such as `2015-2025` and strings that are not dates are
/// returned unchanged. Accepted inputs: `YYYY-MM-DD`, RFC 3339 timestamps,
/// `YYYY-MM` and a bare `YYYY`.
pub fn format_date(date: &str) -> String {
    if is_year_range(date) {
        return date.to_string();
    }

    match parse_date(date) {
        Some(parsed) => format!(
            "{} {} {}",
            arabic_digits(&parsed.day().to_string()),
            MONTHS[parsed.month0() as usize],
            arabic_digits(&parsed.year().to_string())
        ),
        None => date.to_string(),
    }
}

/// Parse the date forms accepted by `format_date`.
pub fn parse_date(date: &str) -> Option<NaiveDate> {
    let date = date.trim();
    if let Ok(parsed) = NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        return Some(parsed);
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(date) {
        return Some(parsed.date_naive());
    }
    if let Ok(parsed) = NaiveDate::parse_from_str(&format!("{}-01", date), "%Y-%m-%d") {
        return Some(parsed);
    }
    if date.len() == 4 && date.chars().all(|c| c.is_ascii_digit()) {
        return date.parse().ok().and_then(|year| NaiveDate::from_ymd_opt(year, 1, 1));
    }
    None
}

fn is_year_range(date: &str) -> bool {
    let parts: Vec<&str> = date.split('-').collect();
    parts.len() == 2 && parts[0].len() == 4 && parts[1].len() == 4
}

/// Replace ASCII digits with Arabic-Indic digits.
pub fn arabic_digits(text: &str) -> String {
    text.chars()
        .map(|c| match c.to_digit(10) {
            Some(d) if c.is_ascii_digit() => char::from_u32(0x0660 + d).unwrap_or(c),
            _ => c,
        })
        .collect()
}

/// Cut `text` to `max_length` characters, appending `...` when cut.
pub fn truncate(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max_length).collect();
    cut.push_str("...");
    cut
}
