use chrono::{Datelike, NaiveDate, Weekday};
use regex::Regex;
use std::sync::LazyLock;

/// `D.M.YYYY`, optional blanks after the dots (`1. 2. 2026`).
static DOTTED_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{1,2})\.\s*(\d{1,2})\.\s*(\d{4})$").expect("valid date regex")
});

/// Lenient parse of a `Datum` cell.
///
/// Accepts the local `D.M.YYYY` form and ISO `YYYY-MM-DD`. Anything else,
/// including blank text and impossible dates such as `31.02.2026`, yields
/// `None`. Never fails.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Some(caps) = DOTTED_DATE.captures(s) {
        let day: u32 = caps[1].parse().ok()?;
        let month: u32 = caps[2].parse().ok()?;
        let year: i32 = caps[3].parse().ok()?;
        return NaiveDate::from_ymd_opt(year, month, day);
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Fixed-width `DD.MM.YYYY`, blank when absent.
pub fn format_date(d: Option<NaiveDate>) -> String {
    d.map(|d| d.format("%d.%m.%Y").to_string())
        .unwrap_or_default()
}

/// Localized weekday label, used when the sheet leaves `Den` blank.
pub fn weekday_name(d: NaiveDate) -> &'static str {
    match d.weekday() {
        Weekday::Mon => "Pondělí",
        Weekday::Tue => "Úterý",
        Weekday::Wed => "Středa",
        Weekday::Thu => "Čtvrtek",
        Weekday::Fri => "Pátek",
        Weekday::Sat => "Sobota",
        Weekday::Sun => "Neděle",
    }
}

pub fn is_weekend(d: NaiveDate) -> bool {
    matches!(d.weekday(), Weekday::Sat | Weekday::Sun)
}
