//! Compact FAERS date parsing.
//!
//! FAERS encodes dates as bare digit strings at three precisions:
//! `YYYYMMDD`, `YYYYMM`, and `YYYY`. Output preserves the input precision
//! as partial ISO 8601 (`2003-12` stays `2003-12`, it does not become
//! `2003-12-01`).

use chrono::NaiveDate;

/// Parse a compact FAERS date into a partial-precision ISO 8601 string.
///
/// Eight digits must form a real calendar date; six digits must carry a
/// month in 01..=12. Any other shape, or an impossible date, yields `None`.
pub fn parse_faers_date(value: &str) -> Option<String> {
    let s = value.trim();
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    match s.len() {
        8 => {
            let year: i32 = s[0..4].parse().ok()?;
            let month: u32 = s[4..6].parse().ok()?;
            let day: u32 = s[6..8].parse().ok()?;
            let date = NaiveDate::from_ymd_opt(year, month, day)?;
            Some(date.format("%Y-%m-%d").to_string())
        }
        6 => {
            let year = &s[0..4];
            let month: u32 = s[4..6].parse().ok()?;
            if !(1..=12).contains(&month) {
                return None;
            }
            Some(format!("{year}-{month:02}"))
        }
        4 => Some(s.to_string()),
        _ => None,
    }
}

/// Parse an optional raw field, treating absent input as absent output.
pub fn parse_faers_date_opt(value: Option<&str>) -> Option<String> {
    value.and_then(parse_faers_date)
}
