//! Turkish display dates ("7 Aralık 2025") to calendar values and back.
//!
//! The listing prints dates as `day monthName year` with Turkish month names.
//! Parsing never raises: anything that is not a usable date becomes `None`
//! and callers decide how to degrade.

use chrono::{Datelike, NaiveDate};

/// Turkish month names in calendar order.
const MONTHS: [&str; 12] = [
    "Ocak", "Şubat", "Mart", "Nisan", "Mayıs", "Haziran", "Temmuz", "Ağustos", "Eylül", "Ekim",
    "Kasım", "Aralık",
];

/// Map a month name to its 1-based index.
///
/// Unknown names resolve to 1 (January) instead of failing, so a typo in
/// the month yields a January date rather than an unparseable one.
pub fn month_index(name: &str) -> u32 {
    MONTHS
        .iter()
        .position(|m| *m == name)
        .map(|i| i as u32 + 1)
        .unwrap_or(1)
}

/// Strip the leading zero from the day token (`"07 Aralık 2025"` → `"7 Aralık 2025"`).
///
/// Strings with fewer than three tokens, or whose day is not a number, are
/// returned trimmed but otherwise untouched.
pub fn normalize(text: &str) -> String {
    let parts: Vec<&str> = text.split_whitespace().collect();
    if parts.len() < 3 {
        return text.trim().to_string();
    }
    match parts[0].parse::<u32>() {
        Ok(day) => format!("{} {} {}", day, parts[1], parts[2]),
        Err(_) => text.trim().to_string(),
    }
}

/// Parse `day monthName year` into a calendar date.
///
/// Returns `None` for fewer than three tokens, a non-numeric day or year, or
/// a day that does not exist in the month.
pub fn parse(text: &str) -> Option<NaiveDate> {
    let parts: Vec<&str> = text.split_whitespace().collect();
    if parts.len() < 3 {
        return None;
    }
    let day = parts[0].parse::<u32>().ok()?;
    let month = month_index(parts[1]);
    let year = parts[2].parse::<i32>().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Render a date the way the listing prints it.
pub fn format_display(date: NaiveDate) -> String {
    let month = MONTHS[date.month0() as usize];
    format!("{} {} {}", date.day(), month, date.year())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_leading_zero() {
        assert_eq!(normalize("07 Aralık 2025"), "7 Aralık 2025");
        assert_eq!(normalize("  14 Ocak 2026 "), "14 Ocak 2026");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for s in ["07 Aralık 2025", "1 Mart 2024", "009 Ekim 1999", "30 Nisan 2025"] {
            let once = normalize(s);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn test_normalize_passes_short_strings_through() {
        assert_eq!(normalize("  Aralık 2025 "), "Aralık 2025");
        assert_eq!(normalize("invalid"), "invalid");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_normalize_non_numeric_day() {
        assert_eq!(normalize(" Pazar Aralık 2025"), "Pazar Aralık 2025");
    }

    #[test]
    fn test_parse_turkish_date() {
        assert_eq!(parse("7 Aralık 2025"), NaiveDate::from_ymd_opt(2025, 12, 7));
        assert_eq!(parse("07 Şubat 2024"), NaiveDate::from_ymd_opt(2024, 2, 7));
        assert_eq!(parse("invalid"), None);
        assert_eq!(parse("x Aralık 2025"), None);
        assert_eq!(parse("7 Aralık yirmi"), None);
        assert_eq!(parse("31 Şubat 2025"), None);
    }

    #[test]
    fn test_unknown_month_falls_back_to_january() {
        assert_eq!(month_index("December"), 1);
        assert_eq!(parse("7 December 2025"), NaiveDate::from_ymd_opt(2025, 1, 7));
    }

    #[test]
    fn test_parsed_dates_order_by_calendar() {
        let a = parse("30 Kasım 2025").unwrap();
        let b = parse("1 Aralık 2025").unwrap();
        assert!(a < b);
    }

    #[test]
    fn test_format_display() {
        let date = NaiveDate::from_ymd_opt(2025, 12, 7).unwrap();
        assert_eq!(format_display(date), "7 Aralık 2025");
        assert_eq!(parse(&format_display(date)), Some(date));
    }
}
