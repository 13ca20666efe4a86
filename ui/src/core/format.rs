//! Formatting helpers for dates and quantities shown across the screens.

use time::format_description::well_known::Rfc3339;
use time::{macros::format_description, Date, Month, OffsetDateTime};

/// Parse a voucher date written as `DD.MM.YY`. Two-digit years are taken as
/// 20xx, matching how the paper vouchers are filled in.
pub fn parse_voucher_date(raw: &str) -> Option<Date> {
    let mut parts = raw.trim().split('.');
    let day: u8 = parts.next()?.parse().ok()?;
    let month: u8 = parts.next()?.parse().ok()?;
    let year_digits = parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    let year: i32 = match year_digits.len() {
        2 => 2000 + year_digits.parse::<i32>().ok()?,
        4 => year_digits.parse().ok()?,
        _ => return None,
    };
    let month = Month::try_from(month).ok()?;
    Date::from_calendar_date(year, month, day).ok()
}

/// Long display form of a voucher date, e.g. `February 4, 2025`. Falls back
/// to the raw string when it doesn't parse, and `N/A` when empty.
pub fn format_voucher_date(raw: &str) -> String {
    if raw.trim().is_empty() {
        return "N/A".to_string();
    }
    match parse_voucher_date(raw) {
        Some(date) => date
            .format(&format_description!(
                "[month repr:long] [day padding:none], [year]"
            ))
            .unwrap_or_else(|_| raw.to_string()),
        None => raw.to_string(),
    }
}

/// Short display form of an RFC3339 backend timestamp, e.g. `Mar 11, 2025`.
pub fn format_timestamp(raw: &str) -> String {
    match OffsetDateTime::parse(raw, &Rfc3339) {
        Ok(ts) => ts
            .format(&format_description!(
                "[month repr:short] [day padding:none], [year]"
            ))
            .unwrap_or_else(|_| raw.to_string()),
        Err(_) if raw.is_empty() => "—".to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Thousands-grouped count, e.g. `12,480`.
pub fn format_count(value: u32) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

pub fn format_percent(value: f64) -> String {
    if value.is_finite() {
        format!("{value:.1}%")
    } else {
        "—".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_two_digit_voucher_dates() {
        let date = parse_voucher_date("04.02.25").unwrap();
        assert_eq!((date.year(), date.month() as u8, date.day()), (2025, 2, 4));
    }

    #[test]
    fn rejects_malformed_voucher_dates() {
        assert!(parse_voucher_date("2025-02-04").is_none());
        assert!(parse_voucher_date("31.13.25").is_none());
        assert!(parse_voucher_date("..").is_none());
        assert!(parse_voucher_date("04.02.25.09").is_none());
    }

    #[test]
    fn formats_voucher_dates_with_fallbacks() {
        assert_eq!(format_voucher_date("04.02.25"), "February 4, 2025");
        assert_eq!(format_voucher_date(""), "N/A");
        // unparseable dates pass through so the raw voucher text stays visible
        assert_eq!(format_voucher_date("next week"), "next week");
    }

    #[test]
    fn groups_counts_by_thousands() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(1234567), "1,234,567");
    }

    #[test]
    fn formats_backend_timestamps() {
        assert_eq!(format_timestamp("2025-03-11T08:30:00Z"), "Mar 11, 2025");
        assert_eq!(format_timestamp(""), "—");
    }
}
