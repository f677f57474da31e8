//! Lenient parsing of spreadsheet cells.

use chrono::{Duration, NaiveDate};

/// Parses numbers as they appear in exported reports.
///
/// A lone comma is a decimal separator (`46,375` is 46.375). When both
/// separators are present, the last one is the decimal separator.
pub fn safe_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "-" {
        return None;
    }

    let negative = (trimmed.starts_with('(') && trimmed.ends_with(')')) || trimmed.starts_with('-');
    let kept: String = trimmed
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == ',' || *c == '.')
        .collect();
    if !kept.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }

    let commas = kept.matches(',').count();
    let dots = kept.matches('.').count();
    let normalized = match (commas, dots) {
        (0, 0) => kept,
        (0, 1) => kept,
        (0, _) => kept.replace('.', ""),
        (1, 0) => kept.replace(',', "."),
        (_, 0) => kept.replace(',', ""),
        _ => {
            let last_comma = kept.rfind(',').unwrap_or(0);
            let last_dot = kept.rfind('.').unwrap_or(0);
            if last_comma > last_dot {
                kept.replace('.', "").replace(',', ".")
            } else {
                kept.replace(',', "")
            }
        }
    };

    let value: f64 = normalized.parse().ok()?;
    Some(if negative { -value } else { value })
}

/// `safe_number` with 0.0 for blanks
pub fn number_or_zero(raw: &str) -> f64 {
    safe_number(raw).unwrap_or(0.0)
}

/// Where the year sits in a format and how many digits it must have.
/// chrono accepts a 1-digit `%Y`, so `1/2/25` would otherwise match `%Y/%m/%d`.
#[derive(Clone, Copy)]
enum Year {
    First(usize),
    Last(usize),
}

const DATE_FORMATS: &[(&str, Year)] = &[
    ("%Y-%m-%d", Year::First(4)),
    ("%Y/%m/%d", Year::First(4)),
    // SheetJS formatted cells (`raw: false`) come as m/d/yy
    ("%m/%d/%y", Year::Last(2)),
    ("%d/%m/%Y", Year::Last(4)),
    ("%d-%m-%Y", Year::Last(4)),
    ("%d.%m.%Y", Year::Last(4)),
    ("%d-%b-%y", Year::Last(2)),
    ("%d-%b-%Y", Year::Last(4)),
    ("%d %b %Y", Year::Last(4)),
];

fn year_fits(text: &str, year: Year) -> bool {
    let mut parts = text
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|p| !p.is_empty());
    let (part, width) = match year {
        Year::First(w) => (parts.next(), w),
        Year::Last(w) => (parts.last(), w),
    };
    part.is_some_and(|p| p.len() == width && p.chars().all(|c| c.is_ascii_digit()))
}

/// Parses dates written by people or formatted by the spreadsheet reader.
/// Plain integers are treated as spreadsheet serial day numbers.
pub fn safe_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    // drop a time part: "2025-07-31 00:00:00", "2025-07-31T00:00:00"
    let date_part = trimmed
        .split(|c| c == ' ' || c == 'T')
        .next()
        .unwrap_or(trimmed);

    for (fmt, year) in DATE_FORMATS {
        for text in [date_part, trimmed] {
            if !year_fits(text, *year) {
                continue;
            }
            if let Ok(d) = NaiveDate::parse_from_str(text, fmt) {
                return Some(d);
            }
        }
    }

    if let Ok(serial) = trimmed.parse::<f64>() {
        if (1.0..100_000.0).contains(&serial) {
            let base = NaiveDate::from_ymd_opt(1899, 12, 30)?;
            return base.checked_add_signed(Duration::days(serial.trunc() as i64));
        }
    }

    None
}

/// `safe_date` rendered as YYYY-MM-DD
pub fn safe_date_string(raw: &str) -> Option<String> {
    safe_date(raw).map(|d| d.format("%Y-%m-%d").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_number_separators() {
        assert_eq!(safe_number("46,375"), Some(46.375));
        assert_eq!(safe_number("1,234.56"), Some(1234.56));
        assert_eq!(safe_number("1.234,5"), Some(1234.5));
        assert_eq!(safe_number("1.234.567"), Some(1_234_567.0));
        assert_eq!(safe_number("1,234,567"), Some(1_234_567.0));
        assert_eq!(safe_number("12.5"), Some(12.5));
    }

    #[test]
    fn test_safe_number_noise_and_sign() {
        assert_eq!(safe_number("Rp 1.500.000"), Some(1_500_000.0));
        assert_eq!(safe_number("(12.5)"), Some(-12.5));
        assert_eq!(safe_number("-3"), Some(-3.0));
        assert_eq!(safe_number(""), None);
        assert_eq!(safe_number(" - "), None);
        assert_eq!(safe_number("abc"), None);
        assert_eq!(number_or_zero("n/a"), 0.0);
    }

    #[test]
    fn test_safe_date_formats() {
        let d = NaiveDate::from_ymd_opt(2025, 7, 31).unwrap();
        assert_eq!(safe_date("2025-07-31"), Some(d));
        assert_eq!(safe_date("2025-07-31 00:00:00"), Some(d));
        assert_eq!(safe_date("31/07/2025"), Some(d));
        assert_eq!(safe_date("7/31/25"), Some(d));
        assert_eq!(safe_date("31-Jul-25"), Some(d));
        assert_eq!(safe_date("45869"), Some(d));
        assert_eq!(safe_date(""), None);
        assert_eq!(safe_date("someday"), None);
    }

    #[test]
    fn test_safe_date_short_year_is_month_first() {
        let ymd = |y, m, d| NaiveDate::from_ymd_opt(y, m, d);
        assert_eq!(safe_date("1/2/25"), ymd(2025, 1, 2));
        assert_eq!(safe_date("7/8/25"), ymd(2025, 7, 8));
        assert_eq!(safe_date("12/31/24"), ymd(2024, 12, 31));
        // four digit years stay day first
        assert_eq!(safe_date("2/1/2025"), ymd(2025, 1, 2));
        assert_eq!(safe_date("2025/1/2"), ymd(2025, 1, 2));
        assert_eq!(safe_date("31 Jul 2025"), ymd(2025, 7, 31));
    }
}
