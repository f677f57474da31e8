//! Number and date formatting for tables and cards.

/// `1234567.891` -> `1,234,567.89`
pub fn format_amount(value: f64) -> String {
    format_decimal(value, 2)
}

/// Quantities keep three decimals and drop trailing zeros: `12.5`, `3`, `0.125`
pub fn format_qty(value: f64) -> String {
    let fixed = format_decimal(value, 3);
    if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        fixed
    }
}

pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

pub fn format_decimal(value: f64, decimals: usize) -> String {
    let rounded = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match rounded.split_once('.') {
        Some((i, f)) => (i.to_string(), Some(f.to_string())),
        None => (rounded.clone(), None),
    };

    let mut grouped = String::new();
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let negative = value < 0.0 && rounded.chars().any(|c| c.is_ascii_digit() && c != '0');
    let sign = if negative { "-" } else { "" };
    match frac_part {
        Some(frac) => format!("{}{}.{}", sign, grouped, frac),
        None => format!("{}{}", sign, grouped),
    }
}

/// RFC 3339 timestamp shown as `YYYY-MM-DD HH:MM:SS`
pub fn format_timestamp(raw: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

/// Lenient number input: blank and garbage become 0
pub fn parse_input_number(raw: &str) -> f64 {
    contracts::shared::parse::number_or_zero(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount_groups_thousands() {
        assert_eq!(format_amount(1_234_567.891), "1,234,567.89");
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(-1500.0), "-1,500.00");
        assert_eq!(format_amount(999.999), "1,000.00");
    }

    #[test]
    fn test_format_qty_trims_zeros() {
        assert_eq!(format_qty(12.5), "12.5");
        assert_eq!(format_qty(3.0), "3");
        assert_eq!(format_qty(1234.125), "1,234.125");
        assert_eq!(format_qty(-0.0001), "0");
    }

    #[test]
    fn test_format_timestamp_falls_back_to_raw() {
        assert_eq!(format_timestamp("2025-07-31T08:15:00+00:00"), "2025-07-31 08:15:00");
        assert_eq!(format_timestamp("yesterday"), "yesterday");
    }
}
