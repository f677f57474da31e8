use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Date range accepted by every dashboard endpoint
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct DateRangeQuery {
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
}

impl DateRangeQuery {
    pub fn contains(&self, date: &str) -> bool {
        let start = self.start_date.as_deref().filter(|s| !s.is_empty());
        let end = self.end_date.as_deref().filter(|s| !s.is_empty());
        start.map_or(true, |s| date >= s) && end.map_or(true, |e| date <= e)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Day,
    Week,
    #[default]
    Month,
}

impl Granularity {
    pub fn parse(s: &str) -> Self {
        match s {
            "day" => Granularity::Day,
            "week" => Granularity::Week,
            _ => Granularity::Month,
        }
    }

    /// Bucket key of a YYYY-MM-DD date: the date itself, ISO week
    /// (`2025-W31`) or month (`2025-07`). Unparseable dates go to their first 7 chars.
    pub fn period_of(&self, date: &str) -> String {
        let parsed = NaiveDate::parse_from_str(date, "%Y-%m-%d").ok();
        match (self, parsed) {
            (Granularity::Day, Some(d)) => d.format("%Y-%m-%d").to_string(),
            (Granularity::Week, Some(d)) => {
                let w = d.iso_week();
                format!("{}-W{:02}", w.year(), w.week())
            }
            (Granularity::Month, Some(d)) => d.format("%Y-%m").to_string(),
            (_, None) => date.chars().take(7).collect(),
        }
    }
}

/// Label + value for bar charts
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
}

/// Division that yields 0 for an empty denominator
pub fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_keys() {
        assert_eq!(Granularity::Month.period_of("2025-07-31"), "2025-07");
        assert_eq!(Granularity::Day.period_of("2025-07-31"), "2025-07-31");
        assert_eq!(Granularity::Week.period_of("2025-07-31"), "2025-W31");
        assert_eq!(Granularity::Week.period_of("2024-12-30"), "2025-W01");
    }

    #[test]
    fn test_range_contains() {
        let q = DateRangeQuery {
            start_date: Some("2025-07-01".into()),
            end_date: None,
        };
        assert!(q.contains("2025-07-01"));
        assert!(!q.contains("2025-06-30"));
        assert!(DateRangeQuery::default().contains("1999-01-01"));
    }

    #[test]
    fn test_ratio_zero_denominator() {
        assert_eq!(ratio(10.0, 0.0), 0.0);
        assert_eq!(ratio(10.0, 4.0), 2.5);
    }
}
