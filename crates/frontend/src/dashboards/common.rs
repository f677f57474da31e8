use crate::shared::api_utils::{query_string, with_query};
use crate::shared::components::date_range_filter::month_bounds;
use chrono::{Datelike, NaiveDate, Utc};
use leptos::prelude::*;

/// Selected dashboard period; empty strings leave that side open
#[derive(Clone, Copy)]
pub struct DashboardRange {
    pub start: RwSignal<String>,
    pub end: RwSignal<String>,
}

impl DashboardRange {
    /// Starts at the current year
    pub fn this_year() -> Self {
        let year = Utc::now().date_naive().year();
        let fmt = |d: Option<NaiveDate>| d.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default();
        Self {
            start: RwSignal::new(fmt(NaiveDate::from_ymd_opt(year, 1, 1))),
            end: RwSignal::new(fmt(NaiveDate::from_ymd_opt(year, 12, 31))),
        }
    }

    pub fn this_month() -> Self {
        let (s, e) = month_bounds(Utc::now().date_naive());
        Self {
            start: RwSignal::new(s.format("%Y-%m-%d").to_string()),
            end: RwSignal::new(e.format("%Y-%m-%d").to_string()),
        }
    }

    pub fn set(&self, (start, end): (String, String)) {
        self.start.set(start);
        self.end.set(end);
    }

    /// `path?start_date=..&end_date=..` plus `extra`; tracks both signals
    pub fn path(&self, path: &str, extra: &[(&str, Option<String>)]) -> String {
        let mut pairs = vec![
            ("start_date", Some(self.start.get())),
            ("end_date", Some(self.end.get())),
        ];
        pairs.extend(extra.iter().cloned());
        with_query(path, &query_string(&pairs))
    }
}

/// Labels and one series per field, ready for `BarChart`
pub fn chart_series<T>(points: &[T], label: impl Fn(&T) -> String, fields: &[&dyn Fn(&T) -> f64]) -> (Vec<String>, Vec<Vec<f64>>) {
    let labels = points.iter().map(label).collect();
    let series = fields
        .iter()
        .map(|f| points.iter().map(|p| f(p)).collect())
        .collect();
    (labels, series)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct P {
        period: &'static str,
        a: f64,
        b: f64,
    }

    #[test]
    fn test_chart_series_splits_fields() {
        let points = vec![
            P { period: "2025-06", a: 1.0, b: 2.0 },
            P { period: "2025-07", a: 3.0, b: 4.0 },
        ];
        let (labels, series) = chart_series(&points, |p| p.period.to_string(), &[&|p: &P| p.a, &|p: &P| p.b]);
        assert_eq!(labels, vec!["2025-06", "2025-07"]);
        assert_eq!(series, vec![vec![1.0, 3.0], vec![2.0, 4.0]]);
    }
}
