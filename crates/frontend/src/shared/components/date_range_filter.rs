use chrono::{Datelike, NaiveDate, Utc};
use leptos::prelude::*;
use thaw::*;

/// First and last day of the month containing `date`
pub fn month_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start = date.with_day(1).unwrap_or(date);
    let next = if start.month() == 12 {
        NaiveDate::from_ymd_opt(start.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(start.year(), start.month() + 1, 1)
    };
    let end = next.and_then(|n| n.pred_opt()).unwrap_or(start);
    (start, end)
}

fn iso(d: NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}

/// Two date inputs plus quick ranges. Empty strings mean "open ended".
#[component]
pub fn DateRangeFilter(
    #[prop(into)] start: Signal<String>,
    #[prop(into)] end: Signal<String>,
    on_change: Callback<(String, String)>,
) -> impl IntoView {
    let this_month = move |_| {
        let (s, e) = month_bounds(Utc::now().date_naive());
        on_change.run((iso(s), iso(e)));
    };
    let this_year = move |_| {
        let year = Utc::now().date_naive().year();
        let s = NaiveDate::from_ymd_opt(year, 1, 1);
        let e = NaiveDate::from_ymd_opt(year, 12, 31);
        if let (Some(s), Some(e)) = (s, e) {
            on_change.run((iso(s), iso(e)));
        }
    };

    view! {
        <div class="date-range">
            <input
                type="date"
                prop:value=move || start.get()
                on:change=move |ev| on_change.run((event_target_value(&ev), end.get_untracked()))
            />
            <span class="muted">"to"</span>
            <input
                type="date"
                prop:value=move || end.get()
                on:change=move |ev| on_change.run((start.get_untracked(), event_target_value(&ev)))
            />
            <Button size=ButtonSize::Small on_click=this_month>"This month"</Button>
            <Button size=ButtonSize::Small on_click=this_year>"This year"</Button>
            <Button
                size=ButtonSize::Small
                appearance=ButtonAppearance::Subtle
                on_click=move |_| on_change.run((String::new(), String::new()))
            >
                "All"
            </Button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_bounds() {
        let d = NaiveDate::from_ymd_opt(2024, 2, 14).unwrap();
        let (s, e) = month_bounds(d);
        assert_eq!(iso(s), "2024-02-01");
        assert_eq!(iso(e), "2024-02-29");

        let d = NaiveDate::from_ymd_opt(2025, 12, 3).unwrap();
        assert_eq!(iso(month_bounds(d).1), "2025-12-31");
    }
}
