use chrono::{Datelike, Local, Months, NaiveDate};

use crate::config::DaysElapsed;

pub struct TimeUtils;

impl TimeUtils {
    pub const STANDARD_TIME_FORMAT: &str = "%Y-%m-%d";
}

// Calendar helpers

/// First day of the month containing `date`.
pub fn first_day_of_month(date: NaiveDate) -> NaiveDate {
    // Day 1 exists in every month
    date.with_day(1).unwrap_or(date)
}

/// Last day of the month containing `date`.
pub fn last_day_of_month(date: NaiveDate) -> NaiveDate {
    first_day_of_month(date)
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(date)
}

/// Whole days from `earlier` to `later`. Negative when `earlier` is actually later.
pub fn whole_days_between(later: NaiveDate, earlier: NaiveDate) -> DaysElapsed {
    DaysElapsed::new(later.signed_duration_since(earlier).num_days())
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(TimeUtils::STANDARD_TIME_FORMAT).to_string()
}

pub fn parse_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text, TimeUtils::STANDARD_TIME_FORMAT).ok()
}

pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}
