use chrono::{Local, NaiveDate};

use crate::constants::ISO_DATE_FORMAT;

/// Today's calendar date in the server's local timezone
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn parse_iso_date(input: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(input, ISO_DATE_FORMAT)
}

pub fn format_iso_date(date: NaiveDate) -> String {
    date.format(ISO_DATE_FORMAT).to_string()
}

/// Whole calendar days from `today` to `target`; negative for past dates
pub fn days_between(today: NaiveDate, target: NaiveDate) -> i64 {
    (target - today).num_days()
}
