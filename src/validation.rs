//! Trip date validation against the six-month booking window.

use chrono::{Days, NaiveDate};

use crate::constants::FUTURE_WINDOW_DAYS;
use crate::dates::{days_between, format_iso_date, local_today, parse_iso_date};
use crate::formatters::round_to_tenth;
use crate::models::{DateValidation, ValidationStatus};

/// Where a day offset falls relative to the booking window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateVerdict {
    PastDate,
    Today,
    TooFarFuture,
    Valid,
}

impl DateVerdict {
    /// Classifies a signed day offset from today
    pub fn classify(days_ahead: i64) -> Self {
        if days_ahead < 0 {
            Self::PastDate
        } else if days_ahead == 0 {
            Self::Today
        } else if days_ahead > FUTURE_WINDOW_DAYS {
            Self::TooFarFuture
        } else {
            Self::Valid
        }
    }

    fn status(self) -> ValidationStatus {
        match self {
            Self::PastDate => ValidationStatus::PastDate,
            Self::Today => ValidationStatus::Today,
            Self::TooFarFuture => ValidationStatus::TooFarFuture,
            Self::Valid => ValidationStatus::Valid,
        }
    }
}

/// Validates `input` against today's local date
pub fn validate_future_date(input: &str) -> DateValidation {
    validate_future_date_on(input, local_today())
}

pub fn validate_future_date_on(input: &str, today: NaiveDate) -> DateValidation {
    let target = match parse_iso_date(input) {
        Ok(target) => target,
        Err(e) => {
            return DateValidation {
                valid: false,
                status: ValidationStatus::InvalidFormat,
                message: format!(
                    "Invalid date format. Please use YYYY-MM-DD format (e.g., '2025-12-25'). Error: {}",
                    e
                ),
                input_date: input.to_string(),
                today: Some(format_iso_date(today)),
                days_difference: None,
                valid_range_start: None,
                valid_range_end: None,
                weeks_ahead: None,
                months_ahead: None,
            };
        }
    };

    let window = today
        .checked_add_days(Days::new(1))
        .zip(today.checked_add_days(Days::new(FUTURE_WINDOW_DAYS as u64)));
    let Some((window_start, window_end)) = window else {
        return DateValidation {
            valid: false,
            status: ValidationStatus::Error,
            message: format!(
                "An error occurred while validating the date: {} plus {} days is outside the supported calendar range",
                format_iso_date(today),
                FUTURE_WINDOW_DAYS
            ),
            input_date: input.to_string(),
            today: None,
            days_difference: None,
            valid_range_start: None,
            valid_range_end: None,
            weeks_ahead: None,
            months_ahead: None,
        };
    };

    let days = days_between(today, target);
    let verdict = DateVerdict::classify(days);

    let message = match verdict {
        DateVerdict::PastDate => format!(
            "The date '{}' is in the past. Please provide a future date.",
            input
        ),
        DateVerdict::Today => format!(
            "The date '{}' is today. Please provide a future date (tomorrow or later).",
            input
        ),
        DateVerdict::TooFarFuture => format!(
            "The date '{}' is {} days ahead, which exceeds the 6-month ({} days) limit. Please choose a date within the next 6 months.",
            input, days, FUTURE_WINDOW_DAYS
        ),
        DateVerdict::Valid => format!(
            "The date '{}' is valid. It is {} days in the future.",
            input, days
        ),
    };

    let (weeks_ahead, months_ahead) = match verdict {
        DateVerdict::Valid => (
            Some(round_to_tenth(days as f64 / 7.0)),
            Some(round_to_tenth(days as f64 / 30.0)),
        ),
        _ => (None, None),
    };

    DateValidation {
        valid: verdict == DateVerdict::Valid,
        status: verdict.status(),
        message,
        input_date: input.to_string(),
        today: Some(format_iso_date(today)),
        days_difference: Some(days),
        valid_range_start: Some(format_iso_date(window_start)),
        valid_range_end: Some(format_iso_date(window_end)),
        weeks_ahead,
        months_ahead,
    }
}
