use chrono::{Local, NaiveDate};

use crate::model::ContactSubmission;

use super::FormField;

const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

/// Why the form refused to submit.
/// Mirrors the browser's native constraint checks; the server re-validates everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ClientValidationError {
    #[error("Please fill out the {0} field")]
    MissingField(FormField),
    #[error("Call date must be {0} or later")]
    CallDateBeforeMinimum(NaiveDate),
}

/// Earliest date the date picker offers
pub fn min_call_date() -> NaiveDate {
    Local::now().date_naive()
}

/// Presence and minimum-date checks only, reporting the first offending field
pub fn check(fields: &ContactSubmission, min_date: NaiveDate) -> Result<(), ClientValidationError> {
    for field in FormField::REQUIRED {
        if field.value_in(fields).is_empty() {
            return Err(ClientValidationError::MissingField(field));
        }
    }

    // A date input holds either a well-formed date or nothing
    let call_date = NaiveDate::parse_from_str(&fields.call_date, DATE_INPUT_FORMAT)
        .map_err(|_| ClientValidationError::MissingField(FormField::CallDate))?;
    if call_date < min_date {
        return Err(ClientValidationError::CallDateBeforeMinimum(min_date));
    }

    Ok(())
}
