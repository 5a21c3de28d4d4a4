use std::fmt;
use std::str::FromStr;

use regex::Regex;

use crate::error::RejectReason;

/// Characters ignored by the shape check
const SEPARATORS: &[char] = &['-', '(', ')'];

/// A caller supplied phone number.
/// Stored as typed; the shape check runs against the digits left after stripping separators.
#[derive(Debug, PartialEq, Clone)]
pub struct PhoneNumber(String);

fn strip_separators(value: &str) -> String {
    value
        .chars()
        .filter(|c| !c.is_whitespace() && !SEPARATORS.contains(c))
        .collect()
}

impl FromStr for PhoneNumber {
    type Err = RejectReason;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        lazy_static::lazy_static! {
            // Optional '+', a nonzero leading digit, then up to fifteen more digits
            static ref PHONE_REGEX: Regex = Regex::new(r"^\+?[1-9][0-9]{0,15}$").unwrap();
        }

        if !PHONE_REGEX.is_match(&strip_separators(value)) {
            return Err(RejectReason::InvalidPhone);
        }

        Ok(Self(value.to_string()))
    }
}

impl AsRef<str> for PhoneNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
