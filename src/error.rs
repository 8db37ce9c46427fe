// ⚠️ Input Errors
// The one recognized failure of the calculate action

use thiserror::Error;

/// Rejected form input. The `Display` text is what the user sees in the
/// "Input Error" popup.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("could not convert {field} to a number: '{input}'")]
    InvalidNumber { field: &'static str, input: String },

    #[error("Weight and height must be positive numbers.")]
    NonPositive,

    #[error("Invalid measurement type selected.")]
    UnknownUnit(String),

    #[error("BMI is out of range for these weight and height values.")]
    OutOfRange,
}
