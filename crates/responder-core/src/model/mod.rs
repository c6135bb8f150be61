pub mod answer;
pub mod question;

use crate::error::CoreError;

pub use answer::{Answer, NewAnswer};
pub use question::{NewQuestion, Question};

/// Reject a required text field that is empty.
fn require_text(field: &str, value: &str) -> Result<(), CoreError> {
    if value.is_empty() {
        return Err(CoreError::validation(field, "must not be empty"));
    }
    Ok(())
}

/// Optional text fields may be absent, but not present and empty.
fn optional_text(field: &str, value: Option<&str>) -> Result<(), CoreError> {
    match value {
        Some(v) => require_text(field, v),
        None => Ok(()),
    }
}
