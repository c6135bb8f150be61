use super::optional_text;
use crate::error::CoreError;
use serde::{Deserialize, Serialize};

/// A reply stored inside its parent question.
///
/// `author` and `summary` are optional; absent values are omitted from the
/// serialized record rather than written as `null`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Answer {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

/// An answer as submitted by a client, before an id is assigned.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct NewAnswer {
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
}

impl NewAnswer {
    pub fn validate(&self) -> Result<(), CoreError> {
        self.validate_at("")
    }

    /// Validate with field names qualified by `prefix`, e.g. `answers[2].`.
    pub(crate) fn validate_at(&self, prefix: &str) -> Result<(), CoreError> {
        optional_text(&format!("{prefix}author"), self.author.as_deref())?;
        optional_text(&format!("{prefix}summary"), self.summary.as_deref())
    }

    pub fn into_answer(self, id: impl Into<String>) -> Answer {
        Answer {
            id: id.into(),
            author: self.author,
            summary: self.summary,
        }
    }
}
