use super::answer::{Answer, NewAnswer};
use super::require_text;
use crate::error::CoreError;
use serde::{Deserialize, Serialize};

/// A question record with its answers in creation order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Question {
    pub id: String,
    pub author: String,
    pub summary: String,
    pub answers: Vec<Answer>,
}

impl Question {
    /// Find an answer by id; first match wins.
    pub fn find_answer(&self, answer_id: &str) -> Option<&Answer> {
        self.answers.iter().find(|a| a.id == answer_id)
    }

    /// Return a copy of this question with `answer` appended.
    ///
    /// `self` is left untouched.
    pub fn with_answer(&self, answer: Answer) -> Question {
        let mut answers = Vec::with_capacity(self.answers.len() + 1);
        answers.extend(self.answers.iter().cloned());
        answers.push(answer);
        Question {
            id: self.id.clone(),
            author: self.author.clone(),
            summary: self.summary.clone(),
            answers,
        }
    }
}

/// A question as submitted by a client, before ids are assigned.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct NewQuestion {
    pub author: String,
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answers: Option<Vec<NewAnswer>>,
}

impl NewQuestion {
    pub fn validate(&self) -> Result<(), CoreError> {
        require_text("author", &self.author)?;
        require_text("summary", &self.summary)?;
        for (i, answer) in self.answers.iter().flatten().enumerate() {
            answer.validate_at(&format!("answers[{i}]."))?;
        }
        Ok(())
    }

    /// Build the full record, drawing the question id first and then one id
    /// per supplied answer, in order.
    pub fn into_question(self, mut next_id: impl FnMut() -> String) -> Question {
        let id = next_id();
        let answers = self
            .answers
            .unwrap_or_default()
            .into_iter()
            .map(|a| a.into_answer(next_id()))
            .collect();
        Question {
            id,
            author: self.author,
            summary: self.summary,
            answers,
        }
    }
}
