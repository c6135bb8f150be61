use crate::error::StoreError;
use crate::storage::{DocumentStorage, FileStorage};
use responder_core::{Answer, Question};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

/// Question repository over a single persisted document.
///
/// Holds no state of its own: every read loads the document fresh and every
/// mutation rewrites it once. Concurrent read-modify-write cycles are not
/// coordinated, so the later write wins.
#[derive(Clone)]
pub struct QuestionStore {
    storage: Arc<dyn DocumentStorage>,
}

impl QuestionStore {
    pub fn new(storage: impl DocumentStorage + 'static) -> Self {
        Self {
            storage: Arc::new(storage),
        }
    }

    pub fn with_shared(storage: Arc<dyn DocumentStorage>) -> Self {
        Self { storage }
    }

    /// Store backed by the document at `path`. The file must already exist.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self::new(FileStorage::new(path))
    }

    /// All questions in persisted order.
    pub fn list_questions(&self) -> Result<Vec<Question>, StoreError> {
        let questions = self.storage.load()?;
        debug!(count = questions.len(), "loaded questions");
        Ok(questions)
    }

    /// Returns `None` for an empty id or when no question matches.
    pub fn get_question_by_id(&self, question_id: &str) -> Result<Option<Question>, StoreError> {
        if question_id.is_empty() {
            return Ok(None);
        }
        Ok(self
            .list_questions()?
            .into_iter()
            .find(|q| q.id == question_id))
    }

    /// Append a fully formed question. Ids are not checked for collisions.
    pub fn add_question(&self, question: Question) -> Result<(), StoreError> {
        let mut questions = self.list_questions()?;
        debug!(question_id = %question.id, answers = question.answers.len(), "adding question");
        questions.push(question);
        self.storage.save(&questions)
    }

    pub fn list_answers(&self, question_id: &str) -> Result<Option<Vec<Answer>>, StoreError> {
        Ok(self.get_question_by_id(question_id)?.map(|q| q.answers))
    }

    /// `None` if either the question or the answer within it is absent.
    pub fn get_answer(
        &self,
        question_id: &str,
        answer_id: &str,
    ) -> Result<Option<Answer>, StoreError> {
        Ok(self
            .get_question_by_id(question_id)?
            .and_then(|q| q.find_answer(answer_id).cloned()))
    }

    /// Append `answer` to the matching question and rewrite the document.
    ///
    /// The rewritten collection keeps every other question as loaded and in
    /// place. Returns the updated question, or `None` without writing when
    /// no question matches.
    pub fn add_answer(
        &self,
        question_id: &str,
        answer: Answer,
    ) -> Result<Option<Question>, StoreError> {
        let questions = self.list_questions()?;
        let Some(pos) = questions.iter().position(|q| q.id == question_id) else {
            debug!(question_id, "question not found, answer dropped");
            return Ok(None);
        };

        let updated = questions[pos].with_answer(answer);
        let next: Vec<Question> = questions
            .into_iter()
            .enumerate()
            .map(|(i, q)| if i == pos { updated.clone() } else { q })
            .collect();

        debug!(question_id, answers = updated.answers.len(), "adding answer");
        self.storage.save(&next)?;
        Ok(Some(updated))
    }
}
