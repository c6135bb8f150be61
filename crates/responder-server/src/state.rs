use responder_store::QuestionStore;
use std::sync::Arc;

/// Produces identifiers for new questions and answers.
pub type IdSource = Arc<dyn Fn() -> String + Send + Sync>;

/// Shared application state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: QuestionStore,
    ids: IdSource,
}

impl AppState {
    /// State with random UUID v4 identifiers.
    pub fn new(store: QuestionStore) -> Self {
        Self::with_id_source(store, Arc::new(|| uuid::Uuid::new_v4().to_string()))
    }

    pub fn with_id_source(store: QuestionStore, ids: IdSource) -> Self {
        Self { store, ids }
    }

    pub fn next_id(&self) -> String {
        (self.ids)()
    }
}
