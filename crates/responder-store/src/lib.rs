pub mod error;
pub mod repository;
pub mod storage;

pub use error::StoreError;
pub use repository::QuestionStore;
pub use storage::{DocumentStorage, FileStorage, MemoryStorage};
