use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read question document {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("question document {origin} is malformed: {source}")]
    Malformed {
        origin: String,
        source: serde_json::Error,
    },

    #[error("failed to write question document {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to serialize questions: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("question document already exists at {0}")]
    DocumentExists(String),
}

impl StoreError {
    /// The document could not be loaded: missing, unreadable or malformed.
    pub fn is_read(&self) -> bool {
        matches!(self, Self::Read { .. } | Self::Malformed { .. })
    }

    /// The document could not be rewritten.
    pub fn is_write(&self) -> bool {
        matches!(self, Self::Write { .. } | Self::Serialize(_))
    }
}
