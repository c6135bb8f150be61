use std::path::PathBuf;

pub const DEFAULT_STORAGE_FILE: &str = "questions.json";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;

/// Settings for `responder serve`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub storage_file: PathBuf,
}

impl ServerConfig {
    pub fn bind_addr(&self) -> (&str, u16) {
        (self.host.as_str(), self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.into(),
            port: DEFAULT_PORT,
            storage_file: PathBuf::from(DEFAULT_STORAGE_FILE),
        }
    }
}
