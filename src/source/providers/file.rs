//! Local file source.

use async_trait::async_trait;
use log::debug;
use serde_json::Value;
use std::path::PathBuf;

use crate::source::provider::parse_body;
use crate::source::{DeckSource, LoadError};

pub struct FileSource {
    path: PathBuf,
    label: String,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let label = path.display().to_string();
        Self { path, label }
    }
}

#[async_trait]
impl DeckSource for FileSource {
    fn describe(&self) -> &str {
        &self.label
    }

    async fn fetch(&self) -> Result<Value, LoadError> {
        let body = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| LoadError::Io(format!("{}: {}", self.label, e)))?;
        debug!("Read {} bytes from {}", body.len(), self.label);
        parse_body(&body)
    }
}
