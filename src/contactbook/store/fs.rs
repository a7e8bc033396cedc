use super::BookBackend;
use crate::error::{BookError, Result};
use crate::record::Record;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const DEFAULT_BOOK_FILE: &str = "book.json";

pub struct JsonFileBackend {
    path: PathBuf,
}

impl JsonFileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(BookError::Io)?;
            }
        }
        Ok(())
    }
}

impl BookBackend for JsonFileBackend {
    fn load(&self) -> Result<Option<Vec<Record>>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no contact book yet, starting empty");
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path).map_err(BookError::Io)?;
        let records: Vec<Record> =
            serde_json::from_str(&content).map_err(BookError::Serialization)?;
        debug!(path = %self.path.display(), records = records.len(), "loaded contact book");
        Ok(Some(records))
    }

    fn save(&mut self, records: &[Record]) -> Result<()> {
        self.ensure_parent()?;
        let content = serde_json::to_string_pretty(records).map_err(BookError::Serialization)?;
        fs::write(&self.path, content).map_err(BookError::Io)?;
        info!(path = %self.path.display(), records = records.len(), "saved contact book");
        Ok(())
    }
}
