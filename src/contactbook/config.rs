use crate::error::{BookError, Result};
use crate::pages::PAGE_SIZE;
use crate::store::fs::DEFAULT_BOOK_FILE;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for contactbook, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct BookConfig {
    /// Contact book file, relative to the data directory unless absolute
    #[serde(default = "default_book_file")]
    pub book_file: String,

    /// Records per listing page
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_book_file() -> String {
    DEFAULT_BOOK_FILE.to_string()
}

fn default_page_size() -> usize {
    PAGE_SIZE
}

impl Default for BookConfig {
    fn default() -> Self {
        Self {
            book_file: default_book_file(),
            page_size: default_page_size(),
        }
    }
}

impl BookConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(BookError::Io)?;
        let config: BookConfig =
            serde_json::from_str(&content).map_err(BookError::Serialization)?;
        Ok(config)
    }

    /// Where the contact book lives for a given data directory.
    pub fn book_path<P: AsRef<Path>>(&self, data_dir: P) -> PathBuf {
        data_dir.as_ref().join(&self.book_file)
    }

    /// Page size, never below one.
    pub fn page_size(&self) -> usize {
        self.page_size.max(1)
    }
}
