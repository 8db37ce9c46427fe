// ⚙️ Configuration
// Where data and logs live, and which storage backend to use

use crate::store::{CsvStore, RecordStore, SqliteStore};
use anyhow::Result;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageBackend {
    #[default]
    Csv,
    Sqlite,
}

#[derive(Debug, Clone)]
pub struct Config {
    /// CSV history, relative to the working directory
    pub data_path: PathBuf,
    /// Used only with `StorageBackend::Sqlite`
    pub database_path: PathBuf,
    pub log_path: PathBuf,
    pub backend: StorageBackend,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_path: PathBuf::from("bmi_data.csv"),
            database_path: PathBuf::from("bmi_data.db"),
            log_path: PathBuf::from("bmi-tracker.log"),
            backend: StorageBackend::default(),
        }
    }
}

impl Config {
    /// Build the configured store. Does not initialize it.
    pub fn open_store(&self) -> Result<Box<dyn RecordStore>> {
        let store: Box<dyn RecordStore> = match self.backend {
            StorageBackend::Csv => Box::new(CsvStore::new(&self.data_path)),
            StorageBackend::Sqlite => Box::new(SqliteStore::open(&self.database_path)?),
        };
        Ok(store)
    }
}
