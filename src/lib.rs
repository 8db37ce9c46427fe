// BMI Tracker - Core Library
// Engine, storage and history are usable without the terminal shell

pub mod bmi;
pub mod config;
pub mod error;
pub mod history;
pub mod logging;
pub mod store;

#[cfg(feature = "tui")]
pub mod ui;

// Re-export commonly used types
pub use bmi::{
    calculate, calculate_from_input, parse_measurement, round2,
    BmiRecord, UnitMode, WeightStatus,
};
pub use config::{Config, StorageBackend};
pub use error::InputError;
pub use history::{History, HistoryView, TrendStats};
pub use store::{CsvStore, RecordStore, SqliteStore, HEADER};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
