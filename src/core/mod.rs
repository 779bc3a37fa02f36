//! Core module - Common types, configuration, and errors

mod config;
mod error;
mod types;

pub use config::{Config, EmissionConfig, GeneralConfig};
pub use error::{Error, Result};
pub use types::{AcCapacity, ApplianceKind, CalculationEntry, HistoryRow, Snapshot, Totals};
