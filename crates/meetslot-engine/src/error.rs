//! Error types for meetslot-engine operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SlotError {
    #[error("Invalid work-hours policy: {0}")]
    InvalidPolicy(String),

    #[error("Invalid date: {0} (expected MM/DD/YYYY or YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Busy-data provider error: {0}")]
    Provider(String),
}

pub type Result<T> = std::result::Result<T, SlotError>;
