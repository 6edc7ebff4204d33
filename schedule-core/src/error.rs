//! Error types for summit schedules.

use thiserror::Error;

/// Errors that can occur while grouping or configuring a schedule.
#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("Unknown timezone: {0}")]
    UnknownTimeZone(String),

    #[error("Invalid summit date '{0}'. Expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Event {id} ends before it starts")]
    InvalidEventTimes { id: u64 },

    #[error("Invalid 'now' override '{0}'. Expected YYYY-MM-DD,HH:MM:SS")]
    InvalidNow(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for schedule operations.
pub type ScheduleResult<T> = Result<T, ScheduleError>;
