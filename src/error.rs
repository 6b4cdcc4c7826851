use thiserror::Error;

#[derive(Debug, Error)]
pub enum TimetableError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid assignment data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid grid config: {0}")]
    Config(#[from] ron::error::SpannedError),

    #[error("could not write grid config: {0}")]
    ConfigWrite(#[from] ron::Error),

    #[error("grid window {start_hour}..{end_hour} is not a range of hours within one day")]
    InvalidWindow { start_hour: u32, end_hour: u32 },

    #[error("grid config lists no days to render")]
    EmptyDays,
}

pub type Result<T> = std::result::Result<T, TimetableError>;
