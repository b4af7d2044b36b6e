use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid day style: {0} (expected numeric|2-digit)")]
    InvalidDayStyle(String),
    #[error("invalid month style: {0} (expected numeric|2-digit|long|short|narrow)")]
    InvalidMonthStyle(String),
    #[error("invalid year style: {0} (expected numeric|2-digit)")]
    InvalidYearStyle(String),
    #[error("invalid discord link target: {0} (expected client|web)")]
    InvalidDiscordTarget(String),
}
