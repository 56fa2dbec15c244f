//! Error types for clock parsing.

/// Errors from parsing clock-level values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum TimeError {
    /// Weekday name or number not recognized.
    #[error("unknown weekday: {0}")]
    UnknownWeekday(String),
}
