//! Error types for calendar parsing.

/// Errors from parsing calendar names and date text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum CalendarError {
    /// Calendar name not recognized.
    #[error("unknown calendar: {0}")]
    UnknownCalendar(String),
    /// Date text does not match `YYYY-MM-DD` or `YYYY-Www-D`.
    #[error("malformed date '{0}': expected YYYY-MM-DD or YYYY-Www-D")]
    MalformedDate(String),
    /// A numeric date field is outside its parseable range.
    #[error("{field} out of range: {value}")]
    FieldOutOfRange { field: &'static str, value: i64 },
}
