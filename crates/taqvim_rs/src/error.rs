//! Error type for the convenience layer.

use taqvim_calendar::{CalendarDate, CalendarError, CalendarId};
use taqvim_time::TimeError;

/// Errors from parsing user-facing dates and timestamps.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum TaqvimError {
    #[error(transparent)]
    Calendar(#[from] CalendarError),
    #[error(transparent)]
    Time(#[from] TimeError),
    /// Civil timestamp text or value could not be interpreted.
    #[error("unparseable civil timestamp: {0}")]
    UnparseableTimestamp(String),
    /// Fields parse but name a day the calendar does not have.
    #[error("{date} is not a valid {calendar} date")]
    InvalidDate {
        calendar: CalendarId,
        date: CalendarDate,
    },
}
