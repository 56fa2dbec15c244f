//! Ambiguous civil-time input accepted by [`DualCalendarDate`].

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

use crate::date::DualCalendarDate;
use crate::error::TaqvimError;

const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y/%m/%d"];
const DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

/// Anything a civil timestamp can be built from.
#[derive(Debug, Clone, PartialEq)]
pub enum CivilInput {
    DateTime(NaiveDateTime),
    /// Date at civil midnight.
    Date(NaiveDate),
    /// Milliseconds since the Unix epoch, read as UTC wall time.
    TimestampMillis(i64),
    /// `YYYY-MM-DD`, `YYYY/MM/DD`, `YYYY-MM-DDThh:mm:ss` or
    /// `YYYY-MM-DD hh:mm:ss`.
    Text(String),
    /// Another dual date; its civil timestamp is copied.
    Dual(DualCalendarDate),
}

impl CivilInput {
    /// Interpret the input as a civil timestamp.
    pub fn resolve(&self) -> Result<NaiveDateTime, TaqvimError> {
        match self {
            Self::DateTime(dt) => Ok(*dt),
            Self::Date(d) => Ok(d.and_time(NaiveTime::MIN)),
            Self::TimestampMillis(ms) => DateTime::from_timestamp_millis(*ms)
                .map(|dt| dt.naive_utc())
                .ok_or_else(|| TaqvimError::UnparseableTimestamp(ms.to_string())),
            Self::Text(text) => parse_text(text),
            Self::Dual(dual) => Ok(dual.to_civil_timestamp()),
        }
    }
}

fn parse_text(text: &str) -> Result<NaiveDateTime, TaqvimError> {
    let trimmed = text.trim();
    for fmt in DATE_TIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, fmt) {
            return Ok(dt);
        }
    }
    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(trimmed, fmt) {
            return Ok(d.and_time(NaiveTime::MIN));
        }
    }
    Err(TaqvimError::UnparseableTimestamp(text.to_string()))
}

impl From<NaiveDateTime> for CivilInput {
    fn from(dt: NaiveDateTime) -> Self {
        Self::DateTime(dt)
    }
}

impl From<NaiveDate> for CivilInput {
    fn from(d: NaiveDate) -> Self {
        Self::Date(d)
    }
}

impl From<i64> for CivilInput {
    fn from(ms: i64) -> Self {
        Self::TimestampMillis(ms)
    }
}

impl From<&str> for CivilInput {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for CivilInput {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<DualCalendarDate> for CivilInput {
    fn from(dual: DualCalendarDate) -> Self {
        Self::Dual(dual)
    }
}

impl From<&DualCalendarDate> for CivilInput {
    fn from(dual: &DualCalendarDate) -> Self {
        Self::Dual(*dual)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn text_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 20).unwrap();
        for text in ["2024-03-20", "2024/03/20", " 2024-03-20 "] {
            let dt = CivilInput::from(text).resolve().unwrap();
            assert_eq!(dt.date(), expected, "{text}");
            assert_eq!(dt.hour(), 0);
        }
        for text in ["2024-03-20T15:30:00", "2024-03-20 15:30:00"] {
            let dt = CivilInput::from(text).resolve().unwrap();
            assert_eq!((dt.date(), dt.hour(), dt.minute()), (expected, 15, 30), "{text}");
        }
    }

    #[test]
    fn garbage_text_rejected() {
        for text in ["", "yesterday", "2024-13-01", "2023-02-29"] {
            assert!(
                matches!(
                    CivilInput::from(text).resolve(),
                    Err(TaqvimError::UnparseableTimestamp(_))
                ),
                "accepted {text:?}"
            );
        }
    }

    #[test]
    fn millis_read_as_utc() {
        let dt = CivilInput::from(0_i64).resolve().unwrap();
        assert_eq!(dt, NaiveDate::from_ymd_opt(1970, 1, 1).unwrap().and_time(NaiveTime::MIN));
        assert!(CivilInput::from(i64::MAX).resolve().is_err());
    }

    #[test]
    fn date_at_midnight() {
        let d = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        let dt = CivilInput::from(d).resolve().unwrap();
        assert_eq!(dt.time(), NaiveTime::MIN);
    }
}
