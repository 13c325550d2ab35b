//! Request timestamps for OKX API authentication.
//!
//! Every signed request carries an `OK-ACCESS-TIMESTAMP` header in the form
//! `2020-12-08T09:08:57.715Z`. The same string is the first part of the
//! signature input, so it is generated once per request and reused.

use time::OffsetDateTime;
use time::macros::format_description;

use crate::error::OkxError;

/// Trait for providing the timestamp of a signed request.
///
/// The default [`SystemClock`] reads the current UTC time. Tests swap in
/// [`FixedTimestamp`] to get reproducible signatures.
pub trait TimestampProvider: Send + Sync {
    /// Timestamp for the next request, formatted as `YYYY-MM-DDTHH:MM:SS.sssZ`.
    fn timestamp(&self) -> Result<String, OkxError>;
}

/// Format an instant the way OKX expects it: UTC, millisecond precision, `Z` suffix.
pub fn format_timestamp(datetime: OffsetDateTime) -> Result<String, OkxError> {
    datetime
        .to_offset(time::UtcOffset::UTC)
        .format(format_description!(
            "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z"
        ))
        .map_err(|e| OkxError::Auth(format!("Failed to format timestamp: {e}")))
}

/// Timestamp provider backed by the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl TimestampProvider for SystemClock {
    fn timestamp(&self) -> Result<String, OkxError> {
        format_timestamp(OffsetDateTime::now_utc())
    }
}

/// Timestamp provider that always returns the same value.
#[derive(Debug, Clone)]
pub struct FixedTimestamp {
    timestamp: String,
}

impl FixedTimestamp {
    /// Use a preformatted timestamp string verbatim.
    pub fn new(timestamp: impl Into<String>) -> Self {
        Self {
            timestamp: timestamp.into(),
        }
    }

    /// Use the instant `millis` milliseconds after the UNIX epoch.
    pub fn from_unix_millis(millis: i64) -> Result<Self, OkxError> {
        let datetime = OffsetDateTime::from_unix_timestamp_nanos(i128::from(millis) * 1_000_000)
            .map_err(|e| OkxError::Auth(format!("Timestamp out of range: {e}")))?;
        Ok(Self::new(format_timestamp(datetime)?))
    }
}

impl TimestampProvider for FixedTimestamp {
    fn timestamp(&self) -> Result<String, OkxError> {
        Ok(self.timestamp.clone())
    }
}
