//! UTC timestamp value object.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A point in time, always UTC, serialized as RFC 3339.
///
/// Wraps `DateTime<Utc>` so the rest of the domain never handles a
/// naive or zoned datetime by accident. Ordering follows time order,
/// which the repositories rely on for newest-first listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    pub fn now() -> Self {
        Self(Utc::now())
    }

    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// True when both timestamps fall on the same UTC calendar day.
    ///
    /// The dashboard's "leads today" bucket is defined in UTC, not in
    /// the viewer's timezone.
    pub fn is_same_day(&self, other: &Timestamp) -> bool {
        self.0.date_naive() == other.0.date_naive()
    }

    /// Milliseconds since the Unix epoch, used as the URL suffix for
    /// published systems.
    pub fn as_unix_millis(&self) -> i64 {
        self.0.timestamp_millis()
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::now()
    }
}
