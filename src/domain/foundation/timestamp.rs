//! Timestamp value object for immutable points in time.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Immutable point in time, always UTC.
///
/// Serializes as Unix epoch milliseconds so timing records stay plain numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "i64", try_from = "i64")]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Creates a timestamp from a DateTime<Utc>.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Creates a timestamp from Unix epoch milliseconds.
    ///
    /// Returns `None` for values outside chrono's representable range.
    pub fn from_millis(millis: i64) -> Option<Self> {
        Utc.timestamp_millis_opt(millis).single().map(Self)
    }

    /// Returns the inner DateTime.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Returns the timestamp as Unix epoch milliseconds.
    pub fn as_millis(&self) -> i64 {
        self.0.timestamp_millis()
    }

    /// Milliseconds elapsed from `earlier` to this timestamp.
    ///
    /// Clock skew that would produce a negative span yields zero.
    pub fn millis_since(&self, earlier: &Timestamp) -> u64 {
        self.0
            .signed_duration_since(earlier.0)
            .num_milliseconds()
            .max(0) as u64
    }

    /// Checks if this timestamp is before another.
    pub fn is_before(&self, other: &Timestamp) -> bool {
        self.0 < other.0
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::now()
    }
}

impl From<Timestamp> for i64 {
    fn from(ts: Timestamp) -> Self {
        ts.as_millis()
    }
}

impl TryFrom<i64> for Timestamp {
    type Error = String;

    fn try_from(millis: i64) -> Result<Self, Self::Error> {
        Timestamp::from_millis(millis).ok_or_else(|| format!("timestamp out of range: {}", millis))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_now_creates_current_time() {
        let before = Utc::now();
        let ts = Timestamp::now();
        let after = Utc::now();

        assert!(ts.as_datetime() >= &before);
        assert!(ts.as_datetime() <= &after);
    }

    #[test]
    fn timestamp_millis_roundtrip() {
        let ts = Timestamp::from_millis(1_705_276_800_123).unwrap();
        assert_eq!(ts.as_millis(), 1_705_276_800_123);
    }

    #[test]
    fn millis_since_measures_span() {
        let start = Timestamp::from_millis(1_000).unwrap();
        let end = Timestamp::from_millis(4_250).unwrap();
        assert_eq!(end.millis_since(&start), 3_250);
    }

    #[test]
    fn millis_since_never_goes_negative() {
        let start = Timestamp::from_millis(5_000).unwrap();
        let end = Timestamp::from_millis(4_000).unwrap();
        assert_eq!(end.millis_since(&start), 0);
    }

    #[test]
    fn timestamp_serializes_as_epoch_millis() {
        let ts = Timestamp::from_millis(1_705_276_800_000).unwrap();
        let json = serde_json::to_string(&ts).unwrap();
        assert_eq!(json, "1705276800000");

        let back: Timestamp = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ts);
    }

    #[test]
    fn timestamp_ordering_works() {
        let ts1 = Timestamp::from_millis(10).unwrap();
        let ts2 = Timestamp::from_millis(20).unwrap();

        assert!(ts1 < ts2);
        assert!(ts1.is_before(&ts2));
    }
}
