//! Staleness evaluation — should the startup path kick off a refresh?

use chrono::{DateTime, Duration, Utc};
use store::WaterRecord;

/// A record older than this (strictly) is stale.
pub const STALE_AFTER_MS: i64 = 86_400_000;

/// True when there is no data at all, or when the latest record is
/// strictly older than 24 hours.  Exactly 24 hours is still fresh.
///
/// A record that somehow lacks `created_at` cannot be aged and does not
/// trigger a refresh.
pub fn is_stale(latest: Option<&WaterRecord>, now: DateTime<Utc>) -> bool {
    match latest {
        None => true,
        Some(record) => match record.created_at {
            Some(created_at) => now - created_at > Duration::milliseconds(STALE_AFTER_MS),
            None => false,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::Trend;

    fn record_at(created_at: Option<DateTime<Utc>>) -> WaterRecord {
        WaterRecord {
            id: Some(1),
            created_at,
            water_level: 87.0,
            change_24h: 0.0,
            trend: Trend::Stable,
        }
    }

    #[test]
    fn absent_record_is_stale() {
        assert!(is_stale(None, Utc::now()));
    }

    #[test]
    fn strictly_over_24h_is_stale() {
        let now = Utc::now();
        let record = record_at(Some(now - Duration::milliseconds(STALE_AFTER_MS + 1)));
        assert!(is_stale(Some(&record), now));
    }

    #[test]
    fn exactly_24h_is_still_fresh() {
        let now = Utc::now();
        let record = record_at(Some(now - Duration::milliseconds(STALE_AFTER_MS)));
        assert!(!is_stale(Some(&record), now));
    }

    #[test]
    fn recent_record_is_fresh() {
        let now = Utc::now();
        let record = record_at(Some(now - Duration::hours(1)));
        assert!(!is_stale(Some(&record), now));
    }

    #[test]
    fn record_without_timestamp_does_not_trigger() {
        assert!(!is_stale(Some(&record_at(None)), Utc::now()));
    }
}
