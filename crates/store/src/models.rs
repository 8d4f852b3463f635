//! Row structs that map 1-to-1 onto the `water_levels` table.
//!
//! These are *persistence* models — field names are bit-exact with the
//! wire shape the store expects.  Domain logic (classification,
//! assembly) lives in the `monitor` crate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Trend
// ---------------------------------------------------------------------------

/// Direction of the 24-hour water level change.
///
/// Derived from the sign of `change_24h`, never authored independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Trend {
    Rising,
    Falling,
    Stable,
}

impl std::fmt::Display for Trend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rising => write!(f, "RISING"),
            Self::Falling => write!(f, "FALLING"),
            Self::Stable => write!(f, "STABLE"),
        }
    }
}

impl std::str::FromStr for Trend {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "RISING" => Ok(Self::Rising),
            "FALLING" => Ok(Self::Falling),
            "STABLE" => Ok(Self::Stable),
            other => Err(format!("unknown trend: {other}")),
        }
    }
}

// ---------------------------------------------------------------------------
// water_levels
// ---------------------------------------------------------------------------

/// A persisted water level reading.
///
/// `id` and `created_at` are assigned by the store on insert and are
/// therefore omitted from the outgoing payload when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Centimeters relative to the gauge station zero; negative means
    /// below the datum.
    pub water_level: f64,
    /// Signed delta over the preceding 24 hours, in centimeters.
    pub change_24h: f64,
    pub trend: Trend,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unsaved_record_serializes_without_store_assigned_fields() {
        let record = WaterRecord {
            id: None,
            created_at: None,
            water_level: -120.5,
            change_24h: 3.0,
            trend: Trend::Rising,
        };

        let value = serde_json::to_value(&record).expect("serializable");
        assert_eq!(
            value,
            json!({ "water_level": -120.5, "change_24h": 3.0, "trend": "RISING" })
        );
    }

    #[test]
    fn persisted_row_round_trips() {
        let raw = json!({
            "id": 42,
            "created_at": "2026-08-01T06:30:00+00:00",
            "water_level": 87.0,
            "change_24h": -2.5,
            "trend": "FALLING"
        });

        let record: WaterRecord = serde_json::from_value(raw).expect("deserializable");
        assert_eq!(record.id, Some(42));
        assert_eq!(record.water_level, 87.0);
        assert_eq!(record.change_24h, -2.5);
        assert_eq!(record.trend, Trend::Falling);
        assert!(record.created_at.is_some());
    }

    #[test]
    fn trend_display_matches_wire_names() {
        for (trend, name) in [
            (Trend::Rising, "RISING"),
            (Trend::Falling, "FALLING"),
            (Trend::Stable, "STABLE"),
        ] {
            assert_eq!(trend.to_string(), name);
            assert_eq!(name.parse::<Trend>().unwrap(), trend);
        }
    }
}
