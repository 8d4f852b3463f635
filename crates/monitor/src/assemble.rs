//! Record assembly — extracted reading in, persistable record out.

use store::WaterRecord;

use crate::error::ValidationError;
use crate::models::ExtractedReading;
use crate::trend::classify;

/// Build a [`WaterRecord`] from an extracted reading.
///
/// The trend is always computed from `change_24h` here — it is never
/// accepted as external input, so the sign/trend invariant holds for
/// every record this function produces.  `id` and `created_at` stay
/// unset; the store assigns both on insert.
///
/// # Errors
/// `ValidationError` if either value is non-finite.  A successful
/// extraction already guarantees finiteness, so this is a last line of
/// defense.
pub fn assemble(reading: &ExtractedReading) -> Result<WaterRecord, ValidationError> {
    if !reading.water_level.is_finite() {
        return Err(ValidationError {
            field: "water_level",
            value: reading.water_level,
        });
    }
    if !reading.change_24h.is_finite() {
        return Err(ValidationError {
            field: "change_24h",
            value: reading.change_24h,
        });
    }

    Ok(WaterRecord {
        id: None,
        created_at: None,
        water_level: reading.water_level,
        change_24h: reading.change_24h,
        trend: classify(reading.change_24h),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::Trend;

    #[test]
    fn trend_always_matches_classification_of_change() {
        for change in [-250.0, -0.01, 0.0, 0.01, 3.0, 999.9] {
            let record = assemble(&ExtractedReading {
                water_level: 87.0,
                change_24h: change,
            })
            .unwrap();
            assert_eq!(record.trend, classify(record.change_24h));
        }
    }

    #[test]
    fn store_assigned_fields_stay_unset() {
        let record = assemble(&ExtractedReading {
            water_level: -120.5,
            change_24h: 3.0,
        })
        .unwrap();
        assert_eq!(record.id, None);
        assert_eq!(record.created_at, None);
        assert_eq!(record.trend, Trend::Rising);
    }

    #[test]
    fn non_finite_values_are_rejected() {
        let err = assemble(&ExtractedReading {
            water_level: f64::NAN,
            change_24h: 0.0,
        })
        .unwrap_err();
        assert_eq!(err.field, "water_level");

        let err = assemble(&ExtractedReading {
            water_level: 10.0,
            change_24h: f64::INFINITY,
        })
        .unwrap_err();
        assert_eq!(err.field, "change_24h");
    }
}
