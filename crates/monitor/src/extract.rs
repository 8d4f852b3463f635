//! Numeric text extractor.
//!
//! The gauge page is scraped by a bot and comes back as free-form text
//! whose phrasing has drifted repeatedly (plain scrape dump, loose bot
//! prose, strict template).  Two strategies are tried in order and the
//! first that yields both quantities wins:
//!
//! 1. **Labeled fields** — the water-level field and the 24-hour-change
//!    field are located independently by their labels (English or
//!    Russian), regardless of the order they appear in.
//! 2. **Unit-suffix fallback** — every signed decimal immediately
//!    followed by a centimeter token, in order of appearance: first is
//!    the level, second is the change.
//!
//! Decimal commas are normalized to periods before parsing and a
//! leading sign is preserved.  When the text has drifted beyond
//! recognition the extractor fails loudly with the full diagnostic
//! context rather than guessing.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::ExtractError;
use crate::models::ExtractedReading;

/// "Water level" / "Уровень воды" followed by a signed decimal and an
/// optional unit token in either script.
///
/// The label-to-number gap must not cross sentence-terminating
/// punctuation or a line break: a garbled field must fail here and
/// fall over to the positional strategy instead of stealing a number
/// from the next sentence.
static LEVEL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?:water\s+level|уровень\s+воды)[^0-9+\-.!?\n]*([+-]?[0-9]+(?:[.,][0-9]+)?)\s*(?:cm|см|m|м)?",
    )
    .expect("level pattern compiles")
});

/// The 24-hour-change field, in its English ("change over 24h",
/// "24h change") and Russian ("изменение за 24 часа") spellings.
/// Same sentence-bounded gap as [`LEVEL_RE`].
static CHANGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?:change\s*(?:over|in|during)?\s*(?:the\s+)?(?:last\s+)?24\s*[\- ]?\s*h(?:(?:ou)?rs?)?|24\s*[\- ]?\s*h(?:(?:ou)?rs?)?\s*change|изменение\s*за\s*24\s*час\w*)[^0-9+\-.!?\n]*([+-]?[0-9]+(?:[.,][0-9]+)?)\s*(?:cm|см|m|м)?",
    )
    .expect("change pattern compiles")
});

/// A signed decimal immediately followed by a centimeter token.
static UNIT_SUFFIX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)([+-]?[0-9]+(?:[.,][0-9]+)?)\s*(?:cm|см)\b").expect("unit pattern compiles")
});

/// Pull the water level and 24-hour change out of `text`.
///
/// # Errors
/// [`ExtractError::TooFewCandidates`] when fewer than two qualifying
/// numeric tokens are found, [`ExtractError::NonFinite`] when a chosen
/// token does not parse to a finite number.  Both carry the raw text
/// and the matched substrings for drift diagnosis.
pub fn extract(text: &str) -> Result<ExtractedReading, ExtractError> {
    let (level_token, change_token) = match labeled_candidates(text) {
        Some(pair) => pair,
        None => unit_suffix_candidates(text)?,
    };
    let matched = vec![level_token.clone(), change_token.clone()];

    let water_level = parse_decimal(&level_token).ok_or_else(|| ExtractError::NonFinite {
        raw_text: text.to_string(),
        candidate: level_token.clone(),
        found: matched.len(),
        matched: matched.clone(),
    })?;
    let change_24h = parse_decimal(&change_token).ok_or_else(|| ExtractError::NonFinite {
        raw_text: text.to_string(),
        candidate: change_token.clone(),
        found: matched.len(),
        matched: matched.clone(),
    })?;

    Ok(ExtractedReading {
        water_level,
        change_24h,
    })
}

/// Strategy 1: both fields located by label, order-independent.
/// `None` when either label is missing.
fn labeled_candidates(text: &str) -> Option<(String, String)> {
    let level = LEVEL_RE.captures(text)?.get(1)?.as_str().to_string();
    let change = CHANGE_RE.captures(text)?.get(1)?.as_str().to_string();
    Some((level, change))
}

/// Strategy 2: cm-suffixed numbers in order of appearance.
fn unit_suffix_candidates(text: &str) -> Result<(String, String), ExtractError> {
    let matched: Vec<String> = UNIT_SUFFIX_RE
        .captures_iter(text)
        .map(|c| c[1].to_string())
        .collect();

    if matched.len() < 2 {
        return Err(ExtractError::TooFewCandidates {
            raw_text: text.to_string(),
            found: matched.len(),
            matched,
        });
    }

    Ok((matched[0].clone(), matched[1].clone()))
}

/// Normalize the decimal separator and parse, rejecting non-finite
/// results.  A leading `-` (or `+`) survives parsing.
fn parse_decimal(token: &str) -> Option<f64> {
    token
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

// ============================================================
// Unit tests
// ============================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_template_round_trips_exactly() {
        let reading = extract("Water level: 12.34 cm. Change over 24h: -0.56 cm.").unwrap();
        assert_eq!(reading.water_level, 12.34);
        assert_eq!(reading.change_24h, -0.56);
    }

    #[test]
    fn comma_decimal_separator_extracts_identically() {
        let reading = extract("Water level: 12,34 cm. Change over 24h: -0,56 cm.").unwrap();
        assert_eq!(reading.water_level, 12.34);
        assert_eq!(reading.change_24h, -0.56);
    }

    #[test]
    fn russian_template_with_cyrillic_units() {
        let reading = extract("Уровень воды: -120.50 см. Изменение за 24 часа: +3 см.").unwrap();
        assert_eq!(reading.water_level, -120.5);
        assert_eq!(reading.change_24h, 3.0);
    }

    #[test]
    fn label_order_does_not_matter() {
        let reading = extract("Изменение за 24 часа: 5 см. Уровень воды: 100 см.").unwrap();
        assert_eq!(reading.water_level, 100.0);
        assert_eq!(reading.change_24h, 5.0);
    }

    #[test]
    fn meter_unit_is_accepted_on_labeled_fields() {
        let reading = extract("Water level: 1.2 m, change over 24 hours: 0 cm").unwrap();
        assert_eq!(reading.water_level, 1.2);
        assert_eq!(reading.change_24h, 0.0);
    }

    #[test]
    fn fallback_takes_unit_suffixed_numbers_in_order() {
        let reading = extract("Сейчас на посту 145 см, сутки назад было на -2 см меньше.").unwrap();
        assert_eq!(reading.water_level, 145.0);
        assert_eq!(reading.change_24h, -2.0);
    }

    #[test]
    fn fallback_ignores_numbers_without_a_unit() {
        let reading = extract("Post #7 reported 145 см today and -2 см drift.").unwrap();
        assert_eq!(reading.water_level, 145.0);
        assert_eq!(reading.change_24h, -2.0);
    }

    #[test]
    fn single_candidate_fails_with_diagnostics() {
        let err = extract("Только одно значение: 145 см").unwrap_err();
        match err {
            ExtractError::TooFewCandidates {
                raw_text,
                found,
                matched,
            } => {
                assert_eq!(found, 1);
                assert_eq!(matched, vec!["145"]);
                assert!(raw_text.contains("145 см"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn garbled_text_fails_instead_of_guessing() {
        let err = extract("Гидропост временно не передаёт данные.").unwrap_err();
        assert!(matches!(
            err,
            ExtractError::TooFewCandidates { found: 0, .. }
        ));
    }

    #[test]
    fn partial_labels_fall_back_to_positional_scan() {
        // Level label present, change label garbled — strategy 1 cannot
        // complete, strategy 2 still finds both cm-suffixed numbers.
        let reading = extract("Уровень воды: 87 см. Колебание: -1,5 см.").unwrap();
        assert_eq!(reading.water_level, 87.0);
        assert_eq!(reading.change_24h, -1.5);
    }

    #[test]
    fn garbled_level_field_does_not_borrow_the_next_label() {
        // The level value is missing; the "24" of the following change
        // label must not be captured as the level.  Strategy 1 fails,
        // strategy 2 finds only one cm-suffixed number and errors.
        let err = extract("Water level: unavailable. Change over 24h: 2 cm.").unwrap_err();
        match err {
            ExtractError::TooFewCandidates { found, matched, .. } => {
                assert_eq!(found, 1);
                assert_eq!(matched, vec!["2"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn garbled_change_field_fails_loudly() {
        let err = extract("Уровень воды: 87 см. Изменение за 24 часа: нет данных.").unwrap_err();
        assert!(matches!(
            err,
            ExtractError::TooFewCandidates { found: 1, .. }
        ));
    }

    #[test]
    fn oversized_candidate_is_rejected_as_non_finite() {
        let huge = "9".repeat(400);
        let text = format!("Water level: {huge} cm. Change over 24h: 1 cm.");
        let err = extract(&text).unwrap_err();
        match err {
            ExtractError::NonFinite {
                candidate,
                found,
                matched,
                raw_text,
            } => {
                assert_eq!(candidate, huge);
                assert_eq!(found, 2);
                assert_eq!(matched, vec![huge.clone(), "1".to_string()]);
                assert!(raw_text.contains(&huge));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
