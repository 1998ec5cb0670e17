//! Size classification and fit labeling.
//!
//! The classifier is a fixed threshold ladder on chest and waist. The fit
//! label is a placeholder that does not look at the garment at all.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::types::SizeLabel;

/// Upper bounds (exclusive) for chest and waist, smallest size first.
///
/// Anything that clears none of the brackets is `XXL`.
const SIZE_LADDER: [(f64, f64, SizeLabel); 5] = [
    (85.0, 70.0, SizeLabel::Xs),
    (90.0, 75.0, SizeLabel::S),
    (95.0, 80.0, SizeLabel::M),
    (100.0, 85.0, SizeLabel::L),
    (105.0, 90.0, SizeLabel::Xl),
];

/// Recommend a letter size from chest and waist circumference in cm.
///
/// Returns the first bracket where both values are strictly below its
/// thresholds. Inputs are not validated: negative values land in `XS`, and
/// NaN compares false everywhere so it falls through to `XXL`.
#[must_use]
pub fn classify_size(chest: f64, waist: f64) -> SizeLabel {
    SIZE_LADDER
        .iter()
        .find(|&&(max_chest, max_waist, _)| chest < max_chest && waist < max_waist)
        .map_or(SizeLabel::Xxl, |&(_, _, label)| label)
}

/// How an item is expected to fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FitLabel {
    Perfect,
    Good,
    Loose,
}

/// Label the fit of an item for a recommended size.
///
/// If the item is not offered in `recommended`, the label is always `Good`.
/// Otherwise one of the three labels is picked uniformly at random.
///
/// This is a placeholder: the result says nothing about the actual fit, and
/// an item that lacks the size reports a better fit than a coin flip would.
/// Callers should not build on it.
pub fn fit_label<S, R>(recommended: SizeLabel, available: &[S], rng: &mut R) -> FitLabel
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    let offered = available
        .iter()
        .any(|size| size.as_ref() == recommended.as_str());
    if !offered {
        return FitLabel::Good;
    }

    match rng.random_range(0..3_u8) {
        0 => FitLabel::Perfect,
        1 => FitLabel::Good,
        _ => FitLabel::Loose,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn test_below_first_bracket_is_xs() {
        assert_eq!(classify_size(84.9, 69.9), SizeLabel::Xs);
        assert_eq!(classify_size(60.0, 50.0), SizeLabel::Xs);
    }

    #[test]
    fn test_thresholds_are_exclusive() {
        assert_eq!(classify_size(85.0, 70.0), SizeLabel::S);
        assert_eq!(classify_size(90.0, 75.0), SizeLabel::M);
        // A value sitting on a threshold belongs to the next bracket up
        assert_eq!(classify_size(95.0, 80.0), SizeLabel::L);
        assert_eq!(classify_size(94.9, 79.9), SizeLabel::M);
    }

    #[test]
    fn test_both_measurements_must_fit() {
        // Small chest, large waist: only the waist decides
        assert_eq!(classify_size(80.0, 88.0), SizeLabel::Xl);
        assert_eq!(classify_size(104.0, 60.0), SizeLabel::Xl);
    }

    #[test]
    fn test_large_values_fall_through_to_xxl() {
        assert_eq!(classify_size(200.0, 200.0), SizeLabel::Xxl);
        assert_eq!(classify_size(105.0, 89.0), SizeLabel::Xxl);
    }

    #[test]
    fn test_nan_falls_through_to_xxl() {
        assert_eq!(classify_size(f64::NAN, 60.0), SizeLabel::Xxl);
        assert_eq!(classify_size(80.0, f64::NAN), SizeLabel::Xxl);
    }

    #[test]
    fn test_missing_size_is_always_good() {
        let mut rng = StdRng::seed_from_u64(7);
        let jeans = ["28", "30", "32", "34", "36", "38"];
        for _ in 0..100 {
            assert_eq!(fit_label(SizeLabel::M, &jeans, &mut rng), FitLabel::Good);
        }
    }

    #[test]
    fn test_offered_size_draws_every_label() {
        let mut rng = StdRng::seed_from_u64(42);
        let sizes = vec!["S".to_string(), "M".to_string(), "L".to_string()];
        let seen: HashSet<FitLabel> = (0..200)
            .map(|_| fit_label(SizeLabel::M, &sizes, &mut rng))
            .collect();
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn test_fit_label_serializes_capitalized() {
        assert_eq!(
            serde_json::to_string(&FitLabel::Perfect).ok().as_deref(),
            Some("\"Perfect\"")
        );
    }
}
