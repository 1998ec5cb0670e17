//! Simulated camera measurement capture.
//!
//! There is no computer vision behind this: every field is drawn uniformly
//! from a plausible adult range and rounded to one decimal, the way the
//! camera screen fakes an AI scan.

use std::ops::Range;

use rand::Rng;

use crate::measurements::BodyMeasurements;

/// Sampling range (cm) for every field, in column order.
pub const CHEST_RANGE: Range<f64> = 85.0..105.0;
pub const WAIST_RANGE: Range<f64> = 70.0..85.0;
pub const HIPS_RANGE: Range<f64> = 90.0..105.0;
pub const SHOULDERS_RANGE: Range<f64> = 40.0..50.0;
pub const NECK_RANGE: Range<f64> = 34.0..44.0;
pub const SLEEVE_LENGTH_RANGE: Range<f64> = 55.0..65.0;
pub const INSEAM_RANGE: Range<f64> = 75.0..90.0;

/// Produce one simulated measurement set.
pub fn simulate_measurements<R: Rng + ?Sized>(rng: &mut R) -> BodyMeasurements {
    BodyMeasurements {
        chest: sample(rng, CHEST_RANGE),
        waist: sample(rng, WAIST_RANGE),
        hips: sample(rng, HIPS_RANGE),
        shoulders: sample(rng, SHOULDERS_RANGE),
        neck: sample(rng, NECK_RANGE),
        sleeve_length: sample(rng, SLEEVE_LENGTH_RANGE),
        inseam: sample(rng, INSEAM_RANGE),
    }
}

fn sample<R: Rng + ?Sized>(rng: &mut R, range: Range<f64>) -> f64 {
    let upper = range.end;
    let rounded = round_tenth(rng.random_range(range));
    // Rounding can land on the open upper bound
    if rounded >= upper { upper - 0.1 } else { rounded }
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn test_values_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..500 {
            let m = simulate_measurements(&mut rng);
            assert!(CHEST_RANGE.contains(&m.chest), "chest {}", m.chest);
            assert!(WAIST_RANGE.contains(&m.waist), "waist {}", m.waist);
            assert!(HIPS_RANGE.contains(&m.hips), "hips {}", m.hips);
            assert!(SHOULDERS_RANGE.contains(&m.shoulders));
            assert!(NECK_RANGE.contains(&m.neck));
            assert!(SLEEVE_LENGTH_RANGE.contains(&m.sleeve_length));
            assert!(INSEAM_RANGE.contains(&m.inseam));
        }
    }

    #[test]
    fn test_values_have_one_decimal() {
        let mut rng = StdRng::seed_from_u64(99);
        let m = simulate_measurements(&mut rng);
        for (field, value) in m.fields() {
            let tenths = value * 10.0;
            assert!(
                (tenths - tenths.round()).abs() < 1e-6,
                "{field} = {value} has more than one decimal"
            );
        }
    }

    #[test]
    fn test_simulated_sets_are_storable() {
        let mut rng = StdRng::seed_from_u64(3);
        assert!(simulate_measurements(&mut rng).validate().is_ok());
    }

    #[test]
    fn test_same_seed_same_scan() {
        let a = simulate_measurements(&mut StdRng::seed_from_u64(5));
        let b = simulate_measurements(&mut StdRng::seed_from_u64(5));
        assert_eq!(a, b);
    }
}
