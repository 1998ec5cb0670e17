//! Offline sizing commands. Neither touches the database.

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;

use tailor_core::simulator::simulate_measurements;
use tailor_core::{BodyMeasurements, SizeLabel, classify_size};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SimulatedCapture {
    measurement: BodyMeasurements,
    recommended_size: SizeLabel,
}

/// Print the recommended size for chest and waist.
pub fn classify(chest: f64, waist: f64) {
    #[allow(clippy::print_stdout)]
    {
        println!("{}", classify_size(chest, waist));
    }
}

/// Print a simulated capture as pretty JSON.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn simulate(seed: Option<u64>) -> Result<(), serde_json::Error> {
    let json = serde_json::to_string_pretty(&capture(seed))?;
    #[allow(clippy::print_stdout)]
    {
        println!("{json}");
    }
    Ok(())
}

fn capture(seed: Option<u64>) -> SimulatedCapture {
    let measurement = match seed {
        Some(seed) => simulate_measurements(&mut StdRng::seed_from_u64(seed)),
        None => simulate_measurements(&mut rand::rng()),
    };
    SimulatedCapture {
        recommended_size: measurement.recommended_size(),
        measurement,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_capture_is_reproducible() {
        let a = capture(Some(11));
        let b = capture(Some(11));
        assert_eq!(a.measurement, b.measurement);
        assert_eq!(a.recommended_size, b.recommended_size);
    }

    #[test]
    fn test_capture_size_matches_classifier() {
        let c = capture(Some(3));
        assert_eq!(
            c.recommended_size,
            classify_size(c.measurement.chest, c.measurement.waist)
        );
    }

    #[test]
    fn test_capture_json_shape() {
        let json = serde_json::to_value(capture(Some(1))).unwrap();
        assert!(json["measurement"]["sleeve_length"].is_number());
        assert!(json["recommendedSize"].is_string());
    }
}
