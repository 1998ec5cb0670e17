//! Body measurements submitted by a user.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::sizing::classify_size;
use crate::types::SizeLabel;

/// Largest value a measurement column can hold (`DECIMAL(5,2)`).
pub const MAX_MEASUREMENT_CM: f64 = 999.99;

/// Errors raised when a measurement set cannot be stored.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MeasurementError {
    /// The value is NaN or infinite.
    #[error("{field} must be a finite number")]
    NotFinite {
        /// Offending field name.
        field: &'static str,
    },
    /// The value does not fit the stored precision or is negative.
    #[error("{field} must be between 0 and {MAX_MEASUREMENT_CM} cm (got {value})")]
    OutOfRange {
        /// Offending field name.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
}

/// The seven body measurements, in centimeters.
///
/// Field names follow the wire format (`sleeve_length`, not `sleeveLength`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyMeasurements {
    pub chest: f64,
    pub waist: f64,
    pub hips: f64,
    pub shoulders: f64,
    pub neck: f64,
    pub sleeve_length: f64,
    pub inseam: f64,
}

impl BodyMeasurements {
    /// Field names paired with their values, in column order.
    #[must_use]
    pub const fn fields(&self) -> [(&'static str, f64); 7] {
        [
            ("chest", self.chest),
            ("waist", self.waist),
            ("hips", self.hips),
            ("shoulders", self.shoulders),
            ("neck", self.neck),
            ("sleeve_length", self.sleeve_length),
            ("inseam", self.inseam),
        ]
    }

    /// Check that every value can be stored.
    ///
    /// # Errors
    ///
    /// Returns the first field that is not finite or lies outside
    /// `0..=MAX_MEASUREMENT_CM`.
    pub fn validate(&self) -> Result<(), MeasurementError> {
        for (field, value) in self.fields() {
            if !value.is_finite() {
                return Err(MeasurementError::NotFinite { field });
            }
            if !(0.0..=MAX_MEASUREMENT_CM).contains(&value) {
                return Err(MeasurementError::OutOfRange { field, value });
            }
        }
        Ok(())
    }

    /// Validate and convert every value to a two-decimal column value.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`Self::validate`].
    pub fn to_columns(&self) -> Result<[Decimal; 7], MeasurementError> {
        self.validate()?;
        let mut columns = [Decimal::ZERO; 7];
        for (slot, (field, value)) in columns.iter_mut().zip(self.fields()) {
            let mut column =
                Decimal::from_f64_retain(value).ok_or(MeasurementError::NotFinite { field })?;
            column.rescale(2);
            *slot = column;
        }
        Ok(columns)
    }

    /// The size the classifier recommends for these measurements.
    #[must_use]
    pub fn recommended_size(&self) -> SizeLabel {
        classify_size(self.chest, self.waist)
    }
}
