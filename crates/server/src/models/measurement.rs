//! Stored measurement rows.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use tailor_core::{MeasurementId, UserId};

/// A measurement set as stored.
///
/// Values are exact decimals and serialize as strings (`"92.50"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Measurement {
    pub id: MeasurementId,
    pub user_id: UserId,
    pub chest: Decimal,
    pub waist: Decimal,
    pub hips: Decimal,
    pub shoulders: Decimal,
    pub neck: Decimal,
    pub sleeve_length: Decimal,
    pub inseam: Decimal,
    pub created_at: DateTime<Utc>,
}
