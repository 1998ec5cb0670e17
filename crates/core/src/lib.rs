//! Tailor Core - Domain types and sizing logic.
//!
//! This crate is shared by every Tailor component:
//! - `server` - The REST API
//! - `cli` - Store initialization and offline sizing tools
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no database
//! access, no HTTP. Randomness is always injected through a [`rand::Rng`] so the
//! callers decide where it comes from.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for IDs, emails, prices, ratings and sizes
//! - [`measurements`] - The seven body measurements a user submits
//! - [`sizing`] - Size classifier and fit labeler
//! - [`simulator`] - Simulated camera measurement capture
//! - [`catalog`] - The fixed clothing catalog seeded into a fresh store

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod measurements;
pub mod simulator;
pub mod sizing;
pub mod types;

pub use measurements::{BodyMeasurements, MeasurementError};
pub use sizing::{FitLabel, classify_size, fit_label};
pub use types::*;
