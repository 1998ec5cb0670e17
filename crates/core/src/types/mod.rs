//! Core types for Tailor.
//!
//! Type-safe wrappers for the handful of domain concepts the service stores.

pub mod email;
pub mod id;
pub mod price;
pub mod size;

pub use email::{Email, EmailError};
pub use id::*;
pub use price::{Price, Rating};
pub use size::SizeLabel;
