//! Domain types returned by repositories and serialized by handlers.

pub mod clothing;
pub mod measurement;
pub mod user;

pub use clothing::{ClothingItem, Recommendation};
pub use measurement::Measurement;
pub use user::{User, UserProfile};
