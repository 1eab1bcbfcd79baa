//! Shared newtype wrappers.

pub mod email;
pub mod id;

pub use email::{Email, EmailError};
pub use id::ThingId;
