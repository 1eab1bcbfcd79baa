//! Domain models for the thing server.

pub mod account;
pub mod thing;

pub use account::Account;
pub use thing::{Thing, ThingDraft};
