//! Newtype ID for type-safe record references.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a Thing record.
///
/// Assigned by the record store at creation time from a strictly
/// increasing counter and never reassigned, even after deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThingId(u64);

impl ThingId {
    /// Create a new ID from a u64 value.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the underlying u64 value.
    #[must_use]
    pub const fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ThingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u64())
    }
}

impl From<u64> for ThingId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl From<ThingId> for u64 {
    fn from(id: ThingId) -> Self {
        id.0
    }
}

impl std::str::FromStr for ThingId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>().map(Self)
    }
}
