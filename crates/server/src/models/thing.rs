//! The Thing record - the generic CRUD resource this server manages.

use serde::{Deserialize, Serialize};

use thing_server_core::ThingId;

/// A Thing record as stored and served.
///
/// Mutated only via full-record replacement keyed by id; there is no
/// partial-field update operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thing {
    /// Unique id, assigned by the record store at creation.
    pub id: ThingId,
    /// Category tag.
    #[serde(rename = "type")]
    pub kind: String,
    /// Free-form description.
    pub description: String,
}

impl Thing {
    /// Create a new record from validated parts.
    #[must_use]
    pub const fn new(id: ThingId, kind: String, description: String) -> Self {
        Self {
            id,
            kind,
            description,
        }
    }
}

/// Candidate Thing fields as they arrive on the wire.
///
/// Either field may be absent in the request body. Validation rejects
/// absent fields; empty strings are deliberately accepted, since any
/// string is a valid value for both fields.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ThingDraft {
    /// Category tag, if present in the request.
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Description, if present in the request.
    pub description: Option<String>,
}

impl ThingDraft {
    /// Build a draft from both fields.
    #[must_use]
    pub const fn new(kind: Option<String>, description: Option<String>) -> Self {
        Self { kind, description }
    }

    /// Validate the draft and split it into its parts.
    ///
    /// Returns `None` if either field is missing. An empty string passes.
    #[must_use]
    pub fn into_valid_parts(self) -> Option<(String, String)> {
        match (self.kind, self.description) {
            (Some(kind), Some(description)) => Some((kind, description)),
            _ => None,
        }
    }
}
