//! Phone record model
//!
//! A phone is an open-ended JSON object with one distinguished field, `id`,
//! used to address records in update and delete operations. All other fields
//! are carried verbatim in an extra-field bag so records round-trip without a
//! fixed schema.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One record in the phone collection.
///
/// `id` is optional: callers that create a record without one simply get a
/// record that can never be addressed by update or delete. Uniqueness of
/// `id` values is not enforced.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Phone {
    /// Identifier used for update/delete addressing (exact string match).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// All remaining fields of the record, preserved as-is.
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Phone {
    /// Check whether this record's `id` equals the given value.
    ///
    /// Records without an `id` never match.
    pub fn matches(&self, id: &str) -> bool {
        self.id.as_deref() == Some(id)
    }

    /// Shallow-merge `patch` into this record.
    ///
    /// Fields present in the patch overwrite; fields absent from the patch
    /// are preserved. A patch carrying an `id` overwrites the record's `id`.
    pub fn merge(&mut self, patch: Phone) {
        if patch.id.is_some() {
            self.id = patch.id;
        }
        for (key, value) in patch.fields {
            self.fields.insert(key, value);
        }
    }
}
