//! Department Records

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::{domain::dates::deserialize_timestamp, ids::TypedId};

/// Department Id
pub type DepartmentId = TypedId<DepartmentRecord>;

/// Department Record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentRecord {
    /// Unique department identifier.
    pub id: DepartmentId,

    /// Department name, never blank.
    pub name: String,

    /// Free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Creation timestamp, assigned by the owning store.
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub created_at: Timestamp,

    /// Last update timestamp, assigned by the owning store.
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub updated_at: Timestamp,
}

impl DepartmentRecord {
    /// Case-insensitive substring match on name or description.
    ///
    /// An empty term matches every department.
    #[must_use]
    pub fn matches(&self, term: &str) -> bool {
        let term = term.to_lowercase();

        self.name.to_lowercase().contains(&term)
            || self
                .description
                .as_deref()
                .is_some_and(|description| description.to_lowercase().contains(&term))
    }
}
