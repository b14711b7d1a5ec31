//! Employee Records

use jiff::{Timestamp, civil::Date};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{
    domain::{
        dates::{deserialize_date, deserialize_timestamp},
        departments::records::{DepartmentId, DepartmentRecord},
    },
    ids::TypedId,
};

/// Employee Id
pub type EmployeeId = TypedId<EmployeeRecord>;

/// Employee Record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRecord {
    pub id: EmployeeId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    pub position: String,

    /// Annual salary, never negative.
    pub salary: Decimal,

    /// Owning department. This is the source of truth for the relation.
    pub department_id: DepartmentId,

    /// Snapshot of the owning department taken when the record was last
    /// written. Display only; may be absent if the id did not resolve.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<DepartmentRecord>,

    #[serde(deserialize_with = "deserialize_date")]
    pub hire_date: Date,

    #[serde(deserialize_with = "deserialize_timestamp")]
    pub created_at: Timestamp,

    #[serde(deserialize_with = "deserialize_timestamp")]
    pub updated_at: Timestamp,
}

impl EmployeeRecord {
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Case-insensitive substring match on first name, last name, email or
    /// position.
    ///
    /// An empty term matches every employee.
    #[must_use]
    pub fn matches(&self, term: &str) -> bool {
        let term = term.to_lowercase();

        [
            &self.first_name,
            &self.last_name,
            &self.email,
            &self.position,
        ]
        .into_iter()
        .any(|field| field.to_lowercase().contains(&term))
    }
}
