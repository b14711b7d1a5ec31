//! Department Data

use serde::Serialize;

use crate::domain::departments::errors::DepartmentsServiceError;

/// New Department Data
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDepartment {
    /// Department name; must not be blank.
    pub name: String,

    /// Optional description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl NewDepartment {
    pub(crate) fn validate(&self) -> Result<(), DepartmentsServiceError> {
        if self.name.trim().is_empty() {
            return Err(DepartmentsServiceError::MissingName);
        }

        Ok(())
    }
}

/// Department Update Data
///
/// Only supplied fields are merged over the stored record. `description` uses
/// `Some(None)` to clear the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
}

impl DepartmentUpdate {
    pub(crate) fn validate(&self) -> Result<(), DepartmentsServiceError> {
        if self.name.as_deref().is_some_and(|name| name.trim().is_empty()) {
            return Err(DepartmentsServiceError::MissingName);
        }

        Ok(())
    }
}
