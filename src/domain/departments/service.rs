//! Departments service.

use async_trait::async_trait;
use mockall::automock;

use crate::domain::departments::{
    data::{DepartmentUpdate, NewDepartment},
    errors::DepartmentsServiceError,
    records::{DepartmentId, DepartmentRecord},
};

#[automock]
#[async_trait]
/// Department data access, implemented over HTTP and over the in-memory store.
pub trait DepartmentsService: Send + Sync {
    /// Retrieves all departments. The returned records are the caller's copy.
    async fn list_departments(&self) -> Result<Vec<DepartmentRecord>, DepartmentsServiceError>;

    /// Retrieves a single department.
    async fn get_department(
        &self,
        department: DepartmentId,
    ) -> Result<DepartmentRecord, DepartmentsServiceError>;

    /// Creates a department; the id and timestamps are assigned by the backend.
    async fn create_department(
        &self,
        department: NewDepartment,
    ) -> Result<DepartmentRecord, DepartmentsServiceError>;

    /// Merges `update` into an existing department.
    async fn update_department(
        &self,
        department: DepartmentId,
        update: DepartmentUpdate,
    ) -> Result<DepartmentRecord, DepartmentsServiceError>;

    /// Deletes a department that no employee references.
    async fn delete_department(&self, department: DepartmentId)
    -> Result<(), DepartmentsServiceError>;
}
