//! Employees service.

use async_trait::async_trait;
use mockall::automock;

use crate::domain::employees::{
    data::{EmployeeUpdate, NewEmployee},
    errors::EmployeesServiceError,
    records::{EmployeeId, EmployeeRecord},
};

#[automock]
#[async_trait]
/// Employee data access, implemented over HTTP and over the in-memory store.
pub trait EmployeesService: Send + Sync {
    /// Retrieves all employees. The returned records are the caller's copy.
    async fn list_employees(&self) -> Result<Vec<EmployeeRecord>, EmployeesServiceError>;

    /// Retrieves a single employee.
    async fn get_employee(
        &self,
        employee: EmployeeId,
    ) -> Result<EmployeeRecord, EmployeesServiceError>;

    /// Creates an employee with its department snapshot resolved.
    async fn create_employee(
        &self,
        employee: NewEmployee,
    ) -> Result<EmployeeRecord, EmployeesServiceError>;

    /// Merges `update` into an existing employee and re-resolves its
    /// department snapshot.
    async fn update_employee(
        &self,
        employee: EmployeeId,
        update: EmployeeUpdate,
    ) -> Result<EmployeeRecord, EmployeesServiceError>;

    /// Deletes an employee.
    async fn delete_employee(&self, employee: EmployeeId) -> Result<(), EmployeesServiceError>;
}
