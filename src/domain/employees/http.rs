//! HTTP-backed employees service.

use async_trait::async_trait;
use tracing::info;

use crate::{
    api::{ApiClient, WithId},
    domain::employees::{
        EmployeesService,
        data::{EmployeeUpdate, NewEmployee},
        errors::EmployeesServiceError,
        records::{EmployeeId, EmployeeRecord},
    },
};

#[derive(Debug, Clone)]
pub struct HttpEmployeesService {
    client: ApiClient,
}

impl HttpEmployeesService {
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl EmployeesService for HttpEmployeesService {
    async fn list_employees(&self) -> Result<Vec<EmployeeRecord>, EmployeesServiceError> {
        Ok(self.client.get("/Employee/getAll").await?)
    }

    async fn get_employee(
        &self,
        employee: EmployeeId,
    ) -> Result<EmployeeRecord, EmployeesServiceError> {
        Ok(self.client.get(&format!("/Employee/get/{employee}")).await?)
    }

    async fn create_employee(
        &self,
        employee: NewEmployee,
    ) -> Result<EmployeeRecord, EmployeesServiceError> {
        employee.validate()?;

        let created: EmployeeRecord = self.client.post("/Employee/create", &employee).await?;

        info!(employee = %created.id, "employee created");

        Ok(created)
    }

    async fn update_employee(
        &self,
        employee: EmployeeId,
        update: EmployeeUpdate,
    ) -> Result<EmployeeRecord, EmployeesServiceError> {
        update.validate()?;

        let body = WithId {
            id: employee,
            body: &update,
        };

        Ok(self
            .client
            .put(&format!("/Employee/{employee}"), &body)
            .await?)
    }

    async fn delete_employee(&self, employee: EmployeeId) -> Result<(), EmployeesServiceError> {
        self.client
            .delete(&format!("/Employee/delete/{employee}"))
            .await?;

        info!(%employee, "employee deleted");

        Ok(())
    }
}
