//! HTTP-backed departments service.

use async_trait::async_trait;
use tracing::info;

use crate::{
    api::{ApiClient, WithId},
    domain::departments::{
        DepartmentsService,
        data::{DepartmentUpdate, NewDepartment},
        errors::DepartmentsServiceError,
        records::{DepartmentId, DepartmentRecord},
    },
};

#[derive(Debug, Clone)]
pub struct HttpDepartmentsService {
    client: ApiClient,
}

impl HttpDepartmentsService {
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl DepartmentsService for HttpDepartmentsService {
    async fn list_departments(&self) -> Result<Vec<DepartmentRecord>, DepartmentsServiceError> {
        Ok(self.client.get("/Department/getAll").await?)
    }

    async fn get_department(
        &self,
        department: DepartmentId,
    ) -> Result<DepartmentRecord, DepartmentsServiceError> {
        Ok(self.client.get(&format!("/Department/{department}")).await?)
    }

    async fn create_department(
        &self,
        department: NewDepartment,
    ) -> Result<DepartmentRecord, DepartmentsServiceError> {
        department.validate()?;

        let created: DepartmentRecord = self
            .client
            .post("/Department/create", &department)
            .await?;

        info!(department = %created.id, "department created");

        Ok(created)
    }

    async fn update_department(
        &self,
        department: DepartmentId,
        update: DepartmentUpdate,
    ) -> Result<DepartmentRecord, DepartmentsServiceError> {
        update.validate()?;

        let body = WithId {
            id: department,
            body: &update,
        };

        Ok(self
            .client
            .put(&format!("/Department/{department}"), &body)
            .await?)
    }

    async fn delete_department(
        &self,
        department: DepartmentId,
    ) -> Result<(), DepartmentsServiceError> {
        self.client
            .delete(&format!("/Department/delete/{department}"))
            .await?;

        info!(%department, "department deleted");

        Ok(())
    }
}
