//! Store-backed departments service.

use async_trait::async_trait;
use jiff::Timestamp;
use tracing::{debug, info};

use crate::{
    domain::departments::{
        DepartmentsService,
        data::{DepartmentUpdate, NewDepartment},
        errors::DepartmentsServiceError,
        records::{DepartmentId, DepartmentRecord},
    },
    store::SharedStore,
};

#[derive(Debug, Clone)]
pub struct InMemoryDepartmentsService {
    store: SharedStore,
}

impl InMemoryDepartmentsService {
    #[must_use]
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl DepartmentsService for InMemoryDepartmentsService {
    async fn list_departments(&self) -> Result<Vec<DepartmentRecord>, DepartmentsServiceError> {
        Ok(self.store.lock().await.departments().to_vec())
    }

    async fn get_department(
        &self,
        department: DepartmentId,
    ) -> Result<DepartmentRecord, DepartmentsServiceError> {
        self.store
            .lock()
            .await
            .department(department)
            .cloned()
            .ok_or(DepartmentsServiceError::NotFound)
    }

    async fn create_department(
        &self,
        department: NewDepartment,
    ) -> Result<DepartmentRecord, DepartmentsServiceError> {
        department.validate()?;

        let created = self
            .store
            .lock()
            .await
            .insert_department(department, Timestamp::now());

        info!(department = %created.id, "department created");

        Ok(created)
    }

    async fn update_department(
        &self,
        department: DepartmentId,
        update: DepartmentUpdate,
    ) -> Result<DepartmentRecord, DepartmentsServiceError> {
        update.validate()?;

        let updated = self
            .store
            .lock()
            .await
            .update_department(department, update, Timestamp::now())?;

        debug!(department = %updated.id, "department updated");

        Ok(updated)
    }

    async fn delete_department(
        &self,
        department: DepartmentId,
    ) -> Result<(), DepartmentsServiceError> {
        self.store.lock().await.remove_department(department)?;

        info!(%department, "department deleted");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{domain::employees::EmployeesService, test::TestContext};

    use super::*;

    fn new_department(name: &str) -> NewDepartment {
        NewDepartment {
            name: name.to_string(),
            description: None,
        }
    }

    #[tokio::test]
    async fn create_department_assigns_increasing_ids() -> TestResult {
        let ctx = TestContext::seeded();
        let before = ctx.departments.list_departments().await?;
        let previous_max = before.iter().map(|department| department.id).max();

        let created = ctx
            .departments
            .create_department(new_department("Legal"))
            .await?;

        assert!(Some(created.id) > previous_max);
        assert!(before.iter().all(|department| department.id != created.id));
        assert_eq!(created.created_at, created.updated_at);

        Ok(())
    }

    #[tokio::test]
    async fn create_department_rejects_blank_name() -> TestResult {
        let ctx = TestContext::empty();

        let result = ctx.departments.create_department(new_department("")).await;

        assert!(
            matches!(result, Err(DepartmentsServiceError::MissingName)),
            "expected MissingName, got {result:?}"
        );
        assert!(ctx.departments.list_departments().await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn get_missing_department_returns_not_found() -> TestResult {
        let ctx = TestContext::seeded();

        let result = ctx
            .departments
            .get_department(DepartmentId::from_u64(999))
            .await;

        assert!(
            matches!(result, Err(DepartmentsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn list_departments_returns_a_copy() -> TestResult {
        let ctx = TestContext::seeded();

        let mut listed = ctx.departments.list_departments().await?;
        listed.clear();

        assert_eq!(ctx.departments.list_departments().await?.len(), 5);

        Ok(())
    }

    #[tokio::test]
    async fn update_department_preserves_created_at() -> TestResult {
        let ctx = TestContext::seeded();
        let id = DepartmentId::from_u64(2);
        let before = ctx.departments.get_department(id).await?;

        let updated = ctx
            .departments
            .update_department(
                id,
                DepartmentUpdate {
                    name: None,
                    description: Some(Some("Growth".to_string())),
                },
            )
            .await?;

        assert_eq!(updated.created_at, before.created_at);
        assert!(updated.updated_at >= before.updated_at);
        assert_eq!(updated.name, before.name);
        assert_eq!(updated.description.as_deref(), Some("Growth"));

        Ok(())
    }

    #[tokio::test]
    async fn update_department_can_clear_description() -> TestResult {
        let ctx = TestContext::seeded();

        let updated = ctx
            .departments
            .update_department(
                DepartmentId::from_u64(1),
                DepartmentUpdate {
                    name: None,
                    description: Some(None),
                },
            )
            .await?;

        assert_eq!(updated.description, None);

        Ok(())
    }

    #[tokio::test]
    async fn update_missing_department_returns_not_found() -> TestResult {
        let ctx = TestContext::empty();

        let result = ctx
            .departments
            .update_department(DepartmentId::from_u64(1), DepartmentUpdate::default())
            .await;

        assert!(
            matches!(result, Err(DepartmentsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn delete_unreferenced_department_removes_it() -> TestResult {
        let ctx = TestContext::seeded();

        let created = ctx
            .departments
            .create_department(new_department("Facilities"))
            .await?;

        ctx.departments.delete_department(created.id).await?;

        let remaining = ctx.departments.list_departments().await?;

        assert!(remaining.iter().all(|department| department.id != created.id));
        assert_eq!(remaining.len(), 5);

        Ok(())
    }

    #[tokio::test]
    async fn delete_referenced_department_is_rejected_and_changes_nothing() -> TestResult {
        let ctx = TestContext::seeded();
        let id = DepartmentId::from_u64(1);

        let departments_before = ctx.departments.list_departments().await?;
        let employees_before = ctx.employees.list_employees().await?;

        let result = ctx.departments.delete_department(id).await;

        assert!(
            matches!(result, Err(DepartmentsServiceError::HasEmployees)),
            "expected HasEmployees, got {result:?}"
        );
        assert_eq!(ctx.departments.list_departments().await?, departments_before);
        assert_eq!(ctx.employees.list_employees().await?, employees_before);

        Ok(())
    }

    #[tokio::test]
    async fn delete_missing_department_returns_not_found() -> TestResult {
        let ctx = TestContext::seeded();

        let result = ctx
            .departments
            .delete_department(DepartmentId::from_u64(404))
            .await;

        assert!(
            matches!(result, Err(DepartmentsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );

        Ok(())
    }
}
