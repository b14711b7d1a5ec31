//! Store-backed employees service.

use async_trait::async_trait;
use jiff::Timestamp;
use tracing::{debug, info};

use crate::{
    domain::employees::{
        EmployeesService,
        data::{EmployeeUpdate, NewEmployee},
        errors::EmployeesServiceError,
        records::{EmployeeId, EmployeeRecord},
    },
    store::SharedStore,
};

#[derive(Debug, Clone)]
pub struct InMemoryEmployeesService {
    store: SharedStore,
}

impl InMemoryEmployeesService {
    #[must_use]
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl EmployeesService for InMemoryEmployeesService {
    async fn list_employees(&self) -> Result<Vec<EmployeeRecord>, EmployeesServiceError> {
        Ok(self.store.lock().await.employees().to_vec())
    }

    async fn get_employee(
        &self,
        employee: EmployeeId,
    ) -> Result<EmployeeRecord, EmployeesServiceError> {
        self.store
            .lock()
            .await
            .employee(employee)
            .cloned()
            .ok_or(EmployeesServiceError::NotFound)
    }

    async fn create_employee(
        &self,
        employee: NewEmployee,
    ) -> Result<EmployeeRecord, EmployeesServiceError> {
        employee.validate()?;

        let created = self
            .store
            .lock()
            .await
            .insert_employee(employee, Timestamp::now());

        if created.department.is_none() {
            debug!(
                employee = %created.id,
                department = %created.department_id,
                "employee references an unknown department"
            );
        }

        info!(employee = %created.id, "employee created");

        Ok(created)
    }

    async fn update_employee(
        &self,
        employee: EmployeeId,
        update: EmployeeUpdate,
    ) -> Result<EmployeeRecord, EmployeesServiceError> {
        update.validate()?;

        let updated = self
            .store
            .lock()
            .await
            .update_employee(employee, update, Timestamp::now())?;

        debug!(employee = %updated.id, "employee updated");

        Ok(updated)
    }

    async fn delete_employee(&self, employee: EmployeeId) -> Result<(), EmployeesServiceError> {
        self.store.lock().await.remove_employee(employee)?;

        info!(%employee, "employee deleted");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use crate::{
        domain::departments::{
            DepartmentsService,
            data::{DepartmentUpdate, NewDepartment},
            errors::DepartmentsServiceError,
            records::DepartmentId,
        },
        test::TestContext,
    };

    use super::*;

    fn new_employee(department_id: DepartmentId) -> NewEmployee {
        NewEmployee {
            first_name: "Margaret".to_string(),
            last_name: "Hamilton".to_string(),
            email: "margaret@example.com".to_string(),
            phone: Some("+1-555-0199".to_string()),
            position: "Flight Software Lead".to_string(),
            salary: Decimal::new(110_000, 0),
            department_id,
            hire_date: date(2024, 5, 6),
        }
    }

    async fn eng_with_employee(ctx: &TestContext) -> TestResult<(DepartmentId, EmployeeId)> {
        let department = ctx
            .departments
            .create_department(NewDepartment {
                name: "Eng".to_string(),
                description: None,
            })
            .await?;

        let employee = ctx
            .employees
            .create_employee(new_employee(department.id))
            .await?;

        Ok((department.id, employee.id))
    }

    #[tokio::test]
    async fn create_employee_resolves_department_snapshot() -> TestResult {
        let ctx = TestContext::empty();
        let (department, employee) = eng_with_employee(&ctx).await?;

        let created = ctx.employees.get_employee(employee).await?;

        assert_eq!(created.department_id, department);
        assert_eq!(
            created.department.map(|department| department.name).as_deref(),
            Some("Eng")
        );
        assert_eq!(created.created_at, created.updated_at);

        Ok(())
    }

    #[tokio::test]
    async fn create_employee_with_unknown_department_succeeds_without_snapshot() -> TestResult {
        let ctx = TestContext::empty();

        let created = ctx
            .employees
            .create_employee(new_employee(DepartmentId::from_u64(31)))
            .await?;

        assert!(created.department.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn create_employee_ids_exceed_previous_maximum() -> TestResult {
        let ctx = TestContext::seeded();
        let previous_max = ctx
            .employees
            .list_employees()
            .await?
            .iter()
            .map(|employee| employee.id)
            .max();

        let first = ctx
            .employees
            .create_employee(new_employee(DepartmentId::from_u64(1)))
            .await?;
        let second = ctx
            .employees
            .create_employee(new_employee(DepartmentId::from_u64(1)))
            .await?;

        assert!(Some(first.id) > previous_max);
        assert!(second.id > first.id);

        Ok(())
    }

    #[tokio::test]
    async fn create_employee_rejects_negative_salary() -> TestResult {
        let ctx = TestContext::seeded();

        let result = ctx
            .employees
            .create_employee(NewEmployee {
                salary: Decimal::new(-5, 0),
                ..new_employee(DepartmentId::from_u64(1))
            })
            .await;

        assert!(
            matches!(result, Err(EmployeesServiceError::InvalidSalary)),
            "expected InvalidSalary, got {result:?}"
        );
        assert_eq!(ctx.employees.list_employees().await?.len(), 8);

        Ok(())
    }

    #[tokio::test]
    async fn department_rename_is_visible_on_next_employee_read() -> TestResult {
        let ctx = TestContext::empty();
        let (department, employee) = eng_with_employee(&ctx).await?;

        ctx.departments
            .update_department(
                department,
                DepartmentUpdate {
                    name: Some("Engineering".to_string()),
                    description: None,
                },
            )
            .await?;

        let listed = ctx.employees.list_employees().await?;
        let reloaded = listed
            .iter()
            .find(|record| record.id == employee)
            .ok_or("employee missing from list")?;

        assert_eq!(
            reloaded
                .department
                .as_ref()
                .map(|department| department.name.as_str()),
            Some("Engineering")
        );

        Ok(())
    }

    #[tokio::test]
    async fn referenced_department_survives_delete_attempt() -> TestResult {
        let ctx = TestContext::empty();
        let (department, employee) = eng_with_employee(&ctx).await?;

        let result = ctx.departments.delete_department(department).await;

        assert!(
            matches!(result, Err(DepartmentsServiceError::HasEmployees)),
            "expected HasEmployees, got {result:?}"
        );
        assert!(
            ctx.departments
                .list_departments()
                .await?
                .iter()
                .any(|record| record.id == department)
        );
        assert_eq!(
            ctx.employees.get_employee(employee).await?.department_id,
            department
        );

        Ok(())
    }

    #[tokio::test]
    async fn department_delete_checks_references_before_existence() -> TestResult {
        let ctx = TestContext::empty();
        let dangling = DepartmentId::from_u64(55);

        ctx.employees.create_employee(new_employee(dangling)).await?;

        let result = ctx.departments.delete_department(dangling).await;

        assert!(
            matches!(result, Err(DepartmentsServiceError::HasEmployees)),
            "a dangling reference reports HasEmployees instead of NotFound, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn deleting_last_employee_unblocks_department_delete() -> TestResult {
        let ctx = TestContext::empty();
        let (department, employee) = eng_with_employee(&ctx).await?;

        ctx.employees.delete_employee(employee).await?;
        ctx.departments.delete_department(department).await?;

        assert!(ctx.departments.list_departments().await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn update_employee_merges_fields_and_preserves_created_at() -> TestResult {
        let ctx = TestContext::seeded();
        let id = EmployeeId::from_u64(1);
        let before = ctx.employees.get_employee(id).await?;

        let updated = ctx
            .employees
            .update_employee(
                id,
                EmployeeUpdate {
                    position: Some("Staff Engineer".to_string()),
                    phone: Some(None),
                    ..EmployeeUpdate::default()
                },
            )
            .await?;

        assert_eq!(updated.position, "Staff Engineer");
        assert_eq!(updated.phone, None);
        assert_eq!(updated.first_name, before.first_name);
        assert_eq!(updated.salary, before.salary);
        assert_eq!(updated.created_at, before.created_at);
        assert!(updated.updated_at >= before.updated_at);

        Ok(())
    }

    #[tokio::test]
    async fn operations_on_missing_employee_return_not_found() -> TestResult {
        let ctx = TestContext::seeded();
        let missing = EmployeeId::from_u64(1_000);

        let get = ctx.employees.get_employee(missing).await;
        let update = ctx
            .employees
            .update_employee(missing, EmployeeUpdate::default())
            .await;
        let delete = ctx.employees.delete_employee(missing).await;

        assert!(matches!(get, Err(EmployeesServiceError::NotFound)));
        assert!(matches!(update, Err(EmployeesServiceError::NotFound)));
        assert!(matches!(delete, Err(EmployeesServiceError::NotFound)));

        Ok(())
    }

    #[tokio::test]
    async fn list_employees_returns_a_copy() -> TestResult {
        let ctx = TestContext::seeded();

        let mut listed = ctx.employees.list_employees().await?;

        if let Some(first) = listed.first_mut() {
            first.first_name = "Mutated".to_string();
        }
        listed.truncate(1);

        let reloaded = ctx.employees.list_employees().await?;

        assert_eq!(reloaded.len(), 8);
        assert!(reloaded.iter().all(|employee| employee.first_name != "Mutated"));

        Ok(())
    }

    #[tokio::test]
    async fn store_reflects_service_writes() -> TestResult {
        let ctx = TestContext::empty();
        let (_, employee) = eng_with_employee(&ctx).await?;

        assert!(ctx.store.lock().await.employee(employee).is_some());

        Ok(())
    }
}
