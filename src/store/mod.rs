//! In-memory record store.
//!
//! Stands in for the remote service during development and tests. A store
//! owns two ordered record sequences and the counters used to mint ids. It
//! keeps each employee's department snapshot in step with department writes.

use std::sync::Arc;

use jiff::Timestamp;
use tokio::sync::Mutex;

use crate::domain::{
    departments::{
        DepartmentsServiceError,
        data::{DepartmentUpdate, NewDepartment},
        records::{DepartmentId, DepartmentRecord},
    },
    employees::{
        EmployeesServiceError,
        data::{EmployeeUpdate, NewEmployee},
        records::{EmployeeId, EmployeeRecord},
    },
};

mod seed;

/// Store handle shared by the store-backed services.
///
/// The mutex serializes every mutation of the records and id counters.
pub type SharedStore = Arc<Mutex<MockStore>>;

#[derive(Debug, Clone)]
pub struct MockStore {
    departments: Vec<DepartmentRecord>,
    employees: Vec<EmployeeRecord>,
    next_department_id: DepartmentId,
    next_employee_id: EmployeeId,
}

impl Default for MockStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MockStore {
    /// Creates an empty store whose first ids will be 1.
    #[must_use]
    pub fn new() -> Self {
        Self {
            departments: Vec::new(),
            employees: Vec::new(),
            next_department_id: DepartmentId::from_u64(1),
            next_employee_id: EmployeeId::from_u64(1),
        }
    }

    /// Creates a store holding the built-in fixture data.
    #[must_use]
    pub fn seeded() -> Self {
        Self::from_records(seed::departments(), seed::employees())
    }

    /// Creates a store from existing records.
    ///
    /// Counters start at one past the highest existing id, and every
    /// employee's department snapshot is resolved against `departments`.
    #[must_use]
    pub fn from_records(
        departments: Vec<DepartmentRecord>,
        mut employees: Vec<EmployeeRecord>,
    ) -> Self {
        for employee in &mut employees {
            employee.department = departments
                .iter()
                .find(|department| department.id == employee.department_id)
                .cloned();
        }

        let next_department_id = departments
            .iter()
            .map(|department| department.id)
            .max()
            .map_or(DepartmentId::from_u64(1), DepartmentId::next);

        let next_employee_id = employees
            .iter()
            .map(|employee| employee.id)
            .max()
            .map_or(EmployeeId::from_u64(1), EmployeeId::next);

        Self {
            departments,
            employees,
            next_department_id,
            next_employee_id,
        }
    }

    /// Wraps the store for sharing between services.
    #[must_use]
    pub fn into_shared(self) -> SharedStore {
        Arc::new(Mutex::new(self))
    }

    #[must_use]
    pub fn departments(&self) -> &[DepartmentRecord] {
        &self.departments
    }

    #[must_use]
    pub fn employees(&self) -> &[EmployeeRecord] {
        &self.employees
    }

    #[must_use]
    pub fn department(&self, id: DepartmentId) -> Option<&DepartmentRecord> {
        self.departments.iter().find(|department| department.id == id)
    }

    #[must_use]
    pub fn employee(&self, id: EmployeeId) -> Option<&EmployeeRecord> {
        self.employees.iter().find(|employee| employee.id == id)
    }

    pub(crate) fn insert_department(
        &mut self,
        department: NewDepartment,
        now: Timestamp,
    ) -> DepartmentRecord {
        let id = self.next_department_id;
        self.next_department_id = id.next();

        let record = DepartmentRecord {
            id,
            name: department.name,
            description: department.description,
            created_at: now,
            updated_at: now,
        };

        self.departments.push(record.clone());

        record
    }

    /// Merges `update` into the department and refreshes every employee
    /// snapshot that points at it.
    pub(crate) fn update_department(
        &mut self,
        id: DepartmentId,
        update: DepartmentUpdate,
        now: Timestamp,
    ) -> Result<DepartmentRecord, DepartmentsServiceError> {
        let record = self
            .departments
            .iter_mut()
            .find(|department| department.id == id)
            .ok_or(DepartmentsServiceError::NotFound)?;

        if let Some(name) = update.name {
            record.name = name;
        }

        if let Some(description) = update.description {
            record.description = description;
        }

        record.updated_at = now.max(record.updated_at);

        let updated = record.clone();

        for employee in &mut self.employees {
            if employee.department_id == id {
                employee.department = Some(updated.clone());
            }
        }

        Ok(updated)
    }

    /// Removes a department.
    ///
    /// Referencing employees are checked before the department's own
    /// existence, so a dangling reference reports `HasEmployees` rather than
    /// `NotFound`.
    pub(crate) fn remove_department(
        &mut self,
        id: DepartmentId,
    ) -> Result<DepartmentRecord, DepartmentsServiceError> {
        if self
            .employees
            .iter()
            .any(|employee| employee.department_id == id)
        {
            return Err(DepartmentsServiceError::HasEmployees);
        }

        let index = self
            .departments
            .iter()
            .position(|department| department.id == id)
            .ok_or(DepartmentsServiceError::NotFound)?;

        Ok(self.departments.remove(index))
    }

    pub(crate) fn insert_employee(&mut self, employee: NewEmployee, now: Timestamp) -> EmployeeRecord {
        let id = self.next_employee_id;
        self.next_employee_id = id.next();

        let record = EmployeeRecord {
            id,
            department: self.department(employee.department_id).cloned(),
            first_name: employee.first_name,
            last_name: employee.last_name,
            email: employee.email,
            phone: employee.phone,
            position: employee.position,
            salary: employee.salary,
            department_id: employee.department_id,
            hire_date: employee.hire_date,
            created_at: now,
            updated_at: now,
        };

        self.employees.push(record.clone());

        record
    }

    pub(crate) fn update_employee(
        &mut self,
        id: EmployeeId,
        update: EmployeeUpdate,
        now: Timestamp,
    ) -> Result<EmployeeRecord, EmployeesServiceError> {
        let department_id = match update.department_id {
            Some(department_id) => department_id,
            None => {
                self.employee(id)
                    .ok_or(EmployeesServiceError::NotFound)?
                    .department_id
            }
        };

        let department = self.department(department_id).cloned();

        let record = self
            .employees
            .iter_mut()
            .find(|employee| employee.id == id)
            .ok_or(EmployeesServiceError::NotFound)?;

        if let Some(first_name) = update.first_name {
            record.first_name = first_name;
        }

        if let Some(last_name) = update.last_name {
            record.last_name = last_name;
        }

        if let Some(email) = update.email {
            record.email = email;
        }

        if let Some(phone) = update.phone {
            record.phone = phone;
        }

        if let Some(position) = update.position {
            record.position = position;
        }

        if let Some(salary) = update.salary {
            record.salary = salary;
        }

        if let Some(hire_date) = update.hire_date {
            record.hire_date = hire_date;
        }

        record.department_id = department_id;
        record.department = department;
        record.updated_at = now.max(record.updated_at);

        Ok(record.clone())
    }

    pub(crate) fn remove_employee(
        &mut self,
        id: EmployeeId,
    ) -> Result<EmployeeRecord, EmployeesServiceError> {
        let index = self
            .employees
            .iter()
            .position(|employee| employee.id == id)
            .ok_or(EmployeesServiceError::NotFound)?;

        Ok(self.employees.remove(index))
    }
}
