//! Employee Data

use jiff::civil::Date;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::{
    departments::records::DepartmentId, employees::errors::EmployeesServiceError,
};

/// New Employee Data
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEmployee {
    pub first_name: String,
    pub last_name: String,
    pub email: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    pub position: String,
    pub salary: Decimal,
    pub department_id: DepartmentId,
    pub hire_date: Date,
}

impl NewEmployee {
    pub(crate) fn validate(&self) -> Result<(), EmployeesServiceError> {
        require("firstName", Some(&self.first_name))?;
        require("lastName", Some(&self.last_name))?;
        require("email", Some(&self.email))?;
        require("position", Some(&self.position))?;

        check_salary(Some(self.salary))
    }
}

/// Employee Update Data
///
/// Only supplied fields are merged over the stored record. `phone` uses
/// `Some(None)` to clear the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<Option<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary: Option<Decimal>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub department_id: Option<DepartmentId>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hire_date: Option<Date>,
}

impl EmployeeUpdate {
    pub(crate) fn validate(&self) -> Result<(), EmployeesServiceError> {
        require("firstName", self.first_name.as_ref())?;
        require("lastName", self.last_name.as_ref())?;
        require("email", self.email.as_ref())?;
        require("position", self.position.as_ref())?;

        check_salary(self.salary)
    }
}

fn require(field: &'static str, value: Option<&String>) -> Result<(), EmployeesServiceError> {
    if value.is_some_and(|value| value.trim().is_empty()) {
        return Err(EmployeesServiceError::MissingRequiredField(field));
    }

    Ok(())
}

fn check_salary(salary: Option<Decimal>) -> Result<(), EmployeesServiceError> {
    if salary.is_some_and(|salary| salary.is_sign_negative() && !salary.is_zero()) {
        return Err(EmployeesServiceError::InvalidSalary);
    }

    Ok(())
}
