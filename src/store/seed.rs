//! Mock store fixture data.

use jiff::{
    Timestamp,
    civil::{Date, date},
};
use rust_decimal::Decimal;

use crate::domain::{
    departments::records::{DepartmentId, DepartmentRecord},
    employees::records::{EmployeeId, EmployeeRecord},
};

// 2024-01-15T09:00:00Z
const SEEDED_AT: Timestamp = Timestamp::constant(1_705_309_200, 0);

fn department(id: u64, name: &str, description: &str) -> DepartmentRecord {
    DepartmentRecord {
        id: DepartmentId::from_u64(id),
        name: name.to_string(),
        description: Some(description.to_string()),
        created_at: SEEDED_AT,
        updated_at: SEEDED_AT,
    }
}

#[expect(
    clippy::too_many_arguments,
    reason = "fixture rows read better as one call per employee."
)]
fn employee(
    id: u64,
    (first_name, last_name): (&str, &str),
    email: &str,
    phone: Option<&str>,
    position: &str,
    salary: i64,
    department_id: u64,
    hire_date: Date,
) -> EmployeeRecord {
    EmployeeRecord {
        id: EmployeeId::from_u64(id),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        email: email.to_string(),
        phone: phone.map(ToString::to_string),
        position: position.to_string(),
        salary: Decimal::new(salary, 0),
        department_id: DepartmentId::from_u64(department_id),
        department: None,
        hire_date,
        created_at: SEEDED_AT,
        updated_at: SEEDED_AT,
    }
}

pub(crate) fn departments() -> Vec<DepartmentRecord> {
    vec![
        department(1, "Engineering", "Software development and infrastructure"),
        department(2, "Marketing", "Brand, campaigns and communications"),
        department(3, "Sales", "Revenue and customer acquisition"),
        department(4, "Human Resources", "Hiring, benefits and employee relations"),
        department(5, "Finance", "Accounting, payroll and budgeting"),
    ]
}

pub(crate) fn employees() -> Vec<EmployeeRecord> {
    vec![
        employee(
            1,
            ("John", "Doe"),
            "john.doe@company.com",
            Some("+1-555-0101"),
            "Senior Software Engineer",
            95_000,
            1,
            date(2022, 1, 15),
        ),
        employee(
            2,
            ("Jane", "Smith"),
            "jane.smith@company.com",
            Some("+1-555-0102"),
            "Marketing Manager",
            75_000,
            2,
            date(2021, 6, 1),
        ),
        employee(
            3,
            ("Mike", "Johnson"),
            "mike.johnson@company.com",
            None,
            "Sales Representative",
            55_000,
            3,
            date(2023, 3, 10),
        ),
        employee(
            4,
            ("Sarah", "Wilson"),
            "sarah.wilson@company.com",
            Some("+1-555-0104"),
            "HR Specialist",
            60_000,
            4,
            date(2020, 11, 2),
        ),
        employee(
            5,
            ("David", "Brown"),
            "david.brown@company.com",
            Some("+1-555-0105"),
            "Frontend Developer",
            82_000,
            1,
            date(2023, 7, 24),
        ),
        employee(
            6,
            ("Emily", "Davis"),
            "emily.davis@company.com",
            None,
            "Financial Analyst",
            68_000,
            5,
            date(2022, 9, 12),
        ),
        employee(
            7,
            ("Robert", "Miller"),
            "robert.miller@company.com",
            Some("+1-555-0107"),
            "Account Executive",
            63_000,
            3,
            date(2021, 2, 8),
        ),
        employee(
            8,
            ("Lisa", "Garcia"),
            "lisa.garcia@company.com",
            Some("+1-555-0108"),
            "DevOps Engineer",
            90_000,
            1,
            date(2019, 5, 20),
        ),
    ]
}
