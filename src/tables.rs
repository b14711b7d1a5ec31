//! Table rendering for record listings.

use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};

use crate::domain::{departments::records::DepartmentRecord, employees::records::EmployeeRecord};

/// Render employees as a rounded table, one row per record.
///
/// The department column shows the snapshot name, or the raw id when the
/// snapshot is missing.
#[must_use]
pub fn employees_table(employees: &[EmployeeRecord]) -> String {
    let mut builder = Builder::default();

    builder.push_record([
        "ID",
        "Name",
        "Email",
        "Position",
        "Department",
        "Salary",
        "Hired",
    ]);

    for employee in employees {
        let department = employee.department.as_ref().map_or_else(
            || format!("#{}", employee.department_id),
            |department| department.name.clone(),
        );

        builder.push_record([
            employee.id.to_string(),
            employee.full_name(),
            employee.email.clone(),
            employee.position.clone(),
            department,
            employee.salary.round_dp(2).to_string(),
            employee.hire_date.to_string(),
        ]);
    }

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Columns::new(5..6), Alignment::right());

    table.to_string()
}

#[must_use]
pub fn departments_table(departments: &[DepartmentRecord]) -> String {
    let mut builder = Builder::default();

    builder.push_record(["ID", "Name", "Description", "Updated"]);

    for department in departments {
        builder.push_record([
            department.id.to_string(),
            department.name.clone(),
            department.description.clone().unwrap_or_default(),
            department.updated_at.strftime("%Y-%m-%d %H:%M").to_string(),
        ]);
    }

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Columns::first(), Alignment::right());

    table.to_string()
}
