use clap::{Args, Subcommand};
use jiff::civil::Date;
use rust_decimal::Decimal;
use staffdesk::{
    context::AppContext,
    domain::{
        departments::records::DepartmentId,
        employees::{
            EmployeesServiceError,
            data::{EmployeeUpdate, NewEmployee},
            records::{EmployeeId, EmployeeRecord},
        },
    },
    tables::employees_table,
};

#[derive(Debug, Args)]
pub(crate) struct EmployeesCommand {
    #[command(subcommand)]
    command: EmployeesSubcommand,
}

#[derive(Debug, Subcommand)]
enum EmployeesSubcommand {
    List(ListEmployeesArgs),
    Get(EmployeeIdArgs),
    Create(CreateEmployeeArgs),
    Update(UpdateEmployeeArgs),
    Delete(DeleteEmployeeArgs),
}

#[derive(Debug, Args)]
struct ListEmployeesArgs {
    /// Only show employees whose name, email or position contains this text
    #[arg(long)]
    search: Option<String>,
}

#[derive(Debug, Args)]
struct EmployeeIdArgs {
    /// Employee id
    id: EmployeeId,
}

#[derive(Debug, Args)]
struct CreateEmployeeArgs {
    #[arg(long)]
    first_name: String,

    #[arg(long)]
    last_name: String,

    #[arg(long)]
    email: String,

    #[arg(long)]
    phone: Option<String>,

    #[arg(long)]
    position: String,

    /// Annual salary
    #[arg(long)]
    salary: Decimal,

    #[arg(long)]
    department_id: DepartmentId,

    /// Hire date (YYYY-MM-DD)
    #[arg(long)]
    hire_date: Date,
}

#[derive(Debug, Args)]
struct UpdateEmployeeArgs {
    /// Employee id
    id: EmployeeId,

    #[arg(long)]
    first_name: Option<String>,

    #[arg(long)]
    last_name: Option<String>,

    #[arg(long)]
    email: Option<String>,

    #[arg(long, conflicts_with = "clear_phone")]
    phone: Option<String>,

    /// Remove the stored phone number
    #[arg(long)]
    clear_phone: bool,

    #[arg(long)]
    position: Option<String>,

    #[arg(long)]
    salary: Option<Decimal>,

    #[arg(long)]
    department_id: Option<DepartmentId>,

    #[arg(long)]
    hire_date: Option<Date>,
}

#[derive(Debug, Args)]
struct DeleteEmployeeArgs {
    /// Employee id
    id: EmployeeId,

    /// Confirm the deletion
    #[arg(long)]
    yes: bool,
}

pub(crate) async fn run(context: &AppContext, command: EmployeesCommand) -> Result<(), String> {
    let employees = &context.employees;
    let translate = |error: EmployeesServiceError| context.translator.translate(&error);

    match command.command {
        EmployeesSubcommand::List(args) => {
            let mut records = employees.list_employees().await.map_err(translate)?;

            if let Some(term) = args.search.as_deref() {
                records.retain(|employee| employee.matches(term));
            }

            if records.is_empty() {
                println!("no employees found");
            } else {
                println!("{}", employees_table(&records));
            }
        }
        EmployeesSubcommand::Get(args) => {
            let employee = employees.get_employee(args.id).await.map_err(translate)?;

            print_employee(&employee);
        }
        EmployeesSubcommand::Create(args) => {
            let employee = employees
                .create_employee(NewEmployee {
                    first_name: args.first_name,
                    last_name: args.last_name,
                    email: args.email,
                    phone: args.phone,
                    position: args.position,
                    salary: args.salary,
                    department_id: args.department_id,
                    hire_date: args.hire_date,
                })
                .await
                .map_err(translate)?;

            print_employee(&employee);
        }
        EmployeesSubcommand::Update(args) => {
            let phone = if args.clear_phone {
                Some(None)
            } else {
                args.phone.map(Some)
            };

            let employee = employees
                .update_employee(
                    args.id,
                    EmployeeUpdate {
                        first_name: args.first_name,
                        last_name: args.last_name,
                        email: args.email,
                        phone,
                        position: args.position,
                        salary: args.salary,
                        department_id: args.department_id,
                        hire_date: args.hire_date,
                    },
                )
                .await
                .map_err(translate)?;

            print_employee(&employee);
        }
        EmployeesSubcommand::Delete(args) => {
            if !args.yes {
                return Err(format!(
                    "refusing to delete employee {} without --yes",
                    args.id
                ));
            }

            employees.delete_employee(args.id).await.map_err(translate)?;

            println!("deleted employee {}", args.id);
        }
    }

    Ok(())
}

fn print_employee(employee: &EmployeeRecord) {
    println!("id: {}", employee.id);
    println!("name: {}", employee.full_name());
    println!("email: {}", employee.email);
    println!("phone: {}", employee.phone.as_deref().unwrap_or("none"));
    println!("position: {}", employee.position);
    println!("salary: {}", employee.salary.round_dp(2));
    println!(
        "department: {}",
        employee.department.as_ref().map_or_else(
            || format!("#{} (unresolved)", employee.department_id),
            |department| format!("{} (#{})", department.name, department.id),
        )
    );
    println!("hire_date: {}", employee.hire_date);
    println!("created_at: {}", employee.created_at);
    println!("updated_at: {}", employee.updated_at);
}
