use clap::{Args, Subcommand};
use staffdesk::{
    context::AppContext,
    domain::departments::{
        DepartmentsServiceError,
        data::{DepartmentUpdate, NewDepartment},
        records::{DepartmentId, DepartmentRecord},
    },
    tables::departments_table,
};

#[derive(Debug, Args)]
pub(crate) struct DepartmentsCommand {
    #[command(subcommand)]
    command: DepartmentsSubcommand,
}

#[derive(Debug, Subcommand)]
enum DepartmentsSubcommand {
    List(ListDepartmentsArgs),
    Get(DepartmentIdArgs),
    Create(CreateDepartmentArgs),
    Update(UpdateDepartmentArgs),
    Delete(DeleteDepartmentArgs),
}

#[derive(Debug, Args)]
struct ListDepartmentsArgs {
    /// Only show departments whose name or description contains this text
    #[arg(long)]
    search: Option<String>,
}

#[derive(Debug, Args)]
struct DepartmentIdArgs {
    /// Department id
    id: DepartmentId,
}

#[derive(Debug, Args)]
struct CreateDepartmentArgs {
    #[arg(long)]
    name: String,

    #[arg(long)]
    description: Option<String>,
}

#[derive(Debug, Args)]
struct UpdateDepartmentArgs {
    /// Department id
    id: DepartmentId,

    #[arg(long)]
    name: Option<String>,

    #[arg(long, conflicts_with = "clear_description")]
    description: Option<String>,

    /// Remove the stored description
    #[arg(long)]
    clear_description: bool,
}

#[derive(Debug, Args)]
struct DeleteDepartmentArgs {
    /// Department id
    id: DepartmentId,

    /// Confirm the deletion
    #[arg(long)]
    yes: bool,
}

pub(crate) async fn run(context: &AppContext, command: DepartmentsCommand) -> Result<(), String> {
    let departments = &context.departments;
    let translate = |error: DepartmentsServiceError| context.translator.translate(&error);

    match command.command {
        DepartmentsSubcommand::List(args) => {
            let mut records = departments.list_departments().await.map_err(translate)?;

            if let Some(term) = args.search.as_deref() {
                records.retain(|department| department.matches(term));
            }

            if records.is_empty() {
                println!("no departments found");
            } else {
                println!("{}", departments_table(&records));
            }
        }
        DepartmentsSubcommand::Get(args) => {
            let department = departments
                .get_department(args.id)
                .await
                .map_err(translate)?;

            print_department(&department);
        }
        DepartmentsSubcommand::Create(args) => {
            let department = departments
                .create_department(NewDepartment {
                    name: args.name,
                    description: args.description,
                })
                .await
                .map_err(translate)?;

            print_department(&department);
        }
        DepartmentsSubcommand::Update(args) => {
            let description = if args.clear_description {
                Some(None)
            } else {
                args.description.map(Some)
            };

            let department = departments
                .update_department(
                    args.id,
                    DepartmentUpdate {
                        name: args.name,
                        description,
                    },
                )
                .await
                .map_err(translate)?;

            print_department(&department);
        }
        DepartmentsSubcommand::Delete(args) => {
            if !args.yes {
                return Err(format!(
                    "refusing to delete department {} without --yes",
                    args.id
                ));
            }

            departments
                .delete_department(args.id)
                .await
                .map_err(translate)?;

            println!("deleted department {}", args.id);
        }
    }

    Ok(())
}

fn print_department(department: &DepartmentRecord) {
    println!("id: {}", department.id);
    println!("name: {}", department.name);
    println!(
        "description: {}",
        department.description.as_deref().unwrap_or("none")
    );
    println!("created_at: {}", department.created_at);
    println!("updated_at: {}", department.updated_at);
}
