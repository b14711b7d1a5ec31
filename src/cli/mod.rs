use std::sync::Arc;

use clap::{Parser, Subcommand};
use staffdesk::{
    config::AppConfig,
    context::AppContext,
    session::{FileSessionStore, LOGIN_ROUTE, Navigator},
};

mod auth;
mod departments;
mod employees;

#[derive(Debug, Parser)]
#[command(name = "staffdesk", about = "Employee and department records", long_about = None)]
pub(crate) struct Cli {
    #[command(flatten)]
    pub(crate) config: AppConfig,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Employees(employees::EmployeesCommand),
    Departments(departments::DepartmentsCommand),
    Login(auth::LoginArgs),
    Signup(auth::SignupArgs),
    Logout,
}

impl Cli {
    /// Parse arguments, reading `.env` first when present.
    pub(crate) fn load() -> Self {
        _ = dotenvy::dotenv();

        Self::parse()
    }

    pub(crate) async fn run(self) -> Result<(), String> {
        let context = AppContext::new(
            self.config.backend.backend,
            self.config.backend.api_config(),
            Arc::new(FileSessionStore::new(
                self.config.session.session_file.clone(),
            )),
            Arc::new(TerminalNavigator),
        );

        match self.command {
            Commands::Employees(command) => employees::run(&context, command).await,
            Commands::Departments(command) => departments::run(&context, command).await,
            Commands::Login(args) => auth::login(&context, args).await,
            Commands::Signup(args) => auth::signup(&context, args).await,
            Commands::Logout => auth::logout(&context).await,
        }
    }
}

/// Turns a redirect into a hint, since there is no page to send the user to.
#[derive(Debug)]
struct TerminalNavigator;

impl Navigator for TerminalNavigator {
    fn redirect(&self, route: &str) {
        if route == LOGIN_ROUTE {
            eprintln!("session expired, run `staffdesk login` to sign in again");
        } else {
            eprintln!("continue at {route}");
        }
    }
}
