use clap::Args;
use staffdesk::{
    auth::{AuthResponse, AuthService, AuthServiceError, LoginRequest, SignupRequest},
    context::AppContext,
};

#[derive(Debug, Args)]
pub(crate) struct LoginArgs {
    #[arg(long)]
    email: String,

    #[arg(long, env = "STAFFDESK_PASSWORD", hide_env_values = true)]
    password: String,
}

#[derive(Debug, Args)]
pub(crate) struct SignupArgs {
    #[arg(long)]
    first_name: String,

    #[arg(long)]
    last_name: String,

    #[arg(long)]
    email: String,

    #[arg(long, env = "STAFFDESK_PASSWORD", hide_env_values = true)]
    password: String,

    #[arg(long)]
    confirm_password: String,
}

pub(crate) async fn login(context: &AppContext, args: LoginArgs) -> Result<(), String> {
    let response = auth_service(context)?
        .login(LoginRequest {
            email: args.email,
            password: args.password,
        })
        .await
        .map_err(|error: AuthServiceError| context.translator.translate(&error))?;

    print_session(&response);

    Ok(())
}

pub(crate) async fn signup(context: &AppContext, args: SignupArgs) -> Result<(), String> {
    let response = auth_service(context)?
        .signup(SignupRequest {
            first_name: args.first_name,
            last_name: args.last_name,
            email: args.email,
            password: args.password,
            confirm_password: args.confirm_password,
        })
        .await
        .map_err(|error: AuthServiceError| context.translator.translate(&error))?;

    print_session(&response);

    Ok(())
}

pub(crate) async fn logout(context: &AppContext) -> Result<(), String> {
    match &context.auth {
        Some(auth) => auth.logout().await.map_err(|error| error.to_string())?,
        None => context.session.clear().map_err(|error| error.to_string())?,
    }

    println!("signed out");

    Ok(())
}

fn auth_service(context: &AppContext) -> Result<&dyn AuthService, String> {
    context
        .auth
        .as_deref()
        .ok_or_else(|| "authentication requires the http backend".to_string())
}

fn print_session(response: &AuthResponse) {
    println!(
        "signed in as {} {} <{}> ({})",
        response.user.first_name, response.user.last_name, response.user.email, response.user.role
    );
}
