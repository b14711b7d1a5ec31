//! Auth service.

use async_trait::async_trait;
use mockall::automock;
use tracing::{debug, info};

use crate::{
    api::ApiClient,
    auth::{AuthResponse, AuthServiceError, LoginRequest, SignupRequest},
};

#[derive(Debug, Clone)]
pub struct HttpAuthService {
    client: ApiClient,
}

impl HttpAuthService {
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    fn start_session(&self, response: &AuthResponse) -> Result<(), AuthServiceError> {
        self.client.session().set_token(&response.token)?;

        info!(user = response.user.id, role = %response.user.role, "session started");

        Ok(())
    }
}

#[async_trait]
impl AuthService for HttpAuthService {
    async fn login(&self, credentials: LoginRequest) -> Result<AuthResponse, AuthServiceError> {
        let response: AuthResponse = self.client.post("/auth/login", &credentials).await?;

        self.start_session(&response)?;

        Ok(response)
    }

    async fn signup(&self, account: SignupRequest) -> Result<AuthResponse, AuthServiceError> {
        if !account.passwords_match() {
            return Err(AuthServiceError::PasswordMismatch);
        }

        let response: AuthResponse = self.client.post("/auth/register", &account).await?;

        self.start_session(&response)?;

        Ok(response)
    }

    async fn logout(&self) -> Result<(), AuthServiceError> {
        self.client.session().clear()?;

        debug!("session cleared");

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Exchanges credentials for a bearer token and stores it in the session.
    async fn login(&self, credentials: LoginRequest) -> Result<AuthResponse, AuthServiceError>;

    /// Registers a new account and stores the issued token.
    ///
    /// Fails with [`AuthServiceError::PasswordMismatch`] without contacting
    /// the service when the confirmation differs.
    async fn signup(&self, account: SignupRequest) -> Result<AuthResponse, AuthServiceError>;

    /// Removes the stored token.
    async fn logout(&self) -> Result<(), AuthServiceError>;
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use crate::{
        session::SessionStore,
        test::{HttpTestContext, StubResponse, StubServer},
    };

    use super::*;

    fn auth_json(token: &str) -> serde_json::Value {
        json!({
            "token": token,
            "user": {
                "id": 17,
                "email": "admin@example.com",
                "firstName": "Ada",
                "lastName": "Admin",
                "role": "Admin"
            }
        })
    }

    fn signup(confirm_password: &str) -> SignupRequest {
        SignupRequest {
            first_name: "Ada".to_string(),
            last_name: "Admin".to_string(),
            email: "admin@example.com".to_string(),
            password: "hunter22".to_string(),
            confirm_password: confirm_password.to_string(),
        }
    }

    #[tokio::test]
    async fn login_stores_returned_token() -> TestResult {
        let server = StubServer::start(vec![StubResponse::json(200, &auth_json("jwt-1"))]).await?;
        let ctx = HttpTestContext::new(server.url(), None);
        let auth = HttpAuthService::new(ctx.client.clone());

        let response = auth
            .login(LoginRequest {
                email: "admin@example.com".to_string(),
                password: "hunter22".to_string(),
            })
            .await?;

        assert_eq!(response.user.first_name, "Ada");
        assert_eq!(ctx.session.token()?.as_deref(), Some("jwt-1"));

        let requests = server.requests().await;
        let request = requests.first().ok_or("no request recorded")?;

        assert_eq!(request.method, "POST");
        assert_eq!(request.path, "/auth/login");
        assert_eq!(
            request.json(),
            json!({ "email": "admin@example.com", "password": "hunter22" })
        );

        Ok(())
    }

    #[tokio::test]
    async fn failed_login_keeps_previous_session() -> TestResult {
        let server = StubServer::start(vec![StubResponse::json(
            401,
            &json!({ "message": "Invalid credentials" }),
        )])
        .await?;
        let ctx = HttpTestContext::new(server.url(), Some("previous"));
        let auth = HttpAuthService::new(ctx.client.clone());

        let result = auth
            .login(LoginRequest {
                email: "admin@example.com".to_string(),
                password: "wrong".to_string(),
            })
            .await;

        let Err(AuthServiceError::Api(error)) = result else {
            return Err(format!("expected an API error, got {result:?}").into());
        };

        assert_eq!(error.message().as_deref(), Some("Invalid credentials"));
        assert_eq!(ctx.session.token()?.as_deref(), Some("previous"));

        Ok(())
    }

    #[tokio::test]
    async fn signup_registers_and_stores_token() -> TestResult {
        let server = StubServer::start(vec![StubResponse::json(201, &auth_json("jwt-2"))]).await?;
        let ctx = HttpTestContext::new(server.url(), None);
        let auth = HttpAuthService::new(ctx.client.clone());

        auth.signup(signup("hunter22")).await?;

        assert_eq!(ctx.session.token()?.as_deref(), Some("jwt-2"));

        let requests = server.requests().await;
        let request = requests.first().ok_or("no request recorded")?;

        assert_eq!(request.path, "/auth/register");
        assert_eq!(request.json()["confirmPassword"], json!("hunter22"));

        Ok(())
    }

    #[tokio::test]
    async fn signup_with_mismatched_passwords_is_not_sent() -> TestResult {
        let server = StubServer::start(Vec::new()).await?;
        let ctx = HttpTestContext::new(server.url(), None);
        let auth = HttpAuthService::new(ctx.client.clone());

        let result = auth.signup(signup("hunter23")).await;

        assert!(
            matches!(result, Err(AuthServiceError::PasswordMismatch)),
            "expected PasswordMismatch, got {result:?}"
        );
        assert!(server.requests().await.is_empty());
        assert_eq!(ctx.session.token()?, None);

        Ok(())
    }

    #[tokio::test]
    async fn logout_clears_token() -> TestResult {
        let server = StubServer::start(Vec::new()).await?;
        let ctx = HttpTestContext::new(server.url(), Some("jwt-3"));
        let auth = HttpAuthService::new(ctx.client.clone());

        auth.logout().await?;

        assert_eq!(ctx.session.token()?, None);
        assert!(server.requests().await.is_empty());

        Ok(())
    }
}
