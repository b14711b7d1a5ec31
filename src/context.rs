//! App Context

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::Arc,
};

use tracing::debug;

use crate::{
    api::{ApiClient, ApiConfig},
    auth::{AuthService, HttpAuthService},
    domain::{
        departments::{DepartmentsService, HttpDepartmentsService, InMemoryDepartmentsService},
        employees::{EmployeesService, HttpEmployeesService, InMemoryEmployeesService},
    },
    session::{Navigator, SessionStore},
    store::{MockStore, SharedStore},
    translator::ErrorTranslator,
};

/// Which data-access implementation backs the services.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum Backend {
    /// Remote REST service.
    Http,

    /// Seeded in-memory store.
    Mock,
}

/// Services for one backend, shared behind trait objects.
#[derive(Clone)]
pub struct AppContext {
    pub departments: Arc<dyn DepartmentsService>,
    pub employees: Arc<dyn EmployeesService>,

    /// Only the HTTP backend can authenticate.
    pub auth: Option<Arc<dyn AuthService>>,

    pub session: Arc<dyn SessionStore>,
    pub translator: ErrorTranslator,
}

impl Debug for AppContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("AppContext")
            .field("auth", &self.auth.is_some())
            .field("session", &self.session)
            .field("translator", &self.translator)
            .finish_non_exhaustive()
    }
}

impl AppContext {
    /// Build the context for `backend`. The mock backend starts from the
    /// seed data.
    #[must_use]
    pub fn new(
        backend: Backend,
        api: ApiConfig,
        session: Arc<dyn SessionStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        match backend {
            Backend::Http => Self::http(api, session, navigator),
            Backend::Mock => Self::with_store(MockStore::seeded(), session, navigator),
        }
    }

    #[must_use]
    pub fn http(
        api: ApiConfig,
        session: Arc<dyn SessionStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        debug!(base_url = %api.base_url, "using http backend");

        let client = ApiClient::new(api, Arc::clone(&session));

        Self {
            departments: Arc::new(HttpDepartmentsService::new(client.clone())),
            employees: Arc::new(HttpEmployeesService::new(client.clone())),
            auth: Some(Arc::new(HttpAuthService::new(client))),
            translator: ErrorTranslator::new(Arc::clone(&session), navigator),
            session,
        }
    }

    /// Build a mock-backed context over `store`.
    #[must_use]
    pub fn with_store(
        store: MockStore,
        session: Arc<dyn SessionStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        debug!(
            departments = store.departments().len(),
            employees = store.employees().len(),
            "using mock backend"
        );

        Self::with_shared_store(store.into_shared(), session, navigator)
    }

    /// Build a mock-backed context over a store the caller keeps a handle to.
    #[must_use]
    pub fn with_shared_store(
        store: SharedStore,
        session: Arc<dyn SessionStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            departments: Arc::new(InMemoryDepartmentsService::new(Arc::clone(&store))),
            employees: Arc::new(InMemoryEmployeesService::new(store)),
            auth: None,
            translator: ErrorTranslator::new(Arc::clone(&session), navigator),
            session,
        }
    }
}
