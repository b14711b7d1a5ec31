
pub(crate) use context::{HttpTestContext, TestContext};
pub(crate) use server::{StubResponse, StubServer, unreachable_url};
