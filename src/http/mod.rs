//! HTTP binding of the grievance operations.
//!
//! All routes live under `/api`. Callers authenticate with an
//! `Authorization: Bearer <token>` header that the configured
//! [`crate::identity::ports::PrincipalDirectory`] resolves; failures are
//! reported as JSON `{ "error": "..." }` bodies.

mod auth;
mod error;
mod routes;
mod state;

pub use error::ApiError;
pub use routes::router;
pub use state::AppState;
