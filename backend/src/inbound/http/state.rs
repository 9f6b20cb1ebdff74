//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they depend only
//! on the authentication driving port and stay testable without I/O.

use std::sync::Arc;

use crate::domain::ports::AuthenticationService;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub auth: Arc<dyn AuthenticationService>,
}

impl HttpState {
    /// Bundle the authentication service for handlers.
    pub fn new(auth: Arc<dyn AuthenticationService>) -> Self {
        Self { auth }
    }
}
