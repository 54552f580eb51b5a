pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod startup;
pub mod utils;

use services::{ClientRepo, CredentialStore, MockPublisher, StagingArea};
use std::sync::Arc;

/// Shared application state handed to handlers and middleware.
#[derive(Clone)]
pub struct AppState {
    pub credentials: Arc<CredentialStore>,
    pub clients: Arc<ClientRepo>,
    pub staging: Arc<StagingArea>,
    pub publisher: Arc<MockPublisher>,
}

impl AppState {
    pub fn new(
        credentials: Arc<CredentialStore>,
        clients: Arc<ClientRepo>,
        staging: Arc<StagingArea>,
        publisher: Arc<MockPublisher>,
    ) -> Self {
        Self {
            credentials,
            clients,
            staging,
            publisher,
        }
    }
}
