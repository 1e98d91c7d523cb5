use std::sync::Arc;

use crate::{
    application::user_service::UserService,
    config::AppConfig,
    core::seed_users,
    infrastructure::in_memory_user_repository::InMemoryUserRepository,
};

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService>,
}

impl AppState {
    pub fn new(user_service: Arc<UserService>) -> Self {
        Self { user_service }
    }

    /// Wires a fresh in-memory store into the service layer.
    pub fn from_config(config: &AppConfig) -> Self {
        let records = if config.seed { seed_users() } else { Vec::new() };
        let repository = Arc::new(InMemoryUserRepository::with_records(
            config.page_rows,
            records,
        ));
        Self::new(Arc::new(UserService::new(repository)))
    }
}
