use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::auth::AuthManager;
use crate::config::Config;
use dompetku_core::goals::{GoalService, GoalServiceTrait};
use dompetku_core::stats::{StatsService, StatsServiceTrait};
use dompetku_core::transactions::{TransactionService, TransactionServiceTrait};
use dompetku_core::users::{UserService, UserServiceTrait};
use dompetku_storage_mongo::goals::GoalRepository;
use dompetku_storage_mongo::transactions::TransactionRepository;
use dompetku_storage_mongo::users::UserRepository;

/// Process-wide immutable state: service handles plus the token keys.
/// Built once at startup and shared behind an `Arc`.
pub struct AppState {
    pub user_service: Arc<dyn UserServiceTrait>,
    pub transaction_service: Arc<dyn TransactionServiceTrait>,
    pub goal_service: Arc<dyn GoalServiceTrait>,
    pub stats_service: Arc<dyn StatsServiceTrait>,
    pub auth: AuthManager,
}

pub fn init_tracing() {
    let log_format = std::env::var("DOMPETKU_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let database = dompetku_storage_mongo::connect(&config.mongo_uri, &config.mongo_db).await?;

    let user_repository = Arc::new(UserRepository::new(&database));
    let transaction_repository = Arc::new(TransactionRepository::new(&database));
    let goal_repository = Arc::new(GoalRepository::new(&database));

    let user_service = Arc::new(UserService::new(user_repository));
    let transaction_service = Arc::new(TransactionService::new(transaction_repository.clone()));
    let goal_service = Arc::new(GoalService::new(goal_repository));
    let stats_service = Arc::new(StatsService::new(transaction_repository));

    Ok(Arc::new(AppState {
        user_service,
        transaction_service,
        goal_service,
        stats_service,
        auth: AuthManager::new(&config.jwt_secret),
    }))
}
