//! API routers, one per resource, merged under `/api`.

mod auth;
mod goals;
mod stats;
mod transactions;
mod users;

use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::main_lib::AppState;

pub fn app_router(state: Arc<AppState>) -> Router {
    let api = Router::new()
        .merge(auth::router())
        .merge(users::router())
        .merge(transactions::router())
        .merge(goals::router())
        .merge(stats::router());

    Router::new()
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
