use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use serde_json::{json, Value};

use crate::{error::ApiResult, main_lib::AppState};
use dompetku_core::users::{Credentials, RegisterUser, UserProfile};

async fn register(
    State(state): State<Arc<AppState>>,
    Json(input): Json<RegisterUser>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let user = state.user_service.register(input).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "User berhasil didaftarkan",
            "user": user,
        })),
    ))
}

async fn login(
    State(state): State<Arc<AppState>>,
    Json(credentials): Json<Credentials>,
) -> ApiResult<Json<Value>> {
    let user = state.user_service.authenticate(credentials).await?;
    let token = state.auth.issue_token(&user)?;
    Ok(Json(json!({
        "message": "Login berhasil",
        "token": token,
        "user": UserProfile::from(user),
    })))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
}
