use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, put},
    Json, Router,
};
use serde_json::{json, Value};

use crate::{auth::AuthUser, error::ApiResult, main_lib::AppState};
use dompetku_core::users::{PasswordChange, ProfileUpdate};

async fn get_profile(
    auth: AuthUser,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Value>> {
    let profile = state.user_service.get_profile(&auth.user_id).await?;
    Ok(Json(json!({ "user": profile })))
}

async fn update_profile(
    auth: AuthUser,
    State(state): State<Arc<AppState>>,
    Json(update): Json<ProfileUpdate>,
) -> ApiResult<Json<Value>> {
    let profile = state
        .user_service
        .update_profile(&auth.user_id, update)
        .await?;
    Ok(Json(json!({
        "message": "Profil berhasil diperbarui",
        "user": profile,
    })))
}

async fn change_password(
    auth: AuthUser,
    State(state): State<Arc<AppState>>,
    Json(change): Json<PasswordChange>,
) -> ApiResult<Json<Value>> {
    state
        .user_service
        .change_password(&auth.user_id, change)
        .await?;
    Ok(Json(json!({ "message": "Password berhasil diubah" })))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/user/profile", get(get_profile).put(update_profile))
        .route("/user/change-password", put(change_password))
}
