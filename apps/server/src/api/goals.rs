use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::{auth::AuthUser, error::ApiResult, main_lib::AppState};
use dompetku_core::goals::{GoalUpdate, NewGoal};

#[derive(Debug, Deserialize)]
struct AmountInput {
    amount: f64,
}

async fn create_goal(
    auth: AuthUser,
    State(state): State<Arc<AppState>>,
    Json(input): Json<NewGoal>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let goal = state.goal_service.create_goal(&auth.user_id, input).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Goal berhasil dibuat",
            "goal": goal,
        })),
    ))
}

async fn list_goals(auth: AuthUser, State(state): State<Arc<AppState>>) -> ApiResult<Json<Value>> {
    let goals = state.goal_service.get_goals(&auth.user_id).await?;
    Ok(Json(json!({
        "count": goals.len(),
        "goals": goals,
    })))
}

async fn get_goal(
    auth: AuthUser,
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Value>> {
    let goal = state.goal_service.get_goal(&auth.user_id, &id).await?;
    Ok(Json(json!({ "goal": goal })))
}

async fn update_goal(
    auth: AuthUser,
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(update): Json<GoalUpdate>,
) -> ApiResult<Json<Value>> {
    let goal = state
        .goal_service
        .update_goal(&auth.user_id, &id, update)
        .await?;
    Ok(Json(json!({
        "message": "Goal berhasil diperbarui",
        "goal": goal,
    })))
}

async fn add_progress(
    auth: AuthUser,
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(input): Json<AmountInput>,
) -> ApiResult<Json<Value>> {
    let goal = state
        .goal_service
        .add_progress(&auth.user_id, &id, input.amount)
        .await?;
    Ok(Json(json!({
        "message": "Tabungan berhasil ditambahkan",
        "goal": goal,
    })))
}

async fn withdraw_progress(
    auth: AuthUser,
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(input): Json<AmountInput>,
) -> ApiResult<Json<Value>> {
    let goal = state
        .goal_service
        .withdraw_progress(&auth.user_id, &id, input.amount)
        .await?;
    Ok(Json(json!({
        "message": "Tabungan berhasil ditarik",
        "goal": goal,
    })))
}

async fn delete_goal(
    auth: AuthUser,
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Value>> {
    state.goal_service.delete_goal(&auth.user_id, &id).await?;
    Ok(Json(json!({ "message": "Goal berhasil dihapus" })))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/goals", get(list_goals).post(create_goal))
        .route(
            "/goals/{id}",
            get(get_goal).put(update_goal).delete(delete_goal),
        )
        .route("/goals/{id}/add", post(add_progress))
        .route("/goals/{id}/withdraw", post(withdraw_progress))
}
