use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde_json::{json, Value};

use crate::{auth::AuthUser, error::ApiResult, main_lib::AppState};
use dompetku_core::stats::{ExpenseByCategory, IncomeVsExpense, Summary};
use dompetku_core::transactions::allowed_categories;

async fn get_summary(
    auth: AuthUser,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Summary>> {
    let summary = state.stats_service.get_summary(&auth.user_id).await?;
    Ok(Json(summary))
}

async fn get_expense_by_category(
    auth: AuthUser,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<ExpenseByCategory>> {
    let breakdown = state
        .stats_service
        .get_expense_by_category(&auth.user_id)
        .await?;
    Ok(Json(breakdown))
}

async fn get_income_vs_expense(
    auth: AuthUser,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<IncomeVsExpense>> {
    let comparison = state
        .stats_service
        .get_income_vs_expense(&auth.user_id)
        .await?;
    Ok(Json(comparison))
}

/// Public: the fixed expense category set.
async fn get_categories() -> Json<Value> {
    Json(json!({ "categories": allowed_categories() }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/categories", get(get_categories))
        .route("/stats/summary", get(get_summary))
        .route("/stats/expense-by-category", get(get_expense_by_category))
        .route("/stats/income-vs-expense", get(get_income_vs_expense))
}
