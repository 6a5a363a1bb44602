use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::{auth::AuthUser, error::ApiResult, main_lib::AppState};
use dompetku_core::transactions::{NewTransaction, TransactionType, TransactionUpdate};

#[derive(Debug, Deserialize)]
struct ListQuery {
    tipe: Option<TransactionType>,
}

async fn create_transaction(
    auth: AuthUser,
    State(state): State<Arc<AppState>>,
    Json(input): Json<NewTransaction>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let transaction = state
        .transaction_service
        .create_transaction(&auth.user_id, input)
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Transaksi berhasil ditambahkan",
            "transaction": transaction,
        })),
    ))
}

async fn list_transactions(
    auth: AuthUser,
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListQuery>,
) -> ApiResult<Json<Value>> {
    let transactions = state
        .transaction_service
        .list_transactions(&auth.user_id, query.tipe)
        .await?;
    Ok(Json(json!({
        "count": transactions.len(),
        "transactions": transactions,
    })))
}

async fn get_transaction(
    auth: AuthUser,
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Value>> {
    let transaction = state
        .transaction_service
        .get_transaction(&auth.user_id, &id)
        .await?;
    Ok(Json(json!({ "transaction": transaction })))
}

async fn update_transaction(
    auth: AuthUser,
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(update): Json<TransactionUpdate>,
) -> ApiResult<Json<Value>> {
    let transaction = state
        .transaction_service
        .update_transaction(&auth.user_id, &id, update)
        .await?;
    Ok(Json(json!({
        "message": "Transaksi berhasil diperbarui",
        "transaction": transaction,
    })))
}

async fn delete_transaction(
    auth: AuthUser,
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Value>> {
    state
        .transaction_service
        .delete_transaction(&auth.user_id, &id)
        .await?;
    Ok(Json(json!({ "message": "Transaksi berhasil dihapus" })))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/transactions",
            get(list_transactions).post(create_transaction),
        )
        .route(
            "/transactions/{id}",
            get(get_transaction)
                .put(update_transaction)
                .delete(delete_transaction),
        )
}
