//! Transaction handlers

use std::sync::Arc;

use axum::{
    extract::{Query, Request, State},
    Json,
};
use serde::Deserialize;

use super::read_json;
use crate::{request_actor, AppError, AppState};
use tally_core::{
    models::{NewTransaction, Transaction},
    record_transaction,
    validate::validate_limit,
    Error as CoreError,
};

/// Query parameters for listing transactions
#[derive(Debug, Deserialize)]
pub struct TransactionQuery {
    /// 1..=1000, default 100
    pub limit: Option<i64>,
    /// Exact category match
    pub category: Option<String>,
}

/// GET /api/transactions - List transactions, newest first
pub async fn list_transactions(
    State(state): State<Arc<AppState>>,
    Query(params): Query<TransactionQuery>,
    request: Request,
) -> Result<Json<Vec<Transaction>>, AppError> {
    let actor = request_actor(request.headers());
    let limit = validate_limit(params.limit)?;
    let category = params.category.as_deref().filter(|c| !c.is_empty());

    let transactions = state.db.list_transactions(limit, category)?;

    state.db.log_audit(
        &actor,
        "list",
        Some("transaction"),
        None,
        Some(&format!(
            "limit={} category={} count={}",
            limit,
            category.unwrap_or("*"),
            transactions.len()
        )),
    )?;

    Ok(Json(transactions))
}

/// POST /api/transactions - Record a transaction
///
/// A blank category is filled in from the keyword rules before storing.
pub async fn create_transaction(
    State(state): State<Arc<AppState>>,
    request: Request,
) -> Result<Json<Transaction>, AppError> {
    let actor = request_actor(request.headers());
    let tx: NewTransaction = read_json(request).await?;

    let stored = record_transaction(&state.db, tx).map_err(|e| match e {
        CoreError::NotFound(_) => AppError::internal("Failed to fetch created transaction"),
        other => other.into(),
    })?;

    state.db.log_audit(
        &actor,
        "create",
        Some("transaction"),
        Some(stored.id),
        Some(&format!(
            "merchant={} category={}",
            stored.merchant,
            stored.category.as_deref().unwrap_or("-")
        )),
    )?;

    Ok(Json(stored))
}
