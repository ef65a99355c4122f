//! Budget handlers

use std::sync::Arc;

use axum::{
    extract::{Query, Request, State},
    Json,
};
use serde::Deserialize;

use super::read_json;
use crate::{request_actor, AppError, AppState, StatusResponse};
use tally_core::{models::Budget, Month};

/// Query parameters for listing budgets
#[derive(Debug, Deserialize)]
pub struct BudgetQuery {
    pub month: Option<String>,
}

/// GET /api/budgets - List budgets, optionally for one month
pub async fn list_budgets(
    State(state): State<Arc<AppState>>,
    Query(params): Query<BudgetQuery>,
    request: Request,
) -> Result<Json<Vec<Budget>>, AppError> {
    let actor = request_actor(request.headers());
    let month = params
        .month
        .as_deref()
        .map(str::parse::<Month>)
        .transpose()?;

    let budgets = state.db.list_budgets(month.as_ref())?;

    state.db.log_audit(
        &actor,
        "list",
        Some("budget"),
        None,
        Some(&format!("count={}", budgets.len())),
    )?;

    Ok(Json(budgets))
}

/// Request body for setting a budget
#[derive(Debug, Deserialize)]
pub struct CreateBudgetRequest {
    pub category: String,
    /// YYYY-MM
    pub month: String,
    pub limit: f64,
}

/// POST /api/budgets - Set a budget for a category and month
///
/// A later budget for the same category and month takes precedence in insights.
pub async fn create_budget(
    State(state): State<Arc<AppState>>,
    request: Request,
) -> Result<Json<StatusResponse>, AppError> {
    let actor = request_actor(request.headers());
    let req: CreateBudgetRequest = read_json(request).await?;

    let id = state.db.set_budget(&req.category, &req.month, req.limit)?;

    state.db.log_audit(
        &actor,
        "create",
        Some("budget"),
        Some(id),
        Some(&format!(
            "category={} month={} limit={}",
            req.category, req.month, req.limit
        )),
    )?;

    Ok(Json(StatusResponse::created(id)))
}
