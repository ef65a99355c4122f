//! Monthly insights handlers

use std::sync::Arc;

use axum::{
    extract::{Query, Request, State},
    Json,
};
use serde::Deserialize;

use crate::{request_actor, AppError, AppState};
use tally_core::{models::MonthSummary, monthly_insights};

/// Query parameters for insights
#[derive(Debug, Deserialize)]
pub struct InsightsQuery {
    /// YYYY-MM, defaults to the current UTC month
    pub month: Option<String>,
}

/// GET /api/insights - Spending by category against the month's budgets
pub async fn get_insights(
    State(state): State<Arc<AppState>>,
    Query(params): Query<InsightsQuery>,
    request: Request,
) -> Result<Json<MonthSummary>, AppError> {
    let actor = request_actor(request.headers());

    let summary = monthly_insights(&state.db, params.month.as_deref())?;

    state.db.log_audit(
        &actor,
        "view",
        Some("insights"),
        None,
        Some(&format!(
            "month={} categories={}",
            summary.month,
            summary.categories.len()
        )),
    )?;

    Ok(Json(summary))
}
