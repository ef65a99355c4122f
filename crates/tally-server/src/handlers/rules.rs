//! Category rule handlers

use std::sync::Arc;

use axum::{
    extract::{Path, Request, State},
    Json,
};
use serde::{Deserialize, Serialize};

use super::read_json;
use crate::{request_actor, AppError, AppState, StatusResponse};
use tally_core::{
    categorize, matching_rules, models::CategoryRule, validate::validate_keyword,
};

/// GET /api/rules - List rules in match order
pub async fn list_rules(
    State(state): State<Arc<AppState>>,
    request: Request,
) -> Result<Json<Vec<CategoryRule>>, AppError> {
    let actor = request_actor(request.headers());

    let rules = state.db.list_rules()?;

    state.db.log_audit(
        &actor,
        "list",
        Some("rule"),
        None,
        Some(&format!("count={}", rules.len())),
    )?;

    Ok(Json(rules))
}

/// Request body for creating a rule
#[derive(Debug, Deserialize)]
pub struct CreateRuleRequest {
    pub keyword: String,
    pub category: String,
}

/// POST /api/rules - Append a keyword rule
pub async fn create_rule(
    State(state): State<Arc<AppState>>,
    request: Request,
) -> Result<Json<StatusResponse>, AppError> {
    let actor = request_actor(request.headers());
    let req: CreateRuleRequest = read_json(request).await?;

    validate_keyword(&req.keyword)?;
    let id = state.db.create_rule(&req.keyword, &req.category)?;

    state.db.log_audit(
        &actor,
        "create",
        Some("rule"),
        Some(id),
        Some(&format!("keyword={} category={}", req.keyword, req.category)),
    )?;

    Ok(Json(StatusResponse::created(id)))
}

/// DELETE /api/rules/:id - Delete a rule
pub async fn delete_rule(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    request: Request,
) -> Result<Json<StatusResponse>, AppError> {
    let actor = request_actor(request.headers());

    state.db.delete_rule(id)?;

    state
        .db
        .log_audit(&actor, "delete", Some("rule"), Some(id), None)?;

    Ok(Json(StatusResponse::ok()))
}

/// Request body for testing rules against a merchant
#[derive(Debug, Deserialize)]
pub struct TestRulesRequest {
    pub merchant: String,
    pub description: Option<String>,
}

/// Which rules match a merchant/description and the category they yield
#[derive(Debug, Serialize)]
pub struct TestRulesResponse {
    /// Category the first matching rule would assign
    pub category: Option<String>,
    /// Every matching rule, in match order
    pub matches: Vec<CategoryRule>,
}

/// POST /api/rules/test - Dry-run categorization without recording anything
pub async fn test_rules(
    State(state): State<Arc<AppState>>,
    request: Request,
) -> Result<Json<TestRulesResponse>, AppError> {
    let actor = request_actor(request.headers());
    let req: TestRulesRequest = read_json(request).await?;

    let rules = state.db.list_rules()?;
    let description = req.description.as_deref();
    let category = categorize(&req.merchant, description, &rules);
    let matches = matching_rules(&req.merchant, description, &rules)
        .into_iter()
        .cloned()
        .collect::<Vec<_>>();

    state.db.log_audit(
        &actor,
        "test",
        Some("rule"),
        None,
        Some(&format!("merchant={} matches={}", req.merchant, matches.len())),
    )?;

    Ok(Json(TestRulesResponse { category, matches }))
}
