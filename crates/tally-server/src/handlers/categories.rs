//! Category suggestion handlers

use axum::Json;

use tally_core::models::{default_categories, CategorySuggestion};

/// GET /api/categories - Suggested category names with icons
pub async fn list_categories() -> Json<Vec<CategorySuggestion>> {
    Json(default_categories())
}
