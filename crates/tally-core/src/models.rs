//! Domain models for Tally

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Currency assigned when a transaction does not name one
pub const DEFAULT_CURRENCY: &str = "USD";

/// A recorded transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    /// Always positive
    pub amount: f64,
    pub merchant: String,
    pub description: Option<String>,
    /// User-supplied or assigned by a category rule at creation time
    pub category: Option<String>,
    pub date: DateTime<Utc>,
    /// Account name or type (e.g., Checking)
    pub account: Option<String>,
    pub currency: String,
    pub created_at: DateTime<Utc>,
}

/// A transaction to be recorded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTransaction {
    pub amount: f64,
    pub merchant: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(deserialize_with = "deserialize_flexible_datetime")]
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub account: Option<String>,
    #[serde(default = "default_currency")]
    pub currency: String,
}

impl NewTransaction {
    /// Create a transaction in the default currency with no optional fields set
    pub fn new(amount: f64, merchant: impl Into<String>, date: DateTime<Utc>) -> Self {
        Self {
            amount,
            merchant: merchant.into(),
            description: None,
            category: None,
            date,
            account: None,
            currency: default_currency(),
        }
    }

    /// True when the caller did not pick a category (missing or blank)
    pub fn needs_category(&self) -> bool {
        self.category
            .as_deref()
            .map(|c| c.is_empty())
            .unwrap_or(true)
    }
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

/// Parse a transaction date from the formats clients send
///
/// Accepts RFC 3339 (`2024-03-05T12:00:00Z`), a naive ISO datetime
/// (`2024-03-05T12:00:00`, taken as UTC) or a bare date (`2024-03-05`, midnight UTC).
pub fn parse_flexible_datetime(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
            return Some(dt.and_utc());
        }
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

fn deserialize_flexible_datetime<'de, D>(deserializer: D) -> std::result::Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_flexible_datetime(&s)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid date: {}", s)))
}

/// Keyword rule for automatic categorization
///
/// Rules are evaluated in insertion order; the first keyword found in the
/// merchant/description text decides the category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRule {
    pub id: i64,
    pub keyword: String,
    pub category: String,
    pub created_at: DateTime<Utc>,
}

/// Spending limit for one category in one calendar month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    pub id: i64,
    pub category: String,
    /// YYYY-MM
    pub month: String,
    pub limit: f64,
    pub created_at: DateTime<Utc>,
}

/// How a category's spend compares to its budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageClass {
    /// Under 70% of budget
    Healthy,
    /// 70% up to 90% of budget
    Warning,
    /// At or above 90% of budget
    OverThreshold,
    /// No budget exists for the category this month
    NoBudget,
}

impl MessageClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Healthy => "healthy",
            Self::Warning => "warning",
            Self::OverThreshold => "over_threshold",
            Self::NoBudget => "no_budget",
        }
    }
}

impl std::fmt::Display for MessageClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Spend for one category within a month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub category: String,
    /// Rounded to 2 decimals
    pub spent: f64,
    pub budget: Option<f64>,
    pub message: String,
    pub message_class: MessageClass,
    pub transaction_count: i64,
    /// Percentage of budget used, rounded to 1 decimal (None without a budget)
    pub used_pct: Option<f64>,
}

/// Monthly spend summary returned by the insights endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthSummary {
    pub month: String,
    /// Ordered by spend, highest first
    pub categories: Vec<CategorySummary>,
    pub top_category: Option<String>,
    pub total_spend: f64,
}

/// A category name the UI may offer when entering transactions or budgets
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySuggestion {
    pub name: String,
    pub icon: Option<String>,
}

const DEFAULT_CATEGORIES: [(&str, &str); 9] = [
    ("Groceries", "shopping-basket"),
    ("Dining", "utensils"),
    ("Transport", "car"),
    ("Shopping", "shopping-bag"),
    ("Entertainment", "film"),
    ("Bills", "credit-card"),
    ("Health", "heart"),
    ("Travel", "plane"),
    ("Other", "circle"),
];

/// Common categories offered as suggestions
pub fn default_categories() -> Vec<CategorySuggestion> {
    DEFAULT_CATEGORIES
        .iter()
        .map(|(name, icon)| CategorySuggestion {
            name: name.to_string(),
            icon: Some(icon.to_string()),
        })
        .collect()
}
