//! Keyword rule matching for automatic transaction categorization
//!
//! A rule matches when its keyword (case-insensitive) appears anywhere in
//! `"{merchant} {description}"`. Rules are tried in stored order and the
//! first match wins, so earlier rules shadow later ones.
//!
//! An empty keyword is a substring of every string: such a rule matches
//! every transaction and hides all rules stored after it. This is kept as
//! literal substring behavior rather than special-cased.

use tracing::debug;

use crate::error::Result;
use crate::models::CategoryRule;
use crate::store::SpendStore;

fn search_text(merchant: &str, description: Option<&str>) -> String {
    format!("{} {}", merchant, description.unwrap_or("")).to_lowercase()
}

/// Return the category of the first rule whose keyword occurs in the merchant/description text
pub fn categorize(
    merchant: &str,
    description: Option<&str>,
    rules: &[CategoryRule],
) -> Option<String> {
    let text = search_text(merchant, description);

    rules
        .iter()
        .find(|rule| text.contains(&rule.keyword.to_lowercase()))
        .map(|rule| {
            debug!(
                rule_id = rule.id,
                keyword = %rule.keyword,
                category = %rule.category,
                "Category rule matched"
            );
            rule.category.clone()
        })
}

/// All rules matching the text, in stored order
///
/// The first element (if any) is the rule `categorize` would apply.
pub fn matching_rules<'a>(
    merchant: &str,
    description: Option<&str>,
    rules: &'a [CategoryRule],
) -> Vec<&'a CategoryRule> {
    let text = search_text(merchant, description);

    rules
        .iter()
        .filter(|rule| text.contains(&rule.keyword.to_lowercase()))
        .collect()
}

/// Categorize against the rules currently in the store
///
/// Rules are read fresh on every call.
pub fn auto_categorize(
    store: &impl SpendStore,
    merchant: &str,
    description: Option<&str>,
) -> Result<Option<String>> {
    let rules = store.category_rules()?;
    Ok(categorize(merchant, description, &rules))
}
