//! Recording transactions
//!
//! Creation validates the input, fills in a category from the keyword rules
//! when the caller left it blank, persists the row and reads it back.

use tracing::{debug, warn};

use crate::categorize::auto_categorize;
use crate::error::{Error, Result};
use crate::models::{NewTransaction, Transaction};
use crate::store::SpendStore;
use crate::validate::validate_transaction;

/// Validate, auto-categorize and persist a transaction, returning the stored row
///
/// A category supplied by the caller always wins over the rules. If the
/// stored row cannot be read back by id, the most recent transaction with the
/// same merchant and amount is returned instead; if that also fails the
/// request fails. An empty category that no rule replaces is stored as `""`.
pub fn record_transaction(store: &impl SpendStore, mut tx: NewTransaction) -> Result<Transaction> {
    validate_transaction(&tx)?;

    if tx.needs_category() {
        let auto = auto_categorize(store, &tx.merchant, tx.description.as_deref())?
            .filter(|c| !c.is_empty());
        if let Some(category) = auto {
            debug!(merchant = %tx.merchant, category = %category, "Auto-categorized transaction");
            tx.category = Some(category);
        }
    }

    let id = store.insert_transaction(&tx)?;

    let direct = match store.get_transaction(id) {
        Ok(found) => found,
        Err(e) => {
            warn!(id, error = %e, "Failed to read back transaction by id");
            None
        }
    };
    if let Some(stored) = direct {
        return Ok(stored);
    }

    warn!(
        id,
        merchant = %tx.merchant,
        "Transaction not found by id, falling back to latest merchant/amount match"
    );
    store
        .find_latest_transaction(&tx.merchant, tx.amount)?
        .ok_or_else(|| Error::NotFound(format!("transaction {} after insert", id)))
}
