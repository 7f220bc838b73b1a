//! Pre-launch lead capture.
//!
//! The single operation of this site: take a raw email string (and an
//! optional city from the request's geo headers), validate and normalize
//! it, and append one record to the lead store. Two terminal outcomes,
//! no retries, no partial states: either the record exists and its id is
//! returned, or nothing was written and the caller gets an error string.

use serde::Serialize;
use tracing::instrument;

use solara_core::{Email, LeadId, NewLead};

use crate::db::LeadStore;

/// Error reported to the caller when the email fails validation.
pub const INVALID_EMAIL_ERROR: &str = "Invalid email format";

/// Confirmation message returned on a successful save.
pub const SAVED_MESSAGE: &str = "Email saved successfully!";

/// Generic error shown when the store fails without a usable message.
pub const STORAGE_FALLBACK_ERROR: &str = "Failed to save email. Please try again.";

/// Tagged result of a lead-capture attempt, as consumed by the UI layer.
///
/// Serializes to `{"success":true,"id":...,"message":...}` or
/// `{"success":false,"error":...}`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum SaveResult {
    /// The lead was durably written.
    Saved {
        success: bool,
        /// Store-assigned identifier of the new record.
        id: String,
        /// Confirmation message for display.
        message: String,
    },
    /// Nothing was written.
    Failed {
        success: bool,
        /// Human-readable error for display.
        error: String,
    },
}

impl SaveResult {
    /// Build the success variant for a stored lead.
    #[must_use]
    pub fn saved(id: LeadId) -> Self {
        Self::Saved {
            success: true,
            id: id.to_string(),
            message: SAVED_MESSAGE.to_string(),
        }
    }

    /// Build the failure variant.
    #[must_use]
    pub fn failed(error: impl Into<String>) -> Self {
        Self::Failed {
            success: false,
            error: error.into(),
        }
    }

    /// True for the [`SaveResult::Saved`] variant.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Saved { .. })
    }
}

/// Validate an email and append it to the pre-launch lead store.
///
/// - Malformed emails short-circuit with [`INVALID_EMAIL_ERROR`] and zero
///   writes. Not a server-side fault, so it is not logged as one.
/// - On the success path the email is stored trimmed and lower-cased (done
///   by [`Email::parse`]) and the city as given, or NULL when absent.
/// - A store failure is logged and surfaced with the store's message, or
///   [`STORAGE_FALLBACK_ERROR`] when it has none. The failure is terminal;
///   resubmission is up to the caller and simply creates a new record.
#[instrument(skip(store, email), fields(city = city.unwrap_or("")))]
pub async fn save_pre_launch_email(
    store: &dyn LeadStore,
    email: &str,
    city: Option<&str>,
) -> SaveResult {
    let email = match Email::parse(email) {
        Ok(email) => email,
        Err(e) => {
            tracing::debug!(reason = %e, "rejected malformed pre-launch email");
            return SaveResult::failed(INVALID_EMAIL_ERROR);
        }
    };

    let lead = NewLead {
        email,
        city: city.map(str::to_owned),
    };

    match store.insert(&lead).await {
        Ok(stored) => {
            tracing::info!(id = %stored.id, "pre-launch email saved");
            SaveResult::saved(stored.id)
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to save pre-launch email");
            SaveResult::failed(non_empty_or_fallback(e.to_string()))
        }
    }
}

/// Use the store's message when it has one, the generic fallback otherwise.
fn non_empty_or_fallback(message: String) -> String {
    if message.trim().is_empty() {
        STORAGE_FALLBACK_ERROR.to_string()
    } else {
        message
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use uuid::Uuid;

    use super::*;
    use crate::test_support::MemoryLeadStore;

    #[tokio::test]
    async fn test_invalid_emails_fail_without_writes() {
        let store = MemoryLeadStore::default();

        for bad in [
            "",
            "   ",
            "no-at-symbol",
            "@example.com",
            "user@",
            "user@domain",
            "us er@example.com",
            "user@host@example.com",
        ] {
            let result = save_pre_launch_email(&store, bad, None).await;
            assert_eq!(
                result,
                SaveResult::failed(INVALID_EMAIL_ERROR),
                "expected rejection for {bad:?}"
            );
        }

        assert!(store.inserted().is_empty(), "no writes may happen");
    }

    #[tokio::test]
    async fn test_email_is_normalized_before_storage() {
        let store = MemoryLeadStore::default();

        let result = save_pre_launch_email(&store, "  User@Example.COM ", None).await;
        assert!(result.is_success());

        let inserted = store.inserted();
        assert_eq!(inserted.len(), 1);
        assert_eq!(inserted[0].email.as_str(), "user@example.com");
    }

    #[tokio::test]
    async fn test_success_without_city_stores_null() {
        let store = MemoryLeadStore::default();

        let result = save_pre_launch_email(&store, "test@example.com", None).await;
        match result {
            SaveResult::Saved {
                success,
                id,
                message,
            } => {
                assert!(success);
                assert!(!id.is_empty());
                assert_eq!(message, SAVED_MESSAGE);
            }
            SaveResult::Failed { .. } => panic!("expected success"),
        }

        let inserted = store.inserted();
        assert_eq!(inserted.len(), 1);
        assert_eq!(inserted[0].city, None);
    }

    #[tokio::test]
    async fn test_success_with_city_stores_city_as_given() {
        let store = MemoryLeadStore::default();

        let result = save_pre_launch_email(&store, "test@example.com", Some("Paris")).await;
        assert!(result.is_success());

        let inserted = store.inserted();
        assert_eq!(inserted[0].city.as_deref(), Some("Paris"));
    }

    #[tokio::test]
    async fn test_storage_failure_surfaces_store_message() {
        let store = MemoryLeadStore::failing("quota exceeded");

        let result = save_pre_launch_email(&store, "test@example.com", None).await;
        match result {
            SaveResult::Failed { success, error } => {
                assert!(!success);
                assert!(error.contains("quota exceeded"));
            }
            SaveResult::Saved { .. } => panic!("expected failure"),
        }

        assert!(store.inserted().is_empty());
    }

    #[tokio::test]
    async fn test_concurrent_duplicate_emails_get_distinct_ids() {
        let store = MemoryLeadStore::default();

        let (a, b) = tokio::join!(
            save_pre_launch_email(&store, "dup@example.com", None),
            save_pre_launch_email(&store, "dup@example.com", None),
        );

        let id_of = |r: &SaveResult| match r {
            SaveResult::Saved { id, .. } => id.clone(),
            SaveResult::Failed { .. } => panic!("expected success"),
        };

        assert_ne!(id_of(&a), id_of(&b), "no dedup: ids must be distinct");
        assert_eq!(store.inserted().len(), 2);
    }

    #[test]
    fn test_fallback_when_store_message_is_empty() {
        assert_eq!(non_empty_or_fallback(String::new()), STORAGE_FALLBACK_ERROR);
        assert_eq!(non_empty_or_fallback("  ".to_string()), STORAGE_FALLBACK_ERROR);
        assert_eq!(non_empty_or_fallback("boom".to_string()), "boom");
    }

    #[test]
    fn test_save_result_json_shapes() {
        let saved = SaveResult::saved(LeadId::new(Uuid::nil()));
        let json = serde_json::to_value(&saved).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["id"], Uuid::nil().to_string());
        assert_eq!(json["message"], SAVED_MESSAGE);

        let failed = SaveResult::failed("nope");
        let json = serde_json::to_value(&failed).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "nope");
        assert!(json.get("id").is_none());
    }
}
