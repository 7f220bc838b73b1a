//! Lead model: a captured prospective-user email record.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{Email, LeadId};

/// A lead as it exists in the database.
///
/// Leads are append-only: once written they are never updated or deleted by
/// this system. The `id` and `recorded_at` fields are assigned by the
/// storage layer, not by callers.
#[derive(Debug, Clone, Serialize)]
pub struct Lead {
    /// Store-assigned opaque identifier.
    pub id: LeadId,
    /// Normalized (trimmed, lower-cased) email address.
    pub email: Email,
    /// Optional locality hint from the request's geo headers. Stored as SQL
    /// NULL when absent, never omitted.
    pub city: Option<String>,
    /// Timestamp assigned by the database at write time.
    pub recorded_at: DateTime<Utc>,
}

/// Input for inserting a lead. Everything the caller is allowed to supply.
#[derive(Debug, Clone)]
pub struct NewLead {
    /// Normalized email address. Validation happens in [`Email::parse`], so
    /// holding an `Email` here guarantees no malformed address reaches the
    /// store.
    pub email: Email,
    /// Optional locality hint, stored as-is.
    pub city: Option<String>,
}
