//! Lead repository for database operations.
//!
//! The store is behind the [`LeadStore`] trait so the lead-capture service
//! can be tested against an in-memory double without a live database.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use solara_core::{Email, Lead, LeadId, NewLead};

use super::RepositoryError;

/// Durable store for captured leads.
///
/// Implementations append one record per call and return the stored row
/// with its database-assigned id and timestamp. There are no update or
/// delete operations: leads are immutable once written.
#[async_trait]
pub trait LeadStore: Send + Sync {
    /// Append a lead record and return it as stored.
    ///
    /// Duplicate emails are allowed; each call creates an independent
    /// record with a fresh id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the write fails.
    async fn insert(&self, lead: &NewLead) -> Result<Lead, RepositoryError>;
}

/// Raw row shape for `pre_launch_lead`.
#[derive(sqlx::FromRow)]
struct LeadRow {
    id: Uuid,
    email: String,
    city: Option<String>,
    created_at: DateTime<Utc>,
}

impl TryFrom<LeadRow> for Lead {
    type Error = RepositoryError;

    fn try_from(row: LeadRow) -> Result<Self, Self::Error> {
        let email = Email::parse(&row.email).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid email in database: {e}"))
        })?;

        Ok(Self {
            id: LeadId::new(row.id),
            email,
            city: row.city,
            recorded_at: row.created_at,
        })
    }
}

/// `PostgreSQL`-backed lead store.
pub struct PgLeadStore {
    pool: PgPool,
}

impl PgLeadStore {
    /// Create a new lead store over a connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LeadStore for PgLeadStore {
    async fn insert(&self, lead: &NewLead) -> Result<Lead, RepositoryError> {
        // id and created_at are assigned by the database, never by us
        let row: LeadRow = sqlx::query_as(
            r"
            INSERT INTO pre_launch_lead (email, city)
            VALUES ($1, $2)
            RETURNING id, email, city, created_at
            ",
        )
        .bind(lead.email.as_str())
        .bind(lead.city.as_deref())
        .fetch_one(&self.pool)
        .await?;

        row.try_into()
    }
}
