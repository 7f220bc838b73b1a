//! Shared test doubles.
//!
//! Only compiled for tests; keeps the in-memory lead store in one place so
//! service and route tests exercise the same double.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use solara_core::{Lead, LeadId, NewLead};

use crate::db::{LeadStore, RepositoryError};

/// In-memory stand-in for the database, recording every insert.
#[derive(Default)]
pub struct MemoryLeadStore {
    leads: Mutex<Vec<NewLead>>,
    fail_with: Option<String>,
}

impl MemoryLeadStore {
    /// A store whose every insert fails with the given message.
    #[must_use]
    pub fn failing(message: &str) -> Self {
        Self {
            leads: Mutex::new(Vec::new()),
            fail_with: Some(message.to_string()),
        }
    }

    /// Snapshot of everything inserted so far.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn inserted(&self) -> Vec<NewLead> {
        self.leads.lock().expect("lock poisoned").clone()
    }
}

#[async_trait]
impl LeadStore for MemoryLeadStore {
    async fn insert(&self, lead: &NewLead) -> Result<Lead, RepositoryError> {
        if let Some(message) = &self.fail_with {
            return Err(RepositoryError::DataCorruption(message.clone()));
        }

        self.leads.lock().expect("lock poisoned").push(lead.clone());

        Ok(Lead {
            id: LeadId::new(Uuid::new_v4()),
            email: lead.email.clone(),
            city: lead.city.clone(),
            recorded_at: Utc::now(),
        })
    }
}
