//! Core types for the Solara pre-launch site.
//!
//! This module provides type-safe wrappers for the domain concepts around
//! lead capture.

pub mod email;
pub mod id;
pub mod lead;

pub use email::{Email, EmailError};
pub use id::LeadId;
pub use lead::{Lead, NewLead};
