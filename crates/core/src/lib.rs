//! Solara Core - Shared types library.
//!
//! This crate provides common types used across the Solara pre-launch
//! workspace:
//! - `site` - Public-facing coming-soon site
//! - `cli` - Command-line tools for migrations
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for emails and lead identifiers, plus the
//!   `Lead` model itself

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
