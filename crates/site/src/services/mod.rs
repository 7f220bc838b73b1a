//! Business logic services for the site.

pub mod prelaunch;

pub use prelaunch::{SaveResult, save_pre_launch_email};
