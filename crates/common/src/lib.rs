//! Common utilities and shared types for account-rs.
//!
//! This crate provides foundational components used across all account-rs crates:
//!
//! - **Configuration**: Application settings via [`Config`]
//! - **Error handling**: Unified error types via [`AppError`] and [`AppResult`]
//!
//! # Example
//!
//! ```no_run
//! use account_common::{Config, AppResult};
//!
//! fn example() -> AppResult<()> {
//!     let config = Config::load()?;
//!     println!("lock therapist flag: {}", config.form.readonly_locks_therapist);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;

pub use config::{Config, FormConfig, SavedFlagPolicy};
pub use error::{AppError, AppResult};
