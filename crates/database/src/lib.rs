//! # Rollcall Database Crate
//!
//! This crate acts as the application-specific interface to the PostgreSQL
//! database holding the student roster.
//!
//! ## Architectural Principles
//!
//! - **Adapter:** encapsulates all database-specific logic behind the
//!   [`StudentStore`] trait, hiding the SQL and the driver from the report
//!   routine.
//! - **Single connection:** the tool performs exactly one operation per run,
//!   so the repository holds one `PgConnection` rather than a pool, opened by
//!   `connect` and closed exactly once by `disconnect`.
//!
//! ## Public API
//!
//! - `StudentStore`: the abstract store contract (connect, fetch, disconnect).
//! - `DbRepository`: the live Postgres implementation.
//! - `connect_options`: translates the loaded settings into driver options.
//! - `DbError`: the specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod connection;
pub mod error;
pub mod repository;

// Re-export the key components to create a clean, public-facing API.
pub use connection::connect_options;
pub use error::DbError;
pub use repository::{DbRepository, StudentStore};
