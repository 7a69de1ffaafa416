//! # Rollcall Configuration
//!
//! This crate owns the typed settings for the tool. All values come from the
//! process environment: either a single `DATABASE_URL`, or the individual
//! `DB_*` connection parameters. The binary loads `.env` before calling in
//! here, so both deployment styles work unchanged.

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use error::ConfigError;
pub use settings::{DatabaseConfig, Settings};

/// Loads the application configuration from the process environment.
///
/// This function is the primary entry point for this crate. It gathers the
/// `DB_*` variables (with defaults for port and sslmode), captures an
/// optional `DATABASE_URL` override, and validates that one of the two forms
/// is complete.
pub fn load_settings() -> Result<Settings, ConfigError> {
    let builder = config::Config::builder()
        // Defaults taken from the upstream deployment: the session pooler
        // listens on 5432 and requires TLS.
        .set_default("port", 5432)?
        .set_default("sslmode", "require")?
        // Tells the builder to read DB_HOST, DB_PORT, DB_NAME, DB_USER,
        // DB_PASSWORD and DB_SSLMODE from the environment.
        .add_source(config::Environment::with_prefix("DB"))
        .build()?;

    // Attempt to deserialize the gathered values into our typed struct.
    let mut database = builder.try_deserialize::<DatabaseConfig>()?;

    // DATABASE_URL lives outside the DB_ prefix; when present it supersedes
    // the individual parameters.
    if let Ok(url) = std::env::var("DATABASE_URL") {
        database.url = Some(url);
    }

    database.validate()?;

    Ok(Settings { database })
}
