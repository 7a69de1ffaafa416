use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("Failed to build connection settings for the database: {0}")]
    ConnectionConfigError(String),

    #[error("Database operation failed: {0}")]
    OperationError(#[from] sqlx::Error),

    #[error("The store is not connected; call connect first.")]
    NotConnected,

    #[error("The store is already connected.")]
    AlreadyConnected,
}
