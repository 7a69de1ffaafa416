use database::DbError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReporterError {
    #[error("Student store operation failed: {0}")]
    Store(#[from] DbError),

    #[error("Failed to write a record to the output: {0}")]
    Output(#[from] std::io::Error),
}
