//! # Rollcall Reporter
//!
//! The fetch-and-report routine: the single operation this tool performs. It
//! drives any [`StudentStore`], writes one line per record to the output it
//! is handed, and releases the store's connection on every exit path.

use database::StudentStore;
use std::io::Write;

pub mod error;

pub use error::ReporterError;

/// Fetches every student from the store and writes one line per record.
///
/// The sequence is acquire, query, report, release. The release step runs
/// regardless of how the earlier steps went, including when the connection
/// could not be acquired at all. On success the number of records written is
/// returned; on failure the first error is propagated after the release.
pub async fn fetch_and_report<S, W>(store: &S, out: &mut W) -> Result<usize, ReporterError>
where
    S: StudentStore + ?Sized,
    W: Write,
{
    let outcome = connect_and_report(store, out).await;

    // A release failure only surfaces when the run was otherwise clean; when
    // the fetch already failed, the original error is the useful diagnostic.
    match store.disconnect().await {
        Ok(()) => outcome,
        Err(release_err) => match outcome {
            Ok(_) => Err(ReporterError::Store(release_err)),
            Err(original) => {
                tracing::warn!(error = %release_err, "failed to release the store connection");
                Err(original)
            }
        },
    }
}

async fn connect_and_report<S, W>(store: &S, out: &mut W) -> Result<usize, ReporterError>
where
    S: StudentStore + ?Sized,
    W: Write,
{
    store.connect().await?;

    let students = store.fetch_all_students().await?;
    tracing::info!(count = students.len(), "fetched student records");

    let mut written = 0;
    for student in &students {
        writeln!(out, "{student}")?;
        written += 1;
    }

    Ok(written)
}
