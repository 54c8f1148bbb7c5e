//! Input document loading
//!
//! Reads the four input documents from disk. Every document is optional: a run
//! may import only movies, or only customers into a store seeded elsewhere.
//!
//! Two flavours are provided:
//! - `load_documents` reads the files one after another with `std::fs`
//! - `load_documents_async` reads them concurrently with `tokio::fs`
//!
//! Both return the documents as strings; parsing happens in the pipelines.

use crate::types::CinemaError;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Paths of the input documents of one run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputPaths {
    /// Movies JSON document
    pub movies: Option<PathBuf>,
    /// Halls-seats JSON document
    pub halls: Option<PathBuf>,
    /// Projections XML document
    pub projections: Option<PathBuf>,
    /// Customers-tickets XML document
    pub customers: Option<PathBuf>,
}

/// Contents of the input documents of one run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputDocuments {
    pub movies: Option<String>,
    pub halls: Option<String>,
    pub projections: Option<String>,
    pub customers: Option<String>,
}

fn map_read_error(path: &Path, error: std::io::Error) -> CinemaError {
    if error.kind() == std::io::ErrorKind::NotFound {
        CinemaError::file_not_found(&path.display().to_string())
    } else {
        CinemaError::Io {
            message: format!("Failed to read '{}': {}", path.display(), error),
        }
    }
}

/// Read one document synchronously
///
/// # Errors
///
/// Returns `CinemaError::FileNotFound` if the file does not exist, or
/// `CinemaError::Io` for any other read failure.
pub fn read_document(path: &Path) -> Result<String, CinemaError> {
    let content = std::fs::read_to_string(path).map_err(|e| map_read_error(path, e))?;
    debug!(path = %path.display(), bytes = content.len(), "read input document");
    Ok(content)
}

/// Read one document with tokio
///
/// # Errors
///
/// Same as `read_document`.
pub async fn read_document_async(path: &Path) -> Result<String, CinemaError> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| map_read_error(path, e))?;
    debug!(path = %path.display(), bytes = content.len(), "read input document");
    Ok(content)
}

fn read_optional(path: Option<&PathBuf>) -> Result<Option<String>, CinemaError> {
    path.map(|p| read_document(p)).transpose()
}

async fn read_optional_async(path: Option<&PathBuf>) -> Result<Option<String>, CinemaError> {
    match path {
        Some(p) => read_document_async(p).await.map(Some),
        None => Ok(None),
    }
}

/// Read every configured document, one after another
pub fn load_documents(paths: &InputPaths) -> Result<InputDocuments, CinemaError> {
    Ok(InputDocuments {
        movies: read_optional(paths.movies.as_ref())?,
        halls: read_optional(paths.halls.as_ref())?,
        projections: read_optional(paths.projections.as_ref())?,
        customers: read_optional(paths.customers.as_ref())?,
    })
}

/// Read every configured document concurrently
///
/// Fails with the first error encountered; the other reads are dropped.
pub async fn load_documents_async(paths: &InputPaths) -> Result<InputDocuments, CinemaError> {
    let (movies, halls, projections, customers) = tokio::try_join!(
        read_optional_async(paths.movies.as_ref()),
        read_optional_async(paths.halls.as_ref()),
        read_optional_async(paths.projections.as_ref()),
        read_optional_async(paths.customers.as_ref()),
    )?;

    Ok(InputDocuments {
        movies,
        halls,
        projections,
        customers,
    })
}
