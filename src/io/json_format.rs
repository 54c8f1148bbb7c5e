//! JSON document handling
//!
//! This module centralizes the list-of-object formats:
//! - Movies and halls-seats input documents
//! - The top movies export document
//!
//! All functions are pure (no I/O) for easy testing.

use crate::core::exporter::TopMovie;
use crate::types::{CinemaError, HallRecord, MovieRecord};

/// Parse a movies document (a JSON array of movie objects)
///
/// # Errors
///
/// Returns `CinemaError::JsonParse` if the document is not a JSON array of
/// objects with the expected field types. A single bad element fails the
/// whole document.
pub fn parse_movies(document: &str) -> Result<Vec<MovieRecord>, CinemaError> {
    Ok(serde_json::from_str(document)?)
}

/// Parse a halls-seats document (a JSON array of hall objects)
///
/// # Errors
///
/// Returns `CinemaError::JsonParse` on malformed input.
pub fn parse_halls(document: &str) -> Result<Vec<HallRecord>, CinemaError> {
    Ok(serde_json::from_str(document)?)
}

/// Write the top movies export as indented JSON
pub fn write_top_movies(movies: &[TopMovie]) -> Result<String, CinemaError> {
    serde_json::to_string_pretty(movies).map_err(|e| CinemaError::document_write("JSON", e))
}
