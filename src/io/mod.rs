//! I/O module
//!
//! Handles document parsing, export serialization and file loading.
//!
//! # Components
//!
//! - `json_format` - Movies and halls input, top movies output
//! - `xml_format` - Projections and customers input, top customers output
//! - `loader` - Reads input documents from disk (sync and async)

pub mod json_format;
pub mod loader;
pub mod xml_format;

pub use json_format::{parse_halls, parse_movies, write_top_movies};
pub use loader::{load_documents, load_documents_async, InputDocuments, InputPaths};
pub use xml_format::{parse_customers, parse_projections, write_top_customers};
