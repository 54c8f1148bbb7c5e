//! Core business logic module
//!
//! This module contains the import and export pipelines:
//! - `traits` - Storage collaborator interface
//! - `store` - In-memory storage collaborator
//! - `validator` - Declarative field validation
//! - `resolver` - Cross-reference resolution
//! - `report` - Import report accumulation
//! - `importer` - Import pipeline for the four record kinds
//! - `exporter` - Top movies and top customers queries

pub mod exporter;
pub mod importer;
pub mod report;
pub mod resolver;
pub mod store;
pub mod traits;
pub mod validator;

pub use exporter::{export_top_customers, export_top_movies, TopCustomer, TopMovie};
pub use importer::{import_customer_tickets, import_hall_seats, import_movies, import_projections};
pub use report::ReportAccumulator;
pub use resolver::RecordResolver;
pub use store::InMemoryStore;
pub use traits::CinemaStore;
