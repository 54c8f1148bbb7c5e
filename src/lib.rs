//! Cinema Data Processor Library
//! # Overview
//!
//! This library imports cinema data from JSON and XML documents into a store,
//! reporting one line per record, and exports two queries over the stored data.
//! Document loading comes in a sync and an async strategy.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Entities, staged entities, input records and errors
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - Business logic components:
//!   - [`core::validator`] - Declarative field constraints
//!   - [`core::resolver`] - Cross-reference resolution against the store
//!   - [`core::importer`] - Import pipelines for the four record kinds
//!   - [`core::exporter`] - Top movies and top customers queries
//!   - [`core::store`] - In-memory storage with atomic batch commits
//! - [`io`] - Document formats and file loading
//! - [`strategy`] - Complete processing runs (sync, async)
//! - [`logging`] - Diagnostic output setup
//!
//! # Import Kinds
//!
//! - **Movies** (JSON): title, genre, duration, rating, director
//! - **Halls** (JSON): name, 4DX and 3D flags, seat count
//! - **Projections** (XML): movie, hall and screening time
//! - **Customers** (XML): personal data plus the tickets they bought
//!
//! Each record either produces a success line or `Invalid data!`; accepted
//! records of one call are committed together.
//!
//! # Exports
//!
//! - **Top movies** (JSON): rated movies that sold tickets, with revenue and ticket holders
//! - **Top customers** (XML): customers over an age ranked by spend, with viewing time

pub mod cli;
pub mod core;
pub mod io;
pub mod logging;
pub mod strategy;
pub mod types;

pub use core::{
    export_top_customers, export_top_movies, import_customer_tickets, import_hall_seats,
    import_movies, import_projections, CinemaStore, InMemoryStore,
};
pub use types::{
    CinemaError, Customer, Genre, Hall, Movie, Projection, StagedEntity, Ticket,
};
