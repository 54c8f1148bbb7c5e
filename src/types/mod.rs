//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `entity`: Persisted entities and their identifiers
//! - `staged`: Entities built by an import, waiting for the commit
//! - `record`: Raw input records as produced by the document parsers
//! - `error`: Error types for the cinema data processor

pub mod entity;
pub mod error;
pub mod record;
pub mod staged;

pub use entity::{
    hall_status, Customer, CustomerId, Genre, Hall, HallId, Movie, MovieId, Projection,
    ProjectionId, Seat, Ticket, TicketId,
};
pub use error::CinemaError;
pub use record::{
    CustomerRecord, HallRecord, MovieRecord, ProjectionRecord, TicketList, TicketRecord,
};
pub use staged::{NewCustomer, NewHall, NewMovie, NewProjection, NewTicket, StagedEntity};
