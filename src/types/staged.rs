//! Staged entities awaiting a commit
//!
//! The import pipeline builds these from accepted records. They carry no
//! identifiers; the store assigns those when the batch is committed.

use super::entity::{hall_status, Genre, HallId, MovieId, ProjectionId, Seat};
use chrono::{NaiveDateTime, TimeDelta};
use rust_decimal::Decimal;

#[derive(Debug, Clone, PartialEq)]
pub struct NewMovie {
    pub title: String,
    pub genre: Genre,
    pub duration: TimeDelta,
    pub rating: f64,
    pub director: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewHall {
    pub name: String,
    pub is_4dx: bool,
    pub is_3d: bool,
    pub seats: Vec<Seat>,
}

impl NewHall {
    /// Screen type label, same derivation as a persisted hall
    pub fn status(&self) -> &'static str {
        hall_status(self.is_3d, self.is_4dx)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewProjection {
    pub movie_id: MovieId,
    pub hall_id: HallId,
    pub date_time: NaiveDateTime,
}

/// A staged customer together with the tickets that passed validation
#[derive(Debug, Clone, PartialEq)]
pub struct NewCustomer {
    pub first_name: String,
    pub last_name: String,
    pub age: u32,
    pub balance: Decimal,
    pub tickets: Vec<NewTicket>,
}

/// A staged ticket; its customer is the `NewCustomer` that owns it
#[derive(Debug, Clone, PartialEq)]
pub struct NewTicket {
    pub projection_id: ProjectionId,
    pub price: Decimal,
}

/// Any entity that can be handed to the store for the next commit
#[derive(Debug, Clone, PartialEq)]
pub enum StagedEntity {
    Movie(NewMovie),
    Hall(NewHall),
    Projection(NewProjection),
    Customer(NewCustomer),
}

impl From<NewMovie> for StagedEntity {
    fn from(movie: NewMovie) -> Self {
        StagedEntity::Movie(movie)
    }
}

impl From<NewHall> for StagedEntity {
    fn from(hall: NewHall) -> Self {
        StagedEntity::Hall(hall)
    }
}

impl From<NewProjection> for StagedEntity {
    fn from(projection: NewProjection) -> Self {
        StagedEntity::Projection(projection)
    }
}

impl From<NewCustomer> for StagedEntity {
    fn from(customer: NewCustomer) -> Self {
        StagedEntity::Customer(customer)
    }
}
