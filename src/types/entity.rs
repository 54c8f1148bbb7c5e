//! Persisted cinema entities
//!
//! This module defines the entities owned by the storage collaborator. They
//! only exist once a staged batch has been committed, which is when their
//! identifiers are assigned.

use chrono::{NaiveDateTime, TimeDelta};
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

/// Movie identifier
pub type MovieId = u32;

/// Hall identifier
pub type HallId = u32;

/// Projection identifier
pub type ProjectionId = u32;

/// Customer identifier
pub type CustomerId = u32;

/// Ticket identifier
pub type TicketId = u32;

/// Movie genres accepted on import
///
/// Parsing is exact and case-sensitive: `"Action"` is a genre, `"action"` is not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Genre {
    Action,
    Drama,
    Comedy,
    Crime,
    Western,
    Romance,
    Documentary,
    Children,
    Animation,
    Musical,
}

impl Genre {
    /// Every genre, in declaration order
    pub const ALL: [Genre; 10] = [
        Genre::Action,
        Genre::Drama,
        Genre::Comedy,
        Genre::Crime,
        Genre::Western,
        Genre::Romance,
        Genre::Documentary,
        Genre::Children,
        Genre::Animation,
        Genre::Musical,
    ];

    /// The canonical name of the genre
    pub fn as_str(&self) -> &'static str {
        match self {
            Genre::Action => "Action",
            Genre::Drama => "Drama",
            Genre::Comedy => "Comedy",
            Genre::Crime => "Crime",
            Genre::Western => "Western",
            Genre::Romance => "Romance",
            Genre::Documentary => "Documentary",
            Genre::Children => "Children",
            Genre::Animation => "Animation",
            Genre::Musical => "Musical",
        }
    }
}

impl FromStr for Genre {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Genre::ALL
            .into_iter()
            .find(|genre| genre.as_str() == s)
            .ok_or_else(|| format!("Unknown genre '{}'", s))
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A persisted movie
#[derive(Debug, Clone, PartialEq)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    pub genre: Genre,
    /// Running time
    pub duration: TimeDelta,
    /// Rating in the 1-10 range
    pub rating: f64,
    pub director: String,
}

/// A seat placeholder
///
/// Seats carry no attributes; a hall only needs to know how many it owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Seat;

/// A persisted hall with its seats
#[derive(Debug, Clone, PartialEq)]
pub struct Hall {
    pub id: HallId,
    pub name: String,
    pub is_4dx: bool,
    pub is_3d: bool,
    pub seats: Vec<Seat>,
}

impl Hall {
    /// Screen type label used in import reports
    pub fn status(&self) -> &'static str {
        hall_status(self.is_3d, self.is_4dx)
    }
}

/// Derive the screen type label from the hall flags
///
/// 4DX takes precedence in the label order: both flags give `"4DX/3D"`.
pub fn hall_status(is_3d: bool, is_4dx: bool) -> &'static str {
    match (is_3d, is_4dx) {
        (true, true) => "4DX/3D",
        (false, true) => "4DX",
        (true, false) => "3D",
        (false, false) => "Normal",
    }
}

/// A scheduled showing of a movie in a hall
#[derive(Debug, Clone, PartialEq)]
pub struct Projection {
    pub id: ProjectionId,
    pub movie_id: MovieId,
    pub hall_id: HallId,
    pub date_time: NaiveDateTime,
}

/// A persisted customer
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    pub id: CustomerId,
    pub first_name: String,
    pub last_name: String,
    pub age: u32,
    pub balance: Decimal,
}

/// A ticket bought by a customer for a projection
#[derive(Debug, Clone, PartialEq)]
pub struct Ticket {
    pub id: TicketId,
    pub price: Decimal,
    pub customer_id: CustomerId,
    pub projection_id: ProjectionId,
}
