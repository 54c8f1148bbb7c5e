//! Cross-reference resolution against persisted entities
//!
//! Records that refer to other entities by identifier (projections refer to a
//! movie and a hall) are resolved here. A reference that does not resolve is
//! not a validation failure, but the pipeline reports both the same way.

use crate::core::traits::CinemaStore;
use crate::types::{Hall, HallId, Movie, MovieId};
use std::fmt;

/// A reference that did not resolve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unresolved {
    /// Kind of the missing entity
    pub kind: &'static str,
    pub id: u32,
}

impl fmt::Display for Unresolved {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} not found", self.kind, self.id)
    }
}

/// Looks referenced entities up in a store
///
/// Only committed entities resolve; entities staged by the running import
/// are not visible.
pub struct RecordResolver<'s, S: CinemaStore> {
    store: &'s S,
}

impl<'s, S: CinemaStore> RecordResolver<'s, S> {
    pub fn new(store: &'s S) -> Self {
        Self { store }
    }

    pub fn movie(&self, id: MovieId) -> Result<&'s Movie, Unresolved> {
        self.store
            .find_movie(id)
            .ok_or(Unresolved { kind: "Movie", id })
    }

    pub fn hall(&self, id: HallId) -> Result<&'s Hall, Unresolved> {
        self.store
            .find_hall(id)
            .ok_or(Unresolved { kind: "Hall", id })
    }

    /// Resolve both ends of a projection; the movie is checked first
    pub fn movie_and_hall(
        &self,
        movie_id: MovieId,
        hall_id: HallId,
    ) -> Result<(&'s Movie, &'s Hall), Unresolved> {
        Ok((self.movie(movie_id)?, self.hall(hall_id)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::store::InMemoryStore;
    use crate::types::{Genre, NewHall, NewMovie, Seat};
    use chrono::TimeDelta;

    fn store_with_movie_and_hall() -> InMemoryStore {
        let mut store = InMemoryStore::new();
        store.add(
            NewMovie {
                title: "Heat".to_string(),
                genre: Genre::Crime,
                duration: TimeDelta::minutes(170),
                rating: 9.0,
                director: "Michael Mann".to_string(),
            }
            .into(),
        );
        store.add(
            NewHall {
                name: "Main Hall".to_string(),
                is_4dx: false,
                is_3d: true,
                seats: vec![Seat; 5],
            }
            .into(),
        );
        store.commit().unwrap();
        store
    }

    #[test]
    fn test_resolves_existing_references() {
        let store = store_with_movie_and_hall();
        let resolver = RecordResolver::new(&store);

        let (movie, hall) = resolver.movie_and_hall(1, 1).unwrap();
        assert_eq!(movie.title, "Heat");
        assert_eq!(hall.name, "Main Hall");
    }

    #[test]
    fn test_missing_movie_is_reported_first() {
        let store = store_with_movie_and_hall();
        let resolver = RecordResolver::new(&store);

        assert_eq!(
            resolver.movie_and_hall(7, 9),
            Err(Unresolved { kind: "Movie", id: 7 })
        );
        assert_eq!(
            resolver.movie_and_hall(1, 9),
            Err(Unresolved { kind: "Hall", id: 9 })
        );
        assert_eq!(
            Unresolved { kind: "Hall", id: 9 }.to_string(),
            "Hall 9 not found"
        );
    }

    #[test]
    fn test_staged_entities_do_not_resolve() {
        let mut store = InMemoryStore::new();
        store.add(
            NewHall {
                name: "Side Hall".to_string(),
                is_4dx: false,
                is_3d: false,
                seats: vec![Seat; 5],
            }
            .into(),
        );

        let resolver = RecordResolver::new(&store);
        assert!(resolver.hall(1).is_err());
    }
}
