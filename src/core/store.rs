//! In-memory entity store
//!
//! This module provides `InMemoryStore`, the storage collaborator used by the
//! CLI and the tests. It behaves like a small relational store:
//! - Identifiers are assigned on commit, sequentially per kind, starting at 1
//! - Staged entities are invisible to queries until committed
//! - A commit is all-or-nothing and checks every foreign reference

use crate::core::traits::CinemaStore;
use crate::types::{
    CinemaError, Customer, Hall, Movie, Projection, StagedEntity, Ticket,
};
use tracing::{debug, warn};

/// In-memory cinema store
///
/// Holds committed entities in identifier order plus the pending batch.
#[derive(Debug, Default, Clone)]
pub struct InMemoryStore {
    movies: Vec<Movie>,
    halls: Vec<Hall>,
    projections: Vec<Projection>,
    customers: Vec<Customer>,
    tickets: Vec<Ticket>,
    /// Entities staged since the last commit, in staging order
    pending: Vec<StagedEntity>,
}

/// Entities materialised from one pending batch, before they are merged
#[derive(Debug, Default)]
struct Batch {
    movies: Vec<Movie>,
    halls: Vec<Hall>,
    projections: Vec<Projection>,
    customers: Vec<Customer>,
    tickets: Vec<Ticket>,
}

impl Batch {
    fn len(&self) -> usize {
        self.movies.len()
            + self.halls.len()
            + self.projections.len()
            + self.customers.len()
            + self.tickets.len()
    }
}

/// Identifier of the next entity appended after `existing` entities
fn next_id(existing: usize) -> u32 {
    existing as u32 + 1
}

impl InMemoryStore {
    /// Create a new store with no entities
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Turn the pending entities into persisted ones without touching `self`
    ///
    /// References are checked against committed entities and against the
    /// entities materialised earlier in the same batch.
    fn materialise(&self, staged: Vec<StagedEntity>) -> Result<Batch, CinemaError> {
        let mut batch = Batch::default();

        for entity in staged {
            match entity {
                StagedEntity::Movie(movie) => {
                    let id = next_id(self.movies.len() + batch.movies.len());
                    batch.movies.push(Movie {
                        id,
                        title: movie.title,
                        genre: movie.genre,
                        duration: movie.duration,
                        rating: movie.rating,
                        director: movie.director,
                    });
                }
                StagedEntity::Hall(hall) => {
                    let id = next_id(self.halls.len() + batch.halls.len());
                    batch.halls.push(Hall {
                        id,
                        name: hall.name,
                        is_4dx: hall.is_4dx,
                        is_3d: hall.is_3d,
                        seats: hall.seats,
                    });
                }
                StagedEntity::Projection(projection) => {
                    let movie_known = self.find_movie(projection.movie_id).is_some()
                        || batch.movies.iter().any(|m| m.id == projection.movie_id);
                    if !movie_known {
                        return Err(CinemaError::commit_failed(
                            "Projection",
                            "Movie",
                            projection.movie_id,
                        ));
                    }

                    let hall_known = self.find_hall(projection.hall_id).is_some()
                        || batch.halls.iter().any(|h| h.id == projection.hall_id);
                    if !hall_known {
                        return Err(CinemaError::commit_failed(
                            "Projection",
                            "Hall",
                            projection.hall_id,
                        ));
                    }

                    let id = next_id(self.projections.len() + batch.projections.len());
                    batch.projections.push(Projection {
                        id,
                        movie_id: projection.movie_id,
                        hall_id: projection.hall_id,
                        date_time: projection.date_time,
                    });
                }
                StagedEntity::Customer(customer) => {
                    let customer_id = next_id(self.customers.len() + batch.customers.len());

                    for ticket in customer.tickets {
                        let projection_known = self.find_projection(ticket.projection_id).is_some()
                            || batch
                                .projections
                                .iter()
                                .any(|p| p.id == ticket.projection_id);
                        if !projection_known {
                            return Err(CinemaError::commit_failed(
                                "Ticket",
                                "Projection",
                                ticket.projection_id,
                            ));
                        }

                        let id = next_id(self.tickets.len() + batch.tickets.len());
                        batch.tickets.push(Ticket {
                            id,
                            price: ticket.price,
                            customer_id,
                            projection_id: ticket.projection_id,
                        });
                    }

                    batch.customers.push(Customer {
                        id: customer_id,
                        first_name: customer.first_name,
                        last_name: customer.last_name,
                        age: customer.age,
                        balance: customer.balance,
                    });
                }
            }
        }

        Ok(batch)
    }
}

impl CinemaStore for InMemoryStore {
    fn movies(&self) -> &[Movie] {
        &self.movies
    }

    fn halls(&self) -> &[Hall] {
        &self.halls
    }

    fn projections(&self) -> &[Projection] {
        &self.projections
    }

    fn customers(&self) -> &[Customer] {
        &self.customers
    }

    fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    fn add(&mut self, entity: StagedEntity) {
        self.pending.push(entity);
    }

    fn commit(&mut self) -> Result<usize, CinemaError> {
        let staged = std::mem::take(&mut self.pending);
        let staged_len = staged.len();

        let batch = self.materialise(staged).inspect_err(|e| {
            warn!(staged = staged_len, error = %e, "discarding staged batch");
        })?;
        let written = batch.len();

        self.movies.extend(batch.movies);
        self.halls.extend(batch.halls);
        self.projections.extend(batch.projections);
        self.customers.extend(batch.customers);
        self.tickets.extend(batch.tickets);

        debug!(staged = staged_len, written, "committed staged batch");
        Ok(written)
    }

    // Identifiers are dense and start at 1, so lookups can index directly.

    fn find_movie(&self, id: u32) -> Option<&Movie> {
        index_of(id).and_then(|i| self.movies.get(i))
    }

    fn find_hall(&self, id: u32) -> Option<&Hall> {
        index_of(id).and_then(|i| self.halls.get(i))
    }

    fn find_projection(&self, id: u32) -> Option<&Projection> {
        index_of(id).and_then(|i| self.projections.get(i))
    }

    fn find_customer(&self, id: u32) -> Option<&Customer> {
        index_of(id).and_then(|i| self.customers.get(i))
    }
}

fn index_of(id: u32) -> Option<usize> {
    (id as usize).checked_sub(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Genre, NewCustomer, NewHall, NewMovie, NewProjection, NewTicket, Seat};
    use chrono::{NaiveDate, TimeDelta};
    use rust_decimal::Decimal;

    fn movie(title: &str) -> StagedEntity {
        NewMovie {
            title: title.to_string(),
            genre: Genre::Drama,
            duration: TimeDelta::minutes(90),
            rating: 7.0,
            director: "Someone".to_string(),
        }
        .into()
    }

    fn hall(name: &str) -> StagedEntity {
        NewHall {
            name: name.to_string(),
            is_4dx: false,
            is_3d: false,
            seats: vec![Seat; 10],
        }
        .into()
    }

    fn projection(movie_id: u32, hall_id: u32) -> StagedEntity {
        NewProjection {
            movie_id,
            hall_id,
            date_time: NaiveDate::from_ymd_opt(2019, 4, 27)
                .unwrap()
                .and_hms_opt(13, 33, 20)
                .unwrap(),
        }
        .into()
    }

    fn customer(projection_ids: &[u32]) -> StagedEntity {
        NewCustomer {
            first_name: "Randi".to_string(),
            last_name: "Ferraraccio".to_string(),
            age: 20,
            balance: Decimal::new(5944, 2),
            tickets: projection_ids
                .iter()
                .map(|&projection_id| NewTicket {
                    projection_id,
                    price: Decimal::new(700, 2),
                })
                .collect(),
        }
        .into()
    }

    #[test]
    fn test_new_store_is_empty() {
        let store = InMemoryStore::new();
        assert!(store.movies().is_empty());
        assert!(store.tickets().is_empty());
        assert_eq!(store.pending_len(), 0);
    }

    #[test]
    fn test_staged_entities_are_invisible_until_commit() {
        let mut store = InMemoryStore::new();
        store.add(movie("Heat"));

        assert!(store.movies().is_empty());
        assert_eq!(store.pending_len(), 1);

        assert_eq!(store.commit().unwrap(), 1);
        assert_eq!(store.movies().len(), 1);
        assert_eq!(store.pending_len(), 0);
    }

    #[test]
    fn test_commit_assigns_sequential_ids_across_batches() {
        let mut store = InMemoryStore::new();
        store.add_range([movie("Heat"), movie("Alien")]);
        store.commit().unwrap();
        store.add(movie("Jaws"));
        store.commit().unwrap();

        let ids: Vec<u32> = store.movies().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(store.find_movie(3).unwrap().title, "Jaws");
        assert!(store.find_movie(0).is_none());
        assert!(store.find_movie(4).is_none());
    }

    #[test]
    fn test_commit_attaches_tickets_to_customer() {
        let mut store = InMemoryStore::new();
        store.add_range([movie("Heat"), hall("Main Hall"), projection(1, 1)]);
        store.commit().unwrap();

        store.add_range([customer(&[1, 1]), customer(&[1])]);
        assert_eq!(store.commit().unwrap(), 5);

        assert_eq!(store.tickets_of_customer(1).count(), 2);
        assert_eq!(store.tickets_of_customer(2).count(), 1);
        assert_eq!(store.tickets_of_projection(1).count(), 3);
        assert_eq!(store.projections_of_movie(1).count(), 1);
    }

    #[test]
    fn test_references_may_point_into_the_same_batch() {
        let mut store = InMemoryStore::new();
        store.add_range([
            movie("Heat"),
            hall("Main Hall"),
            projection(1, 1),
            customer(&[1]),
        ]);

        assert_eq!(store.commit().unwrap(), 5);
    }

    #[test]
    fn test_dangling_projection_discards_whole_batch() {
        let mut store = InMemoryStore::new();
        store.add_range([movie("Heat"), hall("Main Hall")]);
        store.commit().unwrap();

        store.add_range([projection(1, 1), projection(9, 1)]);
        let result = store.commit();

        assert_eq!(
            result,
            Err(CinemaError::commit_failed("Projection", "Movie", 9))
        );
        assert!(store.projections().is_empty());
        assert_eq!(store.pending_len(), 0);
    }

    #[test]
    fn test_dangling_ticket_discards_whole_batch() {
        let mut store = InMemoryStore::new();
        store.add_range([movie("Heat"), hall("Main Hall"), projection(1, 1)]);
        store.commit().unwrap();

        store.add_range([customer(&[1]), customer(&[5])]);
        let result = store.commit();

        assert_eq!(
            result,
            Err(CinemaError::commit_failed("Ticket", "Projection", 5))
        );
        assert!(store.customers().is_empty());
        assert!(store.tickets().is_empty());
    }

    #[test]
    fn test_empty_commit_writes_nothing() {
        let mut store = InMemoryStore::new();
        assert_eq!(store.commit().unwrap(), 0);
    }
}
