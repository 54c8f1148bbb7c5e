//! Storage collaborator interface
//!
//! The import and export pipelines never care how entities are stored. They
//! only need to query what is persisted, stage new entities, and commit the
//! staged batch in one step. This trait is that seam.

use crate::types::{
    CinemaError, Customer, CustomerId, Hall, HallId, Movie, MovieId, Projection, ProjectionId,
    StagedEntity, Ticket,
};

/// Trait for a cinema entity store
///
/// Query methods only ever see committed entities. Staged entities become
/// visible, with identifiers, after a successful `commit`.
pub trait CinemaStore {
    /// All persisted movies, in identifier order
    fn movies(&self) -> &[Movie];

    /// All persisted halls, in identifier order
    fn halls(&self) -> &[Hall];

    /// All persisted projections, in identifier order
    fn projections(&self) -> &[Projection];

    /// All persisted customers, in identifier order
    fn customers(&self) -> &[Customer];

    /// All persisted tickets, in identifier order
    fn tickets(&self) -> &[Ticket];

    /// Stage one entity for the next commit
    fn add(&mut self, entity: StagedEntity);

    /// Stage a collection of entities for the next commit, keeping their order
    fn add_range<I>(&mut self, entities: I)
    where
        I: IntoIterator<Item = StagedEntity>,
        Self: Sized,
    {
        for entity in entities {
            self.add(entity);
        }
    }

    /// Persist everything staged since the last commit
    ///
    /// Either every staged entity is persisted or none is. Returns the number
    /// of entities written (tickets included).
    ///
    /// # Errors
    ///
    /// Returns `CinemaError::CommitFailed` if a staged entity references an
    /// entity that neither exists nor is staged ahead of it. The staged batch
    /// is discarded in that case.
    fn commit(&mut self) -> Result<usize, CinemaError>;

    fn find_movie(&self, id: MovieId) -> Option<&Movie> {
        self.movies().iter().find(|movie| movie.id == id)
    }

    fn find_hall(&self, id: HallId) -> Option<&Hall> {
        self.halls().iter().find(|hall| hall.id == id)
    }

    fn find_projection(&self, id: ProjectionId) -> Option<&Projection> {
        self.projections()
            .iter()
            .find(|projection| projection.id == id)
    }

    fn find_customer(&self, id: CustomerId) -> Option<&Customer> {
        self.customers().iter().find(|customer| customer.id == id)
    }

    /// Projections showing the given movie
    fn projections_of_movie(&self, movie_id: MovieId) -> impl Iterator<Item = &Projection> {
        self.projections()
            .iter()
            .filter(move |projection| projection.movie_id == movie_id)
    }

    /// Tickets sold for the given projection
    fn tickets_of_projection(&self, projection_id: ProjectionId) -> impl Iterator<Item = &Ticket> {
        self.tickets()
            .iter()
            .filter(move |ticket| ticket.projection_id == projection_id)
    }

    /// Tickets bought by the given customer
    fn tickets_of_customer(&self, customer_id: CustomerId) -> impl Iterator<Item = &Ticket> {
        self.tickets()
            .iter()
            .filter(move |ticket| ticket.customer_id == customer_id)
    }
}
