//! Processing strategy module
//!
//! This module defines the Strategy pattern for complete processing runs: loading
//! the input documents, importing them into a store, and exporting the requested
//! queries. Different loading implementations (synchronous, asynchronous) can be
//! selected at runtime; both feed the same import/export pipeline so the output
//! of a run does not depend on the strategy.

use crate::cli::StrategyType;
use crate::core::{
    export_top_customers, export_top_movies, import_customer_tickets, import_hall_seats,
    import_movies, import_projections, CinemaStore, InMemoryStore,
};
use crate::io::{InputDocuments, InputPaths};
use crate::types::CinemaError;
use std::io::Write;
use tracing::info;

pub mod r#async;
pub mod sync;

pub use self::r#async::AsyncProcessingStrategy;
pub use sync::SyncProcessingStrategy;

/// Everything a processing run needs to know
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunConfig {
    /// Input documents to import
    pub inputs: InputPaths,
    /// Minimum rating for the top movies export, if requested
    pub top_movies_rating: Option<f64>,
    /// Minimum age for the top customers export, if requested
    pub top_customers_age: Option<u32>,
}

/// Processing strategy trait for complete runs
pub trait ProcessingStrategy: Send + Sync {
    /// Load the configured documents, import them, run the requested exports
    /// and write everything to `output`
    ///
    /// Import reports come first, in import order (movies, halls, projections,
    /// customers), followed by the top movies JSON and the top customers XML.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - An input file cannot be read
    /// - A document is malformed
    /// - A commit fails
    /// - Output cannot be written
    ///
    /// Individual invalid records never fail the run; they are reported as
    /// `Invalid data!` lines.
    fn process(&self, config: &RunConfig, output: &mut dyn Write) -> Result<(), CinemaError>;
}

/// Create a processing strategy based on the specified strategy type
pub fn create_strategy(strategy_type: StrategyType) -> Box<dyn ProcessingStrategy> {
    match strategy_type {
        StrategyType::Sync => Box::new(SyncProcessingStrategy),
        StrategyType::Async => Box::new(AsyncProcessingStrategy),
    }
}

fn write_section(output: &mut dyn Write, content: &str) -> Result<(), CinemaError> {
    if content.is_empty() {
        return Ok(());
    }
    writeln!(output, "{}", content)?;
    Ok(())
}

/// Run the import and export pipeline over already-loaded documents
///
/// Shared by every strategy; the store is created fresh for each run.
pub(crate) fn run_pipeline(
    documents: &InputDocuments,
    config: &RunConfig,
    output: &mut dyn Write,
) -> Result<InMemoryStore, CinemaError> {
    let mut store = InMemoryStore::new();

    if let Some(document) = &documents.movies {
        write_section(output, &import_movies(&mut store, document)?)?;
    }
    if let Some(document) = &documents.halls {
        write_section(output, &import_hall_seats(&mut store, document)?)?;
    }
    if let Some(document) = &documents.projections {
        write_section(output, &import_projections(&mut store, document)?)?;
    }
    if let Some(document) = &documents.customers {
        write_section(output, &import_customer_tickets(&mut store, document)?)?;
    }

    if let Some(rating) = config.top_movies_rating {
        write_section(output, &export_top_movies(&store, rating)?)?;
    }
    if let Some(age) = config.top_customers_age {
        write_section(output, &export_top_customers(&store, age)?)?;
    }

    output.flush()?;

    info!(
        movies = store.movies().len(),
        halls = store.halls().len(),
        projections = store.projections().len(),
        customers = store.customers().len(),
        tickets = store.tickets().len(),
        "run complete"
    );

    Ok(store)
}
