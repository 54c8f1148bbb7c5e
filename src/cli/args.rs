use crate::io::InputPaths;
use crate::strategy::RunConfig;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Import cinema data and export top movies and top customers
#[derive(Parser, Debug)]
#[command(name = "cinema-processor")]
#[command(
    about = "Import cinema data and export top movies and top customers",
    long_about = None
)]
pub struct CliArgs {
    /// Movies JSON document
    #[arg(long = "movies", value_name = "FILE")]
    pub movies: Option<PathBuf>,

    /// Halls-seats JSON document
    #[arg(long = "halls", value_name = "FILE")]
    pub halls: Option<PathBuf>,

    /// Projections XML document
    #[arg(long = "projections", value_name = "FILE")]
    pub projections: Option<PathBuf>,

    /// Customers-tickets XML document
    #[arg(long = "customers", value_name = "FILE")]
    pub customers: Option<PathBuf>,

    /// Export top movies rated at least RATING (JSON)
    #[arg(long = "top-movies-rating", value_name = "RATING")]
    pub top_movies_rating: Option<f64>,

    /// Export top customers aged at least AGE (XML)
    #[arg(long = "top-customers-age", value_name = "AGE")]
    pub top_customers_age: Option<u32>,

    /// Document loading strategy to use
    #[arg(
        long = "strategy",
        value_name = "STRATEGY",
        default_value = "sync",
        help = "Loading strategy: 'sync' for sequential or 'async' for concurrent reads"
    )]
    pub strategy: StrategyType,

    /// Increase diagnostic verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Available document loading strategies
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum StrategyType {
    Sync,
    Async,
}

impl CliArgs {
    /// Build the run configuration from the parsed arguments
    pub fn to_run_config(&self) -> RunConfig {
        RunConfig {
            inputs: InputPaths {
                movies: self.movies.clone(),
                halls: self.halls.clone(),
                projections: self.projections.clone(),
                customers: self.customers.clone(),
            },
            top_movies_rating: self.top_movies_rating,
            top_customers_age: self.top_customers_age,
        }
    }
}
