//! Cinema Data Processor CLI
//!
//! Command-line interface for importing cinema data and exporting reports.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- --movies movies.json --halls halls.json \
//!     --projections projections.xml --customers customers.xml
//! cargo run -- --movies movies.json --top-movies-rating 8
//! cargo run -- --strategy async --customers customers.xml --top-customers-age 20 -v
//! ```
//!
//! Import reports and exports go to stdout, diagnostics to stderr.
//!
//! # Processing Strategies
//!
//! - **sync**: Input documents are read one after another (default)
//! - **async**: Input documents are read concurrently on a tokio runtime
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (file not found, malformed document, failed commit, etc.)

use cinema_data_processor::{cli, logging, strategy};
use std::process;

fn main() {
    let args = cli::parse_args();

    logging::init(args.verbose);

    let strategy = strategy::create_strategy(args.strategy);
    let config = args.to_run_config();

    let mut output = std::io::stdout();
    if let Err(e) = strategy.process(&config, &mut output) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
