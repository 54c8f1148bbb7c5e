//! Asynchronous processing strategy
//!
//! Reads all configured input documents concurrently on a tokio multi-threaded
//! runtime. Once every document is in memory the shared pipeline runs the
//! imports in their fixed order, so references between documents (projections
//! to movies and halls, tickets to projections) resolve exactly as they do
//! with the synchronous strategy.
//!
//! ```text
//! AsyncProcessingStrategy
//!     ├── tokio runtime
//!     │   └── try_join! over the four document reads
//!     └── run_pipeline (movies → halls → projections → customers → exports)
//! ```

use crate::io::load_documents_async;
use crate::strategy::{run_pipeline, ProcessingStrategy, RunConfig};
use crate::types::CinemaError;
use std::io::Write;
use tracing::debug;

/// Asynchronous processing strategy
#[derive(Debug, Clone, Copy, Default)]
pub struct AsyncProcessingStrategy;

impl ProcessingStrategy for AsyncProcessingStrategy {
    fn process(&self, config: &RunConfig, output: &mut dyn Write) -> Result<(), CinemaError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .map_err(|e| CinemaError::runtime(format!("Failed to create tokio runtime: {}", e)))?;

        debug!("loading documents concurrently");
        let documents = runtime.block_on(load_documents_async(&config.inputs))?;

        run_pipeline(&documents, config, output)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::InputPaths;
    use crate::strategy::SyncProcessingStrategy;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::NamedTempFile;

    fn create_temp_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    #[test]
    fn test_async_strategy_matches_sync_strategy() {
        let movies = create_temp_file(
            r#"[{"Title": "Heat", "Genre": "Crime", "Duration": "02:50:00", "Rating": 9.5, "Director": "Michael Mann"}]"#,
        );
        let halls = create_temp_file(r#"[{"Name": "Vista", "Is4Dx": false, "Is3D": true, "Seats": 60}]"#);
        let projections = create_temp_file(
            "<Projections><Projection><MovieId>1</MovieId><HallId>1</HallId>\
             <DateTime>2024-05-12 18:30:00</DateTime></Projection></Projections>",
        );
        let config = RunConfig {
            inputs: InputPaths {
                movies: Some(movies.path().to_path_buf()),
                halls: Some(halls.path().to_path_buf()),
                projections: Some(projections.path().to_path_buf()),
                customers: None,
            },
            top_movies_rating: Some(1.0),
            top_customers_age: None,
        };

        let mut sync_output = Vec::new();
        let mut async_output = Vec::new();
        SyncProcessingStrategy.process(&config, &mut sync_output).unwrap();
        AsyncProcessingStrategy.process(&config, &mut async_output).unwrap();

        assert_eq!(sync_output, async_output);
        let text = String::from_utf8(async_output).unwrap();
        assert!(text.contains("Successfully imported Vista(3D) with 60 seats!"));
        assert!(text.contains("Successfully imported projection Heat on 05/12/2024!"));
    }

    #[test]
    fn test_async_strategy_handles_missing_file() {
        let config = RunConfig {
            inputs: InputPaths {
                projections: Some(PathBuf::from("nonexistent.xml")),
                ..Default::default()
            },
            ..Default::default()
        };

        let mut output = Vec::new();
        let result = AsyncProcessingStrategy.process(&config, &mut output);
        assert!(matches!(result, Err(CinemaError::FileNotFound { .. })));
    }

    #[test]
    fn test_async_strategy_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AsyncProcessingStrategy>();
    }
}
