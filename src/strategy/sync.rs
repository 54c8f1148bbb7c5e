//! Synchronous processing strategy
//!
//! Reads the input documents one after another with `std::fs`, then hands
//! them to the shared import/export pipeline. No tokio runtime is started, so
//! it can be called from inside an async context.

use crate::io::load_documents;
use crate::strategy::{run_pipeline, ProcessingStrategy, RunConfig};
use crate::types::CinemaError;
use std::io::Write;
use tracing::debug;

/// Synchronous processing strategy
///
/// # Examples
///
/// ```no_run
/// use cinema_data_processor::io::InputPaths;
/// use cinema_data_processor::strategy::{ProcessingStrategy, RunConfig, SyncProcessingStrategy};
/// use std::io;
///
/// let config = RunConfig {
///     inputs: InputPaths {
///         movies: Some("movies.json".into()),
///         ..Default::default()
///     },
///     top_movies_rating: Some(8.0),
///     ..Default::default()
/// };
///
/// SyncProcessingStrategy
///     .process(&config, &mut io::stdout())
///     .expect("Processing failed");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SyncProcessingStrategy;

impl ProcessingStrategy for SyncProcessingStrategy {
    fn process(&self, config: &RunConfig, output: &mut dyn Write) -> Result<(), CinemaError> {
        debug!("loading documents sequentially");
        let documents = load_documents(&config.inputs)?;
        run_pipeline(&documents, config, output)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::InputPaths;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::NamedTempFile;

    /// Helper function to create a temporary input document for testing
    fn create_temp_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    #[test]
    fn test_sync_strategy_imports_movies() {
        let file = create_temp_file(
            r#"[{"Title": "Casablanca", "Genre": "Romance", "Duration": "01:42:00", "Rating": 8, "Director": "Michael Curtiz"}]"#,
        );
        let config = RunConfig {
            inputs: InputPaths {
                movies: Some(file.path().to_path_buf()),
                ..Default::default()
            },
            ..Default::default()
        };

        let mut output = Vec::new();
        SyncProcessingStrategy.process(&config, &mut output).unwrap();

        let output_str = String::from_utf8(output).unwrap();
        assert_eq!(
            output_str,
            "Successfully imported Casablanca with genre Romance and rating 8!\n"
        );
    }

    #[test]
    fn test_sync_strategy_handles_missing_file() {
        let config = RunConfig {
            inputs: InputPaths {
                halls: Some(PathBuf::from("nonexistent.json")),
                ..Default::default()
            },
            ..Default::default()
        };

        let mut output = Vec::new();
        let result = SyncProcessingStrategy.process(&config, &mut output);
        assert!(matches!(result, Err(CinemaError::FileNotFound { .. })));
        assert!(output.is_empty());
    }

    #[tokio::test]
    async fn test_sync_strategy_runs_inside_async_context() {
        let mut output = Vec::new();
        let config = RunConfig {
            top_movies_rating: Some(1.0),
            ..Default::default()
        };

        SyncProcessingStrategy.process(&config, &mut output).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "[]\n");
    }

    #[test]
    fn test_sync_strategy_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SyncProcessingStrategy>();
    }
}
