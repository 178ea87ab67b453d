use std::env;
use std::path::PathBuf;

/// Default paths mirror the repo layout: the curated drug data lives under
/// `data/`, the generated seed file lands in the migrations directory.
const DEFAULT_INPUT_PATH: &str = "data/drug_data.json";
const DEFAULT_OUTPUT_PATH: &str = "migrations/0003_seed_medications.sql";

#[derive(Debug, Clone)]
pub struct SeedConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
}

impl SeedConfig {
    /// Resolve paths from CLI positional arguments, falling back to
    /// SEED_INPUT_PATH / SEED_OUTPUT_PATH, then the documented defaults.
    pub fn from_env() -> Self {
        Self::from_args(env::args().skip(1))
    }

    pub fn from_args<I>(mut args: I) -> Self
    where
        I: Iterator<Item = String>,
    {
        let input_path = args
            .next()
            .or_else(|| env::var("SEED_INPUT_PATH").ok())
            .unwrap_or_else(|| DEFAULT_INPUT_PATH.to_string());
        let output_path = args
            .next()
            .or_else(|| env::var("SEED_OUTPUT_PATH").ok())
            .unwrap_or_else(|| DEFAULT_OUTPUT_PATH.to_string());

        Self {
            input_path: input_path.into(),
            output_path: output_path.into(),
        }
    }
}
