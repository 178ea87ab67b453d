use anyhow::Result;

use ivy_seed::config::SeedConfig;
use ivy_seed::services::SeedGenerator;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "ivy_seed=info".into()),
        ))
        .init();

    dotenvy::dotenv().ok();

    let config = SeedConfig::from_env();

    tracing::info!("💊 Medication seed SQL generator");
    tracing::info!("Input:  {}", config.input_path.display());
    tracing::info!("Output: {}", config.output_path.display());

    match SeedGenerator::generate(&config.input_path, &config.output_path) {
        Ok(summary) => {
            tracing::info!(
                "Successfully generated {} SQL statements for {} medications",
                summary.statements,
                summary.medications
            );
            tracing::info!("SQL seed file saved to {}", config.output_path.display());
            Ok(())
        }
        Err(e) => {
            tracing::error!("{}", e);
            std::process::exit(1);
        }
    }
}
