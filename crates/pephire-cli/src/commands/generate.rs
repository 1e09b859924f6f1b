use super::{load_corpus, load_pool, write_sequences};
use crate::cli::GenerateArgs;
use crate::config::build_config;
use crate::error::{CliError, Result};
use crate::utils::progress::CliProgressHandler;
use pephire::{engine::progress::ProgressReporter, workflows};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, warn};

pub fn run(args: GenerateArgs) -> Result<()> {
    info!("Merging configuration from file and CLI arguments...");
    let app_config = build_config(&args)?;

    let pool = load_pool(&app_config.pool_path, args.pool_column.as_deref())?;
    let corpus = load_corpus(&app_config.ladderons_path)?;

    let mut rng = match app_config.seed {
        Some(seed) => {
            info!("Seeding random number generator with {}.", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    eprintln!(
        "Generating {} candidate(s) from a pool of {}...",
        app_config.core_config.num_candidates,
        pool.len()
    );
    info!("Invoking the core generation workflow...");
    let result = workflows::generate::run(
        &pool,
        &corpus,
        &app_config.core_config,
        &mut rng,
        &reporter,
    )?;
    let batch = result.batch;

    if batch.is_short() {
        warn!(
            "Batch is short: {} of {} requested, {} repeat(s) discarded.",
            batch.len(),
            batch.requested,
            batch.discarded
        );
    }

    match &app_config.output_path {
        Some(path) => {
            info!("Writing {} candidate(s) to {:?}", batch.len(), path);
            write_sequences(
                &batch.sequences,
                app_config.output_format,
                app_config.generation,
                path,
            )?;
            eprintln!(
                "✓ {} candidate(s) written to: {}",
                batch.len(),
                path.display()
            );
        }
        None => {
            let stdout = std::io::stdout();
            app_config
                .output_format
                .write_to(
                    &batch.sequences,
                    app_config.generation,
                    &mut stdout.lock(),
                )
                .map_err(|e| CliError::Other(e.into()))?;
        }
    }

    Ok(())
}
