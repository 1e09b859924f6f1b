use super::defaults::DefaultsConfig;
use super::file::{FileConfig, FileGenerationConfig};
use super::models::AppConfig;
use crate::cli::GenerateArgs;
use crate::error::{CliError, Result};
use pephire::core::io::format::SequenceFormat;
use pephire::engine::config as core_config;
use std::str::FromStr;

pub fn build_config(args: &GenerateArgs) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();

    let file_config = if let Some(config_path) = &args.config {
        FileConfig::from_file(config_path)?
    } else {
        FileConfig::default()
    };

    let mut file_config = apply_set_values(file_config, &args.set_values)?;
    let generation_file = file_config.generation.take().unwrap_or_default();

    let num_candidates = args
        .num_candidates
        .or(generation_file.num_candidates)
        .unwrap_or(defaults.num_candidates);
    let no_repetition = if args.allow_repetition {
        false
    } else {
        generation_file
            .no_repetition
            .unwrap_or(defaults.no_repetition)
    };
    let max_attempts = args
        .max_attempts
        .or(generation_file.max_attempts)
        .unwrap_or(defaults.max_attempts);
    let size_limit = match args.size_limit.to_limit() {
        Some(limit) => Some(limit),
        None => file_size_limit(&generation_file)?,
    };

    let core_config = core_config::GenerationConfigBuilder::new()
        .num_candidates(num_candidates)
        .no_repetition(no_repetition)
        .size_limit(size_limit)
        .max_attempts(max_attempts)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    let output_format = args
        .format
        .or_else(|| args.output.as_deref().map(SequenceFormat::from_path))
        .unwrap_or_default();

    Ok(AppConfig {
        pool_path: args.pool.clone(),
        ladderons_path: args.ladderons.clone(),
        output_path: args.output.clone(),
        output_format,
        generation: args.generation,
        seed: args.seed.or(generation_file.seed),
        core_config,
    })
}

fn file_size_limit(file: &FileGenerationConfig) -> Result<Option<core_config::LadderonSizeLimit>> {
    match (file.limit_size, file.max_ladderon_len) {
        (Some(_), Some(_)) => Err(CliError::Config(
            "`limit-size` and `max-ladderon-len` cannot both be set".to_string(),
        )),
        (Some(fraction), None) => Ok(Some(core_config::LadderonSizeLimit::Fraction(fraction))),
        (None, Some(cap)) => Ok(Some(core_config::LadderonSizeLimit::Absolute(cap))),
        (None, None) => Ok(None),
    }
}

fn parse_value<T: FromStr>(key: &str, value: &str, kind: &str) -> Result<T> {
    value
        .parse()
        .map_err(|_| CliError::Config(format!("Invalid {} value for {}: {}", kind, key, value)))
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    if set_values.is_empty() {
        return Ok(config);
    }
    for kv_pair in set_values {
        let Some((key, value_str)) = kv_pair.split_once('=') else {
            return Err(CliError::Config(format!(
                "Invalid --set format: '{}'. Expected KEY=VALUE.",
                kv_pair
            )));
        };

        let generation = config.generation.get_or_insert_with(Default::default);
        match key {
            "generation.num-candidates" => {
                generation.num_candidates = Some(parse_value(key, value_str, "integer")?);
            }
            "generation.no-repetition" => {
                generation.no_repetition = Some(parse_value(key, value_str, "boolean")?);
            }
            "generation.limit-size" => {
                generation.limit_size = Some(parse_value(key, value_str, "float")?);
                generation.max_ladderon_len = None;
            }
            "generation.max-ladderon-len" => {
                generation.max_ladderon_len = Some(parse_value(key, value_str, "integer")?);
                generation.limit_size = None;
            }
            "generation.max-attempts" => {
                generation.max_attempts = Some(parse_value(key, value_str, "integer")?);
            }
            "generation.seed" => {
                generation.seed = Some(parse_value(key, value_str, "integer")?);
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}
