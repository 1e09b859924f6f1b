use pephire::core::io::format::SequenceFormat;
use pephire::engine::config as core_config;
use std::path::PathBuf;

pub struct AppConfig {
    pub pool_path: PathBuf,
    pub ladderons_path: PathBuf,
    pub output_path: Option<PathBuf>,
    pub output_format: SequenceFormat,
    pub generation: usize,
    pub seed: Option<u64>,
    pub core_config: core_config::GenerationConfig,
}
