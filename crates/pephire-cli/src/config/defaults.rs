use pephire::engine::config::DEFAULT_MAX_ATTEMPTS;

pub struct DefaultsConfig {
    pub num_candidates: usize,
    pub no_repetition: bool,
    pub max_attempts: usize,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            num_candidates: 10,
            no_repetition: true,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}
