use thiserror::Error;

/// Upper bound on sampling attempts for one assembled sequence.
pub const DEFAULT_MAX_ATTEMPTS: usize = 10_000;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("Invalid value for '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

/// Maximum ladderon length admitted into the catalog and the address index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LadderonSizeLimit {
    /// A fixed number of residues.
    Absolute(usize),
    /// A fraction of the peptide length, in `(0, 1]`.
    Fraction(f64),
}

impl LadderonSizeLimit {
    /// Resolves the limit against a peptide length.
    ///
    /// Never resolves below 1 so the atomic units always stay selectable.
    pub fn resolve(self, peptide_length: usize) -> usize {
        let cap = match self {
            Self::Absolute(cap) => cap,
            Self::Fraction(fraction) => (fraction * peptide_length as f64).floor() as usize,
        };
        cap.max(1)
    }

    /// Rejects a zero absolute cap and fractions outside `(0, 1]`.
    pub fn validate(self) -> Result<Self, ConfigError> {
        match self {
            Self::Absolute(0) => Err(ConfigError::InvalidParameter {
                name: "size_limit",
                reason: "absolute ladderon size limit must be at least 1".to_string(),
            }),
            Self::Fraction(f) if !f.is_finite() || f <= 0.0 || f > 1.0 => {
                Err(ConfigError::InvalidParameter {
                    name: "size_limit",
                    reason: format!("fraction must lie in (0, 1], got {}", f),
                })
            }
            valid => Ok(valid),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GenerationConfig {
    pub num_candidates: usize,
    pub no_repetition: bool,
    pub size_limit: Option<LadderonSizeLimit>,
    pub max_attempts: usize,
}

#[derive(Default)]
pub struct GenerationConfigBuilder {
    num_candidates: Option<usize>,
    no_repetition: Option<bool>,
    size_limit: Option<LadderonSizeLimit>,
    max_attempts: Option<usize>,
}

impl GenerationConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn num_candidates(mut self, n: usize) -> Self {
        self.num_candidates = Some(n);
        self
    }
    pub fn no_repetition(mut self, enabled: bool) -> Self {
        self.no_repetition = Some(enabled);
        self
    }
    pub fn size_limit(mut self, limit: Option<LadderonSizeLimit>) -> Self {
        self.size_limit = limit;
        self
    }
    pub fn max_attempts(mut self, attempts: usize) -> Self {
        self.max_attempts = Some(attempts);
        self
    }

    pub fn build(self) -> Result<GenerationConfig, ConfigError> {
        let num_candidates = self
            .num_candidates
            .ok_or(ConfigError::MissingParameter("num_candidates"))?;

        let max_attempts = self.max_attempts.unwrap_or(DEFAULT_MAX_ATTEMPTS);
        if max_attempts == 0 {
            return Err(ConfigError::InvalidParameter {
                name: "max_attempts",
                reason: "must be greater than zero".to_string(),
            });
        }

        Ok(GenerationConfig {
            num_candidates,
            no_repetition: self.no_repetition.unwrap_or(true),
            size_limit: self.size_limit.map(LadderonSizeLimit::validate).transpose()?,
            max_attempts,
        })
    }
}
