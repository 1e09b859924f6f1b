use clap::{Args, Parser, Subcommand};
use pephire::core::io::format::SequenceFormat;
use pephire::engine::config::LadderonSizeLimit;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Lu Peng, Jun Ma, Yu Ernest Liu",
    version,
    about = "PepHire CLI - Ladderon-guided generation of new peptide candidates from an existing peptide pool.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a batch of new candidates by ladderon assembly over a pool.
    Generate(GenerateArgs),
    /// Merge externally selected survivors into a pool file.
    Absorb(AbsorbArgs),
    /// Print the weighted ladderon catalog and address index of a pool.
    Inspect(InspectArgs),
}

/// Arguments for the `generate` subcommand.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    // --- Core Arguments ---
    /// Path to the current peptide pool (plain text, FASTA or CSV).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub pool: PathBuf,

    /// CSV column holding the pool sequences, instead of `sequence`.
    #[arg(long, value_name = "NAME")]
    pub pool_column: Option<String>,

    /// Path to the ladderon book (TOML) produced for this pool.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub ladderons: PathBuf,

    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Path for the generated batch. Written to stdout when omitted.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Output format. Guessed from the output extension when omitted.
    #[arg(short, long, value_name = "plain|fasta|csv")]
    pub format: Option<SequenceFormat>,

    /// Generation index used in FASTA headers and CSV records.
    #[arg(short, long, default_value_t = 0, value_name = "INT")]
    pub generation: usize,

    // --- Generation Overrides ---
    /// Override the number of candidates to assemble.
    #[arg(short, long, value_name = "INT")]
    pub num_candidates: Option<usize>,

    /// Seed for the random number generator, for reproducible batches.
    #[arg(long, value_name = "INT")]
    pub seed: Option<u64>,

    /// Keep candidates that repeat the batch or the pool.
    #[arg(long)]
    pub allow_repetition: bool,

    #[command(flatten)]
    pub size_limit: SizeLimitArgs,

    /// Override the maximum number of placement attempts per candidate.
    #[arg(long, value_name = "INT")]
    pub max_attempts: Option<usize>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S generation.num-candidates=50
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

/// Mutually exclusive ways of capping ladderon length.
#[derive(Args, Debug, Clone, Copy, Default)]
#[group(required = false, multiple = false)]
pub struct SizeLimitArgs {
    /// Cap ladderon length at a fraction of the peptide length, in (0, 1].
    #[arg(long, value_name = "FLOAT")]
    pub limit_size: Option<f64>,

    /// Cap ladderon length at a fixed number of residues.
    #[arg(long, value_name = "INT")]
    pub max_ladderon_len: Option<usize>,
}

impl SizeLimitArgs {
    pub fn to_limit(self) -> Option<LadderonSizeLimit> {
        match (self.limit_size, self.max_ladderon_len) {
            (Some(fraction), _) => Some(LadderonSizeLimit::Fraction(fraction)),
            (None, Some(cap)) => Some(LadderonSizeLimit::Absolute(cap)),
            (None, None) => None,
        }
    }
}

/// Arguments for the `absorb` subcommand.
#[derive(Args, Debug)]
pub struct AbsorbArgs {
    /// Path to the current peptide pool.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub pool: PathBuf,

    /// Path to the selected survivors of the latest batch.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub selected: PathBuf,

    /// CSV column holding the survivors, e.g. `dockingpool`, instead of
    /// `sequence`.
    #[arg(long, value_name = "NAME")]
    pub column: Option<String>,

    /// Path for the extended pool. The pool file is rewritten when omitted.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// Arguments for the `inspect` subcommand.
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Path to the peptide pool.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub pool: PathBuf,

    /// CSV column holding the pool sequences, instead of `sequence`.
    #[arg(long, value_name = "NAME")]
    pub pool_column: Option<String>,

    /// Path to the ladderon book (TOML) produced for this pool.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub ladderons: PathBuf,

    #[command(flatten)]
    pub size_limit: SizeLimitArgs,

    /// Only list the heaviest N catalog entries.
    #[arg(long, value_name = "INT")]
    pub top: Option<usize>,
}
