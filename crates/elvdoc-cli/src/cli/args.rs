use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "elvdoc",
    version,
    about = "Pack, validate, and inspect .elv document archives"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Pack template.html, style.css, function.js, and config.yaml into an archive
    Pack(PackArgs),
    /// Check whether a file is a valid elv archive (exit 0 valid, 1 invalid)
    Validate(ValidateArgs),
    /// List an archive's entries and config version
    Inspect(InspectArgs),
    /// Extract the four assets of an archive into a directory
    Unpack(UnpackArgs),
}

#[derive(clap::Args, Debug, Clone)]
pub struct PackArgs {
    /// Directory holding the four asset files
    #[arg(value_name = "SOURCE_DIR")]
    pub source: PathBuf,

    /// Output archive path (.tar.gz, or .elv which is rewritten to .tar.gz)
    #[arg(long, short = 'o')]
    pub out: PathBuf,

    /// Skip validating the archive after writing it
    #[arg(long)]
    pub no_verify: bool,
}

#[derive(clap::Args, Debug, Clone)]
pub struct ValidateArgs {
    /// Archive path (.tar.gz)
    #[arg(value_name = "ARCHIVE")]
    pub archive: PathBuf,

    /// Limit overrides as JSON, or @path to a JSON file
    /// (e.g. '{"max_config_bytes": 65536}')
    #[arg(long)]
    pub limits: Option<String>,

    /// Print nothing; report only through the exit code
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(clap::Args, Debug, Clone)]
pub struct InspectArgs {
    /// Archive path
    #[arg(value_name = "ARCHIVE")]
    pub archive: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

#[derive(clap::Args, Debug, Clone)]
pub struct UnpackArgs {
    /// Archive path
    #[arg(value_name = "ARCHIVE")]
    pub archive: PathBuf,

    /// Directory to write the assets into (created if missing)
    #[arg(long, short = 'o')]
    pub out: PathBuf,
}
