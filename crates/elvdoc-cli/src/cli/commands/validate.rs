use crate::cli::args::ValidateArgs;
use crate::exit_codes::{EXIT_INVALID, EXIT_SUCCESS};
use anyhow::{Context, Result};
use elvdoc::{check_archive, ValidateLimits, ValidateLimitsOverrides};
use std::fs;

pub fn run(args: ValidateArgs) -> Result<i32> {
    let limits = parse_limits(args.limits.as_deref())?;

    match check_archive(&args.archive, &limits) {
        Ok(config) => {
            if !args.quiet {
                eprintln!(
                    "Archive valid ({}): version {}",
                    args.archive.display(),
                    config.version
                );
            }
            Ok(EXIT_SUCCESS)
        }
        Err(e) => {
            if !args.quiet {
                eprintln!("Archive invalid ({}): {}", args.archive.display(), e);
            }
            Ok(EXIT_INVALID)
        }
    }
}

/// Parse `--limits` as inline JSON or `@path` to a JSON file, applied over the defaults.
pub(crate) fn parse_limits(arg: Option<&str>) -> Result<ValidateLimits> {
    let defaults = ValidateLimits::default();
    let Some(s) = arg else {
        return Ok(defaults);
    };

    let overrides = if let Some(path) = s.strip_prefix('@') {
        let path = path.trim();
        if path.is_empty() {
            anyhow::bail!("--limits @path: path cannot be empty");
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("limits file not found: {}", path))?;
        serde_json::from_str::<ValidateLimitsOverrides>(&content)
            .with_context(|| format!("invalid limits JSON in {}", path))?
    } else {
        serde_json::from_str::<ValidateLimitsOverrides>(s)
            .context("invalid --limits JSON (use --limits @path for a file)")?
    };

    Ok(defaults.apply(overrides))
}
