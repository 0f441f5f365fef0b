use crate::cli::args::{InspectArgs, OutputFormat};
use crate::exit_codes::{EXIT_INVALID, EXIT_SUCCESS};
use anyhow::Result;
use elvdoc::{check_archive, list_entries, AssetRole, ValidateLimits};
use serde_json::json;
use std::fs::File;

pub fn run(args: InspectArgs) -> Result<i32> {
    let limits = ValidateLimits::default();
    let verdict = check_archive(&args.archive, &limits);

    // An unreadable listing counts against the archive, like a failed verdict.
    let listing = File::open(&args.archive)
        .map_err(elvdoc::ElvError::from)
        .and_then(|file| list_entries(file, &limits));

    match args.format {
        OutputFormat::Json => {
            let entries = listing.as_ref().ok().map(|entries| {
                entries
                    .iter()
                    .map(|e| {
                        json!({
                            "path": e.path,
                            "role": AssetRole::from_entry_path(&e.path),
                            "bytes": e.size,
                        })
                    })
                    .collect::<Vec<_>>()
            });
            let report = json!({
                "archive": args.archive.display().to_string(),
                "valid": verdict.is_ok(),
                "version": verdict.as_ref().ok().map(|c| c.version.clone()),
                "reason": verdict.as_ref().err().map(|e| e.to_string()),
                "entries": entries,
                "listing_error": listing.as_ref().err().map(|e| e.to_string()),
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Table => {
            println!("Archive:     {}", args.archive.display());
            match &verdict {
                Ok(config) => {
                    println!("Valid:       yes");
                    println!("Version:     {}", config.version);
                }
                Err(e) => println!("Valid:       no ({})", e),
            }
            println!();
            match &listing {
                Ok(entries) => {
                    println!("{:<28} {:>10}", "ENTRY", "BYTES");
                    for entry in entries {
                        println!("{:<28} {:>10}", entry.path, entry.size);
                    }
                }
                Err(e) => println!("Entries:     unreadable ({})", e),
            }
        }
    }

    Ok(if verdict.is_ok() && listing.is_ok() {
        EXIT_SUCCESS
    } else {
        EXIT_INVALID
    })
}
