use crate::cli::args::PackArgs;
use crate::exit_codes::{EXIT_INVALID, EXIT_SUCCESS};
use anyhow::{Context, Result};
use elvdoc::ElvError;

pub fn run(args: PackArgs) -> Result<i32> {
    let result = if args.no_verify {
        elvdoc::encode_from_directory(&args.out, &args.source)
    } else {
        elvdoc::pack_and_verify(&args.out, &args.source)
    };

    match result {
        Ok(written) => {
            eprintln!(
                "Packed {} into {}",
                args.source.display(),
                written.display()
            );
            println!("{}", written.display());
            Ok(EXIT_SUCCESS)
        }
        Err(e @ ElvError::Validation { .. }) => {
            eprintln!("Pack failed: {e}");
            Ok(EXIT_INVALID)
        }
        Err(e) => Err(e).with_context(|| format!("failed to pack {}", args.source.display())),
    }
}
