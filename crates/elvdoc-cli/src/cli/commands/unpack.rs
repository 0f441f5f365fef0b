use crate::cli::args::UnpackArgs;
use crate::exit_codes::EXIT_SUCCESS;
use anyhow::{Context, Result};

pub fn run(args: UnpackArgs) -> Result<i32> {
    elvdoc::unpack_to_directory(&args.archive, &args.out)
        .with_context(|| format!("failed to unpack {}", args.archive.display()))?;

    eprintln!(
        "Unpacked {} into {}",
        args.archive.display(),
        args.out.display()
    );
    Ok(EXIT_SUCCESS)
}
