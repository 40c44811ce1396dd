use anyhow::{bail, Context as _, Result};

use hbond_probe::batch;
use hbond_probe::io::table;

use crate::cli::RmseArgs;
use crate::commands::hbond::print_summary;
use crate::config;
use crate::display::{Context, FileProgress};

pub fn run(args: RmseArgs, ctx: Context) -> Result<()> {
    let reference = config::load_reference(&args.reference)?;

    let files = batch::list_files(&args.io.input, "csv")
        .with_context(|| format!("Failed to scan {}", args.io.input.display()))?;
    if files.is_empty() {
        bail!("No prediction .csv files found in {}", args.io.input.display());
    }

    let progress = FileProgress::new(ctx.interactive, files.len() as u64);
    let outcome =
        batch::sweep_predictions(&args.io.input, &reference, &args.strip_suffix, |path| {
            progress.tick(path)
        })?;
    progress.finish();

    if outcome.records.is_empty() {
        bail!(
            "All {} prediction files failed to score; check the reference file",
            outcome.failures.len()
        );
    }

    table::write_rows_file(&args.io.output, &outcome.records)
        .with_context(|| format!("Failed to write {}", args.io.output.display()))?;

    if ctx.interactive {
        print_summary(&outcome, "prediction files scored", &args.io.output);
    }

    Ok(())
}
