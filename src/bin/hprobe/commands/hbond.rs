use std::io::{self, Write};

use anyhow::{bail, Context as _, Result};

use hbond_probe::batch::{self, BatchOutcome};
use hbond_probe::io::table;

use crate::cli::HbondArgs;
use crate::config;
use crate::display::{Context, FileProgress};

pub fn run(args: HbondArgs, ctx: Context) -> Result<()> {
    let probe_config = config::load_dataset(&args.dataset, &args.geometry)?;

    let files = batch::list_files(&args.io.input, "xyz")
        .with_context(|| format!("Failed to scan {}", args.io.input.display()))?;
    if files.is_empty() {
        bail!("No .xyz snapshots found in {}", args.io.input.display());
    }

    let progress = FileProgress::new(ctx.interactive, files.len() as u64);
    let outcome = batch::sweep_snapshots(&args.io.input, &probe_config, |path| {
        progress.tick(path)
    })?;
    progress.finish();

    if outcome.records.is_empty() {
        bail!(
            "All {} snapshots failed to classify; check the dataset configuration",
            outcome.failures.len()
        );
    }

    table::write_rows_file(&args.io.output, &outcome.records)
        .with_context(|| format!("Failed to write {}", args.io.output.display()))?;

    if ctx.interactive {
        print_summary(&outcome, "snapshots classified", &args.io.output);
    }

    Ok(())
}

pub fn print_summary<T>(outcome: &BatchOutcome<T>, what: &str, output: &std::path::Path) {
    let mut stderr = io::stderr().lock();

    let _ = writeln!(
        stderr,
        "  \x1b[32m✓\x1b[0m {} {} → {}",
        outcome.records.len(),
        what,
        output.display()
    );

    if !outcome.failures.is_empty() {
        let _ = writeln!(
            stderr,
            "  \x1b[33m!\x1b[0m {} file(s) failed:",
            outcome.failures.len()
        );
        for failure in &outcome.failures {
            let _ = writeln!(stderr, "      \x1b[2m·\x1b[0m {}: {}", failure.file, failure.error);
        }
    }
}
