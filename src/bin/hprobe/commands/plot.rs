use std::collections::HashMap;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{bail, Context as _, Result};

use hbond_probe::io::table;
use hbond_probe::io::{EnergyRecord, InteractionRecord, RmseRecord};
use hbond_probe::report;

use crate::cli::{EnergyArgs, Figure, PlotArgs, ScatterArgs};
use crate::display::Context;

pub fn run(args: PlotArgs, ctx: Context) -> Result<()> {
    match args.figure {
        Figure::Scatter(args) => scatter(args, ctx),
        Figure::Energy(args) => energy(args, ctx),
    }
}

fn scatter(args: ScatterArgs, ctx: Context) -> Result<()> {
    let hbonds: Vec<InteractionRecord> = table::read_rows_file(&args.hbonds)
        .with_context(|| format!("Failed to read {}", args.hbonds.display()))?;
    let rmse: Vec<RmseRecord> = table::read_rows_file(&args.rmse)
        .with_context(|| format!("Failed to read {}", args.rmse.display()))?;

    let points = join_scatter(&hbonds, &rmse);
    if points.is_empty() {
        bail!(
            "No rows of {} and {} share a file stem",
            args.hbonds.display(),
            args.rmse.display()
        );
    }

    report::rmse_scatter(&args.output, &points, args.keep_percent, &args.title)
        .with_context(|| format!("Failed to render {}", args.output.display()))?;

    if ctx.interactive {
        print_done(points.len(), &args.output);
    }
    Ok(())
}

fn energy(args: EnergyArgs, ctx: Context) -> Result<()> {
    let hbonds: Vec<InteractionRecord> = table::read_rows_file(&args.hbonds)
        .with_context(|| format!("Failed to read {}", args.hbonds.display()))?;
    let energies: Vec<EnergyRecord> = table::read_rows_file(&args.energies)
        .with_context(|| format!("Failed to read {}", args.energies.display()))?;

    let points = join_energy(&hbonds, &energies);
    if points.is_empty() {
        bail!(
            "No rows of {} and {} share a file stem",
            args.hbonds.display(),
            args.energies.display()
        );
    }

    report::energy_bars(&args.output, &points, &args.title)
        .with_context(|| format!("Failed to render {}", args.output.display()))?;

    if ctx.interactive {
        print_done(points.len(), &args.output);
    }
    Ok(())
}

/// Tables are joined on the file stem: the hydrogen-bond rows carry the
/// snapshot file name, the RMSE rows carry already-stripped stems.
fn stem(file: &str) -> String {
    Path::new(file)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| file.to_string())
}

fn join_scatter(
    hbonds: &[InteractionRecord],
    rmse: &[RmseRecord],
) -> Vec<report::ScatterPoint> {
    let by_stem: HashMap<String, &InteractionRecord> =
        hbonds.iter().map(|r| (stem(&r.file), r)).collect();

    rmse.iter()
        .filter_map(|row| {
            let hbond = by_stem.get(&stem(&row.file))?;
            let (drug, matrix, distance) =
                (row.drug_rmse?, row.matrix_rmse?, row.distance_to_origin?);
            Some(report::ScatterPoint {
                drug_rmse: drug,
                matrix_rmse: matrix,
                distance,
                substituent: hbond.substituent.clone(),
                cyclic: hbond.cyclic_hbond,
            })
        })
        .collect()
}

fn join_energy(
    hbonds: &[InteractionRecord],
    energies: &[EnergyRecord],
) -> Vec<report::EnergyPoint> {
    let by_stem: HashMap<String, &InteractionRecord> =
        hbonds.iter().map(|r| (stem(&r.file), r)).collect();

    energies
        .iter()
        .filter_map(|row| {
            let hbond = by_stem.get(&stem(&row.file))?;
            Some(report::EnergyPoint {
                substituent: hbond.substituent.clone(),
                cyclic: hbond.cyclic_hbond,
                binding_energy_ev: row.binding_energy_ev,
            })
        })
        .collect()
}

fn print_done(points: usize, output: &Path) {
    let mut stderr = io::stderr().lock();
    let _ = writeln!(
        stderr,
        "  \x1b[32m✓\x1b[0m {} points plotted → {}",
        points,
        output.display()
    );
}
