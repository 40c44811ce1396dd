use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "hprobe",
    about = "Hydrogen-bond and NMR-shift screening of dispersion snapshots",
    version,
    before_help = crate::display::banner_for_help(),
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    pub fn quiet(&self) -> bool {
        match &self.command {
            Command::Hbond(args) => args.io.quiet,
            Command::Rmse(args) => args.io.quiet,
            Command::Plot(args) => match &args.figure {
                Figure::Scatter(a) => a.quiet,
                Figure::Energy(a) => a.quiet,
            },
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Classify hydrogen bonds across a directory of xyz snapshots
    #[command(visible_alias = "h")]
    Hbond(HbondArgs),

    /// Score shift predictions against the experimental reference
    #[command(visible_alias = "r")]
    Rmse(RmseArgs),

    /// Render figures from the aggregated result tables
    Plot(PlotArgs),
}

/// I/O options shared by the sweep commands.
#[derive(Args)]
pub struct IoOptions {
    /// Input directory
    #[arg(short, long, value_name = "DIR")]
    pub input: PathBuf,

    /// Output CSV file
    #[arg(short, long, value_name = "FILE")]
    pub output: PathBuf,

    /// Suppress progress output (for scripting)
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Args)]
pub struct HbondArgs {
    #[command(flatten)]
    pub io: IoOptions,

    /// Dataset configuration: site indices, substituents, cyclic rules (TOML)
    #[arg(long, value_name = "FILE")]
    pub dataset: PathBuf,

    #[command(flatten)]
    pub geometry: GeometryOptions,
}

/// Geometry overrides applied on top of the dataset file.
#[derive(Args)]
#[command(next_help_heading = "Geometry Overrides")]
pub struct GeometryOptions {
    /// Topology index offset
    #[arg(long, value_name = "N")]
    pub offset: Option<usize>,

    /// Maximum hydrogen-acceptor distance (Å)
    #[arg(long, value_name = "Å")]
    pub max_distance: Option<f64>,

    /// Minimum donor-H-acceptor angle (degrees)
    #[arg(long, value_name = "DEG")]
    pub min_angle: Option<f64>,

    /// Covalent bond cutoff (Å)
    #[arg(long, value_name = "Å")]
    pub covalent_cutoff: Option<f64>,
}

#[derive(Args)]
pub struct RmseArgs {
    #[command(flatten)]
    pub io: IoOptions,

    /// Experimental shift reference (TOML)
    #[arg(long, value_name = "FILE")]
    pub reference: PathBuf,

    /// Suffix stripped from prediction file stems when forming row keys
    #[arg(long, value_name = "SUFFIX", default_value = "_ShiftML_results")]
    pub strip_suffix: String,
}

#[derive(Args)]
pub struct PlotArgs {
    #[command(subcommand)]
    pub figure: Figure,
}

#[derive(Subcommand)]
pub enum Figure {
    /// Drug-RMSE vs matrix-RMSE scatter colored by substituent class
    Scatter(ScatterArgs),

    /// Mean binding energy per substituent, split by the cyclic flag
    Energy(EnergyArgs),
}

#[derive(Args)]
pub struct ScatterArgs {
    /// Hydrogen-bond result table (from `hprobe hbond`)
    #[arg(long, value_name = "CSV")]
    pub hbonds: PathBuf,

    /// RMSE result table (from `hprobe rmse`)
    #[arg(long, value_name = "CSV")]
    pub rmse: PathBuf,

    /// Output figure (SVG)
    #[arg(short, long, value_name = "FILE")]
    pub output: PathBuf,

    /// Keep only this percentage of points closest to the origin
    #[arg(long, value_name = "PERCENT", default_value = "100")]
    pub keep_percent: f64,

    /// Figure title
    #[arg(long, value_name = "TITLE", default_value = "")]
    pub title: String,

    /// Suppress the banner (for scripting)
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Args)]
pub struct EnergyArgs {
    /// Hydrogen-bond result table (from `hprobe hbond`)
    #[arg(long, value_name = "CSV")]
    pub hbonds: PathBuf,

    /// Binding energy table with `file` and `binding_energy_ev` columns
    #[arg(long, value_name = "CSV")]
    pub energies: PathBuf,

    /// Output figure (SVG)
    #[arg(short, long, value_name = "FILE")]
    pub output: PathBuf,

    /// Figure title
    #[arg(long, value_name = "TITLE", default_value = "")]
    pub title: String,

    /// Suppress the banner (for scripting)
    #[arg(short, long)]
    pub quiet: bool,
}

pub fn parse() -> Cli {
    Cli::parse()
}
