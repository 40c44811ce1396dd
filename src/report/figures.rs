//! Figure generation using plotters (SVG output).
//!
//! Uses the SVG backend to avoid system font dependencies.

use anyhow::Result;
use plotters::prelude::*;
use plotters_svg::SVGBackend;
use std::path::{Path, PathBuf};

/// eV per molecule to kJ/mol.
pub const EV_TO_KJ_PER_MOL: f64 = 96.485;

const S_COLOR: RGBColor = RED;
const CYCLIC_COLOR: RGBColor = GREEN;
const M_COLOR: RGBColor = BLUE;
const A_COLOR: RGBColor = RGBColor(128, 0, 128);
const P_COLOR: RGBColor = RGBColor(255, 165, 0);
const OTHER_COLOR: RGBColor = RGBColor(128, 128, 128);

/// One joined row of the hydrogen-bond and RMSE tables.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPoint {
    pub drug_rmse: f64,
    pub matrix_rmse: f64,
    pub distance: f64,
    pub substituent: String,
    pub cyclic: bool,
}

/// Substituent classes of a scatter point. A point can belong to several
/// classes at once; the cyclic class is restricted to S-type points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Classes {
    pub s: bool,
    pub m: bool,
    pub a: bool,
    pub p: bool,
    pub cyclic: bool,
}

impl Classes {
    pub fn of(substituent: &str, cyclic: bool) -> Self {
        let s = has_label(substituent, "S") || has_label(substituent, "O6S");
        Self {
            s,
            m: has_label(substituent, "M") || has_label(substituent, "O6M"),
            a: has_label(substituent, "A") || has_label(substituent, "O6A"),
            p: has_label(substituent, "P") || has_label(substituent, "O6P"),
            cyclic: s && cyclic,
        }
    }

    pub fn is_other(&self) -> bool {
        !(self.s || self.m || self.a || self.p)
    }
}

fn has_label(substituent: &str, key: &str) -> bool {
    substituent.split(',').any(|part| part.trim() == key)
}

/// Keeps the fraction of points closest to the origin, sorted by
/// distance-to-origin. `keep_percent` of 100 keeps everything; at least one
/// point always survives a non-empty input.
pub fn keep_closest(points: &[ScatterPoint], keep_percent: f64) -> Vec<ScatterPoint> {
    let mut kept: Vec<ScatterPoint> = points.to_vec();
    kept.sort_by(|a, b| a.distance.total_cmp(&b.distance));

    let n = ((kept.len() as f64) * keep_percent / 100.0) as usize;
    kept.truncate(n.max(1).min(kept.len()));
    kept
}

/// Drug-RMSE vs matrix-RMSE scatter, colored by substituent class with
/// per-class percentages in the legend.
pub fn rmse_scatter(
    path: &Path,
    points: &[ScatterPoint],
    keep_percent: f64,
    title: &str,
) -> Result<()> {
    let svg_path = svg_target(path);
    let root = SVGBackend::new(&svg_path, (800, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    if points.is_empty() {
        root.draw(&Text::new(
            "No data to plot",
            (400, 300),
            ("sans-serif", 20).into_font().color(&BLACK),
        ))?;
        root.present()?;
        return Ok(());
    }

    let kept = keep_closest(points, keep_percent);
    let total = kept.len() as f64;

    let (x_max, y_max) = kept.iter().fold((1e-3f64, 1e-3f64), |(xm, ym), p| {
        (xm.max(p.drug_rmse), ym.max(p.matrix_rmse))
    });

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 20))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..x_max * 1.05, 0.0..y_max * 1.05)?;

    chart
        .configure_mesh()
        .x_desc("RMSE drug (ppm)")
        .y_desc("RMSE matrix (ppm)")
        .draw()?;

    // draw order: unselective classes first so S and cyclic stay on top
    let series: [(&str, RGBColor, Box<dyn Fn(&Classes) -> bool>); 6] = [
        ("others", OTHER_COLOR, Box::new(|c: &Classes| c.is_other())),
        ("A", A_COLOR, Box::new(|c: &Classes| c.a)),
        ("P", P_COLOR, Box::new(|c: &Classes| c.p)),
        ("M", M_COLOR, Box::new(|c: &Classes| c.m)),
        ("S", S_COLOR, Box::new(|c: &Classes| c.s)),
        ("cyclic H-bond", CYCLIC_COLOR, Box::new(|c: &Classes| c.cyclic)),
    ];

    for (name, color, member) in &series {
        let color = *color;
        let subset: Vec<_> = kept
            .iter()
            .filter(|p| member(&Classes::of(&p.substituent, p.cyclic)))
            .collect();
        let percent = subset.len() as f64 / total * 100.0;

        chart
            .draw_series(
                subset
                    .iter()
                    .map(|p| Circle::new((p.drug_rmse, p.matrix_rmse), 3, color.filled())),
            )?
            .label(format!("{} ({:.1}%)", name, percent))
            .legend(move |(x, y)| Circle::new((x + 5, y), 3, color.filled()));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

/// One joined row of the hydrogen-bond and binding-energy tables.
#[derive(Debug, Clone, PartialEq)]
pub struct EnergyPoint {
    pub substituent: String,
    pub cyclic: bool,
    pub binding_energy_ev: f64,
}

const ENERGY_CLASSES: [&str; 4] = ["M", "P", "S", "A"];

/// Mean binding energy (kJ/mol) per single-label substituent, split by the
/// cyclic flag. Rows with positive binding energy or multiple labels are
/// dropped, and cyclic rows are only admitted for S (the cyclic motif closes
/// through the succinoyl group).
pub fn mean_binding_by_class(points: &[EnergyPoint]) -> Vec<(&'static str, bool, f64)> {
    let mut means = Vec::new();

    for class in ENERGY_CLASSES {
        for cyclic in [false, true] {
            let values: Vec<f64> = points
                .iter()
                .filter(|p| {
                    p.binding_energy_ev < 0.0
                        && p.substituent == class
                        && p.cyclic == cyclic
                        && !(cyclic && class != "S")
                })
                .map(|p| p.binding_energy_ev * EV_TO_KJ_PER_MOL)
                .collect();
            if !values.is_empty() {
                let mean = values.iter().sum::<f64>() / values.len() as f64;
                means.push((class, cyclic, mean));
            }
        }
    }

    means
}

/// Bar chart of mean binding energy per substituent class, paired bars for
/// the cyclic split.
pub fn energy_bars(path: &Path, points: &[EnergyPoint], title: &str) -> Result<()> {
    let svg_path = svg_target(path);
    let root = SVGBackend::new(&svg_path, (640, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let means = mean_binding_by_class(points);
    if means.is_empty() {
        root.draw(&Text::new(
            "No data to plot",
            (320, 300),
            ("sans-serif", 20).into_font().color(&BLACK),
        ))?;
        root.present()?;
        return Ok(());
    }

    let y_min = means.iter().map(|(_, _, v)| *v).fold(0.0f64, f64::min);
    let y_max = means.iter().map(|(_, _, v)| *v).fold(0.0f64, f64::max);
    let pad = (y_max - y_min).abs().max(1.0) * 0.1;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 20))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(-0.6..3.6f64, y_min - pad..y_max + pad)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(ENERGY_CLASSES.len())
        .x_label_formatter(&|x| {
            let idx = x.round();
            if (x - idx).abs() < 1e-6 && (0.0..4.0).contains(&idx) {
                ENERGY_CLASSES[idx as usize].to_string()
            } else {
                String::new()
            }
        })
        .y_desc("mean binding energy (kJ/mol)")
        .draw()?;

    let plain = RGBColor(135, 206, 235);
    let cyclic_fill = RGBColor(65, 105, 225);

    for (class, cyclic, mean) in &means {
        let Some(idx) = ENERGY_CLASSES.iter().position(|c| c == class) else {
            continue;
        };
        let idx = idx as f64;
        let (x0, x1) = if *cyclic {
            (idx + 0.05, idx + 0.35)
        } else {
            (idx - 0.35, idx - 0.05)
        };
        let fill = if *cyclic { cyclic_fill } else { plain };
        chart.draw_series(std::iter::once(Rectangle::new(
            [(x0, 0.0), (x1, *mean)],
            fill.filled(),
        )))?;
    }

    let legend_items = [("cyclic H-bond", cyclic_fill), ("no cyclic H-bond", plain)];
    for (name, color) in legend_items {
        chart
            .draw_series(std::iter::empty::<Rectangle<(f64, f64)>>())?
            .label(name)
            .legend(move |(x, y)| {
                Rectangle::new([(x, y - 5), (x + 10, y + 5)], color.filled())
            });
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::LowerRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

fn svg_target(path: &Path) -> PathBuf {
    if path.extension().map(|e| e == "png").unwrap_or(false) {
        path.with_extension("svg")
    } else {
        path.to_path_buf()
    }
}
