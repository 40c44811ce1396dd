use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use hbond_probe::probe::ProbeConfig;
use hbond_probe::shift::Reference;

use crate::cli::GeometryOptions;

pub fn load_dataset(path: &Path, geometry: &GeometryOptions) -> Result<ProbeConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read dataset file: {}", path.display()))?;
    let mut config = ProbeConfig::from_toml_str(&text)
        .with_context(|| format!("Failed to parse dataset file: {}", path.display()))?;

    if let Some(offset) = geometry.offset {
        config.index_offset = offset;
    }
    if let Some(distance) = geometry.max_distance {
        config.thresholds.max_acceptor_distance = distance;
    }
    if let Some(angle) = geometry.min_angle {
        config.thresholds.min_donor_angle = angle;
    }
    if let Some(cutoff) = geometry.covalent_cutoff {
        config.thresholds.covalent_cutoff = cutoff;
    }

    Ok(config)
}

pub fn load_reference(path: &Path) -> Result<Reference> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read reference file: {}", path.display()))?;
    Reference::from_toml_str(&text)
        .with_context(|| format!("Failed to parse reference file: {}", path.display()))
}
