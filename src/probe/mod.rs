mod classify;
mod config;
mod error;
pub mod geometry;

pub use classify::{acceptor_partners, classify_substituent, detect_cyclic_hbond, donor_partners};
pub use config::{CyclicRule, ProbeConfig, SiteSpec, SubstituentEntry, Thresholds};
pub use error::Error;

use crate::model::snapshot::Snapshot;

/// Everything the classifier derives from one snapshot: the partner lists of
/// the three monitored motifs, the substituent classification of the amide
/// donor, and the cyclic-motif flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HbondReport {
    pub amide_donor: Vec<String>,
    pub carbonyl_acceptor: Vec<String>,
    pub hydroxyl_donor: Vec<String>,
    pub substituent: String,
    pub cyclic_hbond: bool,
}

impl HbondReport {
    /// Flattens the report into the CSV row shape, `", "`-joining the
    /// partner lists.
    pub fn into_record(self, file: impl Into<String>) -> crate::io::InteractionRecord {
        crate::io::InteractionRecord {
            file: file.into(),
            substituent: self.substituent,
            amide_donor: self.amide_donor.join(", "),
            carbonyl_acceptor: self.carbonyl_acceptor.join(", "),
            hydroxyl_donor: self.hydroxyl_donor.join(", "),
            cyclic_hbond: self.cyclic_hbond,
        }
    }
}

/// Runs the full hydrogen-bond classification of one snapshot.
pub fn probe(snapshot: &Snapshot, config: &ProbeConfig) -> Result<HbondReport, Error> {
    let sites = resolve_sites(snapshot, config)?;

    let amide_donor =
        donor_partners(snapshot, sites.amide_n, sites.amide_h, &config.thresholds)?;
    let carbonyl_acceptor =
        acceptor_partners(snapshot, sites.carbonyl_o, &config.thresholds)?;
    let hydroxyl_donor =
        donor_partners(snapshot, sites.hydroxyl_o, sites.hydroxyl_h, &config.thresholds)?;

    let substituent = classify_substituent(&amide_donor, &config.substituents);
    let cyclic_hbond =
        detect_cyclic_hbond(&amide_donor, &carbonyl_acceptor, &config.cyclic_rules);

    Ok(HbondReport {
        amide_donor,
        carbonyl_acceptor,
        hydroxyl_donor,
        substituent,
        cyclic_hbond,
    })
}

/// The five site indices with the topology offset applied, converted to
/// 0-based positions and bounds-checked against the snapshot up front so a
/// wrong offset fails before any scan runs.
struct ResolvedSites {
    amide_n: usize,
    amide_h: usize,
    carbonyl_o: usize,
    hydroxyl_h: usize,
    hydroxyl_o: usize,
}

fn resolve_sites(snapshot: &Snapshot, config: &ProbeConfig) -> Result<ResolvedSites, Error> {
    let resolve = |site: &'static str, canonical: usize| -> Result<usize, Error> {
        let index = canonical + config.index_offset;
        if index == 0 || index > snapshot.atom_count() {
            return Err(Error::site_out_of_range(site, index, snapshot.atom_count()));
        }
        Ok(index - 1)
    };

    Ok(ResolvedSites {
        amide_n: resolve("amide N donor", config.sites.amide_n)?,
        amide_h: resolve("amide N-H hydrogen", config.sites.amide_h)?,
        carbonyl_o: resolve("carbonyl O acceptor", config.sites.carbonyl_o)?,
        hydroxyl_h: resolve("hydroxyl H donor", config.sites.hydroxyl_h)?,
        hydroxyl_o: resolve("hydroxyl parent O", config.sites.hydroxyl_o)?,
    })
}
