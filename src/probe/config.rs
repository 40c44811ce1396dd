use serde::Deserialize;

/// Canonical 1-based atom indices of the three monitored donor/acceptor
/// motifs. The same canonical set serves every topology of a molecular
/// system; per-topology renumbering is expressed through
/// [`ProbeConfig::index_offset`], never by editing the indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct SiteSpec {
    /// Amide nitrogen (donor heavy atom).
    pub amide_n: usize,
    /// Hydrogen bound to the amide nitrogen.
    pub amide_h: usize,
    /// Amide carbonyl oxygen (acceptor).
    pub carbonyl_o: usize,
    /// Hydroxyl hydrogen (donor).
    pub hydroxyl_h: usize,
    /// Parent oxygen of the hydroxyl hydrogen.
    pub hydroxyl_o: usize,
}

/// Geometric acceptance thresholds of the hydrogen-bond criterion.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    /// Maximum hydrogen-to-acceptor distance in Å.
    pub max_acceptor_distance: f64,
    /// Minimum donor-H-acceptor angle in degrees.
    pub min_donor_angle: f64,
    /// Distance in Å below which a hydrogen counts as covalently bound to a
    /// heavy atom.
    pub covalent_cutoff: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            max_acceptor_distance: 2.5,
            min_donor_angle: 130.0,
            covalent_cutoff: 1.2,
        }
    }
}

/// One substituent class: the label to emit when any of its target acceptor
/// atoms shows up among the amide-donor partners.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SubstituentEntry {
    pub label: String,
    pub targets: Vec<String>,
}

/// One ring-closing geometry: the snapshot is flagged cyclic when the donor
/// partner appears in the amide-donor list and the acceptor partner in the
/// carbonyl-acceptor list, for any configured rule.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CyclicRule {
    pub donor_partner: String,
    pub acceptor_partner: String,
}

/// Full per-dataset configuration of the classifier.
///
/// Substituent entries are matched (and emitted) in declaration order, so
/// they are kept as a list rather than a map.
#[derive(Debug, Clone, Deserialize)]
pub struct ProbeConfig {
    /// Constant added to every canonical site index for this topology.
    #[serde(default)]
    pub index_offset: usize,

    pub sites: SiteSpec,

    #[serde(default)]
    pub thresholds: Thresholds,

    #[serde(default)]
    pub substituents: Vec<SubstituentEntry>,

    #[serde(default)]
    pub cyclic_rules: Vec<CyclicRule>,
}

impl ProbeConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}
