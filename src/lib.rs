//! Geometric hydrogen-bond descriptors and NMR-shift agreement metrics for
//! drug/polymer dispersion snapshots.
//!
//! The crate sweeps a directory of `.xyz` snapshots from an MD/NMR
//! crystallography workflow, classifies three monitored donor/acceptor
//! motifs per snapshot with a distance + angle criterion, tags the polymer
//! substituent the amide donor binds to, flags ring-closing (cyclic)
//! double hydrogen bonds, and scores predicted chemical shifts against an
//! experimental reference by RMSE.
//!
//! # Features
//!
//! - **Hydrogen-bond classification** — fixed-donor and open-acceptor scans
//!   over O/N atoms with configurable thresholds (2.5 Å, 130°, 1.2 Å
//!   covalent cutoff by default)
//! - **Topology-agnostic configuration** — site indices, substituent tables
//!   and cyclic rules live in a per-dataset TOML file; renumbered topologies
//!   reuse the same canonical indices through a constant offset
//! - **Shift RMSE aggregation** — drug vs matrix agreement per nucleus and
//!   combined, plus the distance-to-origin screening metric
//! - **Batch sweeps** — per-file fault isolation, deterministic ordering,
//!   parallel across files
//!
//! # Quick Start
//!
//! The classifier entry point is [`probe::probe`], which takes a parsed
//! [`Snapshot`] and a [`ProbeConfig`] and produces an [`HbondReport`]:
//!
//! ```
//! use hbond_probe::{Atom, Element, Snapshot};
//! use hbond_probe::probe::{probe, ProbeConfig};
//!
//! // A minimal amide fragment with one acceptor in range
//! let snapshot = Snapshot::new(vec![
//!     Atom::new(Element::N, [0.0, 0.0, 0.0]),
//!     Atom::new(Element::H, [1.0, 0.0, 0.0]),
//!     Atom::new(Element::O, [0.0, 8.0, 0.0]),
//!     Atom::new(Element::H, [10.0, 0.0, 0.0]),
//!     Atom::new(Element::O, [9.03, 0.0, 0.0]),
//!     Atom::new(Element::O, [3.0, 0.0, 0.0]),
//! ]);
//!
//! let config = ProbeConfig::from_toml_str(r#"
//!     [sites]
//!     amide_n = 1
//!     amide_h = 2
//!     carbonyl_o = 3
//!     hydroxyl_h = 4
//!     hydroxyl_o = 5
//!
//!     [[substituents]]
//!     label = "M"
//!     targets = ["O6"]
//! "#).unwrap();
//!
//! let report = probe(&snapshot, &config)?;
//! assert_eq!(report.amide_donor, vec!["O6".to_string()]);
//! assert_eq!(report.substituent, "M");
//! assert!(!report.cyclic_hbond);
//! # Ok::<(), hbond_probe::probe::Error>(())
//! ```
//!
//! # Module Organization
//!
//! - [`model`] — atoms, elements and the per-file [`Snapshot`]
//! - [`io`] — xyz reader, shift-prediction CSV reader, result tables
//! - [`probe`] — the hydrogen-bond geometric classifier
//! - [`shift`] — experimental reference and RMSE aggregation
//! - [`batch`] — directory sweeps with per-file fault isolation
//! - [`report`] — scatter/bar figures of the aggregated tables

pub mod batch;
pub mod io;
pub mod model;
pub mod probe;
pub mod report;
pub mod shift;

pub use model::{Atom, Element, ParseElementError, Snapshot};

pub use probe::{
    CyclicRule, HbondReport, ProbeConfig, SiteSpec, SubstituentEntry, Thresholds,
};

pub use io::{EnergyRecord, InteractionRecord, RmseRecord, ShiftPredictions};

pub use shift::Reference;

pub use batch::{BatchOutcome, Failure};
