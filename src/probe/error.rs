//! Error types for the hydrogen-bond classifier.

use thiserror::Error;

/// Errors that can occur while classifying a single snapshot.
#[derive(Debug, Error)]
pub enum Error {
    /// A configured site index does not refer to an atom of the snapshot.
    ///
    /// This is a configuration error (wrong index set or wrong topology
    /// offset for the dataset) and is reported loudly instead of yielding an
    /// empty partner list.
    #[error(
        "configured {site} index {index} is out of range for a snapshot with {atom_count} atoms"
    )]
    SiteOutOfRange {
        /// Which site the index was configured for.
        site: &'static str,
        /// The resolved 1-based index (canonical index plus topology offset).
        index: usize,
        /// Number of atoms actually parsed from the snapshot.
        atom_count: usize,
    },

    /// Two atoms of an angle triple coincide, so the angle is undefined.
    #[error("undefined angle for degenerate geometry at {vertex}: {source}")]
    DegenerateGeometry {
        /// Label of the hydrogen at the angle vertex.
        vertex: String,
        source: super::geometry::DegenerateAngle,
    },
}

impl Error {
    pub(crate) fn site_out_of_range(site: &'static str, index: usize, atom_count: usize) -> Self {
        Self::SiteOutOfRange {
            site,
            index,
            atom_count,
        }
    }
}
