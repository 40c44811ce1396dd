pub mod snapshot;
pub mod types;

pub use snapshot::{Atom, Snapshot};
pub use types::{Element, ParseElementError};
