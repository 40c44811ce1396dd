pub mod error;
pub mod shifts;
pub mod table;
pub mod xyz;

pub use error::Error;
pub use shifts::ShiftPredictions;
pub use table::{EnergyRecord, InteractionRecord, RmseRecord};
