use crate::io::error::Error;
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

const COL_INDEX: &str = "Atom Index";
const COL_TYPE: &str = "Atom Type";
const COL_SHIFT: &str = "Chemical Shift (ppm)";

/// Predicted isotropic chemical shifts for one snapshot, keyed by 1-based
/// atom index and split by nucleus.
#[derive(Debug, Clone, Default)]
pub struct ShiftPredictions {
    pub carbon: HashMap<usize, f64>,
    pub hydrogen: HashMap<usize, f64>,
}

/// Reads a shift-prediction CSV with `Atom Index`, `Atom Type` and
/// `Chemical Shift (ppm)` columns. Rows whose index or shift fails to parse
/// are skipped (the prediction model leaves the shift blank for nuclei it
/// does not calibrate).
pub fn read_predictions<R: Read>(reader: R) -> Result<ShiftPredictions, Error> {
    let mut csv_reader = csv::ReaderBuilder::new().from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let idx_col = column(&headers, COL_INDEX)?;
    let type_col = column(&headers, COL_TYPE)?;
    let shift_col = column(&headers, COL_SHIFT)?;

    let mut predictions = ShiftPredictions::default();

    for (row, record) in csv_reader.records().enumerate() {
        let record = record?;

        let index = record.get(idx_col).and_then(|s| s.trim().parse::<usize>().ok());
        let shift = record.get(shift_col).and_then(|s| s.trim().parse::<f64>().ok());
        let (Some(index), Some(shift)) = (index, shift) else {
            log::debug!("skipping non-numeric prediction row {}", row + 1);
            continue;
        };

        match record.get(type_col).map(str::trim) {
            Some("C") => {
                predictions.carbon.insert(index, shift);
            }
            Some("H") => {
                predictions.hydrogen.insert(index, shift);
            }
            _ => {}
        }
    }

    Ok(predictions)
}

pub fn read_predictions_file(path: &Path) -> Result<ShiftPredictions, Error> {
    let file = File::open(path)?;
    read_predictions(file)
}

fn column(headers: &csv::StringRecord, name: &'static str) -> Result<usize, Error> {
    headers
        .iter()
        .position(|h| h.trim() == name)
        .ok_or(Error::MissingColumn(name))
}
