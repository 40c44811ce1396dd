use crate::io::error::Error;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

/// One result row of the hydrogen-bond sweep. Partner lists are rendered as
/// `", "`-joined label strings (empty when no partner was found); the cyclic
/// flag round-trips through CSV as the literals `true`/`false`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionRecord {
    pub file: String,
    pub substituent: String,
    pub amide_donor: String,
    pub carbonyl_acceptor: String,
    pub hydroxyl_donor: String,
    pub cyclic_hbond: bool,
}

/// One result row of the chemical-shift RMSE sweep. Fields are `None` when
/// no reference/prediction overlap existed; they serialize as empty cells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RmseRecord {
    pub file: String,
    pub drug_c_rmse: Option<f64>,
    pub drug_h_rmse: Option<f64>,
    pub drug_rmse: Option<f64>,
    pub matrix_c_rmse: Option<f64>,
    pub matrix_h_rmse: Option<f64>,
    pub matrix_rmse: Option<f64>,
    pub distance_to_origin: Option<f64>,
}

/// Per-snapshot binding energy, joined against the other tables by file stem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyRecord {
    pub file: String,
    pub binding_energy_ev: f64,
}

pub fn write_rows<W: Write, T: Serialize>(writer: W, rows: &[T]) -> Result<(), Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush().map_err(|e| Error::Io { source: e })?;
    Ok(())
}

pub fn write_rows_file<T: Serialize>(path: &Path, rows: &[T]) -> Result<(), Error> {
    let file = File::create(path)?;
    write_rows(file, rows)
}

pub fn read_rows<R: Read, T: for<'de> Deserialize<'de>>(reader: R) -> Result<Vec<T>, Error> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut rows = Vec::new();
    for row in csv_reader.deserialize() {
        rows.push(row?);
    }
    Ok(rows)
}

pub fn read_rows_file<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<Vec<T>, Error> {
    let file = File::open(path)?;
    read_rows(file)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> InteractionRecord {
        InteractionRecord {
            file: "frame_0001.xyz".to_string(),
            substituent: "S,M".to_string(),
            amide_donor: "O32, O35".to_string(),
            carbonyl_acceptor: "O81".to_string(),
            hydroxyl_donor: String::new(),
            cyclic_hbond: true,
        }
    }

    #[test]
    fn interaction_rows_round_trip() {
        let rows = vec![
            sample_record(),
            InteractionRecord {
                file: "frame_0002.xyz".to_string(),
                substituent: String::new(),
                amide_donor: String::new(),
                carbonyl_acceptor: String::new(),
                hydroxyl_donor: String::new(),
                cyclic_hbond: false,
            },
        ];

        let mut buffer = Vec::new();
        write_rows(&mut buffer, &rows).unwrap();
        let restored: Vec<InteractionRecord> = read_rows(buffer.as_slice()).unwrap();

        assert_eq!(restored, rows);
        assert_eq!(restored[0].substituent, "S,M");
        assert!(restored[0].cyclic_hbond);
        assert!(!restored[1].cyclic_hbond);
    }

    #[test]
    fn cyclic_flag_serializes_as_literal_true_false() {
        let mut buffer = Vec::new();
        write_rows(&mut buffer, &[sample_record()]).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.lines().nth(1).unwrap().ends_with(",true"));
    }

    #[test]
    fn rmse_rows_round_trip_with_empty_cells() {
        let rows = vec![RmseRecord {
            file: "frame_0001".to_string(),
            drug_c_rmse: Some(12.5),
            drug_h_rmse: None,
            drug_rmse: Some(10.0),
            matrix_c_rmse: Some(4.0),
            matrix_h_rmse: Some(1.5),
            matrix_rmse: Some(3.0),
            distance_to_origin: Some(10.440306508910551),
        }];

        let mut buffer = Vec::new();
        write_rows(&mut buffer, &rows).unwrap();
        let text = String::from_utf8(buffer.clone()).unwrap();
        assert!(text.contains(",,"));

        let restored: Vec<RmseRecord> = read_rows(buffer.as_slice()).unwrap();
        assert_eq!(restored, rows);
    }
}
