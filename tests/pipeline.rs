//! End-to-end sweep: xyz directory -> classification -> CSV -> re-read.

use std::fs;

use hbond_probe::batch;
use hbond_probe::io::table::{self, InteractionRecord};
use hbond_probe::probe::ProbeConfig;
use hbond_probe::shift::Reference;

const DATASET: &str = r#"
[sites]
amide_n = 1
amide_h = 2
carbonyl_o = 3
hydroxyl_h = 4
hydroxyl_o = 5

[[substituents]]
label = "M"
targets = ["O6"]

[[cyclic_rules]]
donor_partner = "O6"
acceptor_partner = "O8"
"#;

/// Amide N-H donor aimed at O6, an O8-H9 hydroxyl aimed at the carbonyl O3,
/// and the hydroxyl H4 aimed at O7.
const BONDED_FRAME: &str = "\
9
bonded frame
N 0.0 0.0 0.0
H 1.0 0.0 0.0
O 0.0 8.0 0.0
H 10.0 0.0 0.0
O 9.03 0.0 0.0
O 3.0 0.0 0.0
O 12.0 0.0 0.0
O 0.0 5.23 0.0
H 0.0 6.2 0.0
";

/// Same sites, but the amide acceptor O6 moved out of range.
const UNBONDED_FRAME: &str = "\
9
unbonded frame
N 0.0 0.0 0.0
H 1.0 0.0 0.0
O 0.0 8.0 0.0
H 10.0 0.0 0.0
O 9.03 0.0 0.0
O 30.0 0.0 0.0
O 12.0 0.0 0.0
O 0.0 5.23 0.0
H 0.0 6.2 0.0
";

/// Too few atoms for the configured sites.
const TRUNCATED_FRAME: &str = "\
2
truncated frame
N 0.0 0.0 0.0
H 1.0 0.0 0.0
";

#[test]
fn xyz_sweep_to_csv_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("frame_0001.xyz"), BONDED_FRAME).unwrap();
    fs::write(dir.path().join("frame_0002.xyz"), UNBONDED_FRAME).unwrap();
    fs::write(dir.path().join("frame_bad.xyz"), TRUNCATED_FRAME).unwrap();
    fs::write(dir.path().join("notes.txt"), "not a snapshot").unwrap();

    let config = ProbeConfig::from_toml_str(DATASET).unwrap();
    let outcome = batch::sweep_snapshots(dir.path(), &config, |_| {}).unwrap();

    assert_eq!(outcome.records.len(), 2);
    assert_eq!(outcome.failures.len(), 1);
    assert_eq!(outcome.processed(), 3);
    assert_eq!(outcome.failures[0].file, "frame_bad.xyz");

    // deterministic name order
    assert_eq!(outcome.records[0].file, "frame_0001.xyz");
    assert_eq!(outcome.records[1].file, "frame_0002.xyz");

    let bonded = &outcome.records[0];
    assert_eq!(bonded.substituent, "M");
    assert_eq!(bonded.amide_donor, "O6");
    assert_eq!(bonded.carbonyl_acceptor, "O8");
    assert_eq!(bonded.hydroxyl_donor, "O7");
    assert!(bonded.cyclic_hbond);

    let unbonded = &outcome.records[1];
    assert_eq!(unbonded.substituent, "");
    assert_eq!(unbonded.amide_donor, "");
    assert!(!unbonded.cyclic_hbond);

    let csv_path = dir.path().join("hbonds.csv");
    table::write_rows_file(&csv_path, &outcome.records).unwrap();
    let restored: Vec<InteractionRecord> = table::read_rows_file(&csv_path).unwrap();
    assert_eq!(restored, outcome.records);
}

#[test]
fn prediction_sweep_strips_the_stem_suffix() {
    let dir = tempfile::tempdir().unwrap();

    let predictions = "\
Atom Index,Atom Type,Shielding (ppm),Chemical Shift (ppm),Uncertainty (ppm)
1,C,100.0,60.0,0.5
2,C,100.0,25.1,0.5
3,H,25.0,8.0,0.1
";
    fs::write(
        dir.path().join("frame_0001_ShiftML_results.csv"),
        predictions,
    )
    .unwrap();
    fs::write(dir.path().join("broken_ShiftML_results.csv"), "no,such,columns\n1,2,3\n").unwrap();

    let reference = Reference::from_toml_str(
        r#"
[[carbon]]
shift = 58.0
atoms = [1]

[[carbon]]
shift = 24.1
atoms = [2]

[[hydrogen]]
shift = 8.5
atoms = [3]

[drug]
carbon = [2]
hydrogen = [3]
"#,
    )
    .unwrap();

    let outcome =
        batch::sweep_predictions(dir.path(), &reference, "_ShiftML_results", |_| {}).unwrap();

    assert_eq!(outcome.records.len(), 1);
    assert_eq!(outcome.failures.len(), 1);
    assert_eq!(outcome.failures[0].file, "broken_ShiftML_results.csv");

    let record = &outcome.records[0];
    assert_eq!(record.file, "frame_0001");
    // matrix carbon: atom 1, |60.0 - 58.0| = 2.0
    assert!((record.matrix_c_rmse.unwrap() - 2.0).abs() < 1e-12);
    // drug carbon: atom 2, |25.1 - 24.1| = 1.0
    assert!((record.drug_c_rmse.unwrap() - 1.0).abs() < 1e-12);
    // drug hydrogen: atom 3, |8.0 - 8.5| = 0.5
    assert!((record.drug_h_rmse.unwrap() - 0.5).abs() < 1e-12);
    assert!(record.matrix_h_rmse.is_none());
    assert!(record.distance_to_origin.is_some());
}
