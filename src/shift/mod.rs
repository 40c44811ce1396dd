mod reference;

pub use reference::{DrugAtoms, Reference, ReferenceGroup};

use crate::io::shifts::ShiftPredictions;
use crate::io::table::RmseRecord;
use std::collections::{HashMap, HashSet};

/// Which reference atoms participate in an RMSE evaluation.
#[derive(Debug, Clone, Copy)]
pub enum Selection<'a> {
    All,
    Include(&'a HashSet<usize>),
    Exclude(&'a HashSet<usize>),
}

/// Root-mean-square error between experimental and predicted shifts over the
/// selected reference atoms that carry a prediction. `None` when the
/// selection leaves no overlapping atom.
pub fn rmse(
    experimental: &HashMap<usize, f64>,
    predicted: &HashMap<usize, f64>,
    selection: Selection,
) -> Option<f64> {
    let mut sum = 0.0;
    let mut count = 0usize;

    for (atom, exp_shift) in experimental {
        let keep = match selection {
            Selection::All => true,
            Selection::Include(set) => set.contains(atom),
            Selection::Exclude(set) => !set.contains(atom),
        };
        if !keep {
            continue;
        }
        let Some(pred_shift) = predicted.get(atom) else {
            continue;
        };
        let diff = exp_shift - pred_shift;
        sum += diff * diff;
        count += 1;
    }

    (count > 0).then(|| (sum / count as f64).sqrt())
}

/// Computes one RMSE result row for a snapshot's predictions: drug and
/// matrix agreement per nucleus and combined, plus the distance of the
/// (drug, matrix) combined-RMSE point from the origin.
pub fn summarize(
    file: impl Into<String>,
    reference: &Reference,
    predictions: &ShiftPredictions,
) -> RmseRecord {
    let exp_c = reference.carbon_map();
    let exp_h = reference.hydrogen_map();
    let exp_all = reference.combined_map();

    let mut pred_all = predictions.carbon.clone();
    pred_all.extend(predictions.hydrogen.iter().map(|(k, v)| (*k, *v)));

    let drug_c = reference.drug_carbon();
    let drug_h = reference.drug_hydrogen();
    let drug_all = reference.drug_all();

    let drug_rmse = rmse(&exp_all, &pred_all, Selection::Include(&drug_all));
    let matrix_rmse = rmse(&exp_all, &pred_all, Selection::Exclude(&drug_all));

    let distance_to_origin = match (drug_rmse, matrix_rmse) {
        (Some(d), Some(m)) => Some((d * d + m * m).sqrt()),
        _ => None,
    };

    RmseRecord {
        file: file.into(),
        drug_c_rmse: rmse(&exp_c, &predictions.carbon, Selection::Include(&drug_c)),
        drug_h_rmse: rmse(&exp_h, &predictions.hydrogen, Selection::Include(&drug_h)),
        drug_rmse,
        matrix_c_rmse: rmse(&exp_c, &predictions.carbon, Selection::Exclude(&drug_c)),
        matrix_h_rmse: rmse(&exp_h, &predictions.hydrogen, Selection::Exclude(&drug_h)),
        matrix_rmse,
        distance_to_origin,
    }
}
