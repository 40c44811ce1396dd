mod figures;

pub use figures::{
    energy_bars, keep_closest, mean_binding_by_class, rmse_scatter, Classes, EnergyPoint,
    ScatterPoint, EV_TO_KJ_PER_MOL,
};
