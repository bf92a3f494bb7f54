use serde::Serialize;

use crate::model::{BurnResult, StageMasses};

// ---------------------------------------------------------------------------
// Calculation result
// ---------------------------------------------------------------------------

/// Result of one calculator call.
///
/// `stage_delta_vs` and `mass_fractions` are parallel vectors ordered by
/// burn. `tanks` holds the derived mass breakdown for every participating
/// slot in burn-stack order; it is the diagnostic channel, so a caller can
/// see why a design is infeasible without the calculator printing anything.
#[derive(Debug, Clone, Serialize)]
pub struct CalculationResult {
    #[serde(rename = "delta_v")]
    pub total_delta_v: f64,       // m/s
    pub stage_delta_vs: Vec<f64>, // m/s per burn
    pub mass_fractions: Vec<f64>, // m0 / mf per burn
    pub tanks: Vec<StageMasses>,
}

impl CalculationResult {
    /// True when every burn cleared the mass-fraction threshold.
    pub fn is_feasible(&self) -> bool {
        self.mass_fractions.iter().all(|mf| *mf > 1.0)
    }

    /// Assemble a result from a burn sequence with the all-or-nothing
    /// policy: one infeasible burn zeroes every delta-v entry and the total,
    /// while the mass fractions are reported exactly as computed.
    pub(crate) fn from_burns(burns: &[BurnResult], tanks: Vec<StageMasses>) -> Self {
        let mass_fractions: Vec<f64> = burns.iter().map(|b| b.mass_fraction).collect();
        if burns.iter().all(BurnResult::is_feasible) {
            let stage_delta_vs: Vec<f64> = burns.iter().map(|b| b.delta_v).collect();
            CalculationResult {
                total_delta_v: stage_delta_vs.iter().sum(),
                stage_delta_vs,
                mass_fractions,
                tanks,
            }
        } else {
            CalculationResult {
                total_delta_v: 0.0,
                stage_delta_vs: vec![0.0; burns.len()],
                mass_fractions,
                tanks,
            }
        }
    }
}
