use std::cmp::Ordering;

use serde::Serialize;
use tracing::debug;

use crate::calc::{three_stage, CalculationResult};
use crate::input::InputRecord;
use crate::model::PhysicalConstants;

// ---------------------------------------------------------------------------
// Length-ratio sweep over three-stage splits
// ---------------------------------------------------------------------------

/// Grid definition for a three-stage length-split sweep.
#[derive(Debug, Clone)]
pub struct SweepConfig {
    pub total_length_m: f64,
    pub grid_steps: usize, // samples per ratio axis
    pub min_ratio: f64,    // smallest share the first two stages may take
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            total_length_m: 10.0,
            grid_steps: 100,
            min_ratio: 0.1,
        }
    }
}

/// One evaluated split of the total tank length.
#[derive(Debug, Clone, Serialize)]
pub struct SweepPoint {
    pub lengths_m: [f64; 3],
    pub result: CalculationResult,
}

/// Evaluate the three-stage calculator over every (r1, r2, 1 - r1 - r2)
/// split of the total length on the configured grid. Combinations where the
/// first two shares already exhaust the total are skipped; the third stage
/// takes whatever remains, possibly nothing.
pub fn sweep_three_stage(config: &SweepConfig, constants: &PhysicalConstants) -> Vec<SweepPoint> {
    let mut points = Vec::new();
    for i in 0..config.grid_steps {
        let r1 = ratio_sample(config, i);
        for j in 0..config.grid_steps {
            let r2 = ratio_sample(config, j);
            if r1 + r2 > 1.0 + 1e-12 {
                continue;
            }
            let r3 = (1.0 - r1 - r2).max(0.0);
            let lengths_m = [
                r1 * config.total_length_m,
                r2 * config.total_length_m,
                r3 * config.total_length_m,
            ];
            let input = InputRecord::from_lengths(lengths_m, [0.0; 3]);
            points.push(SweepPoint {
                lengths_m,
                result: three_stage(&input, constants),
            });
        }
    }
    debug!(splits = points.len(), total_m = config.total_length_m, "sweep complete");
    points
}

/// The highest-total-delta-v split, if the sweep produced any.
pub fn best(points: &[SweepPoint]) -> Option<&SweepPoint> {
    points.iter().max_by(|a, b| compare_dv(a, b))
}

/// Splits ordered by descending total delta-v; infeasible (zeroed) splits
/// sink to the back.
pub fn top_n(points: &[SweepPoint], n: usize) -> Vec<&SweepPoint> {
    let mut sorted: Vec<&SweepPoint> = points.iter().collect();
    sorted.sort_by(|a, b| compare_dv(b, a));
    sorted.truncate(n);
    sorted
}

// total_delta_v is never NaN (infeasible splits are zeroed).
fn compare_dv(a: &SweepPoint, b: &SweepPoint) -> Ordering {
    a.result
        .total_delta_v
        .partial_cmp(&b.result.total_delta_v)
        .unwrap_or(Ordering::Equal)
}

fn ratio_sample(config: &SweepConfig, i: usize) -> f64 {
    if config.grid_steps <= 1 {
        return config.min_ratio;
    }
    let t = i as f64 / (config.grid_steps - 1) as f64;
    config.min_ratio + (1.0 - config.min_ratio) * t
}
