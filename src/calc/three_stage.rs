use crate::input::InputRecord;
use crate::model::{burn, derive_masses, PhysicalConstants};

use super::result::CalculationResult;

// ---------------------------------------------------------------------------
// Three-stage calculator (tanks burned in strict sequence)
// ---------------------------------------------------------------------------

/// Delta-v for three tanks burned in sequence, tank 1 dropped first.
///
/// Burn k consumes tank k's propellant while carrying tank k's structure,
/// all upper tanks' propellant, and the reference payload; the spent
/// structure is dropped before burn k+1. Gravity loss applies to the liftoff
/// burn only.
pub fn three_stage(input: &InputRecord, constants: &PhysicalConstants) -> CalculationResult {
    let tanks = input
        .stage_slots()
        .map(|value| derive_masses(value, input.mode, constants));
    let payload = constants.payload_lb();

    let mut burns = Vec::with_capacity(tanks.len());
    for k in 0..tanks.len() {
        let upper_propellant: f64 = tanks[k + 1..].iter().map(|t| t.propellant_lb).sum();
        let m0 = tanks[k].propellant_lb + upper_propellant + payload;
        let mf = upper_propellant + tanks[k].structural_lb + payload;
        burns.push(burn(m0, mf, k == 0, constants));
    }

    CalculationResult::from_burns(&burns, tanks.to_vec())
}
