use crate::input::InputRecord;
use crate::model::{burn, derive_masses, PhysicalConstants, StageMasses};

use super::result::CalculationResult;

// ---------------------------------------------------------------------------
// Pop-out calculator (core stage + up to two side boosters)
// ---------------------------------------------------------------------------

/// Which side booster slot is populated in a one-booster layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoosterSide {
    First,
    Second,
}

/// Burn topology, decided once per call from which booster slots hold
/// propellant. There is no separate user flag: the layout always agrees
/// with the supplied geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoosterLayout {
    CoreAlone,
    OneBooster(BoosterSide),
    TwoBoosters,
}

impl BoosterLayout {
    pub fn detect(booster1: &StageMasses, booster2: &StageMasses) -> Self {
        match (booster1.is_present(), booster2.is_present()) {
            (false, false) => BoosterLayout::CoreAlone,
            (true, false) => BoosterLayout::OneBooster(BoosterSide::First),
            (false, true) => BoosterLayout::OneBooster(BoosterSide::Second),
            (true, true) => BoosterLayout::TwoBoosters,
        }
    }
}

/// Delta-v for a core stage with 0, 1, or 2 side boosters.
///
/// Boosters burn in parallel with the core and are jettisoned before the
/// core continues alone; the reference payload rides on the core only.
/// With both boosters present the burn sequence drops both boosters first,
/// then booster 1's share, then flies the core solo, mirroring the
/// three-stage pattern.
pub fn pop_out(input: &InputRecord, constants: &PhysicalConstants) -> CalculationResult {
    let [core, booster1, booster2] = input
        .pop_out_slots()
        .map(|value| derive_masses(value, input.mode, constants));
    let payload = constants.payload_lb();

    // The core-alone burn closes out every topology.
    let core_m0 = core.propellant_lb + payload;
    let core_mf = core.structural_lb + payload;

    match BoosterLayout::detect(&booster1, &booster2) {
        BoosterLayout::CoreAlone => {
            // Sole burn is the liftoff burn.
            let burns = [burn(core_m0, core_mf, true, constants)];
            CalculationResult::from_burns(&burns, vec![core])
        }
        BoosterLayout::OneBooster(side) => {
            let side_tank = match side {
                BoosterSide::First => booster1,
                BoosterSide::Second => booster2,
            };
            let m0 = core.propellant_lb + side_tank.propellant_lb + payload;
            let mf = core.structural_lb + side_tank.structural_lb + payload;
            let burns = [
                burn(m0, mf, true, constants),
                burn(core_m0, core_mf, false, constants),
            ];
            CalculationResult::from_burns(&burns, vec![core, side_tank])
        }
        BoosterLayout::TwoBoosters => {
            let m0_1 =
                core.propellant_lb + booster1.propellant_lb + booster2.propellant_lb + payload;
            let mf_1 =
                core.structural_lb + booster1.structural_lb + booster2.structural_lb + payload;
            let m0_2 = core.propellant_lb + booster1.propellant_lb + payload;
            let mf_2 = core.structural_lb + booster1.structural_lb + payload;
            let burns = [
                burn(m0_1, mf_1, true, constants),
                burn(m0_2, mf_2, false, constants),
                burn(core_m0, core_mf, false, constants),
            ];
            CalculationResult::from_burns(&burns, vec![core, booster1, booster2])
        }
    }
}
