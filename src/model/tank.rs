use serde::Serialize;

use crate::input::InputMode;

use super::constants::PhysicalConstants;

// ---------------------------------------------------------------------------
// Tank sizing (mass model)
// ---------------------------------------------------------------------------

/// Empirical tank sizing coefficient: lb of propellant per cubic inch of
/// tank envelope. Fixed calibration constant, not derived.
pub const TANK_SIZING_COEFF: f64 = 0.04;

/// Propellant and structural mass for one tank or booster slot, lb.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StageMasses {
    pub propellant_lb: f64,
    pub structural_lb: f64,
}

impl StageMasses {
    /// A zero-propellant slot stands for a tank that does not exist.
    pub fn is_present(&self) -> bool {
        self.propellant_lb > 0.0
    }
}

/// Convert one slot's raw input into propellant and structural mass.
///
/// Length mode: meters to inches, then `TANK_SIZING_COEFF * inches^3`.
/// Mass mode: kilograms to pounds. Negative or non-finite input reads as an
/// absent tank and is coerced to zero rather than rejected.
pub fn derive_masses(value: f64, mode: InputMode, constants: &PhysicalConstants) -> StageMasses {
    let value = if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    };
    let propellant_lb = match mode {
        InputMode::Length => {
            let inches = value * constants.meters_to_inches;
            TANK_SIZING_COEFF * inches.powi(3)
        }
        InputMode::Mass => value * constants.kg_to_lbs,
    };
    StageMasses {
        propellant_lb,
        structural_lb: propellant_lb * constants.structural_fraction,
    }
}
