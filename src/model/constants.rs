use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

// ---------------------------------------------------------------------------
// Physical constants
// ---------------------------------------------------------------------------

/// Duration of the liftoff burn charged as gravity loss, s.
pub const GRAVITY_LOSS_BURN_TIME: f64 = 10.0;

/// Fixed model constants shared by every calculation.
///
/// Passed by reference into each operation rather than held as module state,
/// so the calculators stay pure and can be tested with alternate sets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicalConstants {
    pub specific_impulse_s: f64,  // s
    pub standard_gravity: f64,    // m/s^2
    pub meters_to_inches: f64,
    pub kg_to_lbs: f64,
    pub structural_fraction: f64, // dry structure as a fraction of propellant
    pub payload_kg: f64,          // reference payload carried by the core
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self {
            specific_impulse_s: 250.0,
            standard_gravity: 9.80665,
            meters_to_inches: 39.3700787402,
            kg_to_lbs: 2.20462,
            structural_fraction: 0.22,
            payload_kg: 250.0,
        }
    }
}

impl PhysicalConstants {
    /// Effective exhaust velocity, m/s.
    pub fn exhaust_velocity(&self) -> f64 {
        self.standard_gravity * self.specific_impulse_s
    }

    /// Reference payload in pounds-mass, the internal unit.
    pub fn payload_lb(&self) -> f64 {
        self.payload_kg * self.kg_to_lbs
    }

    /// Velocity penalty applied to the liftoff burn, m/s.
    pub fn gravity_loss(&self) -> f64 {
        self.standard_gravity * GRAVITY_LOSS_BURN_TIME
    }

    /// Load an alternate constant set from a JSON file. Fields missing from
    /// the file keep their default values.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConstantsError> {
        let file = File::open(path.as_ref())?;
        let constants: PhysicalConstants = serde_json::from_reader(BufReader::new(file))?;
        let constants = constants.validate()?;
        debug!(
            isp = constants.specific_impulse_s,
            payload_kg = constants.payload_kg,
            "loaded constants"
        );
        Ok(constants)
    }

    fn validate(self) -> Result<Self, ConstantsError> {
        let fields = [
            ("specific_impulse_s", self.specific_impulse_s),
            ("standard_gravity", self.standard_gravity),
            ("meters_to_inches", self.meters_to_inches),
            ("kg_to_lbs", self.kg_to_lbs),
            ("structural_fraction", self.structural_fraction),
            ("payload_kg", self.payload_kg),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(ConstantsError::OutOfRange { name, value });
            }
        }
        if self.structural_fraction >= 1.0 {
            return Err(ConstantsError::OutOfRange {
                name: "structural_fraction",
                value: self.structural_fraction,
            });
        }
        Ok(self)
    }
}

/// Errors from loading a constants file.
#[derive(Debug, Error)]
pub enum ConstantsError {
    #[error("failed to read constants file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse constants file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("constant `{name}` is out of range: {value}")]
    OutOfRange { name: &'static str, value: f64 },
}
