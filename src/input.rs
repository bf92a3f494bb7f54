use serde::{Deserialize, Deserializer, Serialize};

// ---------------------------------------------------------------------------
// Input record (boundary contract with the caller)
// ---------------------------------------------------------------------------

/// Which slot family is authoritative for a calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    #[default]
    Length,
    Mass,
}

/// One calculation request: a mode discriminator plus up to six numeric
/// values keyed by slot. Slots 1-3 are the sequential stages; slots 4-6 are
/// core, booster 1, and booster 2 of the pop-out configuration.
///
/// Every slot is optional. Missing, null, or unparseable values deserialize
/// to zero, which reads as "this tank does not exist".
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InputRecord {
    pub mode: InputMode,
    #[serde(deserialize_with = "lenient_f64")]
    pub length1: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub length2: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub length3: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub length4: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub length5: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub length6: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub mass1: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub mass2: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub mass3: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub mass4: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub mass5: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub mass6: f64,
}

impl InputRecord {
    /// Record in length mode: tank lengths in meters.
    pub fn from_lengths(tanks: [f64; 3], pop_out: [f64; 3]) -> Self {
        Self {
            mode: InputMode::Length,
            length1: tanks[0],
            length2: tanks[1],
            length3: tanks[2],
            length4: pop_out[0],
            length5: pop_out[1],
            length6: pop_out[2],
            ..Self::default()
        }
    }

    /// Record in mass mode: propellant masses in kilograms.
    pub fn from_masses(tanks: [f64; 3], pop_out: [f64; 3]) -> Self {
        Self {
            mode: InputMode::Mass,
            mass1: tanks[0],
            mass2: tanks[1],
            mass3: tanks[2],
            mass4: pop_out[0],
            mass5: pop_out[1],
            mass6: pop_out[2],
            ..Self::default()
        }
    }

    /// Raw values for the three sequential stage slots, per the active mode.
    pub fn stage_slots(&self) -> [f64; 3] {
        match self.mode {
            InputMode::Length => [self.length1, self.length2, self.length3],
            InputMode::Mass => [self.mass1, self.mass2, self.mass3],
        }
    }

    /// Raw values for core, booster 1, booster 2, per the active mode.
    pub fn pop_out_slots(&self) -> [f64; 3] {
        match self.mode {
            InputMode::Length => [self.length4, self.length5, self.length6],
            InputMode::Mass => [self.mass4, self.mass5, self.mass6],
        }
    }
}

/// Accept numbers, numeric strings, null, or garbage; everything that is not
/// a number comes out as zero.
fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = serde_json::Value::deserialize(deserializer)?;
    Ok(match raw {
        serde_json::Value::Number(n) => n.as_f64().unwrap_or(0.0),
        serde_json::Value::String(s) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    })
}
