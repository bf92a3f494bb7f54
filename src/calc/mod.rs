pub mod pop_out;
pub mod result;
pub mod three_stage;

pub use pop_out::{pop_out, BoosterLayout, BoosterSide};
pub use result::CalculationResult;
pub use three_stage::three_stage;

use serde::Serialize;

use crate::input::InputRecord;
use crate::model::PhysicalConstants;

/// Both calculators evaluated on one input record.
#[derive(Debug, Clone, Serialize)]
pub struct DesignReport {
    pub three_stage: CalculationResult,
    pub pop_out: CalculationResult,
}

/// Evaluate the three-stage and pop-out configurations together.
pub fn evaluate(input: &InputRecord, constants: &PhysicalConstants) -> DesignReport {
    DesignReport {
        three_stage: three_stage(input, constants),
        pop_out: pop_out(input, constants),
    }
}
