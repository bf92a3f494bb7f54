pub mod calc;
pub mod input;
pub mod io;
pub mod model;
pub mod sweep;

// Convenience re-exports for callers that just want the two operations.
pub mod types {
    pub use crate::calc::pop_out::{BoosterLayout, BoosterSide};
    pub use crate::calc::result::CalculationResult;
    pub use crate::calc::{evaluate, pop_out, three_stage, DesignReport};
    pub use crate::input::{InputMode, InputRecord};
    pub use crate::model::burn::BurnResult;
    pub use crate::model::constants::PhysicalConstants;
    pub use crate::model::tank::StageMasses;
}
