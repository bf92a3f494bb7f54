pub mod burn;
pub mod constants;
pub mod tank;

pub use burn::{burn, BurnResult};
pub use constants::{ConstantsError, PhysicalConstants, GRAVITY_LOSS_BURN_TIME};
pub use tank::{derive_masses, StageMasses, TANK_SIZING_COEFF};
