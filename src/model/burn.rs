use serde::Serialize;

use super::constants::PhysicalConstants;

// ---------------------------------------------------------------------------
// Burn primitive (rocket equation for a single burn)
// ---------------------------------------------------------------------------

/// Outcome of one burn.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct BurnResult {
    pub mass_fraction: f64, // m0 / mf, dimensionless
    pub delta_v: f64,       // m/s, zero when the burn is infeasible
}

impl BurnResult {
    /// A burn is feasible only when wet mass exceeds dry mass. A NaN
    /// fraction (0/0, nothing on the pad) counts as infeasible.
    pub fn is_feasible(&self) -> bool {
        self.mass_fraction > 1.0
    }
}

/// Apply the rocket equation to one burn.
///
/// Masses are lb (the ratio is dimensionless), delta-v is m/s. The liftoff
/// burn carries a fixed gravity-loss penalty; later burns are modeled as
/// near-vacuum coasts with no loss term.
pub fn burn(
    initial_lb: f64,
    final_lb: f64,
    gravity_loss: bool,
    constants: &PhysicalConstants,
) -> BurnResult {
    let mass_fraction = initial_lb / final_lb;
    // Negated comparison so a NaN fraction also lands in the zero branch.
    if !(mass_fraction > 1.0) {
        return BurnResult {
            mass_fraction,
            delta_v: 0.0,
        };
    }

    let mut delta_v = mass_fraction.ln() * constants.exhaust_velocity();
    if gravity_loss {
        delta_v -= constants.gravity_loss();
    }
    BurnResult {
        mass_fraction,
        delta_v,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn vacuum_burn_matches_rocket_equation() {
        let c = PhysicalConstants::default();
        let b = burn(2000.0, 1000.0, false, &c);
        assert_relative_eq!(b.mass_fraction, 2.0, max_relative = 1e-12);
        assert_relative_eq!(
            b.delta_v,
            2.0_f64.ln() * c.exhaust_velocity(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn gravity_loss_subtracts_fixed_penalty() {
        let c = PhysicalConstants::default();
        let vacuum = burn(2000.0, 1000.0, false, &c);
        let liftoff = burn(2000.0, 1000.0, true, &c);
        assert_relative_eq!(
            vacuum.delta_v - liftoff.delta_v,
            c.gravity_loss(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn heavy_stage_cannot_burn() {
        let c = PhysicalConstants::default();
        let b = burn(900.0, 1000.0, false, &c);
        assert!(!b.is_feasible());
        assert_eq!(b.delta_v, 0.0);
        // The sub-1 fraction is still reported for diagnostics.
        assert_relative_eq!(b.mass_fraction, 0.9, max_relative = 1e-12);
    }

    #[test]
    fn break_even_fraction_is_infeasible() {
        let c = PhysicalConstants::default();
        let b = burn(1000.0, 1000.0, true, &c);
        assert!(!b.is_feasible());
        assert_eq!(b.delta_v, 0.0);
    }

    #[test]
    fn empty_pad_propagates_nan_without_panicking() {
        let c = PhysicalConstants::default();
        let b = burn(0.0, 0.0, true, &c);
        assert!(b.mass_fraction.is_nan());
        assert!(!b.is_feasible());
        assert_eq!(b.delta_v, 0.0);
    }
}
