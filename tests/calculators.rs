use approx::assert_relative_eq;
use booster_calc::types::{
    pop_out, three_stage, InputRecord, PhysicalConstants,
};

// ---------------------------------------------------------------------------
// End-to-end scenarios through the public API
// ---------------------------------------------------------------------------

#[test]
fn three_tanks_in_length_mode() {
    let c = PhysicalConstants::default();
    let input = InputRecord::from_lengths([10.0, 8.0, 6.0], [0.0; 3]);
    let result = three_stage(&input, &c);

    assert!(result.total_delta_v.is_finite());
    assert!(result.total_delta_v > 0.0);
    assert_eq!(result.stage_delta_vs.len(), 3);
    assert_eq!(result.mass_fractions.len(), 3);
    assert!(result.mass_fractions.iter().all(|mf| *mf > 1.0));
}

#[test]
fn pop_out_core_only() {
    let c = PhysicalConstants::default();
    let input = InputRecord::from_lengths([0.0; 3], [12.0, 0.0, 0.0]);
    let result = pop_out(&input, &c);
    assert_eq!(result.stage_delta_vs.len(), 1);
}

#[test]
fn pop_out_single_booster() {
    let c = PhysicalConstants::default();
    let input = InputRecord::from_lengths([0.0; 3], [12.0, 6.0, 0.0]);
    let result = pop_out(&input, &c);

    assert_eq!(result.stage_delta_vs.len(), 2);
    // Gravity loss shows up in the liftoff burn only.
    let v_eq = c.exhaust_velocity();
    assert_relative_eq!(
        result.stage_delta_vs[0],
        result.mass_fractions[0].ln() * v_eq - c.gravity_loss(),
        max_relative = 1e-12
    );
    assert_relative_eq!(
        result.stage_delta_vs[1],
        result.mass_fractions[1].ln() * v_eq,
        max_relative = 1e-12
    );
}

#[test]
fn pop_out_dual_boosters() {
    let c = PhysicalConstants::default();
    let input = InputRecord::from_lengths([0.0; 3], [12.0, 6.0, 6.0]);
    let result = pop_out(&input, &c);
    assert_eq!(result.stage_delta_vs.len(), 3);
    assert!(result.total_delta_v > 0.0);
}

#[test]
fn empty_inputs_degenerate_to_zero() {
    let c = PhysicalConstants::default();
    let input = InputRecord::default();

    let sequential = three_stage(&input, &c);
    assert_eq!(sequential.total_delta_v, 0.0);
    assert!(sequential.stage_delta_vs.iter().all(|dv| *dv == 0.0));
    assert!(sequential.mass_fractions.iter().all(|mf| !(*mf > 1.0)));

    let parallel = pop_out(&input, &c);
    assert_eq!(parallel.total_delta_v, 0.0);
    assert!(parallel.mass_fractions.iter().all(|mf| !(*mf > 1.0)));
}

#[test]
fn boosters_always_add_delta_v() {
    let c = PhysicalConstants::default();
    let alone = pop_out(&InputRecord::from_lengths([0.0; 3], [12.0, 0.0, 0.0]), &c);
    let one = pop_out(&InputRecord::from_lengths([0.0; 3], [12.0, 6.0, 0.0]), &c);
    let two = pop_out(&InputRecord::from_lengths([0.0; 3], [12.0, 6.0, 6.0]), &c);

    assert!(
        one.total_delta_v > alone.total_delta_v,
        "one booster: {} vs core alone: {}",
        one.total_delta_v,
        alone.total_delta_v
    );
    assert!(
        two.total_delta_v > one.total_delta_v,
        "two boosters: {} vs one: {}",
        two.total_delta_v,
        one.total_delta_v
    );
}

#[test]
fn custom_constants_flow_through() {
    // Doubling Isp doubles the exhaust velocity, so every vacuum burn
    // doubles its delta-v contribution.
    let base = PhysicalConstants::default();
    let hot = PhysicalConstants {
        specific_impulse_s: 500.0,
        ..PhysicalConstants::default()
    };

    let input = InputRecord::from_lengths([0.0; 3], [12.0, 6.0, 0.0]);
    let cold = pop_out(&input, &base);
    let fast = pop_out(&input, &hot);

    assert_relative_eq!(
        fast.stage_delta_vs[1],
        2.0 * cold.stage_delta_vs[1],
        max_relative = 1e-12
    );
}
