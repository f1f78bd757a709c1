// ─────────────────────────────────────────────────────────────────────
// Reactor Thermal — Property-Based Tests (proptest) for reactor-core
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Property-based tests for reactor-core using proptest.
//!
//! Covers: history shape, Dirichlet walls, isothermal steady state,
//! monotone heat delivery, determinism, stability policy.

use proptest::prelude::*;
use reactor_core::params::humidity_mix;
use reactor_core::{run, ConductionSolver, ParameterSet, SolverPhase};
use reactor_types::config::{SlabConfig, StabilityPolicy};
use reactor_types::error::ThermalError;

/// Build a config whose base sigma equals `sigma`.
#[allow(clippy::too_many_arguments)]
fn slab(
    length: f64,
    nodes_hint: usize,
    humidity: f64,
    sigma: f64,
    steps: usize,
    t_init: f64,
    t_wall: f64,
    temp_coeff: f64,
) -> SlabConfig {
    let mut cfg = SlabConfig {
        length,
        length_step: length / (nodes_hint - 1) as f64,
        initial_temperature: t_init,
        wall_temperature: t_wall,
        density: 1000.0,
        humidity,
        ..SlabConfig::default()
    };
    cfg.material.conductivity_temp_coeff = temp_coeff;
    let cp = humidity_mix(cfg.material.cp_dry, cfg.material.cp_water, humidity);
    let lambda0 = humidity_mix(cfg.material.lambda_dry, cfg.material.lambda_water, humidity);
    let dx = cfg.length_step;
    cfg.time_step = sigma * dx * dx * cfg.density * cp / lambda0;
    cfg.total_time = cfg.time_step * steps as f64;
    cfg
}

// ── Shape and Boundary Invariants ────────────────────────────────────

proptest! {
    /// len(history) == Nt, every snapshot has Nx nodes, walls pinned exactly.
    #[test]
    fn history_shape_and_walls(
        length in 0.2f64..2.0,
        nodes in 4usize..40,
        humidity in 0.0f64..1.0,
        sigma in 0.05f64..0.45,
        steps in 1usize..30,
        t_init in -20.0f64..80.0,
        t_wall in -20.0f64..200.0,
    ) {
        let cfg = slab(length, nodes, humidity, sigma, steps, t_init, t_wall, 1e-3);
        let params = ParameterSet::new(&cfg).unwrap();
        let nx = params.nx();
        let nt = params.nt();
        prop_assert!(nx >= 3);

        let result = run(&cfg).unwrap();
        prop_assert_eq!(result.history.len(), nt);
        prop_assert_eq!(result.energy.len(), nt);
        prop_assert_eq!(result.efficiency.len(), nt);
        for snapshot in &result.history {
            prop_assert_eq!(snapshot.len(), nx);
            prop_assert_eq!(snapshot[0], t_wall);
            prop_assert_eq!(snapshot[nx - 1], t_wall);
        }
    }

    /// With T_init == T_wall nothing moves and nothing is stored.
    #[test]
    fn isothermal_slab_is_steady(
        length in 0.2f64..2.0,
        nodes in 4usize..40,
        humidity in 0.0f64..1.0,
        sigma in 0.05f64..0.45,
        steps in 1usize..30,
        t in -20.0f64..200.0,
        temp_coeff in 0.0f64..2e-3,
    ) {
        let cfg = slab(length, nodes, humidity, sigma, steps, t, t, temp_coeff);
        let result = run(&cfg).unwrap();
        for snapshot in &result.history {
            for &v in snapshot.iter() {
                prop_assert_eq!(v, t);
            }
        }
        for &e in result.energy.iter() {
            prop_assert_eq!(e, 0.0);
        }
        prop_assert_eq!(result.delivered_heat, 0.0);
    }
}

// ── Energy Bookkeeping ───────────────────────────────────────────────

proptest! {
    /// Hot walls: Q_heating never decreases and the field stays bracketed.
    #[test]
    fn hot_walls_deliver_heat_monotonically(
        nodes in 4usize..30,
        humidity in 0.0f64..1.0,
        sigma in 0.05f64..0.4,
        steps in 1usize..40,
        t_init in 0.0f64..60.0,
        lift in 1.0f64..140.0,
        temp_coeff in 0.0f64..1e-3,
    ) {
        let t_wall = t_init + lift;
        let cfg = slab(1.0, nodes, humidity, sigma, steps, t_init, t_wall, temp_coeff);
        let mut solver = ConductionSolver::new(ParameterSet::new(&cfg).unwrap());
        let mut last_q = 0.0;
        while solver.phase() != SolverPhase::Complete {
            let record = solver.step().unwrap();
            prop_assert!(record.delivered_heat >= last_q,
                "Q_heating fell at step {}: {} -> {}", record.step, last_q, record.delivered_heat);
            prop_assert!(record.delivered_heat > 0.0);
            last_q = record.delivered_heat;
        }
        for &v in solver.field().values().iter() {
            prop_assert!(v >= t_init - 1e-9 && v <= t_wall + 1e-9,
                "T={} outside [{}, {}]", v, t_init, t_wall);
        }
    }

    /// Identical parameters give bit-for-bit identical runs.
    #[test]
    fn runs_are_deterministic(
        nodes in 4usize..30,
        humidity in 0.0f64..1.0,
        sigma in 0.05f64..0.45,
        steps in 1usize..30,
        t_wall in 40.0f64..200.0,
    ) {
        let cfg = slab(1.0, nodes, humidity, sigma, steps, 20.0, t_wall, 1e-3);
        let a = run(&cfg).unwrap();
        let b = run(&cfg).unwrap();
        prop_assert_eq!(a, b);
    }
}

// ── Stability Policy ─────────────────────────────────────────────────

proptest! {
    /// sigma > 0.5 is rejected by default and tolerated under Warn.
    #[test]
    fn unstable_time_step_policy(
        nodes in 4usize..30,
        humidity in 0.0f64..1.0,
        sigma in 0.55f64..5.0,
    ) {
        let cfg = slab(1.0, nodes, humidity, sigma, 3, 20.0, 120.0, 1e-3);
        match ParameterSet::new(&cfg) {
            Err(ThermalError::UnstableScheme { sigma: s, dt_max }) => {
                prop_assert!(s > 0.5);
                prop_assert!(dt_max < cfg.time_step);
            }
            other => prop_assert!(false, "expected UnstableScheme, got {:?}", other),
        }

        let warned = cfg.clone().with_stability(StabilityPolicy::Warn);
        let params = ParameterSet::new(&warned).unwrap();
        prop_assert!(!params.stability().is_stable());
        prop_assert_eq!(params.time_step(), cfg.time_step);
    }

    /// dt = 0.4 dx² rho Cp / lambda0 is always accepted.
    #[test]
    fn forty_percent_of_bound_is_accepted(
        nodes in 4usize..60,
        humidity in 0.0f64..1.0,
    ) {
        let cfg = slab(1.0, nodes, humidity, 0.4, 5, 20.0, 120.0, 1e-3);
        let params = ParameterSet::new(&cfg).unwrap();
        prop_assert!((params.stability().sigma - 0.4).abs() < 1e-9);
    }
}
