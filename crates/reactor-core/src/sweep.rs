// ─────────────────────────────────────────────────────────────────────
// Reactor Thermal — Parameter Sweep
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Independent runs in parallel via Rayon, one solver per task.

use crate::solver::run;
use rayon::prelude::*;
use reactor_types::config::SlabConfig;
use reactor_types::error::ThermalResult;
use reactor_types::state::{RunSummary, SimulationResult};

/// Run every configuration. Results keep input order; a failing entry does
/// not stop the others.
pub fn run_sweep(configs: &[SlabConfig]) -> Vec<ThermalResult<SimulationResult>> {
    configs.par_iter().map(run).collect()
}

/// Same as [`run_sweep`] but keeps only the headline numbers of each run.
pub fn sweep_summaries(configs: &[SlabConfig]) -> Vec<ThermalResult<RunSummary>> {
    configs
        .par_iter()
        .map(|cfg| run(cfg).map(|result| result.summary()))
        .collect()
}

/// Vary the wall temperature around a base configuration.
pub fn sweep_wall_temperature(
    base: &SlabConfig,
    wall_temperatures: &[f64],
) -> Vec<ThermalResult<SimulationResult>> {
    let configs: Vec<SlabConfig> = wall_temperatures
        .iter()
        .map(|&t_wall| base.clone().with_wall_temperature(t_wall))
        .collect();
    run_sweep(&configs)
}
