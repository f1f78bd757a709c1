// ─────────────────────────────────────────────────────────────────────
// Reactor Thermal — Profiles
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Plot-ready views of a finished run: node coordinates, time axis,
//! temperature profiles at a few instants and temperature at fixed probes.

use crate::params::ParameterSet;
use ndarray::Array1;
use reactor_types::constants::SECONDS_PER_HOUR;
use reactor_types::state::SimulationResult;

/// Temperature profile at one recorded step.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileSnapshot {
    pub step: usize,
    pub time_hours: f64,
    pub temperatures: Array1<f64>,
}

/// Node positions linspace(0, L, Nx) [m].
pub fn grid_coordinates(params: &ParameterSet) -> Array1<f64> {
    Array1::linspace(0.0, params.length(), params.nx())
}

/// n·dt in hours for n in 0..nt.
pub fn time_axis_hours(nt: usize, dt: f64) -> Array1<f64> {
    Array1::from_shape_fn(nt, |n| n as f64 * dt / SECONDS_PER_HOUR)
}

/// Start, quarter, half, three quarters and last step (integer division).
/// Indices may repeat on very short runs.
pub fn snapshot_indices(nt: usize) -> Vec<usize> {
    if nt == 0 {
        return Vec::new();
    }
    vec![0, nt / 4, nt / 2, 3 * nt / 4, nt - 1]
}

pub fn profile_snapshots(result: &SimulationResult) -> Vec<ProfileSnapshot> {
    snapshot_indices(result.len())
        .into_iter()
        .map(|step| ProfileSnapshot {
            step,
            time_hours: step as f64 * result.time_step / SECONDS_PER_HOUR,
            temperatures: result.history[step].clone(),
        })
        .collect()
}

/// Left wall, middle node and right wall.
pub fn probe_indices(nx: usize) -> [usize; 3] {
    [0, nx / 2, nx.saturating_sub(1)]
}

/// Temperature history of one node. Empty if `node` is out of range.
pub fn probe_series(result: &SimulationResult, node: usize) -> Array1<f64> {
    result
        .history
        .iter()
        .filter_map(|snapshot| snapshot.get(node).copied())
        .collect()
}
