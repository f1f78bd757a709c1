// ─────────────────────────────────────────────────────────────────────
// Reactor Thermal — Energy Ledger
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Heat delivered through the walls, energy stored in the slab, efficiency.

use ndarray::{s, Array1};
use reactor_types::config::EfficiencyPolicy;

/// Upper bound on per-step storage reserved up front. Longer runs grow on demand.
pub const PREALLOCATED_STEPS: usize = 4096;

/// Fourier fluxes at the two walls [W/m²].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundaryFlux {
    pub left: f64,
    pub right: f64,
}

impl BoundaryFlux {
    /// Net flux into the slab, left minus right.
    pub fn net(&self) -> f64 {
        self.left - self.right
    }
}

/// One-sided first differences of Fourier's law at both walls.
///
/// q_left  = -λ[0]    (T[1]    - T[0])    / dx
/// q_right = -λ[nx-1] (T[nx-1] - T[nx-2]) / dx
///
/// `field` must have at least 2 nodes and the same length as `conductivity`.
pub fn boundary_fluxes(field: &Array1<f64>, conductivity: &Array1<f64>, dx: f64) -> BoundaryFlux {
    let n = field.len();
    BoundaryFlux {
        left: -conductivity[0] * (field[1] - field[0]) / dx,
        right: -conductivity[n - 1] * (field[n - 1] - field[n - 2]) / dx,
    }
}

/// Trapezoidal integral of (T - T_init) over the slab, times dx [K·m].
pub fn deviation_integral(field: &Array1<f64>, t_init: f64, dx: f64) -> f64 {
    let n = field.len();
    if n < 2 {
        return 0.0;
    }
    let edges = 0.5 * ((field[0] - t_init) + (field[n - 1] - t_init));
    let interior: f64 = field.slice(s![1..n - 1]).iter().map(|t| t - t_init).sum();
    (edges + interior) * dx
}

/// Stored energy rho Cp S ∫(T - T_init) dx [J].
pub fn stored_energy(
    field: &Array1<f64>,
    t_init: f64,
    dx: f64,
    volumetric_heat_capacity: f64,
    area: f64,
) -> f64 {
    volumetric_heat_capacity * area * deviation_integral(field, t_init, dx)
}

/// Heating efficiency for step n. Zero until heat has been delivered.
pub fn efficiency(policy: EfficiencyPolicy, energy_n: f64, energy_0: f64, delivered: f64) -> f64 {
    if delivered <= 0.0 {
        return 0.0;
    }
    let eta = (energy_n - energy_0) / delivered;
    match policy {
        EfficiencyPolicy::Unclamped => eta,
        EfficiencyPolicy::ClampUnit => {
            if energy_n > 0.0 {
                eta.clamp(0.0, 1.0)
            } else {
                0.0
            }
        }
    }
}

/// Running energy bookkeeping owned by the solver.
#[derive(Debug, Clone, PartialEq)]
pub struct EnergyLedger {
    policy: EfficiencyPolicy,
    delivered_heat: f64,
    energy: Vec<f64>,
    efficiency: Vec<f64>,
}

impl EnergyLedger {
    /// `capacity` is a hint; at most [`PREALLOCATED_STEPS`] entries are reserved.
    pub fn new(policy: EfficiencyPolicy, capacity: usize) -> Self {
        let capacity = capacity.min(PREALLOCATED_STEPS);
        EnergyLedger {
            policy,
            delivered_heat: 0.0,
            energy: Vec::with_capacity(capacity),
            efficiency: Vec::with_capacity(capacity),
        }
    }

    /// Book one step. Returns (Q_heating, eta[n]).
    pub fn record(&mut self, flux: BoundaryFlux, energy: f64, area: f64, dt: f64) -> (f64, f64) {
        self.delivered_heat += area * flux.net() * dt;
        self.energy.push(energy);
        let energy_0 = self.energy[0];
        let eta = efficiency(self.policy, energy, energy_0, self.delivered_heat);
        self.efficiency.push(eta);
        (self.delivered_heat, eta)
    }

    /// Q_heating so far [J].
    pub fn delivered_heat(&self) -> f64 {
        self.delivered_heat
    }

    pub fn energy(&self) -> &[f64] {
        &self.energy
    }

    pub fn efficiency(&self) -> &[f64] {
        &self.efficiency
    }

    pub fn len(&self) -> usize {
        self.energy.len()
    }

    pub fn is_empty(&self) -> bool {
        self.energy.is_empty()
    }

    pub fn policy(&self) -> EfficiencyPolicy {
        self.policy
    }
}
