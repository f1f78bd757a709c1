// ─────────────────────────────────────────────────────────────────────
// Reactor Thermal — State
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use crate::constants::JOULES_PER_MEGAJOULE;
use ndarray::{Array1, Array2};

/// Nodal temperatures along the slab [°C], index 0 and nx-1 are the walls.
#[derive(Debug, Clone, PartialEq)]
pub struct TemperatureField {
    values: Array1<f64>,
}

impl TemperatureField {
    /// Uniform `t_init` with both boundary nodes set to `t_wall`.
    pub fn with_walls(nx: usize, t_init: f64, t_wall: f64) -> Self {
        let mut field = TemperatureField {
            values: Array1::from_elem(nx, t_init),
        };
        field.pin_boundaries(t_wall);
        field
    }

    pub fn from_values(values: Array1<f64>) -> Self {
        TemperatureField { values }
    }

    pub fn values(&self) -> &Array1<f64> {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Dirichlet condition at both ends.
    pub fn pin_boundaries(&mut self, t_wall: f64) {
        let n = self.values.len();
        if n > 0 {
            self.values[0] = t_wall;
            self.values[n - 1] = t_wall;
        }
    }
}

/// Ledger snapshot returned by a single solver step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepRecord {
    /// Zero-based step index n.
    pub step: usize,
    /// Simulated time at the end of the step [s].
    pub time: f64,
    /// Fourier flux at the left wall [W/m²].
    pub q_left: f64,
    /// Fourier flux at the right wall [W/m²].
    pub q_right: f64,
    /// Running total Q_heating [J].
    pub delivered_heat: f64,
    /// Instantaneous stored energy relative to T_init [J].
    pub accumulated_energy: f64,
    /// Heating efficiency eta[n].
    pub efficiency: f64,
}

/// Completed run: temperature history plus the energy ledger series.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationResult {
    /// One snapshot per step, index 0 is the state after the first step.
    pub history: Vec<Array1<f64>>,
    pub energy: Array1<f64>,
    pub efficiency: Array1<f64>,
    /// Final Q_heating [J].
    pub delivered_heat: f64,
    pub time_step: f64,
}

/// Headline numbers of a run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSummary {
    pub steps: usize,
    pub accumulated_energy_j: f64,
    pub accumulated_energy_mj: f64,
    pub delivered_heat_j: f64,
    pub efficiency: f64,
    pub efficiency_percent: f64,
}

impl SimulationResult {
    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    pub fn final_field(&self) -> Option<&Array1<f64>> {
        self.history.last()
    }

    /// History as an `[nt, nx]` matrix, one row per step.
    pub fn history_matrix(&self) -> Array2<f64> {
        let nt = self.history.len();
        let nx = self.history.first().map_or(0, |row| row.len());
        let mut out = Array2::zeros((nt, nx));
        for (mut row, snapshot) in out.rows_mut().into_iter().zip(self.history.iter()) {
            row.assign(snapshot);
        }
        out
    }

    pub fn summary(&self) -> RunSummary {
        let energy = self.energy.last().copied().unwrap_or(0.0);
        let efficiency = self.efficiency.last().copied().unwrap_or(0.0);
        RunSummary {
            steps: self.history.len(),
            accumulated_energy_j: energy,
            accumulated_energy_mj: energy / JOULES_PER_MEGAJOULE,
            delivered_heat_j: self.delivered_heat,
            efficiency,
            efficiency_percent: efficiency * 100.0,
        }
    }
}
