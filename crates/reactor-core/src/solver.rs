// ─────────────────────────────────────────────────────────────────────
// Reactor Thermal — Conduction Solver
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Explicit transient conduction through the slab.
//!
//! ∂T/∂t = α(T) ∂²T/∂x²,  α(T) = λ0 (1 + b (T - T0)) / (ρ Cp)
//!
//! Forward Euler in time, central differences in space, Dirichlet walls at
//! both ends. Every interior node is updated from the previous field only.

use crate::ledger::{boundary_fluxes, stored_energy, EnergyLedger, PREALLOCATED_STEPS};
use crate::params::ParameterSet;
use ndarray::Array1;
use reactor_types::config::SlabConfig;
use reactor_types::error::{ThermalError, ThermalResult};
use reactor_types::state::{SimulationResult, StepRecord, TemperatureField};

/// Lifecycle of a solver instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverPhase {
    /// Constructed, no step taken yet.
    Ready,
    /// Between 1 and Nt-1 steps taken.
    Stepping,
    /// All Nt steps taken. A run with Nt = 0 is complete on construction.
    Complete,
}

/// Owns the temperature field, its history and the energy ledger of one run.
///
/// Instances are not meant to be shared; run independent simulations on
/// independent solvers (see [`crate::sweep`]).
#[derive(Debug, Clone)]
pub struct ConductionSolver {
    params: ParameterSet,
    field: TemperatureField,
    history: Vec<Array1<f64>>,
    ledger: EnergyLedger,
    steps_taken: usize,
}

impl ConductionSolver {
    /// Uniform T_init with both walls at T_wall.
    pub fn new(params: ParameterSet) -> Self {
        let field = TemperatureField::with_walls(
            params.nx(),
            params.initial_temperature(),
            params.wall_temperature(),
        );
        Self::from_parts(params, field)
    }

    /// Start from a caller-supplied field of length Nx. The wall nodes are
    /// overwritten with T_wall.
    pub fn with_initial_field(params: ParameterSet, initial: Array1<f64>) -> ThermalResult<Self> {
        if initial.len() != params.nx() {
            return Err(ThermalError::invalid(
                "initial_field",
                initial.len() as f64,
                format!("length must match nx = {}", params.nx()),
            ));
        }
        if let Some((i, &t)) = initial.iter().enumerate().find(|(_, t)| !t.is_finite()) {
            return Err(ThermalError::invalid(
                "initial_field",
                t,
                format!("non-finite temperature at node {i}"),
            ));
        }
        let mut field = TemperatureField::from_values(initial);
        field.pin_boundaries(params.wall_temperature());
        Ok(Self::from_parts(params, field))
    }

    fn from_parts(params: ParameterSet, field: TemperatureField) -> Self {
        let nt = params.nt();
        ConductionSolver {
            ledger: EnergyLedger::new(params.efficiency_policy(), nt),
            history: Vec::with_capacity(nt.min(PREALLOCATED_STEPS)),
            params,
            field,
            steps_taken: 0,
        }
    }

    /// Nodal conductivity λ(T) of the current field.
    pub fn nodal_conductivity(&self) -> Array1<f64> {
        self.field.values().mapv(|t| self.params.conductivity_at(t))
    }

    /// Advance by one dt and book the step.
    ///
    /// Returns [`ThermalError::SolverExhausted`] once Nt steps have been taken.
    pub fn step(&mut self) -> ThermalResult<StepRecord> {
        let nt = self.params.nt();
        if self.steps_taken >= nt {
            return Err(ThermalError::SolverExhausted { steps: nt });
        }

        let dt = self.params.time_step();
        let dx = self.params.length_step();
        let dx2 = dx * dx;
        let rho_cp = self.params.volumetric_heat_capacity();

        // Conductivity and diffusivity from the pre-update field.
        let lambda = self.nodal_conductivity();
        let alpha = &lambda / rho_cp;

        let t_old = self.field.values();
        let nx = t_old.len();
        let mut t_new = t_old.clone();
        for i in 1..nx - 1 {
            t_new[i] =
                t_old[i] + alpha[i] * dt / dx2 * (t_old[i + 1] - 2.0 * t_old[i] + t_old[i - 1]);
        }

        let mut next = TemperatureField::from_values(t_new);
        next.pin_boundaries(self.params.wall_temperature());
        self.field = next;
        self.history.push(self.field.values().clone());

        // Wall fluxes: new field, pre-update conductivity.
        let flux = boundary_fluxes(self.field.values(), &lambda, dx);
        let area = self.params.cross_section_area();
        let energy = stored_energy(
            self.field.values(),
            self.params.initial_temperature(),
            dx,
            rho_cp,
            area,
        );
        let (delivered_heat, efficiency) = self.ledger.record(flux, energy, area, dt);

        let step = self.steps_taken;
        self.steps_taken += 1;

        Ok(StepRecord {
            step,
            time: (step + 1) as f64 * dt,
            q_left: flux.left,
            q_right: flux.right,
            delivered_heat,
            accumulated_energy: energy,
            efficiency,
        })
    }

    /// Take the remaining steps one by one and return the completed run.
    ///
    /// Calling this on a complete solver returns the same result again.
    pub fn solve(&mut self) -> ThermalResult<SimulationResult> {
        while self.steps_taken < self.params.nt() {
            self.step()?;
        }
        let result = self.result();
        let summary = result.summary();
        log::info!(
            "slab run complete: {} steps, accumulated energy {:.2e} J, delivered heat {:.2e} J, \
             efficiency {:.2} %",
            summary.steps,
            summary.accumulated_energy_j,
            summary.delivered_heat_j,
            summary.efficiency_percent
        );
        Ok(result)
    }

    /// Snapshot of history and ledger as they stand.
    pub fn result(&self) -> SimulationResult {
        SimulationResult {
            history: self.history.clone(),
            energy: Array1::from(self.ledger.energy().to_vec()),
            efficiency: Array1::from(self.ledger.efficiency().to_vec()),
            delivered_heat: self.ledger.delivered_heat(),
            time_step: self.params.time_step(),
        }
    }

    pub fn into_result(self) -> SimulationResult {
        SimulationResult {
            energy: Array1::from(self.ledger.energy().to_vec()),
            efficiency: Array1::from(self.ledger.efficiency().to_vec()),
            delivered_heat: self.ledger.delivered_heat(),
            time_step: self.params.time_step(),
            history: self.history,
        }
    }

    pub fn phase(&self) -> SolverPhase {
        if self.steps_taken >= self.params.nt() {
            SolverPhase::Complete
        } else if self.steps_taken == 0 {
            SolverPhase::Ready
        } else {
            SolverPhase::Stepping
        }
    }

    pub fn steps_taken(&self) -> usize {
        self.steps_taken
    }

    pub fn remaining_steps(&self) -> usize {
        self.params.nt() - self.steps_taken
    }

    pub fn field(&self) -> &TemperatureField {
        &self.field
    }

    pub fn history(&self) -> &[Array1<f64>] {
        &self.history
    }

    pub fn ledger(&self) -> &EnergyLedger {
        &self.ledger
    }

    pub fn params(&self) -> &ParameterSet {
        &self.params
    }
}

/// Derive parameters from `config`, build a solver and run it to completion.
pub fn run(config: &SlabConfig) -> ThermalResult<SimulationResult> {
    let params = ParameterSet::new(config)?;
    let mut solver = ConductionSolver::new(params);
    solver.solve()?;
    Ok(solver.into_result())
}
