// ─────────────────────────────────────────────────────────────────────
// Reactor Thermal — Parameter Set
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Derived constants, grid sizes and stability analysis for the slab scheme.
//!
//! A [`ParameterSet`] is built once per run from a [`SlabConfig`] and is
//! immutable afterwards. All input validation happens here so that stepping
//! never has to fail.

use reactor_types::config::{EfficiencyPolicy, SlabConfig, StabilityPolicy};
use reactor_types::constants::{MIN_NODES, SIGMA_MAX};
use reactor_types::error::{ThermalError, ThermalResult};

/// Von Neumann analysis of the explicit scheme at the base conductivity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StabilityReport {
    /// Base thermal diffusivity alpha = lambda0 / (rho Cp) [m²/s].
    pub diffusivity: f64,
    /// Courant-like number sigma = alpha dt / dx².
    pub sigma: f64,
    /// Largest stable time step 0.5 dx² / alpha [s].
    pub dt_max: f64,
}

impl StabilityReport {
    pub fn new(diffusivity: f64, dt: f64, dx: f64) -> Self {
        StabilityReport {
            diffusivity,
            sigma: diffusivity * dt / (dx * dx),
            dt_max: SIGMA_MAX * dx * dx / diffusivity,
        }
    }

    pub fn is_stable(&self) -> bool {
        self.sigma <= SIGMA_MAX
    }
}

/// Validated physical and numerical parameters of one run.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterSet {
    length: f64,
    t_init: f64,
    t_wall: f64,
    dt: f64,
    t_max: f64,
    rho: f64,
    humidity: f64,
    dx: f64,
    cp_dry: f64,
    cp_water: f64,
    lambda_dry: f64,
    lambda_water: f64,
    temp_coeff: f64,
    t_ref: f64,
    area: f64,
    nx: usize,
    nt: usize,
    cp: f64,
    lambda0: f64,
    stability: StabilityReport,
    stability_policy: StabilityPolicy,
    efficiency_policy: EfficiencyPolicy,
}

fn require_finite(name: &'static str, value: f64) -> ThermalResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ThermalError::invalid(name, value, "must be finite"))
    }
}

fn require_positive(name: &'static str, value: f64) -> ThermalResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ThermalError::invalid(name, value, "must be finite and > 0"))
    }
}

/// Mixture rule: `dry * (1 - h) + water * h`.
pub fn humidity_mix(dry: f64, water: f64, humidity: f64) -> f64 {
    dry * (1.0 - humidity) + water * humidity
}

impl ParameterSet {
    /// Derive and validate parameters, applying the configured stability policy.
    pub fn new(config: &SlabConfig) -> ThermalResult<Self> {
        let material = &config.material;

        let length = require_positive("length", config.length)?;
        let dx = require_positive("dx", config.length_step)?;
        let dt = require_positive("dt", config.time_step)?;
        let rho = require_positive("rho", config.density)?;
        let area = require_positive("cross_section_area", config.cross_section_area)?;
        let t_init = require_finite("initial_temperature", config.initial_temperature)?;
        let t_wall = require_finite("wall_temperature", config.wall_temperature)?;
        let cp_dry = require_finite("cp_dry", material.cp_dry)?;
        let cp_water = require_finite("cp_water", material.cp_water)?;
        let lambda_dry = require_finite("lambda_dry", material.lambda_dry)?;
        let lambda_water = require_finite("lambda_water", material.lambda_water)?;
        let temp_coeff =
            require_finite("conductivity_temp_coeff", material.conductivity_temp_coeff)?;
        let t_ref = require_finite("reference_temperature", material.reference_temperature)?;

        let t_max = require_finite("t_max", config.total_time)?;
        if t_max < 0.0 {
            return Err(ThermalError::invalid("t_max", t_max, "must be >= 0"));
        }
        let humidity = require_finite("humidity", config.humidity)?;
        if !(0.0..=1.0).contains(&humidity) {
            return Err(ThermalError::invalid(
                "humidity",
                humidity,
                "must be a fraction in [0, 1]",
            ));
        }

        let cp = require_positive("cp", humidity_mix(cp_dry, cp_water, humidity))?;
        let lambda0 =
            require_positive("lambda0", humidity_mix(lambda_dry, lambda_water, humidity))?;

        let nx = ((length / dx).floor() as usize)
            .checked_add(1)
            .ok_or_else(|| ThermalError::invalid("dx", dx, "grid node count overflows"))?;
        if nx < MIN_NODES {
            return Err(ThermalError::invalid(
                "nx",
                nx as f64,
                format!("grid needs at least {MIN_NODES} nodes, got L/dx = {}", length / dx),
            ));
        }
        let steps = (t_max / dt).floor();
        if steps >= usize::MAX as f64 {
            return Err(ThermalError::invalid(
                "t_max",
                t_max,
                format!("t_max/dt = {steps:e} steps does not fit in usize"),
            ));
        }
        let nt = steps as usize;

        let stability = StabilityReport::new(lambda0 / (rho * cp), dt, dx);
        if !stability.is_stable() {
            match config.policy.stability {
                StabilityPolicy::Reject => {
                    return Err(ThermalError::UnstableScheme {
                        sigma: stability.sigma,
                        dt_max: stability.dt_max,
                    });
                }
                StabilityPolicy::Warn => {
                    log::warn!(
                        "explicit scheme may be unstable: sigma = {:.2} > {SIGMA_MAX}, \
                         reduce dt to {:.2} s or less",
                        stability.sigma,
                        stability.dt_max
                    );
                }
            }
        }

        log::debug!(
            "slab parameters: nx={nx} nt={nt} cp={cp:.1} lambda0={lambda0:.4} sigma={:.4}",
            stability.sigma
        );

        Ok(ParameterSet {
            length,
            t_init,
            t_wall,
            dt,
            t_max,
            rho,
            humidity,
            dx,
            cp_dry,
            cp_water,
            lambda_dry,
            lambda_water,
            temp_coeff,
            t_ref,
            area,
            nx,
            nt,
            cp,
            lambda0,
            stability,
            stability_policy: config.policy.stability,
            efficiency_policy: config.policy.efficiency,
        })
    }

    /// Local conductivity lambda(T) = lambda0 (1 + b (T - T0)).
    pub fn conductivity_at(&self, temperature: f64) -> f64 {
        self.lambda0 * (1.0 + self.temp_coeff * (temperature - self.t_ref))
    }

    /// rho * Cp [J/(m³·K)].
    pub fn volumetric_heat_capacity(&self) -> f64 {
        self.rho * self.cp
    }

    /// dt / dx² [s/m²].
    pub fn mesh_ratio(&self) -> f64 {
        self.dt / (self.dx * self.dx)
    }

    pub fn length(&self) -> f64 {
        self.length
    }
    pub fn initial_temperature(&self) -> f64 {
        self.t_init
    }
    pub fn wall_temperature(&self) -> f64 {
        self.t_wall
    }
    pub fn time_step(&self) -> f64 {
        self.dt
    }
    pub fn total_time(&self) -> f64 {
        self.t_max
    }
    pub fn density(&self) -> f64 {
        self.rho
    }
    pub fn humidity(&self) -> f64 {
        self.humidity
    }
    pub fn length_step(&self) -> f64 {
        self.dx
    }
    pub fn cp_dry(&self) -> f64 {
        self.cp_dry
    }
    pub fn cp_water(&self) -> f64 {
        self.cp_water
    }
    pub fn lambda_dry(&self) -> f64 {
        self.lambda_dry
    }
    pub fn lambda_water(&self) -> f64 {
        self.lambda_water
    }
    pub fn conductivity_temp_coeff(&self) -> f64 {
        self.temp_coeff
    }
    pub fn reference_temperature(&self) -> f64 {
        self.t_ref
    }
    pub fn cross_section_area(&self) -> f64 {
        self.area
    }
    /// Node count Nx = floor(L/dx) + 1.
    pub fn nx(&self) -> usize {
        self.nx
    }
    /// Step count Nt = floor(t_max/dt).
    pub fn nt(&self) -> usize {
        self.nt
    }
    /// Effective specific heat Cp [J/(kg·K)].
    pub fn specific_heat(&self) -> f64 {
        self.cp
    }
    /// Base conductivity lambda0 [W/(m·K)].
    pub fn base_conductivity(&self) -> f64 {
        self.lambda0
    }
    pub fn stability(&self) -> StabilityReport {
        self.stability
    }
    pub fn stability_policy(&self) -> StabilityPolicy {
        self.stability_policy
    }
    pub fn efficiency_policy(&self) -> EfficiencyPolicy {
        self.efficiency_policy
    }
}
