// ─────────────────────────────────────────────────────────────────────
// Reactor Thermal — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use crate::constants::{
    CONDUCTIVITY_TEMP_COEFF, CP_DRY, CP_WATER, CROSS_SECTION_AREA, LAMBDA_DRY, LAMBDA_WATER,
    REFERENCE_TEMPERATURE,
};
use serde::{Deserialize, Serialize};

/// Top-level slab simulation configuration.
///
/// Every field has a default, so a partial JSON document (or `{}`) is a
/// valid configuration. Humidity is a fraction in [0, 1], not a percentage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlabConfig {
    /// Reactor length L [m].
    #[serde(default = "default_length", alias = "L")]
    pub length: f64,
    /// Initial material temperature T_init [°C].
    #[serde(default = "default_temperature", alias = "T_init")]
    pub initial_temperature: f64,
    /// Wall temperature T_wall [°C], applied at both ends.
    #[serde(default = "default_temperature", alias = "T_wall")]
    pub wall_temperature: f64,
    /// Time step dt [s].
    #[serde(default = "default_time_step", alias = "dt")]
    pub time_step: f64,
    /// Total simulated time t_max [s].
    #[serde(default = "default_total_time", alias = "t_max")]
    pub total_time: f64,
    /// Bulk density rho [kg/m³].
    #[serde(default = "default_density", alias = "rho")]
    pub density: f64,
    /// Humidity fraction H.
    #[serde(default = "default_humidity", alias = "H")]
    pub humidity: f64,
    /// Spatial step dx [m].
    #[serde(default = "default_length_step", alias = "dx")]
    pub length_step: f64,
    /// Cross-section area S [m²].
    #[serde(default = "default_area", alias = "S")]
    pub cross_section_area: f64,
    #[serde(default)]
    pub material: MaterialProperties,
    #[serde(default)]
    pub policy: PolicyConfig,
}

/// Dry/water mixture properties and the linear conductivity law.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialProperties {
    #[serde(default = "default_cp_dry", alias = "Cp_dry")]
    pub cp_dry: f64,
    #[serde(default = "default_cp_water", alias = "Cp_water")]
    pub cp_water: f64,
    #[serde(default = "default_lambda_dry")]
    pub lambda_dry: f64,
    #[serde(default = "default_lambda_water")]
    pub lambda_water: f64,
    /// Conductivity temperature coefficient b [1/K].
    #[serde(default = "default_temp_coeff", alias = "b")]
    pub conductivity_temp_coeff: f64,
    /// Reference temperature T0 [°C].
    #[serde(default = "default_reference_temperature", alias = "T0")]
    pub reference_temperature: f64,
}

/// What to do when the explicit scheme violates sigma <= 0.5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StabilityPolicy {
    /// Refuse to build parameters.
    #[default]
    Reject,
    /// Log the stable bound and continue with the supplied dt.
    Warn,
}

/// How the per-step heating efficiency is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EfficiencyPolicy {
    /// (energy[n] - energy[0]) / Q_heating as computed.
    #[default]
    Unclamped,
    /// Same ratio clamped to [0, 1]; zero while energy[n] <= 0.
    ClampUnit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PolicyConfig {
    #[serde(default)]
    pub stability: StabilityPolicy,
    #[serde(default)]
    pub efficiency: EfficiencyPolicy,
}

fn default_length() -> f64 {
    1.0
}
fn default_temperature() -> f64 {
    20.0
}
fn default_time_step() -> f64 {
    1.0
}
fn default_total_time() -> f64 {
    10.0
}
fn default_density() -> f64 {
    1000.0
}
fn default_humidity() -> f64 {
    // 0.5 %
    0.005
}
fn default_length_step() -> f64 {
    0.01
}
fn default_area() -> f64 {
    CROSS_SECTION_AREA
}
fn default_cp_dry() -> f64 {
    CP_DRY
}
fn default_cp_water() -> f64 {
    CP_WATER
}
fn default_lambda_dry() -> f64 {
    LAMBDA_DRY
}
fn default_lambda_water() -> f64 {
    LAMBDA_WATER
}
fn default_temp_coeff() -> f64 {
    CONDUCTIVITY_TEMP_COEFF
}
fn default_reference_temperature() -> f64 {
    REFERENCE_TEMPERATURE
}

impl Default for MaterialProperties {
    fn default() -> Self {
        MaterialProperties {
            cp_dry: default_cp_dry(),
            cp_water: default_cp_water(),
            lambda_dry: default_lambda_dry(),
            lambda_water: default_lambda_water(),
            conductivity_temp_coeff: default_temp_coeff(),
            reference_temperature: default_reference_temperature(),
        }
    }
}

impl Default for SlabConfig {
    fn default() -> Self {
        SlabConfig {
            length: default_length(),
            initial_temperature: default_temperature(),
            wall_temperature: default_temperature(),
            time_step: default_time_step(),
            total_time: default_total_time(),
            density: default_density(),
            humidity: default_humidity(),
            length_step: default_length_step(),
            cross_section_area: default_area(),
            material: MaterialProperties::default(),
            policy: PolicyConfig::default(),
        }
    }
}

impl SlabConfig {
    /// Load from a JSON file.
    pub fn from_file(path: &str) -> crate::error::ThermalResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn from_json_str(json: &str) -> crate::error::ThermalResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }

    pub fn with_wall_temperature(mut self, wall_temperature: f64) -> Self {
        self.wall_temperature = wall_temperature;
        self
    }

    pub fn with_time_step(mut self, time_step: f64) -> Self {
        self.time_step = time_step;
        self
    }

    pub fn with_stability(mut self, stability: StabilityPolicy) -> Self {
        self.policy.stability = stability;
        self
    }

    pub fn with_efficiency(mut self, efficiency: EfficiencyPolicy) -> Self {
        self.policy.efficiency = efficiency;
        self
    }
}
