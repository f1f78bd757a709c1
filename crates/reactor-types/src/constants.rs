// ─────────────────────────────────────────────────────────────────────
// Reactor Thermal — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
/// Specific heat of the dry material [J/(kg·K)].
pub const CP_DRY: f64 = 2500.0;

/// Specific heat of water [J/(kg·K)].
pub const CP_WATER: f64 = 4186.0;

/// Thermal conductivity of the dry material [W/(m·K)].
pub const LAMBDA_DRY: f64 = 0.2;

/// Thermal conductivity of water [W/(m·K)].
pub const LAMBDA_WATER: f64 = 0.6;

/// Linear temperature coefficient of conductivity [1/K].
pub const CONDUCTIVITY_TEMP_COEFF: f64 = 1e-3;

/// Reference temperature for the conductivity law [°C].
pub const REFERENCE_TEMPERATURE: f64 = 30.0;

/// Cross-section area [m²]. 1.0 gives per-unit-area accounting.
pub const CROSS_SECTION_AREA: f64 = 1.0;

/// Von Neumann limit for 1D explicit diffusion.
pub const SIGMA_MAX: f64 = 0.5;

/// Smallest grid that still has an interior node.
pub const MIN_NODES: usize = 3;

pub const SECONDS_PER_HOUR: f64 = 3600.0;

pub const JOULES_PER_MEGAJOULE: f64 = 1e6;
