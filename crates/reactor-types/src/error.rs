// ─────────────────────────────────────────────────────────────────────
// Reactor Thermal — Error
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ThermalError {
    #[error("Invalid parameter {name}={value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: String,
    },

    #[error(
        "Explicit scheme unstable: sigma={sigma:.4} > 0.5, reduce dt to at most {dt_max:.6e} s"
    )]
    UnstableScheme { sigma: f64, dt_max: f64 },

    #[error("Solver exhausted: all {steps} time steps already taken")]
    SolverExhausted { steps: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ThermalError {
    pub fn invalid(name: &'static str, value: f64, reason: impl Into<String>) -> Self {
        ThermalError::InvalidParameter {
            name,
            value,
            reason: reason.into(),
        }
    }
}

pub type ThermalResult<T> = Result<T, ThermalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_message_names_value() {
        let err = ThermalError::invalid("dx", -0.1, "must be finite and > 0");
        let msg = err.to_string();
        assert!(msg.contains("dx"), "message should name the parameter: {msg}");
        assert!(msg.contains("-0.1"), "message should carry the value: {msg}");
    }

    #[test]
    fn test_unstable_scheme_message_carries_bound() {
        let err = ThermalError::UnstableScheme {
            sigma: 0.8,
            dt_max: 12.5,
        };
        let msg = err.to_string();
        assert!(msg.contains("0.8000"), "got: {msg}");
        assert!(msg.contains("1.25"), "dt_max missing from: {msg}");
    }
}
