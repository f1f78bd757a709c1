//! Transient conduction through a humid reactor slab.
//!
//! params:   derived constants and explicit-scheme stability check
//! solver:   forward-Euler stepping with Dirichlet walls
//! ledger:   delivered heat, stored energy, efficiency
//! profiles: plot-ready series of a finished run
//! sweep:    independent runs in parallel

pub mod ledger;
pub mod params;
pub mod profiles;
pub mod solver;
pub mod sweep;

pub use params::{ParameterSet, StabilityReport};
pub use solver::{run, ConductionSolver, SolverPhase};
