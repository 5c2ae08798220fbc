//! # Physical models
//!
//! Pure functions converting normalised demands into physical commands and
//! integrating the vehicle state. Nothing in here holds state or can fail,
//! all inputs are clamped to their valid domain.

// ---------------------------------------------------------------------------
// MODULES
// ---------------------------------------------------------------------------

pub mod brake;
pub mod engine;
pub mod steering;
pub mod vehicle;

// ---------------------------------------------------------------------------
// EXPORTS
// ---------------------------------------------------------------------------

pub use brake::{compute_brake_decel, BrakeParams};
pub use engine::{compute_drive_accel, EngineParams};
pub use steering::{step_steer_angle, SteeringParams};
pub use vehicle::{step_kinematic, step_longitudinal, LongitudinalState, VehicleParams};
