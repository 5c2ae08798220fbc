//! Brake deceleration model

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use serde::Deserialize;
use util::maths::{clamp, finite_or};

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Parameters for the brake model.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct BrakeParams {
    /// Deceleration demanded at full brake pedal.
    ///
    /// Units: meters/second^2
    pub max_decel_mps2: f64,

    /// Deceleration demanded during an emergency stop, independent of the
    /// pedal position.
    ///
    /// Units: meters/second^2
    pub estop_max_decel_mps2: f64,
}

impl Default for BrakeParams {
    fn default() -> Self {
        BrakeParams {
            max_decel_mps2: 4.0,
            estop_max_decel_mps2: 4.0,
        }
    }
}

// ---------------------------------------------------------------------------
// FUNCTIONS
// ---------------------------------------------------------------------------

/// Convert a brake pedal demand (0..1) into a deceleration command.
///
/// The returned value is positive for deceleration. In emergency stop the
/// fixed `estop_max_decel_mps2` is returned whatever the pedal position.
pub fn compute_brake_decel(brake_0_1: f64, estop: bool, p: &BrakeParams) -> f64 {
    if estop {
        return p.estop_max_decel_mps2;
    }

    clamp(finite_or(brake_0_1, 0.0), 0.0, 1.0) * p.max_decel_mps2
}
