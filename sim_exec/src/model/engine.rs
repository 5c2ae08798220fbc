//! Drive acceleration model

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use serde::Deserialize;
use util::maths::{clamp, finite_or};

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Parameters for the engine model.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct EngineParams {
    /// Acceleration demanded at full throttle.
    ///
    /// Units: meters/second^2
    pub max_accel_mps2: f64,
}

impl Default for EngineParams {
    fn default() -> Self {
        EngineParams {
            max_accel_mps2: 2.0,
        }
    }
}

// ---------------------------------------------------------------------------
// FUNCTIONS
// ---------------------------------------------------------------------------

/// Convert a throttle demand (0..1) into a drive acceleration command.
///
/// Emergency stop cuts the drive completely.
pub fn compute_drive_accel(throttle_0_1: f64, estop: bool, p: &EngineParams) -> f64 {
    if estop {
        return 0.0;
    }

    clamp(finite_or(throttle_0_1, 0.0), 0.0, 1.0) * p.max_accel_mps2
}
