//! Steering actuator model
//!
//! The steering rack is modelled as a first order lag towards the angle
//! demanded by the driver.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use serde::Deserialize;
use util::maths::{clamp, finite_or, floor_at};

// ---------------------------------------------------------------------------
// CONSTANTS
// ---------------------------------------------------------------------------

/// Smallest usable time constant.
///
/// Units: seconds
pub const MIN_STEER_TAU_S: f64 = 1e-3;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Parameters for the steering model.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct SteeringParams {
    /// Largest absolute road wheel angle.
    ///
    /// Units: radians
    pub max_steer_angle_rad: f64,

    /// Time constant of the first order lag.
    ///
    /// Units: seconds
    pub steer_tau_s: f64,
}

impl Default for SteeringParams {
    fn default() -> Self {
        SteeringParams {
            // ~23 degrees
            max_steer_angle_rad: 0.40,
            steer_tau_s: 0.15,
        }
    }
}

// ---------------------------------------------------------------------------
// FUNCTIONS
// ---------------------------------------------------------------------------

/// Advance the steer angle by one step of `dt_s`.
///
/// The target angle is the clamped steer demand (-1..1) scaled by the maximum
/// angle, or zero during an emergency stop. The result is always within
/// `[-max_steer_angle_rad, max_steer_angle_rad]`. Non-finite demands, previous
/// angles and steps are treated as zero.
pub fn step_steer_angle(
    steer_input: f64,
    estop: bool,
    prev_angle: f64,
    dt_s: f64,
    p: &SteeringParams,
) -> f64 {
    let target = if estop {
        0.0
    } else {
        clamp(finite_or(steer_input, 0.0), -1.0, 1.0) * p.max_steer_angle_rad
    };

    let prev_angle = finite_or(prev_angle, 0.0);
    let tau = floor_at(p.steer_tau_s, MIN_STEER_TAU_S);
    let dt = floor_at(finite_or(dt_s, 0.0), 0.0);

    let next = prev_angle + (target - prev_angle) * (dt / tau);

    clamp(next, -p.max_steer_angle_rad, p.max_steer_angle_rad)
}
