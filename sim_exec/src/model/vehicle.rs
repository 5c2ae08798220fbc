//! Vehicle dynamics model
//!
//! A kinematic bicycle model integrated with explicit forward Euler steps.
//! There is no tyre slip: the vehicle always travels in the direction it is
//! facing and turns at the rate set by its wheelbase and steer angle.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use serde::Deserialize;
use util::maths::{clamp, floor_at};

use crate::rte::{ActuatorCmd, VehicleState};

// ---------------------------------------------------------------------------
// CONSTANTS
// ---------------------------------------------------------------------------

/// Smallest usable wheel radius.
///
/// Units: meters
pub const MIN_WHEEL_RADIUS_M: f64 = 1e-4;

/// Smallest usable wheelbase.
///
/// Units: meters
pub const MIN_WHEELBASE_M: f64 = 1e-3;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Parameters of the vehicle body.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct VehicleParams {
    /// Units: meters
    pub wheel_radius_m: f64,

    /// Distance between front and rear axles.
    ///
    /// Units: meters
    pub wheelbase_m: f64,

    /// Linear resistance coefficient, deceleration is `linear_drag * v`.
    ///
    /// Units: 1/seconds
    pub linear_drag: f64,

    /// Units: meters/second
    pub max_speed_mps: f64,

    /// Additional deceleration applied while the emergency stop is active.
    ///
    /// Units: meters/second^2
    pub estop_decel_mps2: f64,
}

impl Default for VehicleParams {
    fn default() -> Self {
        VehicleParams {
            wheel_radius_m: 0.03,
            wheelbase_m: 0.20,
            linear_drag: 0.15,
            max_speed_mps: 3.0,
            estop_decel_mps2: 6.0,
        }
    }
}

/// The longitudinal part of the vehicle state.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LongitudinalState {
    /// Units: seconds
    pub t: f64,

    /// Units: meters/second
    pub v: f64,

    /// Units: radians/second
    pub wheel_omega: f64,
}

// ---------------------------------------------------------------------------
// FUNCTIONS
// ---------------------------------------------------------------------------

/// Resistance to motion at speed `v`.
pub fn resist(v: f64, p: &VehicleParams) -> f64 {
    p.linear_drag * v
}

/// Integrate the longitudinal state forward by `dt`.
///
/// Speed is limited to `[0, max_speed_mps]`, braking can stop the vehicle but
/// never reverse it.
pub fn step_longitudinal(
    s: &LongitudinalState,
    dt: f64,
    drive_accel_cmd: f64,
    brake_decel_cmd: f64,
    estop: bool,
    p: &VehicleParams,
) -> LongitudinalState {
    let mut out = *s;

    let mut accel = drive_accel_cmd - brake_decel_cmd - resist(out.v, p);
    if estop {
        accel -= p.estop_decel_mps2;
    }

    out.v = clamp(out.v + accel * dt, 0.0, p.max_speed_mps);

    out.wheel_omega = out.v / floor_at(p.wheel_radius_m, MIN_WHEEL_RADIUS_M);

    out.t += dt;
    out
}

/// Integrate the full vehicle state forward by `dt` under the given actuator
/// command.
///
/// Speed is updated first, then yaw from the new speed, then position from the
/// new yaw.
pub fn step_kinematic(
    s: &VehicleState,
    dt: f64,
    cmd: &ActuatorCmd,
    estop: bool,
    p: &VehicleParams,
) -> VehicleState {
    let lon = step_longitudinal(
        &LongitudinalState { t: s.t, v: s.v, wheel_omega: s.wheel_omega },
        dt,
        cmd.drive_accel_cmd,
        cmd.brake_decel_cmd,
        estop,
        p,
    );

    let wheelbase = floor_at(p.wheelbase_m, MIN_WHEELBASE_M);
    let yaw_rate = (lon.v / wheelbase) * cmd.steer_angle_cmd.tan();
    let yaw = s.yaw + yaw_rate * dt;

    VehicleState {
        t: lon.t,
        x: s.x + lon.v * yaw.cos() * dt,
        y: s.y + lon.v * yaw.sin() * dt,
        yaw,
        v: lon.v,
        yaw_rate,
        wheel_omega: lon.wheel_omega,
    }
}
