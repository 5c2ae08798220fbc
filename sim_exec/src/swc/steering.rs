//! Steering component

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use log::trace;
use util::module::Component;

use crate::model::{step_steer_angle, SteeringParams};
use crate::rte::{DriverInput, Safety, SignalTable, SteerAngleCmd};

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Tracks the steer angle demanded by the driver through a first order lag.
#[derive(Debug, Default)]
pub struct SteeringSwc {
    params: SteeringParams,

    /// Current steer angle, carried between steps.
    ///
    /// Units: radians
    angle_rad: f64,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl SteeringSwc {
    /// The steer angle after the last step.
    pub fn angle_rad(&self) -> f64 {
        self.angle_rad
    }
}

impl Component for SteeringSwc {
    type Params = SteeringParams;
    type Signals = SignalTable;

    fn init(&mut self, params: Self::Params) {
        self.params = params;
        self.angle_rad = 0.0;
    }

    fn step(&mut self, signals: &mut Self::Signals, dt_s: f64) {
        let input: DriverInput = signals.read();
        let safety: Safety = signals.read();

        self.angle_rad = step_steer_angle(
            input.steer,
            safety.estop_effective(),
            self.angle_rad,
            dt_s,
            &self.params
        );

        trace!("Steering: demand {:.3} -> angle {:.6} rad", input.steer, self.angle_rad);

        signals.write(SteerAngleCmd(self.angle_rad));
    }

    fn version(&self) -> &'static str {
        "SteeringSwc-v0.1.0"
    }
}
