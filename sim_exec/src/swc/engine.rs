//! Engine component

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use log::trace;
use util::module::Component;

use crate::model::{compute_drive_accel, EngineParams};
use crate::rte::{DriveAccelCmd, DriverInput, Safety, SignalTable};

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Converts the throttle demand into the drive acceleration command.
#[derive(Debug, Default)]
pub struct EngineSwc {
    params: EngineParams,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Component for EngineSwc {
    type Params = EngineParams;
    type Signals = SignalTable;

    fn init(&mut self, params: Self::Params) {
        self.params = params;
    }

    fn step(&mut self, signals: &mut Self::Signals, _dt_s: f64) {
        let input: DriverInput = signals.read();
        let safety: Safety = signals.read();

        let accel = compute_drive_accel(
            input.throttle,
            safety.estop_effective(),
            &self.params
        );

        trace!("Engine: throttle {:.3} -> drive accel {:.3} m/s^2", input.throttle, accel);

        signals.write(DriveAccelCmd(accel));
    }

    fn version(&self) -> &'static str {
        "EngineSwc-v0.1.0"
    }
}
