//! Brake component

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use log::trace;
use util::module::Component;

use crate::model::{compute_brake_decel, BrakeParams};
use crate::rte::{BrakeDecelCmd, DriverInput, Safety, SignalTable};

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Converts the brake pedal demand into the brake deceleration command.
#[derive(Debug, Default)]
pub struct BrakeSwc {
    params: BrakeParams,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Component for BrakeSwc {
    type Params = BrakeParams;
    type Signals = SignalTable;

    fn init(&mut self, params: Self::Params) {
        self.params = params;
    }

    fn step(&mut self, signals: &mut Self::Signals, _dt_s: f64) {
        let input: DriverInput = signals.read();
        let safety: Safety = signals.read();

        let decel = compute_brake_decel(
            input.brake,
            safety.estop_effective(),
            &self.params
        );

        trace!("Brake: pedal {:.3} -> decel {:.3} m/s^2", input.brake, decel);

        signals.write(BrakeDecelCmd(decel));
    }

    fn version(&self) -> &'static str {
        "BrakeSwc-v0.1.0"
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::rte::{ActuatorCmd, SystemState};

    fn run_once(brake: f64, safety: Safety, params: BrakeParams) -> ActuatorCmd {
        let mut signals = SignalTable::new();
        signals.write(DriverInput { throttle: 0.0, brake, steer: 0.0 });
        signals.write(safety);

        let mut swc = BrakeSwc::default();
        swc.init(params);
        swc.step(&mut signals, 0.01);

        signals.read()
    }

    #[test]
    fn test_half_brake() {
        let cmd = run_once(0.5, Safety::default(), BrakeParams::default());
        assert!((cmd.brake_decel_cmd - 2.0).abs() < 0.01);
    }

    #[test]
    fn test_brake_clamped() {
        let p = BrakeParams::default();
        assert!((run_once(1.5, Safety::default(), p).brake_decel_cmd - 4.0).abs() < 0.01);
        assert_eq!(run_once(-0.5, Safety::default(), p).brake_decel_cmd, 0.0);
        assert_eq!(run_once(0.0, Safety::default(), p).brake_decel_cmd, 0.0);
    }

    #[test]
    fn test_estop_forces_fixed_decel() {
        let p = BrakeParams { max_decel_mps2: 4.0, estop_max_decel_mps2: 6.0 };
        let sf = Safety { estop: true, system_state: SystemState::Normal };

        for b in &[0.0, 0.5, 1.0, 2.0] {
            assert_eq!(run_once(*b, sf, p).brake_decel_cmd, 6.0);
        }
    }

    #[test]
    fn test_estop_state_forces_fixed_decel() {
        let sf = Safety { estop: false, system_state: SystemState::EStop };
        let cmd = run_once(0.5, sf, BrakeParams::default());
        assert!((cmd.brake_decel_cmd - 4.0).abs() < 0.01);
    }
}
