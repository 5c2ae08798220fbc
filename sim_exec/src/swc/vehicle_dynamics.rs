//! Vehicle dynamics component

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use log::trace;
use util::module::Component;

use crate::model::{step_kinematic, VehicleParams};
use crate::rte::{ActuatorCmd, Safety, SignalTable, VehicleState};

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Integrates the vehicle state under the current actuator command.
#[derive(Debug, Default)]
pub struct VehicleDynamicsSwc {
    params: VehicleParams,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Component for VehicleDynamicsSwc {
    type Params = VehicleParams;
    type Signals = SignalTable;

    fn init(&mut self, params: Self::Params) {
        self.params = params;
    }

    fn step(&mut self, signals: &mut Self::Signals, dt_s: f64) {
        let state: VehicleState = signals.read();
        let cmd: ActuatorCmd = signals.read();
        let safety: Safety = signals.read();

        let next = step_kinematic(&state, dt_s, &cmd, safety.estop_effective(), &self.params);

        trace!(
            "VehicleDynamics: t {:.3} v {:.3} yaw {:.6} pos ({:.3}, {:.3})",
            next.t, next.v, next.yaw, next.x, next.y
        );

        signals.write(next);
    }

    fn version(&self) -> &'static str {
        "VehicleDynamicsSwc-v0.1.0"
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::rte::SystemState;

    fn swc() -> VehicleDynamicsSwc {
        let mut swc = VehicleDynamicsSwc::default();
        swc.init(VehicleParams::default());
        swc
    }

    #[test]
    fn test_time_advances() {
        let mut swc = swc();
        let mut signals = SignalTable::new();

        for _ in 0..10 {
            swc.step(&mut signals, 0.01);
        }

        let st: VehicleState = signals.read();
        assert!((st.t - 0.1).abs() < 1e-9);
        assert_eq!(st.v, 0.0);
    }

    #[test]
    fn test_wheel_omega_exact() {
        let mut swc = swc();
        let mut signals = SignalTable::new();
        signals.write(ActuatorCmd { drive_accel_cmd: 2.0, ..Default::default() });

        for _ in 0..50 {
            swc.step(&mut signals, 0.01);
            let st: VehicleState = signals.read();
            assert_eq!(st.wheel_omega, st.v / VehicleParams::default().wheel_radius_m);
        }
    }

    #[test]
    fn test_estop_state_stops_vehicle() {
        let mut swc = swc();
        let mut signals = SignalTable::new();
        signals.write(VehicleState { v: 2.0, ..Default::default() });
        signals.write(Safety { estop: false, system_state: SystemState::EStop });

        for _ in 0..100 {
            swc.step(&mut signals, 0.01);
        }

        let st: VehicleState = signals.read();
        assert_eq!(st.v, 0.0);
    }

    #[test]
    fn test_command_untouched() {
        let mut swc = swc();
        let mut signals = SignalTable::new();
        let cmd = ActuatorCmd { drive_accel_cmd: 1.0, brake_decel_cmd: 0.5, steer_angle_cmd: 0.1 };
        signals.write(cmd);

        swc.step(&mut signals, 0.01);
        assert_eq!(signals.read::<ActuatorCmd>(), cmd);
    }
}
