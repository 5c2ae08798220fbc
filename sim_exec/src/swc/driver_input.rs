//! Driver input component
//!
//! Stands in for a real driver or remote control link. The demands are taken
//! from an [`InputSource`] keyed on simulation time (never wall-clock time),
//! clamped to their valid ranges and written to the signal table.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use log::debug;
use util::{maths::{clamp, finite_or}, module::Component};

use crate::rte::{DriverInput, SignalTable, VehicleState};

// ---------------------------------------------------------------------------
// TRAITS
// ---------------------------------------------------------------------------

/// A source of driver demands.
pub trait InputSource {
    /// Demands at simulation time `t_s`. Values need not be in range or even
    /// finite.
    fn target(&mut self, t_s: f64) -> DriverInput;

    /// Return the source to its initial state.
    fn reset(&mut self) {}
}

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Phases of the built-in demonstration drive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScenarioPhase {
    /// `[0, 2)` s
    Accelerate,
    /// `[2, 5)` s, with a slight left turn
    Cruise,
    /// `[5, 7)` s
    Brake,
    /// `[7, inf)` s
    Stop,
}

/// The built-in demonstration drive: accelerate, cruise while turning, brake,
/// then stop.
#[derive(Debug, Default)]
pub struct ScriptedScenario {
    last_phase: Option<ScenarioPhase>,
}

/// Driver input component, run on the 20 ms rate.
pub struct DriverInputSwc {
    source: Box<dyn InputSource>,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl ScenarioPhase {
    /// Select the phase for the given elapsed simulation time.
    pub fn at(t_s: f64) -> Self {
        if t_s < 2.0 {
            ScenarioPhase::Accelerate
        }
        else if t_s < 5.0 {
            ScenarioPhase::Cruise
        }
        else if t_s < 7.0 {
            ScenarioPhase::Brake
        }
        else {
            ScenarioPhase::Stop
        }
    }

    /// Demands held throughout this phase.
    pub fn target(self) -> DriverInput {
        match self {
            ScenarioPhase::Accelerate => DriverInput { throttle: 0.6, brake: 0.0, steer: 0.0 },
            ScenarioPhase::Cruise => DriverInput { throttle: 0.2, brake: 0.0, steer: 0.2 },
            ScenarioPhase::Brake => DriverInput { throttle: 0.0, brake: 0.6, steer: 0.0 },
            ScenarioPhase::Stop => DriverInput::default(),
        }
    }
}

impl InputSource for ScriptedScenario {
    fn target(&mut self, t_s: f64) -> DriverInput {
        let phase = ScenarioPhase::at(t_s);

        if self.last_phase != Some(phase) {
            debug!("Scenario phase {:?} at t = {:.2} s", phase, t_s);
            self.last_phase = Some(phase);
        }

        phase.target()
    }

    fn reset(&mut self) {
        self.last_phase = None;
    }
}

impl DriverInputSwc {
    /// Create the component with a custom input source.
    pub fn with_source<S: InputSource + 'static>(source: S) -> Self {
        Self {
            source: Box::new(source),
        }
    }
}

impl Default for DriverInputSwc {
    fn default() -> Self {
        Self::with_source(ScriptedScenario::default())
    }
}

impl std::fmt::Debug for DriverInputSwc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DriverInputSwc").finish()
    }
}

impl Component for DriverInputSwc {
    type Params = ();
    type Signals = SignalTable;

    fn init(&mut self, _params: Self::Params) {
        self.source.reset();
    }

    fn step(&mut self, signals: &mut Self::Signals, _dt_s: f64) {
        let state: VehicleState = signals.read();
        let target = self.source.target(state.t);

        // Non-finite demands are released pedals and a centred wheel
        signals.write(DriverInput {
            throttle: clamp(finite_or(target.throttle, 0.0), 0.0, 1.0),
            brake: clamp(finite_or(target.brake, 0.0), 0.0, 1.0),
            steer: clamp(finite_or(target.steer, 0.0), -1.0, 1.0),
        });
    }

    fn version(&self) -> &'static str {
        "DriverInputSwc-v0.1.0"
    }
}

#[cfg(test)]
mod test {
    use super::*;

    /// Source returning fixed, possibly out of range, demands.
    struct Constant(DriverInput);

    impl InputSource for Constant {
        fn target(&mut self, _t_s: f64) -> DriverInput {
            self.0
        }
    }

    #[test]
    fn test_phase_boundaries() {
        assert_eq!(ScenarioPhase::at(0.0), ScenarioPhase::Accelerate);
        assert_eq!(ScenarioPhase::at(1.999), ScenarioPhase::Accelerate);
        assert_eq!(ScenarioPhase::at(2.0), ScenarioPhase::Cruise);
        assert_eq!(ScenarioPhase::at(4.999), ScenarioPhase::Cruise);
        assert_eq!(ScenarioPhase::at(5.0), ScenarioPhase::Brake);
        assert_eq!(ScenarioPhase::at(6.999), ScenarioPhase::Brake);
        assert_eq!(ScenarioPhase::at(7.0), ScenarioPhase::Stop);
        assert_eq!(ScenarioPhase::at(1e6), ScenarioPhase::Stop);
    }

    #[test]
    fn test_phase_targets() {
        let acc = ScenarioPhase::Accelerate.target();
        assert!(acc.throttle > 0.0 && acc.brake == 0.0);

        let cruise = ScenarioPhase::Cruise.target();
        assert!(cruise.throttle > 0.0 && cruise.steer != 0.0);

        let brake = ScenarioPhase::Brake.target();
        assert!(brake.throttle == 0.0 && brake.brake > 0.0);

        assert_eq!(ScenarioPhase::Stop.target(), DriverInput::default());
    }

    #[test]
    fn test_scenario_keyed_on_sim_time() {
        let mut swc = DriverInputSwc::default();
        swc.init(());
        let mut signals = SignalTable::new();

        signals.write(VehicleState { t: 5.5, ..Default::default() });
        swc.step(&mut signals, 0.02);
        assert_eq!(signals.read::<DriverInput>(), ScenarioPhase::Brake.target());

        signals.write(VehicleState { t: 0.0, ..Default::default() });
        swc.step(&mut signals, 0.02);
        assert_eq!(signals.read::<DriverInput>(), ScenarioPhase::Accelerate.target());
    }

    #[test]
    fn test_clamp_before_write() {
        let mut swc = DriverInputSwc::with_source(Constant(DriverInput {
            throttle: 1.7,
            brake: -0.3,
            steer: -4.0,
        }));
        let mut signals = SignalTable::new();
        swc.step(&mut signals, 0.02);

        assert_eq!(
            signals.read::<DriverInput>(),
            DriverInput { throttle: 1.0, brake: 0.0, steer: -1.0 }
        );
    }

    #[test]
    fn test_non_finite_demands_written_as_zero() {
        let mut swc = DriverInputSwc::with_source(Constant(DriverInput {
            throttle: f64::NAN,
            brake: f64::INFINITY,
            steer: f64::NAN,
        }));
        let mut signals = SignalTable::new();
        swc.step(&mut signals, 0.02);

        assert_eq!(signals.read::<DriverInput>(), DriverInput::default());
    }
}
