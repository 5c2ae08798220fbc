//! Safety supervisor component
//!
//! Decides the overall system state. The current rule is simply that the
//! system is in `EStop` while the estop flag is raised, and `Normal`
//! otherwise. `Degraded` is never entered.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use log::{info, warn};
use util::module::Component;

use crate::rte::{Safety, SignalTable, SystemState};

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Safety supervisor, run on the 100 ms rate.
///
/// Holds no state of its own, the system state lives in the signal table.
#[derive(Debug, Default)]
pub struct SafetySupervisorSwc;

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl SafetySupervisorSwc {
    /// Compute the next system state from the current safety signal.
    pub fn next_state(safety: &Safety) -> SystemState {
        if safety.estop {
            SystemState::EStop
        }
        else {
            SystemState::Normal
        }
    }
}

impl Component for SafetySupervisorSwc {
    type Params = ();
    type Signals = SignalTable;

    fn init(&mut self, _params: Self::Params) {}

    fn step(&mut self, signals: &mut Self::Signals, _dt_s: f64) {
        let mut safety: Safety = signals.read();
        let next = Self::next_state(&safety);

        if next != safety.system_state {
            match next {
                SystemState::EStop => warn!(
                    "Emergency stop engaged ({:?} -> {:?})", safety.system_state, next
                ),
                _ => info!("System state change: {:?} -> {:?}", safety.system_state, next),
            }
        }

        safety.system_state = next;
        signals.write(safety);
    }

    fn version(&self) -> &'static str {
        "SafetySupervisorSwc-v0.1.0"
    }
}
