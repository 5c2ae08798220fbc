//! # Software components
//!
//! One component per control concern. Each reads and writes signals in the
//! [`SignalTable`](crate::rte::SignalTable) and wraps a physical model where
//! one exists. Components are driven by the scheduler at a fixed rate:
//!
//! | Component            | Rate   | Reads                          | Writes          |
//! |----------------------|--------|--------------------------------|-----------------|
//! | `DriverInputSwc`     | 20 ms  | VehicleState                   | DriverInput     |
//! | `EngineSwc`          | 10 ms  | DriverInput, Safety            | DriveAccelCmd   |
//! | `BrakeSwc`           | 10 ms  | DriverInput, Safety            | BrakeDecelCmd   |
//! | `SteeringSwc`        | 10 ms  | DriverInput, Safety            | SteerAngleCmd   |
//! | `VehicleDynamicsSwc` | 10 ms  | ActuatorCmd, Safety            | VehicleState    |
//! | `SafetySupervisorSwc`| 100 ms | Safety                         | Safety          |

// ---------------------------------------------------------------------------
// MODULES
// ---------------------------------------------------------------------------

mod brake;
mod driver_input;
mod engine;
mod safety;
mod steering;
mod vehicle_dynamics;

// ---------------------------------------------------------------------------
// EXPORTS
// ---------------------------------------------------------------------------

pub use brake::BrakeSwc;
pub use driver_input::{DriverInputSwc, InputSource, ScenarioPhase, ScriptedScenario};
pub use engine::EngineSwc;
pub use safety::SafetySupervisorSwc;
pub use steering::SteeringSwc;
pub use vehicle_dynamics::VehicleDynamicsSwc;
