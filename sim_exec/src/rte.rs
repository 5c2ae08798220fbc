//! # Runtime environment - the signal table
//!
//! Components never talk to each other directly. Every value exchanged
//! between them is a named signal held in the [`SignalTable`], which the run
//! owns and passes by reference to each component invocation.
//!
//! Reads return an independent copy of the stored value and writes replace
//! the stored value entirely, so a reader can never observe a partial write.
//!
//! The actuator command is stored as three independently owned slots, one per
//! actuator component. Reading [`ActuatorCmd`] merges the slots into a single
//! record, so the order in which the engine, brake and steering components
//! run does not affect the merged command.

// ------------------------------------------------------------------------------------------------
// SIGNALS
// ------------------------------------------------------------------------------------------------

/// Overall state of the system as decided by the safety supervisor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SystemState {
    Normal,
    /// Reserved, no transition currently leads here.
    Degraded,
    EStop,
}

/// Driver demands, normalised.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DriverInput {
    /// Throttle pedal, 0 (released) to 1 (fully pressed)
    pub throttle: f64,

    /// Brake pedal, 0 (released) to 1 (fully pressed)
    pub brake: f64,

    /// Steering demand, -1 (full right) to +1 (full left)
    pub steer: f64,
}

/// Commands to the actuators.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ActuatorCmd {
    /// Units: meters/second^2
    pub drive_accel_cmd: f64,

    /// Positive values decelerate the vehicle.
    ///
    /// Units: meters/second^2
    pub brake_decel_cmd: f64,

    /// Units: radians
    pub steer_angle_cmd: f64,
}

/// Drive acceleration slot of the actuator command, owned by the engine.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DriveAccelCmd(pub f64);

/// Brake deceleration slot of the actuator command, owned by the brake.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BrakeDecelCmd(pub f64);

/// Steer angle slot of the actuator command, owned by the steering.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SteerAngleCmd(pub f64);

/// Physical state of the vehicle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct VehicleState {
    /// Simulation time.
    ///
    /// Units: seconds
    pub t: f64,

    /// Units: meters
    pub x: f64,

    /// Units: meters
    pub y: f64,

    /// Units: radians
    pub yaw: f64,

    /// Forward speed, never negative.
    ///
    /// Units: meters/second
    pub v: f64,

    /// Units: radians/second
    pub yaw_rate: f64,

    /// Units: radians/second
    pub wheel_omega: f64,
}

/// Safety status.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Safety {
    /// Emergency stop request, set from outside the control loop.
    pub estop: bool,

    pub system_state: SystemState,
}

/// A value which can be stored in the [`SignalTable`].
pub trait Signal: Copy {
    /// Copy the current value out of the table.
    fn read_from(table: &SignalTable) -> Self;

    /// Replace the stored value.
    fn write_to(self, table: &mut SignalTable);
}

// ------------------------------------------------------------------------------------------------
// SIGNAL TABLE
// ------------------------------------------------------------------------------------------------

/// Storage for the current value of every signal.
///
/// All signals start at their default (zeroed) value. There is no
/// synchronisation, the table must only be accessed from the thread running
/// the scheduler.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SignalTable {
    driver_input: DriverInput,
    drive_accel_cmd: DriveAccelCmd,
    brake_decel_cmd: BrakeDecelCmd,
    steer_angle_cmd: SteerAngleCmd,
    vehicle_state: VehicleState,
    safety: Safety,
}

// ------------------------------------------------------------------------------------------------
// IMPLEMENTATIONS
// ------------------------------------------------------------------------------------------------

impl SystemState {
    /// Numeric representation used in the signal log.
    pub fn ordinal(self) -> u8 {
        match self {
            SystemState::Normal => 0,
            SystemState::Degraded => 1,
            SystemState::EStop => 2,
        }
    }
}

impl Default for SystemState {
    fn default() -> Self {
        SystemState::Normal
    }
}

impl Safety {
    /// True if either the estop flag is raised or the supervisor has latched
    /// the system into `EStop`.
    pub fn estop_effective(&self) -> bool {
        self.estop || self.system_state == SystemState::EStop
    }
}

impl Default for Safety {
    fn default() -> Self {
        Safety {
            estop: false,
            system_state: SystemState::Normal,
        }
    }
}

impl SignalTable {
    /// Create a table with every signal at its default value.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset every signal to its default value.
    pub fn init_defaults(&mut self) {
        *self = Self::default();
    }

    /// Read a copy of the current value of a signal.
    pub fn read<S: Signal>(&self) -> S {
        S::read_from(self)
    }

    /// Replace the current value of a signal.
    pub fn write<S: Signal>(&mut self, value: S) {
        value.write_to(self)
    }
}

macro_rules! impl_signal {
    ($ty:ty, $field:ident) => {
        impl Signal for $ty {
            fn read_from(table: &SignalTable) -> Self {
                table.$field
            }

            fn write_to(self, table: &mut SignalTable) {
                table.$field = self;
            }
        }
    };
}

impl_signal!(DriverInput, driver_input);
impl_signal!(DriveAccelCmd, drive_accel_cmd);
impl_signal!(BrakeDecelCmd, brake_decel_cmd);
impl_signal!(SteerAngleCmd, steer_angle_cmd);
impl_signal!(VehicleState, vehicle_state);
impl_signal!(Safety, safety);

impl Signal for ActuatorCmd {
    fn read_from(table: &SignalTable) -> Self {
        ActuatorCmd {
            drive_accel_cmd: table.drive_accel_cmd.0,
            brake_decel_cmd: table.brake_decel_cmd.0,
            steer_angle_cmd: table.steer_angle_cmd.0,
        }
    }

    fn write_to(self, table: &mut SignalTable) {
        table.drive_accel_cmd = DriveAccelCmd(self.drive_accel_cmd);
        table.brake_decel_cmd = BrakeDecelCmd(self.brake_decel_cmd);
        table.steer_angle_cmd = SteerAngleCmd(self.steer_angle_cmd);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_defaults() {
        let table = SignalTable::new();

        assert_eq!(table.read::<DriverInput>(), DriverInput::default());
        assert_eq!(table.read::<ActuatorCmd>(), ActuatorCmd::default());
        assert_eq!(table.read::<VehicleState>(), VehicleState::default());

        let sf: Safety = table.read();
        assert!(!sf.estop);
        assert_eq!(sf.system_state, SystemState::Normal);
    }

    #[test]
    fn test_read_is_a_copy() {
        let mut table = SignalTable::new();
        table.write(DriverInput { throttle: 0.5, brake: 0.0, steer: -0.2 });

        let mut copy: DriverInput = table.read();
        copy.throttle = 1.0;

        assert_eq!(copy.throttle, 1.0);
        assert_eq!(table.read::<DriverInput>().throttle, 0.5);

        // Writing the modified copy back is what changes the table
        table.write(copy);
        assert_eq!(table.read::<DriverInput>(), copy);
    }

    #[test]
    fn test_write_replaces_whole_value() {
        let mut table = SignalTable::new();
        table.write(VehicleState { t: 1.0, v: 2.0, x: 3.0, ..Default::default() });
        table.write(VehicleState { t: 2.0, ..Default::default() });

        let st: VehicleState = table.read();
        assert_eq!(st.t, 2.0);
        assert_eq!(st.v, 0.0);
        assert_eq!(st.x, 0.0);
    }

    #[test]
    fn test_actuator_slots_merge() {
        let mut table = SignalTable::new();

        // Writers run in an arbitrary order, each touching only its slot
        table.write(SteerAngleCmd(0.1));
        table.write(DriveAccelCmd(1.5));
        table.write(BrakeDecelCmd(0.5));

        assert_eq!(
            table.read::<ActuatorCmd>(),
            ActuatorCmd { drive_accel_cmd: 1.5, brake_decel_cmd: 0.5, steer_angle_cmd: 0.1 }
        );

        // Rewriting one slot leaves the others alone
        table.write(DriveAccelCmd(0.0));
        let cmd: ActuatorCmd = table.read();
        assert_eq!(cmd.drive_accel_cmd, 0.0);
        assert_eq!(cmd.brake_decel_cmd, 0.5);
        assert_eq!(cmd.steer_angle_cmd, 0.1);
    }

    #[test]
    fn test_actuator_full_write() {
        let mut table = SignalTable::new();
        table.write(ActuatorCmd { drive_accel_cmd: 1.0, brake_decel_cmd: 2.0, steer_angle_cmd: 0.3 });

        assert_eq!(table.read::<DriveAccelCmd>(), DriveAccelCmd(1.0));
        assert_eq!(table.read::<BrakeDecelCmd>(), BrakeDecelCmd(2.0));
        assert_eq!(table.read::<SteerAngleCmd>(), SteerAngleCmd(0.3));
    }

    #[test]
    fn test_estop_effective() {
        let mut sf = Safety::default();
        assert!(!sf.estop_effective());

        sf.estop = true;
        assert!(sf.estop_effective());

        sf.estop = false;
        sf.system_state = SystemState::EStop;
        assert!(sf.estop_effective());

        sf.system_state = SystemState::Degraded;
        assert!(!sf.estop_effective());
    }

    #[test]
    fn test_init_defaults() {
        let mut table = SignalTable::new();
        table.write(Safety { estop: true, system_state: SystemState::EStop });
        table.write(DriveAccelCmd(2.0));

        table.init_defaults();
        assert_eq!(table, SignalTable::new());
    }

    #[test]
    fn test_ordinals() {
        assert_eq!(SystemState::Normal.ordinal(), 0);
        assert_eq!(SystemState::Degraded.ordinal(), 1);
        assert_eq!(SystemState::EStop.ordinal(), 2);
    }
}
