//! # Signal log
//!
//! Writes one CSV row per 10 ms tick containing a snapshot of every signal.
//! The log is a best-effort sink: a row which fails to write is reported and
//! skipped, the run carries on.

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use std::path::Path;
use log::warn;
use serde::{Serialize, Serializer};
use util::archive::{ArchiveError, Archiver};

use crate::rte::{ActuatorCmd, DriverInput, Safety, SignalTable, VehicleState};

// ------------------------------------------------------------------------------------------------
// CONSTANTS
// ------------------------------------------------------------------------------------------------

/// Column names of the signal log, in row order.
pub const COLUMNS: [&str; 15] = [
    "t",
    "throttle",
    "brake",
    "steer",
    "drive_accel_cmd",
    "brake_decel_cmd",
    "steer_angle_cmd",
    "x",
    "y",
    "yaw",
    "v",
    "yaw_rate",
    "wheel_omega",
    "estop",
    "system_state",
];

// ------------------------------------------------------------------------------------------------
// DATA STRUCTURES
// ------------------------------------------------------------------------------------------------

/// One row of the signal log.
///
/// Field order must match [`COLUMNS`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct LogRecord {
    #[serde(serialize_with = "ser_3dp")]
    pub t: f64,
    #[serde(serialize_with = "ser_3dp")]
    pub throttle: f64,
    #[serde(serialize_with = "ser_3dp")]
    pub brake: f64,
    #[serde(serialize_with = "ser_3dp")]
    pub steer: f64,
    #[serde(serialize_with = "ser_3dp")]
    pub drive_accel_cmd: f64,
    #[serde(serialize_with = "ser_3dp")]
    pub brake_decel_cmd: f64,
    #[serde(serialize_with = "ser_6dp")]
    pub steer_angle_cmd: f64,
    #[serde(serialize_with = "ser_3dp")]
    pub x: f64,
    #[serde(serialize_with = "ser_3dp")]
    pub y: f64,
    #[serde(serialize_with = "ser_6dp")]
    pub yaw: f64,
    #[serde(serialize_with = "ser_3dp")]
    pub v: f64,
    #[serde(serialize_with = "ser_6dp")]
    pub yaw_rate: f64,
    #[serde(serialize_with = "ser_3dp")]
    pub wheel_omega: f64,
    pub estop: u8,
    pub system_state: u8,
}

/// Per-tick CSV writer for the signal table.
pub struct SignalLogger {
    archiver: Archiver,
    num_failed: u64,
}

// ------------------------------------------------------------------------------------------------
// IMPLEMENTATIONS
// ------------------------------------------------------------------------------------------------

impl LogRecord {
    /// Snapshot the current value of every signal.
    pub fn from_signals(signals: &SignalTable) -> Self {
        let input: DriverInput = signals.read();
        let cmd: ActuatorCmd = signals.read();
        let state: VehicleState = signals.read();
        let safety: Safety = signals.read();

        Self {
            t: state.t,
            throttle: input.throttle,
            brake: input.brake,
            steer: input.steer,
            drive_accel_cmd: cmd.drive_accel_cmd,
            brake_decel_cmd: cmd.brake_decel_cmd,
            steer_angle_cmd: cmd.steer_angle_cmd,
            x: state.x,
            y: state.y,
            yaw: state.yaw,
            v: state.v,
            yaw_rate: state.yaw_rate,
            wheel_omega: state.wheel_omega,
            estop: safety.estop as u8,
            system_state: safety.system_state.ordinal(),
        }
    }
}

impl SignalLogger {
    /// Create the log file at `path` and write the header.
    ///
    /// An existing log at the same path is overwritten.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self, ArchiveError> {
        Ok(Self {
            archiver: Archiver::from_path(path, &COLUMNS)?,
            num_failed: 0,
        })
    }

    /// Append a row for the current contents of the signal table.
    pub fn tick(&mut self, signals: &SignalTable) {
        let record = LogRecord::from_signals(signals);

        if let Err(e) = self.archiver.serialise(record) {
            self.num_failed += 1;
            warn!("Could not write signal log row at t = {:.3} s: {}", record.t, e);
        }
    }

    /// Number of rows written, excluding the header.
    pub fn num_rows(&self) -> u64 {
        self.archiver.num_records()
    }

    /// Number of rows which could not be written.
    pub fn num_failed(&self) -> u64 {
        self.num_failed
    }

    pub fn path(&self) -> &Path {
        self.archiver.path()
    }
}

// ------------------------------------------------------------------------------------------------
// PRIVATE FUNCTIONS
// ------------------------------------------------------------------------------------------------

fn ser_3dp<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format!("{:.3}", value))
}

fn ser_6dp<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format!("{:.6}", value))
}

#[cfg(test)]
mod test {
    use super::*;
    use std::fs;
    use crate::rte::SystemState;

    #[test]
    fn test_header_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("latest.csv");

        let logger = SignalLogger::create(&path).unwrap();
        assert_eq!(logger.num_rows(), 0);

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, format!("{}\n", COLUMNS.join(",")));
        assert_eq!(
            COLUMNS.join(","),
            "t,throttle,brake,steer,drive_accel_cmd,brake_decel_cmd,steer_angle_cmd,\
             x,y,yaw,v,yaw_rate,wheel_omega,estop,system_state"
        );
    }

    #[test]
    fn test_row_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("latest.csv");
        let mut logger = SignalLogger::create(&path).unwrap();

        let mut signals = SignalTable::new();
        signals.write(DriverInput { throttle: 0.6, brake: 0.0, steer: 0.2 });
        signals.write(ActuatorCmd {
            drive_accel_cmd: 1.2,
            brake_decel_cmd: 0.0,
            steer_angle_cmd: 0.0266667,
        });
        signals.write(VehicleState {
            t: 0.01,
            x: 0.00012,
            v: 0.012,
            wheel_omega: 0.4,
            ..Default::default()
        });
        signals.write(Safety { estop: true, system_state: SystemState::EStop });

        logger.tick(&signals);
        assert_eq!(logger.num_rows(), 1);
        assert_eq!(logger.num_failed(), 0);

        let contents = fs::read_to_string(&path).unwrap();
        let row = contents.lines().nth(1).unwrap();
        assert_eq!(
            row,
            "0.010,0.600,0.000,0.200,1.200,0.000,0.026667,0.000,0.000,0.000000,0.012,\
             0.000000,0.400,1,2"
        );
    }

    #[test]
    fn test_record_snapshot() {
        let mut signals = SignalTable::new();
        signals.write(Safety { estop: false, system_state: SystemState::Degraded });

        let record = LogRecord::from_signals(&signals);
        assert_eq!(record.estop, 0);
        assert_eq!(record.system_state, 1);
        assert_eq!(record.t, 0.0);
    }

    #[test]
    fn test_unwritable_path() {
        let dir = tempfile::tempdir().unwrap();

        // A directory cannot be opened as the log file
        assert!(SignalLogger::create(dir.path()).is_err());
    }
}
