//! # Simulation Parameters
//!
//! Parameters for a simulation run, loaded from `params/sim.toml`. Every
//! table and every key is optional, anything missing takes its default value.

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use serde::Deserialize;

use crate::model::{BrakeParams, EngineParams, SteeringParams, VehicleParams};

// ------------------------------------------------------------------------------------------------
// CONSTANTS
// ------------------------------------------------------------------------------------------------

/// Name of the parameter file within the parameters directory.
pub const SIM_PARAMS_FILE: &str = "sim.toml";

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

/// All parameters of a simulation run.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct SimParams {
    pub run: RunParams,
    pub engine: EngineParams,
    pub brake: BrakeParams,
    pub steering: SteeringParams,
    pub vehicle: VehicleParams,
}

/// Parameters of the run itself.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct RunParams {
    /// Logical duration of the run.
    ///
    /// Units: seconds
    pub duration_s: f64,

    /// Path of the signal log, relative to the working directory.
    pub log_path: String,
}

impl Default for RunParams {
    fn default() -> Self {
        Self {
            duration_s: 10.0,
            log_path: String::from("logs/latest.csv"),
        }
    }
}
