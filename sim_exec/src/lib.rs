//! # Simulation library.
//!
//! A deterministic simulation of a small vehicle's control software. Control
//! components exchange data only through the signal table, are invoked by a
//! multi-rate scheduler on a logical 10 ms tick, and together drive a
//! kinematic model of the vehicle.

// ------------------------------------------------------------------------------------------------
// MODULES
// ------------------------------------------------------------------------------------------------

/// Diagnostic counters
pub mod diag;

/// Run assembly - builds the context and scheduler for a simulation run
pub mod exec;

/// Physical models - pure functions for the engine, brake, steering and vehicle body
pub mod model;

/// Simulation parameters
pub mod params;

/// Runtime environment - the signal table shared by all components
pub mod rte;

/// Multi-rate scheduler
pub mod scheduler;

/// Per-tick CSV log of the signal table
pub mod sim_log;

/// Software components - the control logic invoked by the scheduler
pub mod swc;
