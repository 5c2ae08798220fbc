//! Main simulation executable entry point.
//!
//! Performs a single run of fixed logical duration with the built-in driving
//! scenario, logging every signal each tick to a CSV file.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use log::{info, warn};
use color_eyre::{Report, eyre::WrapErr};

// Internal
use sim_lib::{
    exec::run_simulation,
    params::{SimParams, SIM_PARAMS_FILE},
    sim_log::SignalLogger,
};
use util::{
    logger::{logger_init, LevelFilter},
    params::LoadError,
    session::Session,
};

// ---------------------------------------------------------------------------
// FUNCTIONS
// ---------------------------------------------------------------------------

/// Executable main function, entry point.
fn main() -> Result<(), Report> {

    // ---- EARLY INITIALISATION ----

    color_eyre::install()?;

    // Initialise session
    let session = Session::new(
        "sim_exec",
        "logs"
    ).wrap_err("Failed to create the session")?;

    // Initialise logger
    logger_init(LevelFilter::Info, &session)
        .wrap_err("Failed to initialise logging")?;

    info!("Vehicle Control Simulation Executable\n");

    // ---- LOAD PARAMETERS ----

    let params: SimParams = match util::params::load(SIM_PARAMS_FILE) {
        Ok(p) => p,
        Err(LoadError::FileLoadError(path, e)) => {
            warn!("Cannot read {:?} ({}), using default parameters", path, e);
            SimParams::default()
        },
        Err(e) => return Err(e).wrap_err("Could not load simulation params"),
    };

    info!("Simulation parameters loaded");

    // ---- OPEN SIGNAL LOG ----

    let logger = SignalLogger::create(&params.run.log_path)
        .wrap_err_with(|| format!("Failed to open the signal log at {}", params.run.log_path))?;

    info!("Signal log opened at {:?}", logger.path());

    // ---- RUN ----

    let (ctx, summary) = run_simulation(&params, Some(logger));

    if let Some(logger) = ctx.logger.as_ref() {
        if logger.num_failed() > 0 {
            warn!("{} signal log rows could not be written", logger.num_failed());
        }
    }

    info!(
        "Done. {} ticks ({} x 20 ms, {} x 100 ms), heartbeat {}",
        summary.ticks,
        summary.invocations_20ms,
        summary.invocations_100ms,
        ctx.diag.heartbeat()
    );
    info!("Log written to {}", params.run.log_path);

    Ok(())
}
