//! # Simulation executive
//!
//! Assembles the signal table, the components and the scheduler into a run.
//!
//! Task registration order is fixed and defines the data flow of each tick:
//!
//! | Rate   | Tasks, in order                                                   |
//! |--------|-------------------------------------------------------------------|
//! | 10 ms  | engine, brake, steering, vehicle dynamics, diag, signal log       |
//! | 20 ms  | driver input                                                      |
//! | 100 ms | safety supervisor (with heartbeat), diag                          |

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use log::info;
use util::module::Component;

use crate::diag::Diag;
use crate::params::SimParams;
use crate::rte::SignalTable;
use crate::scheduler::{RateClass, RunSummary, Scheduler};
use crate::sim_log::SignalLogger;
use crate::swc::{
    BrakeSwc, DriverInputSwc, EngineSwc, SafetySupervisorSwc, SteeringSwc, VehicleDynamicsSwc,
};

// ------------------------------------------------------------------------------------------------
// DATA STRUCTURES
// ------------------------------------------------------------------------------------------------

/// Everything a run owns. Passed by mutable reference to every task.
pub struct SimContext {
    pub signals: SignalTable,

    pub engine: EngineSwc,
    pub brake: BrakeSwc,
    pub steering: SteeringSwc,
    pub vehicle_dynamics: VehicleDynamicsSwc,
    pub driver_input: DriverInputSwc,
    pub safety: SafetySupervisorSwc,

    pub diag: Diag,

    /// Signal log sink, if the run is being logged.
    pub logger: Option<SignalLogger>,
}

// ------------------------------------------------------------------------------------------------
// IMPLEMENTATIONS
// ------------------------------------------------------------------------------------------------

impl SimContext {
    /// Create a context with every signal at its default and every component
    /// initialised from `params`.
    pub fn new(params: &SimParams) -> Self {
        let mut ctx = Self {
            signals: SignalTable::new(),
            engine: EngineSwc::default(),
            brake: BrakeSwc::default(),
            steering: SteeringSwc::default(),
            vehicle_dynamics: VehicleDynamicsSwc::default(),
            driver_input: DriverInputSwc::default(),
            safety: SafetySupervisorSwc::default(),
            diag: Diag::new(),
            logger: None,
        };

        ctx.signals.init_defaults();

        ctx.engine.init(params.engine);
        ctx.brake.init(params.brake);
        ctx.steering.init(params.steering);
        ctx.vehicle_dynamics.init(params.vehicle);
        ctx.driver_input.init(());
        ctx.safety.init(());

        info!(
            "Components initialised: {}, {}, {}, {}, {}, {}",
            ctx.engine.version(),
            ctx.brake.version(),
            ctx.steering.version(),
            ctx.vehicle_dynamics.version(),
            ctx.driver_input.version(),
            ctx.safety.version()
        );

        ctx
    }
}

// ------------------------------------------------------------------------------------------------
// FUNCTIONS
// ------------------------------------------------------------------------------------------------

/// Build a scheduler with every simulation task registered.
pub fn build_scheduler<'a>() -> Scheduler<'a, SimContext> {
    let mut sched = Scheduler::new();

    let dt_10ms = RateClass::Every10ms.period_s();
    let dt_20ms = RateClass::Every20ms.period_s();
    let dt_100ms = RateClass::Every100ms.period_s();

    // ---- 10 ms ----

    sched.add_task(RateClass::Every10ms, "engine", move |ctx: &mut SimContext| {
        ctx.engine.step(&mut ctx.signals, dt_10ms)
    });
    sched.add_task(RateClass::Every10ms, "brake", move |ctx: &mut SimContext| {
        ctx.brake.step(&mut ctx.signals, dt_10ms)
    });
    sched.add_task(RateClass::Every10ms, "steering", move |ctx: &mut SimContext| {
        ctx.steering.step(&mut ctx.signals, dt_10ms)
    });
    sched.add_task(RateClass::Every10ms, "vehicle_dynamics", move |ctx: &mut SimContext| {
        ctx.vehicle_dynamics.step(&mut ctx.signals, dt_10ms)
    });
    sched.add_task(RateClass::Every10ms, "diag_10ms", |ctx: &mut SimContext| {
        ctx.diag.tick_10ms()
    });
    sched.add_task(RateClass::Every10ms, "signal_log", |ctx: &mut SimContext| {
        if let Some(logger) = ctx.logger.as_mut() {
            logger.tick(&ctx.signals);
        }
    });

    // ---- 20 ms ----

    sched.add_task(RateClass::Every20ms, "driver_input", move |ctx: &mut SimContext| {
        ctx.driver_input.step(&mut ctx.signals, dt_20ms)
    });

    // ---- 100 ms ----

    sched.add_task(RateClass::Every100ms, "safety", move |ctx: &mut SimContext| {
        ctx.safety.step(&mut ctx.signals, dt_100ms);
        ctx.diag.bump_heartbeat();
    });
    sched.add_task(RateClass::Every100ms, "diag_100ms", |ctx: &mut SimContext| {
        ctx.diag.tick_100ms()
    });

    sched
}

/// Run a complete simulation for `params.run.duration_s` seconds.
///
/// Returns the final context, so the caller can inspect the final signal
/// values, along with a summary of the run.
pub fn run_simulation(
    params: &SimParams,
    logger: Option<SignalLogger>
) -> (SimContext, RunSummary) {
    let mut ctx = SimContext::new(params);
    ctx.logger = logger;

    let mut sched = build_scheduler();

    info!("Starting simulation of {:.3} s", params.run.duration_s);

    let summary = sched.run(&mut ctx, params.run.duration_s);

    info!(
        "Simulation complete: {} ticks, {:.3} s simulated",
        summary.ticks,
        summary.sim_time_s
    );

    (ctx, summary)
}
