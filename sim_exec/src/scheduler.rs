//! # Multi-rate scheduler
//!
//! A deterministic, single threaded, fixed step scheduler. Time is logical
//! only: the scheduler never sleeps, it simply counts 10 ms ticks.
//!
//! On every tick `i` the task lists are run in this order:
//!
//! 1. every 10 ms task,
//! 2. every 20 ms task, if `i` is even,
//! 3. every 100 ms task, if `i` is a multiple of 10.
//!
//! Within a list tasks run in the order they were added. Because the 10 ms
//! list always runs first, a 20 ms task's output is first seen by the 10 ms
//! tasks on the following tick.

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use log::{debug, trace};

// ------------------------------------------------------------------------------------------------
// CONSTANTS
// ------------------------------------------------------------------------------------------------

/// Period of one scheduler tick.
///
/// Units: seconds
pub const TICK_PERIOD_S: f64 = 0.010;

// ------------------------------------------------------------------------------------------------
// DATA STRUCTURES
// ------------------------------------------------------------------------------------------------

/// The rate at which a task is invoked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RateClass {
    Every10ms,
    Every20ms,
    Every100ms,
}

/// A task's body, receiving the run context.
pub type TaskFn<'a, C> = Box<dyn FnMut(&mut C) + 'a>;

/// A named task.
struct Task<'a, C> {
    name: &'static str,
    body: TaskFn<'a, C>,
}

/// Ordered task lists for each rate class.
pub struct Scheduler<'a, C> {
    tasks_10ms: Vec<Task<'a, C>>,
    tasks_20ms: Vec<Task<'a, C>>,
    tasks_100ms: Vec<Task<'a, C>>,
}

/// What a call to [`Scheduler::run`] did.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RunSummary {
    /// Number of 10 ms ticks executed.
    pub ticks: u64,

    /// Number of times the 10 ms list ran.
    pub invocations_10ms: u64,

    /// Number of times the 20 ms list ran.
    pub invocations_20ms: u64,

    /// Number of times the 100 ms list ran.
    pub invocations_100ms: u64,

    /// Logical time covered by the run.
    ///
    /// Units: seconds
    pub sim_time_s: f64,
}

// ------------------------------------------------------------------------------------------------
// IMPLEMENTATIONS
// ------------------------------------------------------------------------------------------------

impl RateClass {
    /// Number of ticks between invocations.
    pub fn period_ticks(self) -> u64 {
        match self {
            RateClass::Every10ms => 1,
            RateClass::Every20ms => 2,
            RateClass::Every100ms => 10,
        }
    }

    /// Units: seconds
    pub fn period_s(self) -> f64 {
        self.period_ticks() as f64 * TICK_PERIOD_S
    }

    /// True if tasks of this class run on tick `tick`.
    pub fn fires_on(self, tick: u64) -> bool {
        tick % self.period_ticks() == 0
    }
}

impl<'a, C> Scheduler<'a, C> {
    /// Create a scheduler with no tasks.
    pub fn new() -> Self {
        Self {
            tasks_10ms: Vec::new(),
            tasks_20ms: Vec::new(),
            tasks_100ms: Vec::new(),
        }
    }

    /// Append a task to the list of the given rate class.
    pub fn add_task<F>(&mut self, rate: RateClass, name: &'static str, task: F)
    where
        F: FnMut(&mut C) + 'a
    {
        debug!("Adding task \"{}\" at {:?}", name, rate);

        let task = Task { name, body: Box::new(task) };

        match rate {
            RateClass::Every10ms => self.tasks_10ms.push(task),
            RateClass::Every20ms => self.tasks_20ms.push(task),
            RateClass::Every100ms => self.tasks_100ms.push(task),
        }
    }

    /// Number of tasks registered at the given rate.
    pub fn num_tasks(&self, rate: RateClass) -> usize {
        self.list(rate).len()
    }

    /// Names of the tasks registered at the given rate, in execution order.
    pub fn task_names(&self, rate: RateClass) -> Vec<&'static str> {
        self.list(rate).iter().map(|t| t.name).collect()
    }

    /// Number of ticks a run of `total_seconds` executes.
    ///
    /// The duration is rounded to the nearest tick. Negative or non-finite
    /// durations run no ticks.
    pub fn ticks_for(total_seconds: f64) -> u64 {
        let ticks = (total_seconds / TICK_PERIOD_S).round();

        if ticks.is_finite() && ticks > 0.0 {
            ticks as u64
        }
        else {
            0
        }
    }

    /// Run every task for `total_seconds` of logical time.
    pub fn run(&mut self, ctx: &mut C, total_seconds: f64) -> RunSummary {
        let num_ticks = Self::ticks_for(total_seconds);
        let mut summary = RunSummary::default();

        debug!(
            "Running {} ticks ({} x 10 ms, {} x 20 ms, {} x 100 ms tasks)",
            num_ticks,
            self.tasks_10ms.len(),
            self.tasks_20ms.len(),
            self.tasks_100ms.len()
        );

        for tick in 0..num_ticks {
            Self::run_list(&mut self.tasks_10ms, ctx, tick);
            summary.invocations_10ms += 1;

            if RateClass::Every20ms.fires_on(tick) {
                Self::run_list(&mut self.tasks_20ms, ctx, tick);
                summary.invocations_20ms += 1;
            }

            if RateClass::Every100ms.fires_on(tick) {
                Self::run_list(&mut self.tasks_100ms, ctx, tick);
                summary.invocations_100ms += 1;
            }

            summary.ticks += 1;
        }

        summary.sim_time_s = summary.ticks as f64 * TICK_PERIOD_S;

        summary
    }

    fn list(&self, rate: RateClass) -> &Vec<Task<'a, C>> {
        match rate {
            RateClass::Every10ms => &self.tasks_10ms,
            RateClass::Every20ms => &self.tasks_20ms,
            RateClass::Every100ms => &self.tasks_100ms,
        }
    }

    fn run_list(tasks: &mut [Task<'a, C>], ctx: &mut C, tick: u64) {
        for task in tasks.iter_mut() {
            trace!("tick {}: {}", tick, task.name);
            (task.body)(ctx);
        }
    }
}

impl<'a, C> Default for Scheduler<'a, C> {
    fn default() -> Self {
        Self::new()
    }
}
