//! Diagnostics
//!
//! Counts scheduler ticks and holds the supervisor heartbeat. Nothing in the
//! control loop currently consumes these counters, they are kept so that a
//! watchdog or a health monitor can be attached later.

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Diagnostic counters, owned by the run context.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Diag {
    heartbeat: u32,
    ticks_10ms: u64,
    ticks_100ms: u64,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Diag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Called once per 10 ms tick.
    pub fn tick_10ms(&mut self) {
        self.ticks_10ms += 1;
    }

    /// Called once per 100 ms tick.
    pub fn tick_100ms(&mut self) {
        self.ticks_100ms += 1;
    }

    /// Advance the heartbeat counter, wrapping on overflow.
    pub fn bump_heartbeat(&mut self) {
        self.heartbeat = self.heartbeat.wrapping_add(1);
    }

    pub fn heartbeat(&self) -> u32 {
        self.heartbeat
    }

    pub fn ticks_10ms(&self) -> u64 {
        self.ticks_10ms
    }

    pub fn ticks_100ms(&self) -> u64 {
        self.ticks_100ms
    }
}
