//! Injectable time sources.
//!
//! Goal decay depends on elapsed wall-clock time, which makes naive tests
//! non-deterministic. The agent reads time through the [`Clock`] trait so
//! tests and simulations can drive it with a [`ManualClock`] instead of the
//! real [`SystemClock`].

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// A source of the current instant.
pub trait Clock: fmt::Debug {
    /// The current instant according to this clock.
    fn now(&self) -> Instant;
}

/// The real wall clock. Default for production agents.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A manually advanced clock for tests and simulated time.
///
/// Clones share the same underlying instant, so a handle kept outside the
/// agent can advance the clock the agent reads.
#[derive(Debug, Clone)]
pub struct ManualClock {
    current: Rc<Cell<Instant>>,
}

impl ManualClock {
    /// Create a manual clock frozen at the current instant.
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    /// Create a manual clock frozen at a specific instant.
    pub fn starting_at(instant: Instant) -> Self {
        Self {
            current: Rc::new(Cell::new(instant)),
        }
    }

    /// Move the clock forward. Affects all clones of this clock.
    pub fn advance(&self, by: Duration) {
        self.current.set(self.current.get() + by);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.current.get()
    }
}
