//! Named soft assertions recorded against responses.
//!
//! A check never affects control flow: it tallies pass/fail and emits a
//! labeled counter, and the caller decides what to do with the verdict.

use metrics::counter;
use std::sync::atomic::{AtomicU64, Ordering};

/// A single named pass/fail tally.
pub struct Check {
    name: &'static str,
    passes: AtomicU64,
    fails: AtomicU64,
}

impl Check {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            passes: AtomicU64::new(0),
            fails: AtomicU64::new(0),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Record one evaluation and hand the verdict back to the caller.
    pub fn record(&self, passed: bool) -> bool {
        if passed {
            self.passes.fetch_add(1, Ordering::Relaxed);
            counter!("check_passed", "check" => self.name).increment(1);
        } else {
            self.fails.fetch_add(1, Ordering::Relaxed);
            counter!("check_failed", "check" => self.name).increment(1);
        }
        passed
    }

    pub fn passes(&self) -> u64 {
        self.passes.load(Ordering::Relaxed)
    }

    pub fn fails(&self) -> u64 {
        self.fails.load(Ordering::Relaxed)
    }
}
