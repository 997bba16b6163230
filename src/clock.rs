//! Wall-clock time source for hosted targets.
//!
//! Provides [`SystemClock`], a [`TimeSource`] yielding milliseconds since
//! the Unix epoch as `u64` instants, and the process-wide default getter it
//! is built from. The default getter is explicit, named configuration: it
//! can be replaced (e.g. with a deterministic counter in tests) and read
//! back for save/restore, and it only affects clocks constructed after the
//! change — every `SystemClock` captures its getter once, at construction,
//! and keeps it for its whole lifetime.

use crate::time::TimeSource;
use std::sync::RwLock;
use std::time::{SystemTime, UNIX_EPOCH};

/// Function returning the current time in milliseconds.
pub type SystemTimeGetter = fn() -> u64;

static DEFAULT_GETTER: RwLock<SystemTimeGetter> = RwLock::new(wall_clock_millis);

/// Milliseconds elapsed since the Unix epoch, per the host wall clock.
///
/// This is the built-in default getter. Returns zero for host clocks set
/// before 1970.
pub fn wall_clock_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or(0)
}

/// Replaces the process-wide default time getter.
///
/// Affects only [`SystemClock`]s constructed afterwards; existing clocks
/// keep the getter they captured.
pub fn set_default_time_getter(getter: SystemTimeGetter) {
    *DEFAULT_GETTER.write().unwrap() = getter;
}

/// Restores [`wall_clock_millis`] as the process-wide default time getter.
pub fn reset_default_time_getter() {
    set_default_time_getter(wall_clock_millis);
}

/// Returns the current process-wide default time getter.
///
/// Lets tests save the default before replacing it and restore it after.
pub fn default_time_getter() -> SystemTimeGetter {
    *DEFAULT_GETTER.read().unwrap()
}

/// A time source reading the wall clock in milliseconds.
///
/// `SystemClock::new()` captures whatever getter is the process-wide
/// default at that moment; [`with_getter`](Self::with_getter) bypasses the
/// default entirely. Wall-clock readings satisfy the non-decreasing
/// [`TimeSource`] contract on hosts whose clock is not stepped backwards;
/// hosts that need immunity to clock adjustments should inject a monotonic
/// getter instead.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    getter: SystemTimeGetter,
}

impl SystemClock {
    /// Creates a clock using the current process-wide default getter.
    pub fn new() -> Self {
        Self {
            getter: default_time_getter(),
        }
    }

    /// Creates a clock using the given getter, ignoring the default.
    pub fn with_getter(getter: SystemTimeGetter) -> Self {
        Self { getter }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource<u64> for SystemClock {
    fn now(&self) -> u64 {
        (self.getter)()
    }
}
