#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`Stopwatch`**: Tracks elapsed duration between start/stop events and records time slices
//! - **`TimeSlice`**: An immutable record of one contiguous sub-interval of elapsed duration
//! - **`StopwatchState`**: Whether a stopwatch is `Idle`, `Running`, or `Stopped`
//! - **`StopwatchAction`**: Commands that can be sent to control stopwatches
//! - **`StopwatchCollection`**: Coordinates multiple stopwatches sharing one time source
//! - **`TimeSource`**: Trait to implement for your timing system
//! - **`SystemClock`** (`std` only): Wall-clock time source with a configurable process-wide default
//!
//! All slice boundaries are elapsed-duration values: time accumulated while
//! running, with stopped intervals already excluded. Readings are derived
//! lazily from a handful of markers, so a stopwatch costs nothing while
//! nobody queries it, and every operation reads the time source at most once.

pub mod time;
pub mod slice;
pub mod stopwatch;
pub mod command;
pub mod collection;
#[cfg(feature = "std")]
pub mod clock;

pub use slice::TimeSlice;
pub use stopwatch::{ActionOutcome, Stopwatch, StopwatchError, StopwatchState};
pub use time::{TimeDuration, TimeInstant, TimeSource};
pub use command::{StopwatchAction, StopwatchCommand};
pub use collection::{CollectionError, StopwatchCollection, WatchId};
#[cfg(feature = "std")]
pub use clock::{
    SystemClock, SystemTimeGetter, default_time_getter, reset_default_time_getter,
    set_default_time_getter, wall_clock_millis,
};
