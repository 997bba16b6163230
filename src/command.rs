//! Command-based control for stopwatches.

/// Actions for controlling stopwatches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopwatchAction {
    /// Start, or resume from stopped.
    Start,
    /// Stop and freeze the elapsed reading.
    Stop,
    /// Record the pending slice and stop on the same reading.
    StopAndSlice,
    /// Record the pending slice and open the next one.
    Slice,
    /// Clear all timing state.
    Reset,
    /// Reset, then start fresh from the current instant.
    Restart,
}

/// Command targeting a specific stopwatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StopwatchCommand<Id> {
    pub watch_id: Id,
    pub action: StopwatchAction,
}

impl<Id> StopwatchCommand<Id> {
    /// Creates command.
    pub fn new(watch_id: Id, action: StopwatchAction) -> Self {
        Self { watch_id, action }
    }
}
