//! Stopwatch state machine with pause/resume accounting and slice recording.
//!
//! Provides [`Stopwatch`] which tracks elapsed duration between start/stop
//! events against an injected time source, excluding stopped intervals from
//! the total, and subdivides the elapsed duration into contiguous
//! [`TimeSlice`] records.

use crate::command::StopwatchAction;
use crate::slice::TimeSlice;
use crate::time::{TimeDuration, TimeInstant, TimeSource};
use heapless::Vec;

/// The current state of a stopwatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StopwatchState {
    /// Never started since construction or the last reset. Elapsed is zero.
    Idle,
    /// Actively accumulating elapsed duration.
    Running,
    /// Frozen at the instant of the last stop. Elapsed does not advance.
    Stopped,
}

/// Errors that can occur during stopwatch operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StopwatchError {
    /// The completed-slice storage is full.
    SliceCapacityExceeded,
}

impl core::fmt::Display for StopwatchError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            StopwatchError::SliceCapacityExceeded => {
                write!(f, "completed slice capacity exceeded")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for StopwatchError {}

/// Result of dispatching a [`StopwatchAction`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ActionOutcome<D: TimeDuration> {
    /// Action completed without producing a reading.
    Done,
    /// Action produced an elapsed-duration reading.
    Elapsed(D),
    /// Action recorded a slice.
    Sliced(TimeSlice<D>),
}

/// Tracks elapsed duration between start/stop events and records time slices.
///
/// A stopwatch owns a small set of time markers and derives every reading
/// lazily from them plus its time source: there is no background activity,
/// and each operation reads the source at most once. Stopping freezes the
/// elapsed duration; starting again resumes it with the stopped interval
/// excluded from the total. The elapsed duration can be subdivided into
/// contiguous slices (lap splits) via [`slice`](Self::slice), each new slice
/// starting exactly where the previous one ended.
///
/// The state (idle, running, stopped) is derived from which markers are
/// present, never stored separately.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `I` - Time instant type
/// * `T` - Time source implementation type
/// * `N` - Maximum number of completed slices
pub struct Stopwatch<'t, I: TimeInstant, T: TimeSource<I>, const N: usize> {
    time_source: &'t T,
    start_time: Option<I>,
    stop_time: Option<I>,
    stopped_total: I::Duration,
    pending_slice_start: Option<I::Duration>,
    slices: Vec<TimeSlice<I::Duration>, N>,
}

impl<'t, I: TimeInstant, T: TimeSource<I>, const N: usize> Stopwatch<'t, I, T, N> {
    /// Creates a new idle stopwatch.
    pub fn new(time_source: &'t T) -> Self {
        Self {
            time_source,
            start_time: None,
            stop_time: None,
            stopped_total: I::Duration::ZERO,
            pending_slice_start: None,
            slices: Vec::new(),
        }
    }

    /// Handles a stopwatch action by dispatching to the appropriate method.
    ///
    /// This is a convenience method for command-based control, allowing
    /// actions to be dispatched without matching on the action type manually.
    ///
    /// # Returns
    /// * `Ok(ActionOutcome::Done)` - For actions that produce no reading
    /// * `Ok(ActionOutcome::Elapsed(d))` - For `Stop` and `StopAndSlice`
    /// * `Ok(ActionOutcome::Sliced(s))` - For `Slice`
    /// * `Err` - Slice recording failed (storage full)
    pub fn handle_action(
        &mut self,
        action: StopwatchAction,
    ) -> Result<ActionOutcome<I::Duration>, StopwatchError> {
        match action {
            StopwatchAction::Start => {
                self.start();
                Ok(ActionOutcome::Done)
            }
            StopwatchAction::Stop => Ok(ActionOutcome::Elapsed(self.stop())),
            StopwatchAction::StopAndSlice => Ok(ActionOutcome::Elapsed(self.stop_and_slice()?)),
            StopwatchAction::Slice => Ok(ActionOutcome::Sliced(self.slice()?)),
            StopwatchAction::Reset => {
                self.reset();
                Ok(ActionOutcome::Done)
            }
            StopwatchAction::Restart => {
                self.restart();
                Ok(ActionOutcome::Done)
            }
        }
    }

    /// Starts the stopwatch, or resumes it from stopped.
    ///
    /// From idle, the elapsed duration begins accumulating at zero and the
    /// first pending slice opens. From stopped, the interval spent stopped
    /// is folded into the dead-time total so it never counts toward the
    /// elapsed duration; the pending slice is left where it was. Calling
    /// `start` while already running is a no-op and does not read the time
    /// source.
    pub fn start(&mut self) {
        match (self.start_time, self.stop_time) {
            (Some(_), Some(frozen)) => {
                let now = self.time_source.now();
                self.stopped_total = self.stopped_total.saturating_add(now.duration_since(frozen));
                self.stop_time = None;
            }
            (None, _) => {
                self.start_time = Some(self.time_source.now());
                self.pending_slice_start = Some(I::Duration::ZERO);
            }
            (Some(_), None) => {}
        }
    }

    /// Resets the stopwatch, then starts it fresh from the current instant.
    ///
    /// Discards all recorded slices and accumulated dead time. Reads the
    /// time source exactly once.
    pub fn restart(&mut self) {
        self.reset();
        self.start();
    }

    /// Stops the stopwatch and returns the frozen elapsed duration.
    ///
    /// While stopped, the elapsed duration and the pending slice no longer
    /// advance. Re-stopping an already stopped watch reuses the frozen
    /// instant without reading the time source, so the returned value is
    /// unchanged. Stopping an idle watch is a no-op returning zero.
    pub fn stop(&mut self) -> I::Duration {
        let Some(start) = self.start_time else {
            return I::Duration::ZERO;
        };

        let frozen = match self.stop_time {
            Some(instant) => instant,
            None => self.time_source.now(),
        };
        self.stop_time = Some(frozen);

        frozen.duration_since(start).saturating_sub(self.stopped_total)
    }

    /// Records the pending slice, then stops, on one shared reading.
    ///
    /// The recorded slice ends at exactly the elapsed duration the stop
    /// freezes — the time source is read at most once, never once per step,
    /// so this is equivalent to [`slice`](Self::slice) followed by
    /// [`stop`](Self::stop) at the same instant. Works whether running or
    /// already stopped. On an idle watch this is a no-op returning zero.
    ///
    /// # Errors
    /// `SliceCapacityExceeded` if the slice storage is full. The stopwatch
    /// still stops; only the recording is skipped.
    pub fn stop_and_slice(&mut self) -> Result<I::Duration, StopwatchError> {
        if self.start_time.is_none() {
            return Ok(I::Duration::ZERO);
        }

        let elapsed = self.stop();
        self.record_slice(elapsed)?;
        Ok(elapsed)
    }

    /// Resets the stopwatch to idle.
    ///
    /// Clears the time markers, the dead-time total, and all recorded
    /// slices. Does not read the time source.
    pub fn reset(&mut self) {
        self.start_time = None;
        self.stop_time = None;
        self.stopped_total = I::Duration::ZERO;
        self.pending_slice_start = None;
        self.slices.clear();
    }

    /// Ends and records the current pending slice, then opens the next one.
    ///
    /// The new pending slice starts exactly where the recorded one ended,
    /// so consecutive slices are contiguous. Calling `slice` twice without
    /// elapsed-duration progress (or while stopped) records a zero-length
    /// slice. Does not change the running/stopped state. On a never-started
    /// watch this is a no-op returning the zero slice.
    ///
    /// # Errors
    /// `SliceCapacityExceeded` if the slice storage is full; the pending
    /// slice is left unchanged.
    pub fn slice(&mut self) -> Result<TimeSlice<I::Duration>, StopwatchError> {
        if self.pending_slice_start.is_none() {
            return Ok(TimeSlice::zero());
        }

        let end = self.elapsed_time();
        self.record_slice(end)
    }

    /// Appends the pending slice ending at `end` and re-opens it there.
    fn record_slice(
        &mut self,
        end: I::Duration,
    ) -> Result<TimeSlice<I::Duration>, StopwatchError> {
        let start = self.pending_slice_start.unwrap_or(I::Duration::ZERO);
        let slice = TimeSlice::new(start, end);

        if self.slices.push(slice).is_err() {
            return Err(StopwatchError::SliceCapacityExceeded);
        }

        self.pending_slice_start = Some(end);
        Ok(slice)
    }

    /// Returns the elapsed duration accumulated while running.
    ///
    /// Zero while idle (no time-source read). Frozen while stopped (no
    /// read). While running, reads the time source once and returns the
    /// time since the initial start minus the total spent stopped; given a
    /// non-decreasing source the value never decreases between calls.
    pub fn elapsed_time(&self) -> I::Duration {
        let Some(start) = self.start_time else {
            return I::Duration::ZERO;
        };

        let now = match self.stop_time {
            Some(frozen) => frozen,
            None => self.time_source.now(),
        };

        now.duration_since(start).saturating_sub(self.stopped_total)
    }

    /// Returns a snapshot of the in-progress, not-yet-recorded slice.
    ///
    /// Its end is the current elapsed duration, so the snapshot advances
    /// while running and is frozen while stopped. Before the first start
    /// this is the zero slice and the time source is not read.
    pub fn pending_slice(&self) -> TimeSlice<I::Duration> {
        match self.pending_slice_start {
            None => TimeSlice::zero(),
            Some(start) => TimeSlice::new(start, self.elapsed_time()),
        }
    }

    /// Returns the recorded slices in recording order.
    pub fn completed_slices(&self) -> &[TimeSlice<I::Duration>] {
        &self.slices
    }

    /// Returns the number of recorded slices.
    pub fn slice_count(&self) -> usize {
        self.slices.len()
    }

    /// Returns the recorded slices followed by a pending-slice snapshot.
    ///
    /// The pending snapshot is taken once, when this method is called; the
    /// returned sequence is freshly built per call.
    pub fn completed_and_pending_slices(
        &self,
    ) -> impl Iterator<Item = TimeSlice<I::Duration>> + '_ {
        self.slices
            .iter()
            .copied()
            .chain(core::iter::once(self.pending_slice()))
    }

    /// Returns the current state of the stopwatch.
    ///
    /// Derived from the time markers; never reads the time source.
    pub fn state(&self) -> StopwatchState {
        match (self.start_time.is_some(), self.stop_time.is_some()) {
            (false, _) => StopwatchState::Idle,
            (true, false) => StopwatchState::Running,
            (true, true) => StopwatchState::Stopped,
        }
    }

    /// Returns true if the stopwatch has never started since the last reset.
    pub fn is_idle(&self) -> bool {
        self.state() == StopwatchState::Idle
    }

    /// Returns true if the stopwatch is currently running.
    pub fn is_running(&self) -> bool {
        self.state() == StopwatchState::Running
    }

    /// Returns true if the stopwatch is currently stopped.
    pub fn is_stopped(&self) -> bool {
        self.state() == StopwatchState::Stopped
    }
}
