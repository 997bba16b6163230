use crate::command::StopwatchCommand;
use crate::slice::TimeSlice;
use crate::stopwatch::{ActionOutcome, Stopwatch, StopwatchError, StopwatchState};
use crate::time::{TimeInstant, TimeSource};

/// An identifier for a stopwatch within a collection.
///
/// This is a simple wrapper around `usize` that provides type safety for
/// stopwatch identifiers. Users specify watch IDs when adding stopwatches to
/// a collection, and use these IDs to target specific stopwatches with
/// commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WatchId(pub usize);

impl From<usize> for WatchId {
    fn from(id: usize) -> Self {
        WatchId(id)
    }
}

impl From<WatchId> for usize {
    fn from(id: WatchId) -> Self {
        id.0
    }
}

/// Errors that can occur during collection operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionError {
    /// The specified watch ID does not exist in the collection.
    InvalidWatchId(WatchId),

    /// Attempted to add a stopwatch with an ID that already exists.
    DuplicateWatchId(WatchId),

    /// The watch ID exceeds the collection's capacity.
    WatchIdOutOfBounds { id: WatchId, capacity: usize },

    /// A stopwatch operation failed.
    StopwatchError(StopwatchError),
}

impl core::fmt::Display for CollectionError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CollectionError::InvalidWatchId(id) => {
                write!(f, "watch ID {} does not exist in collection", id.0)
            }
            CollectionError::DuplicateWatchId(id) => {
                write!(f, "watch ID {} already exists in collection", id.0)
            }
            CollectionError::WatchIdOutOfBounds { id, capacity } => {
                write!(
                    f,
                    "watch ID {} exceeds collection capacity of {}",
                    id.0, capacity
                )
            }
            CollectionError::StopwatchError(err) => {
                write!(f, "stopwatch error: {}", err)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CollectionError {}

impl From<StopwatchError> for CollectionError {
    fn from(err: StopwatchError) -> Self {
        CollectionError::StopwatchError(err)
    }
}

/// Manages a collection of stopwatches for coordinated multi-channel timing.
///
/// This is a convenience wrapper that handles routing commands to individual
/// stopwatches and provides batch start/stop/reset of all watches. Each
/// stopwatch in the collection is identified by a user-specified [`WatchId`]
/// and shares the collection's time source, so readings taken across members
/// are mutually comparable.
///
/// Storage is a fixed-size array of optional slots, so collections work
/// without heap allocation.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `I` - Time instant type
/// * `T` - Time source implementation type
/// * `N` - Maximum number of completed slices per stopwatch
/// * `MAX_WATCHES` - Maximum number of stopwatches this collection can hold
pub struct StopwatchCollection<'t, I: TimeInstant, T: TimeSource<I>, const N: usize, const MAX_WATCHES: usize> {
    watches: [Option<Stopwatch<'t, I, T, N>>; MAX_WATCHES],
    time_source: &'t T,
}

impl<'t, I, T, const N: usize, const MAX_WATCHES: usize>
    StopwatchCollection<'t, I, T, N, MAX_WATCHES>
where
    I: TimeInstant,
    T: TimeSource<I>,
{
    /// Creates a new empty stopwatch collection.
    ///
    /// # Arguments
    /// * `time_source` - Reference to the time source shared by all members
    pub fn new(time_source: &'t T) -> Self {
        Self {
            watches: core::array::from_fn(|_| None),
            time_source,
        }
    }

    /// Adds a stopwatch to the collection with the specified watch ID.
    ///
    /// The new stopwatch starts out idle and uses the collection's time
    /// source. The provided ID is used to reference this stopwatch in
    /// future commands.
    ///
    /// # Errors
    /// * `DuplicateWatchId` - A stopwatch with this ID already exists
    /// * `WatchIdOutOfBounds` - The ID exceeds the collection's capacity
    pub fn add_stopwatch(&mut self, id: WatchId) -> Result<(), CollectionError> {
        let idx = id.0;

        if idx >= MAX_WATCHES {
            return Err(CollectionError::WatchIdOutOfBounds {
                id,
                capacity: MAX_WATCHES,
            });
        }

        if self.watches[idx].is_some() {
            return Err(CollectionError::DuplicateWatchId(id));
        }

        self.watches[idx] = Some(Stopwatch::new(self.time_source));
        Ok(())
    }

    /// Removes the stopwatch with the specified ID, discarding its state.
    ///
    /// # Errors
    /// Returns `InvalidWatchId` if no stopwatch with this ID exists.
    pub fn remove_stopwatch(&mut self, id: WatchId) -> Result<(), CollectionError> {
        let idx = id.0;

        if idx >= MAX_WATCHES || self.watches[idx].is_none() {
            return Err(CollectionError::InvalidWatchId(id));
        }

        self.watches[idx] = None;
        Ok(())
    }

    /// Routes a command to the stopwatch it addresses.
    ///
    /// # Returns
    /// * `Ok(outcome)` - The addressed stopwatch handled the action
    /// * `Err` - Invalid watch ID or stopwatch operation failed
    pub fn handle_command(
        &mut self,
        command: StopwatchCommand<WatchId>,
    ) -> Result<ActionOutcome<I::Duration>, CollectionError> {
        let watch = self.watch_mut(command.watch_id)?;
        Ok(watch.handle_action(command.action)?)
    }

    /// Starts (or resumes) every stopwatch in the collection.
    pub fn start_all(&mut self) {
        for watch in self.watches.iter_mut().flatten() {
            watch.start();
        }
    }

    /// Stops every stopwatch in the collection.
    pub fn stop_all(&mut self) {
        for watch in self.watches.iter_mut().flatten() {
            watch.stop();
        }
    }

    /// Resets every stopwatch in the collection to idle.
    pub fn reset_all(&mut self) {
        for watch in self.watches.iter_mut().flatten() {
            watch.reset();
        }
    }

    /// Returns the current state of the specified stopwatch.
    ///
    /// # Errors
    /// Returns `InvalidWatchId` if no stopwatch with this ID exists.
    pub fn get_state(&self, id: WatchId) -> Result<StopwatchState, CollectionError> {
        Ok(self.watch(id)?.state())
    }

    /// Returns the elapsed duration of the specified stopwatch.
    ///
    /// # Errors
    /// Returns `InvalidWatchId` if no stopwatch with this ID exists.
    pub fn get_elapsed_time(&self, id: WatchId) -> Result<I::Duration, CollectionError> {
        Ok(self.watch(id)?.elapsed_time())
    }

    /// Returns the recorded slices of the specified stopwatch.
    ///
    /// # Errors
    /// Returns `InvalidWatchId` if no stopwatch with this ID exists.
    pub fn get_completed_slices(
        &self,
        id: WatchId,
    ) -> Result<&[TimeSlice<I::Duration>], CollectionError> {
        Ok(self.watch(id)?.completed_slices())
    }

    /// Returns the number of stopwatches currently in the collection.
    pub fn len(&self) -> usize {
        self.watches.iter().filter(|w| w.is_some()).count()
    }

    /// Returns true if the collection contains no stopwatches.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if the collection contains a stopwatch with the given ID.
    pub fn contains(&self, id: WatchId) -> bool {
        let idx = id.0;
        idx < MAX_WATCHES && self.watches[idx].is_some()
    }

    fn watch(&self, id: WatchId) -> Result<&Stopwatch<'t, I, T, N>, CollectionError> {
        let idx = id.0;

        if idx >= MAX_WATCHES {
            return Err(CollectionError::InvalidWatchId(id));
        }

        self.watches[idx]
            .as_ref()
            .ok_or(CollectionError::InvalidWatchId(id))
    }

    fn watch_mut(&mut self, id: WatchId) -> Result<&mut Stopwatch<'t, I, T, N>, CollectionError> {
        let idx = id.0;

        if idx >= MAX_WATCHES {
            return Err(CollectionError::InvalidWatchId(id));
        }

        self.watches[idx]
            .as_mut()
            .ok_or(CollectionError::InvalidWatchId(id))
    }
}
