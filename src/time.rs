//! Time abstraction traits for platform-agnostic timing.

/// Trait for abstracting time sources.
///
/// Contract: successive calls to [`now`](Self::now) on the same source must
/// return non-decreasing instants (they need not be strictly increasing).
/// A source that goes backwards yields saturated, caller-attributable
/// readings rather than panics.
pub trait TimeSource<I: TimeInstant> {
    /// Returns the current time instant.
    fn now(&self) -> I;
}

/// Trait abstraction for duration types.
pub trait TimeDuration: Copy + PartialEq {
    /// Zero duration constant.
    const ZERO: Self;

    /// Converts duration to milliseconds.
    fn as_millis(&self) -> u64;

    /// Creates duration from milliseconds.
    fn from_millis(millis: u64) -> Self;

    /// Saturating addition (clamps at the type's maximum).
    fn saturating_add(self, other: Self) -> Self;

    /// Saturating subtraction (returns ZERO on underflow).
    fn saturating_sub(self, other: Self) -> Self;
}

/// Trait abstraction for instant types.
pub trait TimeInstant: Copy {
    /// Duration type for this instant.
    type Duration: TimeDuration;

    /// Calculates duration since an earlier instant.
    ///
    /// Returns zero if `earlier` is actually later than `self`.
    fn duration_since(&self, earlier: Self) -> Self::Duration;
}

/// Bare millisecond counts as durations.
impl TimeDuration for u64 {
    const ZERO: Self = 0;

    fn as_millis(&self) -> u64 {
        *self
    }

    fn from_millis(millis: u64) -> Self {
        millis
    }

    fn saturating_add(self, other: Self) -> Self {
        u64::saturating_add(self, other)
    }

    fn saturating_sub(self, other: Self) -> Self {
        u64::saturating_sub(self, other)
    }
}

/// Bare millisecond tick counts as instants (e.g. a hardware tick counter
/// or a wall-clock timestamp).
impl TimeInstant for u64 {
    type Duration = u64;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        u64::saturating_sub(*self, earlier)
    }
}
