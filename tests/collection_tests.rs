//! Integration tests for StopwatchCollection

mod common;
use common::*;

use slice_stopwatch::{
    ActionOutcome, CollectionError, StopwatchAction, StopwatchCommand, StopwatchCollection,
    StopwatchState, TimeSlice, WatchId,
};

#[test]
fn members_share_the_time_source_but_not_state() {
    let timer = MockTimeSource::new();
    let mut collection = StopwatchCollection::<TestInstant, MockTimeSource, 8, 4>::new(&timer);

    collection.add_stopwatch(WatchId(0)).unwrap();
    collection.add_stopwatch(WatchId(1)).unwrap();

    timer.set_time(TestInstant(1000));
    collection
        .handle_command(StopwatchCommand::new(WatchId(0), StopwatchAction::Start))
        .unwrap();

    timer.set_time(TestInstant(1200));
    collection
        .handle_command(StopwatchCommand::new(WatchId(1), StopwatchAction::Start))
        .unwrap();

    timer.set_time(TestInstant(1500));
    assert_eq!(
        collection.get_elapsed_time(WatchId(0)),
        Ok(TestDuration(500))
    );
    assert_eq!(
        collection.get_elapsed_time(WatchId(1)),
        Ok(TestDuration(300))
    );
}

#[test]
fn command_routing_matches_direct_calls() {
    let timer = MockTimeSource::new();
    let mut collection = StopwatchCollection::<TestInstant, MockTimeSource, 8, 4>::new(&timer);

    collection.add_stopwatch(WatchId(2)).unwrap();

    timer.set_time(TestInstant(1000));
    collection
        .handle_command(StopwatchCommand::new(WatchId(2), StopwatchAction::Start))
        .unwrap();

    timer.set_time(TestInstant(1100));
    let outcome = collection
        .handle_command(StopwatchCommand::new(WatchId(2), StopwatchAction::Slice))
        .unwrap();
    assert_eq!(
        outcome,
        ActionOutcome::Sliced(TimeSlice::new(TestDuration(0), TestDuration(100)))
    );

    timer.set_time(TestInstant(1250));
    let outcome = collection
        .handle_command(StopwatchCommand::new(
            WatchId(2),
            StopwatchAction::StopAndSlice,
        ))
        .unwrap();
    assert_eq!(outcome, ActionOutcome::Elapsed(TestDuration(250)));

    assert_eq!(
        collection.get_completed_slices(WatchId(2)),
        Ok(&[
            TimeSlice::new(TestDuration(0), TestDuration(100)),
            TimeSlice::new(TestDuration(100), TestDuration(250)),
        ][..])
    );
}

#[test]
fn batch_start_and_stop_take_one_reading_per_member() {
    let timer = MockTimeSource::new();
    let mut collection = StopwatchCollection::<TestInstant, MockTimeSource, 8, 4>::new(&timer);

    collection.add_stopwatch(WatchId(0)).unwrap();
    collection.add_stopwatch(WatchId(1)).unwrap();
    collection.add_stopwatch(WatchId(3)).unwrap();

    timer.set_time(TestInstant(1000));
    collection.start_all();
    assert_eq!(timer.reads(), 3);

    timer.set_time(TestInstant(1100));
    collection.stop_all();
    assert_eq!(timer.reads(), 6);

    for id in [WatchId(0), WatchId(1), WatchId(3)] {
        assert_eq!(collection.get_state(id), Ok(StopwatchState::Stopped));
        assert_eq!(collection.get_elapsed_time(id), Ok(TestDuration(100)));
    }
}

#[test]
fn reset_all_returns_every_member_to_idle() {
    let timer = MockTimeSource::new();
    let mut collection = StopwatchCollection::<TestInstant, MockTimeSource, 8, 4>::new(&timer);

    collection.add_stopwatch(WatchId(0)).unwrap();
    collection.add_stopwatch(WatchId(1)).unwrap();

    timer.set_time(TestInstant(1000));
    collection.start_all();
    timer.set_time(TestInstant(1100));
    collection
        .handle_command(StopwatchCommand::new(WatchId(0), StopwatchAction::Slice))
        .unwrap();

    collection.reset_all();

    for id in [WatchId(0), WatchId(1)] {
        assert_eq!(collection.get_state(id), Ok(StopwatchState::Idle));
        assert_eq!(collection.get_elapsed_time(id), Ok(TestDuration(0)));
        assert_eq!(collection.get_completed_slices(id), Ok(&[][..]));
    }
}

#[test]
fn queries_against_missing_members_fail_cleanly() {
    let timer = MockTimeSource::new();
    let mut collection = StopwatchCollection::<TestInstant, MockTimeSource, 8, 4>::new(&timer);

    collection.add_stopwatch(WatchId(0)).unwrap();
    collection.remove_stopwatch(WatchId(0)).unwrap();

    assert_eq!(
        collection.get_state(WatchId(0)),
        Err(CollectionError::InvalidWatchId(WatchId(0)))
    );
    assert_eq!(
        collection.get_elapsed_time(WatchId(9)),
        Err(CollectionError::InvalidWatchId(WatchId(9)))
    );
    assert!(collection.is_empty());
}
