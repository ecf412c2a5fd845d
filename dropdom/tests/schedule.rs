use std::time::{Duration, Instant};

use dropdom::Schedule;

#[test]
fn test_drain_returns_only_due_tasks() {
    let mut schedule = Schedule::new();
    let t0 = Instant::now();

    schedule.defer(0, Duration::from_millis(50), t0);
    schedule.defer(1, Duration::from_millis(100), t0);

    assert_eq!(schedule.drain_due(t0 + Duration::from_millis(10)), Vec::<usize>::new());
    assert_eq!(schedule.drain_due(t0 + Duration::from_millis(60)), vec![0]);
    assert_eq!(schedule.len(), 1);
    assert_eq!(schedule.drain_due(t0 + Duration::from_millis(200)), vec![1]);
    assert!(schedule.is_empty());
}

#[test]
fn test_defer_replaces_earlier_task_for_same_widget() {
    let mut schedule = Schedule::new();
    let t0 = Instant::now();

    schedule.defer(0, Duration::from_millis(50), t0);
    schedule.defer(0, Duration::from_millis(200), t0 + Duration::from_millis(40));

    // The first deadline no longer fires
    assert!(schedule.drain_due(t0 + Duration::from_millis(60)).is_empty());
    assert_eq!(schedule.len(), 1);
    assert_eq!(
        schedule.drain_due(t0 + Duration::from_millis(250)),
        vec![0]
    );
}

#[test]
fn test_cancel() {
    let mut schedule = Schedule::new();
    let t0 = Instant::now();

    schedule.defer(3, Duration::from_millis(50), t0);
    assert!(schedule.cancel(3));
    assert!(!schedule.cancel(3));
    assert!(schedule.drain_due(t0 + Duration::from_secs(1)).is_empty());
}

#[test]
fn test_cancel_all_and_next_deadline() {
    let mut schedule = Schedule::new();
    let t0 = Instant::now();
    assert!(schedule.next_deadline().is_none());

    schedule.defer(0, Duration::from_millis(80), t0);
    schedule.defer(1, Duration::from_millis(30), t0);

    assert_eq!(schedule.next_deadline(), Some(t0 + Duration::from_millis(30)));

    schedule.cancel_all();
    assert!(schedule.is_empty());
    assert!(schedule.next_deadline().is_none());
}

#[test]
fn test_due_tasks_fire_in_scheduling_order() {
    let mut schedule = Schedule::new();
    let t0 = Instant::now();

    schedule.defer(2, Duration::from_millis(20), t0);
    schedule.defer(0, Duration::from_millis(10), t0);
    schedule.defer(1, Duration::from_millis(15), t0);

    assert_eq!(
        schedule.drain_due(t0 + Duration::from_millis(50)),
        vec![2, 0, 1]
    );
}
