use std::time::{Duration, Instant};

/// One pending deferred close.
#[derive(Debug, Clone, Copy)]
struct Scheduled {
    widget: usize,
    due: Instant,
}

/// One-shot deferred tasks keyed by widget index.
///
/// The schedule never looks at the clock itself; callers pass `now` in, so
/// tests drive time explicitly. Dropping the schedule (with its owner)
/// cancels everything outstanding.
#[derive(Debug, Default)]
pub struct Schedule {
    pending: Vec<Scheduled>,
}

impl Schedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defer a task for `widget`, due `after` from `now`. A widget has at
    /// most one pending task; scheduling again replaces the earlier one.
    pub fn defer(&mut self, widget: usize, after: Duration, now: Instant) {
        self.cancel(widget);
        self.pending.push(Scheduled {
            widget,
            due: now + after,
        });
    }

    /// Cancel the pending task for `widget`, if any.
    /// Returns true if something was cancelled.
    pub fn cancel(&mut self, widget: usize) -> bool {
        let before = self.pending.len();
        self.pending.retain(|task| task.widget != widget);
        self.pending.len() != before
    }

    /// Cancel every pending task.
    pub fn cancel_all(&mut self) {
        self.pending.clear();
    }

    /// Remove and return the widgets whose deadline has passed, in the order
    /// they were scheduled.
    pub fn drain_due(&mut self, now: Instant) -> Vec<usize> {
        let mut due = Vec::new();
        self.pending.retain(|task| {
            if task.due <= now {
                due.push(task.widget);
                false
            } else {
                true
            }
        });
        due
    }

    /// The earliest outstanding deadline, for event-loop poll timeouts.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.iter().map(|task| task.due).min()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }
}
