//! # Timers
//!
//! Deferred work is a host capability. Components never sleep or spin; they
//! ask the current [`Scheduler`] for a callback after a delay and keep the
//! returned [`TimerHandle`] so they can cancel it when they go away.
//!
//! The browser host backs this with `setTimeout`. [`ManualScheduler`] runs on
//! virtual time and is what tests and the static export use:
//!
//! ```rust
//! use std::time::Duration;
//! use folio_core::timer::{ManualScheduler, Scheduler};
//!
//! let sched = ManualScheduler::new();
//! let h = sched.schedule(Duration::from_millis(10), Box::new(|| log::info!("tick")));
//! assert_eq!(sched.pending(), 1);
//! sched.cancel(h);
//! assert_eq!(sched.advance(Duration::from_millis(50)), 0);
//! ```

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(pub u64);

pub trait Scheduler {
    /// Runs `callback` once, no sooner than `delay` from now. A zero delay
    /// still defers to a later turn; it never runs re-entrantly.
    fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> TimerHandle;

    /// Cancels a pending timer. Unknown or already-fired handles are ignored.
    fn cancel(&self, handle: TimerHandle);
}

/// Upper bound on callbacks fired by a single `advance`, so a chain of
/// zero-delay timers cannot hang the caller.
const MAX_FIRES_PER_ADVANCE: usize = 100_000;

type Queue = BTreeMap<(Duration, u64), Box<dyn FnOnce()>>;

/// Deterministic scheduler on virtual time.
#[derive(Default)]
pub struct ManualScheduler {
    inner: RefCell<ManualInner>,
}

#[derive(Default)]
struct ManualInner {
    now: Duration,
    next_id: u64,
    queue: Queue,
    due_of: HashMap<u64, Duration>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Virtual time elapsed since creation.
    pub fn now(&self) -> Duration {
        self.inner.borrow().now
    }

    pub fn pending(&self) -> usize {
        self.inner.borrow().queue.len()
    }

    pub fn next_due(&self) -> Option<Duration> {
        self.inner.borrow().queue.keys().next().map(|(due, _)| *due)
    }

    /// Jumps to the earliest pending timer and fires it.
    pub fn fire_next(&self) -> bool {
        let entry = {
            let mut inner = self.inner.borrow_mut();
            let Some(((due, id), cb)) = inner.queue.pop_first() else {
                return false;
            };
            inner.due_of.remove(&id);
            inner.now = inner.now.max(due);
            cb
        };
        entry();
        true
    }

    /// Advances virtual time by `by`, firing every timer that falls due in
    /// order, including timers scheduled by the callbacks themselves.
    /// Returns the number of callbacks fired.
    pub fn advance(&self, by: Duration) -> usize {
        let target = self.now() + by;
        let mut fired = 0;
        loop {
            let due = match self.next_due() {
                Some(due) if due <= target => due,
                _ => break,
            };
            if fired >= MAX_FIRES_PER_ADVANCE {
                log::warn!(
                    "ManualScheduler: {fired} timers fired at {:?}; stopping advance early",
                    due
                );
                return fired;
            }
            self.fire_next();
            fired += 1;
        }
        self.inner.borrow_mut().now = target;
        fired
    }

    /// Advances in `step` increments, `count` times.
    pub fn advance_steps(&self, step: Duration, count: usize) -> usize {
        (0..count).map(|_| self.advance(step)).sum()
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> TimerHandle {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        let due = inner.now + delay;
        inner.queue.insert((due, id), callback);
        inner.due_of.insert(id, due);
        TimerHandle(id)
    }

    fn cancel(&self, handle: TimerHandle) {
        let mut inner = self.inner.borrow_mut();
        if let Some(due) = inner.due_of.remove(&handle.0) {
            inner.queue.remove(&(due, handle.0));
        }
    }
}
