//! Host-driven deferred tasks.
//!
//! The host advances the clock (`tick` in the site runtime); nothing here
//! reads wall time. Every task may name an owner element so all work tied
//! to that element can be cancelled at once, and tasks scheduled while
//! another task runs are timed from that task's deadline.

use std::time::Duration;

/// Identifies one scheduled task for cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskHandle(u64);

#[derive(Debug)]
struct Entry<N, T> {
    due: Duration,
    seq: u64,
    owner: Option<N>,
    task: T,
}

#[derive(Debug)]
pub struct Scheduler<N, T> {
    now: Duration,
    next_seq: u64,
    entries: Vec<Entry<N, T>>,
}

impl<N, T> Default for Scheduler<N, T> {
    fn default() -> Self {
        Self {
            now: Duration::ZERO,
            next_seq: 0,
            entries: Vec::new(),
        }
    }
}

impl<N: PartialEq, T> Scheduler<N, T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// The scheduler's current time.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Runs `task` after `delay`.
    pub fn schedule(&mut self, delay: Duration, task: T) -> TaskHandle {
        self.push(delay, None, task)
    }

    /// Runs `task` after `delay` unless `owner`'s work is cancelled first.
    pub fn schedule_owned(&mut self, delay: Duration, owner: N, task: T) -> TaskHandle {
        self.push(delay, Some(owner), task)
    }

    fn push(&mut self, delay: Duration, owner: Option<N>, task: T) -> TaskHandle {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries.push(Entry {
            due: self.now + delay,
            seq,
            owner,
            task,
        });
        TaskHandle(seq)
    }

    /// Returns `true` if the task was still pending.
    pub fn cancel(&mut self, handle: TaskHandle) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.seq != handle.0);
        self.entries.len() != before
    }

    /// Cancels every pending task owned by `owner`; returns how many.
    pub fn cancel_owned(&mut self, owner: &N) -> usize {
        let before = self.entries.len();
        self.entries.retain(|e| e.owner.as_ref() != Some(owner));
        before - self.entries.len()
    }

    pub fn is_pending(&self, handle: TaskHandle) -> bool {
        self.entries.iter().any(|e| e.seq == handle.0)
    }

    pub fn pending(&self) -> usize {
        self.entries.len()
    }

    /// Removes and returns the earliest task due at or before `until`,
    /// moving the clock to its deadline. Ties run in scheduling order.
    pub fn pop_due(&mut self, until: Duration) -> Option<T> {
        let idx = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.due <= until)
            .min_by_key(|(_, e)| (e.due, e.seq))
            .map(|(i, _)| i)?;
        let entry = self.entries.swap_remove(idx);
        self.now = self.now.max(entry.due);
        Some(entry.task)
    }

    /// Moves the clock forward without running anything.
    pub fn advance_to(&mut self, now: Duration) {
        self.now = self.now.max(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn drain(s: &mut Scheduler<u32, &'static str>, until: Duration) -> Vec<&'static str> {
        let mut out = Vec::new();
        while let Some(t) = s.pop_due(until) {
            out.push(t);
        }
        s.advance_to(until);
        out
    }

    #[test]
    fn runs_in_deadline_then_schedule_order() {
        let mut s: Scheduler<u32, &str> = Scheduler::new();
        s.schedule(ms(300), "fade");
        s.schedule(ms(10), "show");
        s.schedule(ms(10), "show-2");
        assert_eq!(drain(&mut s, ms(5)), Vec::<&str>::new());
        assert_eq!(drain(&mut s, ms(400)), vec!["show", "show-2", "fade"]);
        assert_eq!(s.now(), ms(400));
    }

    #[test]
    fn chained_tasks_are_timed_from_parent_deadline() {
        let mut s: Scheduler<u32, &str> = Scheduler::new();
        s.schedule(ms(2000), "fade");
        assert_eq!(s.pop_due(ms(5000)), Some("fade"));
        assert_eq!(s.now(), ms(2000));
        s.schedule(ms(300), "remove");
        assert_eq!(s.pop_due(ms(5000)), Some("remove"));
        assert_eq!(s.now(), ms(2300));
    }

    #[test]
    fn cancel_by_handle() {
        let mut s: Scheduler<u32, &str> = Scheduler::new();
        let h = s.schedule(ms(20), "reveal");
        assert!(s.is_pending(h));
        assert!(s.cancel(h));
        assert!(!s.cancel(h));
        assert_eq!(drain(&mut s, ms(100)), Vec::<&str>::new());
    }

    #[test]
    fn cancel_by_owner_leaves_others() {
        let mut s: Scheduler<u32, &str> = Scheduler::new();
        s.schedule_owned(ms(300), 7, "hide-7");
        s.schedule_owned(ms(10), 7, "show-7");
        s.schedule_owned(ms(300), 8, "hide-8");
        s.schedule(ms(300), "unowned");
        assert_eq!(s.cancel_owned(&7), 2);
        assert_eq!(s.pending(), 2);
        assert_eq!(drain(&mut s, ms(300)), vec!["hide-8", "unowned"]);
    }

    #[test]
    fn clock_never_moves_backwards() {
        let mut s: Scheduler<u32, &str> = Scheduler::new();
        s.advance_to(ms(100));
        s.advance_to(ms(50));
        assert_eq!(s.now(), ms(100));
        s.schedule(ms(10), "x");
        assert_eq!(s.pop_due(ms(105)), None);
        assert_eq!(s.pop_due(ms(110)), Some("x"));
    }
}
