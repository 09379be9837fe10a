/// Single-threaded queue of delayed actions polled from the animation loop.
///
/// Every deferred piece of work on the page (burst sparks, the wishing pause)
/// goes through one `Scheduler`, so teardown can drop all of it with
/// `cancel_all`. Times are plain milliseconds on whatever monotonic clock the
/// caller uses.
#[derive(Debug)]
pub struct Scheduler<A> {
    // Sorted by due time; equal due times keep submission order.
    pending: Vec<Pending<A>>,
}

#[derive(Debug)]
struct Pending<A> {
    due_ms: f64,
    action: A,
}

impl<A> Default for Scheduler<A> {
    fn default() -> Self {
        Self {
            pending: Vec::new(),
        }
    }
}

impl<A> Scheduler<A> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn submit(&mut self, now_ms: f64, delay_ms: f64, action: A) {
        let due_ms = now_ms + delay_ms.max(0.0);
        let idx = self.pending.partition_point(|p| p.due_ms <= due_ms);
        self.pending.insert(idx, Pending { due_ms, action });
    }

    pub fn submit_all<I>(&mut self, now_ms: f64, tasks: I)
    where
        I: IntoIterator<Item = (f64, A)>,
    {
        let tasks = tasks.into_iter();
        self.pending.reserve(tasks.size_hint().0);
        for (delay_ms, action) in tasks {
            self.submit(now_ms, delay_ms, action);
        }
    }

    /// Move every action due at or before `now_ms` into `out`, earliest first.
    /// Returns how many were moved.
    pub fn drain_due(&mut self, now_ms: f64, out: &mut Vec<A>) -> usize {
        let n = self.pending.partition_point(|p| p.due_ms <= now_ms);
        out.extend(self.pending.drain(..n).map(|p| p.action));
        n
    }

    /// Drop all pending actions. Returns how many were dropped.
    pub fn cancel_all(&mut self) -> usize {
        let n = self.pending.len();
        self.pending.clear();
        n
    }

    pub fn next_due_ms(&self) -> Option<f64> {
        self.pending.first().map(|p| p.due_ms)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
