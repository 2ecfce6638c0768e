use std::time::{Duration, Instant};

/// Collapses bursts of calls into one trailing callback invocation.
///
/// Built for the search box: every keystroke goes through [`Debouncer::call`],
/// and the wrapped handler only runs once the keystrokes stop for the
/// configured wait. Firing is cooperative: the event loop calls
/// [`Debouncer::poll`] on each tick (sized via [`Debouncer::next_deadline`]),
/// the same way the frame loop drives its timers.
///
/// Each instance owns its own pending state; unrelated debouncers never
/// share anything.
pub struct Debouncer<T> {
    callback: Box<dyn FnMut(T)>,
    wait: Duration,
    pending: Option<Pending<T>>,
}

struct Pending<T> {
    args: T,
    deadline: Instant,
}

impl<T> Debouncer<T> {
    pub fn new(wait: Duration, callback: impl FnMut(T) + 'static) -> Self {
        Self {
            callback: Box::new(callback),
            wait,
            pending: None,
        }
    }

    /// Capture `args` and restart the quiet window. Any previously
    /// captured call is discarded: replacing the pending slot cancels
    /// the old deadline and arms the new one in a single step, so the
    /// two can never both fire.
    pub fn call(&mut self, args: T) {
        self.call_at(args, Instant::now());
    }

    fn call_at(&mut self, args: T, now: Instant) {
        self.pending = Some(Pending {
            args,
            deadline: now + self.wait,
        });
    }

    /// Fire the pending call if its quiet window has elapsed. Returns
    /// whether the callback ran. Callback panics propagate to the
    /// caller.
    pub fn poll(&mut self) -> bool {
        self.poll_at(Instant::now())
    }

    fn poll_at(&mut self, now: Instant) -> bool {
        let due = self.pending.as_ref().is_some_and(|p| now >= p.deadline);
        if !due {
            return false;
        }
        if let Some(pending) = self.pending.take() {
            tracing::debug!("debounce fired");
            (self.callback)(pending.args);
            return true;
        }
        false
    }

    /// Drop the pending call, if any, without firing it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// When the pending call becomes due, for sizing the event loop's
    /// poll timeout. `None` when nothing is pending.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.deadline)
    }
}

/// Wrap `callback` so bursts of calls collapse into one trailing
/// invocation after `wait_ms` of quiet.
pub fn debounce<T>(callback: impl FnMut(T) + 'static, wait_ms: u64) -> Debouncer<T> {
    Debouncer::new(Duration::from_millis(wait_ms), callback)
}

#[cfg(test)]
mod tests;
