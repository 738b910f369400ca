use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::debug;
use yew::prelude::*;

/// Something that can run a callback once after a delay.
///
/// Dropping the returned handle must cancel the callback if it has not run yet.
pub trait TimerDriver {
    type Handle;

    fn once(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Self::Handle;
}

/// Browser timers via `setTimeout`. Dropping a `Timeout` clears it.
pub struct BrowserTimers;

impl TimerDriver for BrowserTimers {
    type Handle = Timeout;

    fn once(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, callback)
    }
}

/// One-shot deferred reveal, bound to the lifetime of its owner.
pub struct RevealScheduler<H> {
    pending: Option<H>,
    fired: Rc<Cell<bool>>,
}

impl<H> RevealScheduler<H> {
    pub fn start<D, F>(driver: &D, delay_ms: u32, on_reveal: F) -> Self
    where
        D: TimerDriver<Handle = H>,
        F: FnOnce() + 'static,
    {
        let fired = Rc::new(Cell::new(false));
        let flag = fired.clone();
        let handle = driver.once(
            delay_ms,
            Box::new(move || {
                flag.set(true);
                on_reveal();
            }),
        );
        debug!("Reveal timer started ({} ms)", delay_ms);
        Self {
            pending: Some(handle),
            fired,
        }
    }

    #[cfg(test)]
    fn has_fired(&self) -> bool {
        self.fired.get()
    }

    #[cfg(test)]
    fn is_pending(&self) -> bool {
        self.pending.is_some() && !self.fired.get()
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            if !self.fired.get() {
                debug!("Reveal timer cancelled before expiry");
            }
            drop(handle);
        }
    }
}

impl<H> Drop for RevealScheduler<H> {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Emits `on_reveal` once, `delay_ms` after the calling component mounts.
/// Unmounting first cancels it.
#[hook]
pub fn use_reveal_timer(delay_ms: u32, on_reveal: Callback<()>) {
    use_effect_with_deps(
        move |_| {
            let scheduler =
                RevealScheduler::start(&BrowserTimers, delay_ms, move || on_reveal.emit(()));
            move || drop(scheduler)
        },
        (),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct Pending {
        id: usize,
        deadline: u32,
        callback: Box<dyn FnOnce()>,
    }

    type Queue = Rc<RefCell<Vec<Pending>>>;

    #[derive(Default)]
    struct ManualClock {
        now: Cell<u32>,
        next_id: Cell<usize>,
        queue: Queue,
    }

    struct ManualHandle {
        id: usize,
        queue: Queue,
    }

    impl Drop for ManualHandle {
        fn drop(&mut self) {
            self.queue.borrow_mut().retain(|p| p.id != self.id);
        }
    }

    impl ManualClock {
        fn advance(&self, ms: u32) {
            let now = self.now.get() + ms;
            self.now.set(now);
            let due: Vec<Pending> = {
                let mut queue = self.queue.borrow_mut();
                let (due, rest): (Vec<Pending>, Vec<Pending>) =
                    queue.drain(..).partition(|p| p.deadline <= now);
                *queue = rest;
                due
            };
            for pending in due {
                (pending.callback)();
            }
        }

        fn pending_count(&self) -> usize {
            self.queue.borrow().len()
        }
    }

    impl TimerDriver for ManualClock {
        type Handle = ManualHandle;

        fn once(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> ManualHandle {
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            self.queue.borrow_mut().push(Pending {
                id,
                deadline: self.now.get() + delay_ms,
                callback,
            });
            ManualHandle {
                id,
                queue: self.queue.clone(),
            }
        }
    }

    fn counter() -> (Rc<Cell<u32>>, impl FnOnce() + 'static) {
        let count = Rc::new(Cell::new(0));
        let c = count.clone();
        (count, move || c.set(c.get() + 1))
    }

    #[test]
    fn reveals_after_full_delay() {
        let clock = ManualClock::default();
        let (count, on_reveal) = counter();
        let scheduler = RevealScheduler::start(&clock, 500, on_reveal);

        clock.advance(500);
        assert_eq!(count.get(), 1);
        assert!(scheduler.has_fired());
        assert!(!scheduler.is_pending());
    }

    #[test]
    fn stays_hidden_before_delay() {
        let clock = ManualClock::default();
        let (count, on_reveal) = counter();
        let scheduler = RevealScheduler::start(&clock, 500, on_reveal);

        clock.advance(499);
        assert_eq!(count.get(), 0);
        assert!(scheduler.is_pending());
    }

    #[test]
    fn fires_only_once() {
        let clock = ManualClock::default();
        let (count, on_reveal) = counter();
        let _scheduler = RevealScheduler::start(&clock, 500, on_reveal);

        clock.advance(500);
        clock.advance(500);
        clock.advance(10_000);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn teardown_before_expiry_cancels() {
        let clock = ManualClock::default();
        let (count, on_reveal) = counter();
        let scheduler = RevealScheduler::start(&clock, 500, on_reveal);

        clock.advance(200);
        drop(scheduler);
        assert_eq!(clock.pending_count(), 0);

        clock.advance(1_000);
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn explicit_cancel_is_idempotent() {
        let clock = ManualClock::default();
        let (count, on_reveal) = counter();
        let mut scheduler = RevealScheduler::start(&clock, 500, on_reveal);

        scheduler.cancel();
        scheduler.cancel();
        assert!(!scheduler.is_pending());

        clock.advance(500);
        assert_eq!(count.get(), 0);
    }
}
