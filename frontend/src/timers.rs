use gloo_timers::callback::{Interval, Timeout};

/// Something pending that can be called off.
pub trait Cancel {
    fn cancel(self);
}

pub enum Timer {
    Once(Timeout),
    Every(Interval),
}

impl Cancel for Timer {
    fn cancel(self) {
        // Both hand back the JS closure; dropping it is all we need.
        match self {
            Timer::Once(timeout) => drop(timeout.cancel()),
            Timer::Every(interval) => drop(interval.cancel()),
        }
    }
}

/// Holds at most one pending task for a single purpose. Arming a new task
/// cancels whatever was there; dropping the slot cancels the last one.
pub struct TaskSlot<H: Cancel = Timer> {
    pending: Option<H>,
}

impl<H: Cancel> Default for TaskSlot<H> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<H: Cancel> TaskSlot<H> {
    pub fn arm(&mut self, handle: H) {
        if let Some(previous) = self.pending.replace(handle) {
            previous.cancel();
        }
    }

    /// Returns whether anything was pending.
    pub fn disarm(&mut self) -> bool {
        match self.pending.take() {
            Some(handle) => {
                handle.cancel();
                true
            }
            None => false,
        }
    }

    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }
}

impl TaskSlot<Timer> {
    pub fn once(&mut self, millis: u32, callback: impl FnOnce() + 'static) {
        self.arm(Timer::Once(Timeout::new(millis, callback)));
    }

    pub fn every(&mut self, millis: u32, callback: impl FnMut() + 'static) {
        self.arm(Timer::Every(Interval::new(millis, callback)));
    }
}

impl<H: Cancel> Drop for TaskSlot<H> {
    fn drop(&mut self) {
        self.disarm();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Probe {
        id: u32,
        cancelled: Rc<RefCell<Vec<u32>>>,
    }

    impl Cancel for Probe {
        fn cancel(self) {
            self.cancelled.borrow_mut().push(self.id);
        }
    }

    fn probe(id: u32, log: &Rc<RefCell<Vec<u32>>>) -> Probe {
        Probe {
            id,
            cancelled: log.clone(),
        }
    }

    #[test]
    fn arming_cancels_the_previous_task() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut slot = TaskSlot::default();
        slot.arm(probe(1, &log));
        assert!(log.borrow().is_empty());
        slot.arm(probe(2, &log));
        assert_eq!(*log.borrow(), vec![1]);
        assert!(slot.is_armed());
    }

    #[test]
    fn disarm_cancels_once() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut slot = TaskSlot::default();
        slot.arm(probe(7, &log));
        assert!(slot.disarm());
        assert!(!slot.disarm());
        assert!(!slot.is_armed());
        assert_eq!(*log.borrow(), vec![7]);
    }

    #[test]
    fn dropping_the_slot_cancels_the_pending_task() {
        let log = Rc::new(RefCell::new(Vec::new()));
        {
            let mut slot = TaskSlot::default();
            slot.arm(probe(3, &log));
        }
        assert_eq!(*log.borrow(), vec![3]);
    }
}
