// Ownership of the loading-indicator repaint timer. The timer only runs
// while the background is pending and must be cancelled exactly once.

/// A running periodic timer that can be cancelled.
pub trait Interval {
    fn cancel(self: Box<Self>);
}

#[derive(Default)]
pub struct LoadingIndicator {
    timer: Option<Box<dyn Interval>>,
}

impl LoadingIndicator {
    pub fn idle() -> Self {
        Self { timer: None }
    }

    pub fn running(timer: Box<dyn Interval>) -> Self {
        Self { timer: Some(timer) }
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }

    /// Cancels the timer if it is still running. Returns whether this call
    /// did the cancelling; every later call is a no-op.
    pub fn stop(&mut self) -> bool {
        match self.timer.take() {
            Some(timer) => {
                timer.cancel();
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Counts cancellations so tests can check "exactly once".
    pub(crate) struct CountingInterval(pub Rc<Cell<u32>>);

    impl Interval for CountingInterval {
        fn cancel(self: Box<Self>) {
            self.0.set(self.0.get() + 1);
        }
    }

    pub(crate) fn counted() -> (LoadingIndicator, Rc<Cell<u32>>) {
        let count = Rc::new(Cell::new(0));
        (LoadingIndicator::running(Box::new(CountingInterval(count.clone()))), count)
    }

    #[test]
    fn stop_cancels_once() {
        let (mut indicator, count) = counted();
        assert!(indicator.is_running());
        assert!(indicator.stop());
        assert!(!indicator.stop());
        assert!(!indicator.stop());
        assert_eq!(count.get(), 1);
        assert!(!indicator.is_running());
    }

    #[test]
    fn idle_indicator_has_nothing_to_stop() {
        let mut indicator = LoadingIndicator::idle();
        assert!(!indicator.stop());
    }
}
