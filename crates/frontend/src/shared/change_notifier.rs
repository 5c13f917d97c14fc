use std::cell::RefCell;
use std::rc::Rc;

/// Lets a view re-read an engine after the engine changed.
///
/// Engines keep their state in plain cells so they work without a reactive
/// runtime; a component subscribes once and bumps a signal on every ping.
#[derive(Default)]
pub struct ChangeNotifier {
    listener: RefCell<Option<Rc<dyn Fn()>>>,
}

impl ChangeNotifier {
    /// Replaces the current listener.
    pub fn subscribe(&self, listener: impl Fn() + 'static) {
        *self.listener.borrow_mut() = Some(Rc::new(listener));
    }

    pub fn notify(&self) {
        // Clone out first: the listener may read the engine that owns us.
        let listener = self.listener.borrow().clone();
        if let Some(listener) = listener {
            listener();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_notify_reaches_latest_listener() {
        let notifier = ChangeNotifier::default();
        notifier.notify();

        let first = Rc::new(Cell::new(0));
        let second = Rc::new(Cell::new(0));
        let f = first.clone();
        notifier.subscribe(move || f.set(f.get() + 1));
        notifier.notify();
        let s = second.clone();
        notifier.subscribe(move || s.set(s.get() + 1));
        notifier.notify();

        assert_eq!(first.get(), 1);
        assert_eq!(second.get(), 1);
    }
}
