use std::cell::RefCell;

/// Receives the warnings raised by the range checks
///
/// The checker never prints anything itself; callers decide where warnings
/// go by supplying a notifier. Any `Fn(&str)` closure is a notifier.
#[cfg_attr(test, mockall::automock)]
pub trait WarningNotifier {
    /// Deliver a warning message
    fn notify(&self, message: &str);
}

impl<F> WarningNotifier for F
where
    F: Fn(&str) + ?Sized,
{
    fn notify(&self, message: &str) {
        self(message)
    }
}

/// Notifier that keeps every message it receives, in order
#[derive(Debug, Default)]
pub struct CollectingNotifier {
    messages: RefCell<Vec<String>>,
}

impl CollectingNotifier {
    /// Create an empty collecting notifier
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages received so far
    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }

    /// Most recent message, if any
    pub fn last(&self) -> Option<String> {
        self.messages.borrow().last().cloned()
    }

    /// Check whether nothing has been received
    pub fn is_empty(&self) -> bool {
        self.messages.borrow().is_empty()
    }

    /// Take the collected messages, leaving the notifier empty
    pub fn drain(&self) -> Vec<String> {
        self.messages.take()
    }
}

impl WarningNotifier for CollectingNotifier {
    fn notify(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_closure_is_a_notifier() {
        let calls = Cell::new(0);
        let notifier = |_: &str| calls.set(calls.get() + 1);

        notifier.notify("first");
        notifier.notify("second");

        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_collecting_notifier_keeps_order() {
        let notifier = CollectingNotifier::new();
        assert!(notifier.is_empty());

        notifier.notify("one");
        notifier.notify("two");

        assert_eq!(notifier.messages(), vec!["one", "two"]);
        assert_eq!(notifier.last().as_deref(), Some("two"));
    }

    #[test]
    fn test_collecting_notifier_drain() {
        let notifier = CollectingNotifier::new();
        notifier.notify("one");

        assert_eq!(notifier.drain(), vec!["one"]);
        assert!(notifier.is_empty());
        assert_eq!(notifier.last(), None);
    }
}
