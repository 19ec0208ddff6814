//! Observable values with synchronous change notification.

use std::fmt;

/// Callback invoked with every new value of an [`Observable`].
pub type Observer<T> = Box<dyn FnMut(&T)>;

/// A single owned value that notifies its subscribers whenever it changes.
///
/// Subscribers run synchronously, in subscription order, before the
/// mutating call returns. There is no unsubscribe: the subscriber set lives
/// as long as the cell.
pub struct Observable<T> {
    value: T,
    observers: Vec<Observer<T>>,
}

impl<T: Default> Default for Observable<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observable")
            .field("value", &self.value)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl<T> Observable<T> {
    /// Create a cell holding `value` with no subscribers.
    pub fn new(value: T) -> Self {
        Self {
            value,
            observers: Vec::new(),
        }
    }

    /// Get the current value.
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Replace the value and notify every subscriber.
    pub fn set(&mut self, value: T) {
        self.value = value;
        self.notify();
    }

    /// Edit the value in place, then notify every subscriber.
    ///
    /// Whatever the closure returns is handed back to the caller, which lets
    /// mutators report what they changed without a second lookup.
    pub fn modify<R>(&mut self, f: impl FnOnce(&mut T) -> R) -> R {
        let result = f(&mut self.value);
        self.notify();
        result
    }

    /// Register a callback that receives all future values.
    pub fn subscribe(&mut self, observer: impl FnMut(&T) + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Number of registered subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.observers.len()
    }

    fn notify(&mut self) {
        for observer in self.observers.iter_mut() {
            observer(&self.value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_get_returns_initial_value() {
        let cell = Observable::new(5);
        assert_eq!(*cell.get(), 5);
        assert_eq!(cell.subscriber_count(), 0);
    }

    #[test]
    fn test_set_notifies_with_new_value() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut cell = Observable::new(0);

        let sink = Rc::clone(&seen);
        cell.subscribe(move |v: &i32| sink.borrow_mut().push(*v));

        cell.set(3);
        cell.set(7);

        assert_eq!(*cell.get(), 7);
        assert_eq!(*seen.borrow(), vec![3, 7]);
    }

    #[test]
    fn test_modify_notifies_once_and_returns_result() {
        let calls = Rc::new(RefCell::new(0));
        let mut cell = Observable::new(vec![1, 2]);

        let counter = Rc::clone(&calls);
        cell.subscribe(move |_: &Vec<i32>| *counter.borrow_mut() += 1);

        let len = cell.modify(|v| {
            v.push(3);
            v.len()
        });

        assert_eq!(len, 3);
        assert_eq!(cell.get(), &vec![1, 2, 3]);
        assert_eq!(*calls.borrow(), 1);
    }

    #[test]
    fn test_subscribers_run_in_subscription_order() {
        let order = Rc::new(RefCell::new(Vec::new()));
        let mut cell = Observable::new("a");

        for tag in ["first", "second", "third"] {
            let order = Rc::clone(&order);
            cell.subscribe(move |_: &&str| order.borrow_mut().push(tag));
        }
        cell.set("b");

        assert_eq!(*order.borrow(), vec!["first", "second", "third"]);
        assert_eq!(cell.subscriber_count(), 3);
    }

    #[test]
    fn test_late_subscriber_sees_only_future_values() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut cell = Observable::new(1);
        cell.set(2);

        let sink = Rc::clone(&seen);
        cell.subscribe(move |v: &i32| sink.borrow_mut().push(*v));
        cell.set(3);

        assert_eq!(*seen.borrow(), vec![3]);
    }
}
