// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! A value cell that only notifies its subscribers when the stored value actually
//! changes. Every piece of state that [`crate::TextEditModel`] publishes (text, cursor,
//! selection, options, read only flag) lives in one of these.
//!
//! ```
//! use std::{cell::RefCell, rc::Rc};
//! use r3bl_text_edit::Observable;
//!
//! let seen = Rc::new(RefCell::new(vec![]));
//! let mut cell = Observable::new(1);
//!
//! let seen_clone = seen.clone();
//! cell.subscribe(move |it: &i32| seen_clone.borrow_mut().push(*it));
//!
//! assert!(cell.set_if_changed(2));
//! assert!(!cell.set_if_changed(2));
//!
//! // The first entry comes from subscribing.
//! assert_eq!(*seen.borrow(), vec![1, 2]);
//! ```

use std::fmt::{Debug, Formatter};

use smallvec::SmallVec;

/// Handle returned by [`Observable::subscribe()`], pass it to
/// [`Observable::unsubscribe()`] to stop receiving updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriberId(pub u64);

pub type SubscriberFn<T> = Box<dyn FnMut(&T)>;

/// Most cells have one or two observers (the owning widget, maybe a status bar).
pub type SubscriberList<T> = SmallVec<[(SubscriberId, SubscriberFn<T>); 2]>;

pub struct Observable<T: PartialEq> {
    value: T,
    subscribers: SubscriberList<T>,
    next_id: u64,
}

impl<T: PartialEq> Observable<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            subscribers: SubscriberList::new(),
            next_id: 0,
        }
    }

    #[must_use]
    pub fn get(&self) -> &T { &self.value }

    /// Stores `new_value` and notifies subscribers, but only if it differs from the
    /// current value. Returns whether a change was published.
    pub fn set_if_changed(&mut self, new_value: T) -> bool {
        if self.value == new_value {
            return false;
        }
        self.value = new_value;
        self.notify();
        true
    }

    /// The callback runs once right away with the current value, and then after every
    /// published change.
    pub fn subscribe(&mut self, mut callback: impl FnMut(&T) + 'static) -> SubscriberId {
        callback(&self.value);
        let id = SubscriberId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        let count_before = self.subscribers.len();
        self.subscribers.retain(|(it, _)| *it != id);
        self.subscribers.len() != count_before
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize { self.subscribers.len() }

    fn notify(&mut self) {
        let value = &self.value;
        for (_, callback) in &mut self.subscribers {
            callback(value);
        }
    }
}

impl<T: PartialEq + Default> Default for Observable<T> {
    fn default() -> Self { Self::new(T::default()) }
}

impl<T: PartialEq + Debug> Debug for Observable<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observable")
            .field("value", &self.value)
            .field("subscriber_count", &self.subscribers.len())
            .finish()
    }
}
