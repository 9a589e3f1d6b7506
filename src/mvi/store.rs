//! State container with explicit subscriptions.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use tracing::debug;

use super::reducer::Reducer;

type Listener<S> = Box<dyn FnMut(&S)>;

struct Listeners<S> {
    next_id: u64,
    entries: Vec<(u64, Listener<S>)>,
}

impl<S> Listeners<S> {
    fn new() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }
}

/// Owner of canonical state for one reducer.
///
/// A `Store` is constructed explicitly and passed by reference from the
/// top-level assembly; there is no process-wide instance, so tests can
/// run as many independent stores as they like. All mutation goes
/// through [`Store::dispatch`], which runs the reducer and then notifies
/// subscribers with the new state.
///
/// The store is single-threaded by design: dispatches run to completion
/// in response to discrete events on one execution context.
pub struct Store<R: Reducer> {
    state: R::State,
    listeners: Rc<RefCell<Listeners<R::State>>>,
}

impl<R: Reducer> Store<R> {
    pub fn new(initial: R::State) -> Self {
        Self {
            state: initial,
            listeners: Rc::new(RefCell::new(Listeners::new())),
        }
    }

    /// The current state. Only `dispatch` can replace it.
    pub fn state(&self) -> &R::State {
        &self.state
    }

    /// Run the reducer for `intent`, then notify subscribers.
    pub fn dispatch(&mut self, intent: R::Intent) {
        debug!(?intent, "dispatching intent");
        let previous = std::mem::take(&mut self.state);
        self.state = R::reduce(previous, intent);
        let mut listeners = self.listeners.borrow_mut();
        for (_, listener) in listeners.entries.iter_mut() {
            listener(&self.state);
        }
    }

    /// Register `listener` to be called after every transition.
    ///
    /// The registration lives as long as the returned [`Subscription`];
    /// dropping it removes the listener.
    pub fn subscribe(&self, listener: impl FnMut(&R::State) + 'static) -> Subscription<R::State> {
        let mut listeners = self.listeners.borrow_mut();
        let id = listeners.next_id;
        listeners.next_id += 1;
        listeners.entries.push((id, Box::new(listener)));
        Subscription {
            id,
            listeners: Rc::downgrade(&self.listeners),
        }
    }
}

impl<R: Reducer> Default for Store<R> {
    fn default() -> Self {
        Self::new(R::State::default())
    }
}

/// Handle to a registered listener. Unregisters on drop.
pub struct Subscription<S> {
    id: u64,
    listeners: Weak<RefCell<Listeners<S>>>,
}

impl<S> Subscription<S> {
    /// Explicitly release the registration. Equivalent to dropping.
    pub fn unsubscribe(self) {}
}

impl<S> Drop for Subscription<S> {
    fn drop(&mut self) {
        if let Some(listeners) = self.listeners.upgrade() {
            listeners
                .borrow_mut()
                .entries
                .retain(|(id, _)| *id != self.id);
        }
    }
}
