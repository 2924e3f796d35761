//! Synchronous change signals.
//!
//! A [`Signal`] delivers a value to every connected observer, in connection
//! order, on the calling thread. Widgets only emit from the host's event
//! loop, so there is no queued or cross-thread delivery.
//!
//! ```
//! use tessera_core::Signal;
//!
//! let page_changed = Signal::<usize>::new();
//! let id = page_changed.connect(|page| println!("now on page {page}"));
//!
//! page_changed.emit(2);
//! assert!(page_changed.disconnect(id));
//! ```

use std::sync::Arc;

use parking_lot::Mutex;
use slotmap::{SlotMap, new_key_type};

use crate::logging::targets;

new_key_type! {
    /// Handle for one observer, returned by [`Signal::connect`].
    pub struct ConnectionId;
}

type Observer<Args> = Arc<dyn Fn(&Args) + Send + Sync>;

/// A list of observers called with `&Args` on every [`emit`](Self::emit).
///
/// Observers are copied out of the lock before they run, so an observer may
/// connect or disconnect on the same signal.
pub struct Signal<Args> {
    observers: Mutex<SlotMap<ConnectionId, Observer<Args>>>,
}

impl<Args: 'static> Default for Signal<Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Args: 'static> Signal<Args> {
    pub fn new() -> Self {
        Self {
            observers: Mutex::new(SlotMap::with_key()),
        }
    }

    /// Add an observer.
    pub fn connect<F>(&self, observer: F) -> ConnectionId
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        self.observers.lock().insert(Arc::new(observer))
    }

    /// Remove an observer. Returns `false` if it was already gone.
    pub fn disconnect(&self, id: ConnectionId) -> bool {
        self.observers.lock().remove(id).is_some()
    }

    /// Call every observer with `args`.
    pub fn emit(&self, args: Args) {
        let observers: Vec<Observer<Args>> = self.observers.lock().values().cloned().collect();
        tracing::trace!(target: targets::SIGNAL, observers = observers.len(), "emit");

        for observer in observers {
            observer(&args);
        }
    }
}

static_assertions::assert_impl_all!(Signal<usize>: Send, Sync);
