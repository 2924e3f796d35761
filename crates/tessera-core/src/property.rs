//! Named property change notification.
//!
//! A widget declares its observable property names once and announces
//! changes through a [`PropertyNotifier`]. Observers receive the property
//! name and read the new value back from the widget.
//!
//! While a [`NotifyBatch`] returned by [`PropertyNotifier::freeze`] is alive,
//! notifications are queued and de-duplicated. They are flushed in
//! first-notified order when the outermost batch is dropped.
//!
//! ```
//! use std::sync::Arc;
//! use parking_lot::Mutex;
//! use tessera_core::PropertyNotifier;
//!
//! let notifier = PropertyNotifier::new(&["index", "title"]);
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let seen_clone = seen.clone();
//! notifier.connect(move |name| seen_clone.lock().push(*name));
//!
//! {
//!     let _batch = notifier.freeze();
//!     notifier.notify("index").unwrap();
//!     notifier.notify("title").unwrap();
//!     notifier.notify("index").unwrap();
//!     assert!(seen.lock().is_empty());
//! }
//! assert_eq!(*seen.lock(), vec!["index", "title"]);
//! ```

use std::fmt;

use parking_lot::Mutex;

use crate::logging::targets;
use crate::signal::{ConnectionId, Signal};

/// Error types for property operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyError {
    /// The property name is not declared on the notifier.
    NotFound {
        /// The name of the property that was not found.
        name: String,
    },
}

impl fmt::Display for PropertyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { name } => write!(f, "Property '{}' not found", name),
        }
    }
}

impl std::error::Error for PropertyError {}

#[derive(Default)]
struct FreezeState {
    depth: u32,
    pending: Vec<&'static str>,
}

/// Change notification for a fixed set of named properties.
pub struct PropertyNotifier {
    properties: &'static [&'static str],
    changed: Signal<&'static str>,
    freeze: Mutex<FreezeState>,
}

impl PropertyNotifier {
    /// Create a notifier for the given property names.
    pub fn new(properties: &'static [&'static str]) -> Self {
        Self {
            properties,
            changed: Signal::new(),
            freeze: Mutex::new(FreezeState::default()),
        }
    }

    /// The property names this notifier announces.
    pub fn properties(&self) -> &'static [&'static str] {
        self.properties
    }

    /// Connect an observer called with the name of each changed property.
    pub fn connect<F>(&self, slot: F) -> ConnectionId
    where
        F: Fn(&&'static str) + Send + Sync + 'static,
    {
        self.changed.connect(slot)
    }

    /// Disconnect an observer.
    pub fn disconnect(&self, id: ConnectionId) -> bool {
        self.changed.disconnect(id)
    }

    /// Announce that `name` changed.
    ///
    /// While frozen the notification is queued instead, at most once per name.
    pub fn notify(&self, name: &str) -> Result<(), PropertyError> {
        let name = self
            .properties
            .iter()
            .copied()
            .find(|&declared| declared == name)
            .ok_or_else(|| PropertyError::NotFound {
                name: name.to_string(),
            })?;

        {
            let mut state = self.freeze.lock();
            if state.depth > 0 {
                if !state.pending.contains(&name) {
                    state.pending.push(name);
                }
                return Ok(());
            }
        }

        tracing::trace!(target: targets::PROPERTY, property = name, "property changed");
        self.changed.emit(name);
        Ok(())
    }

    /// Queue notifications until the returned batch is dropped.
    ///
    /// Batches nest; only the outermost one flushes.
    pub fn freeze(&self) -> NotifyBatch<'_> {
        self.freeze.lock().depth += 1;
        NotifyBatch { notifier: self }
    }

    /// Check whether notifications are currently being queued.
    pub fn is_frozen(&self) -> bool {
        self.freeze.lock().depth > 0
    }

    fn thaw(&self) {
        let pending = {
            let mut state = self.freeze.lock();
            state.depth = state.depth.saturating_sub(1);
            if state.depth > 0 {
                return;
            }
            std::mem::take(&mut state.pending)
        };

        for name in pending {
            tracing::trace!(target: targets::PROPERTY, property = name, "property changed");
            self.changed.emit(name);
        }
    }
}

impl fmt::Debug for PropertyNotifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyNotifier")
            .field("properties", &self.properties)
            .field("frozen", &self.is_frozen())
            .finish()
    }
}

/// RAII guard returned by [`PropertyNotifier::freeze`].
#[must_use = "notifications flush as soon as the batch is dropped"]
pub struct NotifyBatch<'a> {
    notifier: &'a PropertyNotifier,
}

impl Drop for NotifyBatch<'_> {
    fn drop(&mut self) {
        self.notifier.thaw();
    }
}
