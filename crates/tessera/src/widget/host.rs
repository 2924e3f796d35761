//! The host framework as seen from a widget.
//!
//! A widget never drives layout itself. When its size requirements change it
//! asks the host to run another layout pass via [`Host::queue_relayout`].
//! [`RelayoutQueue`] is a ready-made, coalescing store a host can use to back
//! that call.

use std::collections::HashSet;

use parking_lot::Mutex;
use tessera_core::ObjectId;

use super::geometry::Point;

/// Services a widget needs from the surrounding framework.
pub trait Host: Send + Sync {
    /// Schedule a layout pass for `widget`. Idempotent until the pass runs.
    fn queue_relayout(&self, widget: ObjectId);

    /// Height of the top-level surface `widget` is displayed on, if it is
    /// attached to one.
    fn surface_height(&self, widget: ObjectId) -> Option<f32>;

    /// Position of `widget`'s origin in surface coordinates.
    fn transformed_position(&self, widget: ObjectId) -> Point;

    /// Route key events to `widget`.
    fn grab_key_focus(&self, widget: ObjectId);
}

#[derive(Debug, Default)]
struct QueueState {
    /// Widgets awaiting relayout, in first-request order.
    order: Vec<ObjectId>,
    queued: HashSet<ObjectId>,
    suspend_depth: u32,
    deferred: Vec<ObjectId>,
}

impl QueueState {
    fn push(&mut self, widget: ObjectId) -> bool {
        if self.queued.insert(widget) {
            self.order.push(widget);
            true
        } else {
            false
        }
    }
}

/// Coalescing set of widgets awaiting relayout.
///
/// Repeated requests for the same widget collapse into one. While suspended,
/// requests are deferred and land in the queue when the last
/// [`SuspendGuard`] drops.
#[derive(Debug, Default)]
pub struct RelayoutQueue {
    state: Mutex<QueueState>,
}

impl RelayoutQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request a relayout of `widget`.
    ///
    /// Returns `true` if the widget was not already queued.
    pub fn request(&self, widget: ObjectId) -> bool {
        let mut state = self.state.lock();
        if state.suspend_depth > 0 {
            state.deferred.push(widget);
            return false;
        }
        state.push(widget)
    }

    /// Check whether `widget` is waiting for a layout pass.
    pub fn is_queued(&self, widget: ObjectId) -> bool {
        self.state.lock().queued.contains(&widget)
    }

    /// Number of distinct widgets waiting.
    pub fn len(&self) -> usize {
        self.state.lock().order.len()
    }

    /// Whether nothing is waiting.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Take every queued widget, in first-request order.
    pub fn drain(&self) -> Vec<ObjectId> {
        let mut state = self.state.lock();
        state.queued.clear();
        std::mem::take(&mut state.order)
    }

    /// Defer requests until the returned guard drops.
    pub fn suspend(&self) -> SuspendGuard<'_> {
        self.state.lock().suspend_depth += 1;
        SuspendGuard { queue: self }
    }

    fn resume(&self) {
        let mut state = self.state.lock();
        state.suspend_depth = state.suspend_depth.saturating_sub(1);
        if state.suspend_depth == 0 {
            for widget in std::mem::take(&mut state.deferred) {
                state.push(widget);
            }
        }
    }
}

/// RAII guard for suspending a [`RelayoutQueue`].
#[must_use = "the queue resumes as soon as the guard is dropped"]
pub struct SuspendGuard<'a> {
    queue: &'a RelayoutQueue,
}

impl Drop for SuspendGuard<'_> {
    fn drop(&mut self) {
        self.queue.resume();
    }
}
