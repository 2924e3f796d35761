//! Widget trait and optional capability traits.
//!
//! Every widget is an [`Actor`], so it can be placed and sized like any host
//! element, plus a [`Widget`], which adds event handling and dynamic lookup
//! of optional capabilities:
//!
//! - [`Stylable`]: responds to style class / pseudo-class changes
//! - [`Focusable`]: takes part in keyboard focus traversal
//! - [`Container`]: holds a dynamic list of child actors
//!
//! A host that only has a `&mut dyn Widget` asks for a capability with
//! [`Widget::as_stylable`], [`Widget::as_focusable`] or
//! [`Widget::as_container`].

use tessera_core::ObjectId;

use super::actor::Actor;
use super::base::WidgetBase;
use super::events::WidgetEvent;
use crate::error::Result;

/// The base trait for all widgets.
pub trait Widget: Actor {
    /// Get a reference to the widget base.
    fn widget_base(&self) -> &WidgetBase;

    /// Get a mutable reference to the widget base.
    fn widget_base_mut(&mut self) -> &mut WidgetBase;

    /// Handle an event.
    ///
    /// Returns `true` if the event was consumed.
    fn event(&mut self, _event: &mut WidgetEvent) -> bool {
        false
    }

    /// This widget as a [`Stylable`], if it is one.
    fn as_stylable(&mut self) -> Option<&mut dyn Stylable> {
        None
    }

    /// This widget as a [`Focusable`], if it is one.
    fn as_focusable(&mut self) -> Option<&mut dyn Focusable> {
        None
    }

    /// This widget as a [`Container`], if it is one.
    fn as_container(&mut self) -> Option<&mut dyn Container> {
        None
    }
}

/// Widgets whose appearance is driven by style lookups.
///
/// Only [`style_changed`](Self::style_changed) is required; class and
/// pseudo-class storage comes from the widget base.
pub trait Stylable: Widget {
    /// Re-read style-derived values after the style may have changed.
    fn style_changed(&mut self);

    /// The style class.
    fn style_class(&self) -> Option<&str> {
        self.widget_base().style_class()
    }

    /// Set the style class, re-reading style if it changed.
    fn set_style_class(&mut self, class: Option<&str>) {
        if self.widget_base_mut().set_style_class(class) {
            self.style_changed();
        }
    }

    /// The style pseudo-class.
    fn style_pseudo_class(&self) -> Option<&str> {
        self.widget_base().style_pseudo_class()
    }

    /// Set the style pseudo-class, re-reading style if it changed.
    fn set_style_pseudo_class(&mut self, pseudo_class: Option<&str>) {
        if self.widget_base_mut().set_style_pseudo_class(pseudo_class) {
            self.style_changed();
        }
    }
}

/// How focus arrived at a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusHint {
    /// Focus the first focusable element.
    #[default]
    First,
    /// Focus the last focusable element.
    Last,
    /// Focus the previously focused element.
    Prior,
}

/// Direction of a focus move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusDirection {
    /// Towards the top.
    Up,
    /// Towards the bottom.
    Down,
    /// Towards the left.
    Left,
    /// Towards the right.
    Right,
    /// Next in tab order.
    Next,
    /// Previous in tab order.
    Previous,
}

/// Widgets that take part in keyboard focus traversal.
pub trait Focusable {
    /// Take focus. Returns the id of the element that now holds focus.
    fn accept_focus(&mut self, hint: FocusHint) -> Option<ObjectId>;

    /// Move focus away from `from` in `direction`.
    ///
    /// Returns the id of the next element to focus, or `None` to let the
    /// host continue the search elsewhere.
    fn move_focus(&mut self, direction: FocusDirection, from: ObjectId) -> Option<ObjectId>;
}

/// Widgets that hold a dynamic list of child actors.
pub trait Container {
    /// Add a child, taking ownership of it.
    fn add(&mut self, child: Box<dyn Actor>);

    /// Remove a child, handing ownership back to the caller.
    fn remove(&mut self, child: ObjectId) -> Result<Box<dyn Actor>>;

    /// Visit every child in order.
    fn foreach(&self, visit: &mut dyn FnMut(&dyn Actor));
}
