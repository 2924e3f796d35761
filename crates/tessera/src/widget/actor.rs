//! Host-side scene graph elements consumed by widgets.
//!
//! Widgets do not draw. They own actors created by the host (text, images,
//! menus, plain rectangles), negotiate their sizes, and place them. These
//! traits are the narrow surface a widget needs from such an actor.

use std::time::Duration;

use tessera_core::ObjectId;

use super::geometry::{Rect, SizeRequest};

/// Fully opaque.
pub const OPAQUE: u8 = 0xff;

/// Fully transparent.
pub const TRANSPARENT: u8 = 0x00;

/// A sized, placeable element of the host scene graph.
pub trait Actor: Send + Sync {
    /// Identity of this actor in the object registry.
    fn object_id(&self) -> ObjectId;

    /// Minimum and natural width when the height is `for_height`.
    ///
    /// A negative `for_height` means the height is not yet known.
    fn preferred_width(&self, for_height: f32) -> SizeRequest;

    /// Minimum and natural height when the width is `for_width`.
    ///
    /// A negative `for_width` means the width is not yet known.
    fn preferred_height(&self, for_width: f32) -> SizeRequest;

    /// Assign the final box, in parent coordinates.
    fn allocate(&mut self, rect: Rect);

    /// The last box passed to [`allocate`](Self::allocate).
    fn allocation(&self) -> Rect;

    /// Current opacity, 0 to 255.
    fn opacity(&self) -> u8;

    /// Set opacity immediately.
    fn set_opacity(&mut self, opacity: u8);

    /// Fade to `opacity` over `duration`.
    ///
    /// Hosts without an animation engine may jump straight to the target.
    fn animate_opacity(&mut self, opacity: u8, duration: Duration) {
        let _ = duration;
        self.set_opacity(opacity);
    }

    /// Whether the actor is currently mapped.
    fn is_mapped(&self) -> bool {
        false
    }

    /// Make the actor eligible for painting.
    fn map(&mut self) {}

    /// Withdraw the actor from painting.
    fn unmap(&mut self) {}

    /// Paint the actor.
    fn paint(&self) {}
}

/// An actor that displays a single line of text.
pub trait TextActor: Actor {
    /// The displayed text.
    fn text(&self) -> &str;

    /// Replace the displayed text.
    fn set_text(&mut self, text: &str);
}

/// One row of a flyout menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    /// Reported back in [`MenuActivatedEvent`](super::events::MenuActivatedEvent)
    /// when the row is chosen.
    pub id: usize,
    /// Text shown for the row.
    pub label: String,
    /// Optional icon name shown next to the text.
    pub icon: Option<String>,
}

/// A flyout menu owned by a widget.
///
/// Activation is reported by the host as a
/// [`WidgetEvent::MenuActivated`](super::events::WidgetEvent::MenuActivated)
/// delivered to the owning widget.
pub trait Menu: Actor {
    /// Remove every entry.
    fn clear(&mut self);

    /// Append an entry.
    fn add_entry(&mut self, entry: MenuEntry);

    /// Pop the menu up.
    fn show(&mut self);

    /// Re-resolve the menu's own style after its owner's style changed.
    fn style_changed(&mut self) {}
}
