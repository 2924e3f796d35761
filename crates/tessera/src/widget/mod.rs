//! Widget system for Tessera.
//!
//! This module provides the widget architecture:
//!
//! - [`Actor`]: the host scene-graph elements widgets are assembled from
//! - [`Widget`] trait and the optional [`Stylable`], [`Focusable`] and
//!   [`Container`] capabilities
//! - [`WidgetBase`]: shared state every widget embeds
//! - Geometry and the two-pass size negotiation types
//! - [`Services`]: host, style, icon and texture collaborators injected at
//!   construction
//!
//! # Layout protocol
//!
//! A parent first asks a widget for its preferred width or height, optionally
//! constrained by the known size along the other axis ([`UNCONSTRAINED`]
//! when it is not yet known). Once the parent has decided, it calls
//! [`Actor::allocate`] with the final box, and the widget places its own
//! children inside it. Widgets never recompute layout on their own; when
//! their content changes they ask the host to run a new pass through
//! [`Host::queue_relayout`].
//!
//! ```ignore
//! use tessera::widget::*;
//!
//! let width = combo.preferred_width(UNCONSTRAINED).natural;
//! let height = combo.preferred_height(width).natural;
//! combo.allocate(Rect::new(0.0, 0.0, width, height));
//! ```

mod actor;
mod base;
mod events;
mod geometry;
mod host;
mod services;
pub mod style;
mod traits;
pub mod widgets;

#[cfg(test)]
pub(crate) mod testing;

pub use actor::{Actor, Menu, MenuEntry, OPAQUE, TRANSPARENT, TextActor};
pub use base::WidgetBase;
pub use events::{
    ButtonPressEvent, EventBase, Key, KeyPressEvent, MenuActivatedEvent, MouseButton, WidgetEvent,
};
pub use geometry::{Padding, Point, Rect, Size, SizeRequest, UNCONSTRAINED, shrink_constraint};
pub use host::{Host, RelayoutQueue, SuspendGuard};
pub use services::{ActorFactory, IconTheme, Services, TextureCache};
pub use style::{StyleResolver, StyleRule, StyleRules, StyleSelector, StyleValue};
pub use traits::{Container, FocusDirection, FocusHint, Focusable, Stylable, Widget};
