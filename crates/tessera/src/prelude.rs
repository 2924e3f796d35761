//! Prelude module for Tessera.
//!
//! ```ignore
//! use tessera::prelude::*;
//! ```

// ============================================================================
// Object System
// ============================================================================

pub use tessera_core::{ObjectId, PropertyNotifier, SharedObjectRegistry, Signal};

// ============================================================================
// Widget Foundation
// ============================================================================

pub use crate::widget::{
    Actor, ActorFactory, Container, Focusable, Host, IconTheme, Menu, Services, Stylable,
    StyleRules, TextActor, TextureCache, Widget, WidgetBase, WidgetEvent,
};

// ============================================================================
// Geometry
// ============================================================================

pub use crate::widget::{Padding, Point, Rect, Size, SizeRequest, UNCONSTRAINED};

// ============================================================================
// Widgets
// ============================================================================

pub use crate::widget::widgets::{ComboBox, Pager, PagerConfig};

pub use crate::{Error, Result};
