//! Tessera - combo box and pager widgets over a host actor framework.
//!
//! Tessera widgets do not render. The host provides actors (text, images,
//! menus, plain rectangles) through an [`ActorFactory`](widget::ActorFactory)
//! and the widgets negotiate sizes, place their actors and keep their
//! selection or page state.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use tessera::prelude::*;
//!
//! let services = Services::new(
//!     SharedObjectRegistry::new(),
//!     Arc::new(MyHost::default()),
//!     Arc::new(StyleRules::new()),
//!     Arc::new(MyIconTheme),
//!     Arc::new(MyTextureCache),
//!     Arc::new(MyActorFactory),
//! );
//!
//! let mut combo = ComboBox::new(&services);
//! combo.append_entry("Small");
//! combo.append_entry("Large");
//! combo.set_index(0);
//! ```

mod error;
pub mod prelude;
pub mod widget;

pub use error::{Error, Result};
pub use tessera_core;
