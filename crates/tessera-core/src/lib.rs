//! Core systems for Tessera.
//!
//! This crate provides the foundation the widget crate builds on:
//!
//! - **Object Model**: parent-child ownership, naming, stacking order
//! - **Signals**: synchronous observer lists
//! - **Property Notification**: named change notification with batching
//! - **Logging**: tracing targets, object tree dumps, perf spans
//!
//! # Example
//!
//! ```
//! use tessera_core::{ObjectBase, ObjectTreeDebug, SharedObjectRegistry, TreeFormatOptions};
//!
//! struct Page {
//!     base: ObjectBase,
//! }
//!
//! let registry = SharedObjectRegistry::new();
//! let book = ObjectBase::new::<Page>(&registry);
//! let page = Page { base: ObjectBase::new::<Page>(&registry) };
//! registry.set_parent(page.base.id(), Some(book.id())).unwrap();
//! registry.set_object_name(page.base.id(), "cover".to_string()).unwrap();
//!
//! let tree = ObjectTreeDebug::with_options(&registry, TreeFormatOptions::minimal())
//!     .format_subtree(book.id())
//!     .unwrap();
//! assert!(tree.contains("cover"));
//!
//! drop(book);
//! assert!(!registry.contains(page.base.id()));
//! ```

mod error;
pub mod logging;
pub mod object;
pub mod property;
pub mod signal;

pub use error::{CoreError, Result};
pub use logging::{ObjectTreeDebug, PerfSpan, TreeFormatOptions, TreeStyle};
pub use object::{
    ObjectBase, ObjectError, ObjectId, ObjectRegistry, ObjectResult, SharedObjectRegistry,
};
pub use property::{NotifyBatch, PropertyError, PropertyNotifier};
pub use signal::{ConnectionId, Signal};
