//! Standard widgets for Tessera.
//!
//! - [`ComboBox`]: single selection from a flyout list of entries
//! - [`Pager`]: stack of pages, one visible at a time

mod combo_box;
mod pager;

pub use combo_box::{ComboBox, ComboBoxStyle, ComboEntry};
pub use pager::{Pager, PagerConfig};
