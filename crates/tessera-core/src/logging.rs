//! Logging and debugging facilities for Tessera.
//!
//! This module provides:
//! - Target names for filtering `tracing` output by subsystem
//! - Debug visualization for object trees
//! - Performance tracing hooks for layout passes
//!
//! # Tracing Integration
//!
//! Tessera uses the `tracing` crate for instrumentation. To see logs,
//! install a tracing subscriber in the host application:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("tessera=debug,tessera_core=info")
//!     .init();
//! ```

use std::fmt::Write as FmtWrite;

use crate::object::{ObjectId, ObjectRegistry, ObjectResult, SharedObjectRegistry};

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Signal emission.
    pub const SIGNAL: &str = "tessera_core::signal";
    /// Property system target.
    pub const PROPERTY: &str = "tessera_core::property";
    /// Object model target.
    pub const OBJECT: &str = "tessera_core::object";
    /// Performance spans.
    pub const PERF: &str = "tessera::perf";
    /// Widget base: ownership and notification.
    pub const WIDGET: &str = "tessera::widget";
    /// Size negotiation and allocation.
    pub const LAYOUT: &str = "tessera::layout";
    /// Combo box selection and menu.
    pub const COMBO_BOX: &str = "tessera::combo_box";
    /// Pager navigation.
    pub const PAGER: &str = "tessera::pager";
}

/// Style options for object tree visualization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TreeStyle {
    /// ASCII characters for tree branches.
    Ascii,
    /// Unicode box-drawing characters.
    #[default]
    Unicode,
}

/// Configuration for object tree debug output.
#[derive(Debug, Clone)]
pub struct TreeFormatOptions {
    /// The style of tree visualization.
    pub style: TreeStyle,
    /// Whether to show object IDs.
    pub show_ids: bool,
    /// Whether to show type names.
    pub show_types: bool,
    /// Maximum depth to traverse (None for unlimited).
    pub max_depth: Option<usize>,
}

impl Default for TreeFormatOptions {
    fn default() -> Self {
        Self {
            style: TreeStyle::default(),
            show_ids: true,
            show_types: true,
            max_depth: None,
        }
    }
}

impl TreeFormatOptions {
    /// Create options for minimal output.
    pub fn minimal() -> Self {
        Self {
            show_ids: false,
            show_types: false,
            ..Default::default()
        }
    }
}

/// Debug utility for visualizing the ownership tree of a registry.
pub struct ObjectTreeDebug {
    registry: SharedObjectRegistry,
    options: TreeFormatOptions,
}

impl ObjectTreeDebug {
    /// Create a new debug visualizer with default options.
    pub fn new(registry: &SharedObjectRegistry) -> Self {
        Self::with_options(registry, TreeFormatOptions::default())
    }

    /// Create a debug visualizer with custom options.
    pub fn with_options(registry: &SharedObjectRegistry, options: TreeFormatOptions) -> Self {
        Self {
            registry: registry.clone(),
            options,
        }
    }

    /// Format every root object and its descendants.
    pub fn format_all(&self) -> ObjectResult<String> {
        self.registry.with_read(|registry| {
            let mut output = String::new();
            let _ = writeln!(output, "Object Tree ({} total objects):", registry.object_count());

            let roots: Vec<ObjectId> = registry.root_objects().collect();
            if roots.is_empty() {
                output.push_str("  (empty)\n");
            }
            for root in roots {
                self.format_into(registry, root, 0, true, &mut output)?;
            }
            Ok(output)
        })
    }

    /// Format a subtree starting from a specific object.
    pub fn format_subtree(&self, root: ObjectId) -> ObjectResult<String> {
        self.registry.with_read(|registry| {
            let mut output = String::new();
            self.format_into(registry, root, 0, true, &mut output)?;
            Ok(output)
        })
    }

    fn format_into(
        &self,
        registry: &ObjectRegistry,
        id: ObjectId,
        depth: usize,
        is_last: bool,
        output: &mut String,
    ) -> ObjectResult<()> {
        if let Some(max) = self.options.max_depth
            && depth > max
        {
            return Ok(());
        }

        let name = registry.object_name(id)?;
        let type_name = registry.type_name(id)?;

        output.push_str(&self.build_prefix(depth, is_last));
        output.push_str(if name.is_empty() { "(unnamed)" } else { name });

        if self.options.show_ids {
            let _ = write!(output, " [{:?}]", id);
        }
        if self.options.show_types {
            let short_type = type_name.rsplit("::").next().unwrap_or(type_name);
            let _ = write!(output, " ({})", short_type);
        }
        output.push('\n');

        let children = registry.children(id)?;
        let child_count = children.len();
        for (i, &child) in children.iter().enumerate() {
            self.format_into(registry, child, depth + 1, i + 1 == child_count, output)?;
        }
        Ok(())
    }

    fn build_prefix(&self, depth: usize, is_last: bool) -> String {
        if depth == 0 {
            return String::new();
        }

        let (branch, tee, corner) = match self.options.style {
            TreeStyle::Ascii => ("|  ", "+-- ", "`-- "),
            TreeStyle::Unicode => ("\u{2502}  ", "\u{251c}\u{2500}\u{2500} ", "\u{2514}\u{2500}\u{2500} "),
        };

        let mut prefix = branch.repeat(depth - 1);
        prefix.push_str(if is_last { corner } else { tee });
        prefix
    }
}

/// A guard that keeps a tracing span entered until dropped.
///
/// Used to time allocation passes.
#[derive(Debug)]
pub struct PerfSpan {
    _span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create a new performance span.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::info_span!(target: targets::PERF, "perf", operation = name);
        Self {
            _span: span.entered(),
        }
    }
}
