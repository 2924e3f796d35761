//! Widget base implementation.
//!
//! This module provides `WidgetBase`, the state every widget shares: its
//! place in the object tree, its last allocation, padding, opacity, style
//! class and pseudo-class, and its property notifier.

use tessera_core::logging::targets;
use tessera_core::{NotifyBatch, ObjectBase, ObjectId, PropertyNotifier, SharedObjectRegistry};

use super::geometry::{Padding, Rect};
use super::host::Host;
use super::services::Services;
use super::style::StyleSelector;

/// The base implementation for all widgets.
///
/// Widget implementations include this as a field and delegate common
/// operations to it.
///
/// # Example
///
/// ```ignore
/// use tessera::widget::{WidgetBase, Services};
///
/// struct Spinner {
///     base: WidgetBase,
/// }
///
/// impl Spinner {
///     fn new(services: &Services) -> Self {
///         Self { base: WidgetBase::new::<Self>(services, &["value"]) }
///     }
/// }
/// ```
pub struct WidgetBase {
    object: ObjectBase,
    services: Services,
    type_name: &'static str,
    padding: Padding,
    allocation: Rect,
    opacity: u8,
    mapped: bool,
    style_class: Option<String>,
    pseudo_class: Option<String>,
    notifier: PropertyNotifier,
}

impl WidgetBase {
    /// Register a new widget of type `T` announcing `properties`.
    pub fn new<T: 'static>(services: &Services, properties: &'static [&'static str]) -> Self {
        let full_name = std::any::type_name::<T>();
        let type_name = full_name.rsplit("::").next().unwrap_or(full_name);

        Self {
            object: ObjectBase::new::<T>(services.registry()),
            services: services.clone(),
            type_name,
            padding: Padding::ZERO,
            allocation: Rect::ZERO,
            opacity: super::actor::OPAQUE,
            mapped: false,
            style_class: None,
            pseudo_class: None,
            notifier: PropertyNotifier::new(properties),
        }
    }

    /// This widget's object ID.
    pub fn object_id(&self) -> ObjectId {
        self.object.id()
    }

    /// Short type name used for style lookups.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// The injected services.
    pub fn services(&self) -> &Services {
        &self.services
    }

    /// The object registry.
    pub fn registry(&self) -> &SharedObjectRegistry {
        self.services.registry()
    }

    /// The host framework.
    pub fn host(&self) -> &dyn Host {
        self.services.host()
    }

    // =========================================================================
    // Ownership
    // =========================================================================

    /// Record `child` as owned by this widget.
    pub fn adopt(&self, child: ObjectId) {
        if let Err(err) = self.registry().set_parent(child, Some(self.object_id())) {
            tracing::warn!(target: targets::WIDGET, ?child, %err, "cannot adopt child");
        }
    }

    /// Give up ownership of `child` without destroying it.
    pub fn disown(&self, child: ObjectId) {
        if let Err(err) = self.registry().set_parent(child, None) {
            tracing::warn!(target: targets::WIDGET, ?child, %err, "cannot disown child");
        }
    }

    /// Destroy `child` and everything it owns.
    pub fn release(&self, child: ObjectId) {
        if let Err(err) = self.registry().destroy(child) {
            tracing::warn!(target: targets::WIDGET, ?child, %err, "cannot release child");
        }
    }

    /// Move `child` below all of its siblings.
    pub fn lower_child(&self, child: ObjectId) {
        if let Err(err) = self.registry().lower(child) {
            tracing::warn!(target: targets::WIDGET, ?child, %err, "cannot lower child");
        }
    }

    /// Give `child` a name shown in object tree dumps.
    pub fn name_child(&self, child: ObjectId, name: &str) {
        if let Err(err) = self.registry().set_object_name(child, name.to_string()) {
            tracing::warn!(target: targets::WIDGET, ?child, %err, "cannot name child");
        }
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    /// Padding between the widget's edge and its content.
    pub fn padding(&self) -> Padding {
        self.padding
    }

    /// Set the padding. Returns `true` if it changed.
    pub fn set_padding(&mut self, padding: Padding) -> bool {
        if self.padding != padding {
            self.padding = padding;
            true
        } else {
            false
        }
    }

    /// The last allocated box.
    pub fn allocation(&self) -> Rect {
        self.allocation
    }

    /// Store the allocated box.
    pub fn set_allocation(&mut self, rect: Rect) {
        self.allocation = rect;
    }

    /// Ask the host for a new layout pass.
    pub fn queue_relayout(&self) {
        self.host().queue_relayout(self.object_id());
    }

    // =========================================================================
    // Visibility
    // =========================================================================

    /// Current opacity.
    pub fn opacity(&self) -> u8 {
        self.opacity
    }

    /// Set the opacity.
    pub fn set_opacity(&mut self, opacity: u8) {
        self.opacity = opacity;
    }

    /// Whether the widget is mapped.
    pub fn is_mapped(&self) -> bool {
        self.mapped
    }

    /// Set the mapped flag.
    pub fn set_mapped(&mut self, mapped: bool) {
        self.mapped = mapped;
    }

    // =========================================================================
    // Style
    // =========================================================================

    /// The style class.
    pub fn style_class(&self) -> Option<&str> {
        self.style_class.as_deref()
    }

    /// Set the style class. Returns `true` if it changed.
    pub fn set_style_class(&mut self, class: Option<&str>) -> bool {
        if self.style_class.as_deref() != class {
            self.style_class = class.map(str::to_string);
            true
        } else {
            false
        }
    }

    /// The style pseudo-class.
    pub fn style_pseudo_class(&self) -> Option<&str> {
        self.pseudo_class.as_deref()
    }

    /// Set the style pseudo-class. Returns `true` if it changed.
    pub fn set_style_pseudo_class(&mut self, pseudo_class: Option<&str>) -> bool {
        if self.pseudo_class.as_deref() != pseudo_class {
            self.pseudo_class = pseudo_class.map(str::to_string);
            true
        } else {
            false
        }
    }

    /// Selector describing this widget for style lookups.
    pub fn style_selector(&self) -> StyleSelector {
        StyleSelector {
            type_name: self.type_name,
            class: self.style_class.clone(),
            pseudo_class: self.pseudo_class.clone(),
        }
    }

    // =========================================================================
    // Property Notification
    // =========================================================================

    /// The property notifier.
    pub fn notifier(&self) -> &PropertyNotifier {
        &self.notifier
    }

    /// Announce that `property` changed.
    pub fn notify(&self, property: &str) {
        if let Err(err) = self.notifier.notify(property) {
            tracing::warn!(target: targets::WIDGET, widget = self.type_name, %err, "notify failed");
        }
    }

    /// Batch notifications until the returned guard drops.
    pub fn freeze_notify(&self) -> NotifyBatch<'_> {
        self.notifier.freeze()
    }
}

impl std::fmt::Debug for WidgetBase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WidgetBase")
            .field("id", &self.object_id())
            .field("type_name", &self.type_name)
            .field("allocation", &self.allocation)
            .field("padding", &self.padding)
            .field("opacity", &self.opacity)
            .field("mapped", &self.mapped)
            .finish()
    }
}
