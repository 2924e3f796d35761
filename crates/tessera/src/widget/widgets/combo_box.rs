//! ComboBox widget for single selection from a flyout list.
//!
//! The combo box shows the selected entry's text (and icon, if the entry has
//! one) next to an optional style-provided marker image. Pressing it pops up
//! a menu listing every entry; activating a menu row selects that entry. The
//! arrow keys step the selection without opening the menu.
//!
//! # Example
//!
//! ```ignore
//! use tessera::widget::widgets::ComboBox;
//!
//! let mut combo = ComboBox::new(&services).with_spacing(4);
//! combo.append_entry("Apple");
//! combo.append_entry("Banana");
//! combo.insert_entry_with_icon(-1, "Cherry", "cherry-symbolic");
//!
//! combo.set_index(1);
//! assert_eq!(combo.title(), "Banana");
//!
//! combo.widget_base().notifier().connect(|property| {
//!     println!("{property} changed");
//! });
//! ```

use tessera_core::logging::targets;
use tessera_core::{ObjectId, PerfSpan};

use crate::error::{Error, Result};
use crate::widget::style::{ICON_SIZE, MARKER_IMAGE, PADDING, SPACING};
use crate::widget::{
    Actor, FocusDirection, FocusHint, Focusable, Key, Menu, MenuEntry, Padding, Rect, Services,
    SizeRequest, Stylable, StyleResolver, StyleSelector, TextActor, UNCONSTRAINED, Widget,
    WidgetBase, WidgetEvent, shrink_constraint,
};

/// Observable properties.
const PROPERTIES: &[&str] = &["title", "index"];

/// Pseudo-class set while the combo box has key focus.
const FOCUS_PSEUDO_CLASS: &str = "focus";

// ============================================================================
// Entries
// ============================================================================

/// One selectable entry of a [`ComboBox`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComboEntry {
    display_name: String,
    icon: Option<String>,
}

impl ComboEntry {
    /// Create an entry without an icon.
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            icon: None,
        }
    }

    /// Create an entry with a named icon.
    pub fn with_icon(display_name: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            icon: Some(icon.into()),
        }
    }

    /// The text shown for this entry.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// The icon name, if any.
    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }
}

// ============================================================================
// Style
// ============================================================================

/// Style-derived values of a [`ComboBox`].
#[derive(Debug, Clone, PartialEq)]
pub struct ComboBoxStyle {
    /// Gap between icon, label and marker.
    pub spacing: u32,
    /// Size icons are looked up at.
    pub icon_size: u32,
    /// Resource uri of the marker image.
    pub marker_image: Option<String>,
    /// Padding around the content.
    pub padding: Padding,
}

impl Default for ComboBoxStyle {
    fn default() -> Self {
        Self {
            spacing: 8,
            icon_size: 16,
            marker_image: None,
            padding: Padding::ZERO,
        }
    }
}

impl ComboBoxStyle {
    /// Resolve the style for `selector`.
    ///
    /// Spacing, icon size and padding fall back to `fallback` when the
    /// resolver has no value. The marker is only present when the resolver
    /// names an image.
    pub fn resolve(resolver: &dyn StyleResolver, selector: &StyleSelector, fallback: &Self) -> Self {
        Self {
            spacing: resolver.integer(selector, SPACING, fallback.spacing),
            icon_size: resolver.integer(selector, ICON_SIZE, fallback.icon_size),
            marker_image: resolver.image(selector, MARKER_IMAGE),
            padding: resolver.padding(selector, PADDING).unwrap_or(fallback.padding),
        }
    }
}

// ============================================================================
// ComboBox
// ============================================================================

/// A button showing the current choice, with a flyout menu of all choices.
///
/// The selection is either an index into the entry list or `-1`, in which
/// case the label shows a free-text title set through
/// [`set_title`](Self::set_title).
///
/// # Properties
///
/// - `title`: the label text
/// - `index`: the selected position, `-1` when nothing is selected
pub struct ComboBox {
    base: WidgetBase,
    label: Box<dyn TextActor>,
    icon: Option<Box<dyn Actor>>,
    marker: Option<Box<dyn Actor>>,
    menu: Option<Box<dyn Menu>>,
    entries: Vec<ComboEntry>,
    index: i32,
    /// Values set through the builder, used where the style has none.
    configured: ComboBoxStyle,
    style: ComboBoxStyle,
}

impl ComboBox {
    /// Create an empty combo box with a label and a menu from the host's
    /// actor factory, and resolve its style.
    pub fn new(services: &Services) -> Self {
        let base = WidgetBase::new::<Self>(services, PROPERTIES);
        let label = services.factory().create_text(services.registry());
        let menu = services.factory().create_menu(services.registry());
        base.adopt(label.object_id());
        base.adopt(menu.object_id());
        base.name_child(label.object_id(), "label");
        base.name_child(menu.object_id(), "menu");

        let mut combo = Self {
            base,
            label,
            icon: None,
            marker: None,
            menu: Some(menu),
            entries: Vec::new(),
            index: -1,
            configured: ComboBoxStyle::default(),
            style: ComboBoxStyle::default(),
        };
        combo.style_changed();
        combo
    }

    /// Set the spacing using builder pattern.
    ///
    /// Builder values are fallbacks: a matching style rule still wins.
    pub fn with_spacing(mut self, spacing: u32) -> Self {
        self.configured.spacing = spacing;
        self.refresh_style();
        self
    }

    /// Set the icon size using builder pattern.
    pub fn with_icon_size(mut self, icon_size: u32) -> Self {
        self.configured.icon_size = icon_size;
        self.refresh_style();
        self
    }

    /// Set the padding using builder pattern.
    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.configured.padding = padding;
        self.refresh_style();
        self
    }

    // =========================================================================
    // Entries
    // =========================================================================

    /// Insert an entry at `position`.
    ///
    /// A negative position, or one beyond the end, appends. The selected index
    /// is left unchanged.
    pub fn insert_entry(&mut self, position: i32, display_name: impl Into<String>) {
        self.insert(position, ComboEntry::new(display_name));
    }

    /// Insert an entry with a named icon at `position`.
    pub fn insert_entry_with_icon(
        &mut self,
        position: i32,
        display_name: impl Into<String>,
        icon: impl Into<String>,
    ) {
        self.insert(position, ComboEntry::with_icon(display_name, icon));
    }

    /// Add an entry at the end.
    pub fn append_entry(&mut self, display_name: impl Into<String>) {
        self.insert_entry(-1, display_name);
    }

    /// Add an entry at the start.
    pub fn prepend_entry(&mut self, display_name: impl Into<String>) {
        self.insert_entry(0, display_name);
    }

    fn insert(&mut self, position: i32, entry: ComboEntry) {
        let len = self.entries.len();
        let at = usize::try_from(position)
            .ok()
            .filter(|&p| p <= len)
            .unwrap_or(len);

        tracing::trace!(target: targets::COMBO_BOX, position = at, name = %entry.display_name, "insert entry");
        self.entries.insert(at, entry);
        self.rebuild_menu();
        self.base.queue_relayout();
    }

    /// Remove the entry at `position`.
    ///
    /// Removing the selected entry clears the selection. Removing an entry
    /// before it moves the index down so the same entry stays selected.
    pub fn remove_entry(&mut self, position: i32) -> Result<()> {
        let len = self.entries.len();
        let at = usize::try_from(position)
            .ok()
            .filter(|&p| p < len)
            .ok_or_else(|| Error::out_of_range(position, len))?;

        self.entries.remove(at);
        self.rebuild_menu();
        self.base.queue_relayout();

        if self.index == position {
            tracing::debug!(target: targets::COMBO_BOX, position, "selected entry removed");
            self.select(None);
        } else if self.index > position {
            self.index -= 1;
            self.base.notify("index");
        }
        Ok(())
    }

    /// Number of entries.
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// The entry at `position`.
    pub fn entry(&self, position: usize) -> Option<&ComboEntry> {
        self.entries.get(position)
    }

    /// All entries, in order.
    pub fn entries(&self) -> &[ComboEntry] {
        &self.entries
    }

    fn rebuild_menu(&mut self) {
        let Some(menu) = self.menu.as_mut() else {
            return;
        };
        menu.clear();
        for (id, entry) in self.entries.iter().enumerate() {
            menu.add_entry(MenuEntry {
                id,
                label: entry.display_name.clone(),
                icon: entry.icon.clone(),
            });
        }
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// The text currently shown.
    pub fn title(&self) -> &str {
        self.label.text()
    }

    /// Show free text instead of an entry. Clears the selection.
    pub fn set_title(&mut self, title: &str) {
        let _batch = self.base.freeze_notify();
        self.index = -1;
        self.label.set_text(title);
        if let Some(icon) = self.icon.take() {
            self.base.release(icon.object_id());
        }
        self.base.queue_relayout();
        self.base.notify("index");
        self.base.notify("title");
    }

    /// The selected position, or `-1` when nothing is selected.
    pub fn index(&self) -> i32 {
        self.index
    }

    /// Select the entry at `index`.
    ///
    /// An index that does not denote an entry clears the selection instead
    /// of failing.
    pub fn set_index(&mut self, index: i32) {
        let position = usize::try_from(index)
            .ok()
            .filter(|&p| p < self.entries.len());
        self.select(position);
    }

    fn select(&mut self, position: Option<usize>) {
        let _batch = self.base.freeze_notify();

        if let Some(icon) = self.icon.take() {
            self.base.release(icon.object_id());
        }

        match position.and_then(|p| self.entries.get(p).map(|entry| (p, entry))) {
            Some((p, entry)) => {
                self.index = i32::try_from(p).unwrap_or(-1);
                self.label.set_text(&entry.display_name);
                if let Some(name) = entry.icon.as_deref() {
                    let services = self.base.services();
                    self.icon = services
                        .icons()
                        .lookup_icon(services.registry(), name, self.style.icon_size);
                    match &self.icon {
                        Some(icon) => {
                            self.base.adopt(icon.object_id());
                            self.base.name_child(icon.object_id(), "icon");
                        }
                        None => tracing::debug!(target: targets::COMBO_BOX, icon = name, "icon not found"),
                    }
                }
            }
            None => {
                self.index = -1;
                self.label.set_text("");
            }
        }

        tracing::debug!(target: targets::COMBO_BOX, index = self.index, title = self.label.text(), "selection changed");
        self.base.queue_relayout();
        self.base.notify("index");
        self.base.notify("title");
    }

    /// Move the selection by `delta`, clamped to the entry range.
    ///
    /// The upper bound is applied first, so with no entries the result is
    /// `-1` and the selection is cleared.
    fn step_index(&mut self, delta: i32) {
        let last = i32::try_from(self.entries.len()).unwrap_or(i32::MAX) - 1;
        let target = self.index.saturating_add(delta);
        let target = if target > last {
            last
        } else if target < 0 {
            0
        } else {
            target
        };
        self.set_index(target);
    }

    // =========================================================================
    // Children
    // =========================================================================

    /// The flyout menu, if any.
    pub fn menu(&self) -> Option<&dyn Menu> {
        self.menu.as_deref()
    }

    /// Replace the flyout menu, returning the previous one.
    ///
    /// The new menu is filled with the current entries.
    pub fn set_menu(&mut self, menu: Option<Box<dyn Menu>>) -> Option<Box<dyn Menu>> {
        let previous = std::mem::replace(&mut self.menu, menu);
        if let Some(old) = &previous {
            self.base.disown(old.object_id());
        }
        if let Some(new) = &self.menu {
            self.base.adopt(new.object_id());
            self.base.name_child(new.object_id(), "menu");
        }
        self.rebuild_menu();
        self.base.queue_relayout();
        previous
    }

    /// The icon of the selected entry, if it has one.
    pub fn icon(&self) -> Option<&dyn Actor> {
        self.icon.as_deref()
    }

    /// The style-provided marker, if any.
    pub fn marker(&self) -> Option<&dyn Actor> {
        self.marker.as_deref()
    }

    /// The current style-derived values.
    pub fn style(&self) -> &ComboBoxStyle {
        &self.style
    }

    /// Resolve the style against the builder values and apply it to the
    /// padding and marker.
    fn refresh_style(&mut self) {
        let style = ComboBoxStyle::resolve(
            self.base.services().style(),
            &self.base.style_selector(),
            &self.configured,
        );

        if style.marker_image != self.style.marker_image || self.marker.is_none() {
            self.replace_marker(style.marker_image.as_deref());
        }
        self.base.set_padding(style.padding);
        self.style = style;
    }

    fn replace_marker(&mut self, uri: Option<&str>) {
        if let Some(old) = self.marker.take() {
            self.base.release(old.object_id());
        }
        let Some(uri) = uri else {
            return;
        };

        let services = self.base.services();
        self.marker = services.textures().texture(services.registry(), uri);
        match &mut self.marker {
            Some(marker) => {
                self.base.adopt(marker.object_id());
                self.base.name_child(marker.object_id(), "marker");
                if self.base.is_mapped() {
                    marker.map();
                }
            }
            None => tracing::warn!(target: targets::COMBO_BOX, uri, "cannot load marker image"),
        }
    }

    /// Width and height of `actor` when it has to fit into `height`.
    ///
    /// The natural height is used when it fits; otherwise the height is
    /// clamped and the width is queried for the clamped height.
    fn fit_to_height(actor: &dyn Actor, height: f32) -> (f32, f32) {
        let natural_height = actor.preferred_height(UNCONSTRAINED).natural;
        if height >= natural_height {
            (actor.preferred_width(UNCONSTRAINED).natural, natural_height)
        } else {
            (actor.preferred_width(height).natural, height)
        }
    }
}

impl Actor for ComboBox {
    fn object_id(&self) -> ObjectId {
        self.base.object_id()
    }

    fn preferred_width(&self, for_height: f32) -> SizeRequest {
        let padding = self.base.padding();
        let spacing = self.style.spacing as f32;
        let for_height = shrink_constraint(for_height, padding.vertical());

        let mut request = self.label.preferred_width(for_height);
        if let Some(icon) = &self.icon {
            request = request.plus(icon.preferred_width(for_height)).grow(spacing);
        }
        if let Some(menu) = &self.menu {
            request = request.max(menu.preferred_width(UNCONSTRAINED));
        }
        if let Some(marker) = &self.marker {
            request = request.plus(marker.preferred_width(for_height)).grow(spacing);
        }

        request.grow(padding.horizontal()).non_negative()
    }

    fn preferred_height(&self, _for_width: f32) -> SizeRequest {
        let mut request = self.label.preferred_height(UNCONSTRAINED);
        if let Some(icon) = &self.icon {
            request = request.max(icon.preferred_height(UNCONSTRAINED));
        }
        if let Some(marker) = &self.marker {
            request = request.max(marker.preferred_height(UNCONSTRAINED));
        }

        request.grow(self.base.padding().vertical()).non_negative()
    }

    fn allocate(&mut self, rect: Rect) {
        let _span = PerfSpan::new("ComboBox::allocate");
        self.base.set_allocation(rect);

        let content = rect.content_area(&self.base.padding());
        let (x, y, width, height) = (content.x(), content.y(), content.width(), content.height());
        let spacing = self.style.spacing as f32;

        let mut icon_advance = 0.0;
        if let Some(icon) = &mut self.icon {
            let (icon_w, icon_h) = Self::fit_to_height(&**icon, height);
            let y1 = (y + (height - icon_h) / 2.0).trunc();
            icon.allocate(Rect::from_edges(x, y1, x + icon_w, y1 + icon_h));
            icon_advance = icon_w + spacing;
        }

        let mut marker_advance = 0.0;
        if let Some(marker) = &mut self.marker {
            let (marker_w, marker_h) = Self::fit_to_height(&**marker, height);
            let x2 = x + width;
            let y1 = (y + (height - marker_h) / 2.0).trunc();
            marker.allocate(Rect::from_edges(x2 - marker_w, y1, x2, y1 + marker_h));
            marker_advance = marker_w + spacing;
        }

        // Truncate the top edge before adding the height so the box keeps
        // the natural height.
        let label_h = self.label.preferred_height(UNCONSTRAINED).natural;
        let y1 = (y + (height / 2.0 - label_h / 2.0)).trunc();
        self.label.allocate(Rect::from_edges(
            x + icon_advance,
            y1,
            x + width - marker_advance,
            y1 + label_h,
        ));

        if let Some(menu) = &mut self.menu {
            let menu_h = menu.preferred_height(rect.width()).natural;
            let id = self.base.object_id();
            let host = self.base.host();

            // Below by default; above when it would run off the surface and
            // there is room there.
            let mut y1 = rect.height();
            if let Some(surface_h) = host.surface_height(id) {
                let widget_y = host.transformed_position(id).y;
                if widget_y + menu_h + rect.height() > surface_h && surface_h - rect.height() > 0.0 {
                    y1 = -menu_h;
                }
            }
            menu.allocate(Rect::from_edges(0.0, y1, rect.width(), y1 + menu_h));
        }

        tracing::trace!(target: targets::LAYOUT, widget = "ComboBox", ?rect, "allocated");
    }

    fn allocation(&self) -> Rect {
        self.base.allocation()
    }

    fn opacity(&self) -> u8 {
        self.base.opacity()
    }

    fn set_opacity(&mut self, opacity: u8) {
        self.base.set_opacity(opacity);
    }

    fn is_mapped(&self) -> bool {
        self.base.is_mapped()
    }

    fn map(&mut self) {
        self.base.set_mapped(true);
        self.label.map();
        if let Some(icon) = &mut self.icon {
            icon.map();
        }
        if let Some(marker) = &mut self.marker {
            marker.map();
        }
    }

    fn unmap(&mut self) {
        self.base.set_mapped(false);
        self.label.unmap();
        if let Some(icon) = &mut self.icon {
            icon.unmap();
        }
        if let Some(marker) = &mut self.marker {
            marker.unmap();
        }
    }

    fn paint(&self) {
        self.label.paint();
        if let Some(icon) = &self.icon {
            icon.paint();
        }
        if let Some(marker) = &self.marker {
            marker.paint();
        }
    }
}

impl Widget for ComboBox {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn event(&mut self, event: &mut WidgetEvent) -> bool {
        match event {
            WidgetEvent::ButtonPress(press) => {
                let Some(menu) = self.menu.as_mut() else {
                    return false;
                };
                menu.show();
                press.base.accept();
                true
            }
            WidgetEvent::KeyPress(key) => {
                let delta = match key.key {
                    Key::ArrowDown => 1,
                    Key::ArrowUp => -1,
                    _ => return false,
                };
                self.step_index(delta);
                key.base.accept();
                true
            }
            WidgetEvent::MenuActivated(activated) => {
                self.set_index(i32::try_from(activated.entry_id).unwrap_or(-1));
                activated.base.accept();
                true
            }
        }
    }

    fn as_stylable(&mut self) -> Option<&mut dyn Stylable> {
        Some(self)
    }

    fn as_focusable(&mut self) -> Option<&mut dyn Focusable> {
        Some(self)
    }
}

impl Stylable for ComboBox {
    fn style_changed(&mut self) {
        self.refresh_style();

        if let Some(menu) = &mut self.menu {
            menu.style_changed();
        }

        tracing::debug!(target: targets::COMBO_BOX, style = ?self.style, "style changed");
        self.base.queue_relayout();
    }
}

impl Focusable for ComboBox {
    fn accept_focus(&mut self, _hint: FocusHint) -> Option<ObjectId> {
        let id = self.base.object_id();
        self.set_style_pseudo_class(Some(FOCUS_PSEUDO_CLASS));
        self.base.host().grab_key_focus(id);
        Some(id)
    }

    fn move_focus(&mut self, _direction: FocusDirection, from: ObjectId) -> Option<ObjectId> {
        if from == self.base.object_id() {
            self.set_style_pseudo_class(None);
        }
        None
    }
}

static_assertions::assert_impl_all!(ComboBox: Send, Sync);
