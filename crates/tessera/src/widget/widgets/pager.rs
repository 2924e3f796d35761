//! Pager container implementation.
//!
//! This module provides [`Pager`], a container that shows one page at a
//! time. Pages are stacked on top of each other; only the current page is
//! opaque. Two narrow hit zones along the left and right content edges step
//! to the previous and next page when pressed.
//!
//! # Example
//!
//! ```ignore
//! use tessera::widget::widgets::{Pager, PagerConfig};
//!
//! let mut pager = Pager::with_config(&services, PagerConfig::default().with_edge_width(32.0));
//!
//! pager.add_page(first);
//! pager.add_page(second);
//! assert_eq!(pager.current_page_index(), Some(0));
//!
//! pager.next();
//! assert_eq!(pager.current_page_index(), Some(1));
//! ```

use std::time::Duration;

use slotmap::SlotMap;
use tessera_core::logging::targets;
use tessera_core::{ObjectId, PerfSpan};

use crate::error::{Error, Result};
use crate::widget::{
    Actor, Container, OPAQUE, Padding, Rect, Services, SizeRequest, TRANSPARENT, Widget,
    WidgetBase, WidgetEvent, shrink_constraint,
};

/// Observable properties.
const PROPERTIES: &[&str] = &["current-page", "page-count"];

slotmap::new_key_type! {
    /// Arena key of a page.
    struct PageKey;
}

/// Configuration for a [`Pager`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PagerConfig {
    /// Width of the previous/next hit zones.
    pub edge_width: f32,
    /// Duration of an animated page change.
    pub transition: Duration,
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self {
            edge_width: 20.0,
            transition: Duration::from_millis(250),
        }
    }
}

impl PagerConfig {
    /// Set the hit zone width using builder pattern.
    pub fn with_edge_width(mut self, edge_width: f32) -> Self {
        self.edge_width = edge_width;
        self
    }

    /// Set the transition duration using builder pattern.
    pub fn with_transition(mut self, transition: Duration) -> Self {
        self.transition = transition;
        self
    }
}

/// A container displaying one of its pages at a time.
///
/// # Properties
///
/// - `current-page`: index of the visible page
/// - `page-count`: number of pages
pub struct Pager {
    base: WidgetBase,
    config: PagerConfig,
    pages: SlotMap<PageKey, Box<dyn Actor>>,
    order: Vec<PageKey>,
    current: Option<usize>,
    previous_edge: Box<dyn Actor>,
    next_edge: Box<dyn Actor>,
}

impl Pager {
    /// Create an empty pager with the default configuration.
    pub fn new(services: &Services) -> Self {
        Self::with_config(services, PagerConfig::default())
    }

    /// Create an empty pager.
    pub fn with_config(services: &Services, config: PagerConfig) -> Self {
        let base = WidgetBase::new::<Self>(services, PROPERTIES);
        let factory = services.factory();
        let previous_edge = factory.create_hit_zone(services.registry(), config.edge_width);
        let next_edge = factory.create_hit_zone(services.registry(), config.edge_width);
        base.adopt(previous_edge.object_id());
        base.adopt(next_edge.object_id());
        base.name_child(previous_edge.object_id(), "previous-edge");
        base.name_child(next_edge.object_id(), "next-edge");

        Self {
            base,
            config,
            pages: SlotMap::with_key(),
            order: Vec::new(),
            current: None,
            previous_edge,
            next_edge,
        }
    }

    /// Set the padding using builder pattern.
    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.base.set_padding(padding);
        self
    }

    /// The configuration.
    pub fn config(&self) -> &PagerConfig {
        &self.config
    }

    /// Id of the hit zone that moves to the previous page.
    pub fn previous_edge_id(&self) -> ObjectId {
        self.previous_edge.object_id()
    }

    /// Id of the hit zone that moves to the next page.
    pub fn next_edge_id(&self) -> ObjectId {
        self.next_edge.object_id()
    }

    // =========================================================================
    // Pages
    // =========================================================================

    /// Append a page and return its index.
    ///
    /// The page starts transparent and is stacked below every existing page.
    /// The first page added becomes the current page.
    pub fn add_page(&mut self, mut page: Box<dyn Actor>) -> usize {
        let id = page.object_id();
        page.set_opacity(TRANSPARENT);
        self.base.adopt(id);
        self.base.lower_child(id);
        if self.base.is_mapped() {
            page.map();
        }

        let key = self.pages.insert(page);
        self.order.push(key);
        let index = self.order.len() - 1;
        tracing::trace!(target: targets::PAGER, ?id, index, "page added");

        if self.current.is_none() {
            self.change_page(Some(index), false);
        }
        self.base.notify("page-count");
        self.base.queue_relayout();
        index
    }

    /// Remove a page and hand it back to the caller.
    ///
    /// If it was the current page, the following page becomes current, or
    /// the first page when there is none following.
    pub fn remove_page(&mut self, id: ObjectId) -> Result<Box<dyn Actor>> {
        let Some(position) = self.index_of(id) else {
            let type_name = self.base.registry().type_name(id).unwrap_or("<destroyed>");
            tracing::warn!(target: targets::PAGER, ?id, type_name, "actor is not a page of this pager");
            return Err(Error::not_found(id));
        };

        if self.current == Some(position) {
            let len = self.order.len();
            let target = if position + 1 < len {
                Some(position + 1)
            } else if len > 1 {
                Some(0)
            } else {
                None
            };
            self.change_page(target, false);
        }

        let key = self.order.remove(position);
        if let Some(current) = self.current
            && current > position
        {
            self.current = Some(current - 1);
            self.base.notify("current-page");
        }

        let mut page = self.pages.remove(key).ok_or_else(|| Error::not_found(id))?;
        if page.is_mapped() {
            page.unmap();
        }
        self.base.disown(id);
        tracing::trace!(target: targets::PAGER, ?id, position, "page removed");

        self.base.notify("page-count");
        self.base.queue_relayout();
        Ok(page)
    }

    /// Visit every page in order.
    pub fn foreach_page(&self, mut visit: impl FnMut(&dyn Actor)) {
        for page in self.pages_in_order() {
            visit(page);
        }
    }

    /// Number of pages.
    pub fn page_count(&self) -> usize {
        self.order.len()
    }

    /// Index of the page with the given id.
    pub fn index_of(&self, id: ObjectId) -> Option<usize> {
        self.order.iter().position(|&key| {
            self.pages
                .get(key)
                .is_some_and(|page| page.object_id() == id)
        })
    }

    fn pages_in_order(&self) -> impl Iterator<Item = &dyn Actor> + '_ {
        self.order
            .iter()
            .filter_map(|&key| self.pages.get(key))
            .map(|page| &**page)
    }

    fn page_mut(&mut self, index: usize) -> Option<&mut Box<dyn Actor>> {
        let key = *self.order.get(index)?;
        self.pages.get_mut(key)
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Index of the current page, `None` when there are no pages.
    pub fn current_page_index(&self) -> Option<usize> {
        self.current
    }

    /// The current page.
    pub fn current_page_actor(&self) -> Option<&dyn Actor> {
        self.current.and_then(|index| self.actor_for_page(index))
    }

    /// The page at `index`.
    pub fn actor_for_page(&self, index: usize) -> Option<&dyn Actor> {
        let key = self.order.get(index)?;
        self.pages.get(*key).map(|page| &**page)
    }

    /// Show the page after the current one.
    pub fn next(&mut self) {
        let Some(current) = self.current else {
            tracing::debug!(target: targets::PAGER, "next: no current page");
            return;
        };
        if current + 1 >= self.order.len() {
            return;
        }
        tracing::debug!(target: targets::PAGER, "next page");
        self.change_page(Some(current + 1), true);
    }

    /// Show the page before the current one.
    pub fn previous(&mut self) {
        let Some(current) = self.current else {
            tracing::debug!(target: targets::PAGER, "previous: no current page");
            return;
        };
        if current == 0 {
            return;
        }
        tracing::debug!(target: targets::PAGER, "previous page");
        self.change_page(Some(current - 1), true);
    }

    /// Show the page at `index`.
    pub fn set_current_page(&mut self, index: usize, animate: bool) -> Result<()> {
        if index >= self.order.len() {
            return Err(Error::out_of_range(
                i64::try_from(index).unwrap_or(i64::MAX),
                self.order.len(),
            ));
        }
        self.change_page(Some(index), animate);
        Ok(())
    }

    /// Show the page with the given id.
    pub fn set_current_page_by_actor(&mut self, id: ObjectId, animate: bool) -> Result<()> {
        let index = self.index_of(id).ok_or_else(|| Error::not_found(id))?;
        self.change_page(Some(index), animate);
        Ok(())
    }

    fn change_page(&mut self, target: Option<usize>, animate: bool) {
        if target == self.current {
            return;
        }

        let duration = self.config.transition;
        if let Some(old) = self.current
            && let Some(page) = self.page_mut(old)
        {
            Self::fade(&mut **page, TRANSPARENT, animate, duration);
        }
        if let Some(new) = target
            && let Some(page) = self.page_mut(new)
        {
            Self::fade(&mut **page, OPAQUE, animate, duration);
        }

        tracing::debug!(target: targets::PAGER, from = ?self.current, to = ?target, animate, "change page");
        self.current = target;
        self.base.notify("current-page");
    }

    fn fade(page: &mut dyn Actor, opacity: u8, animate: bool, duration: Duration) {
        if animate {
            page.animate_opacity(opacity, duration);
        } else {
            page.set_opacity(opacity);
        }
    }

    fn all_children(&self) -> impl Iterator<Item = &dyn Actor> + '_ {
        self.pages_in_order()
            .chain([&*self.previous_edge, &*self.next_edge])
    }

    fn child_by_id(&self, id: ObjectId) -> Option<&dyn Actor> {
        self.all_children().find(|child| child.object_id() == id)
    }
}

impl Actor for Pager {
    fn object_id(&self) -> ObjectId {
        self.base.object_id()
    }

    fn preferred_width(&self, for_height: f32) -> SizeRequest {
        let padding = self.base.padding();
        let for_height = shrink_constraint(for_height, padding.vertical());
        self.all_children()
            .fold(SizeRequest::ZERO, |request, child| {
                request.max(child.preferred_width(for_height))
            })
            .grow(padding.horizontal())
    }

    fn preferred_height(&self, for_width: f32) -> SizeRequest {
        let padding = self.base.padding();
        let for_width = shrink_constraint(for_width, padding.horizontal());
        self.all_children()
            .fold(SizeRequest::ZERO, |request, child| {
                request.max(child.preferred_height(for_width))
            })
            .grow(padding.vertical())
    }

    fn allocate(&mut self, rect: Rect) {
        let _span = PerfSpan::new("Pager::allocate");
        self.base.set_allocation(rect);

        let content = rect.content_area(&self.base.padding());
        let page_box = Rect::from_edges(content.x(), content.y(), content.right(), content.bottom());
        for key in &self.order {
            if let Some(page) = self.pages.get_mut(*key) {
                page.allocate(page_box);
            }
        }

        let edge = self.config.edge_width.min(content.width());
        self.previous_edge.allocate(Rect::from_edges(
            content.x(),
            content.y(),
            content.x() + edge,
            content.bottom(),
        ));
        self.next_edge.allocate(Rect::from_edges(
            content.right() - edge,
            content.y(),
            content.right(),
            content.bottom(),
        ));

        tracing::trace!(target: targets::LAYOUT, widget = "Pager", ?rect, pages = self.order.len(), "allocated");
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
        for page in self.pages.values_mut() {
            page.map();
        }
        self.previous_edge.map();
        self.next_edge.map();
    }

    fn unmap(&mut self) {
        self.base.set_mapped(false);
        for page in self.pages.values_mut() {
            page.unmap();
        }
        self.previous_edge.unmap();
        self.next_edge.unmap();
    }

    /// Paints children bottom-most first.
    fn paint(&self) {
        let children = self
            .base
            .registry()
            .children(self.base.object_id())
            .unwrap_or_default();
        for id in children {
            if let Some(child) = self.child_by_id(id) {
                child.paint();
            }
        }
    }
}

impl Widget for Pager {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn event(&mut self, event: &mut WidgetEvent) -> bool {
        let WidgetEvent::ButtonPress(press) = event else {
            return false;
        };

        if press.target == self.previous_edge.object_id() {
            self.previous();
        } else if press.target == self.next_edge.object_id() {
            self.next();
        } else {
            return false;
        }
        press.base.accept();
        true
    }

    fn as_container(&mut self) -> Option<&mut dyn Container> {
        Some(self)
    }
}

impl Container for Pager {
    fn add(&mut self, child: Box<dyn Actor>) {
        self.add_page(child);
    }

    fn remove(&mut self, child: ObjectId) -> Result<Box<dyn Actor>> {
        self.remove_page(child)
    }

    fn foreach(&self, visit: &mut dyn FnMut(&dyn Actor)) {
        self.foreach_page(visit);
    }
}

static_assertions::assert_impl_all!(Pager: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::testing::{MockActor, Probe, TestServices};
    use crate::widget::{ButtonPressEvent, MouseButton, Point};
    use parking_lot::Mutex;
    use std::sync::Arc;

    fn setup() -> TestServices {
        TestServices::new()
    }

    fn page(test: &TestServices, width: f32, height: f32) -> (Box<dyn Actor>, ObjectId, Probe) {
        let (actor, probe) = MockActor::new(&test.registry, width, height);
        let id = actor.object_id();
        (Box::new(actor), id, probe)
    }

    fn pager_with(test: &TestServices, count: usize) -> (Pager, Vec<ObjectId>, Vec<Probe>) {
        let mut pager = Pager::new(&test.services);
        let mut ids = Vec::new();
        let mut probes = Vec::new();
        for _ in 0..count {
            let (actor, id, probe) = page(test, 100.0, 80.0);
            pager.add_page(actor);
            ids.push(id);
            probes.push(probe);
        }
        (pager, ids, probes)
    }

    fn press(pager: &mut Pager, target: ObjectId) -> bool {
        pager.event(&mut ButtonPressEvent::new(MouseButton::Left, target, Point::ZERO).into())
    }

    #[test]
    fn test_pager_creation() {
        let test = setup();
        let pager = Pager::new(&test.services);

        assert_eq!(pager.page_count(), 0);
        assert_eq!(pager.current_page_index(), None);
        assert!(pager.current_page_actor().is_none());
        assert_eq!(pager.config(), &PagerConfig::default());
        assert_eq!(test.factory.zones.lock().len(), 2);
    }

    #[test]
    fn test_pager_first_page_becomes_current() {
        let test = setup();
        let (pager, ids, probes) = pager_with(&test, 3);

        assert_eq!(pager.current_page_index(), Some(0));
        assert_eq!(pager.current_page_actor().map(|p| p.object_id()), Some(ids[0]));
        assert_eq!(probes[0].lock().opacity, OPAQUE);
        assert_eq!(probes[0].lock().animated, 0);
        assert_eq!(probes[1].lock().opacity, TRANSPARENT);
        assert_eq!(probes[2].lock().opacity, TRANSPARENT);
    }

    #[test]
    fn test_pager_pages_stack_below_edges() {
        let test = setup();
        let (pager, ids, _probes) = pager_with(&test, 2);

        let children = test.registry.children(pager.object_id()).unwrap();
        assert_eq!(
            children,
            vec![ids[1], ids[0], pager.previous_edge_id(), pager.next_edge_id()]
        );
    }

    #[test]
    fn test_pager_next_until_last() {
        let test = setup();
        let (mut pager, _ids, probes) = pager_with(&test, 4);

        for expected in 1..4 {
            pager.next();
            assert_eq!(pager.current_page_index(), Some(expected));
        }
        pager.next();
        assert_eq!(pager.current_page_index(), Some(3));

        assert_eq!(probes[3].lock().opacity, OPAQUE);
        assert_eq!(probes[3].lock().animated, 1);
        assert_eq!(probes[0].lock().opacity, TRANSPARENT);
    }

    #[test]
    fn test_pager_previous_stops_at_first() {
        let test = setup();
        let (mut pager, _ids, _probes) = pager_with(&test, 2);

        pager.previous();
        assert_eq!(pager.current_page_index(), Some(0));

        pager.next();
        pager.previous();
        assert_eq!(pager.current_page_index(), Some(0));
    }

    #[test]
    fn test_pager_navigation_without_pages() {
        let test = setup();
        let mut pager = Pager::new(&test.services);

        pager.next();
        pager.previous();
        assert_eq!(pager.current_page_index(), None);
    }

    #[test]
    fn test_pager_set_current_page() {
        let test = setup();
        let (mut pager, ids, probes) = pager_with(&test, 3);

        pager.set_current_page(2, false).unwrap();
        assert_eq!(pager.current_page_index(), Some(2));
        assert_eq!(probes[2].lock().animated, 0);

        assert!(matches!(
            pager.set_current_page(3, true),
            Err(Error::OutOfRange { index: 3, len: 3 })
        ));
        assert_eq!(pager.current_page_index(), Some(2));

        pager.set_current_page_by_actor(ids[1], true).unwrap();
        assert_eq!(pager.current_page_index(), Some(1));
        assert_eq!(probes[1].lock().animated, 1);

        let stranger = test.registry.register::<MockActor>();
        assert!(matches!(
            pager.set_current_page_by_actor(stranger, false),
            Err(Error::NotFound { .. })
        ));
    }

    #[test]
    fn test_pager_remove_current_moves_to_following() {
        let test = setup();
        let (mut pager, ids, probes) = pager_with(&test, 3);
        pager.set_current_page(1, false).unwrap();

        let removed = pager.remove_page(ids[1]).unwrap();
        assert_eq!(removed.object_id(), ids[1]);
        assert_eq!(pager.current_page_index(), Some(1));
        assert_eq!(pager.current_page_actor().map(|p| p.object_id()), Some(ids[2]));
        assert_eq!(probes[2].lock().opacity, OPAQUE);
    }

    #[test]
    fn test_pager_remove_last_current_wraps_to_first() {
        let test = setup();
        let (mut pager, ids, _probes) = pager_with(&test, 3);
        pager.set_current_page(2, false).unwrap();

        pager.remove_page(ids[2]).unwrap();
        assert_eq!(pager.current_page_index(), Some(0));
        assert_eq!(pager.current_page_actor().map(|p| p.object_id()), Some(ids[0]));
    }

    #[test]
    fn test_pager_remove_only_page() {
        let test = setup();
        let (mut pager, ids, _probes) = pager_with(&test, 1);

        pager.remove_page(ids[0]).unwrap();
        assert_eq!(pager.page_count(), 0);
        assert_eq!(pager.current_page_index(), None);
        assert!(pager.current_page_actor().is_none());
    }

    #[test]
    fn test_pager_remove_before_current_keeps_page() {
        let test = setup();
        let (mut pager, ids, _probes) = pager_with(&test, 3);
        pager.set_current_page(2, false).unwrap();

        pager.remove_page(ids[0]).unwrap();
        assert_eq!(pager.current_page_index(), Some(1));
        assert_eq!(pager.current_page_actor().map(|p| p.object_id()), Some(ids[2]));
    }

    #[test]
    fn test_pager_remove_unknown_actor() {
        let test = setup();
        let (mut pager, _ids, _probes) = pager_with(&test, 2);
        let (_stranger, stranger_id, _probe) = page(&test, 10.0, 10.0);

        assert!(matches!(
            pager.remove_page(stranger_id),
            Err(Error::NotFound { id }) if id == stranger_id
        ));
        assert_eq!(pager.page_count(), 2);
        assert_eq!(pager.current_page_index(), Some(0));
    }

    #[test]
    fn test_pager_removed_page_is_unparented() {
        let test = setup();
        let (mut pager, ids, _probes) = pager_with(&test, 2);

        let removed = pager.remove_page(ids[0]).unwrap();
        assert_eq!(test.registry.parent(ids[0]).unwrap(), None);

        drop(pager);
        assert!(test.registry.contains(ids[0]));
        assert!(!test.registry.contains(ids[1]));

        drop(removed);
        assert_eq!(test.registry.object_count(), 0);
    }

    #[test]
    fn test_pager_container_skips_edges() {
        let test = setup();
        let (mut pager, ids, _probes) = pager_with(&test, 2);

        let container = pager.as_container().unwrap();
        let mut seen = Vec::new();
        container.foreach(&mut |child| seen.push(child.object_id()));
        assert_eq!(seen, ids);

        let (extra, extra_id, _probe) = page(&test, 10.0, 10.0);
        container.add(extra);
        assert!(container.remove(extra_id).is_ok());

        let previous_edge = pager.previous_edge_id();
        assert!(pager.remove_page(previous_edge).is_err());
        assert!(test.registry.contains(previous_edge));
    }

    #[test]
    fn test_pager_edge_presses_navigate() {
        let test = setup();
        let (mut pager, ids, _probes) = pager_with(&test, 3);

        let (previous_edge, next_edge) = (pager.previous_edge_id(), pager.next_edge_id());

        assert!(press(&mut pager, next_edge));
        assert_eq!(pager.current_page_index(), Some(1));

        assert!(press(&mut pager, previous_edge));
        assert_eq!(pager.current_page_index(), Some(0));

        assert!(!press(&mut pager, ids[0]));
    }

    #[test]
    fn test_pager_notifications() {
        let test = setup();
        let mut pager = Pager::new(&test.services);
        let seen = Arc::new(Mutex::new(Vec::new()));
        let seen_clone = seen.clone();
        pager
            .widget_base()
            .notifier()
            .connect(move |name| seen_clone.lock().push(*name));

        let (first, _id, _probe) = page(&test, 10.0, 10.0);
        pager.add_page(first);
        assert_eq!(*seen.lock(), ["current-page", "page-count"]);

        seen.lock().clear();
        let (second, _id, _probe) = page(&test, 10.0, 10.0);
        pager.add_page(second);
        assert_eq!(*seen.lock(), ["page-count"]);
    }

    #[test]
    fn test_pager_preferred_size() {
        let test = setup();
        let mut pager = Pager::new(&test.services).with_padding(Padding::uniform(5.0));
        assert_eq!(pager.preferred_width(-1.0), SizeRequest::fixed(30.0));

        let (small, _id, _probe) = page(&test, 50.0, 40.0);
        let (large, _id, _probe) = page(&test, 120.0, 30.0);
        pager.add_page(small);
        pager.add_page(large);

        assert_eq!(pager.preferred_width(-1.0), SizeRequest::fixed(130.0));
        assert_eq!(pager.preferred_height(-1.0), SizeRequest::fixed(50.0));
    }

    #[test]
    fn test_pager_allocate() {
        let test = setup();
        let mut pager = Pager::new(&test.services).with_padding(Padding::uniform(4.0));
        let (first, _id, probe) = page(&test, 50.0, 40.0);
        pager.add_page(first);

        pager.allocate(Rect::new(0.0, 0.0, 200.0, 100.0));

        assert_eq!(probe.lock().allocation, Some(Rect::new(4.0, 4.0, 192.0, 92.0)));
        let zones = test.factory.zones.lock();
        assert_eq!(zones[0].1.lock().allocation, Some(Rect::new(4.0, 4.0, 20.0, 92.0)));
        assert_eq!(zones[1].1.lock().allocation, Some(Rect::new(176.0, 4.0, 20.0, 92.0)));
    }

    #[test]
    fn test_pager_map_and_paint() {
        let test = setup();
        let (mut pager, _ids, probes) = pager_with(&test, 2);

        pager.map();
        assert!(probes.iter().all(|probe| probe.lock().mapped));

        let (late, _id, late_probe) = page(&test, 10.0, 10.0);
        pager.add_page(late);
        assert!(late_probe.lock().mapped);

        pager.paint();
        assert!(probes.iter().all(|probe| probe.lock().painted == 1));
        assert_eq!(test.factory.zones.lock()[1].1.lock().painted, 1);

        pager.unmap();
        assert!(!late_probe.lock().mapped);
    }

    #[test]
    fn test_pager_config_builder() {
        let config = PagerConfig::default()
            .with_edge_width(32.0)
            .with_transition(Duration::from_millis(100));
        assert_eq!(config.edge_width, 32.0);
        assert_eq!(config.transition, Duration::from_millis(100));

        let test = setup();
        let _pager = Pager::with_config(&test.services, config);
        assert_eq!(test.factory.zones.lock()[0].1.lock().allocation, None);
    }
}
