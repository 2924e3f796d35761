//! Mock collaborators shared by the widget unit tests.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tessera_core::{ObjectBase, ObjectId, SharedObjectRegistry};

use super::actor::{Actor, Menu, MenuEntry, TextActor};
use super::geometry::{Point, Rect, SizeRequest};
use super::host::{Host, RelayoutQueue};
use super::services::{ActorFactory, IconTheme, Services, TextureCache};
use super::style::StyleRules;

/// State of a mock actor that stays observable after the actor moved into a
/// widget.
#[derive(Debug, Default)]
pub(crate) struct ProbeState {
    pub allocation: Option<Rect>,
    pub opacity: u8,
    pub animated: usize,
    pub mapped: bool,
    pub painted: usize,
    pub text: String,
    pub entries: Vec<MenuEntry>,
    pub clears: usize,
    pub shown: usize,
    pub restyled: usize,
}

pub(crate) type Probe = Arc<Mutex<ProbeState>>;

/// One mock type standing in for plain actors, text actors and menus.
pub(crate) struct MockActor {
    object: ObjectBase,
    width: SizeRequest,
    height: SizeRequest,
    text: String,
    probe: Probe,
}

impl MockActor {
    pub(crate) fn new(registry: &SharedObjectRegistry, width: f32, height: f32) -> (Self, Probe) {
        let probe = Probe::default();
        probe.lock().opacity = super::actor::OPAQUE;
        let actor = Self {
            object: ObjectBase::new::<Self>(registry),
            width: SizeRequest::fixed(width),
            height: SizeRequest::fixed(height),
            text: String::new(),
            probe: probe.clone(),
        };
        (actor, probe)
    }

    pub(crate) fn with_minimum(mut self, width: f32, height: f32) -> Self {
        self.width.minimum = width;
        self.height.minimum = height;
        self
    }
}

impl Actor for MockActor {
    fn object_id(&self) -> ObjectId {
        self.object.id()
    }

    fn preferred_width(&self, for_height: f32) -> SizeRequest {
        // Square-ish actors shrink with a tighter height.
        if for_height >= 0.0 && for_height < self.height.natural && self.height.natural > 0.0 {
            let scale = for_height / self.height.natural;
            SizeRequest::new(self.width.minimum * scale, self.width.natural * scale)
        } else {
            self.width
        }
    }

    fn preferred_height(&self, _for_width: f32) -> SizeRequest {
        self.height
    }

    fn allocate(&mut self, rect: Rect) {
        self.probe.lock().allocation = Some(rect);
    }

    fn allocation(&self) -> Rect {
        self.probe.lock().allocation.unwrap_or_default()
    }

    fn opacity(&self) -> u8 {
        self.probe.lock().opacity
    }

    fn set_opacity(&mut self, opacity: u8) {
        self.probe.lock().opacity = opacity;
    }

    fn animate_opacity(&mut self, opacity: u8, _duration: Duration) {
        let mut state = self.probe.lock();
        state.opacity = opacity;
        state.animated += 1;
    }

    fn is_mapped(&self) -> bool {
        self.probe.lock().mapped
    }

    fn map(&mut self) {
        self.probe.lock().mapped = true;
    }

    fn unmap(&mut self) {
        self.probe.lock().mapped = false;
    }

    fn paint(&self) {
        self.probe.lock().painted += 1;
    }
}

impl TextActor for MockActor {
    fn text(&self) -> &str {
        &self.text
    }

    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.probe.lock().text = text.to_string();
    }
}

impl Menu for MockActor {
    fn clear(&mut self) {
        let mut state = self.probe.lock();
        state.entries.clear();
        state.clears += 1;
    }

    fn add_entry(&mut self, entry: MenuEntry) {
        self.probe.lock().entries.push(entry);
    }

    fn show(&mut self) {
        self.probe.lock().shown += 1;
    }

    fn style_changed(&mut self) {
        self.probe.lock().restyled += 1;
    }
}

#[derive(Default)]
pub(crate) struct MockHost {
    pub relayouts: RelayoutQueue,
    pub surface_height: Mutex<Option<f32>>,
    pub position: Mutex<Point>,
    pub key_focus: Mutex<Option<ObjectId>>,
}

impl Host for MockHost {
    fn queue_relayout(&self, widget: ObjectId) {
        self.relayouts.request(widget);
    }

    fn surface_height(&self, _widget: ObjectId) -> Option<f32> {
        *self.surface_height.lock()
    }

    fn transformed_position(&self, _widget: ObjectId) -> Point {
        *self.position.lock()
    }

    fn grab_key_focus(&self, widget: ObjectId) {
        *self.key_focus.lock() = Some(widget);
    }
}

/// Sizes of the actors the mock factory hands out.
pub(crate) struct MockFactory {
    pub label_size: (f32, f32),
    pub menu_size: (f32, f32),
    pub labels: Mutex<Vec<Probe>>,
    pub menus: Mutex<Vec<Probe>>,
    pub zones: Mutex<Vec<(ObjectId, Probe)>>,
}

impl Default for MockFactory {
    fn default() -> Self {
        Self {
            label_size: (60.0, 14.0),
            menu_size: (90.0, 120.0),
            labels: Mutex::new(Vec::new()),
            menus: Mutex::new(Vec::new()),
            zones: Mutex::new(Vec::new()),
        }
    }
}

impl ActorFactory for MockFactory {
    fn create_text(&self, registry: &SharedObjectRegistry) -> Box<dyn TextActor> {
        let (actor, probe) = MockActor::new(registry, self.label_size.0, self.label_size.1);
        self.labels.lock().push(probe);
        Box::new(actor)
    }

    fn create_menu(&self, registry: &SharedObjectRegistry) -> Box<dyn Menu> {
        let (actor, probe) = MockActor::new(registry, self.menu_size.0, self.menu_size.1);
        self.menus.lock().push(probe);
        Box::new(actor)
    }

    fn create_hit_zone(&self, registry: &SharedObjectRegistry, width: f32) -> Box<dyn Actor> {
        let (actor, probe) = MockActor::new(registry, width, 0.0);
        self.zones.lock().push((actor.object_id(), probe));
        Box::new(actor)
    }
}

/// Icon theme knowing a fixed set of icon names.
#[derive(Default)]
pub(crate) struct MockIcons {
    pub known: HashSet<String>,
    pub lookups: Mutex<Vec<(String, u32)>>,
    pub probes: Mutex<Vec<Probe>>,
}

impl IconTheme for MockIcons {
    fn lookup_icon(
        &self,
        registry: &SharedObjectRegistry,
        name: &str,
        size: u32,
    ) -> Option<Box<dyn Actor>> {
        self.lookups.lock().push((name.to_string(), size));
        if !self.known.contains(name) {
            return None;
        }
        let (actor, probe) = MockActor::new(registry, size as f32, size as f32);
        self.probes.lock().push(probe);
        Some(Box::new(actor))
    }
}

/// Texture cache that loads every non-empty uri as a 10x12 image.
#[derive(Default)]
pub(crate) struct MockTextures {
    pub loaded: Mutex<Vec<(String, Probe)>>,
}

impl TextureCache for MockTextures {
    fn texture(&self, registry: &SharedObjectRegistry, uri: &str) -> Option<Box<dyn Actor>> {
        if uri.is_empty() {
            return None;
        }
        let (actor, probe) = MockActor::new(registry, 10.0, 12.0);
        self.loaded.lock().push((uri.to_string(), probe));
        Some(Box::new(actor))
    }
}

/// Everything a widget test needs, with handles on each collaborator.
pub(crate) struct TestServices {
    pub services: Services,
    pub registry: SharedObjectRegistry,
    pub host: Arc<MockHost>,
    pub style: Arc<StyleRules>,
    pub icons: Arc<MockIcons>,
    pub textures: Arc<MockTextures>,
    pub factory: Arc<MockFactory>,
}

impl TestServices {
    pub(crate) fn new() -> Self {
        Self::with_icons(&[])
    }

    pub(crate) fn with_icons(names: &[&str]) -> Self {
        Self::build(names, MockFactory::default())
    }

    pub(crate) fn with_factory(factory: MockFactory) -> Self {
        Self::build(&[], factory)
    }

    fn build(names: &[&str], factory: MockFactory) -> Self {
        let registry = SharedObjectRegistry::new();
        let host = Arc::new(MockHost::default());
        let style = Arc::new(StyleRules::new());
        let icons = Arc::new(MockIcons {
            known: names.iter().map(|name| name.to_string()).collect(),
            ..Default::default()
        });
        let textures = Arc::new(MockTextures::default());
        let factory = Arc::new(factory);

        let services = Services::new(
            registry.clone(),
            host.clone(),
            style.clone(),
            icons.clone(),
            textures.clone(),
            factory.clone(),
        );

        Self {
            services,
            registry,
            host,
            style,
            icons,
            textures,
            factory,
        }
    }

    pub(crate) fn label_probe(&self) -> Probe {
        self.factory.labels.lock().last().cloned().unwrap_or_default()
    }

    pub(crate) fn menu_probe(&self) -> Probe {
        self.factory.menus.lock().last().cloned().unwrap_or_default()
    }
}
