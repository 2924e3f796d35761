//! Shared host doubles for integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Once};

use parking_lot::Mutex;
use tessera::prelude::*;
use tessera::widget::{MenuEntry, RelayoutQueue};

/// Width of one character in the fake text layout.
pub const CHAR_WIDTH: f32 = 7.0;
/// Line height in the fake text layout.
pub const LINE_HEIGHT: f32 = 14.0;

static TRACING: Once = Once::new();

pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "tessera=debug,tessera_core=info".into()),
            )
            .with_test_writer()
            .try_init();
    });
}

// ============================================================================
// Host
// ============================================================================

#[derive(Default)]
pub struct TestHost {
    pub relayouts: RelayoutQueue,
    pub surface_height: Mutex<Option<f32>>,
    pub position: Mutex<Point>,
    pub focused: Mutex<Option<ObjectId>>,
}

impl Host for TestHost {
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
        *self.focused.lock() = Some(widget);
    }
}

// ============================================================================
// Actors
// ============================================================================

/// A fixed-size rectangle that remembers what happened to it.
pub struct Block {
    base: tessera::tessera_core::ObjectBase,
    size: Size,
    state: Arc<Mutex<BlockState>>,
}

#[derive(Debug, Default, Clone)]
pub struct BlockState {
    pub allocation: Option<Rect>,
    pub opacity: u8,
    pub mapped: bool,
}

impl Block {
    pub fn new(registry: &SharedObjectRegistry, width: f32, height: f32) -> (Self, Arc<Mutex<BlockState>>) {
        let state = Arc::new(Mutex::new(BlockState {
            opacity: tessera::widget::OPAQUE,
            ..Default::default()
        }));
        let block = Self {
            base: tessera::tessera_core::ObjectBase::new::<Self>(registry),
            size: Size::new(width, height),
            state: state.clone(),
        };
        (block, state)
    }
}

impl Actor for Block {
    fn object_id(&self) -> ObjectId {
        self.base.id()
    }

    fn preferred_width(&self, _for_height: f32) -> SizeRequest {
        SizeRequest::fixed(self.size.width)
    }

    fn preferred_height(&self, _for_width: f32) -> SizeRequest {
        SizeRequest::fixed(self.size.height)
    }

    fn allocate(&mut self, rect: Rect) {
        self.state.lock().allocation = Some(rect);
    }

    fn allocation(&self) -> Rect {
        self.state.lock().allocation.unwrap_or_default()
    }

    fn opacity(&self) -> u8 {
        self.state.lock().opacity
    }

    fn set_opacity(&mut self, opacity: u8) {
        self.state.lock().opacity = opacity;
    }

    fn is_mapped(&self) -> bool {
        self.state.lock().mapped
    }

    fn map(&mut self) {
        self.state.lock().mapped = true;
    }

    fn unmap(&mut self) {
        self.state.lock().mapped = false;
    }
}

/// Single-line text sized by character count.
pub struct Text {
    block: Block,
    text: String,
}

impl Actor for Text {
    fn object_id(&self) -> ObjectId {
        self.block.object_id()
    }

    fn preferred_width(&self, _for_height: f32) -> SizeRequest {
        let width = self.text.chars().count() as f32 * CHAR_WIDTH;
        SizeRequest::new(0.0, width)
    }

    fn preferred_height(&self, _for_width: f32) -> SizeRequest {
        SizeRequest::fixed(LINE_HEIGHT)
    }

    fn allocate(&mut self, rect: Rect) {
        self.block.allocate(rect);
    }

    fn allocation(&self) -> Rect {
        self.block.allocation()
    }

    fn opacity(&self) -> u8 {
        self.block.opacity()
    }

    fn set_opacity(&mut self, opacity: u8) {
        self.block.set_opacity(opacity);
    }
}

impl TextActor for Text {
    fn text(&self) -> &str {
        &self.text
    }

    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }
}

/// Menu sized by its longest row.
pub struct TestMenu {
    block: Block,
    entries: Arc<Mutex<Vec<MenuEntry>>>,
    shown: Arc<Mutex<usize>>,
}

impl Actor for TestMenu {
    fn object_id(&self) -> ObjectId {
        self.block.object_id()
    }

    fn preferred_width(&self, _for_height: f32) -> SizeRequest {
        let longest = self
            .entries
            .lock()
            .iter()
            .map(|entry| entry.label.chars().count())
            .max()
            .unwrap_or(0);
        SizeRequest::fixed(longest as f32 * CHAR_WIDTH + 16.0)
    }

    fn preferred_height(&self, _for_width: f32) -> SizeRequest {
        SizeRequest::fixed(self.entries.lock().len() as f32 * 24.0)
    }

    fn allocate(&mut self, rect: Rect) {
        self.block.allocate(rect);
    }

    fn allocation(&self) -> Rect {
        self.block.allocation()
    }

    fn opacity(&self) -> u8 {
        self.block.opacity()
    }

    fn set_opacity(&mut self, opacity: u8) {
        self.block.set_opacity(opacity);
    }
}

impl Menu for TestMenu {
    fn clear(&mut self) {
        self.entries.lock().clear();
    }

    fn add_entry(&mut self, entry: MenuEntry) {
        self.entries.lock().push(entry);
    }

    fn show(&mut self) {
        *self.shown.lock() += 1;
    }
}

// ============================================================================
// Services
// ============================================================================

#[derive(Default)]
pub struct TestFactory {
    pub menu_entries: Arc<Mutex<Vec<MenuEntry>>>,
    pub menu_shown: Arc<Mutex<usize>>,
    pub menu_state: Mutex<Option<Arc<Mutex<BlockState>>>>,
    pub label_state: Mutex<Option<Arc<Mutex<BlockState>>>>,
}

impl ActorFactory for TestFactory {
    fn create_text(&self, registry: &SharedObjectRegistry) -> Box<dyn TextActor> {
        let (block, state) = Block::new(registry, 0.0, LINE_HEIGHT);
        *self.label_state.lock() = Some(state);
        Box::new(Text {
            block,
            text: String::new(),
        })
    }

    fn create_menu(&self, registry: &SharedObjectRegistry) -> Box<dyn Menu> {
        let (block, state) = Block::new(registry, 0.0, 0.0);
        *self.menu_state.lock() = Some(state);
        Box::new(TestMenu {
            block,
            entries: self.menu_entries.clone(),
            shown: self.menu_shown.clone(),
        })
    }

    fn create_hit_zone(&self, registry: &SharedObjectRegistry, width: f32) -> Box<dyn Actor> {
        Box::new(Block::new(registry, width, 0.0).0)
    }
}

/// Knows every icon name that ends in `-symbolic`.
pub struct SymbolicIcons;

impl IconTheme for SymbolicIcons {
    fn lookup_icon(
        &self,
        registry: &SharedObjectRegistry,
        name: &str,
        size: u32,
    ) -> Option<Box<dyn Actor>> {
        name.ends_with("-symbolic")
            .then(|| Box::new(Block::new(registry, size as f32, size as f32).0) as Box<dyn Actor>)
    }
}

/// Loads every uri as an 8x8 image.
pub struct Textures;

impl TextureCache for Textures {
    fn texture(&self, registry: &SharedObjectRegistry, _uri: &str) -> Option<Box<dyn Actor>> {
        Some(Box::new(Block::new(registry, 8.0, 8.0).0))
    }
}

pub struct Harness {
    pub services: Services,
    pub registry: SharedObjectRegistry,
    pub host: Arc<TestHost>,
    pub style: Arc<StyleRules>,
    pub factory: Arc<TestFactory>,
}

pub fn harness() -> Harness {
    init_tracing();

    let registry = SharedObjectRegistry::new();
    let host = Arc::new(TestHost::default());
    let style = Arc::new(StyleRules::new());
    let factory = Arc::new(TestFactory::default());
    let services = Services::new(
        registry.clone(),
        host.clone(),
        style.clone(),
        Arc::new(SymbolicIcons),
        Arc::new(Textures),
        factory.clone(),
    );

    Harness {
        services,
        registry,
        host,
        style,
        factory,
    }
}
