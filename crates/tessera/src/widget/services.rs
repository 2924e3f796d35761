//! Shared services injected into widgets.
//!
//! Every widget receives a [`Services`] bundle at construction. The bundle is
//! cheap to clone; all clones share the same host, registry, style resolver
//! and caches for the lifetime of the application.

use std::fmt;
use std::sync::Arc;

use tessera_core::SharedObjectRegistry;

use super::actor::{Actor, Menu, TextActor};
use super::host::Host;
use super::style::StyleResolver;

/// Looks up named icons.
pub trait IconTheme: Send + Sync {
    /// Create an actor showing icon `name` at `size` pixels, registered in
    /// `registry`. Returns `None` if the theme has no such icon.
    fn lookup_icon(
        &self,
        registry: &SharedObjectRegistry,
        name: &str,
        size: u32,
    ) -> Option<Box<dyn Actor>>;
}

/// Loads images by resource uri, sharing decoded data between callers.
pub trait TextureCache: Send + Sync {
    /// Create an actor displaying the image at `uri`, registered in
    /// `registry`. Returns `None` if the image cannot be loaded.
    fn texture(&self, registry: &SharedObjectRegistry, uri: &str) -> Option<Box<dyn Actor>>;
}

/// Creates the host actors widgets are assembled from.
pub trait ActorFactory: Send + Sync {
    /// A single-line text display.
    fn create_text(&self, registry: &SharedObjectRegistry) -> Box<dyn TextActor>;

    /// A flyout menu.
    fn create_menu(&self, registry: &SharedObjectRegistry) -> Box<dyn Menu>;

    /// A reactive, otherwise invisible rectangle `width` units wide.
    fn create_hit_zone(&self, registry: &SharedObjectRegistry, width: f32) -> Box<dyn Actor>;
}

/// Process-wide collaborators shared by all widgets.
#[derive(Clone)]
pub struct Services {
    registry: SharedObjectRegistry,
    host: Arc<dyn Host>,
    style: Arc<dyn StyleResolver>,
    icons: Arc<dyn IconTheme>,
    textures: Arc<dyn TextureCache>,
    factory: Arc<dyn ActorFactory>,
}

impl Services {
    /// Bundle the given collaborators.
    pub fn new(
        registry: SharedObjectRegistry,
        host: Arc<dyn Host>,
        style: Arc<dyn StyleResolver>,
        icons: Arc<dyn IconTheme>,
        textures: Arc<dyn TextureCache>,
        factory: Arc<dyn ActorFactory>,
    ) -> Self {
        Self {
            registry,
            host,
            style,
            icons,
            textures,
            factory,
        }
    }

    /// The object registry.
    pub fn registry(&self) -> &SharedObjectRegistry {
        &self.registry
    }

    /// The host framework.
    pub fn host(&self) -> &dyn Host {
        self.host.as_ref()
    }

    /// The style resolver.
    pub fn style(&self) -> &dyn StyleResolver {
        self.style.as_ref()
    }

    /// The icon theme.
    pub fn icons(&self) -> &dyn IconTheme {
        self.icons.as_ref()
    }

    /// The texture cache.
    pub fn textures(&self) -> &dyn TextureCache {
        self.textures.as_ref()
    }

    /// The actor factory.
    pub fn factory(&self) -> &dyn ActorFactory {
        self.factory.as_ref()
    }
}

impl fmt::Debug for Services {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Services")
            .field("objects", &self.registry.object_count())
            .finish_non_exhaustive()
    }
}
