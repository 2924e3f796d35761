//! Events delivered to widgets by the host.
//!
//! The host owns input dispatch. It decides which widget an event targets and
//! calls [`Widget::event`](crate::widget::Widget::event); the return value
//! tells the host whether the event was consumed.

use tessera_core::ObjectId;

use super::geometry::Point;

/// Mouse buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary button (usually left).
    Left,
    /// Secondary button (usually right).
    Right,
    /// Middle button (scroll wheel click).
    Middle,
}

/// Keys widgets react to. Anything else arrives as [`Key::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Up arrow.
    ArrowUp,
    /// Down arrow.
    ArrowDown,
    /// Left arrow.
    ArrowLeft,
    /// Right arrow.
    ArrowRight,
    /// Enter / Return.
    Enter,
    /// Escape.
    Escape,
    /// Tab.
    Tab,
    /// Space bar.
    Space,
    /// Any other key, by host key code.
    Other(u32),
}

/// Common data for all widget events.
#[derive(Debug, Clone, Copy, Default)]
pub struct EventBase {
    accepted: bool,
}

impl EventBase {
    /// Create a new event base.
    pub fn new() -> Self {
        Self { accepted: false }
    }

    /// Check if the event has been accepted.
    pub fn is_accepted(&self) -> bool {
        self.accepted
    }

    /// Accept the event, preventing further propagation.
    pub fn accept(&mut self) {
        self.accepted = true;
    }

    /// Ignore the event, allowing further propagation.
    pub fn ignore(&mut self) {
        self.accepted = false;
    }
}

/// A pointer button went down.
#[derive(Debug, Clone)]
pub struct ButtonPressEvent {
    /// Base event data.
    pub base: EventBase,
    /// The button that was pressed.
    pub button: MouseButton,
    /// The actor that was hit. May be the widget itself or one of its
    /// internal children.
    pub target: ObjectId,
    /// Position in widget-local coordinates.
    pub local_pos: Point,
}

impl ButtonPressEvent {
    /// Create a new button press event.
    pub fn new(button: MouseButton, target: ObjectId, local_pos: Point) -> Self {
        Self {
            base: EventBase::new(),
            button,
            target,
            local_pos,
        }
    }
}

/// A key went down while the widget had key focus.
#[derive(Debug, Clone)]
pub struct KeyPressEvent {
    /// Base event data.
    pub base: EventBase,
    /// The key that was pressed.
    pub key: Key,
    /// Whether this is a key repeat event (key held down).
    pub is_repeat: bool,
}

impl KeyPressEvent {
    /// Create a new key press event.
    pub fn new(key: Key) -> Self {
        Self {
            base: EventBase::new(),
            key,
            is_repeat: false,
        }
    }
}

/// An entry of a widget's flyout menu was activated.
///
/// `entry_id` is the id the widget registered the entry with.
#[derive(Debug, Clone)]
pub struct MenuActivatedEvent {
    /// Base event data.
    pub base: EventBase,
    /// Id the entry was added to the menu with.
    pub entry_id: usize,
}

impl MenuActivatedEvent {
    /// Create a new menu activation event.
    pub fn new(entry_id: usize) -> Self {
        Self {
            base: EventBase::new(),
            entry_id,
        }
    }
}

/// All events a widget can receive.
#[derive(Debug, Clone)]
pub enum WidgetEvent {
    /// Pointer button press.
    ButtonPress(ButtonPressEvent),
    /// Key press.
    KeyPress(KeyPressEvent),
    /// Flyout menu entry activation.
    MenuActivated(MenuActivatedEvent),
}

impl WidgetEvent {
    fn base(&self) -> &EventBase {
        match self {
            Self::ButtonPress(e) => &e.base,
            Self::KeyPress(e) => &e.base,
            Self::MenuActivated(e) => &e.base,
        }
    }

    fn base_mut(&mut self) -> &mut EventBase {
        match self {
            Self::ButtonPress(e) => &mut e.base,
            Self::KeyPress(e) => &mut e.base,
            Self::MenuActivated(e) => &mut e.base,
        }
    }

    /// Check if the event has been accepted.
    pub fn is_accepted(&self) -> bool {
        self.base().is_accepted()
    }

    /// Accept the event.
    pub fn accept(&mut self) {
        self.base_mut().accept();
    }

    /// Ignore the event.
    pub fn ignore(&mut self) {
        self.base_mut().ignore();
    }
}

impl From<ButtonPressEvent> for WidgetEvent {
    fn from(event: ButtonPressEvent) -> Self {
        Self::ButtonPress(event)
    }
}

impl From<KeyPressEvent> for WidgetEvent {
    fn from(event: KeyPressEvent) -> Self {
        Self::KeyPress(event)
    }
}

impl From<MenuActivatedEvent> for WidgetEvent {
    fn from(event: MenuActivatedEvent) -> Self {
        Self::MenuActivated(event)
    }
}
