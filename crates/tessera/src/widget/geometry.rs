//! Geometry and size negotiation types.
//!
//! Layout runs in two passes. First the parent asks a widget for its
//! [`SizeRequest`] along one axis, optionally constrained by the size it
//! already knows for the other axis. Then it hands the widget a final
//! [`Rect`] via `allocate`, and the widget derives rectangles for its own
//! children from it.

/// Constraint value meaning "no constraint on the other axis".
pub const UNCONSTRAINED: f32 = -1.0;

/// A point in 2D space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f32,
    /// Vertical coordinate.
    pub y: f32,
}

impl Point {
    /// The origin.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Create a new point.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A 2D extent.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    /// Horizontal extent.
    pub width: f32,
    /// Vertical extent.
    pub height: f32,
}

impl Size {
    /// The empty size.
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// Create a new size.
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// An axis-aligned rectangle in parent coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Top-left corner.
    pub origin: Point,
    /// Extent.
    pub size: Size,
}

impl Rect {
    /// The empty rectangle at the origin.
    pub const ZERO: Self = Self {
        origin: Point::ZERO,
        size: Size::ZERO,
    };

    /// Create a rectangle from position and size.
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    /// Create a rectangle from its edges.
    ///
    /// Every edge is truncated toward zero, the way child boxes are snapped
    /// to whole units before they are handed to a child.
    pub fn from_edges(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        let (x1, y1, x2, y2) = (x1.trunc(), y1.trunc(), x2.trunc(), y2.trunc());
        Self::new(x1, y1, x2 - x1, y2 - y1)
    }

    /// Left edge.
    #[inline]
    pub fn x(&self) -> f32 {
        self.origin.x
    }

    /// Top edge.
    #[inline]
    pub fn y(&self) -> f32 {
        self.origin.y
    }

    /// Width.
    #[inline]
    pub fn width(&self) -> f32 {
        self.size.width
    }

    /// Height.
    #[inline]
    pub fn height(&self) -> f32 {
        self.size.height
    }

    /// Right edge.
    #[inline]
    pub fn right(&self) -> f32 {
        self.origin.x + self.size.width
    }

    /// Bottom edge.
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.origin.y + self.size.height
    }

    /// Whether `point` lies inside the rectangle (right and bottom edges excluded).
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x() && point.x < self.right() && point.y >= self.y() && point.y < self.bottom()
    }

    /// The content area of this box in its own coordinate space.
    ///
    /// The result starts at the padding's top-left corner and never has a
    /// negative extent.
    pub fn content_area(&self, padding: &Padding) -> Rect {
        Rect::new(
            padding.left,
            padding.top,
            (self.width() - padding.horizontal()).max(0.0),
            (self.height() - padding.vertical()).max(0.0),
        )
    }
}

/// Inner spacing between a widget's edge and its content.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Padding {
    /// Top padding.
    pub top: f32,
    /// Right padding.
    pub right: f32,
    /// Bottom padding.
    pub bottom: f32,
    /// Left padding.
    pub left: f32,
}

impl Padding {
    /// No padding.
    pub const ZERO: Self = Self {
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
        left: 0.0,
    };

    /// Create padding, clockwise from the top.
    pub fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Same padding on all sides.
    pub fn uniform(padding: f32) -> Self {
        Self::new(padding, padding, padding, padding)
    }

    /// Same horizontal and same vertical padding.
    pub fn symmetric(horizontal: f32, vertical: f32) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }

    /// Total horizontal padding (left + right).
    #[inline]
    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    /// Total vertical padding (top + bottom).
    #[inline]
    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}

/// Result of a preferred size query along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SizeRequest {
    /// Smallest usable extent.
    pub minimum: f32,
    /// Extent the element would like to have.
    pub natural: f32,
}

impl SizeRequest {
    /// A request for nothing.
    pub const ZERO: Self = Self {
        minimum: 0.0,
        natural: 0.0,
    };

    /// Create a request with distinct minimum and natural extents.
    pub const fn new(minimum: f32, natural: f32) -> Self {
        Self { minimum, natural }
    }

    /// A request whose minimum and natural extents are equal.
    pub const fn fixed(extent: f32) -> Self {
        Self::new(extent, extent)
    }

    /// Component-wise maximum.
    pub fn max(self, other: SizeRequest) -> SizeRequest {
        SizeRequest::new(self.minimum.max(other.minimum), self.natural.max(other.natural))
    }

    /// Add the same extent to both components.
    pub fn grow(self, extent: f32) -> SizeRequest {
        SizeRequest::new(self.minimum + extent, self.natural + extent)
    }

    /// Component-wise sum.
    pub fn plus(self, other: SizeRequest) -> SizeRequest {
        SizeRequest::new(self.minimum + other.minimum, self.natural + other.natural)
    }

    /// Clamp both components to be non-negative.
    pub fn non_negative(self) -> SizeRequest {
        SizeRequest::new(self.minimum.max(0.0), self.natural.max(0.0))
    }
}

/// Remove `removed` from a constraint, keeping "unconstrained" as is.
///
/// A constraint that would go negative is clamped to zero.
pub fn shrink_constraint(constraint: f32, removed: f32) -> f32 {
    if constraint < 0.0 {
        UNCONSTRAINED
    } else {
        (constraint - removed).max(0.0)
    }
}
