//! Page surface capabilities consumed by the effects.
//!
//! The browser binding and the in-memory fake both implement these traits.
//! Components bound themselves only by the capabilities they use.

use crate::error::SurfaceError;

/// A position in viewport coordinates, in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// Construct a point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Width and height of an element's client area.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    /// Client width.
    pub width: f64,
    /// Client height.
    pub height: f64,
}

impl Size {
    /// Construct a size.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Larger of the two dimensions.
    #[must_use]
    pub const fn max_side(self) -> f64 {
        self.width.max(self.height)
    }
}

/// Origin and client size of a laid-out element.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ElementBox {
    /// Top-left corner in viewport coordinates.
    pub origin: Point,
    /// Client area dimensions.
    pub size: Size,
}

/// Pointer position reported by a click, in viewport coordinates.
pub type ClickPoint = Point;

/// How a scroll request should move the viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollBehavior {
    /// Animate to the target offset.
    Smooth,
    /// Jump straight to the target offset.
    Instant,
}

/// Request to move the viewport to a vertical offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollRequest {
    /// Target vertical offset.
    pub top: f64,
    /// Scroll animation style.
    pub behavior: ScrollBehavior,
}

/// One target reported by a viewport intersection callback.
#[derive(Clone, Debug)]
pub struct IntersectionEntry<E> {
    /// Observed element.
    pub target: E,
    /// Whether the element currently crosses the watcher's threshold.
    pub is_intersecting: bool,
}

/// Callback invoked with each batch of intersection changes.
pub type IntersectionHandler<E> = Box<dyn FnMut(&[IntersectionEntry<E>])>;

/// Handle to a live page element.
pub trait PageElement: Clone + 'static {
    /// Write an inline style property.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::StyleWrite`] when the element rejects the write.
    fn set_style(&self, property: &str, value: &str) -> Result<(), SurfaceError>;

    /// Add a class to the element's class list.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::ClassList`] when the class token is rejected.
    fn add_class(&self, class: &str) -> Result<(), SurfaceError>;

    /// Remove a class from the element's class list.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::ClassList`] when the class token is rejected.
    fn remove_class(&self, class: &str) -> Result<(), SurfaceError>;

    /// Current origin and client size.
    fn box_metrics(&self) -> ElementBox;

    /// First descendant carrying `class`, in document order.
    fn first_descendant_with_class(&self, class: &str) -> Option<Self>;

    /// Remove the element from its parent. No-op when already detached.
    fn detach(&self);

    /// Append `child` as the last child of this element.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::AppendChild`] when the insertion is rejected.
    fn append_child(&self, child: &Self) -> Result<(), SurfaceError>;
}

/// Base trait naming the element handle a surface hands out.
pub trait PageSurface: Clone + 'static {
    /// Element handle type.
    type Element: PageElement;
}

/// Query elements by marker class.
pub trait MarkerQuery: PageSurface {
    /// All elements carrying `class`, in document order.
    fn query_marker(&self, class: &str) -> Vec<Self::Element>;
}

/// Query an element by identifier.
pub trait IdQuery: PageSurface {
    /// Element whose identifier is `id`, if present.
    fn query_id(&self, id: &str) -> Option<Self::Element>;
}

/// Receive style blocks.
pub trait StyleSink: PageSurface {
    /// Append a style block containing `css` to the page.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::MissingStyleHost`] when the page has nowhere
    /// to put the block, or another [`SurfaceError`] if insertion fails.
    fn append_style_block(&self, css: &str) -> Result<(), SurfaceError>;
}

/// Create detached elements.
pub trait ElementFactory: PageSurface {
    /// Create an element with the given tag, not yet attached to the page.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::ElementCreation`] when the tag is rejected.
    fn create_element(&self, tag: &str) -> Result<Self::Element, SurfaceError>;
}

/// Watch elements crossing into the viewport.
pub trait IntersectionWatch: PageSurface {
    /// Register one watcher over `targets` that fires `handler` whenever any
    /// of them crosses `threshold` of visible area.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::Observer`] when the watcher cannot be created.
    fn watch_intersections(
        &self,
        targets: &[Self::Element],
        threshold: f64,
        handler: IntersectionHandler<Self::Element>,
    ) -> Result<(), SurfaceError>;
}

/// Read and move the viewport.
pub trait Viewport: PageSurface {
    /// Current vertical scroll offset.
    fn scroll_offset(&self) -> f64;

    /// Ask the page to scroll.
    fn scroll_to(&self, request: ScrollRequest);
}

/// Register handlers against page triggers.
pub trait EventHub: PageSurface {
    /// Run `handler` once the document has been parsed. Runs immediately
    /// when that has already happened.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::Listener`] when registration fails.
    fn on_ready(&self, handler: Box<dyn FnOnce()>) -> Result<(), SurfaceError>;

    /// Run `handler` on every page scroll.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::Listener`] when registration fails.
    fn on_scroll(&self, handler: Box<dyn FnMut()>) -> Result<(), SurfaceError>;

    /// Run `handler` on every click on `target`, with the pointer position.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::Listener`] when registration fails.
    fn on_click(
        &self,
        target: &Self::Element,
        handler: Box<dyn FnMut(ClickPoint)>,
    ) -> Result<(), SurfaceError>;
}
