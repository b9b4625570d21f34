//! Geometric primitives for layered diagram layout.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate in logical diagram space
//! - [`Size`] - Width and height dimensions
//! - [`Bounds`] - An axis-aligned rectangle defined by minimum and maximum coordinates
//!
//! # Coordinate System
//!
//! Layout happens in *logical units* with the Y axis pointing up, so a layer
//! with a higher slot is drawn higher on the canvas:
//!
//! ```text
//!    +Y
//!     ▲
//!     │
//!     │
//!   (0,0) ────────► +X
//! ```
//!
//! Renderers are responsible for flipping Y and scaling to pixels.

/// A 2D point in logical diagram space.
///
/// # Examples
///
/// ```
/// # use strata_core::geometry::Point;
/// let lower = Point::new(5.0, 0.6);
/// let upper = lower.with_y(1.4);
///
/// assert_eq!(upper.x(), 5.0);
/// assert_eq!(upper.y(), 1.4);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Creates a new point with the specified y-coordinate
    pub fn with_y(mut self, y: f32) -> Self {
        self.y = y;
        self
    }
}

/// Width and height of an element.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f32 {
        self.height
    }

    /// Multiplies both dimensions by the given factor
    pub fn scale(self, factor: f32) -> Self {
        Self {
            width: self.width * factor,
            height: self.height * factor,
        }
    }
}

/// An axis-aligned rectangle with minimum and maximum coordinates.
///
/// `min_y` is the *lower* edge and `max_y` the *upper* edge in the Y-up
/// logical space.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl Bounds {
    /// Creates bounds from two opposite corners, in any order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use strata_core::geometry::{Bounds, Point};
    /// let bounds = Bounds::from_corners(Point::new(10.0, 1.4), Point::new(0.0, 0.6));
    /// assert_eq!(bounds.min_x(), 0.0);
    /// assert_eq!(bounds.max_y(), 1.4);
    /// ```
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            min_x: a.x.min(b.x),
            min_y: a.y.min(b.y),
            max_x: a.x.max(b.x),
            max_y: a.y.max(b.y),
        }
    }

    /// Creates a horizontal band spanning `[min_x, max_x]` centered on
    /// `center_y` with the given half height.
    pub fn horizontal_band(min_x: f32, max_x: f32, center_y: f32, half_height: f32) -> Self {
        Self::from_corners(
            Point::new(min_x, center_y - half_height),
            Point::new(max_x, center_y + half_height),
        )
    }

    /// Returns the minimum x-coordinate of the bounds
    pub fn min_x(self) -> f32 {
        self.min_x
    }

    /// Returns the minimum (lower) y-coordinate of the bounds
    pub fn min_y(self) -> f32 {
        self.min_y
    }

    /// Returns the maximum x-coordinate of the bounds
    pub fn max_x(self) -> f32 {
        self.max_x
    }

    /// Returns the maximum (upper) y-coordinate of the bounds
    pub fn max_y(self) -> f32 {
        self.max_y
    }

    /// Returns the width of the bounds
    pub fn width(self) -> f32 {
        self.max_x - self.min_x
    }

    /// Returns the height of the bounds
    pub fn height(self) -> f32 {
        self.max_y - self.min_y
    }

    /// Returns the center point of the bounds
    pub fn center(self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// Converts bounds to a Size object
    pub fn to_size(self) -> Size {
        Size::new(self.width(), self.height())
    }

    /// Grows the bounds by `horizontal` on the left and right and by
    /// `vertical` on the bottom and top.
    pub fn expand(&self, horizontal: f32, vertical: f32) -> Self {
        Self {
            min_x: self.min_x - horizontal,
            min_y: self.min_y - vertical,
            max_x: self.max_x + horizontal,
            max_y: self.max_y + vertical,
        }
    }

    /// Returns `true` if the vertical extents of both bounds share more than
    /// an edge.
    ///
    /// ```
    /// # use strata_core::geometry::Bounds;
    /// let lower = Bounds::horizontal_band(0.0, 10.0, 0.0, 0.4);
    /// let upper = Bounds::horizontal_band(0.0, 10.0, 1.0, 0.4);
    /// assert!(!lower.overlaps_vertically(&upper));
    /// assert!(lower.overlaps_vertically(&lower));
    /// ```
    pub fn overlaps_vertically(&self, other: &Self) -> bool {
        self.min_y < other.max_y && other.min_y < self.max_y
    }
}
