//! Geometry helpers shared by the panel controller and tests
//!
//! All coordinates are viewport pixels with the origin at the top-left corner.

use serde::{Deserialize, Serialize};

/// A point in viewport coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component-wise difference (`self - other`)
    pub fn offset_from(&self, other: Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }
}

/// Width and height in pixels
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_origin(origin: Point, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn contains(&self, px: f64, py: f64) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }

    /// Width of the part of this rect that lies inside `[0, viewport.width]`
    pub fn visible_width(&self, viewport: Size) -> f64 {
        visible_span(self.x, self.width, viewport.width)
    }

    /// Height of the part of this rect that lies inside `[0, viewport.height]`
    pub fn visible_height(&self, viewport: Size) -> f64 {
        visible_span(self.y, self.height, viewport.height)
    }
}

fn visible_span(start: f64, len: f64, extent: f64) -> f64 {
    ((start + len).min(extent) - start.max(0.0)).max(0.0)
}

/// Top-left corner that centers a box of `size` inside `viewport`
pub fn centered_in(size: Size, viewport: Size) -> Point {
    Point::new(
        (viewport.width - size.width) / 2.0,
        (viewport.height - size.height) / 2.0,
    )
}

/// Keep at least `min_visible` pixels of a box on screen along each axis.
///
/// One-sided: a position that already leaves `min_visible` pixels visible in
/// both directions is returned untouched, even if the box overhangs an edge.
pub fn clamp_to_viewport(pos: Point, size: Size, viewport: Size, min_visible: f64) -> Point {
    Point::new(
        clamp_axis(pos.x, size.width, viewport.width, min_visible),
        clamp_axis(pos.y, size.height, viewport.height, min_visible),
    )
}

fn clamp_axis(start: f64, len: f64, extent: f64, min_visible: f64) -> f64 {
    if start + len < min_visible {
        min_visible - len
    } else if start > extent - min_visible {
        extent - min_visible
    } else {
        start
    }
}
