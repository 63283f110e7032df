//! Coordinate conversion between pointer pixels and module grid units.
//!
//! The editor draws the module being designed inside the canvas panel at a
//! magnification (`scale`) of the host game's block size. Every shape param
//! is stored in grid units, so clicks are converted on the way in and shapes
//! are converted back to pixels on the way out.

#[cfg(test)]
#[path = "grid_test.rs"]
mod grid_test;

use crate::consts::{BLOCK_SIZE_PX, CANVAS_MARGIN_PX, SCALE_LARGE, SCALE_SMALL, SCALE_THRESHOLD_BLOCKS};

/// A point in either screen (pixel) or grid space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned screen rectangle used for panel and button bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Half-open containment: the left/top edges are inside, right/bottom are not.
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x < self.x + self.width && p.y >= self.y && p.y < self.y + self.height
    }

    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// Magnification for a module of the given size in grid blocks.
///
/// Large modules are drawn at a smaller scale so they stay inside the canvas panel.
#[must_use]
pub fn scale_for(width: f64, height: f64) -> f64 {
    if width > SCALE_THRESHOLD_BLOCKS || height > SCALE_THRESHOLD_BLOCKS {
        SCALE_SMALL
    } else {
        SCALE_LARGE
    }
}

/// Placement of the module grid on screen.
///
/// `origin` is the top-left corner of the canvas panel in pixels; the module
/// area starts `left_margin` / `top_margin` pixels inside it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridFrame {
    pub origin: Point,
    pub left_margin: f64,
    pub top_margin: f64,
    pub scale: f64,
    pub block_size: f64,
}

impl GridFrame {
    /// Frame for a canvas panel whose top-left corner is `origin`, sized for a 1x1 module.
    #[must_use]
    pub fn new(origin: Point) -> Self {
        Self {
            origin,
            left_margin: CANVAS_MARGIN_PX,
            top_margin: CANVAS_MARGIN_PX,
            scale: scale_for(1.0, 1.0),
            block_size: BLOCK_SIZE_PX,
        }
    }

    /// Pixels per grid unit.
    #[must_use]
    pub fn unit_px(&self) -> f64 {
        self.scale * self.block_size
    }

    /// Screen position of grid point `(0, 0)`.
    #[must_use]
    pub fn module_origin(&self) -> Point {
        Point::new(self.origin.x + self.left_margin, self.origin.y + self.top_margin)
    }

    /// Convert a pointer position in pixels to grid units.
    #[must_use]
    pub fn to_grid(&self, pixel: Point) -> Point {
        let o = self.module_origin();
        let unit = self.unit_px();
        Point::new((pixel.x - o.x) / unit, (pixel.y - o.y) / unit)
    }

    /// Convert a grid position to pixels. Exact inverse of [`Self::to_grid`].
    #[must_use]
    pub fn to_pixels(&self, grid: Point) -> Point {
        let o = self.module_origin();
        let unit = self.unit_px();
        Point::new(grid.x * unit + o.x, grid.y * unit + o.y)
    }

    /// Convert a grid-space length to pixels.
    #[must_use]
    pub fn grid_dist_to_pixels(&self, dist: f64) -> f64 {
        dist * self.unit_px()
    }

    /// Pixel size of the module drawing area for a `width` x `height` module.
    #[must_use]
    pub fn module_pixel_size(&self, width: f64, height: f64) -> (f64, f64) {
        (width * self.unit_px(), height * self.unit_px())
    }

    /// Screen rectangle covered by a `width` x `height` module.
    #[must_use]
    pub fn module_bounds(&self, width: f64, height: f64) -> Rect {
        let o = self.module_origin();
        let (w, h) = self.module_pixel_size(width, height);
        Rect::new(o.x, o.y, w, h)
    }

    /// Pick the scale for a module of the given size.
    pub fn rescale(&mut self, width: f64, height: f64) {
        self.scale = scale_for(width, height);
    }

    /// Round a pixel position to the nearest multiple of `step` pixels,
    /// measured from the module origin. A step of 1 or less disables snapping.
    #[must_use]
    pub fn snap(&self, pixel: Point, step: f64) -> Point {
        if !step.is_finite() || step <= 1.0 {
            return pixel;
        }
        let o = self.module_origin();
        Point::new(
            o.x + ((pixel.x - o.x) / step).round() * step,
            o.y + ((pixel.y - o.y) / step).round() * step,
        )
    }
}
