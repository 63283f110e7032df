//! Rendering: draws the editor screens through a [`Surface`].
//!
//! Panels and shapes only ever talk to the [`Surface`] trait, so the whole
//! scene can be drawn into a recording surface in tests. [`CanvasSurface`] is
//! the one implementation that touches [`web_sys::CanvasRenderingContext2d`].
//! Nothing here mutates editor state.

#[cfg(test)]
#[path = "render_test.rs"]
pub(crate) mod render_test;

use std::f64::consts::TAU;

use records::{ArcMode, ShapeKind, ShapeRecord};
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::consts::{APP_BACKGROUND, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::engine::{EditorCore, Screen};
use crate::grid::{GridFrame, Point, Rect};
use crate::panel::Panel;

/// A failed drawing call, carrying the browser's description of the error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("draw failed: {0}")]
pub struct DrawError(pub String);

impl From<JsValue> for DrawError {
    fn from(value: JsValue) -> Self {
        Self(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

pub type DrawResult = Result<(), DrawError>;

/// Minimal 2D drawing API the editor needs. All coordinates are CSS pixels.
pub trait Surface {
    fn fill_rect(&mut self, rect: Rect, color: &str) -> DrawResult;
    fn stroke_rect(&mut self, rect: Rect, color: &str) -> DrawResult;
    fn fill_polygon(&mut self, points: &[Point], color: &str) -> DrawResult;
    /// Filled ellipse with radii `rx`, `ry`.
    fn fill_ellipse(&mut self, center: Point, rx: f64, ry: f64, color: &str) -> DrawResult;
    /// Filled elliptical arc from `start` to `stop` radians, closed per `mode`.
    #[allow(clippy::too_many_arguments)]
    fn fill_arc(&mut self, center: Point, rx: f64, ry: f64, start: f64, stop: f64, mode: ArcMode, color: &str)
    -> DrawResult;
    /// Text with its baseline starting at `at`.
    fn text(&mut self, text: &str, at: Point, size: f64, color: &str) -> DrawResult;
}

/// Draw whichever screen is active.
///
/// # Errors
///
/// Returns the first [`DrawError`] reported by the surface.
pub fn draw(surface: &mut dyn Surface, core: &EditorCore) -> DrawResult {
    surface.fill_rect(Rect::new(0.0, 0.0, SCREEN_WIDTH, SCREEN_HEIGHT), APP_BACKGROUND)?;
    let state = core.state();
    match state.screen {
        Screen::Menu => core.menu().render(state, surface),
        Screen::Builder => {
            for panel in core.panels().all() {
                panel.render(state, surface)?;
            }
            Ok(())
        }
    }
}

/// Draw one module shape, converting its grid params to pixels via `frame`.
///
/// Shapes whose params are too short for their kind are skipped with a warning.
///
/// # Errors
///
/// Returns the surface's error if a drawing call fails.
pub fn draw_shape(surface: &mut dyn Surface, frame: &GridFrame, shape: &ShapeRecord) -> DrawResult {
    let color = shape.color.as_str();
    match (shape.shape, shape.params.as_slice()) {
        (ShapeKind::Rect, &[x, y, w, h, ..]) => {
            let corner = frame.to_pixels(Point::new(x.min(x + w), y.min(y + h)));
            let rect = Rect::new(
                corner.x,
                corner.y,
                frame.grid_dist_to_pixels(w.abs()),
                frame.grid_dist_to_pixels(h.abs()),
            );
            surface.fill_rect(rect, color)
        }
        (ShapeKind::Triangle, &[x1, y1, x2, y2, x3, y3, ..]) => {
            let points = [(x1, y1), (x2, y2), (x3, y3)].map(|(x, y)| frame.to_pixels(Point::new(x, y)));
            surface.fill_polygon(&points, color)
        }
        (ShapeKind::Quad, &[x1, y1, x2, y2, x3, y3, x4, y4, ..]) => {
            let points = [(x1, y1), (x2, y2), (x3, y3), (x4, y4)].map(|(x, y)| frame.to_pixels(Point::new(x, y)));
            surface.fill_polygon(&points, color)
        }
        (ShapeKind::Ellipse, &[cx, cy, w, h, ..]) => {
            let center = frame.to_pixels(Point::new(cx, cy));
            surface.fill_ellipse(center, frame.grid_dist_to_pixels(w) / 2.0, frame.grid_dist_to_pixels(h) / 2.0, color)
        }
        (ShapeKind::Ellipse, &[cx, cy, d]) => {
            let center = frame.to_pixels(Point::new(cx, cy));
            let r = frame.grid_dist_to_pixels(d) / 2.0;
            surface.fill_ellipse(center, r, r, color)
        }
        (ShapeKind::Arc, &[cx, cy, w, h, start, stop, ..]) => {
            let center = frame.to_pixels(Point::new(cx, cy));
            surface.fill_arc(
                center,
                frame.grid_dist_to_pixels(w) / 2.0,
                frame.grid_dist_to_pixels(h) / 2.0,
                start,
                stop,
                shape.mode.unwrap_or_default(),
                color,
            )
        }
        (kind, params) => {
            log::warn!("skipping {kind} with {} params", params.len());
            Ok(())
        }
    }
}

/// Small square marking a click that belongs to an unfinished shape.
///
/// # Errors
///
/// Returns the surface's error if a drawing call fails.
pub fn draw_pending_marker(surface: &mut dyn Surface, at: Point, color: &str) -> DrawResult {
    const HALF: f64 = 3.0;
    surface.stroke_rect(Rect::new(at.x - HALF, at.y - HALF, HALF * 2.0, HALF * 2.0), color)
}

// =============================================================
// Browser surface
// =============================================================

/// [`Surface`] backed by a browser 2D context.
pub struct CanvasSurface<'a> {
    ctx: &'a CanvasRenderingContext2d,
}

impl<'a> CanvasSurface<'a> {
    #[must_use]
    pub fn new(ctx: &'a CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    fn ellipse_path(&self, center: Point, rx: f64, ry: f64, start: f64, stop: f64) -> Result<(), JsValue> {
        self.ctx.ellipse(center.x, center.y, rx.abs(), ry.abs(), 0.0, start, stop)
    }
}

impl Surface for CanvasSurface<'_> {
    fn fill_rect(&mut self, rect: Rect, color: &str) -> DrawResult {
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_rect(rect.x, rect.y, rect.width, rect.height);
        Ok(())
    }

    fn stroke_rect(&mut self, rect: Rect, color: &str) -> DrawResult {
        self.ctx.set_stroke_style_str(color);
        self.ctx.stroke_rect(rect.x, rect.y, rect.width, rect.height);
        Ok(())
    }

    fn fill_polygon(&mut self, points: &[Point], color: &str) -> DrawResult {
        let Some((first, rest)) = points.split_first() else {
            return Ok(());
        };
        self.ctx.begin_path();
        self.ctx.move_to(first.x, first.y);
        for p in rest {
            self.ctx.line_to(p.x, p.y);
        }
        self.ctx.close_path();
        self.ctx.set_fill_style_str(color);
        self.ctx.fill();
        Ok(())
    }

    fn fill_ellipse(&mut self, center: Point, rx: f64, ry: f64, color: &str) -> DrawResult {
        self.ctx.begin_path();
        self.ellipse_path(center, rx, ry, 0.0, TAU)?;
        self.ctx.set_fill_style_str(color);
        self.ctx.fill();
        Ok(())
    }

    #[allow(clippy::too_many_arguments)]
    fn fill_arc(
        &mut self,
        center: Point,
        rx: f64,
        ry: f64,
        start: f64,
        stop: f64,
        mode: ArcMode,
        color: &str,
    ) -> DrawResult {
        self.ctx.begin_path();
        if mode == ArcMode::Pie {
            self.ctx.move_to(center.x, center.y);
        }
        self.ellipse_path(center, rx, ry, start, stop)?;
        if mode != ArcMode::Open {
            self.ctx.close_path();
        }
        self.ctx.set_fill_style_str(color);
        self.ctx.set_stroke_style_str(color);
        self.ctx.fill();
        self.ctx.stroke();
        Ok(())
    }

    fn text(&mut self, text: &str, at: Point, size: f64, color: &str) -> DrawResult {
        self.ctx.set_font(&format!("{size}px monospace"));
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_text(text, at.x, at.y)?;
        Ok(())
    }
}
