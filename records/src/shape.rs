//! Shape records: the drawing primitives that make up a module's picture.
//!
//! All positional params are in grid units, never pixels. Angles (arc start
//! and end) are in radians.

#[cfg(test)]
#[path = "shape_test.rs"]
mod shape_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::RecordError;

/// The kind of shape, each with its own click-count-to-completion contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    /// Axis-aligned rectangle: `[x, y, w, h]`.
    Rect,
    /// Free quadrilateral: four corners, `[x1, y1, .. x4, y4]`.
    Quad,
    /// Triangle: three corners, `[x1, y1, x2, y2, x3, y3]`.
    Triangle,
    /// Ellipse: `[cx, cy, w, h]`, or `[cx, cy, d]` for a perfect circle.
    Ellipse,
    /// Arc: `[cx, cy, w, h, start, stop]` plus an [`ArcMode`].
    Arc,
}

impl ShapeKind {
    pub const ALL: [Self; 5] = [Self::Rect, Self::Quad, Self::Triangle, Self::Ellipse, Self::Arc];

    /// Number of canvas clicks needed to finish a shape of this kind.
    #[must_use]
    pub fn required_clicks(self) -> u32 {
        match self {
            Self::Rect | Self::Ellipse => 2,
            Self::Triangle => 3,
            Self::Quad | Self::Arc => 4,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Rect => "rect",
            Self::Quad => "quad",
            Self::Triangle => "triangle",
            Self::Ellipse => "ellipse",
            Self::Arc => "arc",
        }
    }
}

impl FromStr for ShapeKind {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| RecordError::UnknownShape(s.to_owned()))
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How an arc's closing edge is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ArcMode {
    #[default]
    Chord,
    Pie,
    Open,
}

impl ArcMode {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Chord => "CHORD",
            Self::Pie => "PIE",
            Self::Open => "OPEN",
        }
    }
}

impl FromStr for ArcMode {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CHORD" => Ok(Self::Chord),
            "PIE" => Ok(Self::Pie),
            "OPEN" => Ok(Self::Open),
            other => Err(RecordError::UnknownArcMode(other.to_owned())),
        }
    }
}

impl fmt::Display for ArcMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A finished shape as stored in a module document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeRecord {
    pub shape: ShapeKind,
    /// Hex colour string, e.g. `"#0FFF13"`.
    pub color: String,
    pub params: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<ArcMode>,
}

impl ShapeRecord {
    #[must_use]
    pub fn new(shape: ShapeKind, color: impl Into<String>, params: Vec<f64>) -> Self {
        Self { shape, color: color.into(), params, mode: None }
    }

    #[must_use]
    pub fn with_mode(mut self, mode: ArcMode) -> Self {
        self.mode = Some(mode);
        self
    }
}
