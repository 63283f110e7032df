//! Shared numeric and colour constants for the editor.

// ── Screen layout (CSS pixels) ──────────────────────────────────

pub const SCREEN_WIDTH: f64 = 1600.0;
pub const SCREEN_HEIGHT: f64 = 800.0;

/// Left edge of the navbar; also the width of the side columns.
pub const NAVBAR_X: f64 = 320.0;
pub const NAVBAR_WIDTH: f64 = 960.0;
pub const NAVBAR_HEIGHT: f64 = 80.0;

// ── Module grid ─────────────────────────────────────────────────

/// Size of one grid block in pixels at scale 1. Matches the host game.
pub const BLOCK_SIZE_PX: f64 = 20.0;

/// Gap between the canvas panel edge and the module drawing area.
pub const CANVAS_MARGIN_PX: f64 = 24.0;

/// Magnification used for small modules.
pub const SCALE_LARGE: f64 = 4.0;

/// Magnification used once either module dimension exceeds [`SCALE_THRESHOLD_BLOCKS`].
pub const SCALE_SMALL: f64 = 2.0;

pub const SCALE_THRESHOLD_BLOCKS: f64 = 7.0;

// ── Colours ─────────────────────────────────────────────────────

pub const APP_BACKGROUND: &str = "#000000";
pub const PANEL_FILL: &str = "#0F0F0F";
pub const PANEL_STROKE: &str = "#008000";

pub const GREEN_TERMINAL: &str = "#0FFF13";
pub const GREEN_BACKGROUND: &str = "#023803";
pub const GREEN_DARK: &str = "#0A2E0B";
pub const GREEN_LEAVES: &str = "#2E8B3A";
pub const GREEN_MINIMAP: &str = "#5AB55E";
pub const RED_ROCK: &str = "#A0412D";
pub const ORANGE_COPPER: &str = "#C87533";
pub const YELLOW_SKY: &str = "#E8C95A";
pub const PURPLE_LIGHT: &str = "#B48EDB";
pub const BLUE_SUNSET: &str = "#4A6FA5";
pub const GRAY_DARK: &str = "#3A3A3A";

/// Swatches offered by the colour palette, in display order.
pub const PALETTE: [&str; 11] = [
    GREEN_TERMINAL,
    GREEN_BACKGROUND,
    GREEN_DARK,
    GREEN_LEAVES,
    GREEN_MINIMAP,
    RED_ROCK,
    ORANGE_COPPER,
    YELLOW_SKY,
    PURPLE_LIGHT,
    BLUE_SUNSET,
    GRAY_DARK,
];

/// Default shape colour before the user picks a swatch.
pub const DEFAULT_COLOUR: &str = "#000000";
