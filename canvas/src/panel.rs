//! Panels: the independently drawn, independently clickable regions of the editor.
//!
//! Panels are layout only. They read [`EditorState`] to decide what to draw
//! and turn clicks into [`Message`]s; the editor applies the message. No
//! panel mutates state directly.

#[cfg(test)]
#[path = "panel_test.rs"]
mod panel_test;

use records::{ArcMode, ResourceCategory, ShapeKind};

use crate::consts::{
    GRAY_DARK, GREEN_BACKGROUND, GREEN_TERMINAL, NAVBAR_HEIGHT, NAVBAR_WIDTH, NAVBAR_X, PALETTE, PANEL_FILL,
    PANEL_STROKE, SCREEN_HEIGHT, SCREEN_WIDTH,
};
use crate::engine::EditorState;
use crate::form::{FormField, field_value};
use crate::gallery::ShapeId;
use crate::grid::{Point, Rect};
use crate::placement::Tool;
use crate::render::{DrawResult, Surface, draw_pending_marker, draw_shape};

const TEXT_SIZE: f64 = 14.0;
const TITLE_SIZE: f64 = 20.0;

/// Grid snap steps offered by the options panel, in grid units. Zero is off.
pub const SNAP_STEPS: [f64; 3] = [0.0, 0.5, 1.0];

/// Navbar buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavCommand {
    New,
    Save,
    Load,
    Menu,
}

/// Event sent from a panel up to the editor.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    OpenModuleBuilder,
    SelectColour(&'static str),
    /// Selecting the active shape again drops back to the pointer.
    SelectShape(ShapeKind),
    ToggleCircleMode,
    SetArcMode(ArcMode),
    /// Snap step in grid units.
    SetGridSnap(f64),
    DeleteShape(ShapeId),
    /// Pointer position in pixels inside the module canvas.
    CanvasClick(Point),
    TogglePressurized,
    LoadModule(String),
    Navbar(NavCommand),
}

pub trait Panel {
    fn bounds(&self) -> Rect;

    /// Turn a click at `p` (inside [`Self::bounds`]) into a message, if it hit anything.
    fn handle_click(&self, state: &EditorState, p: Point) -> Option<Message>;

    /// # Errors
    ///
    /// Returns the surface's error if a drawing call fails.
    fn render(&self, state: &EditorState, surface: &mut dyn Surface) -> DrawResult;
}

/// Labelled clickable rectangle.
#[derive(Debug, Clone, PartialEq)]
pub struct Button {
    pub bounds: Rect,
    pub label: &'static str,
}

impl Button {
    #[must_use]
    pub fn new(bounds: Rect, label: &'static str) -> Self {
        Self { bounds, label }
    }

    #[must_use]
    pub fn hit(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// # Errors
    ///
    /// Returns the surface's error if a drawing call fails.
    pub fn render(&self, surface: &mut dyn Surface, active: bool) -> DrawResult {
        let fill = if active { GREEN_BACKGROUND } else { PANEL_FILL };
        surface.fill_rect(self.bounds, fill)?;
        surface.stroke_rect(self.bounds, GREEN_TERMINAL)?;
        let at = Point::new(self.bounds.x + 8.0, self.bounds.center().y + TEXT_SIZE / 3.0);
        surface.text(self.label, at, TEXT_SIZE, GREEN_TERMINAL)
    }
}

fn frame_panel(surface: &mut dyn Surface, bounds: Rect) -> DrawResult {
    surface.fill_rect(bounds, PANEL_FILL)?;
    surface.stroke_rect(bounds, PANEL_STROKE)
}

fn title(surface: &mut dyn Surface, bounds: Rect, text: &str) -> DrawResult {
    surface.text(text, Point::new(bounds.x + 16.0, bounds.y + 28.0), TITLE_SIZE, GREEN_TERMINAL)
}

// =============================================================
// Menu
// =============================================================

/// Start screen: a title and the button that opens the module builder.
pub struct MenuScreen {
    builder: Button,
}

impl Default for MenuScreen {
    fn default() -> Self {
        Self { builder: Button::new(Rect::new(700.0, 370.0, 200.0, 60.0), "Module Builder") }
    }
}

impl Panel for MenuScreen {
    fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, SCREEN_WIDTH, SCREEN_HEIGHT)
    }

    fn handle_click(&self, _state: &EditorState, p: Point) -> Option<Message> {
        self.builder.hit(p).then_some(Message::OpenModuleBuilder)
    }

    fn render(&self, _state: &EditorState, surface: &mut dyn Surface) -> DrawResult {
        surface.text("World Builder Suite", Point::new(620.0, 300.0), 32.0, GREEN_TERMINAL)?;
        self.builder.render(surface, false)
    }
}

// =============================================================
// Colour palette
// =============================================================

pub struct ColourPalette {
    swatches: Vec<(Rect, &'static str)>,
}

impl Default for ColourPalette {
    fn default() -> Self {
        let swatches = PALETTE
            .iter()
            .enumerate()
            .map(|(i, colour)| {
                let (col, row) = (i % 2, i / 2);
                #[allow(clippy::cast_precision_loss)]
                let rect = Rect::new(40.0 + col as f64 * 130.0, 60.0 + row as f64 * 70.0, 110.0, 50.0);
                (rect, *colour)
            })
            .collect();
        Self { swatches }
    }
}

impl Panel for ColourPalette {
    fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, NAVBAR_X, SCREEN_HEIGHT)
    }

    fn handle_click(&self, _state: &EditorState, p: Point) -> Option<Message> {
        self.swatches
            .iter()
            .find(|(rect, _)| rect.contains(p))
            .map(|(_, colour)| Message::SelectColour(*colour))
    }

    fn render(&self, state: &EditorState, surface: &mut dyn Surface) -> DrawResult {
        frame_panel(surface, self.bounds())?;
        title(surface, self.bounds(), "Colours")?;
        for (rect, colour) in &self.swatches {
            surface.fill_rect(*rect, colour)?;
            if state.colour == *colour {
                surface.stroke_rect(*rect, GREEN_TERMINAL)?;
            }
        }
        Ok(())
    }
}

// =============================================================
// Shape selector
// =============================================================

pub struct ShapeSelector {
    buttons: Vec<(Button, ShapeKind)>,
}

impl Default for ShapeSelector {
    fn default() -> Self {
        let buttons = ShapeKind::ALL
            .iter()
            .enumerate()
            .map(|(i, kind)| {
                #[allow(clippy::cast_precision_loss)]
                let x = NAVBAR_X + 4.0 + i as f64 * 128.0;
                (Button::new(Rect::new(x, 728.0, 120.0, 64.0), kind.as_str()), *kind)
            })
            .collect();
        Self { buttons }
    }
}

impl Panel for ShapeSelector {
    fn bounds(&self) -> Rect {
        Rect::new(NAVBAR_X, 720.0, 640.0, 80.0)
    }

    fn handle_click(&self, _state: &EditorState, p: Point) -> Option<Message> {
        self.buttons.iter().find(|(b, _)| b.hit(p)).map(|(_, kind)| Message::SelectShape(*kind))
    }

    fn render(&self, state: &EditorState, surface: &mut dyn Surface) -> DrawResult {
        frame_panel(surface, self.bounds())?;
        for (button, kind) in &self.buttons {
            button.render(surface, state.tool == Tool::Place(*kind))?;
        }
        Ok(())
    }
}

// =============================================================
// Shape options
// =============================================================

pub struct ShapeOptions {
    circle: Button,
    snap: Button,
    arc_modes: Vec<(Button, ArcMode)>,
}

impl Default for ShapeOptions {
    fn default() -> Self {
        let modes = [(ArcMode::Chord, "CHORD"), (ArcMode::Pie, "PIE"), (ArcMode::Open, "OPEN")];
        let arc_modes = modes
            .iter()
            .enumerate()
            .map(|(i, (mode, label))| {
                #[allow(clippy::cast_precision_loss)]
                let x = 968.0 + i as f64 * 104.0;
                (Button::new(Rect::new(x, 762.0, 96.0, 32.0), *label), *mode)
            })
            .collect();
        Self {
            circle: Button::new(Rect::new(968.0, 726.0, 96.0, 32.0), "CIRCLE"),
            snap: Button::new(Rect::new(1072.0, 726.0, 200.0, 32.0), "SNAP"),
            arc_modes,
        }
    }
}

/// Snap step following `current` in [`SNAP_STEPS`], wrapping around.
#[must_use]
pub fn next_snap_step(current: f64) -> f64 {
    let idx = SNAP_STEPS.iter().position(|s| (s - current).abs() < f64::EPSILON);
    match idx {
        Some(i) => SNAP_STEPS[(i + 1) % SNAP_STEPS.len()],
        None => SNAP_STEPS[0],
    }
}

impl Panel for ShapeOptions {
    fn bounds(&self) -> Rect {
        Rect::new(NAVBAR_X + 640.0, 720.0, 320.0, 80.0)
    }

    fn handle_click(&self, state: &EditorState, p: Point) -> Option<Message> {
        if self.circle.hit(p) {
            return Some(Message::ToggleCircleMode);
        }
        if self.snap.hit(p) {
            return Some(Message::SetGridSnap(next_snap_step(state.grid_snap)));
        }
        self.arc_modes.iter().find(|(b, _)| b.hit(p)).map(|(_, mode)| Message::SetArcMode(*mode))
    }

    fn render(&self, state: &EditorState, surface: &mut dyn Surface) -> DrawResult {
        frame_panel(surface, self.bounds())?;
        self.circle.render(surface, state.circle_mode)?;
        self.snap.render(surface, state.grid_snap > 0.0)?;
        let snap_label = if state.grid_snap > 0.0 { format!("{}", state.grid_snap) } else { "off".to_owned() };
        let at = Point::new(self.snap.bounds.x + 64.0, self.snap.bounds.center().y + TEXT_SIZE / 3.0);
        surface.text(&snap_label, at, TEXT_SIZE, GREEN_TERMINAL)?;
        for (button, mode) in &self.arc_modes {
            button.render(surface, state.arc_mode == *mode)?;
        }
        Ok(())
    }
}

// =============================================================
// Layers list
// =============================================================

const LAYER_ROW_PX: f64 = 28.0;
const LAYER_FIRST_ROW_Y: f64 = 120.0;
const LAYER_ROWS: usize = 21;

pub struct LayersList;

impl LayersList {
    #[allow(clippy::cast_precision_loss)]
    fn row_y(index: usize) -> f64 {
        LAYER_FIRST_ROW_Y + index as f64 * LAYER_ROW_PX
    }

    fn delete_button(index: usize) -> Rect {
        Rect::new(NAVBAR_X + NAVBAR_WIDTH - 40.0, Self::row_y(index), 24.0, 24.0)
    }

    /// Layers that do not fit. The list always shows the newest rows, so
    /// deleting from the bottom brings hidden ones back into view.
    fn hidden(state: &EditorState) -> usize {
        state.gallery.len().saturating_sub(LAYER_ROWS)
    }
}

impl Panel for LayersList {
    fn bounds(&self) -> Rect {
        Rect::new(NAVBAR_X + 640.0, NAVBAR_HEIGHT, 320.0, 640.0)
    }

    fn handle_click(&self, state: &EditorState, p: Point) -> Option<Message> {
        state
            .gallery
            .iter()
            .skip(Self::hidden(state))
            .enumerate()
            .find(|(i, _)| Self::delete_button(*i).contains(p))
            .map(|(_, entry)| Message::DeleteShape(entry.id))
    }

    fn render(&self, state: &EditorState, surface: &mut dyn Surface) -> DrawResult {
        let bounds = self.bounds();
        frame_panel(surface, bounds)?;
        title(surface, bounds, "Layers")?;
        let hidden = Self::hidden(state);
        if hidden > 0 {
            let note = format!("+{hidden} above");
            surface.text(&note, Point::new(bounds.x + 200.0, bounds.y + 28.0), TEXT_SIZE, GREEN_TERMINAL)?;
        }
        for (i, layer) in state.gallery.layers().skip(hidden).enumerate() {
            let y = Self::row_y(i);
            surface.fill_rect(Rect::new(bounds.x + 16.0, y + 4.0, 16.0, 16.0), &layer.entry.shape.color)?;
            let label = format!("{}. {}", layer.position, layer.entry.shape.shape);
            surface.text(&label, Point::new(bounds.x + 44.0, y + 18.0), TEXT_SIZE, GREEN_TERMINAL)?;
            let delete = Self::delete_button(i);
            surface.stroke_rect(delete, GREEN_TERMINAL)?;
            surface.text("X", Point::new(delete.x + 7.0, delete.y + 17.0), TEXT_SIZE, GREEN_TERMINAL)?;
        }
        Ok(())
    }
}

// =============================================================
// Navbar
// =============================================================

pub struct Navbar {
    buttons: Vec<(Button, NavCommand)>,
}

impl Default for Navbar {
    fn default() -> Self {
        let commands = [(NavCommand::New, "NEW"), (NavCommand::Save, "SAVE"), (NavCommand::Load, "LOAD"), (NavCommand::Menu, "MENU")];
        let buttons = commands
            .iter()
            .enumerate()
            .map(|(i, (cmd, label))| {
                #[allow(clippy::cast_precision_loss)]
                let x = NAVBAR_X + 40.0 + i as f64 * 230.0;
                (Button::new(Rect::new(x, 16.0, 200.0, 48.0), *label), *cmd)
            })
            .collect();
        Self { buttons }
    }
}

impl Panel for Navbar {
    fn bounds(&self) -> Rect {
        Rect::new(NAVBAR_X, 0.0, NAVBAR_WIDTH, NAVBAR_HEIGHT)
    }

    fn handle_click(&self, _state: &EditorState, p: Point) -> Option<Message> {
        self.buttons.iter().find(|(b, _)| b.hit(p)).map(|(_, cmd)| Message::Navbar(*cmd))
    }

    fn render(&self, _state: &EditorState, surface: &mut dyn Surface) -> DrawResult {
        frame_panel(surface, self.bounds())?;
        for (button, _) in &self.buttons {
            button.render(surface, false)?;
        }
        Ok(())
    }
}

// =============================================================
// Inputs area
// =============================================================

const INPUT_X: f64 = NAVBAR_X + NAVBAR_WIDTH;
const FIELD_ROW_PX: f64 = 32.0;
const FIELD_FIRST_ROW_Y: f64 = 70.0;
const CATALOGUE_FIRST_ROW_Y: f64 = 600.0;
const CATALOGUE_ROW_PX: f64 = 24.0;
const CATALOGUE_ROWS: usize = 8;

/// Metadata form readout, resource lists, save status and the module catalogue.
///
/// Text entry itself happens in host-owned inputs; this panel shows the
/// current values and owns the pressurized toggle and catalogue rows.
pub struct InputsArea {
    pressurized: Button,
}

impl Default for InputsArea {
    #[allow(clippy::cast_precision_loss)]
    fn default() -> Self {
        let y = FIELD_FIRST_ROW_Y + FormField::ALL.len() as f64 * FIELD_ROW_PX;
        Self { pressurized: Button::new(Rect::new(INPUT_X + 16.0, y, 160.0, 28.0), "Pressurized") }
    }
}

impl InputsArea {
    #[allow(clippy::cast_precision_loss)]
    fn catalogue_row(index: usize) -> Rect {
        Rect::new(INPUT_X + 16.0, CATALOGUE_FIRST_ROW_Y + index as f64 * CATALOGUE_ROW_PX, 288.0, CATALOGUE_ROW_PX)
    }
}

impl Panel for InputsArea {
    fn bounds(&self) -> Rect {
        Rect::new(INPUT_X, 0.0, SCREEN_WIDTH - INPUT_X, SCREEN_HEIGHT)
    }

    fn handle_click(&self, state: &EditorState, p: Point) -> Option<Message> {
        if self.pressurized.hit(p) {
            return Some(Message::TogglePressurized);
        }
        state
            .catalogue
            .iter()
            .take(CATALOGUE_ROWS)
            .enumerate()
            .find(|(i, _)| Self::catalogue_row(*i).contains(p))
            .map(|(_, summary)| Message::LoadModule(summary.id.clone()))
    }

    #[allow(clippy::cast_precision_loss)]
    fn render(&self, state: &EditorState, surface: &mut dyn Surface) -> DrawResult {
        let bounds = self.bounds();
        frame_panel(surface, bounds)?;
        title(surface, bounds, "Module")?;

        for (i, field) in FormField::ALL.iter().enumerate() {
            let y = FIELD_FIRST_ROW_Y + i as f64 * FIELD_ROW_PX + 18.0;
            let line = format!("{}{}", field.label(), field_value(&state.record, *field));
            surface.text(&line, Point::new(bounds.x + 16.0, y), TEXT_SIZE, GREEN_TERMINAL)?;
        }
        self.pressurized.render(surface, state.record.pressurized)?;

        let mut y = self.pressurized.bounds.y + 56.0;
        for category in ResourceCategory::ALL {
            let Some(list) = state.record.resources(category) else {
                continue;
            };
            let items: Vec<String> = list.iter().map(|r| format!("{} {}", r.name(), r.quantity())).collect();
            let line = format!("{category}: {}", items.join(", "));
            surface.text(&line, Point::new(bounds.x + 16.0, y), TEXT_SIZE, GREEN_TERMINAL)?;
            y += 22.0;
        }

        if !state.status.is_empty() {
            surface.text(&state.status, Point::new(bounds.x + 16.0, CATALOGUE_FIRST_ROW_Y - 36.0), TEXT_SIZE, GREEN_TERMINAL)?;
        }
        surface.text("Saved modules", Point::new(bounds.x + 16.0, CATALOGUE_FIRST_ROW_Y - 8.0), TEXT_SIZE, GREEN_TERMINAL)?;
        for (i, summary) in state.catalogue.iter().take(CATALOGUE_ROWS).enumerate() {
            let row = Self::catalogue_row(i);
            let loaded = state.loaded.as_deref() == Some(summary.id.as_str());
            if loaded {
                surface.fill_rect(row, GREEN_BACKGROUND)?;
            }
            let line = format!("{} ({})", summary.name, summary.kind);
            surface.text(&line, Point::new(row.x + 4.0, row.y + 17.0), TEXT_SIZE, GREEN_TERMINAL)?;
        }
        Ok(())
    }
}

// =============================================================
// Module canvas
// =============================================================

/// Drawing area for the module: outline, finished shapes, pending clicks.
pub struct ModuleCanvas;

impl Panel for ModuleCanvas {
    fn bounds(&self) -> Rect {
        Rect::new(NAVBAR_X, NAVBAR_HEIGHT, 640.0, 640.0)
    }

    fn handle_click(&self, _state: &EditorState, p: Point) -> Option<Message> {
        Some(Message::CanvasClick(p))
    }

    fn render(&self, state: &EditorState, surface: &mut dyn Surface) -> DrawResult {
        frame_panel(surface, self.bounds())?;
        let module = state.frame.module_bounds(state.record.width, state.record.height);
        surface.fill_rect(module, GRAY_DARK)?;
        surface.stroke_rect(module, GREEN_TERMINAL)?;
        for entry in state.gallery.iter() {
            draw_shape(surface, &state.frame, &entry.shape)?;
        }
        for pair in state.accumulator.pending_params().chunks_exact(2).take(pending_points(state)) {
            let at = state.frame.to_pixels(Point::new(pair[0], pair[1]));
            draw_pending_marker(surface, at, GREEN_TERMINAL)?;
        }
        Ok(())
    }
}

/// How many of the pending params are coordinate pairs worth marking.
fn pending_points(state: &EditorState) -> usize {
    match state.accumulator.kind() {
        Some(ShapeKind::Quad | ShapeKind::Triangle) => usize::MAX,
        Some(_) => 1,
        None => 0,
    }
}

/// All builder panels, in draw order.
pub struct BuilderPanels {
    pub palette: ColourPalette,
    pub selector: ShapeSelector,
    pub options: ShapeOptions,
    pub layers: LayersList,
    pub navbar: Navbar,
    pub inputs: InputsArea,
    pub canvas: ModuleCanvas,
}

impl Default for BuilderPanels {
    fn default() -> Self {
        Self {
            palette: ColourPalette::default(),
            selector: ShapeSelector::default(),
            options: ShapeOptions::default(),
            layers: LayersList,
            navbar: Navbar::default(),
            inputs: InputsArea::default(),
            canvas: ModuleCanvas,
        }
    }
}

impl BuilderPanels {
    #[must_use]
    pub fn all(&self) -> [&dyn Panel; 7] {
        [&self.palette, &self.navbar, &self.canvas, &self.layers, &self.selector, &self.options, &self.inputs]
    }

    /// Offer a click to the panel containing it.
    #[must_use]
    pub fn route(&self, state: &EditorState, p: Point) -> Option<Message> {
        self.all().into_iter().find(|panel| panel.bounds().contains(p))?.handle_click(state, p)
    }
}
