use records::{ArcMode, ModuleRecord, ModuleSummary, ResourceCategory, ShapeRecord};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::consts::{DEFAULT_COLOUR, NAVBAR_HEIGHT, NAVBAR_X};
use crate::form::{self, FieldEdit, FormField};
use crate::gallery::{ShapeGallery, ShapeId};
use crate::grid::{GridFrame, Point};
use crate::panel::{BuilderPanels, MenuScreen, Message, NavCommand, Panel};
use crate::placement::{Placement, PlacementOptions, ShapeAccumulator, Tool};
use crate::render::{self, CanvasSurface};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    RenderNeeded,
    ShapeCompleted(ShapeRecord),
    ShapeDeleted(ShapeId),
    /// Fetch the module catalogue and hand it to [`EditorCore::apply_module_list`].
    ListModulesRequested,
    /// Fetch one module and hand it to [`EditorCore::apply_loaded_module`].
    LoadModuleRequested(String),
    /// Store this record and report the new id via [`EditorCore::apply_saved`].
    SaveRequested(ModuleRecord),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Menu,
    Builder,
}

/// Everything the editor knows. Panels read it; only [`EditorCore`] writes it.
#[derive(Debug, Clone)]
pub struct EditorState {
    pub screen: Screen,
    pub tool: Tool,
    pub colour: String,
    /// Index of the next click in the current placement sequence.
    pub click_count: u32,
    pub circle_mode: bool,
    pub arc_mode: ArcMode,
    /// Snap step in grid units; zero disables snapping.
    pub grid_snap: f64,
    pub record: ModuleRecord,
    pub gallery: ShapeGallery,
    pub accumulator: ShapeAccumulator,
    pub frame: GridFrame,
    pub catalogue: Vec<ModuleSummary>,
    /// Id of the module last loaded from the store.
    pub loaded: Option<String>,
    pub status: String,
}

impl Default for EditorState {
    fn default() -> Self {
        let record = ModuleRecord::template();
        let mut frame = GridFrame::new(Point::new(NAVBAR_X, NAVBAR_HEIGHT));
        frame.rescale(record.width, record.height);
        Self {
            screen: Screen::Menu,
            tool: Tool::Pointer,
            colour: DEFAULT_COLOUR.to_owned(),
            click_count: 0,
            circle_mode: false,
            arc_mode: ArcMode::Chord,
            grid_snap: 0.0,
            record,
            gallery: ShapeGallery::new(),
            accumulator: ShapeAccumulator::new(),
            frame,
            catalogue: Vec::new(),
            loaded: None,
            status: String::new(),
        }
    }
}

/// Core editor state: all logic that doesn't depend on the canvas element.
///
/// Separated from `Editor` so it can be tested without WASM/browser dependencies.
#[derive(Default)]
pub struct EditorCore {
    pub state: EditorState,
    menu: MenuScreen,
    panels: BuilderPanels,
}

impl EditorCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Queries ---

    #[must_use]
    pub fn state(&self) -> &EditorState {
        &self.state
    }

    #[must_use]
    pub fn record(&self) -> &ModuleRecord {
        &self.state.record
    }

    #[must_use]
    pub fn gallery(&self) -> &ShapeGallery {
        &self.state.gallery
    }

    #[must_use]
    pub fn menu(&self) -> &MenuScreen {
        &self.menu
    }

    #[must_use]
    pub fn panels(&self) -> &BuilderPanels {
        &self.panels
    }

    // --- Input ---

    /// Route a click at CSS pixel `(x, y)` to whatever is under it.
    pub fn handle_click(&mut self, x: f64, y: f64) -> Vec<Action> {
        let p = Point::new(x, y);
        let message = match self.state.screen {
            Screen::Menu => self.menu.handle_click(&self.state, p),
            Screen::Builder => self.panels.route(&self.state, p),
        };
        match message {
            Some(message) => self.apply(message),
            None => Vec::new(),
        }
    }

    /// Apply a panel message.
    pub fn apply(&mut self, message: Message) -> Vec<Action> {
        match message {
            Message::OpenModuleBuilder => {
                self.state.screen = Screen::Builder;
                vec![Action::ListModulesRequested, Action::RenderNeeded]
            }
            Message::SelectColour(colour) => {
                colour.clone_into(&mut self.state.colour);
                vec![Action::RenderNeeded]
            }
            Message::SelectShape(kind) => {
                let tool = if self.state.tool == Tool::Place(kind) { Tool::Pointer } else { Tool::Place(kind) };
                self.set_tool(tool);
                vec![Action::RenderNeeded]
            }
            Message::ToggleCircleMode => {
                self.state.circle_mode = !self.state.circle_mode;
                vec![Action::RenderNeeded]
            }
            Message::SetArcMode(mode) => {
                self.state.arc_mode = mode;
                vec![Action::RenderNeeded]
            }
            Message::SetGridSnap(step) => {
                self.state.grid_snap = step.max(0.0);
                vec![Action::RenderNeeded]
            }
            Message::DeleteShape(id) => self.delete_shape(id),
            Message::CanvasClick(p) => self.place_at(p),
            Message::TogglePressurized => self.toggle_pressurized(),
            Message::LoadModule(id) => vec![Action::LoadModuleRequested(id)],
            Message::Navbar(cmd) => self.navbar(cmd),
        }
    }

    /// Set the active tool, abandoning any half-placed shape.
    pub fn set_tool(&mut self, tool: Tool) {
        self.state.tool = tool;
        self.state.click_count = 0;
        self.state.accumulator.reset();
    }

    /// Set the arc mode from its wire name. Unknown names fall back to CHORD.
    pub fn set_arc_mode_str(&mut self, raw: &str) -> Vec<Action> {
        let mode = raw.parse::<ArcMode>().unwrap_or_else(|e| {
            log::warn!("{e}; using CHORD");
            ArcMode::Chord
        });
        self.apply(Message::SetArcMode(mode))
    }

    fn place_at(&mut self, pointer: Point) -> Vec<Action> {
        let Tool::Place(kind) = self.state.tool else {
            return Vec::new();
        };
        let state = &mut self.state;
        let snapped = state.frame.snap(pointer, state.grid_snap * state.frame.unit_px());
        let grid = state.frame.to_grid(snapped);
        let options = PlacementOptions { color: &state.colour, circle_mode: state.circle_mode, arc_mode: state.arc_mode };

        match state.accumulator.handle_click(kind, state.click_count, grid, pointer, &options) {
            Ok(Placement::Pending) => {
                state.click_count += 1;
                vec![Action::RenderNeeded]
            }
            Ok(Placement::Complete(shape)) => {
                state.gallery.push(shape.clone());
                state.record.shapes = state.gallery.records();
                self.set_tool(Tool::Pointer);
                vec![Action::ShapeCompleted(shape), Action::RenderNeeded]
            }
            Err(e) => {
                log::warn!("shape placement rejected: {e}");
                self.set_tool(Tool::Pointer);
                vec![Action::RenderNeeded]
            }
        }
    }

    fn delete_shape(&mut self, id: ShapeId) -> Vec<Action> {
        if self.state.gallery.remove(id).is_none() {
            return Vec::new();
        }
        self.state.record.shapes = self.state.gallery.records();
        vec![Action::ShapeDeleted(id), Action::RenderNeeded]
    }

    fn navbar(&mut self, cmd: NavCommand) -> Vec<Action> {
        match cmd {
            NavCommand::New => {
                self.state.record = ModuleRecord::template();
                self.state.gallery.clear();
                self.state.loaded = None;
                self.state.status.clear();
                self.set_tool(Tool::Pointer);
                self.rescale();
                vec![Action::RenderNeeded]
            }
            NavCommand::Save => {
                self.state.record.shapes = self.state.gallery.records();
                vec![Action::SaveRequested(self.state.record.clone())]
            }
            NavCommand::Load => vec![Action::ListModulesRequested],
            NavCommand::Menu => {
                self.set_tool(Tool::Pointer);
                self.state.screen = Screen::Menu;
                vec![Action::RenderNeeded]
            }
        }
    }

    fn rescale(&mut self) {
        let (w, h) = (self.state.record.width, self.state.record.height);
        self.state.frame.rescale(w, h);
    }

    // --- Form ---

    /// Apply raw text typed into a metadata input.
    pub fn edit_field(&mut self, field: FormField, raw: &str) -> Vec<Action> {
        match form::apply_field(&mut self.state.record, field, raw) {
            FieldEdit::Ignored => Vec::new(),
            FieldEdit::Updated => vec![Action::RenderNeeded],
            FieldEdit::Resized => {
                self.rescale();
                vec![Action::RenderNeeded]
            }
        }
    }

    /// Apply a resource name/quantity pair typed into one of the resource inputs.
    pub fn edit_resource(&mut self, category: ResourceCategory, name: &str, raw: &str) -> Vec<Action> {
        match form::apply_resource(&mut self.state.record, category, name, raw) {
            FieldEdit::Ignored => Vec::new(),
            FieldEdit::Updated | FieldEdit::Resized => vec![Action::RenderNeeded],
        }
    }

    pub fn toggle_pressurized(&mut self) -> Vec<Action> {
        self.state.record.pressurized = !self.state.record.pressurized;
        vec![Action::RenderNeeded]
    }

    // --- Host callbacks ---

    /// Result of a [`Action::ListModulesRequested`]. `None` means the fetch failed.
    pub fn apply_module_list(&mut self, modules: Option<Vec<ModuleSummary>>) -> Vec<Action> {
        let Some(modules) = modules else {
            log::warn!("module list unavailable; keeping {} cached entries", self.state.catalogue.len());
            return Vec::new();
        };
        self.state.catalogue = modules;
        vec![Action::RenderNeeded]
    }

    /// Result of a [`Action::LoadModuleRequested`]. `None` means the module
    /// could not be fetched or decoded.
    pub fn apply_loaded_module(&mut self, id: &str, module: Option<ModuleRecord>) -> Vec<Action> {
        let Some(record) = module else {
            log::warn!("module {id} could not be loaded");
            self.state.status = format!("Could not load {id}");
            return vec![Action::RenderNeeded];
        };
        log::info!("loaded module {id} ({} shapes)", record.shapes.len());
        self.state.gallery.load(record.shapes.clone());
        self.state.status = format!("Loaded {}", record.name);
        self.state.record = record;
        self.state.loaded = Some(id.to_owned());
        self.set_tool(Tool::Pointer);
        self.rescale();
        vec![Action::RenderNeeded]
    }

    /// Result of a [`Action::SaveRequested`]: the id the store assigned.
    pub fn apply_saved(&mut self, id: &str) -> Vec<Action> {
        log::info!("module saved as {id}");
        self.state.status = format!("Saved as {id}");
        self.state.loaded = Some(id.to_owned());
        vec![Action::ListModulesRequested, Action::RenderNeeded]
    }
}

/// The editor bound to a browser canvas element.
pub struct Editor {
    canvas: HtmlCanvasElement,
    pub core: EditorCore,
}

impl Editor {
    /// Create a new editor bound to the given canvas element.
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement) -> Self {
        Self { canvas, core: EditorCore::new() }
    }

    // --- Delegated input ---

    pub fn handle_click(&mut self, x: f64, y: f64) -> Vec<Action> {
        self.core.handle_click(x, y)
    }

    pub fn edit_field(&mut self, field: FormField, raw: &str) -> Vec<Action> {
        self.core.edit_field(field, raw)
    }

    pub fn edit_resource(&mut self, category: ResourceCategory, name: &str, raw: &str) -> Vec<Action> {
        self.core.edit_resource(category, name, raw)
    }

    pub fn set_arc_mode_str(&mut self, raw: &str) -> Vec<Action> {
        self.core.set_arc_mode_str(raw)
    }

    // --- Delegated host callbacks ---

    pub fn apply_module_list(&mut self, modules: Option<Vec<ModuleSummary>>) -> Vec<Action> {
        self.core.apply_module_list(modules)
    }

    pub fn apply_loaded_module(&mut self, id: &str, module: Option<ModuleRecord>) -> Vec<Action> {
        self.core.apply_loaded_module(id, module)
    }

    pub fn apply_saved(&mut self, id: &str) -> Vec<Action> {
        self.core.apply_saved(id)
    }

    // --- Render ---

    /// Draw the current state to the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the 2D context is unavailable or a draw call fails.
    pub fn render(&self) -> Result<(), JsValue> {
        let Some(ctx) = self.canvas.get_context("2d")? else {
            return Err(JsValue::from_str("2d context unavailable"));
        };
        let ctx = ctx.dyn_into::<CanvasRenderingContext2d>()?;
        let mut surface = CanvasSurface::new(&ctx);
        render::draw(&mut surface, &self.core).map_err(|e| JsValue::from_str(&e.to_string()))
    }
}
