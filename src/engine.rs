use serde::Serialize;
use tracing::{debug, trace, warn};

use crate::camera::Point;
use crate::config::EditorConfig;
use crate::doc::{Geometry, Shape, ShapeId, ShapeStore};
use crate::hit::{self, Hit, HitPart};
use crate::input::{CursorIcon, DragSession, InputState, PointerEvent, Tool, UiState};
use crate::overlay::{Circle, SelectionOverlay, TemplateOutline};
use crate::transform;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    ShapeCreated(Shape),
    ShapeUpdated { id: ShapeId, geometry: Geometry },
    ShapeDeleted { id: ShapeId },
    SelectionChanged(Option<ShapeId>),
    SetCursor(CursorIcon),
    RenderNeeded,
}

/// Read-only view of everything the renderer draws.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub tool: Tool,
    pub selected_id: Option<ShapeId>,
    /// Shapes in store order (newest first).
    pub shapes: Vec<Shape>,
    pub template: TemplateOutline,
    pub anchors: Vec<Circle>,
    pub rotation_handle: Option<Circle>,
}

/// Tool-mode controller: routes pointer events to hit-testing and transforms
/// and keeps the store, selection, and overlay consistent.
#[derive(Debug, Clone, Default)]
pub struct EngineCore {
    pub store: ShapeStore,
    pub ui: UiState,
    pub input: InputState,
    pub overlay: SelectionOverlay,
    pub config: EditorConfig,
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: EditorConfig) -> Self {
        Self { config, ..Self::default() }
    }

    // --- Tool ---

    /// Switch the active tool.
    ///
    /// Any interaction in progress is abandoned: a drawing preview is dropped,
    /// and a select drag keeps whatever geometry it has already written.
    /// Switching to [`Tool::Rectangle`] also clears the selection.
    pub fn set_tool(&mut self, tool: Tool) -> Vec<Action> {
        if tool == self.ui.tool {
            return Vec::new();
        }
        let mut actions = Vec::new();
        if self.input.is_active() {
            debug!(from = ?self.ui.tool, to = ?tool, state = ?self.input, "tool changed mid-drag; cancelling");
            self.input = InputState::Idle;
            actions.push(Action::SetCursor(CursorIcon::Default));
        }
        debug!(?tool, "tool selected");
        self.ui.tool = tool;
        if tool == Tool::Rectangle {
            actions.extend(self.clear_selection());
        }
        self.refresh_overlay();
        actions.push(Action::RenderNeeded);
        actions
    }

    // --- Pointer input ---

    pub fn on_pointer_down(&mut self, event: PointerEvent) -> Vec<Action> {
        let Some(p) = event.logical() else {
            warn!(?event, "pointer down with degenerate transform; ignoring");
            return Vec::new();
        };
        match self.ui.tool {
            Tool::Rectangle => self.begin_drawing(p),
            Tool::Select => self.begin_select(p),
        }
    }

    pub fn on_pointer_move(&mut self, event: PointerEvent) -> Vec<Action> {
        let Some(p) = event.logical() else {
            warn!(?event, "pointer move with degenerate transform; ignoring");
            return Vec::new();
        };
        match self.input {
            InputState::Idle => Vec::new(),
            InputState::Drawing { first_corner, .. } => {
                self.input = InputState::Drawing { first_corner, last: p };
                self.overlay = SelectionOverlay::drawing(&transform::preview_rect(first_corner, p));
                vec![Action::RenderNeeded]
            }
            InputState::MovingShape(mut session) => {
                session.last = p;
                self.input = InputState::MovingShape(session);
                let geometry = transform::move_by(&session.start, session.drag_start, p);
                self.write_back(session.id, geometry)
            }
            InputState::ResizingShape { mut session, anchor } => {
                session.last = p;
                self.input = InputState::ResizingShape { session, anchor };
                let geometry = transform::resize(&session.start, anchor, session.drag_start, p);
                self.write_back(session.id, geometry)
            }
            InputState::RotatingShape(mut session) => {
                session.last = p;
                self.input = InputState::RotatingShape(session);
                let geometry = transform::rotate(&session.start, p);
                self.write_back(session.id, geometry)
            }
        }
    }

    /// End the current interaction.
    ///
    /// A release with a degenerate transform still ends it, using the last
    /// pointer position seen during the drag.
    pub fn on_pointer_up(&mut self, event: PointerEvent) -> Vec<Action> {
        let released_at = event.logical();
        match std::mem::take(&mut self.input) {
            InputState::Idle => Vec::new(),
            InputState::Drawing { first_corner, last } => self.finish_drawing(first_corner, released_at.unwrap_or(last)),
            InputState::MovingShape(_) | InputState::ResizingShape { .. } | InputState::RotatingShape(_) => {
                self.refresh_overlay();
                vec![Action::SetCursor(CursorIcon::Default), Action::RenderNeeded]
            }
        }
    }

    // --- Commands ---

    /// Remove the selected shape. Does nothing mid-drag or with no selection.
    pub fn delete_selected(&mut self) -> Vec<Action> {
        if self.input.is_active() {
            return Vec::new();
        }
        let Some(id) = self.ui.selected_id else {
            return Vec::new();
        };
        let mut actions = self.clear_selection();
        if self.store.remove(id).is_some() {
            debug!(id, "shape deleted");
            actions.push(Action::ShapeDeleted { id });
        }
        actions.push(Action::RenderNeeded);
        actions
    }

    // --- Queries ---

    /// The currently selected shape, if any.
    #[must_use]
    pub fn selection(&self) -> Option<ShapeId> {
        self.ui.selected_id
    }

    #[must_use]
    pub fn tool(&self) -> Tool {
        self.ui.tool
    }

    /// Look up a shape by id.
    #[must_use]
    pub fn shape(&self, id: ShapeId) -> Option<&Shape> {
        self.store.get(id)
    }

    /// Capture everything the renderer needs.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            tool: self.ui.tool,
            selected_id: self.ui.selected_id,
            shapes: self.store.shapes().to_vec(),
            template: self.overlay.template,
            anchors: self.overlay.anchors.clone(),
            rotation_handle: self.overlay.rotation_handle,
        }
    }

    // --- Internals ---

    fn begin_drawing(&mut self, p: Point) -> Vec<Action> {
        self.input = InputState::Drawing { first_corner: p, last: p };
        self.overlay = SelectionOverlay::hidden();
        vec![Action::RenderNeeded]
    }

    fn finish_drawing(&mut self, first_corner: Point, end: Point) -> Vec<Action> {
        self.refresh_overlay();
        let geometry = transform::preview_rect(first_corner, end);
        let min = self.config.min_draw_size;
        // A NaN extent fails both comparisons and is discarded.
        let big_enough = geometry.width >= min && geometry.height >= min;
        if !big_enough {
            debug!(width = geometry.width, height = geometry.height, "drawn rectangle below minimum size; discarded");
            return vec![Action::RenderNeeded];
        }
        let shape = self.store.create(geometry, &self.config.default_color);
        debug!(id = shape.id, x = shape.x, y = shape.y, width = shape.width, height = shape.height, "shape created");
        vec![Action::ShapeCreated(shape), Action::RenderNeeded]
    }

    fn begin_select(&mut self, p: Point) -> Vec<Action> {
        let hit = hit::hit_test(p, &self.store, self.ui.selected_id, &self.overlay);
        let Some(Hit { shape_id, part }) = hit else {
            self.input = InputState::Idle;
            let mut actions = self.clear_selection();
            actions.push(Action::RenderNeeded);
            return actions;
        };
        let Some(shape) = self.store.get(shape_id) else {
            warn!(id = shape_id, "hit shape missing from store; clearing selection");
            return self.abort_drag();
        };
        let session = DragSession::new(shape_id, p, shape.geometry());

        let mut actions = Vec::new();
        if self.ui.selected_id != Some(shape_id) {
            debug!(id = shape_id, "shape selected");
            self.ui.selected_id = Some(shape_id);
            actions.push(Action::SelectionChanged(Some(shape_id)));
        }

        let cursor = match part {
            HitPart::Body => {
                self.input = InputState::MovingShape(session);
                CursorIcon::Move
            }
            HitPart::Anchor(anchor) => {
                self.input = InputState::ResizingShape { session, anchor };
                anchor.cursor()
            }
            HitPart::RotateHandle => {
                self.input = InputState::RotatingShape(session);
                CursorIcon::Grabbing
            }
        };
        self.refresh_overlay();
        actions.push(Action::SetCursor(cursor));
        actions.push(Action::RenderNeeded);
        actions
    }

    /// Store `geometry` for the dragged shape and rebuild the overlay.
    fn write_back(&mut self, id: ShapeId, geometry: Geometry) -> Vec<Action> {
        match self.store.replace_geometry(id, geometry) {
            Ok(shape) => {
                trace!(
                    id,
                    x = shape.x,
                    y = shape.y,
                    width = shape.width,
                    height = shape.height,
                    rotation = shape.rotation_deg,
                    "shape transformed"
                );
                self.refresh_overlay();
                vec![Action::ShapeUpdated { id, geometry: shape.geometry() }, Action::RenderNeeded]
            }
            Err(e) => {
                warn!(error = %e, "drag session is stale; aborting and clearing selection");
                self.abort_drag()
            }
        }
    }

    fn abort_drag(&mut self) -> Vec<Action> {
        self.input = InputState::Idle;
        let mut actions = self.clear_selection();
        actions.push(Action::SetCursor(CursorIcon::Default));
        actions.push(Action::RenderNeeded);
        actions
    }

    fn clear_selection(&mut self) -> Vec<Action> {
        self.overlay = SelectionOverlay::hidden();
        if self.ui.selected_id.take().is_some() {
            debug!("selection cleared");
            return vec![Action::SelectionChanged(None)];
        }
        Vec::new()
    }

    /// Rebuild the overlay from the current selection.
    fn refresh_overlay(&mut self) {
        self.overlay = match self.ui.selected_id.and_then(|id| self.store.get(id)) {
            Some(shape) => SelectionOverlay::for_selection(&shape.geometry(), &self.config),
            None => SelectionOverlay::hidden(),
        };
    }
}
