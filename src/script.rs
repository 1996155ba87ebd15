//! Replay scripts: a recorded sequence of tool changes and pointer events.
//!
//! Scripts drive an [`EngineCore`] without a browser. The `shapeboard` binary
//! reads one from JSON and prints the resulting [`Snapshot`].
//!
//! The screen mapping is given either as a raw `transform` or as a `surface`
//! layout (client rect plus `viewBox`); `surface` wins when both are present.
//!
//! ```json
//! {
//!   "surface": {
//!     "left": 0, "top": 0, "width": 800, "height": 600,
//!     "view_box": { "min_x": 0, "min_y": 0, "width": 800, "height": 600 }
//!   },
//!   "steps": [
//!     { "press": { "x": 10, "y": 10 } },
//!     { "release": { "x": 50, "y": 40 } },
//!     { "set_tool": "SELECT" }
//!   ]
//! }
//! ```

#[cfg(test)]
#[path = "script_test.rs"]
mod script_test;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::camera::{Point, ScreenTransform, SurfaceLayout};
use crate::engine::{Action, EngineCore, Snapshot};
use crate::input::{PointerEvent, Tool};

/// One recorded input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    SetTool(Tool),
    /// Pointer pressed at a client-space point.
    Press(Point),
    Move(Point),
    Release(Point),
    DeleteSelected,
}

/// A replayable session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Script {
    /// Screen transform applied to every pointer step. Identity when absent.
    #[serde(default)]
    pub transform: ScreenTransform,
    /// Surface layout to derive the transform from instead.
    pub surface: Option<SurfaceLayout>,
    pub steps: Vec<Step>,
}

impl Script {
    /// Transform applied to every pointer step.
    #[must_use]
    pub fn screen_transform(&self) -> ScreenTransform {
        match self.surface {
            Some(layout) => layout.transform(),
            None => self.transform,
        }
    }
}

/// Feed every step of `script` to `core`, returning all emitted actions in order.
pub fn replay(core: &mut EngineCore, script: &Script) -> Vec<Action> {
    let transform = script.screen_transform();
    let mut actions = Vec::new();
    for (index, step) in script.steps.iter().enumerate() {
        let emitted = match *step {
            Step::SetTool(tool) => core.set_tool(tool),
            Step::Press(p) => core.on_pointer_down(PointerEvent::new(p, transform)),
            Step::Move(p) => core.on_pointer_move(PointerEvent::new(p, transform)),
            Step::Release(p) => core.on_pointer_up(PointerEvent::new(p, transform)),
            Step::DeleteSelected => core.delete_selected(),
        };
        debug!(index, ?step, actions = emitted.len(), "replayed step");
        actions.extend(emitted);
    }
    actions
}

/// Replay `script` on `core` and return the final snapshot.
#[must_use]
pub fn replay_to_snapshot(core: &mut EngineCore, script: &Script) -> Snapshot {
    replay(core, script);
    core.snapshot()
}
