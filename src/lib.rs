//! Editing core for an interactive rectangle board.
//!
//! The crate owns everything between raw pointer input and the rendered
//! scene: mapping client coordinates into the board's logical space, storing
//! shapes, hit-testing them, and applying move, resize, and rotate drags. The
//! host forwards pointer events and tool changes to [`engine::EngineCore`] and
//! redraws from [`engine::EngineCore::snapshot`] whenever an
//! [`engine::Action::RenderNeeded`] comes back.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Tool-mode controller and testable [`engine::EngineCore`] |
//! | [`doc`] | Shape store and shape geometry |
//! | [`camera`] | Points and the client-to-logical screen transform |
//! | [`input`] | Tools, pointer events, and the drag state machine |
//! | [`hit`] | Hit-testing against shapes and selection handles |
//! | [`overlay`] | Selection template, anchors, and rotation handle |
//! | [`transform`] | Pure move/resize/rotate geometry |
//! | [`config`] | Environment-driven editor settings |
//! | [`script`] | Replayable input scripts |
//! | [`consts`] | Shared numeric constants (handle sizes, minimum draw size) |

pub mod camera;
pub mod config;
pub mod consts;
pub mod doc;
pub mod engine;
pub mod error;
pub mod hit;
pub mod input;
pub mod overlay;
pub mod script;
pub mod transform;
