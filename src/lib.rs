//=========================================================================
// Mosaic Bridge - Library Root
//
// This crate defines the public API surface of the Mosaic bridge: the
// embedding host that feeds the Mosaic tile map renderer with input
// gestures, resource loads, and window lifecycle events.
//
// Responsibilities:
// - Expose the editor interface (`Editor`, `EditorBuilder`)
// - Keep internal modules (like `platform`) hidden from end users
// - Provide clean separation between the high-level editor facade
//   and lower-level subsystems (input translation, event catalogue,
//   OS integration)
//
// Typical usage:
// ```no_run
// use std::sync::Arc;
// use mosaic_bridge::prelude::*;
//
// fn main() {
//     let instance = Arc::new(QueuedInstance::new());
//     let mut editor = EditorBuilder::new().build(instance);
//     editor.bind();
//     editor.run().expect("editor window failed");
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` contains the runtime-independent bridge systems (intents, input
// translation, surface bindings, resource loading). It is exposed
// publicly for embedder-level extensibility, but normal application code
// will mostly use the top-level `Editor` facade.
//
// `prelude` re-exports the commonly used types for glob import.
//
pub mod core;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `platform` contains OS-specific logic (window, Winit integration,
// event loop, etc.) and is kept private, as it is not part of the
// public API surface.
//
// `editor` defines the main entry point and wiring logic.
//
mod platform;
mod editor;

//--- Public Exports ------------------------------------------------------
//
// Re-exports the editor facade as the main entry point for applications,
// plus the error type its `run()` returns. This allows users to simply
// `use mosaic_bridge::EditorBuilder;` without having to know the
// internal module structure.
//
pub use editor::{Editor, EditorBuilder};
pub use platform::PlatformError;
