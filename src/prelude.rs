//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use mosaic_bridge::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Editor facade
pub use crate::editor::{Editor, EditorBuilder};

// Module seam
pub use crate::core::module::{ModuleInstance, QueuedInstance};

// Event catalogue
pub use crate::core::bridge::{EventBridge, Intent, Payload, WireValue};

// Input translation
pub use crate::core::input::{ButtonCodes, InputTranslator, PointerEvent, PointerState, WheelDelta};

// Surface bindings
pub use crate::core::surface::{BindingId, Dispatch, Surface};

// Resource loading
pub use crate::core::resources::{ResourceError, TilesetLoad, TilesetLoader};

// Platform errors
pub use crate::platform::PlatformError;
