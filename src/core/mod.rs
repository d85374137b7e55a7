//=========================================================================
// Core Subsystems
//
// Runtime-independent heart of the bridge: everything here works the
// same whether input arrives from a window or from a headless test.
//
// Responsibilities:
// - Define the module collaborator seam (`module`)
// - Name and shape every outgoing intent (`bridge`)
// - Translate pointer gestures into camera intents (`input`)
// - Track input bindings per surface (`surface`)
// - Fetch tileset bytes off-thread (`resources`)
//
// Notes:
// The platform layer sits on top of these modules; nothing in `core`
// reaches back into it. All module communication flows one way, through
// `EventBridge` into a `ModuleInstance`.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod bridge;
pub mod input;
pub mod module;
pub mod resources;
pub mod surface;

//=== Public API ==========================================================

pub use bridge::{EventBridge, Intent, Payload, WireValue};
pub use input::{ButtonCodes, InputTranslator, PointerEvent, WheelDelta};
pub use module::{ModuleInstance, QueuedInstance};
pub use resources::{ResourceError, TilesetLoad, TilesetLoader};
pub use surface::{BindingId, Dispatch, Surface};
