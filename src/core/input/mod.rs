//=========================================================================
// Input Translation
//=========================================================================
//
// Turns raw pointer and wheel input into camera intents.
//
// Architecture:
//   InputTranslator
//     ├─ PointerState (last position + drag flag)
//     └─ EventBridge  (camera.TranslateBy / camera.ZoomBy)
//
// Flow:
//   press(secondary) → arm drag → move → delta → TranslateBy(-dx, dy)
//   wheel            → sign(delta_y) → ZoomBy(-sign)
//
// The event types carry the two-code button identification scheme
// (`which` and `button`); translation state never outlives a binding.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod event;
pub mod translator;

//=== Public API ==========================================================

pub use event::{ButtonCodes, PointerEvent, WheelDelta};
pub use translator::{InputTranslator, PointerState};
