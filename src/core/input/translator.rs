//=========================================================================
// Input Translator
//
// Stateful conversion of pointer/wheel input into camera intents.
//
// Architecture:
//   PointerEvent / WheelDelta → InputTranslator → EventBridge (camera.*)
//
// Drag tracking: only the secondary button starts a drag. While dragging,
// each move emits one camera.TranslateBy with the horizontal delta
// inverted and the vertical delta preserved (dragging right pans the
// camera view left; vertical follows the cursor). The tracked position
// updates before the emit, so consecutive deltas telescope without
// double-counting. Any release ends the drag, whichever button lifted.
//
// Handlers are synchronous and infallible: each call finishes before the
// surface dispatches the next event, and the only side effect is the
// emitted intent.
//
//=========================================================================

//=== External Crates =====================================================

use log::trace;

//=== Internal Dependencies ===============================================

use super::event::{PointerEvent, WheelDelta};
use crate::core::bridge::EventBridge;

//=== PointerState ========================================================

/// Drag-tracking state for one binding.
///
/// While `dragging` is true, `last_x`/`last_y` hold the most recently
/// processed pointer position; deltas are only meaningful then. The
/// state resets on release and on binding teardown.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerState {
    /// Last processed horizontal position.
    pub last_x: f32,

    /// Last processed vertical position.
    pub last_y: f32,

    /// True between a secondary press and the next release.
    pub dragging: bool,
}

//=== InputTranslator =====================================================

/// Converts raw pointer and wheel input into camera intents.
///
/// Owns the pointer state for one binding and emits through the bridge
/// it was built over. One translator serves one binding; the surface
/// dispatches events into it in arrival order.
pub struct InputTranslator {
    bridge: EventBridge,
    state: PointerState,
}

impl InputTranslator {
    //--- Construction -----------------------------------------------------

    /// Creates a translator emitting through the given bridge.
    pub fn new(bridge: EventBridge) -> Self {
        Self {
            bridge,
            state: PointerState::default(),
        }
    }

    //--- Handlers ---------------------------------------------------------

    /// Pointer press: a secondary press arms dragging at the pressed
    /// position. Any other button changes nothing and emits nothing.
    pub fn on_press(&mut self, event: &PointerEvent) {
        if !event.buttons.is_secondary() {
            return;
        }

        self.state.last_x = event.x;
        self.state.last_y = event.y;
        self.state.dragging = true;

        trace!("Drag armed at ({}, {})", event.x, event.y);
    }

    /// Pointer release: unconditionally ends the drag, regardless of
    /// which button released. A different button lifted mid-drag still
    /// terminates it; that is the accepted policy.
    pub fn on_release(&mut self, _event: &PointerEvent) {
        if self.state.dragging {
            trace!("Drag ended");
        }
        self.state.dragging = false;
    }

    /// Pointer move: no-op unless dragging. While dragging, emits one
    /// `camera.TranslateBy` for the step since the last processed
    /// position, horizontal sign inverted, vertical sign preserved.
    pub fn on_move(&mut self, event: &PointerEvent) {
        if !self.state.dragging {
            return;
        }

        let dx = event.x - self.state.last_x;
        let dy = event.y - self.state.last_y;

        // Record before emitting so the next step never double-counts
        self.state.last_x = event.x;
        self.state.last_y = event.y;

        self.bridge.set_camera_translation_by(-dx, dy);
    }

    /// Wheel: emits one `camera.ZoomBy` with the negated scroll
    /// direction. Scrolling down zooms out, scrolling up zooms in, a
    /// zero delta emits a zero step.
    pub fn on_wheel(&mut self, wheel: &WheelDelta) {
        self.bridge.set_camera_zoom_by(-wheel.sign());
    }

    //--- State Access -----------------------------------------------------

    /// True while a secondary drag is in progress.
    pub fn dragging(&self) -> bool {
        self.state.dragging
    }

    /// Clears drag state. Called on binding teardown.
    pub(crate) fn reset(&mut self) {
        self.state.dragging = false;
    }

    //--- Test Accessors ---------------------------------------------------

    #[cfg(test)]
    pub(crate) fn state(&self) -> PointerState {
        self.state
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
