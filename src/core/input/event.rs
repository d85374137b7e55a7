//=========================================================================
// Surface Input Events
//
// Defines the raw pointer and wheel values a surface reports.
//
// These types sit below the translator: they carry positions and button
// codes exactly as the surface saw them, with no gesture interpretation.
// Button identity uses the two legacy code families pointer sources
// report (`which`, 1-based; `button`, 0-based), because either one may
// be absent depending on the source.
//
// Responsibilities:
// - Carry pointer position and button codes per event
// - Decide secondary-button identity from whichever code is present
// - Normalize wheel scroll amounts into -1/0/+1 zoom steps
//
//=========================================================================

//=== ButtonCodes =========================================================

/// Button identity codes for one pointer event.
///
/// Sources report one or both of two conventions: `which` counts buttons
/// from 1 (1 primary, 2 middle, 3 secondary) and `button` counts from 0
/// (0 primary, 1 middle, 2 secondary). Either may be absent.
///
/// Secondary detection reads `which` when present and falls back to
/// `button` only when `which` is absent. A present `which` that is not 3
/// is final; the fallback is never consulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ButtonCodes {
    /// 1-based button code, when reported.
    pub which: Option<i32>,

    /// 0-based button code, when reported.
    pub button: Option<i32>,
}

//--- Code Constants ------------------------------------------------------

impl ButtonCodes {
    /// Primary button reported under both conventions.
    pub const PRIMARY: Self = Self {
        which: Some(1),
        button: Some(0),
    };

    /// Middle button reported under both conventions.
    pub const MIDDLE: Self = Self {
        which: Some(2),
        button: Some(1),
    };

    /// Secondary button reported under both conventions.
    pub const SECONDARY: Self = Self {
        which: Some(3),
        button: Some(2),
    };

    /// No button information (pointer moves).
    pub const NONE: Self = Self {
        which: None,
        button: None,
    };

    /// Builds codes from whatever the source reported.
    pub fn new(which: Option<i32>, button: Option<i32>) -> Self {
        Self { which, button }
    }

    /// True when these codes identify the secondary button.
    ///
    /// `which == 3` decides when `which` is present; otherwise
    /// `button == 2` decides. Absent codes never match.
    pub fn is_secondary(&self) -> bool {
        match self.which {
            Some(which) => which == 3,
            None => self.button == Some(2),
        }
    }
}

impl Default for ButtonCodes {
    fn default() -> Self {
        Self::NONE
    }
}

//=== PointerEvent ========================================================

/// One pointer event on a surface.
///
/// Coordinates are surface-local pixels, top-left origin. Button codes
/// identify the triggering button for press/release; moves carry
/// [`ButtonCodes::NONE`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// Horizontal position in surface pixels.
    pub x: f32,

    /// Vertical position in surface pixels.
    pub y: f32,

    /// Triggering button, when meaningful for the event kind.
    pub buttons: ButtonCodes,
}

impl PointerEvent {
    /// Builds a pointer event with explicit button codes.
    pub fn new(x: f32, y: f32, buttons: ButtonCodes) -> Self {
        Self { x, y, buttons }
    }

    /// Position-only event, used for pointer moves.
    pub fn at(x: f32, y: f32) -> Self {
        Self::new(x, y, ButtonCodes::NONE)
    }
}

//=== WheelDelta ==========================================================

/// One wheel event on a surface.
///
/// `delta_y` is down-positive: scrolling toward the user is positive,
/// away is negative. Platform sources with up-positive conventions are
/// flipped before reaching this type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelDelta {
    /// Vertical scroll amount, down-positive.
    pub delta_y: f64,
}

impl WheelDelta {
    /// Builds a wheel event from a down-positive delta.
    pub fn new(delta_y: f64) -> Self {
        Self { delta_y }
    }

    /// Normalized scroll direction: -1, 0, or +1.
    ///
    /// Zero maps to zero, unlike `f64::signum` which keeps the sign of
    /// signed zero. NaN also maps to zero.
    pub fn sign(&self) -> f32 {
        if self.delta_y > 0.0 {
            1.0
        } else if self.delta_y < 0.0 {
            -1.0
        } else {
            0.0
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
