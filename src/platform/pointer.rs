//=========================================================================
// Pointer Conversions
//=========================================================================
//
// Converts Winit pointer types into surface input values.
//
// Button identity maps onto the two legacy code families the translator
// reads (`which`/`button`). Wheel deltas flip sign: Winit counts
// scrolling away from the user as positive, surface deltas are
// down-positive.
//
//=========================================================================

//=== External Dependencies ===============================================

use winit::event::{MouseButton as WinitMouseButton, MouseScrollDelta};

//=== Internal Dependencies ===============================================

use crate::core::input::event::{ButtonCodes, WheelDelta};

//=== Winit Conversions ===================================================

/// Converts Winit mouse buttons to surface button codes.
///
/// Left/Middle/Right carry both code families. Auxiliary buttons
/// (Back/Forward) use the standard auxiliary numbers; `Other` codes have
/// no established `which` mapping and carry a `button` code only.
impl From<WinitMouseButton> for ButtonCodes {
    fn from(button: WinitMouseButton) -> Self {
        match button {
            WinitMouseButton::Left => ButtonCodes::PRIMARY,
            WinitMouseButton::Middle => ButtonCodes::MIDDLE,
            WinitMouseButton::Right => ButtonCodes::SECONDARY,
            WinitMouseButton::Back => ButtonCodes::new(Some(4), Some(3)),
            WinitMouseButton::Forward => ButtonCodes::new(Some(5), Some(4)),
            WinitMouseButton::Other(code) => ButtonCodes::new(None, Some(code as i32)),
        }
    }
}

/// Converts a Winit scroll delta to a down-positive wheel delta.
///
/// Line scrolling counts one line as one unit; pixel scrolling passes
/// physical pixels through. Only the vertical axis matters for zooming.
impl From<MouseScrollDelta> for WheelDelta {
    fn from(delta: MouseScrollDelta) -> Self {
        match delta {
            MouseScrollDelta::LineDelta(_, y) => WheelDelta::new(-f64::from(y)),
            MouseScrollDelta::PixelDelta(position) => WheelDelta::new(-position.y),
        }
    }
}

//=========================================================================
// Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::PhysicalPosition;

    #[test]
    fn standard_buttons_carry_both_code_families() {
        assert_eq!(ButtonCodes::from(WinitMouseButton::Left), ButtonCodes::PRIMARY);
        assert_eq!(ButtonCodes::from(WinitMouseButton::Middle), ButtonCodes::MIDDLE);
        assert_eq!(ButtonCodes::from(WinitMouseButton::Right), ButtonCodes::SECONDARY);
    }

    #[test]
    fn only_right_converts_to_secondary() {
        assert!(ButtonCodes::from(WinitMouseButton::Right).is_secondary());
        assert!(!ButtonCodes::from(WinitMouseButton::Left).is_secondary());
        assert!(!ButtonCodes::from(WinitMouseButton::Middle).is_secondary());
        assert!(!ButtonCodes::from(WinitMouseButton::Back).is_secondary());
        assert!(!ButtonCodes::from(WinitMouseButton::Forward).is_secondary());
    }

    #[test]
    fn other_buttons_carry_no_which_code() {
        let codes = ButtonCodes::from(WinitMouseButton::Other(9));
        assert_eq!(codes.which, None);
        assert_eq!(codes.button, Some(9));
        assert!(!codes.is_secondary());
    }

    #[test]
    fn line_scroll_up_becomes_negative_delta() {
        let wheel = WheelDelta::from(MouseScrollDelta::LineDelta(0.0, 1.0));
        assert_eq!(wheel.delta_y, -1.0);
    }

    #[test]
    fn pixel_scroll_down_becomes_positive_delta() {
        let wheel = WheelDelta::from(MouseScrollDelta::PixelDelta(PhysicalPosition::new(
            0.0, -42.5,
        )));
        assert_eq!(wheel.delta_y, 42.5);
    }

    #[test]
    fn zero_scroll_stays_zero() {
        let wheel = WheelDelta::from(MouseScrollDelta::LineDelta(0.0, 0.0));
        assert_eq!(wheel.sign(), 0.0);
    }
}
