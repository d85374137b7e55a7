//=========================================================================
// Input Surface
//
// The render surface as the input layer sees it: a named target that
// pointer and wheel events arrive on, carrying zero or more handler
// registrations (bindings).
//
// Architecture:
//   Platform events → Surface::dispatch_* → every binding, in order
//                                         → Dispatch outcome
//
// A bound surface claims its events: dispatch reports Captured whenever
// at least one binding is registered, and the platform suppresses any
// default action for claimed events (context menu on secondary press,
// scrolling or selection on drag and wheel). Claiming does not depend on
// whether an intent resulted; an ignored button press is still claimed.
//
// Binding lifecycle mirrors listener registration: every bind() stacks
// one full handler set. Binding again without unbinding stacks a second
// set and events then deliver to each. That misuse is not detected;
// callers keep the discipline. Unbinding removes one registration and
// clears its drag state.
//
//=========================================================================

//=== External Crates =====================================================

use log::info;

//=== Internal Dependencies ===============================================

use super::input::event::{PointerEvent, WheelDelta};
use super::input::translator::InputTranslator;

//=== Dispatch ============================================================

/// Outcome of dispatching one event to a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// At least one binding is registered; the surface claims the event
    /// and its default action must be suppressed.
    Captured,

    /// No binding is registered; default handling may proceed.
    Ignored,
}

//=== BindingId ===========================================================

/// Handle for one `bind` registration.
///
/// Ids are unique per surface and never reused, so a stale handle after
/// an unbind can not accidentally remove a newer registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BindingId(u64);

//=== Surface =============================================================

/// A bindable input surface.
///
/// Owns the translators bound to it and routes each dispatched event to
/// every binding in registration order. The surface id is the name the
/// module's render loop is initialized against.
pub struct Surface {
    id: String,
    bindings: Vec<(BindingId, InputTranslator)>,
    next_binding: u64,
}

impl Surface {
    //--- Construction -----------------------------------------------------

    /// Creates a surface with no bindings.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            bindings: Vec::new(),
            next_binding: 0,
        }
    }

    /// The surface name handed to the module's render loop.
    pub fn surface_id(&self) -> &str {
        &self.id
    }

    //--- Binding Lifecycle ------------------------------------------------

    /// Registers one full handler set backed by `translator`.
    ///
    /// Each call stacks a new registration; nothing stops a caller from
    /// binding twice, and a double-bound surface delivers every event
    /// twice. Callers that do not want that unbind first.
    pub fn bind(&mut self, translator: InputTranslator) -> BindingId {
        let id = BindingId(self.next_binding);
        self.next_binding += 1;
        self.bindings.push((id, translator));

        info!(
            "Bound input handlers to surface '{}' ({} active)",
            self.id,
            self.bindings.len()
        );
        id
    }

    /// Removes one registration, returning its translator with the drag
    /// state cleared. Unknown or already-removed ids return `None`.
    pub fn unbind(&mut self, id: BindingId) -> Option<InputTranslator> {
        let index = self.bindings.iter().position(|(bound, _)| *bound == id)?;
        let (_, mut translator) = self.bindings.remove(index);
        translator.reset();

        info!(
            "Unbound input handlers from surface '{}' ({} active)",
            self.id,
            self.bindings.len()
        );
        Some(translator)
    }

    /// Number of active registrations.
    pub fn bound(&self) -> usize {
        self.bindings.len()
    }

    //--- Dispatch ---------------------------------------------------------

    /// Routes a pointer press to every binding.
    pub fn dispatch_press(&mut self, event: &PointerEvent) -> Dispatch {
        for (_, translator) in &mut self.bindings {
            translator.on_press(event);
        }
        self.claim()
    }

    /// Routes a pointer release to every binding.
    pub fn dispatch_release(&mut self, event: &PointerEvent) -> Dispatch {
        for (_, translator) in &mut self.bindings {
            translator.on_release(event);
        }
        self.claim()
    }

    /// Routes a pointer move to every binding.
    pub fn dispatch_move(&mut self, event: &PointerEvent) -> Dispatch {
        for (_, translator) in &mut self.bindings {
            translator.on_move(event);
        }
        self.claim()
    }

    /// Routes a wheel event to every binding.
    pub fn dispatch_wheel(&mut self, wheel: &WheelDelta) -> Dispatch {
        for (_, translator) in &mut self.bindings {
            translator.on_wheel(wheel);
        }
        self.claim()
    }

    fn claim(&self) -> Dispatch {
        if self.bindings.is_empty() {
            Dispatch::Ignored
        } else {
            Dispatch::Captured
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::bridge::EventBridge;
    use crate::core::input::event::ButtonCodes;
    use crate::core::module::QueuedInstance;
    use std::sync::Arc;

    //--- Test Helpers -----------------------------------------------------

    fn surface() -> (Surface, EventBridge, Arc<QueuedInstance>) {
        let instance = Arc::new(QueuedInstance::new());
        let bridge = EventBridge::new(instance.clone());
        (Surface::new("mosaic-canvas"), bridge, instance)
    }

    fn secondary_press(x: f32, y: f32) -> PointerEvent {
        PointerEvent::new(x, y, ButtonCodes::SECONDARY)
    }

    //=====================================================================
    // Claim Tests
    //=====================================================================

    #[test]
    fn unbound_surface_ignores_every_event_kind() {
        let (mut surface, _bridge, instance) = surface();

        assert_eq!(surface.dispatch_press(&secondary_press(0.0, 0.0)), Dispatch::Ignored);
        assert_eq!(surface.dispatch_release(&secondary_press(0.0, 0.0)), Dispatch::Ignored);
        assert_eq!(surface.dispatch_move(&PointerEvent::at(5.0, 5.0)), Dispatch::Ignored);
        assert_eq!(surface.dispatch_wheel(&WheelDelta::new(1.0)), Dispatch::Ignored);
        assert!(instance.drain().is_empty());
    }

    #[test]
    fn bound_surface_captures_every_event_kind() {
        let (mut surface, bridge, _instance) = surface();
        surface.bind(InputTranslator::new(bridge));

        assert_eq!(surface.dispatch_press(&secondary_press(0.0, 0.0)), Dispatch::Captured);
        assert_eq!(surface.dispatch_release(&secondary_press(0.0, 0.0)), Dispatch::Captured);
        assert_eq!(surface.dispatch_move(&PointerEvent::at(5.0, 5.0)), Dispatch::Captured);
        assert_eq!(surface.dispatch_wheel(&WheelDelta::new(1.0)), Dispatch::Captured);
    }

    #[test]
    fn ignored_buttons_are_still_claimed() {
        let (mut surface, bridge, instance) = surface();
        surface.bind(InputTranslator::new(bridge));

        let outcome = surface.dispatch_press(&PointerEvent::new(0.0, 0.0, ButtonCodes::PRIMARY));

        // Claimed for default-action suppression, but no intent results
        assert_eq!(outcome, Dispatch::Captured);
        assert!(instance.drain().is_empty());
    }

    //=====================================================================
    // Binding Lifecycle Tests
    //=====================================================================

    #[test]
    fn drag_flows_through_dispatch() {
        let (mut surface, bridge, instance) = surface();
        surface.bind(InputTranslator::new(bridge));

        surface.dispatch_press(&secondary_press(100.0, 100.0));
        surface.dispatch_move(&PointerEvent::at(130.0, 80.0));
        surface.dispatch_release(&secondary_press(130.0, 80.0));

        let sent = instance.drain();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].name, "camera.TranslateBy");
    }

    #[test]
    fn duplicate_bind_stacks_registrations() {
        let (mut surface, bridge, instance) = surface();
        surface.bind(InputTranslator::new(bridge.clone()));
        surface.bind(InputTranslator::new(bridge));

        assert_eq!(surface.bound(), 2);

        surface.dispatch_press(&secondary_press(100.0, 100.0));
        surface.dispatch_move(&PointerEvent::at(110.0, 110.0));

        // Both registrations deliver: one move, two intents
        assert_eq!(instance.drain().len(), 2);
    }

    #[test]
    fn unbind_removes_one_registration() {
        let (mut surface, bridge, instance) = surface();
        let first = surface.bind(InputTranslator::new(bridge.clone()));
        surface.bind(InputTranslator::new(bridge));

        assert!(surface.unbind(first).is_some());
        assert_eq!(surface.bound(), 1);

        surface.dispatch_press(&secondary_press(100.0, 100.0));
        surface.dispatch_move(&PointerEvent::at(110.0, 110.0));

        assert_eq!(instance.drain().len(), 1);
    }

    #[test]
    fn unbind_clears_drag_state() {
        let (mut surface, bridge, instance) = surface();
        let binding = surface.bind(InputTranslator::new(bridge));

        surface.dispatch_press(&secondary_press(100.0, 100.0));

        let translator = surface.unbind(binding).unwrap();
        assert!(!translator.dragging(), "teardown must clear the drag");

        // Rebinding the same translator must not leak the old drag
        surface.bind(translator);
        surface.dispatch_move(&PointerEvent::at(200.0, 200.0));
        assert!(instance.drain().is_empty());
    }

    #[test]
    fn unbind_unknown_id_returns_none() {
        let (mut surface, bridge, _instance) = surface();
        let binding = surface.bind(InputTranslator::new(bridge));

        assert!(surface.unbind(binding).is_some());
        assert!(surface.unbind(binding).is_none(), "ids are spent on unbind");
    }

    #[test]
    fn binding_ids_are_never_reused() {
        let (mut surface, bridge, _instance) = surface();

        let first = surface.bind(InputTranslator::new(bridge.clone()));
        surface.unbind(first);
        let second = surface.bind(InputTranslator::new(bridge));

        assert_ne!(first, second);
    }

    #[test]
    fn surface_keeps_its_id() {
        let (surface, _bridge, _instance) = surface();
        assert_eq!(surface.surface_id(), "mosaic-canvas");
    }
}
