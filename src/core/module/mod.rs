//=========================================================================
// Module Boundary
//
// The collaborator contract for the host module.
//
// The host module (the Mosaic renderer) owns rendering, world state, and
// camera state. This crate only ever reaches it through two operations:
// a one-way event send and a render-loop initializer. Everything about
// how the module got loaded and started stays on the embedder's side of
// this trait.
//
// Instances are injected explicitly wherever they are needed (the bridge
// constructor takes one); nothing in the crate looks a module up from
// ambient or global state.
//
//=========================================================================

//=== Submodules ==========================================================

mod queued;

pub use queued::QueuedInstance;

//=== Internal Dependencies ===============================================

use crate::core::bridge::Intent;

//=== ModuleInstance ======================================================

/// A running host module instance.
///
/// Implementations must accept every well-formed catalogue payload
/// without failing; delivery is fire-and-forget and carries no
/// acknowledgement. `Send + Sync` because resource loads deliver their
/// intent from a background thread.
pub trait ModuleInstance: Send + Sync {
    /// Delivers one intent to the module.
    ///
    /// The sole outbound call. No return value, no blocking, no retry;
    /// delivery guarantees past this point belong to the module.
    fn send_event(&self, intent: Intent);

    /// Starts the module's render loop against a named surface.
    ///
    /// Assumed idempotent per surface, but that is the module's promise,
    /// not this crate's.
    fn init_render_loop(&self, surface_id: &str);
}
