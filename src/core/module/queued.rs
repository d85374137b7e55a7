//=========================================================================
// Queued Module Instance
//=========================================================================
//
// FIFO intake realization of the module boundary.
//
// The host module consumes commands from an internal queue, one per
// render tick. This type models that intake on the crate's side of the
// boundary: sends enqueue, the embedder (or a test) pops. Order in is
// order out, across threads.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::sync::Mutex;

//=== External Crates =====================================================

use crossbeam_channel::{unbounded, Receiver, Sender};
use log::{info, trace, warn};

//=== Internal Dependencies ===============================================

use super::ModuleInstance;
use crate::core::bridge::Intent;

//=== QueuedInstance ======================================================

/// Module instance backed by an unbounded FIFO queue.
///
/// Intents enqueue on [`ModuleInstance::send_event`] and come back out
/// in send order through [`next_event`](Self::next_event) or
/// [`drain`](Self::drain). Render-loop starts are recorded so embedders
/// can observe (not enforce) per-surface idempotence.
///
/// This is the collaborator the platform host drives, and the one every
/// test in the crate observes.
pub struct QueuedInstance {
    sender: Sender<Intent>,
    receiver: Receiver<Intent>,
    render_loops: Mutex<Vec<String>>,
}

impl QueuedInstance {
    /// Creates an empty intake queue.
    pub fn new() -> Self {
        let (sender, receiver) = unbounded();
        Self {
            sender,
            receiver,
            render_loops: Mutex::new(Vec::new()),
        }
    }

    /// Pops the oldest queued intent, if any.
    ///
    /// The render-tick drain: the module side takes one command per tick.
    pub fn next_event(&self) -> Option<Intent> {
        self.receiver.try_recv().ok()
    }

    /// Empties the queue, returning intents in send order.
    pub fn drain(&self) -> Vec<Intent> {
        self.receiver.try_iter().collect()
    }

    /// Number of intents waiting in the queue.
    pub fn pending(&self) -> usize {
        self.receiver.len()
    }

    /// Surface ids passed to `init_render_loop`, in call order.
    pub fn render_loops(&self) -> Vec<String> {
        self.render_loops
            .lock()
            .map(|loops| loops.clone())
            .unwrap_or_default()
    }
}

impl Default for QueuedInstance {
    fn default() -> Self {
        Self::new()
    }
}

//--- Trait Implementations -----------------------------------------------

impl ModuleInstance for QueuedInstance {
    fn send_event(&self, intent: Intent) {
        trace!("Queued intent: {}", intent.name);

        if self.sender.send(intent).is_err() {
            warn!("Intake queue disconnected, dropping intent");
        }
    }

    fn init_render_loop(&self, surface_id: &str) {
        info!("Render loop initialized for surface '{}'", surface_id);

        match self.render_loops.lock() {
            Ok(mut loops) => loops.push(surface_id.to_string()),
            Err(_) => warn!("Render loop record poisoned, start not recorded"),
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::bridge::Payload;
    use std::sync::Arc;

    fn intent(name: &'static str) -> Intent {
        Intent::new(name, Payload::new())
    }

    #[test]
    fn intents_come_back_in_send_order() {
        let instance = QueuedInstance::new();

        instance.send_event(intent("camera.Zoom"));
        instance.send_event(intent("camera.Translate"));
        instance.send_event(intent("screen.Resize"));

        let names: Vec<&str> = instance.drain().iter().map(|i| i.name).collect();
        assert_eq!(names, vec!["camera.Zoom", "camera.Translate", "screen.Resize"]);
    }

    #[test]
    fn next_event_pops_one_at_a_time() {
        let instance = QueuedInstance::new();

        instance.send_event(intent("world.AddMap"));
        instance.send_event(intent("world.AddLayer"));

        assert_eq!(instance.next_event().map(|i| i.name), Some("world.AddMap"));
        assert_eq!(instance.pending(), 1);
        assert_eq!(instance.next_event().map(|i| i.name), Some("world.AddLayer"));
        assert!(instance.next_event().is_none());
    }

    #[test]
    fn drain_empties_the_queue() {
        let instance = QueuedInstance::new();

        instance.send_event(intent("camera.ZoomBy"));
        assert_eq!(instance.drain().len(), 1);
        assert!(instance.drain().is_empty());
        assert_eq!(instance.pending(), 0);
    }

    #[test]
    fn render_loop_starts_are_recorded_in_order() {
        let instance = QueuedInstance::new();

        instance.init_render_loop("mosaic-canvas");
        instance.init_render_loop("mosaic-canvas");

        // Observable, not deduplicated: idempotence is the module's promise
        assert_eq!(instance.render_loops(), vec!["mosaic-canvas", "mosaic-canvas"]);
    }

    #[test]
    fn sends_arrive_across_threads() {
        let instance: Arc<QueuedInstance> = Arc::new(QueuedInstance::new());
        let worker: Arc<dyn ModuleInstance> = instance.clone();

        let handle = std::thread::spawn(move || {
            worker.send_event(intent("resources.LoadTileset"));
        });
        handle.join().unwrap();

        assert_eq!(
            instance.next_event().map(|i| i.name),
            Some("resources.LoadTileset")
        );
    }
}
