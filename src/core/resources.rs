//=========================================================================
// Resource Loading
//
// Background tileset fetches, the one asynchronous boundary in the
// crate.
//
// Architecture:
//   TilesetLoader::load(path) ──spawn──> read bytes ──ok──> load_tileset
//                                            └──────err──> TilesetLoad
//
// A successful fetch emits exactly one resources.LoadTileset intent; a
// failed fetch emits nothing and the error resolves through the load
// handle. Loads are independent: each runs on its own thread and shares
// nothing but the bridge handle. Completion never consults binding
// state, so the intent can still arrive after the surface was unbound;
// that startup/teardown race is tolerated and embedders must expect it.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::fs;
use std::io;
use std::path::PathBuf;
use std::thread::{self, JoinHandle};

//=== External Crates =====================================================

use log::{debug, error};

//=== Internal Dependencies ===============================================

use super::bridge::EventBridge;

//=== ResourceError =======================================================

/// Tileset fetch failures.
///
/// Never fatal to the process: a failed fetch costs one missing intent,
/// which the host module's state tolerates.
#[derive(Debug)]
pub enum ResourceError {
    /// Reading the tileset bytes failed.
    Read { path: PathBuf, source: io::Error },

    /// The loader thread terminated without resolving.
    Interrupted,
}

impl std::fmt::Display for ResourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Read { path, source } => {
                write!(f, "Failed to read tileset '{}': {}", path.display(), source)
            }
            Self::Interrupted => write!(f, "Tileset load interrupted before completion"),
        }
    }
}

impl std::error::Error for ResourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Read { source, .. } => Some(source),
            Self::Interrupted => None,
        }
    }
}

//=== TilesetLoad =========================================================

/// Handle for one in-flight tileset load.
///
/// Joining resolves the load: the delivered byte count on success, the
/// fetch error otherwise. Dropping the handle detaches the load; it
/// still completes and a successful fetch still sends its intent. There
/// is no cancellation.
pub struct TilesetLoad {
    handle: JoinHandle<Result<usize, ResourceError>>,
}

impl TilesetLoad {
    /// Waits for the fetch and returns its outcome.
    pub fn join(self) -> Result<usize, ResourceError> {
        self.handle.join().unwrap_or(Err(ResourceError::Interrupted))
    }

    /// True once the fetch finished, successfully or not.
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

//=== TilesetLoader =======================================================

/// Spawns tileset fetches that emit through a shared bridge.
///
/// Each [`load`](Self::load) call starts an independent background
/// fetch; nothing is shared between concurrent loads but the bridge
/// handle.
pub struct TilesetLoader {
    bridge: EventBridge,
}

impl TilesetLoader {
    /// Creates a loader emitting through the given bridge.
    pub fn new(bridge: EventBridge) -> Self {
        Self { bridge }
    }

    /// Starts one background fetch of `path`.
    ///
    /// On success exactly one `resources.LoadTileset` intent with the
    /// raw bytes is sent; on failure no intent is sent and the error is
    /// held for [`TilesetLoad::join`].
    pub fn load(&self, path: impl Into<PathBuf>) -> TilesetLoad {
        let path = path.into();
        let bridge = self.bridge.clone();

        let handle = thread::spawn(move || {
            debug!("Fetching tileset '{}'", path.display());

            match fs::read(&path) {
                Ok(bytes) => {
                    let count = bytes.len();
                    bridge.load_tileset(bytes);
                    debug!("Tileset '{}' delivered ({} bytes)", path.display(), count);
                    Ok(count)
                }
                Err(source) => {
                    error!("Tileset fetch failed for '{}': {}", path.display(), source);
                    Err(ResourceError::Read { path, source })
                }
            }
        });

        TilesetLoad { handle }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::bridge::{EventBridge, WireValue};
    use crate::core::input::event::ButtonCodes;
    use crate::core::input::translator::InputTranslator;
    use crate::core::input::PointerEvent;
    use crate::core::module::QueuedInstance;
    use crate::core::surface::Surface;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    //--- Test Helpers -----------------------------------------------------

    static TEMP_SEQ: AtomicUsize = AtomicUsize::new(0);

    fn temp_tileset(bytes: &[u8]) -> PathBuf {
        let seq = TEMP_SEQ.fetch_add(1, Ordering::Relaxed);
        let mut path = std::env::temp_dir();
        path.push(format!("mosaic-tileset-{}-{}.bin", std::process::id(), seq));
        fs::write(&path, bytes).unwrap();
        path
    }

    fn loader() -> (TilesetLoader, Arc<QueuedInstance>) {
        let instance = Arc::new(QueuedInstance::new());
        let bridge = EventBridge::new(instance.clone());
        (TilesetLoader::new(bridge), instance)
    }

    //=====================================================================
    // Fetch Outcome Tests
    //=====================================================================

    #[test]
    fn successful_load_emits_exactly_one_intent() {
        let (loader, instance) = loader();
        let path = temp_tileset(&[0x89, 0x50, 0x4e, 0x47]);

        let outcome = loader.load(&path).join();
        let _ = fs::remove_file(&path);

        assert_eq!(outcome.unwrap(), 4);

        let sent = instance.drain();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].name, "resources.LoadTileset");
        assert_eq!(
            sent[0].payload.get("data"),
            Some(&WireValue::Bytes(vec![0x89, 0x50, 0x4e, 0x47]))
        );
    }

    #[test]
    fn failed_load_emits_nothing() {
        let (loader, instance) = loader();
        let mut missing = std::env::temp_dir();
        missing.push("mosaic-tileset-does-not-exist.bin");

        let outcome = loader.load(&missing).join();

        match outcome {
            Err(ResourceError::Read { path, .. }) => assert_eq!(path, missing),
            other => panic!("expected read failure, got {:?}", other),
        }
        assert!(instance.drain().is_empty(), "failures must not emit");
    }

    #[test]
    fn concurrent_loads_are_independent() {
        let (loader, instance) = loader();
        let small = temp_tileset(&[1, 2]);
        let large = temp_tileset(&[3, 4, 5, 6, 7]);

        let first = loader.load(&small);
        let second = loader.load(&large);

        assert_eq!(first.join().unwrap(), 2);
        assert_eq!(second.join().unwrap(), 5);
        let _ = fs::remove_file(&small);
        let _ = fs::remove_file(&large);

        let mut sizes: Vec<usize> = instance
            .drain()
            .iter()
            .map(|intent| match intent.payload.get("data") {
                Some(WireValue::Bytes(bytes)) => bytes.len(),
                other => panic!("expected raw bytes, got {:?}", other),
            })
            .collect();
        sizes.sort_unstable();

        assert_eq!(sizes, vec![2, 5]);
    }

    //=====================================================================
    // Teardown Race Tests
    //=====================================================================

    #[test]
    fn load_completion_ignores_unbind() {
        let instance = Arc::new(QueuedInstance::new());
        let bridge = EventBridge::new(instance.clone());
        let loader = TilesetLoader::new(bridge.clone());

        let mut surface = Surface::new("mosaic-canvas");
        let binding = surface.bind(InputTranslator::new(bridge));
        surface.dispatch_press(&PointerEvent::new(10.0, 10.0, ButtonCodes::SECONDARY));

        let path = temp_tileset(&[7, 7, 7]);
        let load = loader.load(&path);

        // Torn down while the fetch is (possibly still) in flight
        surface.unbind(binding);

        assert_eq!(load.join().unwrap(), 3);
        let _ = fs::remove_file(&path);

        let sent = instance.drain();
        assert_eq!(sent.len(), 1, "the intent is emitted even after unbind");
        assert_eq!(sent[0].name, "resources.LoadTileset");
    }

    //=====================================================================
    // Error Type Tests
    //=====================================================================

    #[test]
    fn resource_error_implements_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<ResourceError>();
    }

    #[test]
    fn read_errors_name_the_path() {
        let error = ResourceError::Read {
            path: PathBuf::from("tiles/overworld.png"),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };

        let message = error.to_string();
        assert!(message.contains("overworld.png"), "got: {}", message);
    }
}
