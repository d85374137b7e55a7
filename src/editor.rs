//=========================================================================
// Mosaic Editor
//
// Main entry point and coordinator for the embedding host.
//
// Architecture:
// ```text
//     EditorBuilder ──build(instance)──> Editor ──run()──> [Window]
//         │                                │
//         ├─ with_title()                  ├─ bind() / unbind()
//         ├─ with_surface_size()           ├─ bridge() catalogue access
//         └─ with_surface_id()             └─ load_tileset()
// ```
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::sync::Arc;

//=== External Crates =====================================================

use log::{error, info};

//=== Internal Dependencies ===============================================

use crate::core::bridge::EventBridge;
use crate::core::input::translator::InputTranslator;
use crate::core::module::ModuleInstance;
use crate::core::resources::{TilesetLoad, TilesetLoader};
use crate::core::surface::{BindingId, Surface};
use crate::platform::{Platform, PlatformError};

//=== EditorBuilder =======================================================

/// Builder for configuring and constructing an [`Editor`].
///
/// Provides a fluent API for setting window and surface parameters
/// before construction. The module collaborator is handed over at
/// [`build`](Self::build); nothing is looked up from ambient state.
///
/// # Default Values
///
/// - **Title**: `"Mosaic Editor"`
/// - **Surface size**: 800 x 600 logical pixels
/// - **Surface id**: `"mosaic-canvas"`
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use mosaic_bridge::EditorBuilder;
/// use mosaic_bridge::core::module::QueuedInstance;
///
/// let instance = Arc::new(QueuedInstance::new());
///
/// let mut editor = EditorBuilder::new()
///     .with_title("Overworld Editor")
///     .with_surface_size(1024, 768)
///     .build(instance);
///
/// editor.bind();
/// editor.bridge().set_background_color("#1d2b53");
/// ```
pub struct EditorBuilder {
    title: String,
    surface_size: (u32, u32),
    surface_id: String,
}

impl EditorBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            title: "Mosaic Editor".to_string(),
            surface_size: (800, 600),
            surface_id: "mosaic-canvas".to_string(),
        }
    }

    /// Sets the window title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the initial logical window size.
    ///
    /// # Panics
    ///
    /// Panics if either extent is zero.
    pub fn with_surface_size(mut self, width: u32, height: u32) -> Self {
        assert!(width > 0 && height > 0, "Surface size must be positive");
        self.surface_size = (width, height);
        self
    }

    /// Sets the surface name the module's render loop runs against.
    ///
    /// # Panics
    ///
    /// Panics if `id` is empty.
    pub fn with_surface_id(mut self, id: impl Into<String>) -> Self {
        let id = id.into();
        assert!(!id.is_empty(), "Surface id must not be empty");
        self.surface_id = id;
        self
    }

    /// Builds the editor over an explicit module instance.
    ///
    /// Wires the bridge and the surface; registers no input binding and
    /// starts no render loop yet. Call [`Editor::bind`] before (or
    /// after) [`Editor::run`] to receive camera gestures.
    pub fn build(self, instance: Arc<dyn ModuleInstance>) -> Editor {
        info!(
            "Building editor (surface: '{}', {}x{})",
            self.surface_id, self.surface_size.0, self.surface_size.1
        );

        Editor {
            bridge: EventBridge::new(instance),
            surface: Surface::new(self.surface_id),
            title: self.title,
            surface_size: self.surface_size,
            bindings: Vec::new(),
        }
    }
}

impl Default for EditorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== Editor ==============================================================

/// The embedding host: one surface, one bridge, one module instance.
///
/// Create via [`EditorBuilder`]. The editor can run windowed
/// ([`run`](Self::run), blocking) or headless: embedders with their own
/// event source dispatch through [`surface_mut`](Self::surface_mut) and
/// drive the catalogue through [`bridge`](Self::bridge).
///
/// # Examples
///
/// ```no_run
/// use std::sync::Arc;
/// use mosaic_bridge::EditorBuilder;
/// use mosaic_bridge::core::module::QueuedInstance;
///
/// let instance = Arc::new(QueuedInstance::new());
/// let mut editor = EditorBuilder::new().build(instance);
///
/// editor.bind();
/// editor.run().expect("editor window failed");
/// ```
pub struct Editor {
    bridge: EventBridge,
    surface: Surface,
    title: String,
    surface_size: (u32, u32),
    bindings: Vec<BindingId>,
}

impl Editor {
    //--- Input Binding ----------------------------------------------------

    /// Binds a fresh input translator to the surface.
    ///
    /// Each call stacks another registration; binding twice without
    /// unbinding delivers every event twice. Callers keep that
    /// discipline.
    pub fn bind(&mut self) -> BindingId {
        let binding = self.surface.bind(InputTranslator::new(self.bridge.clone()));
        self.bindings.push(binding);
        binding
    }

    /// Removes the most recent binding. Returns false when none exists.
    pub fn unbind(&mut self) -> bool {
        match self.bindings.pop() {
            Some(binding) => self.surface.unbind(binding).is_some(),
            None => false,
        }
    }

    /// True while at least one binding is registered.
    pub fn is_bound(&self) -> bool {
        self.surface.bound() > 0
    }

    //--- Module Access ----------------------------------------------------

    /// The event catalogue.
    pub fn bridge(&self) -> &EventBridge {
        &self.bridge
    }

    /// The input surface, for headless dispatch.
    pub fn surface_mut(&mut self) -> &mut Surface {
        &mut self.surface
    }

    /// Starts a background tileset fetch delivered through the bridge.
    ///
    /// See [`TilesetLoader`]: one `resources.LoadTileset` intent on
    /// success, an error through the handle otherwise.
    pub fn load_tileset(&self, path: impl Into<std::path::PathBuf>) -> TilesetLoad {
        TilesetLoader::new(self.bridge.clone()).load(path)
    }

    //--- Execution --------------------------------------------------------

    /// Opens the editor window and blocks until it closes.
    ///
    /// The module's render loop is initialized against the surface id
    /// once the window exists; input then dispatches synchronously per
    /// event.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] if the event loop cannot be created or
    /// fails while running.
    pub fn run(self) -> Result<(), PlatformError> {
        info!("Starting editor runtime (surface: '{}')", self.surface.surface_id());

        let platform = Platform::new(self.surface, self.bridge, self.title, self.surface_size);

        match platform.run() {
            Ok(()) => {
                info!("Editor shutdown complete");
                Ok(())
            }
            Err(e) => {
                error!("Platform error: {}", e);
                Err(e)
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
