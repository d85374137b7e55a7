//=========================================================================
// Event Bridge
//
// The catalogue of named events the host module understands.
//
// One method per domain operation; each call shapes one payload and
// performs exactly one fire-and-forget send. Nothing here blocks,
// retries, or waits for acknowledgement: delivery guarantees past the
// send belong entirely to the module.
//
// Architecture:
// ```text
//  InputTranslator ────┐
//  TilesetLoader ──────┼──> EventBridge ──send_event──> ModuleInstance
//  Platform (resize) ──┘    (one intent per call)
// ```
//
// Responsibilities:
// - Own the event-name catalogue and its payload shapes
// - Shape payload fields in catalogue order with catalogue types
// - Forward each intent to the injected module instance, exactly once
//
//=========================================================================

//=== Submodules ==========================================================

mod intent;

pub use intent::{Intent, Payload, WireValue};

//=== Standard Library Imports ============================================

use std::sync::Arc;

//=== External Crates =====================================================

use log::{debug, info};

//=== Internal Dependencies ===============================================

use crate::core::module::ModuleInstance;

//=== EventBridge =========================================================

/// Dispatch layer between application intents and the host module.
///
/// Holds the module collaborator injected at construction; every
/// catalogue method resolves to exactly one [`Intent`] handed to
/// [`ModuleInstance::send_event`]. Cloning is cheap and clones share the
/// same instance, so the bridge can be handed to the input translator,
/// resource loaders, and the platform host alike.
///
/// Numeric fields are forwarded as-is, without rounding or clamping;
/// domain validation (negative dimensions, unknown map names) is the
/// module's job.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use mosaic_bridge::core::module::QueuedInstance;
/// use mosaic_bridge::core::bridge::EventBridge;
///
/// let instance = Arc::new(QueuedInstance::new());
/// let bridge = EventBridge::new(instance.clone());
///
/// bridge.add_map("overworld", 64, 64, 16, 16);
///
/// let sent = instance.next_event().unwrap();
/// assert_eq!(sent.name, "world.AddMap");
/// ```
#[derive(Clone)]
pub struct EventBridge {
    instance: Arc<dyn ModuleInstance>,
}

impl EventBridge {
    //--- Construction -----------------------------------------------------

    /// Creates a bridge over an explicit module instance.
    pub fn new(instance: Arc<dyn ModuleInstance>) -> Self {
        info!("Event bridge attached to module instance");
        Self { instance }
    }

    fn send(&self, intent: Intent) {
        debug!("Sending {}", intent.name);
        self.instance.send_event(intent);
    }

    //--- World ------------------------------------------------------------

    /// Sets the clear color behind all layers (`world.SetBackground`).
    pub fn set_background_color(&self, color: &str) {
        self.send(Intent::new(
            "world.SetBackground",
            Payload::new().field("color", color),
        ));
    }

    /// Registers a map with its tile geometry (`world.AddMap`).
    pub fn add_map(&self, name: &str, width: i32, height: i32, tile_width: i32, tile_height: i32) {
        self.send(Intent::new(
            "world.AddMap",
            Payload::new()
                .field("name", name)
                .field("width", width)
                .field("height", height)
                .field("tileWidth", tile_width)
                .field("tileHeight", tile_height),
        ));
    }

    /// Adds a named layer to a map at the given z-order (`world.AddLayer`).
    pub fn add_layer(&self, map: &str, name: &str, z: f32) {
        self.send(Intent::new(
            "world.AddLayer",
            Payload::new().field("map", map).field("name", name).field("z", z),
        ));
    }

    /// Replaces a layer's tile grid wholesale (`world.AddLayerData`).
    ///
    /// `data` is row-major tile indices.
    pub fn add_layer_data(&self, map: &str, layer: &str, data: Vec<Vec<i32>>) {
        self.send(Intent::new(
            "world.AddLayerData",
            Payload::new()
                .field("map", map)
                .field("layer", layer)
                .field("data", data),
        ));
    }

    /// Assigns one tile index at a layer cell (`world.SetTile`).
    pub fn set_tile(&self, map: &str, layer: &str, x: i32, y: i32, tile: i32) {
        self.send(Intent::new(
            "world.SetTile",
            Payload::new()
                .field("map", map)
                .field("layer", layer)
                .field("x", x)
                .field("y", y)
                .field("tile", tile),
        ));
    }

    //--- Camera -----------------------------------------------------------

    /// Sets the absolute zoom factor (`camera.Zoom`).
    pub fn set_camera_zoom(&self, zoom: f32) {
        self.send(Intent::new("camera.Zoom", Payload::new().field("zoom", zoom)));
    }

    /// Adjusts zoom by a relative step (`camera.ZoomBy`).
    pub fn set_camera_zoom_by(&self, delta: f32) {
        self.send(Intent::new("camera.ZoomBy", Payload::new().field("delta", delta)));
    }

    /// Moves the camera to an absolute position (`camera.Translate`).
    pub fn set_camera_translation(&self, x: f32, y: f32) {
        self.send(Intent::new(
            "camera.Translate",
            Payload::new().field("x", x).field("y", y),
        ));
    }

    /// Moves the camera by a relative offset (`camera.TranslateBy`).
    pub fn set_camera_translation_by(&self, x: f32, y: f32) {
        self.send(Intent::new(
            "camera.TranslateBy",
            Payload::new().field("x", x).field("y", y),
        ));
    }

    /// Centers the camera on a map (`camera.TranslateToMapCenter`).
    pub fn set_camera_to_map_center(&self, map: &str) {
        self.send(Intent::new(
            "camera.TranslateToMapCenter",
            Payload::new().field("map", map),
        ));
    }

    //--- Resources --------------------------------------------------------

    /// Delivers tileset image bytes (`resources.LoadTileset`).
    ///
    /// The bytes cross the boundary raw; they are never re-encoded as
    /// text.
    pub fn load_tileset(&self, bytes: Vec<u8>) {
        self.send(Intent::new(
            "resources.LoadTileset",
            Payload::new().field("data", bytes),
        ));
    }

    //--- Screen -----------------------------------------------------------

    /// Announces the new surface extent (`screen.Resize`).
    pub fn notify_resize(&self, width: i32, height: i32) {
        self.send(Intent::new(
            "screen.Resize",
            Payload::new().field("width", width).field("height", height),
        ));
    }

    //--- Render Loop ------------------------------------------------------

    /// Starts the module's render loop against a named surface.
    ///
    /// Passthrough to [`ModuleInstance::init_render_loop`]; not part of
    /// the event catalogue and emits no intent.
    pub fn init_render_loop(&self, surface_id: &str) {
        info!("Initializing render loop for surface '{}'", surface_id);
        self.instance.init_render_loop(surface_id);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
