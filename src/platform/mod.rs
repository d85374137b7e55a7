//=========================================================================
// Platform Subsystem
//
// Bridges Winit (OS-level events) with the input surface and the module
// bridge.
//
// Architecture:
// ```text
//  Winit Event Loop
//    ↓ per event
//  Pointer Conversions (pointer.rs)
//    ↓
//  Surface::dispatch_* ──> InputTranslator ──> EventBridge ──> module
//    │
//  Resized ─────────────────────────────────> EventBridge::notify_resize
// ```
//
// Key Design Decisions:
// - **Synchronous dispatch**: every handler finishes before the next
//   Winit event is processed; there is no input buffering between the
//   window and the surface.
// - **Sticky cursor**: Winit reports button events without coordinates,
//   so the last CursorMoved position is attached to presses and
//   releases.
// - **Render loop starts once**: right after window creation, against
//   the surface id.
// - **Claimed events stop here**: a Captured dispatch ends the event's
//   handling; the window performs no default action of its own.
//
// Responsibilities:
// - Create and manage the OS window
// - Convert Winit pointer types → surface input values
// - Dispatch input to the surface in arrival order
// - Forward window resizes into the event catalogue
//
//=========================================================================

//=== Submodules ==========================================================

mod pointer;

//=== External Crates =====================================================

use log::{debug, error, info, trace};
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::{ElementState, MouseScrollDelta, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowAttributes},
};

//=== Internal Dependencies ===============================================

use crate::core::bridge::EventBridge;
use crate::core::input::event::{ButtonCodes, PointerEvent, WheelDelta};
use crate::core::surface::{Dispatch, Surface};

//=== PlatformError =======================================================

/// Platform initialization and runtime errors.
///
/// These are typically fatal to the editor window - if the event loop
/// can't be created, nothing can be shown. The module instance is
/// unaffected either way.
#[derive(Debug)]
pub enum PlatformError {
    /// Failed to create event loop (rare, indicates OS-level issue).
    EventLoopCreation(winit::error::EventLoopError),

    /// Event loop execution error (rare, indicates corruption).
    EventLoopExecution(winit::error::EventLoopError),
}

//--- Trait Implementations -----------------------------------------------

impl std::fmt::Display for PlatformError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EventLoopCreation(e) => write!(f, "Event loop creation failed: {}", e),
            Self::EventLoopExecution(e) => write!(f, "Event loop error: {}", e),
        }
    }
}

impl std::error::Error for PlatformError {}

//=== Platform ============================================================

/// Window host feeding the input surface.
///
/// Runs on the main thread (Winit requirement on macOS/iOS) and owns
/// the surface together with a bridge clone for resize forwarding and
/// the render-loop start.
///
/// # Lifecycle
///
/// 1. **Construction**: `Platform::new(...)` - takes the wired surface
///    and bridge from the editor facade
/// 2. **Execution**: `platform.run()` - starts the event loop (blocks)
/// 3. **Window creation**: lazily in `resumed()`, then the module's
///    render loop is initialized against the surface id
/// 4. **Shutdown**: user closes the window → loop exits
///
/// # Fields
///
/// - `window`: created lazily in `resumed()` (mobile compatibility)
/// - `surface`: binding registry receiving every pointer/wheel event
/// - `bridge`: resize forwarding and render-loop initialization
/// - `cursor`: last reported cursor position, attached to button events
pub(crate) struct Platform {
    /// OS window handle (None until `resumed()` called).
    window: Option<Window>,

    /// The bound input surface; dispatch target for all input.
    surface: Surface,

    /// Bridge handle for resize intents and the render-loop start.
    bridge: EventBridge,

    /// Window title.
    title: String,

    /// Initial logical window size.
    size: (u32, u32),

    /// Last cursor position, surface-local pixels.
    cursor: (f32, f32),
}

impl Platform {
    //--- Construction -----------------------------------------------------

    /// Creates a platform host over a wired surface and bridge.
    ///
    /// Does not create the window yet - that happens lazily in
    /// `resumed()`.
    pub fn new(surface: Surface, bridge: EventBridge, title: String, size: (u32, u32)) -> Self {
        info!(target: "platform", "Platform subsystem initialized");
        Self {
            window: None,
            surface,
            bridge,
            title,
            size,
            cursor: (0.0, 0.0),
        }
    }

    //--- Execution --------------------------------------------------------

    /// Starts the event loop (blocks until the window closes).
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] if the event loop cannot be created or
    /// fails while executing.
    ///
    /// # Panics
    ///
    /// Panics if called off the main thread (macOS/iOS Winit
    /// requirement).
    pub fn run(mut self) -> Result<(), PlatformError> {
        debug!(target: "platform", "Starting Winit event loop");

        let event_loop = EventLoop::new().map_err(PlatformError::EventLoopCreation)?;

        event_loop
            .run_app(&mut self)
            .map_err(PlatformError::EventLoopExecution)
    }

    //--- Event Handling ---------------------------------------------------

    /// Records the cursor position and dispatches a pointer move.
    fn on_cursor_moved(&mut self, x: f64, y: f64) {
        self.cursor = (x as f32, y as f32);
        let event = PointerEvent::at(self.cursor.0, self.cursor.1);
        self.surface.dispatch_move(&event);
    }

    /// Dispatches a press or release at the sticky cursor position.
    fn on_mouse_input(&mut self, state: ElementState, codes: ButtonCodes) {
        let event = PointerEvent::new(self.cursor.0, self.cursor.1, codes);

        let outcome = match state {
            ElementState::Pressed => self.surface.dispatch_press(&event),
            ElementState::Released => self.surface.dispatch_release(&event),
        };

        if outcome == Dispatch::Ignored {
            trace!(target: "platform::input", "No binding for pointer input, event dropped");
        }
    }

    /// Dispatches a wheel event.
    fn on_wheel(&mut self, delta: MouseScrollDelta) {
        let wheel = WheelDelta::from(delta);

        if self.surface.dispatch_wheel(&wheel) == Dispatch::Ignored {
            trace!(target: "platform::input", "No binding for wheel input, event dropped");
        }
    }

    /// Forwards the new surface extent into the catalogue.
    fn on_resized(&mut self, width: u32, height: u32) {
        debug!(target: "platform", "Surface resized to {}x{}", width, height);
        self.bridge.notify_resize(width as i32, height as i32);
    }

    //--- Test Accessors ---------------------------------------------------

    #[cfg(test)]
    pub(crate) fn window(&self) -> Option<&Window> {
        self.window.as_ref()
    }
}

//=== Winit Integration ===================================================

impl ApplicationHandler for Platform {
    /// Called when the app becomes active (startup or mobile resume).
    ///
    /// Creates the window if it doesn't exist yet and initializes the
    /// module's render loop against the surface id. On mobile this may
    /// be called multiple times (suspend/resume cycle); the render loop
    /// is only initialized on the first.
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            debug!(target: "platform", "Window already exists (mobile resume?)");
            return;
        }

        let attrs = WindowAttributes::default()
            .with_title(self.title.clone())
            .with_inner_size(LogicalSize::new(self.size.0, self.size.1));

        match event_loop.create_window(attrs) {
            Ok(window) => {
                info!(
                    target: "platform",
                    "Window created: {}x{} @ {}x DPI",
                    window.inner_size().width,
                    window.inner_size().height,
                    window.scale_factor()
                );
                self.bridge.init_render_loop(self.surface.surface_id());
                self.window = Some(window);
            }
            Err(e) => {
                error!(target: "platform", "Window creation failed: {}", e);
                event_loop.exit();
            }
        }
    }

    /// Handles per-window events with synchronous dispatch.
    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Window close requested");
                event_loop.exit();
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.on_cursor_moved(position.x, position.y);
            }

            WindowEvent::MouseInput { state, button, .. } => {
                self.on_mouse_input(state, ButtonCodes::from(button));
            }

            WindowEvent::MouseWheel { delta, .. } => {
                self.on_wheel(delta);
            }

            WindowEvent::Resized(size) => {
                self.on_resized(size.width, size.height);
            }

            _ => {
                // Ignore: Focused, Moved, keyboard, etc. (not needed here)
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
