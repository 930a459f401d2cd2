//! HuesphereApp struct definition and constructor.

use std::sync::Arc;

use winit::window::Window;

use huesphere_config::HuesphereConfig;
#[cfg(feature = "gamepad")]
use huesphere_platform::GamepadInput;
use huesphere_platform::ExitInputState;
use huesphere_renderer::{FrameTimer, RenderState};

/// Top-level application state.
pub struct HuesphereApp {
    pub(super) config: HuesphereConfig,

    // Windowing
    pub(super) window: Option<Arc<Window>>,
    pub(super) render_state: Option<RenderState>,

    // Exit buttons held or pressed since the last tick
    pub(super) input: ExitInputState,
    #[cfg(feature = "gamepad")]
    pub(super) gamepad: GamepadInput,

    pub(super) frame_timer: FrameTimer,

    // Whether the app should exit
    pub(super) should_exit: bool,
    // Set when window or renderer setup failed
    pub(super) init_failed: bool,
}

impl HuesphereApp {
    pub fn new(config: HuesphereConfig) -> Self {
        Self {
            config,
            window: None,
            render_state: None,
            input: ExitInputState::new(),
            #[cfg(feature = "gamepad")]
            gamepad: GamepadInput::new(),
            frame_timer: FrameTimer::new(),
            should_exit: false,
            init_failed: false,
        }
    }

    /// True when the event loop stopped because initialization failed.
    pub fn init_failed(&self) -> bool {
        self.init_failed
    }
}
