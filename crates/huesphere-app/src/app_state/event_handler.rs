//! `ApplicationHandler` implementation for the winit event loop.

use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, MouseButton, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::Key;
use winit::window::WindowId;

use huesphere_platform::{normalize_winit_key, ExitButton};

use super::core::HuesphereApp;

impl ApplicationHandler for HuesphereApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if !self.initialize_window(event_loop) {
            self.init_failed = true;
            event_loop.exit();
            return;
        }

        self.request_redraw();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Window close requested");
                self.should_exit = true;
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    if let Some(ref mut rs) = self.render_state {
                        rs.resize(size.width, size.height);
                    }
                    self.request_redraw();
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                self.handle_keyboard_input(event);
            }

            WindowEvent::MouseInput { state, button, .. } => {
                // Mouse back button is a platform back press.
                if button == MouseButton::Back {
                    self.input
                        .handle_button(ExitButton::Back, state == ElementState::Pressed);
                }
            }

            WindowEvent::Focused(false) => {
                self.input.clear();
            }

            WindowEvent::RedrawRequested => {
                if self.poll_exit() {
                    event_loop.exit();
                    return;
                }
                self.render_frame();
                self.request_redraw();
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.should_exit {
            event_loop.exit();
        }
    }
}

impl HuesphereApp {
    /// Feed a key press or release into the exit-button state.
    fn handle_keyboard_input(&mut self, event: KeyEvent) {
        let KeyEvent {
            logical_key, state, ..
        } = event;
        let is_press = state == ElementState::Pressed;

        let key_name = match &logical_key {
            Key::Named(named) => format!("{named:?}"),
            Key::Character(c) => c.to_string(),
            _ => return,
        };

        let normalized = normalize_winit_key(&key_name);
        self.input.handle_key(&normalized, is_press);
    }
}
