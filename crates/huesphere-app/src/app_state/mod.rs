//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop: one-time scene setup on resume, then a per-frame tick that
//! polls the exit buttons and draws the sphere.

mod core;
mod event_handler;
mod init;
mod render;

pub use core::HuesphereApp;
