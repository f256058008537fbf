//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop: one window, one render state, one scene.

mod core;
mod event_handler;
mod init;
mod render;

pub use core::LunariaApp;
