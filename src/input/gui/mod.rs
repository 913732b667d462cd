//! Windowed host: winit for the window and input, pixels for the framebuffer
//! and egui for the settings overlay.

pub mod app;
pub mod commands;
pub mod events;
