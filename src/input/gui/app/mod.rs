pub mod gui_app;
pub mod input_translation;
pub mod ports;
pub mod state;
