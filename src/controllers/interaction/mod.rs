//! Input handling: turns pointer, touch, wheel and resize events into
//! viewport pans and anchored zooms.

mod controller;
pub mod input_event;
pub mod interaction_config;
pub mod pointer_session;

pub use controller::InteractionController;
pub use input_event::{EventResponse, InputEvent, PointerButton};
pub use interaction_config::{InteractionConfig, InteractionConfigError};
pub use pointer_session::{PointerSession, PointerSource};
