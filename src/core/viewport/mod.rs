//! Viewport state: where the view sits on the complex plane and how it got there.

pub mod ndc;
pub mod transform;
pub mod viewport_state;
pub mod zoom_history;

pub use transform::{ViewportTransform, ViewportTransformError};
pub use viewport_state::{ViewportState, ZoomOutcome};
pub use zoom_history::ZoomHistory;
