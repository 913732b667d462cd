//! Background render worker.
//!
//! The host submits immutable [`RenderRequest`] snapshots; a single worker
//! thread renders the newest one and hands the result to an
//! [`InteractiveControllerPresenterPort`]. Requests that are superseded while
//! waiting are never rendered and frames that finish after being superseded
//! are dropped.

mod controller;
pub mod data;
pub mod errors;
pub mod events;
pub mod ports;

pub use controller::InteractiveController;
pub use data::frame_data::FrameData;
pub use data::render_request::RenderRequest;
pub use errors::render::RenderError;
pub use events::render::RenderEvent;
pub use ports::presenter::InteractiveControllerPresenterPort;
