use crate::controllers::interactive::events::render::RenderEvent;

/// Receives finished frames and render errors from the worker thread.
pub trait InteractiveControllerPresenterPort: Send + Sync {
    fn present(&self, event: RenderEvent);
}
