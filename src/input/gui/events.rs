/// Custom user events for the GUI event loop.
#[derive(Debug, Clone)]
pub enum GuiEvent {
    /// The render worker delivered a frame or an error.
    ///
    /// Receiving this does not redraw by itself; the handler requests one.
    Wake,
}
