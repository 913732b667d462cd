use log::{debug, trace};

use crate::controllers::interaction::input_event::{EventResponse, InputEvent, PointerButton};
use crate::controllers::interaction::interaction_config::{
    InteractionConfig, InteractionConfigError,
};
use crate::controllers::interaction::pointer_session::{PointerSession, PointerSource};
use crate::core::data::complex::Complex;
use crate::core::data::point::DevicePoint;
use crate::core::data::viewport_size::ViewportSize;
use crate::core::viewport::ndc::device_to_ndc;
use crate::core::viewport::transform::ViewportTransform;
use crate::core::viewport::viewport_state::{ViewportState, ZoomOutcome};

/// Turns pointer, touch, wheel and resize input into viewport changes.
///
/// Runs entirely on the host's event-loop thread. A single optional
/// [`PointerSession`] tracks the active drag; whichever gesture opens it first
/// owns it until it ends.
#[derive(Debug)]
pub struct InteractionController {
    config: InteractionConfig,
    state: ViewportState,
    size: ViewportSize,
    session: Option<PointerSession>,
    attached: bool,
}

impl InteractionController {
    pub fn new(config: InteractionConfig, size: ViewportSize) -> Result<Self, InteractionConfigError> {
        config.validate()?;

        Ok(Self {
            config,
            state: ViewportState::new(config.initial_transform),
            size,
            session: None,
            attached: false,
        })
    }

    pub fn attach(&mut self) {
        if self.attached {
            return;
        }

        self.attached = true;
        debug!("interaction controller attached");
    }

    pub fn detach(&mut self) {
        if !self.attached {
            return;
        }

        self.attached = false;
        self.session = None;
        debug!("interaction controller detached");
    }

    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    #[must_use]
    pub fn transform(&self) -> ViewportTransform {
        self.state.transform()
    }

    #[must_use]
    pub fn history_depth(&self) -> usize {
        self.state.history().len()
    }

    #[must_use]
    pub fn viewport_size(&self) -> ViewportSize {
        self.size
    }

    #[must_use]
    pub fn pointer_session(&self) -> Option<&PointerSession> {
        self.session.as_ref()
    }

    pub fn reset_view(&mut self) {
        self.state.reset(self.config.initial_transform);
        self.session = None;
        debug!("view reset");
    }

    pub fn handle(&mut self, event: InputEvent) -> EventResponse {
        if !self.attached {
            return EventResponse::IGNORED;
        }

        match event {
            InputEvent::PointerDown { button, position } => {
                if button != PointerButton::Primary {
                    return EventResponse::IGNORED;
                }
                self.open_session(PointerSource::Mouse, position)
            }
            InputEvent::PointerMove { position } => self.drag(PointerSource::Mouse, position),
            InputEvent::PointerUp { button } => {
                if button != PointerButton::Primary {
                    return EventResponse::IGNORED;
                }
                self.close_session(PointerSource::Mouse)
            }
            InputEvent::Wheel { delta_y, position } => self.wheel(delta_y, position),
            InputEvent::TouchStart { id, position } => {
                self.open_session(PointerSource::Touch(id), position)
            }
            InputEvent::TouchMove { id, position } => self.drag(PointerSource::Touch(id), position),
            InputEvent::TouchEnd { id } | InputEvent::TouchCancel { id } => {
                self.close_session(PointerSource::Touch(id))
            }
            InputEvent::Resized(size) => self.resize(size),
        }
    }

    fn open_session(&mut self, source: PointerSource, position: DevicePoint) -> EventResponse {
        if self.session.is_some() {
            return EventResponse::IGNORED;
        }

        self.session = Some(PointerSession::new(source, position));
        EventResponse::consumed(false)
    }

    fn close_session(&mut self, source: PointerSource) -> EventResponse {
        match self.session {
            Some(session) if session.source() == source => {
                self.session = None;
                EventResponse::consumed(false)
            }
            _ => EventResponse::IGNORED,
        }
    }

    fn drag(&mut self, source: PointerSource, position: DevicePoint) -> EventResponse {
        let Some(session) = self.session.as_mut() else {
            return EventResponse::IGNORED;
        };
        if session.source() != source {
            return EventResponse::IGNORED;
        }

        let (dx, dy) = session.move_to(position);
        if dx == 0.0 && dy == 0.0 {
            return EventResponse::consumed(false);
        }

        let scale = self.pan_scale(source);
        let delta = Complex::new(
            -dx / f64::from(self.size.width()) * scale,
            dy / f64::from(self.size.height()) * scale,
        );

        self.state.pan_by(delta);
        trace!("pan by ({}, {}) -> offset {:?}", delta.real, delta.imag, self.transform().offset());

        EventResponse::consumed(true)
    }

    /// Complex-plane distance covered by a full-width drag at the current zoom.
    fn pan_scale(&self, source: PointerSource) -> f64 {
        let zoom = self.state.transform().zoom();

        match source {
            PointerSource::Mouse => self.config.mouse_pan_scale / zoom,
            PointerSource::Touch(_) => {
                self.config.touch_pan_scale * ((zoom + 1.0).log10() + 1.0) / zoom
            }
        }
    }

    fn wheel(&mut self, delta_y: f64, position: DevicePoint) -> EventResponse {
        let factor = if delta_y < 0.0 {
            self.config.wheel_zoom_in_factor
        } else if delta_y > 0.0 {
            self.config.wheel_zoom_out_factor
        } else {
            return EventResponse::consumed(false);
        };

        let ndc = device_to_ndc(position, self.size);
        let outcome = self.state.zoom_at(factor, ndc);

        EventResponse::consumed(outcome != ZoomOutcome::Unchanged)
    }

    fn resize(&mut self, size: ViewportSize) -> EventResponse {
        if size == self.size {
            return EventResponse::consumed(false);
        }

        debug!(
            "viewport resized {}x{} -> {}x{}",
            self.size.width(),
            self.size.height(),
            size.width(),
            size.height()
        );
        self.size = size;

        EventResponse::consumed(true)
    }
}
