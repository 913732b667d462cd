use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, TouchPhase, WindowEvent};

use crate::controllers::interaction::input_event::{InputEvent, PointerButton};
use crate::core::data::point::DevicePoint;

/// Converts winit window events into controller input.
///
/// winit reports mouse buttons and wheel ticks without a position, so the
/// last cursor position is tracked here and attached to them. Resizes are not
/// translated; the app filters out minimised sizes first.
#[derive(Debug, Default)]
pub struct InputTranslator {
    cursor: DevicePoint,
}

impl InputTranslator {
    #[must_use]
    pub fn cursor(&self) -> DevicePoint {
        self.cursor
    }

    pub fn translate(&mut self, event: &WindowEvent) -> Option<InputEvent> {
        match event {
            WindowEvent::CursorMoved { position, .. } => Some(self.cursor_moved(*position)),
            WindowEvent::MouseInput { state, button, .. } => {
                Some(self.mouse_input(*state, *button))
            }
            WindowEvent::MouseWheel { delta, .. } => Some(self.mouse_wheel(*delta)),
            WindowEvent::Touch(touch) => Some(touch_event(touch.phase, touch.id, touch.location)),
            _ => None,
        }
    }

    fn cursor_moved(&mut self, position: PhysicalPosition<f64>) -> InputEvent {
        self.cursor = to_device_point(position);
        InputEvent::PointerMove {
            position: self.cursor,
        }
    }

    fn mouse_input(&self, state: ElementState, button: MouseButton) -> InputEvent {
        let button = pointer_button(button);
        match state {
            ElementState::Pressed => InputEvent::PointerDown {
                button,
                position: self.cursor,
            },
            ElementState::Released => InputEvent::PointerUp { button },
        }
    }

    fn mouse_wheel(&self, delta: MouseScrollDelta) -> InputEvent {
        InputEvent::Wheel {
            delta_y: wheel_delta_y(delta),
            position: self.cursor,
        }
    }
}

/// Button releases and touch ends must reach the controller even when the
/// overlay consumed them, or a drag that ends over the panel stays open.
#[must_use]
pub fn is_release(event: &WindowEvent) -> bool {
    match event {
        WindowEvent::MouseInput { state, .. } => *state == ElementState::Released,
        WindowEvent::Touch(touch) => ends_touch(touch.phase),
        _ => false,
    }
}

fn ends_touch(phase: TouchPhase) -> bool {
    matches!(phase, TouchPhase::Ended | TouchPhase::Cancelled)
}

fn to_device_point(position: PhysicalPosition<f64>) -> DevicePoint {
    DevicePoint::new(position.x, position.y)
}

#[must_use]
pub fn pointer_button(button: MouseButton) -> PointerButton {
    match button {
        MouseButton::Left => PointerButton::Primary,
        MouseButton::Right => PointerButton::Secondary,
        MouseButton::Middle => PointerButton::Middle,
        MouseButton::Back => PointerButton::Other(3),
        MouseButton::Forward => PointerButton::Other(4),
        MouseButton::Other(code) => PointerButton::Other(code),
    }
}

/// Vertical wheel delta in DOM sign convention (negative zooms in).
#[must_use]
pub fn wheel_delta_y(delta: MouseScrollDelta) -> f64 {
    match delta {
        MouseScrollDelta::LineDelta(_, y) => -f64::from(y),
        MouseScrollDelta::PixelDelta(position) => -position.y,
    }
}

fn touch_event(phase: TouchPhase, id: u64, location: PhysicalPosition<f64>) -> InputEvent {
    let position = to_device_point(location);

    match phase {
        TouchPhase::Started => InputEvent::TouchStart { id, position },
        TouchPhase::Moved => InputEvent::TouchMove { id, position },
        TouchPhase::Ended => InputEvent::TouchEnd { id },
        TouchPhase::Cancelled => InputEvent::TouchCancel { id },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wheel_delta_is_negated() {
        assert_eq!(wheel_delta_y(MouseScrollDelta::LineDelta(0.0, 1.0)), -1.0);
        assert_eq!(wheel_delta_y(MouseScrollDelta::LineDelta(0.5, -2.0)), 2.0);
        assert_eq!(
            wheel_delta_y(MouseScrollDelta::PixelDelta(PhysicalPosition::new(3.0, -40.0))),
            40.0
        );
    }

    #[test]
    fn test_horizontal_only_scroll_has_zero_delta() {
        assert_eq!(wheel_delta_y(MouseScrollDelta::LineDelta(1.0, 0.0)), 0.0);
    }

    #[test]
    fn test_pointer_button_mapping() {
        assert_eq!(pointer_button(MouseButton::Left), PointerButton::Primary);
        assert_eq!(pointer_button(MouseButton::Right), PointerButton::Secondary);
        assert_eq!(pointer_button(MouseButton::Middle), PointerButton::Middle);
        assert_eq!(pointer_button(MouseButton::Other(9)), PointerButton::Other(9));
    }

    #[test]
    fn test_button_and_wheel_use_last_cursor_position() {
        let mut translator = InputTranslator::default();

        assert_eq!(
            translator.cursor_moved(PhysicalPosition::new(120.0, 45.5)),
            InputEvent::PointerMove {
                position: DevicePoint::new(120.0, 45.5)
            }
        );
        assert_eq!(
            translator.mouse_input(ElementState::Pressed, MouseButton::Left),
            InputEvent::PointerDown {
                button: PointerButton::Primary,
                position: DevicePoint::new(120.0, 45.5)
            }
        );
        assert_eq!(
            translator.mouse_input(ElementState::Released, MouseButton::Left),
            InputEvent::PointerUp {
                button: PointerButton::Primary
            }
        );
        assert_eq!(
            translator.mouse_wheel(MouseScrollDelta::LineDelta(0.0, 1.0)),
            InputEvent::Wheel {
                delta_y: -1.0,
                position: DevicePoint::new(120.0, 45.5)
            }
        );
    }

    #[test]
    fn test_touch_phases() {
        assert_eq!(
            touch_event(TouchPhase::Started, 5, PhysicalPosition::new(1.0, 2.0)),
            InputEvent::TouchStart {
                id: 5,
                position: DevicePoint::new(1.0, 2.0)
            }
        );
        assert_eq!(
            touch_event(TouchPhase::Moved, 5, PhysicalPosition::new(3.0, 4.0)),
            InputEvent::TouchMove {
                id: 5,
                position: DevicePoint::new(3.0, 4.0)
            }
        );
        assert_eq!(
            touch_event(TouchPhase::Ended, 5, PhysicalPosition::new(3.0, 4.0)),
            InputEvent::TouchEnd { id: 5 }
        );
        assert_eq!(
            touch_event(TouchPhase::Cancelled, 6, PhysicalPosition::new(0.0, 0.0)),
            InputEvent::TouchCancel { id: 6 }
        );
    }

    #[test]
    fn test_only_ended_and_cancelled_touches_are_releases() {
        assert!(ends_touch(TouchPhase::Ended));
        assert!(ends_touch(TouchPhase::Cancelled));
        assert!(!ends_touch(TouchPhase::Started));
        assert!(!ends_touch(TouchPhase::Moved));
    }

    #[test]
    fn test_unrelated_events_are_not_translated() {
        let mut translator = InputTranslator::default();

        assert_eq!(translator.translate(&WindowEvent::Focused(true)), None);
        assert_eq!(translator.translate(&WindowEvent::CloseRequested), None);
        assert_eq!(translator.cursor(), DevicePoint::default());
    }
}
