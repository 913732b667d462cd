use crate::core::data::point::DevicePoint;
use crate::core::data::viewport_size::ViewportSize;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
    Other(u16),
}

/// Platform-neutral input delivered by the host.
///
/// Positions are device pixels, origin top-left. `Wheel::delta_y` follows the
/// DOM convention: negative scrolls towards the user and zooms in.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum InputEvent {
    PointerDown {
        button: PointerButton,
        position: DevicePoint,
    },
    PointerMove {
        position: DevicePoint,
    },
    PointerUp {
        button: PointerButton,
    },
    Wheel {
        delta_y: f64,
        position: DevicePoint,
    },
    TouchStart {
        id: u64,
        position: DevicePoint,
    },
    TouchMove {
        id: u64,
        position: DevicePoint,
    },
    TouchEnd {
        id: u64,
    },
    TouchCancel {
        id: u64,
    },
    Resized(ViewportSize),
}

/// What handling an event did.
///
/// `consumed` tells the host to suppress the platform default for the event.
/// `changed` means the transform or viewport size moved and a new frame is due.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct EventResponse {
    pub consumed: bool,
    pub changed: bool,
}

impl EventResponse {
    pub const IGNORED: Self = Self {
        consumed: false,
        changed: false,
    };

    #[must_use]
    pub const fn consumed(changed: bool) -> Self {
        Self {
            consumed: true,
            changed,
        }
    }
}
