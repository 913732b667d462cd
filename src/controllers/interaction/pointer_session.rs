use crate::core::data::point::DevicePoint;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PointerSource {
    Mouse,
    Touch(u64),
}

/// One in-progress drag.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointerSession {
    source: PointerSource,
    start: DevicePoint,
    last: DevicePoint,
}

impl PointerSession {
    #[must_use]
    pub fn new(source: PointerSource, position: DevicePoint) -> Self {
        Self {
            source,
            start: position,
            last: position,
        }
    }

    #[must_use]
    pub fn source(&self) -> PointerSource {
        self.source
    }

    #[must_use]
    pub fn start(&self) -> DevicePoint {
        self.start
    }

    #[must_use]
    pub fn last(&self) -> DevicePoint {
        self.last
    }

    /// Records `position` and returns the device delta since the previous one.
    pub fn move_to(&mut self, position: DevicePoint) -> (f64, f64) {
        let delta = position.delta_from(self.last);
        self.last = position;
        delta
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_to_returns_incremental_deltas() {
        let mut session = PointerSession::new(PointerSource::Mouse, DevicePoint::new(10.0, 10.0));

        assert_eq!(session.move_to(DevicePoint::new(15.0, 7.0)), (5.0, -3.0));
        assert_eq!(session.move_to(DevicePoint::new(16.0, 7.0)), (1.0, 0.0));

        assert_eq!(session.start(), DevicePoint::new(10.0, 10.0));
        assert_eq!(session.last(), DevicePoint::new(16.0, 7.0));
    }
}
