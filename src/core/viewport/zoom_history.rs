use crate::core::viewport::transform::ViewportTransform;

/// Checkpoint stack of transforms taken at each zoom-in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ZoomHistory {
    checkpoints: Vec<ViewportTransform>,
}

impl ZoomHistory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, transform: ViewportTransform) {
        self.checkpoints.push(transform);
    }

    pub fn pop(&mut self) -> Option<ViewportTransform> {
        self.checkpoints.pop()
    }

    #[must_use]
    pub fn peek(&self) -> Option<&ViewportTransform> {
        self.checkpoints.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.checkpoints.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.checkpoints.is_empty()
    }

    pub fn clear(&mut self) {
        self.checkpoints.clear();
    }
}
