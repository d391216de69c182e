use crate::geometry::Point;

/// Pointer drag state. The baseline moves with every drag event, so deltas
/// are incremental rather than measured from the press.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DragSession {
    #[default]
    Idle,
    Dragging { last: Point },
}

impl DragSession {
    pub fn press(&mut self, at: Point) {
        *self = DragSession::Dragging { last: at };
    }

    /// Advance to `to` and return the movement since the previous event.
    /// `None` while idle.
    pub fn advance(&mut self, to: Point) -> Option<(f64, f64)> {
        match self {
            DragSession::Idle => None,
            DragSession::Dragging { last } => {
                let delta = (to.x - last.x, to.y - last.y);
                *last = to;
                Some(delta)
            }
        }
    }

    pub fn release(&mut self) {
        *self = DragSession::Idle;
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, DragSession::Dragging { .. })
    }
}
