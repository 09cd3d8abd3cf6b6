use foundation::math::Vec2;

/// Degrees of rotation per pixel of pointer travel.
pub const DRAG_SENSITIVITY: f64 = 0.5;

/// Rotation change produced by one pointer-move while dragging.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RotationDelta {
    pub d_yaw_deg: f64,
    pub d_pitch_deg: f64,
}

#[derive(Debug, Copy, Clone, PartialEq)]
struct DragSession {
    last_pointer: Vec2,
}

/// Converts pointer drags into rotation deltas.
///
/// A session exists only between pointer-down and pointer-up/leave; while
/// one is open, the idle animation tick must not rotate.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DragController {
    session: Option<DragSession>,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    pub fn pointer_down(&mut self, pointer: Vec2) {
        self.session = Some(DragSession {
            last_pointer: pointer,
        });
    }

    /// Returns the rotation delta for this move, or `None` when no session
    /// is open. `yaw += dx * k`, `pitch -= dy * k`.
    pub fn pointer_move(&mut self, pointer: Vec2) -> Option<RotationDelta> {
        let session = self.session.as_mut()?;
        let dx = pointer.x - session.last_pointer.x;
        let dy = pointer.y - session.last_pointer.y;
        session.last_pointer = pointer;
        Some(RotationDelta {
            d_yaw_deg: dx * DRAG_SENSITIVITY,
            d_pitch_deg: -dy * DRAG_SENSITIVITY,
        })
    }

    /// Close the session. Returns whether one was open.
    pub fn pointer_up(&mut self) -> bool {
        self.session.take().is_some()
    }
}
