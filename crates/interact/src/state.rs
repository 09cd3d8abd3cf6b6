/// Pointer cursor affordance reported to the host.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Cursor {
    Grab,
    Grabbing,
}

/// Explicit interaction machine.
///
/// Transitions:
/// - `Idle -> Dragging` on pointer-down (also from `Hovering`; the implied
///   hover leave is the caller's to report)
/// - `Dragging -> Idle` on pointer-up/leave
/// - `Idle -> Hovering` on marker pointer-enter
/// - `Hovering -> Idle` on marker pointer-leave
/// - marker pointer-enter is ignored entirely while `Dragging`
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum InteractionState {
    #[default]
    Idle,
    Dragging,
    Hovering,
}

impl InteractionState {
    pub fn cursor(self) -> Cursor {
        match self {
            InteractionState::Dragging => Cursor::Grabbing,
            _ => Cursor::Grab,
        }
    }

    pub fn is_dragging(self) -> bool {
        self == InteractionState::Dragging
    }

    /// Whether marker enter events may be honored.
    pub fn accepts_hover(self) -> bool {
        self != InteractionState::Dragging
    }

    pub fn on_pointer_down(self) -> Self {
        InteractionState::Dragging
    }

    pub fn on_pointer_up(self) -> Self {
        match self {
            InteractionState::Dragging => InteractionState::Idle,
            other => other,
        }
    }

    pub fn on_marker_enter(self) -> Self {
        match self {
            InteractionState::Idle => InteractionState::Hovering,
            other => other,
        }
    }

    pub fn on_marker_leave(self) -> Self {
        match self {
            InteractionState::Hovering => InteractionState::Idle,
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Cursor, InteractionState};

    #[test]
    fn drag_owns_the_cursor() {
        assert_eq!(InteractionState::Idle.cursor(), Cursor::Grab);
        assert_eq!(InteractionState::Hovering.cursor(), Cursor::Grab);
        assert_eq!(InteractionState::Dragging.cursor(), Cursor::Grabbing);
    }

    #[test]
    fn enters_are_ignored_while_dragging() {
        let state = InteractionState::Idle.on_pointer_down();
        assert_eq!(state.on_marker_enter(), InteractionState::Dragging);
        assert!(!state.accepts_hover());
    }

    #[test]
    fn hover_round_trip() {
        let state = InteractionState::Idle.on_marker_enter();
        assert_eq!(state, InteractionState::Hovering);
        assert_eq!(state.on_marker_leave(), InteractionState::Idle);
    }

    #[test]
    fn pointer_down_preempts_hover() {
        let state = InteractionState::Hovering.on_pointer_down();
        assert_eq!(state, InteractionState::Dragging);
        assert_eq!(state.on_pointer_up(), InteractionState::Idle);
    }
}
