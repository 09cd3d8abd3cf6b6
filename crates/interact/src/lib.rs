pub mod drag;
pub mod hover;
pub mod state;

pub use drag::{DRAG_SENSITIVITY, DragController, RotationDelta};
pub use hover::{HIT_RADIUS_PX, HoverTracker, HoverTransition, MarkerPoint, hit_test};
pub use state::{Cursor, InteractionState};
