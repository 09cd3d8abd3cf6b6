pub mod culling;
pub mod path;
pub mod projection;
pub mod rotation;
pub mod viewport;

pub use culling::cull_markers;
pub use projection::{CLIP_ANGLE_DEG, Orthographic};
pub use rotation::Rotation;
pub use viewport::{DEFAULT_HEIGHT_PX, MARGIN_PX, Viewport};
