pub mod controller;
pub mod scene;

pub use controller::{GlobeView, HoverEvent, IDLE_STEP_DEG};
pub use scene::{CountryPath, Disc, FrameScene, MarkerSprite};
