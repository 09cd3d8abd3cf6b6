//! Retained scene emitted by the controller.
//!
//! On every tick each shape's screen position and color is recomputed and
//! reassigned from current state; the host rendering API (retained-mode
//! vector, immediate-mode canvas, native 2-D) only has to replay the scene.

use foundation::math::Vec2;
use interact::Cursor;
use symbology::Rgba;

/// Base marker radius in pixels.
pub const MARKER_RADIUS_PX: f64 = 4.0;
/// Radius of the hovered marker.
pub const MARKER_EMPHASIZED_RADIUS_PX: f64 = 8.0;
/// Base marker stroke (white).
pub const MARKER_STROKE: Rgba = [1.0, 1.0, 1.0, 1.0];
/// Stroke of the hovered marker.
pub const MARKER_EMPHASIS_STROKE: Rgba = [0.980, 0.800, 0.082, 1.0];

/// Globe base disc fill.
pub const DISC_FILL: Rgba = [0.118, 0.161, 0.231, 1.0];
/// Globe base disc stroke.
pub const DISC_STROKE: Rgba = [0.059, 0.090, 0.165, 1.0];
/// Atmosphere ring stroke.
pub const ATMOSPHERE_STROKE: Rgba = [0.220, 0.741, 0.973, 0.3];

/// Country boundary stroke.
pub const COUNTRY_STROKE: Rgba = [0.200, 0.255, 0.333, 1.0];
pub const COUNTRY_STROKE_WIDTH: f64 = 0.5;

/// The globe silhouette (and the atmosphere ring drawn over it).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Disc {
    pub center: Vec2,
    pub radius: f64,
}

/// One country's fill and its visible boundary subpaths.
#[derive(Debug, Clone, PartialEq)]
pub struct CountryPath {
    pub name: String,
    pub fill: Rgba,
    pub subpaths: Vec<Vec<Vec2>>,
}

/// One city marker. Culled markers keep their slot with no position, so
/// they reappear without re-creation as rotation continues.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerSprite {
    /// Stable slot into the controller's marker set.
    pub index: usize,
    pub position: Option<Vec2>,
    pub color: Rgba,
    pub radius: f64,
    pub stroke: Rgba,
    pub emphasized: bool,
}

impl MarkerSprite {
    pub fn is_visible(&self) -> bool {
        self.position.is_some()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FrameScene {
    pub disc: Option<Disc>,
    pub atmosphere: Option<Disc>,
    pub countries: Vec<CountryPath>,
    /// Draw order; the hovered marker is raised to the back of the list.
    pub markers: Vec<MarkerSprite>,
    pub cursor: Cursor,
}

impl FrameScene {
    pub fn empty(cursor: Cursor) -> Self {
        Self {
            disc: None,
            atmosphere: None,
            countries: Vec::new(),
            markers: Vec::new(),
            cursor,
        }
    }
}
