use foundation::math::Vec2;

/// Fixed margin between the globe silhouette and the container edge.
pub const MARGIN_PX: f64 = 20.0;

/// The host container's height is effectively fixed.
pub const DEFAULT_HEIGHT_PX: f64 = 600.0;

/// Host container dimensions and the projection parameters derived from
/// them. A width change is a full draw setup; incremental resize is not
/// attempted.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Globe radius in pixels: `min(width, height) / 2 - margin`.
    pub fn globe_size(&self) -> f64 {
        self.width.min(self.height) / 2.0 - MARGIN_PX
    }

    /// Projection translation: the container center.
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// The viewport after a width change, or `None` for zero/negative
    /// transient widths (observed during initial mount), which must be
    /// ignored.
    pub fn with_width(&self, width: f64) -> Option<Viewport> {
        if !(width > 0.0) {
            return None;
        }
        Some(Viewport::new(width, self.height))
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(0.0, DEFAULT_HEIGHT_PX)
    }
}
