use foundation::math::{GeoPoint, Vec2, Vec3};

use crate::rotation::Rotation;

/// Angular threshold beyond which a point is on the far hemisphere.
pub const CLIP_ANGLE_DEG: f64 = 90.0;

/// Orthographic projection of rotated geographic coordinates onto the
/// screen plane.
///
/// Pure and deterministic: identical rotation and coordinate always yield
/// the identical screen point. Rotation applies yaw first (a spin about
/// the polar axis), then pitch (a tilt about the screen-horizontal axis).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Orthographic {
    scale: f64,
    translate: Vec2,
    rotation: Rotation,
}

impl Orthographic {
    pub fn new(scale: f64, translate: Vec2, rotation: Rotation) -> Self {
        Self {
            scale,
            translate,
            rotation,
        }
    }

    /// Cosine of the angular distance between the point and the view
    /// center. NaN for non-finite coordinates.
    pub fn cos_center_distance(&self, point: GeoPoint) -> f64 {
        if !point.is_finite() {
            return f64::NAN;
        }
        self.rotated(point).x
    }

    /// Visible iff the angular distance from the view center is below
    /// [`CLIP_ANGLE_DEG`].
    pub fn is_visible(&self, point: GeoPoint) -> bool {
        self.cos_center_distance(point) > 0.0
    }

    /// Project onto the screen plane; `None` for far-hemisphere or
    /// degenerate coordinates.
    pub fn project(&self, point: GeoPoint) -> Option<Vec2> {
        if !point.is_finite() {
            return None;
        }
        let r = self.rotated(point);
        if r.x <= 0.0 {
            return None;
        }
        // Screen y grows downward.
        Some(Vec2::new(
            self.translate.x + self.scale * r.y,
            self.translate.y - self.scale * r.z,
        ))
    }

    /// Unit vector of the point in the rotated view frame: +x toward the
    /// viewer, +y screen-right, +z screen-up.
    fn rotated(&self, point: GeoPoint) -> Vec3 {
        let spun = GeoPoint::new(point.lon_deg + self.rotation.yaw_deg, point.lat_deg);
        let v = spun.unit_vector();
        let pitch = self.rotation.pitch_deg.to_radians();
        let (sin_p, cos_p) = pitch.sin_cos();
        Vec3::new(
            v.x * cos_p - v.z * sin_p,
            v.y,
            v.z * cos_p + v.x * sin_p,
        )
    }
}
