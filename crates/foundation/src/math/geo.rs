use super::Vec3;

/// Geographic coordinate in degrees.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GeoPoint {
    pub lon_deg: f64,
    pub lat_deg: f64,
}

impl GeoPoint {
    pub fn new(lon_deg: f64, lat_deg: f64) -> Self {
        Self { lon_deg, lat_deg }
    }

    pub fn is_finite(self) -> bool {
        self.lon_deg.is_finite() && self.lat_deg.is_finite()
    }

    /// Unit vector on the sphere: +x toward (0°, 0°), +y toward (90°E, 0°),
    /// +z toward the north pole.
    pub fn unit_vector(self) -> Vec3 {
        let lon = self.lon_deg.to_radians();
        let lat = self.lat_deg.to_radians();
        let cos_lat = lat.cos();
        Vec3::new(cos_lat * lon.cos(), cos_lat * lon.sin(), lat.sin())
    }
}

#[cfg(test)]
mod tests {
    use super::GeoPoint;
    use crate::math::Vec3;

    fn assert_close(a: Vec3, b: Vec3, eps: f64) {
        assert!((a.x - b.x).abs() <= eps, "x: {} vs {}", a.x, b.x);
        assert!((a.y - b.y).abs() <= eps, "y: {} vs {}", a.y, b.y);
        assert!((a.z - b.z).abs() <= eps, "z: {} vs {}", a.z, b.z);
    }

    #[test]
    fn unit_vector_at_origin() {
        let v = GeoPoint::new(0.0, 0.0).unit_vector();
        assert_close(v, Vec3::new(1.0, 0.0, 0.0), 1e-12);
    }

    #[test]
    fn unit_vector_at_90e() {
        let v = GeoPoint::new(90.0, 0.0).unit_vector();
        assert_close(v, Vec3::new(0.0, 1.0, 0.0), 1e-12);
    }

    #[test]
    fn unit_vector_at_north_pole() {
        let v = GeoPoint::new(0.0, 90.0).unit_vector();
        assert_close(v, Vec3::new(0.0, 0.0, 1.0), 1e-12);
    }

    #[test]
    fn non_finite_coordinate_is_flagged() {
        assert!(!GeoPoint::new(f64::NAN, 0.0).is_finite());
        assert!(!GeoPoint::new(0.0, f64::INFINITY).is_finite());
        assert!(GeoPoint::new(-9.14, 38.72).is_finite());
    }
}
