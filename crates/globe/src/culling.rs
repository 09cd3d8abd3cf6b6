use foundation::math::GeoPoint;

use crate::projection::Orthographic;

/// Per-frame visibility of the marker set under the current rotation.
///
/// Returns one flag per coordinate, in input order. Culled markers are
/// hidden, not removed; they reappear as rotation continues. Records
/// without a coordinate never reach this pass.
pub fn cull_markers(projection: &Orthographic, coordinates: &[GeoPoint]) -> Vec<bool> {
    coordinates
        .iter()
        .map(|&c| projection.is_visible(c))
        .collect()
}
