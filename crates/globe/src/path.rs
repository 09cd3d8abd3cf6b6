use foundation::math::{GeoPoint, Vec2};

use crate::projection::Orthographic;

/// Project a boundary ring into visible screen-space runs.
///
/// The per-vertex clip naturally truncates boundaries partially behind the
/// horizon: consecutive visible vertices join into a run, and each
/// invisible vertex breaks the current run. Runs shorter than two points
/// carry no stroke and are dropped. Degenerate vertices are treated as
/// invisible; they never abort the rest of the frame's draw.
pub fn project_ring(projection: &Orthographic, ring: &[GeoPoint]) -> Vec<Vec<Vec2>> {
    let mut runs = Vec::new();
    let mut current: Vec<Vec2> = Vec::new();

    for &vertex in ring {
        match projection.project(vertex) {
            Some(screen) => current.push(screen),
            None => {
                if current.len() >= 2 {
                    runs.push(std::mem::take(&mut current));
                } else {
                    current.clear();
                }
            }
        }
    }
    if current.len() >= 2 {
        runs.push(current);
    }

    runs
}

/// Project a country's polygons (rings of rings) into flattened subpaths.
pub fn project_polygons(
    projection: &Orthographic,
    polygons: &[Vec<Vec<GeoPoint>>],
) -> Vec<Vec<Vec2>> {
    let mut subpaths = Vec::new();
    for polygon in polygons {
        for ring in polygon {
            subpaths.extend(project_ring(projection, ring));
        }
    }
    subpaths
}
