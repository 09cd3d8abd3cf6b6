use serde_json::Value;

use foundation::math::GeoPoint;

/// One country's boundary geometry: polygons -> rings -> coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct CountryShape {
    /// The geometry's `name` property; empty when the source omits it.
    pub name: String,
    pub polygons: Vec<Vec<Vec<GeoPoint>>>,
}

/// World boundaries decoded from a compact topology resource.
///
/// The encoding is the TopoJSON layout: coordinates are shared `arcs`,
/// optionally quantized as integer deltas under a `transform`
/// (`scale`/`translate`), and geometries reference arcs by index where a
/// negative index means the complement arc traversed in reverse.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorldTopology {
    pub countries: Vec<CountryShape>,
}

#[derive(Debug)]
pub enum TopologyError {
    Parse(String),
    NotATopology,
    MissingObject(String),
    InvalidArc { index: usize, reason: String },
    InvalidGeometry { index: usize, reason: String },
}

impl std::fmt::Display for TopologyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TopologyError::Parse(reason) => write!(f, "topology parse error: {reason}"),
            TopologyError::NotATopology => write!(f, "expected a Topology object"),
            TopologyError::MissingObject(name) => {
                write!(f, "topology has no object named {name}")
            }
            TopologyError::InvalidArc { index, reason } => {
                write!(f, "invalid arc at index {index}: {reason}")
            }
            TopologyError::InvalidGeometry { index, reason } => {
                write!(f, "invalid geometry at index {index}: {reason}")
            }
        }
    }
}

impl std::error::Error for TopologyError {}

/// Quantization transform. Identity when the resource is not quantized.
#[derive(Debug, Copy, Clone, PartialEq)]
struct Transform {
    scale: [f64; 2],
    translate: [f64; 2],
    quantized: bool,
}

impl Transform {
    fn identity() -> Self {
        Self {
            scale: [1.0, 1.0],
            translate: [0.0, 0.0],
            quantized: false,
        }
    }
}

impl WorldTopology {
    pub fn from_topojson_str(payload: &str, object_name: &str) -> Result<Self, TopologyError> {
        let value: Value =
            serde_json::from_str(payload).map_err(|e| TopologyError::Parse(e.to_string()))?;
        Self::from_topojson_value(&value, object_name)
    }

    pub fn from_topojson_value(value: &Value, object_name: &str) -> Result<Self, TopologyError> {
        let obj = value.as_object().ok_or(TopologyError::NotATopology)?;
        let ty = obj
            .get("type")
            .and_then(|v| v.as_str())
            .ok_or(TopologyError::NotATopology)?;
        if ty != "Topology" {
            return Err(TopologyError::NotATopology);
        }

        let transform = decode_transform(obj.get("transform"))?;
        let arcs = decode_arcs(obj.get("arcs"), transform)?;

        let geometries = obj
            .get("objects")
            .and_then(|v| v.as_object())
            .and_then(|objects| objects.get(object_name))
            .and_then(|v| v.as_object())
            .and_then(|collection| collection.get("geometries"))
            .and_then(|v| v.as_array())
            .ok_or_else(|| TopologyError::MissingObject(object_name.to_string()))?;

        let mut countries = Vec::with_capacity(geometries.len());
        for (index, geometry) in geometries.iter().enumerate() {
            if let Some(shape) = decode_geometry(index, geometry, &arcs)? {
                countries.push(shape);
            }
        }

        Ok(Self { countries })
    }

    pub fn country(&self, name: &str) -> Option<&CountryShape> {
        self.countries.iter().find(|c| c.name == name)
    }
}

fn decode_transform(value: Option<&Value>) -> Result<Transform, TopologyError> {
    let Some(value) = value else {
        return Ok(Transform::identity());
    };
    let obj = value.as_object().ok_or_else(|| TopologyError::Parse(
        "transform must be an object".to_string(),
    ))?;

    let pair = |key: &str| -> Result<[f64; 2], TopologyError> {
        let arr = obj
            .get(key)
            .and_then(|v| v.as_array())
            .ok_or_else(|| TopologyError::Parse(format!("transform missing {key}")))?;
        let x = arr.first().and_then(|v| v.as_f64());
        let y = arr.get(1).and_then(|v| v.as_f64());
        match (x, y) {
            (Some(x), Some(y)) => Ok([x, y]),
            _ => Err(TopologyError::Parse(format!("transform {key} must be [x, y]"))),
        }
    };

    Ok(Transform {
        scale: pair("scale")?,
        translate: pair("translate")?,
        quantized: true,
    })
}

fn decode_arcs(
    value: Option<&Value>,
    transform: Transform,
) -> Result<Vec<Vec<GeoPoint>>, TopologyError> {
    let arcs_val = value.and_then(|v| v.as_array()).ok_or_else(|| {
        TopologyError::Parse("topology missing arcs array".to_string())
    })?;

    let mut arcs = Vec::with_capacity(arcs_val.len());
    for (index, arc_val) in arcs_val.iter().enumerate() {
        let points_val = arc_val
            .as_array()
            .ok_or_else(|| TopologyError::InvalidArc {
                index,
                reason: "arc must be an array of positions".to_string(),
            })?;

        let mut points = Vec::with_capacity(points_val.len());
        // Quantized arcs are delta-encoded: each position accumulates onto
        // the previous one before the transform is applied.
        let mut x = 0.0;
        let mut y = 0.0;
        for position in points_val {
            let pair = position
                .as_array()
                .ok_or_else(|| TopologyError::InvalidArc {
                    index,
                    reason: "position must be [x, y]".to_string(),
                })?;
            let px = pair.first().and_then(|v| v.as_f64());
            let py = pair.get(1).and_then(|v| v.as_f64());
            let (px, py) = match (px, py) {
                (Some(px), Some(py)) => (px, py),
                _ => {
                    return Err(TopologyError::InvalidArc {
                        index,
                        reason: "position must hold two numbers".to_string(),
                    });
                }
            };

            let (lon, lat) = if transform.quantized {
                x += px;
                y += py;
                (
                    x * transform.scale[0] + transform.translate[0],
                    y * transform.scale[1] + transform.translate[1],
                )
            } else {
                (px, py)
            };
            points.push(GeoPoint::new(lon, lat));
        }

        if points.is_empty() {
            return Err(TopologyError::InvalidArc {
                index,
                reason: "arc holds no positions".to_string(),
            });
        }
        arcs.push(points);
    }

    Ok(arcs)
}

fn decode_geometry(
    index: usize,
    value: &Value,
    arcs: &[Vec<GeoPoint>],
) -> Result<Option<CountryShape>, TopologyError> {
    let obj = value
        .as_object()
        .ok_or_else(|| TopologyError::InvalidGeometry {
            index,
            reason: "geometry must be an object".to_string(),
        })?;
    let ty = obj
        .get("type")
        .and_then(|v| v.as_str())
        .ok_or_else(|| TopologyError::InvalidGeometry {
            index,
            reason: "geometry missing type".to_string(),
        })?;

    let name = obj
        .get("properties")
        .and_then(|v| v.as_object())
        .and_then(|props| props.get("name"))
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string();

    let arcs_val = obj.get("arcs");
    let polygons = match ty {
        "Polygon" => vec![decode_rings(index, arcs_val, arcs)?],
        "MultiPolygon" => {
            let polys = arcs_val.and_then(|v| v.as_array()).ok_or_else(|| {
                TopologyError::InvalidGeometry {
                    index,
                    reason: "MultiPolygon missing arcs".to_string(),
                }
            })?;
            let mut out = Vec::with_capacity(polys.len());
            for poly in polys {
                out.push(decode_rings(index, Some(poly), arcs)?);
            }
            out
        }
        // Boundary rendering only consumes polygonal geometries.
        _ => return Ok(None),
    };

    Ok(Some(CountryShape { name, polygons }))
}

fn decode_rings(
    index: usize,
    value: Option<&Value>,
    arcs: &[Vec<GeoPoint>],
) -> Result<Vec<Vec<GeoPoint>>, TopologyError> {
    let rings_val = value.and_then(|v| v.as_array()).ok_or_else(|| {
        TopologyError::InvalidGeometry {
            index,
            reason: "Polygon missing arcs".to_string(),
        }
    })?;

    let mut rings = Vec::with_capacity(rings_val.len());
    for ring_val in rings_val {
        let refs = ring_val
            .as_array()
            .ok_or_else(|| TopologyError::InvalidGeometry {
                index,
                reason: "ring must be an array of arc indexes".to_string(),
            })?;

        let mut ring: Vec<GeoPoint> = Vec::new();
        for arc_ref in refs {
            let raw = arc_ref
                .as_i64()
                .ok_or_else(|| TopologyError::InvalidGeometry {
                    index,
                    reason: "arc index must be an integer".to_string(),
                })?;
            // Negative index: complement arc, traversed in reverse.
            let (arc_index, reversed) = if raw < 0 {
                ((-1 - raw) as usize, true)
            } else {
                (raw as usize, false)
            };
            let arc = arcs
                .get(arc_index)
                .ok_or_else(|| TopologyError::InvalidGeometry {
                    index,
                    reason: format!("arc index {raw} out of range"),
                })?;

            // Consecutive arcs share their join point; skip the duplicate.
            let skip = usize::from(!ring.is_empty());
            if reversed {
                ring.extend(arc.iter().rev().skip(skip));
            } else {
                ring.extend(arc.iter().skip(skip));
            }
        }
        rings.push(ring);
    }

    Ok(rings)
}
