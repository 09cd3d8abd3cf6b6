/// Straight-alpha RGBA color, components in `[0, 1]`.
pub type Rgba = [f32; 4];

/// Sequential color schemes, one per metric.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum SchemeId {
    Inferno,
    Viridis,
    Magma,
    Spectral,
}

/// Fill for countries without a value for the active metric.
pub const NEUTRAL_FILL: Rgba = [0.059, 0.090, 0.165, 1.0];

// Control points sampled evenly over t in [0, 1].
const INFERNO: &[[u8; 3]] = &[
    [0x00, 0x00, 0x04],
    [0x1b, 0x0c, 0x41],
    [0x4a, 0x0c, 0x6b],
    [0x78, 0x1c, 0x6d],
    [0xa5, 0x2c, 0x60],
    [0xcf, 0x44, 0x46],
    [0xed, 0x69, 0x25],
    [0xfb, 0x9b, 0x06],
    [0xf7, 0xd0, 0x3c],
    [0xfc, 0xff, 0xa4],
];

const VIRIDIS: &[[u8; 3]] = &[
    [0x44, 0x01, 0x54],
    [0x48, 0x28, 0x78],
    [0x3e, 0x49, 0x89],
    [0x31, 0x68, 0x8e],
    [0x26, 0x82, 0x8e],
    [0x1f, 0x9e, 0x89],
    [0x35, 0xb7, 0x79],
    [0x6e, 0xce, 0x58],
    [0xb5, 0xde, 0x2b],
    [0xfd, 0xe7, 0x25],
];

const MAGMA: &[[u8; 3]] = &[
    [0x00, 0x00, 0x04],
    [0x18, 0x0f, 0x3d],
    [0x44, 0x0f, 0x76],
    [0x72, 0x1f, 0x81],
    [0x9e, 0x2f, 0x7f],
    [0xcd, 0x40, 0x71],
    [0xf1, 0x60, 0x5d],
    [0xfd, 0x96, 0x68],
    [0xfe, 0xca, 0x8d],
    [0xfc, 0xfd, 0xbf],
];

const SPECTRAL: &[[u8; 3]] = &[
    [0x9e, 0x01, 0x42],
    [0xd5, 0x3e, 0x4f],
    [0xf4, 0x6d, 0x43],
    [0xfd, 0xae, 0x61],
    [0xfe, 0xe0, 0x8b],
    [0xff, 0xff, 0xbf],
    [0xe6, 0xf5, 0x98],
    [0xab, 0xdd, 0xa4],
    [0x66, 0xc2, 0xa5],
    [0x32, 0x88, 0xbd],
    [0x5e, 0x4f, 0xa2],
];

fn control_points(scheme: SchemeId) -> &'static [[u8; 3]] {
    match scheme {
        SchemeId::Inferno => INFERNO,
        SchemeId::Viridis => VIRIDIS,
        SchemeId::Magma => MAGMA,
        SchemeId::Spectral => SPECTRAL,
    }
}

/// Sample a scheme at `t` in `[0, 1]` (clamped), interpolating linearly
/// between control points.
pub fn sample(scheme: SchemeId, t: f64) -> Rgba {
    let points = control_points(scheme);
    let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };

    let span = (points.len() - 1) as f64;
    let position = t * span;
    let low = position.floor() as usize;
    let high = (low + 1).min(points.len() - 1);
    let frac = (position - low as f64) as f32;

    let a = points[low];
    let b = points[high];
    let channel = |i: usize| {
        let ca = a[i] as f32 / 255.0;
        let cb = b[i] as f32 / 255.0;
        ca + (cb - ca) * frac
    };
    [channel(0), channel(1), channel(2), 1.0]
}

/// Darken a color by factor `k`, multiplying each channel by `0.7^k`.
pub fn darken(color: Rgba, k: f32) -> Rgba {
    let factor = 0.7_f32.powf(k);
    [
        color[0] * factor,
        color[1] * factor,
        color[2] * factor,
        color[3],
    ]
}
