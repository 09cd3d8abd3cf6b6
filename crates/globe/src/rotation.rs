use foundation::math::wrap_degrees;

/// Yaw/pitch orientation of the visible hemisphere, in degrees.
///
/// Yaw wraps modulo 360. Pitch is intentionally unclamped (free orbit): a
/// long vertical drag carries the view past a pole and flips the apparent
/// viewing direction.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Rotation {
    pub yaw_deg: f64,
    pub pitch_deg: f64,
}

impl Rotation {
    pub fn new(yaw_deg: f64, pitch_deg: f64) -> Self {
        Self {
            yaw_deg: wrap_degrees(yaw_deg),
            pitch_deg,
        }
    }

    pub fn rotate_by(&mut self, d_yaw_deg: f64, d_pitch_deg: f64) {
        self.yaw_deg = wrap_degrees(self.yaw_deg + d_yaw_deg);
        self.pitch_deg += d_pitch_deg;
    }
}
