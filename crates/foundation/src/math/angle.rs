/// Wrap an angle in degrees into `[0, 360)`.
///
/// `-0.0` and exact multiples of 360 canonicalize to `0.0`.
pub fn wrap_degrees(deg: f64) -> f64 {
    let wrapped = deg.rem_euclid(360.0);
    if wrapped == 360.0 || wrapped == 0.0 {
        0.0
    } else {
        wrapped
    }
}
