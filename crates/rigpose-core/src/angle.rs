//! Angle helpers shared by the pose model and the camera.

/// Reduces an angle in degrees to the canonical range (-180, 180].
///
/// Multiples of 360 map to zero; the sign of that zero is unspecified.
///
/// # Example
/// ```
/// use rigpose_core::angle::normalize_degrees;
///
/// assert_eq!(normalize_degrees(200.0), -160.0);
/// assert_eq!(normalize_degrees(-190.0), 170.0);
/// assert_eq!(normalize_degrees(180.0), 180.0);
/// ```
pub fn normalize_degrees(degrees: f64) -> f64 {
    let mut d = degrees % 360.0;
    if d > 180.0 {
        d -= 360.0;
    }
    // `%` keeps the dividend's sign, so -180 itself must fold to +180.
    if d <= -180.0 {
        d += 360.0;
    }
    d
}

/// Clamps `value` into `[min, max]`.
///
/// Direct numeric clamp; limits that straddle the ±180 wrap are not
/// special-cased. Unlike [`f64::clamp`] this never panics when `min > max`.
pub fn clamp_degrees(value: f64, min: f64, max: f64) -> f64 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Hermite smoothstep of `t` clamped to [0, 1].
pub fn smoothstep(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Linear interpolation between `a` and `b`.
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}
