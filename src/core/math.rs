// Vector math shared by the physics core
//
// `Vector2` is glam's `Vec2`: add, subtract, scale, dot and length come
// straight from glam's operators and methods. Only normalization needs a
// crate-level helper because the zero vector has a fixed policy here. The
// scalar helpers below are used for wall limits and float comparisons.

pub use glam::Vec2 as Vector2;

/// Build a vector from its components
#[inline]
pub fn vec2(x: f32, y: f32) -> Vector2 {
    Vector2::new(x, y)
}

/// Unit vector pointing along `v`, or the zero vector when `v` has length 0.
///
/// glam's `Vec2::normalize` yields NaN for the zero vector and
/// `normalize_or_zero` also flushes tiny but non-zero vectors to zero.
/// Neither matches the contract the collision code relies on: only an
/// exactly zero length degenerates.
#[inline]
pub fn normalize(v: Vector2) -> Vector2 {
    let len = v.length();
    if len == 0.0 {
        Vector2::ZERO
    } else {
        v * (1.0 / len)
    }
}

/// Clamp a value between min and max
pub fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Check if two f32 values are within `epsilon` of each other
pub fn approx_equal(a: f32, b: f32, epsilon: f32) -> bool {
    (a - b).abs() < epsilon
}
