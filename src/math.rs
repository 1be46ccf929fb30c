//! Scalar and angle helpers shared by the color math.

/// Sign of `num`: -1.0, 0.0, or 1.0.
///
/// Unlike `f64::signum`, zero maps to zero.
#[inline]
pub fn signum(num: f64) -> f64 {
    if num < 0.0 {
        -1.0
    } else if num == 0.0 {
        0.0
    } else {
        1.0
    }
}

/// Linear interpolation between `start` and `stop`.
///
/// Returns `start` at `amount` = 0 and `stop` at `amount` = 1.
#[inline]
pub fn lerp(start: f64, stop: f64, amount: f64) -> f64 {
    (1.0 - amount) * start + amount * stop
}

/// Sanitize a degree measure into [0, 360).
#[inline]
pub fn sanitize_degrees(degrees: f64) -> f64 {
    let degrees = degrees % 360.0;
    if degrees < 0.0 { degrees + 360.0 } else { degrees }
}

/// Sanitize an integer degree measure into [0, 360).
#[inline]
pub fn sanitize_degrees_int(degrees: i32) -> i32 {
    let degrees = degrees % 360;
    if degrees < 0 { degrees + 360 } else { degrees }
}

/// Direction of the shortest rotation from one hue angle to another.
///
/// Returns 1.0 when increasing `from` is the shortest way to reach `to`,
/// -1.0 when decreasing is shorter. Angles exactly 180 degrees apart
/// return 1.0.
pub fn rotation_direction(from: f64, to: f64) -> f64 {
    let increasing_difference = sanitize_degrees(to - from);
    if increasing_difference <= 180.0 { 1.0 } else { -1.0 }
}

/// Distance between two hue angles on the color circle, in degrees.
pub fn difference_degrees(a: f64, b: f64) -> f64 {
    180.0 - ((a - b).abs() - 180.0).abs()
}

/// Multiply a 1x3 row vector with a 3x3 matrix.
#[inline]
pub fn matrix_multiply(row: [f64; 3], matrix: &[[f64; 3]; 3]) -> [f64; 3] {
    [
        row[0] * matrix[0][0] + row[1] * matrix[0][1] + row[2] * matrix[0][2],
        row[0] * matrix[1][0] + row[1] * matrix[1][1] + row[2] * matrix[1][2],
        row[0] * matrix[2][0] + row[1] * matrix[2][1] + row[2] * matrix[2][2],
    ]
}
