//! Math helpers shared by the noise primitives.

/// Floor an `f64` to `i32` without going through `f64::floor`.
///
/// Correct for the coordinate magnitudes the noise samplers produce
/// (well inside `i32` range).
#[inline]
#[must_use]
pub fn floor(value: f64) -> i32 {
    let truncated = value as i32;
    if value < f64::from(truncated) {
        truncated - 1
    } else {
        truncated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floor_matches_std() {
        for &v in &[-2.75, -1.0, -0.5, 0.0, 0.5, 1.0, 2.75, 123.999, -123.999] {
            assert_eq!(floor(v), v.floor() as i32, "floor({v})");
        }
    }
}
