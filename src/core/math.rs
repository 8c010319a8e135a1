//! Scalar helpers for the morph clock.

/// Clamp to `[0, 1]`; NaN collapses to 0.
#[inline]
pub fn clamp01(v: f32) -> f32 {
    if v.is_nan() {
        0.0
    } else {
        v.clamp(0.0, 1.0)
    }
}

/// Ease-in-out cubic. Exact at the bounds: `ease(0) == 0`, `ease(1) == 1`.
#[inline]
pub fn ease_in_out_cubic(t: f32) -> f32 {
    let t = clamp01(t);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let k = -2.0 * t + 2.0;
        1.0 - k * k * k / 2.0
    }
}

/// Linear blend `a·(1-m) + b·m`.
#[inline(always)]
pub fn mix(a: f32, b: f32, m: f32) -> f32 {
    a * (1.0 - m) + b * m
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ease_hits_bounds_exactly() {
        assert_eq!(ease_in_out_cubic(0.0), 0.0);
        assert_eq!(ease_in_out_cubic(1.0), 1.0);
        assert_eq!(ease_in_out_cubic(0.5), 0.5);
    }

    #[test]
    fn ease_is_monotonic() {
        let mut prev = 0.0;
        for i in 1..=100 {
            let v = ease_in_out_cubic(i as f32 / 100.0);
            assert!(v >= prev);
            prev = v;
        }
    }

    #[test]
    fn clamp01_handles_nan_and_range() {
        assert_eq!(clamp01(f32::NAN), 0.0);
        assert_eq!(clamp01(-3.0), 0.0);
        assert_eq!(clamp01(7.0), 1.0);
    }

    #[test]
    fn mix_endpoints() {
        assert_eq!(mix(10.0, 20.0, 0.0), 10.0);
        assert_eq!(mix(10.0, 20.0, 1.0), 20.0);
    }
}
