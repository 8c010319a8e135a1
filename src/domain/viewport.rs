use crate::core::math::clamp01;

const MIN_VIEWPORT_PX: f32 = 1.0;

/// Viewport in CSS pixels plus the derived spiral extent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    /// Spiral origin in pixels.
    pub center_x: f32,
    pub center_y: f32,
    /// Distance from center to the farthest corner plus margin.
    pub max_radius: f32,
    /// Angle at which the spiral reaches `max_radius` (`max_radius / B`).
    pub max_theta: f32,
}

impl Viewport {
    pub fn new(
        width: f32,
        height: f32,
        center_frac_x: f32,
        center_frac_y: f32,
        margin: f32,
        spacing: f32,
    ) -> Self {
        let width = sanitize_dim(width);
        let height = sanitize_dim(height);
        let center_x = width * clamp01(center_frac_x);
        let center_y = height * clamp01(center_frac_y);

        let far_x = center_x.max(width - center_x);
        let far_y = center_y.max(height - center_y);
        let max_radius = far_x.hypot(far_y) + margin.max(0.0);
        let max_theta = max_radius / spacing;

        Self { width, height, center_x, center_y, max_radius, max_theta }
    }
}

fn sanitize_dim(v: f32) -> f32 {
    if v.is_finite() {
        v.max(MIN_VIEWPORT_PX)
    } else {
        MIN_VIEWPORT_PX
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radius_reaches_farthest_corner() {
        let vp = Viewport::new(200.0, 100.0, 0.25, 0.5, 0.0, 4.0);
        assert_eq!(vp.center_x, 50.0);
        assert!((vp.max_radius - 150.0f32.hypot(50.0)).abs() < 1e-3);
        assert!((vp.max_theta - vp.max_radius / 4.0).abs() < 1e-5);
    }

    #[test]
    fn zero_and_nan_dimensions_are_floored() {
        let vp = Viewport::new(0.0, f32::NAN, 0.5, 0.5, 60.0, 4.2);
        assert_eq!(vp.width, 1.0);
        assert_eq!(vp.height, 1.0);
        assert!(vp.max_theta.is_finite() && vp.max_theta > 0.0);
    }
}
