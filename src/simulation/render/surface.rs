/// Backing-store size for a canvas of `css_width x css_height` CSS pixels.
///
/// The engine always works in CSS pixels; hosts scale their context by the
/// device pixel ratio. Ratios below 1 (or not finite) count as 1.
pub fn backing_size(css_width: f32, css_height: f32, device_pixel_ratio: f32) -> (u32, u32) {
    let dpr = if device_pixel_ratio.is_finite() { device_pixel_ratio.max(1.0) } else { 1.0 };
    let scale = |v: f32| if v.is_finite() { (v.max(0.0) * dpr).floor() as u32 } else { 0 };
    (scale(css_width), scale(css_height))
}
