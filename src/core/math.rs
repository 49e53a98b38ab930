// Math utilities and unit conversions
//
// The physics world runs in meters (rapier is tuned for 0.01m-10m objects);
// sprites and velocities are authored in pixels. Everything crossing that
// boundary goes through the scale factor below.

use glam::Vec2;

/// Fixed pixels-per-meter scale for the whole game
pub const PIXELS_PER_METER: f32 = 100.0;
pub const METERS_PER_PIXEL: f32 = 1.0 / PIXELS_PER_METER;

/// Convert a pixel-space vector to world (meter) coordinates
pub fn pixels_to_meters(v: Vec2) -> Vec2 {
    v * METERS_PER_PIXEL
}

/// Convert a world (meter) vector to pixel coordinates
pub fn meters_to_pixels(v: Vec2) -> Vec2 {
    v * PIXELS_PER_METER
}

/// Linear interpolation
#[allow(dead_code)]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Check if two f32 values are approximately equal
#[allow(dead_code)]
pub fn approx_equal(a: f32, b: f32, epsilon: f32) -> bool {
    (a - b).abs() < epsilon
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_meter_round_trip() {
        let px = Vec2::new(264.0, 162.0);
        let back = meters_to_pixels(pixels_to_meters(px));
        assert!(approx_equal(back.x, px.x, 1e-4));
        assert!(approx_equal(back.y, px.y, 1e-4));
    }

    #[test]
    fn test_scale_factor() {
        assert_eq!(pixels_to_meters(Vec2::new(100.0, 0.0)).x, 1.0);
        assert_eq!(meters_to_pixels(Vec2::new(1.0, 0.0)).x, 100.0);
    }

    #[test]
    fn test_lerp() {
        assert_eq!(lerp(0.0, 10.0, 0.0), 0.0);
        assert_eq!(lerp(0.0, 10.0, 1.0), 10.0);
        assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
    }
}
