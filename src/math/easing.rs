//! Easing curves, interpolation and color blending helpers

use crate::raster::Rgb;

/// Linear interpolation between `a` and `b`
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    (b - a).mul_add(t, a)
}

/// Smooth Hermite ease in-out over `[0, 1]`
pub fn smooth_step(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    t * t * 2.0f64.mul_add(-t, 3.0)
}

/// Quadratic ease-out over `[0, 1]`
pub fn ease_out(t: f64) -> f64 {
    let remaining = 1.0 - t.clamp(0.0, 1.0);
    remaining.mul_add(-remaining, 1.0)
}

/// Euclidean distance between two points
pub fn distance(a: [f64; 2], b: [f64; 2]) -> f64 {
    let [ax, ay] = a;
    let [bx, by] = b;
    (ax - bx).hypot(ay - by)
}

/// Componentwise linear interpolation of a point pair
pub fn lerp_point(a: [f64; 2], b: [f64; 2], t: f64) -> [f64; 2] {
    let [ax, ay] = a;
    let [bx, by] = b;
    [lerp(ax, bx, t), lerp(ay, by, t)]
}

/// Blend two colors; `t = 0` yields `from`, `t = 1` yields `to`
pub fn blend_color(from: Rgb, to: Rgb, t: f64) -> Rgb {
    let t = t.clamp(0.0, 1.0);
    let channel = |a: u8, b: u8| lerp(f64::from(a), f64::from(b), t).round() as u8;
    let [fr, fg, fb] = from;
    let [tr, tg, tb] = to;
    [channel(fr, tr), channel(fg, tg), channel(fb, tb)]
}
