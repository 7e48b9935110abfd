use crate::presentation::view_models::RgbColor;

const RED: RgbColor = RgbColor { r: 255, g: 0, b: 0 };
const GREEN: RgbColor = RgbColor { r: 0, g: 255, b: 0 };

/// Gauge fill for a humidity percentage, clamped to `0.0..=1.0`.
pub fn fill_fraction(humidity: f64) -> f64 {
    if humidity.is_finite() {
        (humidity / 100.0).clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Linear red to green blend; `0.0` is red, `1.0` is green.
pub fn gauge_color(fraction: f64) -> RgbColor {
    let t = fraction.clamp(0.0, 1.0);
    let channel = |from: u8, to: u8| {
        (f64::from(from) + (f64::from(to) - f64::from(from)) * t).round() as u8
    };
    RgbColor {
        r: channel(RED.r, GREEN.r),
        g: channel(RED.g, GREEN.g),
        b: channel(RED.b, GREEN.b),
    }
}

/// `[██████░░░░░░]` style bar for plain-text output.
pub fn text_bar(fraction: f64, width: usize) -> String {
    let filled = ((fraction.clamp(0.0, 1.0) * width as f64).round() as usize).min(width);
    format!("[{}{}]", "█".repeat(filled), "░".repeat(width - filled))
}
