use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Continuous color scale: numeric value → Color32
// ---------------------------------------------------------------------------

/// Hue endpoints of the scale: cold blue for the low end, warm red-orange
/// for the high end.
const HUE_LOW: f32 = 230.0;
const HUE_HIGH: f32 = 20.0;

/// Maps values in `[min, max]` onto an HSL hue sweep.
#[derive(Debug, Clone)]
pub struct ColorScale {
    min: f64,
    max: f64,
}

impl ColorScale {
    /// Build a scale over the given range. A degenerate range (min == max,
    /// or an empty dataset passing `None`) maps everything to the midpoint.
    pub fn new(range: Option<(f64, f64)>) -> Self {
        let (min, max) = range.unwrap_or((0.0, 0.0));
        ColorScale { min, max }
    }

    /// The range the scale spans.
    pub fn range(&self) -> (f64, f64) {
        (self.min, self.max)
    }

    /// Color for a value, clamped to the scale's range.
    pub fn color_for(&self, value: f64) -> Color32 {
        let span = self.max - self.min;
        let t = if span.abs() < f64::EPSILON {
            0.5
        } else {
            ((value - self.min) / span).clamp(0.0, 1.0)
        };

        let hue = HUE_LOW + (HUE_HIGH - HUE_LOW) * t as f32;
        let hsl = Hsl::new(hue, 0.75, 0.55);
        let rgb: Srgb = hsl.into_color();
        Color32::from_rgb(
            (rgb.red * 255.0) as u8,
            (rgb.green * 255.0) as u8,
            (rgb.blue * 255.0) as u8,
        )
    }
}
