// Startup settings. Nothing is read from disk or the environment; the
// defaults reproduce the classic layout (1600x900 white sheet, brush 10).
use crate::palette::Swatch;
use crate::types::Color;

pub const WHITE: Color = 0x00_FF_FF_FF;

/// Smallest brush radius reachable with the scroll wheel.
pub const MIN_BRUSH_RADIUS: i32 = 1;

#[derive(Clone, Debug)]
pub struct PaintConfig {
    pub title: String,
    pub width: usize,
    pub height: usize,
    pub target_fps: usize,          // minifb frame pacing
    pub initial_radius: i32,
    pub background: Color,          // canvas fill at startup and on clear
    pub initial_swatch: Swatch,
    pub preview_outline: Option<Color>, // ring drawn around the brush preview
}

impl Default for PaintConfig {
    fn default() -> Self {
        Self {
            title: String::from("Paint"),
            width: 1600,
            height: 900,
            target_fps: 240,
            initial_radius: 10,
            background: WHITE,
            initial_swatch: Swatch::Black,
            preview_outline: Some(0x00_80_80_80),
        }
    }
}

impl PaintConfig {
    /// Largest useful radius: a brush this big covers the whole canvas from anywhere on it.
    pub fn max_radius(&self) -> i32 {
        let extent = self.width.max(self.height).max(MIN_BRUSH_RADIUS as usize);
        i32::try_from(extent).unwrap_or(i32::MAX)
    }

    /// Initial radius forced into [MIN_BRUSH_RADIUS, max_radius].
    pub fn clamped_initial_radius(&self) -> i32 {
        self.initial_radius.clamp(MIN_BRUSH_RADIUS, self.max_radius())
    }
}
