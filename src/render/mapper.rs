//! Pure transform from (sample index, voltage) to pixel coordinates.
//!
//! Horizontal spacing is derived from the buffer *capacity*, not the
//! current length, so a partially filled buffer renders left-aligned and
//! fills in toward the right as samples accumulate. Vertical placement
//! puts 0 V at the vertical center with one grid division per
//! volts/div step. Values are never clamped; a waveform larger than the
//! visible range simply draws off-canvas.

use egui::{pos2, Pos2};

/// The waveform region of the surface, excluding any status strip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub width: f32,
    pub height: f32,
}

impl PlotArea {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center_x(&self) -> f32 {
        self.width / 2.0
    }

    /// The 0 V line.
    pub fn center_y(&self) -> f32 {
        self.height / 2.0
    }
}

/// Horizontal pixel position of the sample at `index`.
pub fn sample_x(index: usize, capacity: usize, width: f32) -> f32 {
    if capacity == 0 {
        return 0.0;
    }
    index as f32 * (width / capacity as f32)
}

/// Vertical pixel position of a voltage, given the volts/div scale and the
/// number of vertical grid divisions.
pub fn sample_y(value: f64, volts_per_div: f64, height: f32, y_divisions: u32) -> f32 {
    let px_per_div = height / y_divisions.max(1) as f32;
    height / 2.0 - (value / volts_per_div) as f32 * px_per_div
}

/// Combined mapping of one sample to its pixel position.
pub fn sample_pos(
    index: usize,
    value: f64,
    capacity: usize,
    area: &PlotArea,
    volts_per_div: f64,
    y_divisions: u32,
) -> Pos2 {
    pos2(
        sample_x(index, capacity, area.width),
        sample_y(value, volts_per_div, area.height, y_divisions),
    )
}
