//! Per-frame drawing: grid, channel waveforms, status strip.

use egui::{pos2, Align2, Color32, Rect};

use crate::color_scheme::ScopeTheme;
use crate::data::acquisition::FrameSnapshot;
use crate::data::sample_buffer::SampleBuffer;
use crate::data::settings::ScopeSettings;
use crate::render::mapper::{sample_pos, PlotArea};
use crate::render::surface::Surface;

/// Height of the label band below the plot area, in pixels.
pub const STATUS_STRIP_HEIGHT: f32 = 40.0;

const GRID_LINE_WIDTH: f32 = 1.0;
const CENTER_LINE_WIDTH: f32 = 2.0;
const TRACE_WIDTH: f32 = 2.0;
const LABEL_FONT_SIZE: f32 = 12.0;

/// Draws one frame of the scope onto any [`Surface`].
///
/// The renderer only reads the [`FrameSnapshot`]; all state lives in the
/// acquisition controller.
pub struct Renderer {
    theme: ScopeTheme,
}

impl Renderer {
    pub fn new(theme: ScopeTheme) -> Self {
        Self { theme }
    }

    pub fn theme(&self) -> &ScopeTheme {
        &self.theme
    }

    pub fn set_theme(&mut self, theme: ScopeTheme) {
        self.theme = theme;
    }

    /// Draw a full frame: grid first, then both channel traces, then the
    /// status strip. Sample order is preserved; nothing is interpolated.
    pub fn render(&self, surface: &mut dyn Surface, frame: &FrameSnapshot<'_>) {
        let (width, height) = surface.size();
        let plot = PlotArea::new(width, (height - STATUS_STRIP_HEIGHT).max(0.0));

        surface.clear(self.theme.background);
        self.draw_grid(surface, &plot, frame.settings);
        self.draw_channel(surface, &plot, frame.ch1, frame.settings, self.theme.ch1);
        self.draw_channel(surface, &plot, frame.ch2, frame.settings, self.theme.ch2);
        self.draw_status_strip(surface, width, height, frame);
    }

    fn draw_grid(&self, surface: &mut dyn Surface, plot: &PlotArea, settings: &ScopeSettings) {
        let (gx, gy) = settings.grid_divisions();

        for i in 0..=gx {
            let x = i as f32 * plot.width / gx as f32;
            surface.line(
                pos2(x, 0.0),
                pos2(x, plot.height),
                GRID_LINE_WIDTH,
                self.theme.grid,
            );
        }
        for j in 0..=gy {
            let y = j as f32 * plot.height / gy as f32;
            surface.line(
                pos2(0.0, y),
                pos2(plot.width, y),
                GRID_LINE_WIDTH,
                self.theme.grid,
            );
        }

        // Emphasized center lines: the 0 V axis and the mid-sweep axis.
        surface.line(
            pos2(0.0, plot.center_y()),
            pos2(plot.width, plot.center_y()),
            CENTER_LINE_WIDTH,
            self.theme.grid_emphasis,
        );
        surface.line(
            pos2(plot.center_x(), 0.0),
            pos2(plot.center_x(), plot.height),
            CENTER_LINE_WIDTH,
            self.theme.grid_emphasis,
        );
    }

    /// Trace one channel as a connected polyline. A non-finite sample ends
    /// the current segment and the next finite sample starts a new one, so
    /// bad readings show as gaps instead of fake flat-lines.
    fn draw_channel(
        &self,
        surface: &mut dyn Surface,
        plot: &PlotArea,
        buffer: &SampleBuffer,
        settings: &ScopeSettings,
        color: Color32,
    ) {
        if buffer.len() < 2 {
            return;
        }
        let capacity = buffer.capacity();
        let scale = settings.voltage_scale();
        let (_, gy) = settings.grid_divisions();

        let mut prev = None;
        for (i, value) in buffer.iter().enumerate() {
            if !value.is_finite() {
                prev = None;
                continue;
            }
            let pos = sample_pos(i, value, capacity, plot, scale, gy);
            if let Some(prev_pos) = prev {
                surface.line(prev_pos, pos, TRACE_WIDTH, color);
            }
            prev = Some(pos);
        }
    }

    fn draw_status_strip(
        &self,
        surface: &mut dyn Surface,
        width: f32,
        height: f32,
        frame: &FrameSnapshot<'_>,
    ) {
        let top = (height - STATUS_STRIP_HEIGHT).max(0.0);
        surface.filled_rect(
            Rect::from_min_max(pos2(0.0, top), pos2(width, height)),
            self.theme.strip_background,
        );

        let scale = frame.settings.voltage_scale();
        surface.text(
            pos2(10.0, top + 15.0),
            Align2::LEFT_CENTER,
            &format!("CH1: {} V/div", scale),
            LABEL_FONT_SIZE,
            self.theme.ch1,
        );
        surface.text(
            pos2(10.0, top + 30.0),
            Align2::LEFT_CENTER,
            &format!("CH2: {} V/div", scale),
            LABEL_FONT_SIZE,
            self.theme.ch2,
        );

        surface.text(
            pos2(120.0, top + 15.0),
            Align2::LEFT_CENTER,
            &format!("Time: {} ms/div", frame.settings.timebase()),
            LABEL_FONT_SIZE,
            self.theme.text,
        );
        let (run_text, run_color) = if frame.running {
            ("RUN", self.theme.run_indicator)
        } else {
            ("STOP", self.theme.stop_indicator)
        };
        surface.text(
            pos2(120.0, top + 30.0),
            Align2::LEFT_CENTER,
            run_text,
            LABEL_FONT_SIZE,
            run_color,
        );

        surface.text(
            pos2(width - 10.0, top + 15.0),
            Align2::RIGHT_CENTER,
            &format!("Trig: {:.2} V", frame.settings.trigger_level()),
            LABEL_FONT_SIZE,
            self.theme.text,
        );
        surface.text(
            pos2(width - 10.0, top + 30.0),
            Align2::RIGHT_CENTER,
            &format!("Samples: {}", frame.sample_count),
            LABEL_FONT_SIZE,
            self.theme.counter,
        );
    }
}
