use egui::{Align2, Color32, Pos2, Rect};
use twinscope::{Acquisition, ColorScheme, Renderer, ScopeTheme, Surface};

/// Surface double that records every draw call.
#[derive(Default)]
struct RecordingSurface {
    width: f32,
    height: f32,
    clears: Vec<Color32>,
    lines: Vec<(Pos2, Pos2, f32, Color32)>,
    rects: Vec<(Rect, Color32)>,
    texts: Vec<(Pos2, String, Color32)>,
}

impl RecordingSurface {
    fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    fn lines_with_color(&self, color: Color32) -> Vec<&(Pos2, Pos2, f32, Color32)> {
        self.lines.iter().filter(|l| l.3 == color).collect()
    }

    fn has_text(&self, needle: &str) -> bool {
        self.texts.iter().any(|(_, t, _)| t == needle)
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    fn clear(&mut self, color: Color32) {
        self.clears.push(color);
    }

    fn line(&mut self, from: Pos2, to: Pos2, width: f32, color: Color32) {
        self.lines.push((from, to, width, color));
    }

    fn filled_rect(&mut self, rect: Rect, color: Color32) {
        self.rects.push((rect, color));
    }

    fn text(&mut self, pos: Pos2, _anchor: Align2, text: &str, _size: f32, color: Color32) {
        self.texts.push((pos, text.to_string(), color));
    }
}

fn theme() -> ScopeTheme {
    ColorScheme::Classic.theme()
}

/// 320x240 surface: 200 px plot area above the 40 px status strip.
fn render_frame(acq: &Acquisition) -> RecordingSurface {
    let mut surface = RecordingSurface::new(320.0, 240.0);
    Renderer::new(theme()).render(&mut surface, &acq.snapshot());
    surface
}

#[test]
fn grid_has_division_and_center_lines() {
    let acq = Acquisition::new(300);
    let surface = render_frame(&acq);

    // Default 10x8 grid: 11 vertical + 9 horizontal division lines.
    assert_eq!(surface.lines_with_color(theme().grid).len(), 20);
    assert_eq!(surface.lines_with_color(theme().grid_emphasis).len(), 2);
    assert_eq!(surface.clears, vec![theme().background]);
}

#[test]
fn center_lines_cross_mid_plot() {
    let acq = Acquisition::new(300);
    let surface = render_frame(&acq);
    let emphasis = surface.lines_with_color(theme().grid_emphasis);

    // Horizontal 0 V axis at half the 200 px plot height.
    assert!(emphasis
        .iter()
        .any(|(from, to, _, _)| from.y == 100.0 && to.y == 100.0));
    // Vertical mid-sweep line at half the width.
    assert!(emphasis
        .iter()
        .any(|(from, to, _, _)| from.x == 160.0 && to.x == 160.0));
}

#[test]
fn polyline_has_one_segment_less_than_samples() {
    let mut acq = Acquisition::new(300);
    for i in 0..5 {
        acq.add_sample(i as f64 * 0.1, 0.0);
    }
    let surface = render_frame(&acq);
    assert_eq!(surface.lines_with_color(theme().ch1).len(), 4);
    assert_eq!(surface.lines_with_color(theme().ch2).len(), 4);
}

#[test]
fn no_trace_with_fewer_than_two_samples() {
    let mut acq = Acquisition::new(300);
    acq.add_sample(1.0, 2.0);
    let surface = render_frame(&acq);
    assert!(surface.lines_with_color(theme().ch1).is_empty());
    assert!(surface.lines_with_color(theme().ch2).is_empty());
}

#[test]
fn non_finite_sample_renders_as_gap() {
    let mut acq = Acquisition::new(300);
    acq.add_sample(1.0, 0.0);
    acq.add_sample(f64::NAN, 0.0);
    acq.add_sample(1.0, 0.0);
    acq.add_sample(2.0, 0.0);

    let surface = render_frame(&acq);
    // Channel 1 breaks at the NaN: only the 1.0 -> 2.0 segment survives.
    assert_eq!(surface.lines_with_color(theme().ch1).len(), 1);
    // Channel 2 is unaffected by channel 1's bad sample.
    assert_eq!(surface.lines_with_color(theme().ch2).len(), 3);
}

#[test]
fn zero_volts_trace_sits_on_center_line() {
    let mut acq = Acquisition::new(300);
    acq.add_sample(0.0, 0.0);
    acq.add_sample(0.0, 0.0);
    let surface = render_frame(&acq);
    let segments = surface.lines_with_color(theme().ch1);
    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].0.y, 100.0);
    assert_eq!(segments[0].1.y, 100.0);
}

#[test]
fn overlay_shows_run_then_stop() {
    let mut acq = Acquisition::new(300);
    let surface = render_frame(&acq);
    assert!(surface.has_text("RUN"));
    assert!(!surface.has_text("STOP"));

    acq.toggle_run();
    let surface = render_frame(&acq);
    assert!(surface.has_text("STOP"));
    assert!(!surface.has_text("RUN"));
}

#[test]
fn overlay_labels_reflect_settings_and_counter() {
    let mut acq = Acquisition::new(300);
    acq.settings_mut().set_voltage_scale(2.0).unwrap();
    acq.settings_mut().set_timebase(20.0).unwrap();
    acq.settings_mut().set_trigger_level(1.5).unwrap();
    acq.add_sample(0.1, 0.2);
    acq.add_sample(0.3, 0.4);
    acq.add_sample(0.5, 0.6);

    let surface = render_frame(&acq);
    assert!(surface.has_text("CH1: 2 V/div"));
    assert!(surface.has_text("CH2: 2 V/div"));
    assert!(surface.has_text("Time: 20 ms/div"));
    assert!(surface.has_text("Trig: 1.50 V"));
    assert!(surface.has_text("Samples: 3"));
}

#[test]
fn channel_colors_are_distinct_in_every_scheme() {
    for scheme in ColorScheme::all() {
        let theme = scheme.theme();
        assert_ne!(theme.ch1, theme.ch2, "scheme {}", scheme.label());
        assert_ne!(
            theme.run_indicator,
            theme.stop_indicator,
            "scheme {}",
            scheme.label()
        );
    }
}

#[test]
fn status_strip_is_drawn_below_plot_area() {
    let acq = Acquisition::new(300);
    let surface = render_frame(&acq);
    let strip = surface
        .rects
        .iter()
        .find(|(_, color)| *color == theme().strip_background)
        .expect("status strip rect");
    assert_eq!(strip.0.min.y, 200.0);
    assert_eq!(strip.0.max.y, 240.0);
}
