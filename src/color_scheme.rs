//! Color scheme definitions for the scope display.
//!
//! This module contains the ScopeTheme palette struct and the ColorScheme
//! enum of built-in themes.

use egui::Color32;

/// Full color palette for one scope frame.
#[derive(Clone, Debug, PartialEq)]
pub struct ScopeTheme {
    /// Plot background.
    pub background: Color32,
    /// Regular grid lines.
    pub grid: Color32,
    /// The two emphasized center lines.
    pub grid_emphasis: Color32,
    /// Channel 1 trace and label.
    pub ch1: Color32,
    /// Channel 2 trace and label.
    pub ch2: Color32,
    /// Neutral label text.
    pub text: Color32,
    /// RUN indicator.
    pub run_indicator: Color32,
    /// STOP indicator.
    pub stop_indicator: Color32,
    /// Sample counter readout.
    pub counter: Color32,
    /// Status strip background.
    pub strip_background: Color32,
}

impl Default for ScopeTheme {
    fn default() -> Self {
        ColorScheme::Classic.theme()
    }
}

/// Built-in visual themes, plus user-defined palettes.
#[derive(Clone, Debug, PartialEq)]
pub enum ColorScheme {
    /// Black background with red/cyan phosphor traces.
    Classic,
    /// Light background with print-friendly trace colors.
    Light,
    /// Pure black background with maximally saturated colors.
    HighContrast,
    /// User-defined palette.
    Custom(ScopeTheme),
}

impl Default for ColorScheme {
    fn default() -> Self {
        ColorScheme::Classic
    }
}

impl ColorScheme {
    /// All built-in schemes (useful for combo-box UIs).
    pub fn all() -> &'static [ColorScheme] {
        &[
            ColorScheme::Classic,
            ColorScheme::Light,
            ColorScheme::HighContrast,
        ]
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            ColorScheme::Classic => "Classic",
            ColorScheme::Light => "Light",
            ColorScheme::HighContrast => "High Contrast",
            ColorScheme::Custom(_) => "Custom",
        }
    }

    /// The palette this scheme resolves to.
    pub fn theme(&self) -> ScopeTheme {
        match self {
            ColorScheme::Classic => ScopeTheme {
                background: Color32::BLACK,
                grid: Color32::from_rgb(0x33, 0x33, 0x33),
                grid_emphasis: Color32::from_rgb(0x55, 0x55, 0x55),
                ch1: Color32::from_rgb(0xff, 0x6b, 0x6b),
                ch2: Color32::from_rgb(0x4e, 0xcd, 0xc4),
                text: Color32::WHITE,
                run_indicator: Color32::from_rgb(0x27, 0xae, 0x60),
                stop_indicator: Color32::from_rgb(0xe7, 0x4c, 0x3c),
                counter: Color32::from_rgb(0xff, 0xd9, 0x3d),
                strip_background: Color32::from_rgb(0x2a, 0x2a, 0x2a),
            },
            ColorScheme::Light => ScopeTheme {
                background: Color32::from_rgb(0xf4, 0xf4, 0xf4),
                grid: Color32::from_rgb(0xc8, 0xc8, 0xc8),
                grid_emphasis: Color32::from_rgb(0x96, 0x96, 0x96),
                ch1: Color32::from_rgb(214, 39, 40),
                ch2: Color32::from_rgb(31, 119, 180),
                text: Color32::from_rgb(0x33, 0x33, 0x33),
                run_indicator: Color32::from_rgb(0x2e, 0x7d, 0x32),
                stop_indicator: Color32::from_rgb(0xc6, 0x28, 0x28),
                counter: Color32::from_rgb(0x8a, 0x6d, 0x00),
                strip_background: Color32::from_rgb(0xe0, 0xe0, 0xe0),
            },
            ColorScheme::HighContrast => ScopeTheme {
                background: Color32::BLACK,
                grid: Color32::from_rgb(0x60, 0x60, 0x60),
                grid_emphasis: Color32::from_rgb(0xa0, 0xa0, 0xa0),
                ch1: Color32::from_rgb(0xff, 0x40, 0x40),
                ch2: Color32::from_rgb(0x00, 0xff, 0xff),
                text: Color32::WHITE,
                run_indicator: Color32::from_rgb(0x00, 0xff, 0x00),
                stop_indicator: Color32::from_rgb(0xff, 0x00, 0x00),
                counter: Color32::from_rgb(0xff, 0xff, 0x00),
                strip_background: Color32::from_rgb(0x10, 0x10, 0x10),
            },
            ColorScheme::Custom(theme) => theme.clone(),
        }
    }
}
