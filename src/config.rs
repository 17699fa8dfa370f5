//! Configuration for the scope UI.

use crate::color_scheme::ColorScheme;
use crate::controllers::ScopeController;
use crate::data::settings::ScopeSettings;

/// Top-level configuration for the scope window.
///
/// The defaults reproduce the classic two-channel widget: 300 samples per
/// channel, 1 V/div, 1 ms/div, trigger at 0 V, a 10x8 grid and the
/// black/red/cyan phosphor look.
pub struct ScopeConfig {
    // ── Acquisition ──────────────────────────────────────────────────────────
    /// Samples retained per channel.
    pub capacity: usize,
    /// Initial calibration settings (scales, trigger level, grid).
    pub settings: ScopeSettings,

    // ── Window / chrome ──────────────────────────────────────────────────────
    /// Native window title.
    pub title: String,
    /// Optional eframe native-window options.
    pub native_options: Option<eframe::NativeOptions>,
    /// Show the control bar above the plot. Disable for embedded use where
    /// the host supplies its own controls via a [`ScopeController`].
    pub show_controls: bool,

    // ── Appearance ───────────────────────────────────────────────────────────
    /// Color scheme / visual theme.
    pub color_scheme: ColorScheme,

    // ── Programmatic control ─────────────────────────────────────────────────
    /// External controller for programmatic interaction.
    pub controller: Option<ScopeController>,
}

impl Default for ScopeConfig {
    fn default() -> Self {
        Self {
            capacity: 300,
            settings: ScopeSettings::default(),
            title: "TwinScope".to_string(),
            native_options: None,
            show_controls: true,
            color_scheme: ColorScheme::default(),
            controller: None,
        }
    }
}
