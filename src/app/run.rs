//! Top-level entry point for running the scope as a native window.
//!
//! The [`run_scope`] function is the primary public API for launching the
//! scope application. It accepts a command channel receiver and a
//! configuration object, wires up the optional controller, and enters the
//! eframe event loop.

use eframe::egui;

use crate::config::ScopeConfig;
use crate::sink::ScopeCommand;

use super::scope_app::ScopeApp;

/// Launch the scope application in a native window.
///
/// The call blocks until the window is closed. Producers keep the matching
/// [`ScopeSink`](crate::sink::ScopeSink) and feed samples from any thread.
pub fn run_scope(
    rx: std::sync::mpsc::Receiver<ScopeCommand>,
    mut cfg: ScopeConfig,
) -> eframe::Result<()> {
    let title = cfg.title.clone();
    let mut opts = cfg
        .native_options
        .take()
        .unwrap_or_else(eframe::NativeOptions::default);

    // Default window proportions match the classic 320x240 display plus
    // control bar, scaled up for desktop use.
    if opts.viewport.inner_size.is_none() {
        opts.viewport = opts
            .viewport
            .clone()
            .with_inner_size(egui::vec2(640.0, 520.0));
    }

    let app = ScopeApp::new(rx, cfg);
    eframe::run_native(&title, opts, Box::new(|_cc| Ok(Box::new(app))))
}
