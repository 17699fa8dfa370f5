//! The egui/eframe front-end: window entry point, application state and
//! the painter-backed drawing surface.

mod egui_surface;
mod run;
mod scope_app;

pub use egui_surface::EguiSurface;
pub use run::run_scope;
pub use scope_app::ScopeApp;
