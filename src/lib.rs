//! TwinScope crate root: re-exports and module wiring.
//!
//! A two-channel virtual oscilloscope built on egui/eframe:
//! - `sink`: sample/command channel to feed the scope from any thread
//! - `source`: the injected sample-read boundary and the acquisition pump
//! - `scheduler`: repeating-tick abstraction (thread-based or manual)
//! - `data`: sample buffers, calibration settings, acquisition state
//! - `render`: pure pixel mapping, the surface capability, frame drawing
//! - `controllers`: programmatic run/stop/clear control of a running UI
//! - `config`: shared configuration
//! - `app`: the eframe front-end and `run_scope` entry point

pub mod app;
pub mod color_scheme;
pub mod config;
pub mod controllers;
pub mod data;
pub mod persistence;
pub mod render;
pub mod scheduler;
pub mod sink;
pub mod source;

// Public re-exports for a compact external API
pub use app::{run_scope, EguiSurface, ScopeApp};
pub use color_scheme::{ColorScheme, ScopeTheme};
pub use config::ScopeConfig;
pub use controllers::{AcquisitionInfo, ScopeController};
pub use data::acquisition::{Acquisition, Channel, FrameSnapshot};
pub use data::sample_buffer::SampleBuffer;
pub use data::settings::{ScopeSettings, SettingsError};
pub use render::mapper::PlotArea;
pub use render::renderer::Renderer;
pub use render::surface::Surface;
pub use scheduler::{ManualScheduler, RepeatingHandle, Scheduler, ThreadScheduler};
pub use sink::{channel_scope, ScopeCommand, ScopeSink};
pub use source::{adc_to_volts, pump, SampleSource};
