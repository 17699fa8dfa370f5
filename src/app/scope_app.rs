//! The eframe application hosting the scope display.

use std::sync::mpsc::Receiver;
use std::time::Duration;

use eframe::egui;

use crate::config::ScopeConfig;
use crate::controllers::{AcquisitionInfo, ScopeController};
use crate::data::acquisition::{Acquisition, Channel};
use crate::render::renderer::{Renderer, STATUS_STRIP_HEIGHT};
use crate::sink::ScopeCommand;

use super::egui_surface::EguiSurface;

/// eframe application owning the acquisition state and the renderer.
///
/// Every frame it drains the command channel, applies any pending
/// controller requests, publishes acquisition info to subscribers, and
/// repaints the scope. All acquisition mutation happens here, on the UI
/// thread, before any drawing; producers only ever touch the channel.
pub struct ScopeApp {
    acquisition: Acquisition,
    renderer: Renderer,
    rx: Receiver<ScopeCommand>,
    controller: Option<ScopeController>,
    show_controls: bool,
}

impl ScopeApp {
    pub fn new(rx: Receiver<ScopeCommand>, mut cfg: ScopeConfig) -> Self {
        let controller = cfg.controller.take();
        Self {
            acquisition: Acquisition::with_settings(cfg.capacity, cfg.settings),
            renderer: Renderer::new(cfg.color_scheme.theme()),
            rx,
            controller,
            show_controls: cfg.show_controls,
        }
    }

    /// Shared non-UI tick: channel drain, controller requests, publish.
    fn tick_non_ui(&mut self) {
        self.acquisition.drain(&self.rx);
        if let Some(ctrl) = self.controller.clone() {
            self.apply_controller_requests(&ctrl);
            ctrl.publish(&self.acquisition_info());
        }
    }

    fn apply_controller_requests(&mut self, ctrl: &ScopeController) {
        let (running, clear, trigger, scale, timebase) = {
            let mut inner = ctrl.inner.lock().unwrap();
            (
                inner.request_running.take(),
                std::mem::take(&mut inner.request_clear),
                inner.request_trigger_level.take(),
                inner.request_voltage_scale.take(),
                inner.request_timebase.take(),
            )
        };
        if let Some(running) = running {
            self.acquisition.set_running(running);
        }
        if clear {
            self.acquisition.clear();
        }
        // Settings requests reuse the command path so invalid values are
        // absorbed with a warning instead of surfacing to the controller.
        if let Some(v) = trigger {
            self.acquisition.apply(ScopeCommand::SetTriggerLevel(v));
        }
        if let Some(v) = scale {
            self.acquisition.apply(ScopeCommand::SetVoltageScale(v));
        }
        if let Some(v) = timebase {
            self.acquisition.apply(ScopeCommand::SetTimebase(v));
        }
    }

    fn acquisition_info(&self) -> AcquisitionInfo {
        AcquisitionInfo {
            running: self.acquisition.is_running(),
            sample_count: self.acquisition.sample_count(),
            buffered: self.acquisition.channel(Channel::Ch1).len(),
            trigger_level: self.acquisition.settings().trigger_level(),
        }
    }

    fn controls_ui(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let run_label = if self.acquisition.is_running() {
                "Stop"
            } else {
                "Run"
            };
            if ui.button(run_label).clicked() {
                self.acquisition.toggle_run();
            }
            if ui.button("Clear").clicked() {
                self.acquisition.clear();
            }

            ui.separator();

            ui.label("V/div:");
            let mut scale = self.acquisition.settings().voltage_scale();
            if ui
                .add(egui::DragValue::new(&mut scale).range(0.05..=50.0).speed(0.05))
                .changed()
            {
                let _ = self.acquisition.settings_mut().set_voltage_scale(scale);
            }

            ui.label("ms/div:");
            let mut timebase = self.acquisition.settings().timebase();
            if ui
                .add(egui::DragValue::new(&mut timebase).range(1.0..=1000.0).speed(1.0))
                .changed()
            {
                let _ = self.acquisition.settings_mut().set_timebase(timebase);
            }

            ui.label("Trig (V):");
            let mut trigger = self.acquisition.settings().trigger_level();
            if ui
                .add(egui::DragValue::new(&mut trigger).range(-50.0..=50.0).speed(0.05))
                .changed()
            {
                let _ = self.acquisition.settings_mut().set_trigger_level(trigger);
            }
        });
    }

    fn plot_ui(&mut self, ui: &mut egui::Ui) {
        let size = ui.available_size();
        let (response, painter) = ui.allocate_painter(size, egui::Sense::click());

        let mut surface = EguiSurface::new(&painter, response.rect);
        self.renderer.render(&mut surface, &self.acquisition.snapshot());

        // Classic widget gestures: click the status strip to toggle
        // run/stop, right-click anywhere to clear.
        if let Some(pos) = response.interact_pointer_pos() {
            let strip_top = response.rect.bottom() - STATUS_STRIP_HEIGHT;
            if response.clicked() && pos.y >= strip_top {
                self.acquisition.toggle_run();
            }
        }
        if response.secondary_clicked() {
            self.acquisition.clear();
        }
    }
}

impl eframe::App for ScopeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.tick_non_ui();

        if self.show_controls {
            egui::TopBottomPanel::top("scope_controls").show(ctx, |ui| {
                self.controls_ui(ui);
            });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.plot_ui(ui);
        });

        // Keep animating even without input events (~60 fps).
        ctx.request_repaint_after(Duration::from_millis(16));
    }
}
