//! Acquisition state: the two channel buffers, the run flag and the
//! sample counter, plus the command-channel drain loop.

use std::sync::mpsc::Receiver;

use tracing::{debug, warn};

use crate::data::sample_buffer::SampleBuffer;
use crate::data::settings::ScopeSettings;
use crate::sink::ScopeCommand;

/// The two input channels of the scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Ch1,
    Ch2,
}

/// Read-only view of one frame's worth of acquisition state, handed to the
/// renderer. Borrowing keeps the renderer from ever mutating the buffers.
pub struct FrameSnapshot<'a> {
    pub ch1: &'a SampleBuffer,
    pub ch2: &'a SampleBuffer,
    pub settings: &'a ScopeSettings,
    pub running: bool,
    pub sample_count: u64,
}

/// Owner of both sample buffers and all acquisition state.
///
/// `add_sample` is the only insertion path and always pushes one value to
/// each channel, so the buffers can never desynchronize. While stopped,
/// incoming samples are dropped, not queued; the source keeps calling at
/// its own cadence and everything it sends is discarded until resumed.
pub struct Acquisition {
    ch1: SampleBuffer,
    ch2: SampleBuffer,
    settings: ScopeSettings,
    running: bool,
    sample_count: u64,
}

impl Acquisition {
    /// Create a running acquisition with empty buffers of `capacity`
    /// samples per channel.
    pub fn new(capacity: usize) -> Self {
        Self::with_settings(capacity, ScopeSettings::default())
    }

    pub fn with_settings(capacity: usize, settings: ScopeSettings) -> Self {
        Self {
            ch1: SampleBuffer::new(capacity),
            ch2: SampleBuffer::new(capacity),
            settings,
            running: true,
            sample_count: 0,
        }
    }

    /// Record one paired sample. Dropped entirely while stopped.
    pub fn add_sample(&mut self, ch1: f64, ch2: f64) {
        if !self.running {
            return;
        }
        self.ch1.push(ch1);
        self.ch2.push(ch2);
        self.sample_count += 1;
    }

    /// Flip the run flag. Buffer contents are untouched.
    pub fn toggle_run(&mut self) {
        self.set_running(!self.running);
    }

    pub fn set_running(&mut self, running: bool) {
        if self.running != running {
            debug!(running, "acquisition run state changed");
        }
        self.running = running;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Empty both buffers and reset the sample counter, regardless of the
    /// run state.
    pub fn clear(&mut self) {
        self.ch1.clear();
        self.ch2.clear();
        self.sample_count = 0;
        debug!("acquisition buffers cleared");
    }

    /// Samples accepted since creation or the last `clear`.
    pub fn sample_count(&self) -> u64 {
        self.sample_count
    }

    pub fn channel(&self, channel: Channel) -> &SampleBuffer {
        match channel {
            Channel::Ch1 => &self.ch1,
            Channel::Ch2 => &self.ch2,
        }
    }

    pub fn settings(&self) -> &ScopeSettings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut ScopeSettings {
        &mut self.settings
    }

    /// Apply one command. Invalid settings writes are absorbed with a
    /// warning so a misbehaving producer cannot halt the acquisition loop.
    pub fn apply(&mut self, command: ScopeCommand) {
        match command {
            ScopeCommand::Sample { ch1, ch2 } => self.add_sample(ch1, ch2),
            ScopeCommand::SetRunning(running) => self.set_running(running),
            ScopeCommand::ToggleRun => self.toggle_run(),
            ScopeCommand::Clear => self.clear(),
            ScopeCommand::SetTriggerLevel(v) => {
                if let Err(err) = self.settings.set_trigger_level(v) {
                    warn!(%err, "ignoring trigger level update");
                }
            }
            ScopeCommand::SetVoltageScale(v) => {
                if let Err(err) = self.settings.set_voltage_scale(v) {
                    warn!(%err, "ignoring voltage scale update");
                }
            }
            ScopeCommand::SetTimebase(v) => {
                if let Err(err) = self.settings.set_timebase(v) {
                    warn!(%err, "ignoring timebase update");
                }
            }
        }
    }

    /// Drain all pending commands without blocking. Called once per frame
    /// by the UI, before rendering, so buffer mutation and drawing never
    /// interleave within a frame.
    pub fn drain(&mut self, rx: &Receiver<ScopeCommand>) {
        while let Ok(command) = rx.try_recv() {
            self.apply(command);
        }
    }

    /// Snapshot for the renderer.
    pub fn snapshot(&self) -> FrameSnapshot<'_> {
        FrameSnapshot {
            ch1: &self.ch1,
            ch2: &self.ch2,
            settings: &self.settings,
            running: self.running,
            sample_count: self.sample_count,
        }
    }
}
