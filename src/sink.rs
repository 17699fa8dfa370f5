//! Data source types and channels for feeding samples and control intents
//! into the scope UI.
//!
//! Producers hold a cloneable [`ScopeSink`] and send [`ScopeCommand`]s; the
//! UI thread owns the matching receiver and drains it once per frame. This
//! keeps a single writer for all acquisition state while letting sampling
//! run at its own cadence on any thread.

use std::sync::mpsc::{Receiver, SendError, Sender};

/// Messages sent over the channel to drive the scope.
#[derive(Debug, Clone, PartialEq)]
pub enum ScopeCommand {
    /// One paired voltage sample, channel 1 and channel 2 together.
    Sample { ch1: f64, ch2: f64 },
    /// Start or stop acquisition. Stopping drops incoming samples.
    SetRunning(bool),
    /// Flip the run state.
    ToggleRun,
    /// Empty both channel buffers and reset the sample counter.
    Clear,
    /// Set the displayed trigger level (volts).
    SetTriggerLevel(f64),
    /// Set the vertical scale (volts/division).
    SetVoltageScale(f64),
    /// Set the horizontal scale (ms/division).
    SetTimebase(f64),
}

/// Convenience sender for feeding the scope. Clone freely across threads.
#[derive(Clone)]
pub struct ScopeSink {
    tx: Sender<ScopeCommand>,
}

impl ScopeSink {
    /// Send one paired sample. Voltages are passed through unclamped; a
    /// typical source stays within 0–5 V but nothing is enforced here.
    pub fn send_sample(&self, ch1: f64, ch2: f64) -> Result<(), SendError<ScopeCommand>> {
        self.tx.send(ScopeCommand::Sample { ch1, ch2 })
    }

    /// Resume acquisition.
    pub fn run(&self) -> Result<(), SendError<ScopeCommand>> {
        self.tx.send(ScopeCommand::SetRunning(true))
    }

    /// Stop acquisition; subsequent samples are dropped until resumed.
    pub fn stop(&self) -> Result<(), SendError<ScopeCommand>> {
        self.tx.send(ScopeCommand::SetRunning(false))
    }

    /// Flip the run state.
    pub fn toggle_run(&self) -> Result<(), SendError<ScopeCommand>> {
        self.tx.send(ScopeCommand::ToggleRun)
    }

    /// Empty both channel buffers.
    pub fn clear(&self) -> Result<(), SendError<ScopeCommand>> {
        self.tx.send(ScopeCommand::Clear)
    }

    pub fn set_trigger_level(&self, volts: f64) -> Result<(), SendError<ScopeCommand>> {
        self.tx.send(ScopeCommand::SetTriggerLevel(volts))
    }

    pub fn set_voltage_scale(&self, volts_per_div: f64) -> Result<(), SendError<ScopeCommand>> {
        self.tx.send(ScopeCommand::SetVoltageScale(volts_per_div))
    }

    pub fn set_timebase(&self, ms_per_div: f64) -> Result<(), SendError<ScopeCommand>> {
        self.tx.send(ScopeCommand::SetTimebase(ms_per_div))
    }
}

/// Create a new channel pair for the scope: `(ScopeSink, Receiver<ScopeCommand>)`.
pub fn channel_scope() -> (ScopeSink, Receiver<ScopeCommand>) {
    let (tx, rx) = std::sync::mpsc::channel();
    (ScopeSink { tx }, rx)
}
