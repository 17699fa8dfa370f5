//! Controllers for interacting with the scope UI from external code.
//!
//! A controller exposes lightweight request state and a subscription
//! mechanism so non-UI code can push run/stop/clear intents and observe
//! acquisition progress without touching the acquisition state directly.
//! The UI applies pending requests once per frame, after draining the
//! sample channel, and then publishes the resulting state to subscribers.

use std::sync::mpsc::{Receiver, Sender};
use std::sync::{Arc, Mutex};

/// Snapshot of acquisition state published to controller subscribers.
#[derive(Debug, Clone, PartialEq)]
pub struct AcquisitionInfo {
    /// Whether acquisition currently accepts samples.
    pub running: bool,
    /// Samples accepted since start or the last clear.
    pub sample_count: u64,
    /// Current per-channel buffer length.
    pub buffered: usize,
    /// Displayed trigger level in volts.
    pub trigger_level: f64,
}

/// Controller to drive the scope and subscribe to acquisition updates.
#[derive(Clone, Default)]
pub struct ScopeController {
    pub(crate) inner: Arc<Mutex<ScopeCtrlInner>>, // crate-visible for the UI
}

#[derive(Default)]
pub(crate) struct ScopeCtrlInner {
    pub(crate) request_running: Option<bool>,
    pub(crate) request_clear: bool,
    pub(crate) request_trigger_level: Option<f64>,
    pub(crate) request_voltage_scale: Option<f64>,
    pub(crate) request_timebase: Option<f64>,
    pub(crate) listeners: Vec<Sender<AcquisitionInfo>>,
}

impl ScopeController {
    /// Create a fresh controller.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request that acquisition resume.
    pub fn run(&self) {
        self.inner.lock().unwrap().request_running = Some(true);
    }

    /// Request that acquisition stop. Samples arriving while stopped are
    /// dropped by the scope, not queued.
    pub fn stop(&self) {
        self.inner.lock().unwrap().request_running = Some(false);
    }

    /// Request both channel buffers be emptied.
    pub fn clear(&self) {
        self.inner.lock().unwrap().request_clear = true;
    }

    /// Request a trigger-level change (volts). Out-of-range values are
    /// rejected by the scope and the prior level is kept.
    pub fn set_trigger_level(&self, volts: f64) {
        self.inner.lock().unwrap().request_trigger_level = Some(volts);
    }

    /// Request a vertical-scale change (volts/division).
    pub fn set_voltage_scale(&self, volts_per_div: f64) {
        self.inner.lock().unwrap().request_voltage_scale = Some(volts_per_div);
    }

    /// Request a timebase change (ms/division).
    pub fn set_timebase(&self, ms_per_div: f64) {
        self.inner.lock().unwrap().request_timebase = Some(ms_per_div);
    }

    /// Subscribe to acquisition updates. The returned receiver gets an
    /// [`AcquisitionInfo`] every time the UI publishes one (roughly once
    /// per rendered frame). Dropped receivers are pruned automatically.
    pub fn subscribe(&self) -> Receiver<AcquisitionInfo> {
        let (tx, rx) = std::sync::mpsc::channel();
        self.inner.lock().unwrap().listeners.push(tx);
        rx
    }

    /// Publish `info` to all live subscribers, pruning dead ones.
    pub(crate) fn publish(&self, info: &AcquisitionInfo) {
        let mut inner = self.inner.lock().unwrap();
        inner.listeners.retain(|tx| tx.send(info.clone()).is_ok());
    }
}
