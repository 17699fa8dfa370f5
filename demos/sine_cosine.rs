//! Demo: two phase-shifted waveforms.
//!
//! What it demonstrates
//! - Feeding paired samples with `channel_scope()` and `pump`.
//! - A `SampleSource` closure standing in for the host's analog reads.
//!
//! How to run
//! ```bash
//! cargo run --example sine_cosine
//! ```
//! You should see a sine on CH1 and a half-amplitude cosine on CH2
//! sweeping left to right until the buffer fills.

use std::time::Duration;

use twinscope::{adc_to_volts, channel_scope, pump, run_scope, ScopeConfig, ThreadScheduler};

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let (sink, rx) = channel_scope();

    // 100 Hz sampling of a 2 Hz pair, generated as 10-bit analog pin
    // reads and converted to the 0-5 V range the way a host would.
    let scheduler = ThreadScheduler::new();
    let mut n = 0u64;
    let source = move || {
        let t = n as f64 / 100.0;
        n += 1;
        let phase = 2.0 * std::f64::consts::PI * 2.0 * t;
        let raw1 = ((phase.sin() * 0.5 + 0.5) * 1023.0) as u16;
        let raw2 = ((phase.cos() * 0.25 + 0.5) * 1023.0) as u16;
        (adc_to_volts(raw1, 1023, 5.0), adc_to_volts(raw2, 1023, 5.0))
    };
    let sampling = pump(&scheduler, Duration::from_millis(10), source, sink);

    // Run the UI until closed
    let result = run_scope(rx, ScopeConfig::default());
    sampling.cancel();
    result
}
