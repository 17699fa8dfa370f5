//! Demo: driving the scope from external code.
//!
//! What it demonstrates
//! - Programmatic run/stop/clear via `ScopeController`.
//! - Subscribing to the acquisition info the UI publishes each frame.
//!
//! How to run
//! ```bash
//! cargo run --example controlled
//! ```
//! The scope alternates between running and stopped every few seconds and
//! clears after every fifth cycle; state changes are logged.

use std::time::Duration;

use tracing::info;
use twinscope::{
    channel_scope, pump, run_scope, ScopeConfig, ScopeController, ThreadScheduler,
};

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let (sink, rx) = channel_scope();
    let controller = ScopeController::new();

    // 200 Hz sampling: a square wave on CH1, a sine on CH2.
    let scheduler = ThreadScheduler::new();
    let mut n = 0u64;
    let source = move || {
        let t = n as f64 / 200.0;
        n += 1;
        let square = if (t * 10.0) as u64 % 2 == 0 { 4.0 } else { 1.0 };
        let sine = 2.5 + 2.0 * (2.0 * std::f64::consts::PI * 3.0 * t).sin();
        (square, sine)
    };
    let sampling = pump(&scheduler, Duration::from_millis(5), source, sink);

    // External control loop: stop for a second every two seconds, clear
    // after every fifth cycle, and report the last published scope state.
    let ctrl = controller.clone();
    std::thread::spawn(move || {
        let updates = ctrl.subscribe();
        let mut cycles = 0u32;
        loop {
            std::thread::sleep(Duration::from_secs(2));
            ctrl.stop();
            std::thread::sleep(Duration::from_secs(1));
            cycles += 1;
            if cycles % 5 == 0 {
                ctrl.clear();
            }
            ctrl.run();
            if let Some(state) = updates.try_iter().last() {
                info!(
                    running = state.running,
                    samples = state.sample_count,
                    buffered = state.buffered,
                    "scope state"
                );
            }
        }
    });

    let cfg = ScopeConfig {
        title: "TwinScope (externally controlled)".to_string(),
        controller: Some(controller),
        ..Default::default()
    };
    let result = run_scope(rx, cfg);
    sampling.cancel();
    result
}
