//! The acquisition-source boundary: a synchronous two-value read plus the
//! glue that pumps it into a [`ScopeSink`] on a repeating tick.

use std::time::Duration;

use crate::scheduler::{RepeatingHandle, Scheduler};
use crate::sink::ScopeSink;

/// Synchronous paired read of both input channels, in volts.
///
/// Implementations are expected to return immediately; the pump calls
/// this once per sampling tick. Any closure returning `(f64, f64)` works.
pub trait SampleSource {
    fn read_sample(&mut self) -> (f64, f64);
}

impl<F> SampleSource for F
where
    F: FnMut() -> (f64, f64),
{
    fn read_sample(&mut self) -> (f64, f64) {
        self()
    }
}

/// Convert a raw ADC reading to volts: `raw / max_raw * vref`.
///
/// The usual host supplies 10-bit readings against a 5 V reference. No
/// clamping; readings above `max_raw` map above `vref`.
pub fn adc_to_volts(raw: u16, max_raw: u16, vref: f64) -> f64 {
    if max_raw == 0 {
        return 0.0;
    }
    f64::from(raw) / f64::from(max_raw) * vref
}

/// Sample `source` every `every` on `scheduler`, sending each paired read
/// into `sink`. This is the fixed sampling cadence; rendering runs on its
/// own cadence and the two are never synchronized.
///
/// Send errors are ignored: the receiver disappearing just means the UI
/// closed, and cancelling the returned handle is the caller's cue to stop.
pub fn pump<S>(
    scheduler: &dyn Scheduler,
    every: Duration,
    mut source: S,
    sink: ScopeSink,
) -> RepeatingHandle
where
    S: SampleSource + Send + 'static,
{
    scheduler.schedule_repeating(
        every,
        Box::new(move || {
            let (ch1, ch2) = source.read_sample();
            let _ = sink.send_sample(ch1, ch2);
        }),
    )
}
