//! Display calibration settings: volts/div, timebase, trigger level, grid.

use thiserror::Error;

/// Rejected settings writes. The previous value is always retained.
#[derive(Debug, Error, PartialEq)]
pub enum SettingsError {
    #[error("voltage scale must be finite and positive, got {0}")]
    InvalidVoltageScale(f64),
    #[error("timebase must be finite and positive, got {0}")]
    InvalidTimebase(f64),
    #[error("trigger level must be finite, got {0}")]
    InvalidTriggerLevel(f64),
    #[error("grid divisions must be at least 1, got {0}x{1}")]
    InvalidGridDivisions(u32, u32),
}

/// Calibration state shared by the acquisition controller and the renderer.
///
/// These values affect only how already-buffered samples are displayed;
/// the buffers store raw volts, so rescaling is non-destructive.
#[derive(Debug, Clone, PartialEq)]
pub struct ScopeSettings {
    voltage_scale: f64,
    timebase: f64,
    trigger_level: f64,
    grid_divisions: (u32, u32),
}

impl Default for ScopeSettings {
    fn default() -> Self {
        Self {
            voltage_scale: 1.0,
            timebase: 1.0,
            trigger_level: 0.0,
            grid_divisions: (10, 8),
        }
    }
}

impl ScopeSettings {
    /// Volts per vertical grid division.
    pub fn voltage_scale(&self) -> f64 {
        self.voltage_scale
    }

    /// Milliseconds per horizontal grid division.
    pub fn timebase(&self) -> f64 {
        self.timebase
    }

    /// Trigger level in volts. Stored and displayed only; capture is not
    /// gated on it.
    pub fn trigger_level(&self) -> f64 {
        self.trigger_level
    }

    /// Grid divisions as (horizontal, vertical).
    pub fn grid_divisions(&self) -> (u32, u32) {
        self.grid_divisions
    }

    /// Set volts/div. A zero or negative scale would make the vertical
    /// transform undefined, so such writes are rejected.
    pub fn set_voltage_scale(&mut self, volts_per_div: f64) -> Result<(), SettingsError> {
        if !volts_per_div.is_finite() || volts_per_div <= 0.0 {
            return Err(SettingsError::InvalidVoltageScale(volts_per_div));
        }
        self.voltage_scale = volts_per_div;
        Ok(())
    }

    /// Set milliseconds/div.
    pub fn set_timebase(&mut self, ms_per_div: f64) -> Result<(), SettingsError> {
        if !ms_per_div.is_finite() || ms_per_div <= 0.0 {
            return Err(SettingsError::InvalidTimebase(ms_per_div));
        }
        self.timebase = ms_per_div;
        Ok(())
    }

    /// Set the trigger level in volts.
    pub fn set_trigger_level(&mut self, volts: f64) -> Result<(), SettingsError> {
        if !volts.is_finite() {
            return Err(SettingsError::InvalidTriggerLevel(volts));
        }
        self.trigger_level = volts;
        Ok(())
    }

    /// Set grid divisions as (horizontal, vertical). Both must be nonzero.
    pub fn set_grid_divisions(&mut self, x: u32, y: u32) -> Result<(), SettingsError> {
        if x == 0 || y == 0 {
            return Err(SettingsError::InvalidGridDivisions(x, y));
        }
        self.grid_divisions = (x, y);
        Ok(())
    }
}
