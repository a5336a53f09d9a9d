//! Driver and refresh-loop configuration.

use crate::geometry::Geometry;

// ── FlushStrategy ────────────────────────────────────────────────────────

/// How [`Ssd1306I2c::flush()`](crate::Ssd1306I2c::flush) moves a frame to
/// the panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FlushStrategy {
    /// Send the whole frame on every flush. No shadow buffer is kept.
    FullFrame,
    /// Keep a shadow copy of the last frame and send only the bounding box
    /// of the bytes that changed. Nothing is sent if nothing changed.
    #[default]
    DirtyRect,
}

// ── Config ───────────────────────────────────────────────────────────────

/// Construction-time driver configuration.
///
/// [`Config::default()`] is a 128×64 panel with dirty-rectangle flushing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// Panel size.
    pub geometry: Geometry,
    /// Flush strategy.
    pub strategy: FlushStrategy,
}

// ── RefreshConfig ────────────────────────────────────────────────────────

/// Configuration for the periodic refresh loop (`task` feature).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RefreshConfig {
    /// Refresh rate in Hz. Default: 30. Values above 1000 are treated
    /// as 1000 and 0 as 1.
    pub update_frequency_hz: u32,
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            update_frequency_hz: 30,
        }
    }
}

impl RefreshConfig {
    /// Convert the configured frequency to a timer period in milliseconds.
    ///
    /// Formula: `1000 / update_frequency_hz`.
    pub fn update_period_ms(&self) -> u64 {
        1000 / self.update_frequency_hz.clamp(1, 1000) as u64
    }
}
