//! Async I2C transport for SSD1306 OLED panels.
//!
//! This crate provides [`Ssd1306I2c`], which sends a page-addressed
//! monochrome framebuffer to an SSD1306 controller over any
//! `embedded-hal-async` I2C bus, and [`PageBuffer`], an
//! `embedded-graphics` draw target in the matching memory layout.
//!
//! Two flush strategies are available, chosen at construction time:
//!
//! - [`FlushStrategy::FullFrame`]: every flush sends the whole frame.
//! - [`FlushStrategy::DirtyRect`] *(default)*: the driver keeps a shadow
//!   copy of the last frame and sends only the bounding box of changed
//!   bytes. An unchanged frame costs no bus traffic at all.
//!
//! Flushes yield to the executor after every page row, so other tasks keep
//! running during multi-millisecond transfers.
//!
//! # Quick Start
//!
//! ```ignore
//! use embedded_graphics::{pixelcolor::BinaryColor, prelude::*, primitives::*};
//! use ssd1306_hal_rs::{Geometry, PageBuffer, Ssd1306I2c};
//!
//! // In your Embassy main:
//! let mut oled = Ssd1306I2c::new(0x3C, &mut i2c, Geometry::G128x64);
//! oled.init().await?;
//!
//! let mut frame = PageBuffer::new(Geometry::G128x64);
//! Circle::new(Point::new(48, 16), 32)
//!     .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
//!     .draw(&mut frame)?;
//! oled.flush(frame.as_bytes()).await?;
//! ```
//!
//! # Crate Features
//!
//! - **`defmt`**: structured logging via [`defmt`] and `defmt::Format`
//!   implementations on public types.
//! - **`time`**: bound every I2C transaction by
//!   [`BUS_TIMEOUT_MS`](command::BUS_TIMEOUT_MS) using `embassy-time`.
//! - **`task`**: `refresh_task`, a periodic refresh loop over a
//!   mutex-shared [`PageBuffer`] (implies `time`).

#![no_std]

#[cfg(test)]
extern crate std;

mod chunk;
pub mod command;
pub mod config;
pub mod dirty;
pub mod driver;
pub mod error;
pub mod framebuffer;
pub mod geometry;
#[cfg(feature = "task")]
pub mod refresh_task;
#[cfg(test)]
mod test_support;

// ── Re-exports for convenience ───────────────────────────────────────────

pub use command::DEFAULT_ADDRESS;
pub use config::{Config, FlushStrategy, RefreshConfig};
pub use dirty::DirtyRect;
pub use driver::Ssd1306I2c;
pub use error::Ssd1306Error;
pub use framebuffer::PageBuffer;
pub use geometry::{Geometry, MAX_BUFFER_LEN};
#[cfg(feature = "task")]
pub use refresh_task::refresh_task;
