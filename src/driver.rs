//! SSD1306 I2C transport.
//!
//! [`Ssd1306I2c`] moves a page-addressed framebuffer to the panel, either
//! whole or as the bounding box of what changed since the last flush.

use embassy_futures::yield_now;
use embedded_hal_async::i2c::I2c;

use crate::chunk::DataChunk;
use crate::command::*;
use crate::config::{Config, FlushStrategy};
use crate::dirty::{sync_page, DirtyRect};
use crate::error::Ssd1306Error;
use crate::geometry::{Geometry, MAX_BUFFER_LEN};

/// Async transport for an SSD1306 panel on an I2C bus.
///
/// The bus is borrowed for the driver's lifetime: pass `&mut i2c` to keep
/// ownership, a shared-bus device such as `embassy_embedded_hal`'s
/// `I2cDevice`, or the peripheral itself. The driver only ever issues
/// `write` calls on it.
///
/// # Lifecycle
///
/// 1. [`Ssd1306I2c::new()`]: records configuration, no I2C traffic.
/// 2. [`Ssd1306I2c::init()`]: optional power-up command sequence.
/// 3. [`Ssd1306I2c::flush()`]: send a frame; repeat per frame.
///
/// # Example
///
/// ```no_run
/// use ssd1306_hal_rs::{Geometry, Ssd1306I2c};
///
/// # async fn example(mut i2c: impl embedded_hal_async::i2c::I2c) {
/// let mut oled = Ssd1306I2c::new(0x3C, &mut i2c, Geometry::G128x64);
/// oled.init().await.unwrap();
///
/// let frame = [0u8; 1024];
/// oled.flush(&frame).await.unwrap();
/// # }
/// ```
pub struct Ssd1306I2c<I2C> {
    i2c: I2C,
    /// 7-bit device address.
    address: u8,
    config: Config,
    /// Last frame sent in [`FlushStrategy::DirtyRect`] mode.
    shadow: [u8; MAX_BUFFER_LEN],
    /// Set when the panel RAM may not match `shadow`; the next dirty
    /// flush then sends the whole frame.
    shadow_stale: bool,
    auto_init: bool,
}

impl<I2C> Ssd1306I2c<I2C>
where
    I2C: I2c,
{
    /// Construct a driver with the default [`FlushStrategy::DirtyRect`].
    ///
    /// No I2C traffic is generated.
    ///
    /// # Arguments
    /// * `address`: 7-bit I2C device address (typically `0x3C` or `0x3D`).
    /// * `i2c`: I2C bus handle.
    /// * `geometry`: panel size.
    pub fn new(address: u8, i2c: I2C, geometry: Geometry) -> Self {
        Self::with_config(
            address,
            i2c,
            Config {
                geometry,
                ..Config::default()
            },
        )
    }

    /// Construct a driver with an explicit [`Config`].
    ///
    /// No I2C traffic is generated.
    pub fn with_config(address: u8, i2c: I2C, config: Config) -> Self {
        Self {
            i2c,
            address,
            config,
            shadow: [0; MAX_BUFFER_LEN],
            shadow_stale: false,
            auto_init: false,
        }
    }

    // -----------------------------------------------------------------------
    // Bus readiness
    // -----------------------------------------------------------------------

    /// Report bus readiness.
    ///
    /// Bus setup belongs to the caller, so this never addresses the device and
    /// always succeeds.
    pub async fn connect(&mut self) -> Result<(), Ssd1306Error<I2C::Error>> {
        self.init_i2c_if_necessary();
        Ok(())
    }

    /// Record whether the driver may set up the bus on its own. Currently
    /// has no effect; bus setup stays with the caller.
    pub fn set_auto_init(&mut self, enabled: bool) {
        self.auto_init = enabled;
    }

    /// Value last passed to [`set_auto_init()`](Self::set_auto_init).
    pub fn auto_init(&self) -> bool {
        self.auto_init
    }

    /// Offset of the first pixel byte within the caller's buffer. Always 0.
    pub fn buffer_offset(&self) -> usize {
        0
    }

    fn init_i2c_if_necessary(&mut self) {}

    // -----------------------------------------------------------------------
    // Core protocol primitives
    // -----------------------------------------------------------------------

    /// Send one command byte as a `[0x80, command]` write.
    ///
    /// # Errors
    /// * [`Ssd1306Error::I2c`] if the bus reports failure.
    /// * [`Ssd1306Error::Timeout`] if the write exceeds
    ///   [`BUS_TIMEOUT_MS`] (`time` feature).
    pub async fn send_command(&mut self, command: u8) -> Result<(), Ssd1306Error<I2C::Error>> {
        self.transmit(&[CONTROL_COMMAND, command]).await
    }

    /// Send a command sequence, one transaction per byte, stopping at the
    /// first failure.
    async fn send_commands(&mut self, commands: &[u8]) -> Result<(), Ssd1306Error<I2C::Error>> {
        for &command in commands {
            self.send_command(command).await?;
        }
        Ok(())
    }

    /// Write raw bytes to the device.
    async fn transmit(&mut self, bytes: &[u8]) -> Result<(), Ssd1306Error<I2C::Error>> {
        #[cfg(feature = "time")]
        {
            use embassy_time::{with_timeout, Duration};

            match with_timeout(
                Duration::from_millis(BUS_TIMEOUT_MS),
                self.i2c.write(self.address, bytes),
            )
            .await
            {
                Ok(result) => result?,
                Err(_) => return Err(Ssd1306Error::Timeout),
            }
        }

        #[cfg(not(feature = "time"))]
        self.i2c.write(self.address, bytes).await?;

        Ok(())
    }

    // -----------------------------------------------------------------------
    // Frame transfer
    // -----------------------------------------------------------------------

    /// Send `buffer` to the panel.
    ///
    /// `buffer` is page-addressed: byte `x + page * width` holds pixels
    /// `(x, page * 8) ..= (x, page * 8 + 7)`, LSB on top.
    ///
    /// Returns the rectangle that was sent, or `None` when the
    /// [`FlushStrategy::DirtyRect`] scan found nothing to send. The task
    /// yields to the executor after every page row scanned or sent.
    ///
    /// # Errors
    /// * [`Ssd1306Error::BufferSize`] if `buffer` does not match the
    ///   geometry. Nothing is sent.
    /// * [`Ssd1306Error::I2c`] / [`Ssd1306Error::Timeout`] from the first
    ///   failing transaction. The rest of the frame is not sent and the
    ///   next flush resends the whole frame.
    #[doc(alias = "display")]
    pub async fn flush(
        &mut self,
        buffer: &[u8],
    ) -> Result<Option<DirtyRect>, Ssd1306Error<I2C::Error>> {
        self.init_i2c_if_necessary();

        let geometry = self.config.geometry;
        let expected = geometry.buffer_len();
        if buffer.len() != expected {
            return Err(Ssd1306Error::BufferSize {
                expected,
                actual: buffer.len(),
            });
        }
        if expected == 0 {
            return Ok(None);
        }

        let rect = match self.config.strategy {
            FlushStrategy::FullFrame => DirtyRect::full(geometry.width(), geometry.pages()),
            FlushStrategy::DirtyRect => match self.sync_shadow(buffer).await {
                Some(rect) => rect,
                None => {
                    #[cfg(feature = "defmt")]
                    defmt::trace!("SSD1306 frame unchanged");
                    return Ok(None);
                }
            },
        };

        #[cfg(feature = "defmt")]
        defmt::trace!("SSD1306 flush {}", rect);

        if let Err(e) = self.send_rect(buffer, rect).await {
            self.shadow_stale = true;
            return Err(e);
        }
        Ok(Some(rect))
    }

    /// Force the next flush to send the whole frame.
    ///
    /// Call after anything that changes panel RAM behind the driver's back
    /// (power cycle, reset pin). [`init()`](Self::init) calls this itself.
    pub fn invalidate(&mut self) {
        self.shadow_stale = true;
    }

    /// Copy `buffer` into the shadow, returning the box of bytes that
    /// differed (or the full frame if the shadow was stale).
    async fn sync_shadow(&mut self, buffer: &[u8]) -> Option<DirtyRect> {
        let geometry = self.config.geometry;
        let width = geometry.width() as usize;

        let mut dirty = None;
        for page in 0..geometry.pages() {
            let row = page as usize * width..(page as usize + 1) * width;
            sync_page(&buffer[row.clone()], &mut self.shadow[row], page, &mut dirty);
            yield_now().await;
        }

        if self.shadow_stale {
            self.shadow_stale = false;
            return Some(DirtyRect::full(geometry.width(), geometry.pages()));
        }
        dirty
    }

    /// Address `rect` and stream its bytes row by row.
    async fn send_rect(
        &mut self,
        buffer: &[u8],
        rect: DirtyRect,
    ) -> Result<(), Ssd1306Error<I2C::Error>> {
        let x_offset = self.config.geometry.x_offset();
        let width = self.config.geometry.width() as usize;

        self.send_commands(&[
            COLUMN_ADDR,
            x_offset + rect.min_col,
            x_offset + rect.max_col,
        ])
        .await?;
        self.send_commands(&[PAGE_ADDR, rect.min_page, rect.max_page])
            .await?;

        let mut chunk = DataChunk::new();
        for page in rect.min_page..=rect.max_page {
            let start = page as usize * width;
            let row = &buffer[start + rect.min_col as usize..=start + rect.max_col as usize];
            for &byte in row {
                if chunk.push(byte) {
                    self.transmit(chunk.frame()).await?;
                    chunk.clear();
                }
            }
            yield_now().await;
        }

        if !chunk.is_empty() {
            self.transmit(chunk.frame()).await?;
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Panel control
    // -----------------------------------------------------------------------

    /// Send the SSD1306 power-up sequence and switch the display on.
    ///
    /// Panel RAM content is undefined after power-up, so the next flush
    /// sends the whole frame.
    pub async fn init(&mut self) -> Result<(), Ssd1306Error<I2C::Error>> {
        let geometry = self.config.geometry;
        let com_pins = if geometry == Geometry::G128x32 { 0x02 } else { 0x12 };
        let contrast = if geometry == Geometry::G128x64 { 0xCF } else { 0x8F };

        self.send_commands(&[
            DISPLAY_OFF,
            SET_DISPLAY_CLOCK_DIV,
            0xF0,
            SET_MULTIPLEX,
            geometry.height().saturating_sub(1),
            SET_DISPLAY_OFFSET,
            0x00,
            SET_START_LINE,
            CHARGE_PUMP,
            0x14,
            MEMORY_MODE,
            0x00,
            SEG_REMAP,
            COM_SCAN_INC,
            SET_COM_PINS,
            com_pins,
            SET_CONTRAST,
            contrast,
            SET_PRECHARGE,
            0xF1,
            SET_VCOM_DETECT,
            0x40,
            DISPLAY_ALL_ON_RESUME,
            NORMAL_DISPLAY,
            DEACTIVATE_SCROLL,
            DISPLAY_ON,
        ])
        .await?;

        #[cfg(feature = "defmt")]
        defmt::debug!("SSD1306 initialised: {}", geometry);

        self.invalidate();
        Ok(())
    }

    /// Wake the panel from sleep.
    pub async fn display_on(&mut self) -> Result<(), Ssd1306Error<I2C::Error>> {
        self.send_command(DISPLAY_ON).await
    }

    /// Put the panel to sleep. RAM contents are kept.
    pub async fn display_off(&mut self) -> Result<(), Ssd1306Error<I2C::Error>> {
        self.send_command(DISPLAY_OFF).await
    }

    /// Set segment drive current, 0 (dimmest) to 255.
    pub async fn set_contrast(&mut self, contrast: u8) -> Result<(), Ssd1306Error<I2C::Error>> {
        self.send_commands(&[SET_CONTRAST, contrast]).await
    }

    /// Light pixels whose RAM bit is 0.
    pub async fn invert_display(&mut self) -> Result<(), Ssd1306Error<I2C::Error>> {
        self.send_command(INVERT_DISPLAY).await
    }

    /// Undo [`invert_display()`](Self::invert_display).
    pub async fn normal_display(&mut self) -> Result<(), Ssd1306Error<I2C::Error>> {
        self.send_command(NORMAL_DISPLAY).await
    }

    /// Rotate the image 180° by mirroring segments and reversing COM scan.
    pub async fn flip_screen_vertically(&mut self) -> Result<(), Ssd1306Error<I2C::Error>> {
        self.send_commands(&[SEG_REMAP | 0x01, COM_SCAN_DEC]).await
    }

    /// Undo [`flip_screen_vertically()`](Self::flip_screen_vertically).
    pub async fn reset_orientation(&mut self) -> Result<(), Ssd1306Error<I2C::Error>> {
        self.send_commands(&[SEG_REMAP, COM_SCAN_INC]).await
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    /// Panel geometry chosen at construction.
    pub fn geometry(&self) -> Geometry {
        self.config.geometry
    }

    /// How [`flush()`](Self::flush) decides what to send.
    pub fn strategy(&self) -> FlushStrategy {
        self.config.strategy
    }

    /// Visible width in pixels.
    pub fn width(&self) -> u8 {
        self.config.geometry.width()
    }

    /// Visible height in pixels, a multiple of 8.
    pub fn height(&self) -> u8 {
        self.config.geometry.height()
    }

    /// 7-bit device address as passed to the constructor.
    pub fn address(&self) -> u8 {
        self.address
    }

    /// 8-bit write address as it appears on the wire (`address << 1`).
    pub fn wire_address(&self) -> u8 {
        self.address << 1
    }

    /// Last frame sent in dirty-rectangle mode.
    pub fn shadow(&self) -> &[u8] {
        &self.shadow[..self.config.geometry.buffer_len()]
    }

    /// Give the bus handle back.
    pub fn release(self) -> I2C {
        self.i2c
    }
}
