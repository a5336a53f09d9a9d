//! Periodic refresh loop.
//!
//! [`refresh_task`] owns an [`Ssd1306I2c`] and pushes a mutex-shared
//! [`PageBuffer`] to the panel at a fixed rate. Drawing code locks the
//! mutex, draws, and unlocks; it never touches the bus.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::mutex::Mutex;
use embedded_hal_async::i2c::I2c;

use crate::config::RefreshConfig;
use crate::driver::Ssd1306I2c;
use crate::framebuffer::PageBuffer;

// ── Refresh task ─────────────────────────────────────────────────────────

/// Keep the panel in step with a shared [`PageBuffer`].
///
/// Runs forever once `init` succeeds.
///
/// The function is generic over the bus, and `#[embassy_executor::task]`
/// functions can't be, so spawn it through a task that names the bus type:
///
/// ```ignore
/// #[embassy_executor::task]
/// async fn display(
///     oled: Ssd1306I2c<I2c<'static, Async>>,
///     frame: &'static Mutex<CriticalSectionRawMutex, PageBuffer>,
/// ) {
///     refresh_task(oled, frame, RefreshConfig { update_frequency_hz: 20 }).await;
/// }
/// ```
///
/// Each tick copies `frame` out under the lock and flushes the copy with
/// the mutex already released, so drawing never waits on I2C. With the
/// default dirty-rectangle strategy a tick where nothing was drawn sends
/// nothing.
///
/// `frame` must be built for the same [`Geometry`](crate::Geometry) as
/// `driver`, otherwise every flush fails with
/// [`Ssd1306Error::BufferSize`](crate::Ssd1306Error::BufferSize).
///
/// # Errors
///
/// Nothing is returned to the caller. A failed `init` is logged and ends
/// the loop. A failed flush is logged and the next tick resends the whole
/// frame.
pub async fn refresh_task<I2C>(
    mut driver: Ssd1306I2c<I2C>,
    frame: &'static Mutex<CriticalSectionRawMutex, PageBuffer>,
    config: RefreshConfig,
) where
    I2C: I2c,
{
    // ── Initialisation ───────────────────────────────────────────────
    if let Err(_e) = driver.init().await {
        #[cfg(feature = "defmt")]
        defmt::error!("SSD1306 init failed: {}", defmt::Debug2Format(&_e));
        return;
    }

    #[cfg(feature = "defmt")]
    defmt::info!("SSD1306 refresh loop at {} Hz", config.update_frequency_hz);

    let period = embassy_time::Duration::from_millis(config.update_period_ms());

    // ── Main loop ────────────────────────────────────────────────────
    loop {
        embassy_time::Timer::after(period).await;

        let snapshot = frame.lock().await.clone(); // ← mutex released here

        if let Err(_e) = driver.flush(snapshot.as_bytes()).await {
            #[cfg(feature = "defmt")]
            defmt::error!("SSD1306 flush failed: {}", defmt::Debug2Format(&_e));
        }
    }
}
