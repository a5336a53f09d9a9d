//! Error types for the SSD1306 transport.

use core::fmt;

/// Errors that can occur while talking to the panel.
///
/// Generic over the I2C implementation's error type so callers keep the
/// HAL's own diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ssd1306Error<E> {
    /// The I2C write reported failure (NACK, arbitration loss, bus fault).
    I2c(E),

    /// The I2C write did not complete within
    /// [`BUS_TIMEOUT_MS`](crate::command::BUS_TIMEOUT_MS).
    /// Only produced with the `time` feature.
    Timeout,

    /// The framebuffer passed to `flush()` does not match the configured
    /// geometry.
    BufferSize { expected: usize, actual: usize },
}

// Allow ergonomic `?` propagation from raw I2C errors.
impl<E> From<E> for Ssd1306Error<E> {
    fn from(error: E) -> Self {
        Ssd1306Error::I2c(error)
    }
}

impl<E: fmt::Debug> fmt::Display for Ssd1306Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Ssd1306Error::I2c(e) => write!(f, "I2C error: {:?}", e),
            Ssd1306Error::Timeout => write!(f, "I2C transaction timed out"),
            Ssd1306Error::BufferSize { expected, actual } => write!(
                f,
                "Framebuffer is {} bytes, expected {}",
                actual, expected
            ),
        }
    }
}

#[cfg(feature = "defmt")]
impl<E: defmt::Format> defmt::Format for Ssd1306Error<E> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Ssd1306Error::I2c(e) => defmt::write!(f, "I2C error: {}", e),
            Ssd1306Error::Timeout => defmt::write!(f, "I2C timeout"),
            Ssd1306Error::BufferSize { expected, actual } => {
                defmt::write!(f, "Framebuffer is {} bytes, expected {}", actual, expected)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::string::ToString;

    #[test]
    fn display_messages() {
        let e: Ssd1306Error<u8> = Ssd1306Error::I2c(7);
        assert_eq!(e.to_string(), "I2C error: 7");
        assert_eq!(
            Ssd1306Error::<u8>::Timeout.to_string(),
            "I2C transaction timed out"
        );
        assert_eq!(
            Ssd1306Error::<u8>::BufferSize {
                expected: 1024,
                actual: 512
            }
            .to_string(),
            "Framebuffer is 512 bytes, expected 1024"
        );
    }

    #[test]
    fn question_mark_wraps_bus_errors() {
        fn send() -> Result<(), Ssd1306Error<&'static str>> {
            Err::<(), _>("nack")?;
            Ok(())
        }
        assert_eq!(send(), Err(Ssd1306Error::I2c("nack")));
    }
}
