//! Bouncing square demo
//!
//! Standalone hardware demonstration for an STM32F103 "Blue Pill" with a
//! 128×64 SSD1306 on I2C1. A 12 px square bounces around the screen; with
//! the default dirty-rectangle strategy each flush sends only the area the
//! square moved through instead of the full 1 KiB frame.
//!
//! # Wiring
//!
//! | Signal    | Blue Pill Pin | Notes           |
//! |-----------|---------------|-----------------|
//! | I2C1 SCL  | PB6           |                 |
//! | I2C1 SDA  | PB7           |                 |
//! | OLED VCC  | 3V3           |                 |
//! | OLED GND  | GND           |                 |

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_stm32::i2c::{self, I2c};
use embassy_stm32::time::Hertz;
use embassy_stm32::{bind_interrupts, peripherals};
use embassy_time::{Duration, Timer};
use {defmt_rtt as _, panic_probe as _};

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};

use ssd1306_hal_rs::{Geometry, PageBuffer, Ssd1306I2c, DEFAULT_ADDRESS};

// Wire the I2C1 event/error interrupts to Embassy's handlers.
bind_interrupts!(struct Irqs {
    I2C1_EV => i2c::EventInterruptHandler<peripherals::I2C1>;
    I2C1_ER => i2c::ErrorInterruptHandler<peripherals::I2C1>;
});

const SQUARE: u32 = 12;

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_stm32::init(Default::default());
    info!("Bounce demo starting");

    let mut bus = I2c::new(
        p.I2C1,
        p.PB6, // SCL
        p.PB7, // SDA
        Irqs,
        p.DMA1_CH6,
        p.DMA1_CH7,
        Hertz::khz(400),
        Default::default(),
    );

    // The driver borrows the bus; it stays ours for other devices later.
    let mut oled = Ssd1306I2c::new(DEFAULT_ADDRESS, &mut bus, Geometry::G128x64);
    oled.init().await.expect("OLED init failed");
    info!("OLED initialised");

    let mut frame = PageBuffer::new(Geometry::G128x64);
    let (max_x, max_y) = (128 - SQUARE as i32, 64 - SQUARE as i32);
    let (mut x, mut y, mut dx, mut dy) = (0i32, 0i32, 2i32, 1i32);

    loop {
        frame.clear_buffer();
        Rectangle::new(Point::new(x, y), Size::new(SQUARE, SQUARE))
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
            .draw(&mut frame)
            .ok();

        match oled.flush(frame.as_bytes()).await {
            Ok(Some(rect)) => debug!("sent {} bytes", rect.byte_count()),
            Ok(None) => {}
            Err(e) => error!("flush failed: {}", e),
        }

        if x + dx < 0 || x + dx > max_x {
            dx = -dx;
        }
        if y + dy < 0 || y + dy > max_y {
            dy = -dy;
        }
        x += dx;
        y += dy;

        Timer::after(Duration::from_millis(33)).await; // ~30 Hz
    }
}
