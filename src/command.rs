//! SSD1306 command bytes and I2C framing constants.
//!
//! Every I2C write to the controller starts with a control byte:
//! - `0x80` (Co = 1, D/C# = 0): the single byte that follows is a command.
//! - `0x40` (Co = 0, D/C# = 1): every byte that follows is display RAM data.
//!
//! Multi-byte commands (e.g. [`COLUMN_ADDR`] and its two arguments) are sent
//! as one 2-byte `[CONTROL_COMMAND, byte]` transaction per byte.

// ---------------------------------------------------------------------------
// Control bytes
// ---------------------------------------------------------------------------

/// Marks the next byte of the transaction as a command.
pub const CONTROL_COMMAND: u8 = 0x80;

/// Marks the remaining bytes of the transaction as pixel data.
pub const CONTROL_DATA: u8 = 0x40;

// ---------------------------------------------------------------------------
// Addressing
// ---------------------------------------------------------------------------

/// Set column address range. Followed by start and end column.
pub const COLUMN_ADDR: u8 = 0x21;

/// Set page address range. Followed by start and end page.
pub const PAGE_ADDR: u8 = 0x22;

/// Set memory addressing mode. Followed by the mode (0 = horizontal).
pub const MEMORY_MODE: u8 = 0x20;

// ---------------------------------------------------------------------------
// Fundamental and hardware configuration
// ---------------------------------------------------------------------------

pub const SET_CONTRAST: u8 = 0x81;
pub const DISPLAY_ALL_ON_RESUME: u8 = 0xA4;
pub const NORMAL_DISPLAY: u8 = 0xA6;
pub const INVERT_DISPLAY: u8 = 0xA7;
pub const DISPLAY_OFF: u8 = 0xAE;
pub const DISPLAY_ON: u8 = 0xAF;

pub const SET_DISPLAY_OFFSET: u8 = 0xD3;
pub const SET_COM_PINS: u8 = 0xDA;
pub const SET_VCOM_DETECT: u8 = 0xDB;
pub const SET_DISPLAY_CLOCK_DIV: u8 = 0xD5;
pub const SET_PRECHARGE: u8 = 0xD9;
pub const SET_MULTIPLEX: u8 = 0xA8;
pub const SET_START_LINE: u8 = 0x40;

/// Column 0 mapped to SEG0. OR with `0x01` to map column 127 to SEG0.
pub const SEG_REMAP: u8 = 0xA0;
pub const COM_SCAN_INC: u8 = 0xC0;
pub const COM_SCAN_DEC: u8 = 0xC8;

pub const CHARGE_PUMP: u8 = 0x8D;
pub const DEACTIVATE_SCROLL: u8 = 0x2E;

// ---------------------------------------------------------------------------
// Protocol constants
// ---------------------------------------------------------------------------

/// Maximum pixel bytes carried by one data transaction (after the
/// [`CONTROL_DATA`] marker).
pub const CHUNK_SIZE: usize = 16;

/// Per-transaction bus timeout in milliseconds (enforced with the `time`
/// feature).
pub const BUS_TIMEOUT_MS: u64 = 100;

/// Column count of the SSD1306 display RAM. Narrower panels are centred
/// inside it.
pub const NATIVE_WIDTH: u8 = 128;

/// Default 7-bit I2C address of most SSD1306 breakouts (`0x3D` if the
/// SA0 pin is pulled high).
pub const DEFAULT_ADDRESS: u8 = 0x3C;
