//! Driver library for row-multiplexed RGB LED matrix panels (HUB75 and similar) wired directly to
//! GPIO pins.
//!
//! The application owns a `Framebuffer` and draws into it, and repeatedly calls
//! `Driver::refresh_once` to scan it onto the panel.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate embedded_hal as hal;

pub mod color;
pub mod config;
pub mod framebuffer;
#[macro_use]
pub mod interface;
pub mod driver;

/// Row addresses of the reference 64x32 panel. Address line E is the half select.
pub const PANEL_ROWS: usize = 32;
/// Columns of the reference 64x32 panel.
pub const PANEL_COLS: usize = 64;

/// A framebuffer for the reference 64x32 panel.
pub type PanelFramebuffer = Framebuffer<PANEL_ROWS, PANEL_COLS>;

// Re-exports for primary API.
pub use color::{Color, InvalidColor};
pub use config::Timing;
pub use driver::Driver;
pub use framebuffer::Framebuffer;
pub use interface::gpio::{GpioInterface, RgbPins};
pub use interface::{Line, LineInterface};
