//! The refresh driver. It scans the framebuffer onto the panel one row address at a time by
//! shifting each column's colour bits into the panel's column shift registers, latching them, and
//! lighting the row for a fixed dwell time.
//!
//! The driver does not schedule itself. The application calls `Driver::refresh_once` in its main
//! loop often enough (typically a few hundred times a second) for the rows to blend into a steady
//! image.

use hal::blocking::delay::DelayUs;

use crate::color::{address_width, row_address_bits, Color};
use crate::config::Timing;
use crate::framebuffer::Framebuffer;
use crate::interface::{Line, LineInterface};

/// A driver for a `ROWS` by `COLS` panel, wired through `LI` and timed with the blocking delay
/// `D`.
pub struct Driver<LI, D, const ROWS: usize, const COLS: usize>
where
    LI: LineInterface,
    D: DelayUs<u32>,
{
    iface: LI,
    delay: D,
    timing: Timing,
    address_width: usize,
}

impl<LI, D, const ROWS: usize, const COLS: usize> Driver<LI, D, ROWS, COLS>
where
    LI: LineInterface,
    D: DelayUs<u32>,
{
    /// Construct a new driver for a panel connected to the interface `iface`.
    ///
    /// # Panics
    ///
    /// Panics if the panel has no rows or columns, or if `iface` has fewer than `ceil(log2(ROWS))`
    /// address lines to select every row with.
    pub fn new(iface: LI, delay: D, timing: Timing) -> Self {
        let address_width = address_width(ROWS);
        if false
            || ROWS == 0
            || COLS == 0
            || address_width > usize::from(u8::max_value())
            || iface.address_lines() < address_width
        {
            panic!("Panel geometry not supported by the wired address lines.");
        }
        #[cfg(feature = "defmt")]
        defmt::debug!(
            "ledmatrix: {}x{} panel, {} address lines",
            ROWS,
            COLS,
            address_width
        );
        Driver {
            iface,
            delay,
            timing,
            address_width,
        }
    }

    /// Put every line in its idle state: output disabled, clock and latch low, and all colour
    /// and address lines low. Call this once before the first refresh.
    pub fn init(&mut self) -> Result<(), ()> {
        self.iface.write_line(Line::Clk, false)?;
        self.iface.write_line(Line::Lat, false)?;
        self.iface.write_line(Line::Oe, true)?;
        for &line in [Line::R1, Line::G1, Line::B1, Line::R2, Line::G2, Line::B2].iter() {
            self.iface.write_line(line, false)?;
        }
        for n in 0..self.iface.address_lines() {
            self.iface.write_line(Line::Addr(n as u8), false)?;
        }
        #[cfg(feature = "defmt")]
        defmt::debug!("ledmatrix: lines idle");
        Ok(())
    }

    /// Turn the panel off until the next row is displayed.
    pub fn blank(&mut self) -> Result<(), ()> {
        self.iface.write_line(Line::Oe, true)
    }

    /// Draw the whole framebuffer once, visiting every row address in ascending order. Blocks for
    /// roughly `Timing::frame_duration_us`.
    ///
    /// The last row is left lit when this returns; calling again (or calling `blank`) moves on.
    pub fn refresh_once(&mut self, fb: &Framebuffer<ROWS, COLS>) -> Result<(), ()> {
        for addr in 0..ROWS {
            self.refresh_row(fb, addr)?;
        }
        Ok(())
    }

    /// Draw a single row address of the framebuffer. Calling this for every row address in
    /// ascending order is the same as `refresh_once`, and lets the caller do other work between
    /// rows. Addresses outside the panel are ignored.
    pub fn refresh_row(&mut self, fb: &Framebuffer<ROWS, COLS>, addr: usize) -> Result<(), ()> {
        if addr >= ROWS {
            return Ok(());
        }

        // Keep the previous row dark while its shift registers are overwritten.
        self.iface.write_line(Line::Oe, true)?;
        self.select_row(addr)?;

        // Column 0 is shifted first so that it ends up furthest from the input.
        for &color in fb.row(addr).iter() {
            self.shift_column(color)?;
        }
        self.latch()?;

        self.iface.write_line(Line::Oe, false)?;
        self.delay.delay_us(self.timing.row_dwell_us);
        Ok(())
    }

    /// Destroy the driver and return the interface and delay.
    pub fn release(self) -> (LI, D) {
        (self.iface, self.delay)
    }

    fn select_row(&mut self, addr: usize) -> Result<(), ()> {
        for (n, level) in row_address_bits(addr, self.address_width).enumerate() {
            self.iface.write_line(Line::Addr(n as u8), level)?;
        }
        Ok(())
    }

    fn shift_column(&mut self, color: Color) -> Result<(), ()> {
        self.iface.write_line(Line::Clk, false)?;
        self.iface.write_line(Line::R1, color.red())?;
        self.iface.write_line(Line::G1, color.green())?;
        self.iface.write_line(Line::B1, color.blue())?;
        self.delay.delay_us(self.timing.data_setup_us);
        self.iface.write_line(Line::Clk, true)?;
        self.delay.delay_us(self.timing.clock_high_us);
        self.iface.write_line(Line::Clk, false)?;
        self.delay.delay_us(self.timing.clock_low_us);
        Ok(())
    }

    fn latch(&mut self) -> Result<(), ()> {
        self.iface.write_line(Line::Lat, true)?;
        self.delay.delay_us(self.timing.latch_pulse_us);
        self.iface.write_line(Line::Lat, false)
    }
}
