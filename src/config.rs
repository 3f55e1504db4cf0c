//! Timing configuration for the panel's shift/latch protocol.

/// The delays, in microseconds, the driver holds each signal level for while refreshing. Builder
/// methods offer a declarative way to override a delay, or to leave it at the default, which is
/// known to satisfy the setup and hold times of common HUB75 panels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Timing {
    pub(crate) data_setup_us: u32,
    pub(crate) clock_high_us: u32,
    pub(crate) clock_low_us: u32,
    pub(crate) latch_pulse_us: u32,
    pub(crate) row_dwell_us: u32,
}

impl Timing {
    /// Create a timing configuration with every delay at its default.
    pub const fn new() -> Self {
        Timing {
            data_setup_us: 1,
            clock_high_us: 1,
            clock_low_us: 1,
            latch_pulse_us: 1,
            row_dwell_us: 100,
        }
    }

    /// Extend this `Timing` to set how long the colour lines settle before each clock rising
    /// edge.
    pub const fn data_setup_us(self, us: u32) -> Self {
        Self {
            data_setup_us: us,
            ..self
        }
    }

    /// Extend this `Timing` to set how long the clock is held high on each column.
    pub const fn clock_high_us(self, us: u32) -> Self {
        Self {
            clock_high_us: us,
            ..self
        }
    }

    /// Extend this `Timing` to set how long the clock is held low after each column.
    pub const fn clock_low_us(self, us: u32) -> Self {
        Self {
            clock_low_us: us,
            ..self
        }
    }

    /// Extend this `Timing` to set the width of the latch pulse at the end of each row.
    pub const fn latch_pulse_us(self, us: u32) -> Self {
        Self {
            latch_pulse_us: us,
            ..self
        }
    }

    /// Extend this `Timing` to set how long each row is lit before moving on to the next. This is
    /// the only control over perceived brightness, and it is the same for every row.
    pub const fn row_dwell_us(self, us: u32) -> Self {
        Self {
            row_dwell_us: us,
            ..self
        }
    }

    /// The nominal time one row takes to shift out, latch and display, for a panel `cols`
    /// columns wide. Time spent writing lines is not included.
    pub fn row_duration_us(&self, cols: usize) -> u64 {
        let per_column = u64::from(self.data_setup_us)
            + u64::from(self.clock_high_us)
            + u64::from(self.clock_low_us);
        cols as u64 * per_column + u64::from(self.latch_pulse_us) + u64::from(self.row_dwell_us)
    }

    /// The nominal time one full refresh of a `rows` by `cols` panel takes.
    pub fn frame_duration_us(&self, rows: usize, cols: usize) -> u64 {
        rows as u64 * self.row_duration_us(cols)
    }
}

impl Default for Timing {
    fn default() -> Self {
        Self::new()
    }
}
