//! The colour palette of the panel.
//!
//! Each panel lane has one red, one green and one blue data line, and each line is either on or
//! off, so a pixel can only take one of eight colours. A colour code packs the three channels as
//! `red | green << 1 | blue << 2`.

use core::convert::TryFrom;

/// One of the eight colours a pixel can show. The discriminant of each variant is its colour
/// code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Color {
    Black = 0b000,
    Red = 0b001,
    Green = 0b010,
    Yellow = 0b011,
    Blue = 0b100,
    Magenta = 0b101,
    Cyan = 0b110,
    White = 0b111,
}

/// Returned by `Color::try_from` when the value is not a colour code in 0-7.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InvalidColor(pub u8);

impl Color {
    /// Every colour, in colour code order.
    pub const ALL: [Color; 8] = [
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::White,
    ];

    /// Build a colour from its three channel bits.
    pub const fn from_rgb(red: bool, green: bool, blue: bool) -> Self {
        Self::from_bits(red as u8 | (green as u8) << 1 | (blue as u8) << 2)
    }

    /// Decode the low three bits of `bits` as a colour code. Higher bits are ignored.
    pub const fn from_bits(bits: u8) -> Self {
        Self::ALL[(bits & 0b111) as usize]
    }

    /// The colour code, in the range 0-7.
    pub const fn bits(self) -> u8 {
        self as u8
    }

    pub const fn red(self) -> bool {
        self.bits() & 1 != 0
    }

    pub const fn green(self) -> bool {
        (self.bits() >> 1) & 1 != 0
    }

    pub const fn blue(self) -> bool {
        (self.bits() >> 2) & 1 != 0
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::Black
    }
}

impl From<Color> for u8 {
    fn from(color: Color) -> u8 {
        color.bits()
    }
}

impl TryFrom<u8> for Color {
    type Error = InvalidColor;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        if code > 0b111 {
            return Err(InvalidColor(code));
        }
        Ok(Self::from_bits(code))
    }
}

/// The number of address lines needed to select one of `rows` row addresses, i.e.
/// `ceil(log2(rows))`. A single row needs no address lines.
pub const fn address_width(rows: usize) -> usize {
    let mut width = 0;
    while (1usize << width) < rows {
        width += 1;
    }
    width
}

/// The levels to drive on the address lines to select row address `addr`, starting with line A
/// (the least significant bit). The last line of a two-half panel is the half select.
pub fn row_address_bits(addr: usize, width: usize) -> impl Iterator<Item = bool> {
    (0..width).map(move |line| (addr >> line) & 1 != 0)
}
