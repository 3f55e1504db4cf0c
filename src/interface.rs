//! The signal lines of the panel connector, and the interface the driver uses to drive them.

/// A single named signal line on the panel connector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Line {
    /// Red data line of the first (upper) lane.
    R1,
    /// Green data line of the first (upper) lane.
    G1,
    /// Blue data line of the first (upper) lane.
    B1,
    /// Red data line of the second (lower) lane.
    R2,
    /// Green data line of the second (lower) lane.
    G2,
    /// Blue data line of the second (lower) lane.
    B2,
    /// Row address line `n`, where 0 is line A and carries the least significant address bit.
    Addr(u8),
    /// Serial clock. Data lines are shifted into the column shift registers on the rising edge.
    Clk,
    /// Latch. A high pulse transfers the shift registers into the column output drivers.
    Lat,
    /// Output enable, active low. The latched row is lit while this line is low.
    Oe,
}

pub trait LineInterface {
    /// Drive `line` high or low. The new level must be in effect when this returns.
    fn write_line(&mut self, line: Line, high: bool) -> Result<(), ()>;
    /// The number of row address lines the panel is wired with.
    fn address_lines(&self) -> usize;
}

pub mod gpio {
    //! Drives the panel lines with one embedded-hal GPIO output pin per line. The pins must
    //! already be configured as push-pull outputs.

    use hal::digital::v2::OutputPin;

    use super::{Line, LineInterface};

    /// The three colour data pins of one lane.
    pub struct RgbPins<P> {
        pub r: P,
        pub g: P,
        pub b: P,
    }

    impl<P> RgbPins<P> {
        pub fn new(r: P, g: P, b: P) -> Self {
            Self { r, g, b }
        }
    }

    pub struct GpioInterface<P, A, CLK, LAT, OE, const N: usize> {
        /// Colour pins of the first lane.
        lane1: RgbPins<P>,
        /// Colour pins of the second lane, if wired. Most HALs can erase pins to a single type,
        /// so both lanes share the pin type `P`.
        lane2: Option<RgbPins<P>>,
        /// Row address pins A, B, C... in order.
        addr: [A; N],
        clk: CLK,
        lat: LAT,
        oe: OE,
    }

    impl<P, A, CLK, LAT, OE, const N: usize> GpioInterface<P, A, CLK, LAT, OE, N>
    where
        P: OutputPin,
        A: OutputPin,
        CLK: OutputPin,
        LAT: OutputPin,
        OE: OutputPin,
    {
        /// Create a new GPIO interface with a single lane of colour pins `lane1`, the row address
        /// pins `addr` starting from line A, and the clock, latch and output enable pins.
        pub fn new(lane1: RgbPins<P>, addr: [A; N], clk: CLK, lat: LAT, oe: OE) -> Self {
            Self {
                lane1,
                lane2: None,
                addr,
                clk,
                lat,
                oe,
            }
        }

        /// Extend this interface with the colour pins of the second lane.
        pub fn with_lane2(self, lane2: RgbPins<P>) -> Self {
            Self {
                lane2: Some(lane2),
                ..self
            }
        }
    }

    fn set<P: OutputPin>(pin: &mut P, high: bool) -> Result<(), ()> {
        let result = if high { pin.set_high() } else { pin.set_low() };
        result.map_err(|_| ())
    }

    impl<P, A, CLK, LAT, OE, const N: usize> LineInterface for GpioInterface<P, A, CLK, LAT, OE, N>
    where
        P: OutputPin,
        A: OutputPin,
        CLK: OutputPin,
        LAT: OutputPin,
        OE: OutputPin,
    {
        fn write_line(&mut self, line: Line, high: bool) -> Result<(), ()> {
            match line {
                Line::R1 => set(&mut self.lane1.r, high),
                Line::G1 => set(&mut self.lane1.g, high),
                Line::B1 => set(&mut self.lane1.b, high),
                // An unwired second lane has nothing to drive.
                Line::R2 => self.lane2.as_mut().map_or(Ok(()), |l| set(&mut l.r, high)),
                Line::G2 => self.lane2.as_mut().map_or(Ok(()), |l| set(&mut l.g, high)),
                Line::B2 => self.lane2.as_mut().map_or(Ok(()), |l| set(&mut l.b, high)),
                Line::Addr(n) => {
                    let pin = self.addr.get_mut(n as usize).ok_or(())?;
                    set(pin, high)
                }
                Line::Clk => set(&mut self.clk, high),
                Line::Lat => set(&mut self.lat, high),
                Line::Oe => set(&mut self.oe, high),
            }
        }

        fn address_lines(&self) -> usize {
            N
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use crate::interface::test_spy::{SpyLog, SpyPin};

        type SpyGpio = GpioInterface<SpyPin, SpyPin, SpyPin, SpyPin, SpyPin, 5>;

        fn spy_interface(log: &SpyLog) -> SpyGpio {
            let pin = |id| SpyPin::new(id, log);
            GpioInterface::new(
                RgbPins::new(pin("R1"), pin("G1"), pin("B1")),
                [pin("A"), pin("B"), pin("C"), pin("D"), pin("E")],
                pin("CLK"),
                pin("LAT"),
                pin("OE"),
            )
        }

        #[test]
        fn lines_map_to_pins() {
            let log = SpyLog::new();
            let mut iface = spy_interface(&log);
            assert_eq!(iface.address_lines(), 5);
            iface.write_line(Line::R1, true).unwrap();
            iface.write_line(Line::G1, false).unwrap();
            iface.write_line(Line::B1, true).unwrap();
            iface.write_line(Line::Addr(0), true).unwrap();
            iface.write_line(Line::Addr(4), false).unwrap();
            iface.write_line(Line::Clk, true).unwrap();
            iface.write_line(Line::Lat, false).unwrap();
            iface.write_line(Line::Oe, true).unwrap();
            assert_eq!(
                log.pins(),
                vec![
                    ("R1", true),
                    ("G1", false),
                    ("B1", true),
                    ("A", true),
                    ("E", false),
                    ("CLK", true),
                    ("LAT", false),
                    ("OE", true),
                ]
            );
        }

        #[test]
        fn missing_address_line_is_an_error() {
            let log = SpyLog::new();
            let mut iface = spy_interface(&log);
            assert_eq!(iface.write_line(Line::Addr(5), true), Err(()));
            assert!(log.pins().is_empty());
        }

        #[test]
        fn unwired_lane2_is_ignored() {
            let log = SpyLog::new();
            let mut iface = spy_interface(&log);
            iface.write_line(Line::R2, true).unwrap();
            iface.write_line(Line::G2, true).unwrap();
            iface.write_line(Line::B2, true).unwrap();
            assert!(log.pins().is_empty());
        }

        #[test]
        fn wired_lane2() {
            let log = SpyLog::new();
            let pin = |id| SpyPin::new(id, &log);
            let mut iface =
                spy_interface(&log).with_lane2(RgbPins::new(pin("R2"), pin("G2"), pin("B2")));
            iface.write_line(Line::R2, true).unwrap();
            iface.write_line(Line::G2, false).unwrap();
            iface.write_line(Line::B2, true).unwrap();
            assert_eq!(log.pins(), vec![("R2", true), ("G2", false), ("B2", true)]);
        }

        #[test]
        fn pin_errors_are_reported() {
            let log = SpyLog::new();
            let mut iface = spy_interface(&log);
            iface.clk = SpyPin::failing("CLK", &log);
            assert_eq!(iface.write_line(Line::Clk, true), Err(()));
            assert_eq!(iface.write_line(Line::Lat, true), Ok(()));
        }
    }
}
