//! Full example code for driving a 64x32 HUB75 panel from a Raspberry Pi Pico. The panel's first
//! colour lane is on GP2-4, address lines A-E on GP10, 16, 18, 20 and 22, and CLK, LAT and OE on
//! GP11-13.
//!
//! The example loops through a test pattern: each of red, green, blue and white across the whole
//! panel, then every row in turn in red, green and blue.

#![deny(unsafe_code)]
#![no_main]
#![no_std]

use cortex_m::delay::Delay;
use defmt::info;
use defmt_rtt as _;
use ledmatrix as panel;
use panic_probe as _;
use rp_pico as bsp;

use bsp::entry;
use bsp::hal::{
    clocks::{init_clocks_and_plls, Clock},
    pac,
    sio::Sio,
    watchdog::Watchdog,
    Timer,
};
use embedded_hal::blocking::delay::DelayUs;
use panel::{
    Color, Driver, GpioInterface, LineInterface, PanelFramebuffer, RgbPins, Timing, PANEL_COLS,
    PANEL_ROWS,
};

const TEST_COLORS: [Color; 4] = [Color::Red, Color::Green, Color::Blue, Color::White];

/// Keep the panel refreshed for `ms` milliseconds.
fn show<LI, D>(
    disp: &mut Driver<LI, D, PANEL_ROWS, PANEL_COLS>,
    fb: &PanelFramebuffer,
    timer: &Timer,
    ms: u64,
) where
    LI: LineInterface,
    D: DelayUs<u32>,
{
    let start = timer.get_counter().ticks();
    while timer.get_counter().ticks() - start < ms * 1000 {
        disp.refresh_once(fb).unwrap();
    }
}

#[entry]
fn main() -> ! {
    let mut pac = pac::Peripherals::take().unwrap();
    let core = pac::CorePeripherals::take().unwrap();
    let mut watchdog = Watchdog::new(pac.WATCHDOG);
    let sio = Sio::new(pac.SIO);

    let clocks = init_clocks_and_plls(
        bsp::XOSC_CRYSTAL_FREQ,
        pac.XOSC,
        pac.CLOCKS,
        pac.PLL_SYS,
        pac.PLL_USB,
        &mut pac.RESETS,
        &mut watchdog,
    )
    .ok()
    .unwrap();

    let delay = Delay::new(core.SYST, clocks.system_clock.freq().to_Hz());
    let timer = Timer::new(pac.TIMER, &mut pac.RESETS, &clocks);
    let pins = bsp::Pins::new(
        pac.IO_BANK0,
        pac.PADS_BANK0,
        sio.gpio_bank0,
        &mut pac.RESETS,
    );

    // Every line must be an output before the driver touches it.
    let iface = GpioInterface::new(
        RgbPins::new(
            pins.gpio2.into_push_pull_output().into_dyn_pin(),
            pins.gpio3.into_push_pull_output().into_dyn_pin(),
            pins.gpio4.into_push_pull_output().into_dyn_pin(),
        ),
        [
            pins.gpio10.into_push_pull_output().into_dyn_pin(),
            pins.gpio16.into_push_pull_output().into_dyn_pin(),
            pins.gpio18.into_push_pull_output().into_dyn_pin(),
            pins.gpio20.into_push_pull_output().into_dyn_pin(),
            pins.gpio22.into_push_pull_output().into_dyn_pin(),
        ],
        pins.gpio11.into_push_pull_output(),
        pins.gpio12.into_push_pull_output(),
        pins.gpio13.into_push_pull_output(),
    );

    let mut fb = PanelFramebuffer::new();
    let mut disp = Driver::new(iface, delay, Timing::new());
    disp.init().unwrap();

    loop {
        info!("Full-screen colour test");
        for &color in TEST_COLORS.iter() {
            info!("  {}", color);
            fb.fill(color);
            show(&mut disp, &fb, &timer, 2000);
        }

        fb.clear();
        show(&mut disp, &fb, &timer, 500);

        info!("Row-by-row test");
        for row in 0..PANEL_ROWS {
            for &color in TEST_COLORS[..3].iter() {
                fb.clear();
                fb.fill_row(row, color);
                info!("  row {}, {}", row, color);
                show(&mut disp, &fb, &timer, 500);
            }
        }

        info!("Test sequence complete, restarting");
        fb.clear();
        show(&mut disp, &fb, &timer, 1000);
    }
}
