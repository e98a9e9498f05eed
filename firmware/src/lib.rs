//! Double pulse generator running on the Daisy Patch SM.
//!
//! The pulses are generated on the `B6` gate pin and triggered by a button
//! connected to `B7`. The waveform can be observed with a scope, the pin
//! needs an external pull-down to stay low while the board boots.

#![no_main]
#![no_std]

use defmt_rtt as _; // Global logger.
use panic_probe as _;
use stm32h7xx_hal as _; // Readable panic.

use double_pulse_control::Timing;

pub mod system;
pub mod testlib;

/// Busy-wait iterations per microsecond with the core at 480 MHz.
///
/// This was estimated for the optimized profile of this crate, with caches
/// enabled. Re-measure it on the scope after changing either.
pub const CALIBRATION: i32 = 80;

pub const TIMING: Timing = Timing {
    p1_on_us: 100,
    p1_off_us: 10,
    p2_on_us: 10,
    p2_off_us: 1_000_000,
};

// Panic through `udf` without printing, `defmt::panic` already printed the
// message once.
#[defmt::panic_handler]
fn panic() -> ! {
    cortex_m::asm::udf()
}

/// Terminates the application and makes `probe-run` exit with exit-code = 0.
pub fn exit() -> ! {
    loop {
        cortex_m::asm::bkpt();
    }
}
