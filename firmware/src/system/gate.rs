//! Output carrying the double pulse.

use double_pulse_control::PulsePin;

use crate::system::hal::gpio;

pub type Pin = gpio::gpioc::PC13<gpio::Output>;

pub struct Gate {
    pin: Pin,
}

impl Gate {
    #[must_use]
    pub fn new(mut pin: Pin) -> Self {
        pin.set_low();
        Self { pin }
    }
}

// The HAL turns both of these into a single write to BSRR.
impl PulsePin for Gate {
    #[inline(always)]
    fn set(&mut self) {
        self.pin.set_high();
    }

    #[inline(always)]
    fn clear(&mut self) {
        self.pin.set_low();
    }
}
