use double_pulse_control::button::Button as Debounced;

use crate::system::hal::gpio;

/// Push button requesting a double pulse.
///
/// The button pulls the pin to ground when pressed.
pub struct Button {
    pin: Pin,
    state: Debounced,
    pub clicked: bool,
}

pub type Pin = gpio::gpiob::PB8<gpio::Input>;

impl Button {
    #[must_use]
    pub fn new(pin: Pin) -> Self {
        Self {
            pin,
            state: Debounced::default(),
            clicked: false,
        }
    }

    pub fn sample(&mut self) {
        self.state.update(self.pin.is_low());
        self.clicked = self.state.clicked;
    }
}
