//! Trigger button handling.

/// Debounced state of a push button used to raise the trigger.
///
/// The raw state is sampled periodically. The button counts as pressed when
/// most of the last `N` samples were down, and it is clicked on the first
/// update where it becomes pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Button<const N: usize = 4> {
    pub pressed: bool,
    pub clicked: bool,
    samples: [bool; N],
    pointer: usize,
}

impl<const N: usize> Default for Button<N> {
    fn default() -> Self {
        Self {
            pressed: false,
            clicked: false,
            samples: [false; N],
            pointer: 0,
        }
    }
}

impl<const N: usize> Button<N> {
    pub fn update(&mut self, down: bool) {
        self.samples[self.pointer] = down;
        self.pointer = (self.pointer + 1) % N;

        let was_pressed = self.pressed;
        self.pressed = self.samples.iter().filter(|s| **s).count() > N / 2;
        self.clicked = !was_pressed && self.pressed;
    }
}
