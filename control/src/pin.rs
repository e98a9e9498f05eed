//! Output pin driven by the sequencer.

/// Digital output the pulses are generated on.
///
/// Both operations must be a single unconditional write, preferably straight
/// to the port's set/reset register. Any overhead here is added to every
/// phase and distorts the calibration.
pub trait PulsePin {
    fn set(&mut self);
    fn clear(&mut self);
}

impl<P: PulsePin + ?Sized> PulsePin for &mut P {
    #[inline(always)]
    fn set(&mut self) {
        (**self).set();
    }

    #[inline(always)]
    fn clear(&mut self) {
        (**self).clear();
    }
}

/// Pin that goes nowhere, useful when running without hardware.
#[derive(Debug, Default, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NoPin;

impl PulsePin for NoPin {
    #[inline(always)]
    fn set(&mut self) {}

    #[inline(always)]
    fn clear(&mut self) {}
}
