//! Reporting of executed sequences.

use crate::sequencer::Sequence;

/// Receives every sequence right before its first pin transition.
///
/// Whatever is done here delays the start of the waveform, but not its
/// timing.
pub trait Logger {
    fn sequence(&mut self, sequence: &Sequence);
}

impl<L: Logger + ?Sized> Logger for &mut L {
    fn sequence(&mut self, sequence: &Sequence) {
        (**self).sequence(sequence);
    }
}

#[derive(Debug, Default, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NoLogger;

impl Logger for NoLogger {
    #[inline(always)]
    fn sequence(&mut self, _sequence: &Sequence) {}
}

#[cfg(feature = "defmt")]
#[derive(Debug, Default, Clone, Copy, defmt::Format)]
pub struct DefmtLogger;

#[cfg(feature = "defmt")]
impl Logger for DefmtLogger {
    fn sequence(&mut self, sequence: &Sequence) {
        defmt::info!("Starting sequence {}", sequence);
    }
}
