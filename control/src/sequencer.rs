//! Four-phase double pulse sequencing.
//!
//! Per invocation the sequencer walks through the following states, never
//! returning to the caller before it is back in `IDLE`:
//!
//! ```text
//!   IDLE --(trigger)--> P1_ON --> P1_OFF --> P2_ON --> P2_OFF --> IDLE
//! ```
//!
//! Only the first transition is conditional. All others are gated by the
//! delay of the previous phase.

use crate::config::{Phase, PulseConfig, Timing};
use crate::delay::{BusyWait, Delay};
use crate::logger::{Logger, NoLogger};
use crate::pin::PulsePin;

/// Busy-wait iterations of every phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Counts {
    pub p1_on: i32,
    pub p1_off: i32,
    pub p2_on: i32,
    pub p2_off: i32,
}

impl Counts {
    /// Convert durations into loop iterations.
    ///
    /// The multiplication wraps on overflow. It is up to the caller to keep
    /// `duration * calibration` within `i32`.
    #[must_use]
    pub fn new(timing: Timing, calibration: i32) -> Self {
        Self {
            p1_on: timing.p1_on_us.wrapping_mul(calibration),
            p1_off: timing.p1_off_us.wrapping_mul(calibration),
            p2_on: timing.p2_on_us.wrapping_mul(calibration),
            p2_off: timing.p2_off_us.wrapping_mul(calibration),
        }
    }

    #[must_use]
    pub fn get(&self, phase: Phase) -> i32 {
        match phase {
            Phase::P1On => self.p1_on,
            Phase::P1Off => self.p1_off,
            Phase::P2On => self.p2_on,
            Phase::P2Off => self.p2_off,
        }
    }
}

/// Snapshot of the configuration taken when a trigger gets consumed.
///
/// Later changes of the configuration do not affect it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Sequence {
    pub timing: Timing,
    pub calibration: i32,
    pub counts: Counts,
}

impl Sequence {
    #[must_use]
    pub fn new(timing: Timing, calibration: i32) -> Self {
        Self {
            timing,
            calibration,
            counts: Counts::new(timing, calibration),
        }
    }
}

/// Generator of the double pulse waveform.
///
/// Pin, delay and logger are picked once during construction. With the
/// defaults of [`BusyWait`] and [`NoLogger`] nothing but the pin writes and
/// the counting loops remain in the timed path.
#[derive(Debug)]
pub struct Sequencer<P, D = BusyWait, L = NoLogger> {
    pin: P,
    delay: D,
    logger: L,
}

impl<P: PulsePin> Sequencer<P> {
    pub fn new(pin: P) -> Self {
        Self {
            pin,
            delay: BusyWait,
            logger: NoLogger,
        }
    }
}

impl<P, D, L> Sequencer<P, D, L> {
    pub fn with_delay<D2: Delay>(self, delay: D2) -> Sequencer<P, D2, L> {
        Sequencer {
            pin: self.pin,
            delay,
            logger: self.logger,
        }
    }

    pub fn with_logger<L2: Logger>(self, logger: L2) -> Sequencer<P, D, L2> {
        Sequencer {
            pin: self.pin,
            delay: self.delay,
            logger,
        }
    }

    pub fn free(self) -> (P, D, L) {
        (self.pin, self.delay, self.logger)
    }
}

impl<P: PulsePin, D: Delay, L: Logger> Sequencer<P, D, L> {
    /// Periodic entry point.
    ///
    /// Returns immediately when no trigger is pending. Otherwise it clears
    /// the trigger, snapshots the timing and blocks until the whole waveform
    /// is generated. Returns whether a sequence was executed.
    ///
    /// A control surface raising the trigger on every cycle therefore gets a
    /// continuous train of double pulses.
    pub fn run_if_triggered(&mut self, config: &mut PulseConfig) -> bool {
        match config.take_triggered() {
            Some(sequence) => {
                self.run(&sequence);
                true
            }
            None => false,
        }
    }

    /// Generate the waveform of an already taken snapshot.
    pub fn run(&mut self, sequence: &Sequence) {
        self.logger.sequence(sequence);

        let counts = sequence.counts;
        self.pin.set();
        self.delay.wait(counts.p1_on);
        self.pin.clear();
        self.delay.wait(counts.p1_off);
        self.pin.set();
        self.delay.wait(counts.p2_on);
        self.pin.clear();
        self.delay.wait(counts.p2_off);
    }
}
