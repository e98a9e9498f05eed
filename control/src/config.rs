//! Configuration shared between the control surface and the sequencer.

use crate::log;
use crate::sequencer::Sequence;

/// Loop iterations per microsecond used when the target does not provide
/// its own measurement.
pub const DEFAULT_CALIBRATION: i32 = 100;

/// One of the four timed segments of a double pulse, in the order they run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    P1On,
    P1Off,
    P2On,
    P2Off,
}

impl Phase {
    pub const SEQUENCE: [Phase; 4] = [Phase::P1On, Phase::P1Off, Phase::P2On, Phase::P2Off];

    /// Whether the pin is driven high during this phase.
    #[must_use]
    pub fn high(self) -> bool {
        matches!(self, Phase::P1On | Phase::P2On)
    }

    #[must_use]
    pub fn duration_name(self) -> &'static str {
        match self {
            Phase::P1On => "p1_ton_us",
            Phase::P1Off => "p1_toff_us",
            Phase::P2On => "p2_ton_us",
            Phase::P2Off => "p2_toff_us",
        }
    }

    #[must_use]
    pub fn count_name(self) -> &'static str {
        match self {
            Phase::P1On => "count_p1_ton",
            Phase::P1Off => "count_p1_toff",
            Phase::P2On => "count_p2_ton",
            Phase::P2Off => "count_p2_toff",
        }
    }
}

/// Durations of all four phases in microseconds.
///
/// These are expected to be non-negative, but nothing here enforces it. A
/// negative duration results in a zero-width phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Timing {
    pub p1_on_us: i32,
    pub p1_off_us: i32,
    pub p2_on_us: i32,
    pub p2_off_us: i32,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            p1_on_us: 10,
            p1_off_us: 10,
            p2_on_us: 10,
            p2_off_us: 1_000_000,
        }
    }
}

impl Timing {
    #[must_use]
    pub fn get(&self, phase: Phase) -> i32 {
        match phase {
            Phase::P1On => self.p1_on_us,
            Phase::P1Off => self.p1_off_us,
            Phase::P2On => self.p2_on_us,
            Phase::P2Off => self.p2_off_us,
        }
    }

    pub fn set(&mut self, phase: Phase, us: i32) {
        match phase {
            Phase::P1On => self.p1_on_us = us,
            Phase::P1Off => self.p1_off_us = us,
            Phase::P2On => self.p2_on_us = us,
            Phase::P2Off => self.p2_off_us = us,
        }
    }
}

/// State of the generator owned by the application.
///
/// The control surface writes durations and raises the trigger at any time,
/// the sequencer consumes the trigger through [`PulseConfig::take_triggered`].
/// The trigger is a single slot without backlog: raising it several times
/// before it gets consumed results in a single sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PulseConfig {
    calibration: i32,
    timing: Timing,
    trigger_pending: bool,
}

impl Default for PulseConfig {
    fn default() -> Self {
        Self::new(DEFAULT_CALIBRATION, Timing::default())
    }
}

impl PulseConfig {
    /// Calibration is the number of busy-wait loop iterations per
    /// microsecond. It must be positive for the delays to take any time.
    #[must_use]
    pub fn new(calibration: i32, timing: Timing) -> Self {
        Self {
            calibration,
            timing,
            trigger_pending: false,
        }
    }

    pub fn initialize(&mut self, calibration: i32, timing: Timing) {
        log::info!("Initializing with calibration {} loops/us", calibration);
        if calibration <= 0 {
            log::error!("Calibration is not positive, phases will have no delay");
        }
        *self = Self::new(calibration, timing);
    }

    #[must_use]
    pub fn calibration(&self) -> i32 {
        self.calibration
    }

    #[must_use]
    pub fn timing(&self) -> Timing {
        self.timing
    }

    #[must_use]
    pub fn trigger_pending(&self) -> bool {
        self.trigger_pending
    }

    pub fn set_duration(&mut self, phase: Phase, us: i32) {
        self.timing.set(phase, us);
    }

    pub fn set_p1_on_us(&mut self, us: i32) {
        self.timing.p1_on_us = us;
    }

    pub fn set_p1_off_us(&mut self, us: i32) {
        self.timing.p1_off_us = us;
    }

    pub fn set_p2_on_us(&mut self, us: i32) {
        self.timing.p2_on_us = us;
    }

    pub fn set_p2_off_us(&mut self, us: i32) {
        self.timing.p2_off_us = us;
    }

    pub fn raise_trigger(&mut self) {
        self.trigger_pending = true;
    }

    /// Consume a pending trigger and snapshot the current timing.
    ///
    /// The trigger is cleared before anything else is read, so a trigger
    /// raised while the returned sequence executes starts another one.
    pub fn take_triggered(&mut self) -> Option<Sequence> {
        if !self.trigger_pending {
            return None;
        }
        self.trigger_pending = false;
        Some(Sequence::new(self.timing, self.calibration))
    }
}
