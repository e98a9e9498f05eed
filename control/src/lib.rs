//! Hardware independent core of the double pulse generator.
//!
//! The generator drives a single digital output through two pulses, each
//! with its own on and off time, every time it gets triggered. Durations are
//! given in microseconds and converted into busy-wait loop iterations using
//! a calibration constant measured for the target build.
//!
//! ```text
//!   pin
//!   ^
//!   |   |--------------------|           |-----------|
//!   |   |                    |           |           |
//!   |   |         p1         |           |    p2     |
//!   |   |                    |           |           |
//!  -|---|--------------------|-----------|-----------|-----------|--> t [us]
//!        <-------p1_ton-----> <-p1_toff-> <--p2_ton-> <-p2_toff->
//! ```
//!
//! The caller owns the [`PulseConfig`] and the [`Sequencer`] and wires them
//! together from its main loop, interrupt handler or RTIC task:
//!
//! ```text
//!    [ Console / Button / Debugger ]
//!                  |
//!                  | (set_p1_on_us, raise_trigger, ...)
//!                  V
//!           { PulseConfig } ----(take_triggered)----> [ Sequencer ] --> (PulsePin)
//!                                                          |
//!                                                   (Delay, Logger)
//! ```

#![cfg_attr(not(test), no_std)]
#![allow(clippy::module_name_repetitions)]

pub mod button;
pub mod config;
pub mod console;
pub mod delay;
pub mod logger;
pub mod pin;
pub mod sequencer;

mod log;

pub use config::{Phase, PulseConfig, Timing, DEFAULT_CALIBRATION};
pub use delay::{BusyWait, Delay};
#[cfg(feature = "defmt")]
pub use logger::DefmtLogger;
pub use logger::{Logger, NoLogger};
pub use pin::{NoPin, PulsePin};
pub use sequencer::{Counts, Sequence, Sequencer};
