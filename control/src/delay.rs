//! Calibrated delay by counting loop iterations.
//!
//! A hardware timer may be missing, already taken, or too coarse. Counting
//! iterations of a tight loop gives sub-tick resolution instead, at the cost
//! of having to measure how many iterations fit into a microsecond for every
//! target, clock and optimization level. That number is the calibration of
//! [`PulseConfig`](crate::PulseConfig) and it is not portable between builds.

use core::hint::black_box;

/// Blocks the caller for the given number of iterations.
///
/// Non-positive counts return immediately.
pub trait Delay {
    fn wait(&mut self, iterations: i32);
}

impl<D: Delay + ?Sized> Delay for &mut D {
    #[inline(always)]
    fn wait(&mut self, iterations: i32) {
        (**self).wait(iterations);
    }
}

/// Tight counting loop with no yield, no I/O, and no early exit.
#[derive(Debug, Default, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BusyWait;

impl Delay for BusyWait {
    #[inline(always)]
    fn wait(&mut self, iterations: i32) {
        let mut count = 0;
        // Passing the counter through `black_box` keeps the loop from being
        // folded away by the optimizer.
        while black_box(count) < iterations {
            count += 1;
        }
    }
}
