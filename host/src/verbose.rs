//! Pin and logger printing what would happen on the hardware.
//!
//! Printing takes far longer than the phases it reports, so timing is lost
//! entirely in verbose mode.

use std::io::Write;

use double_pulse_control::{Logger, Phase, PulsePin, Sequence};

pub struct PrintPin<W> {
    output: W,
}

impl<W: Write> PrintPin<W> {
    pub fn new(output: W) -> Self {
        Self { output }
    }
}

impl<W: Write> PulsePin for PrintPin<W> {
    fn set(&mut self) {
        if let Err(err) = writeln!(self.output, "set pin") {
            log::warn!("Failed to print pin state: {err}");
        }
    }

    fn clear(&mut self) {
        if let Err(err) = writeln!(self.output, "clear pin") {
            log::warn!("Failed to print pin state: {err}");
        }
    }
}

pub struct PrintLogger<W> {
    output: W,
}

impl<W: Write> PrintLogger<W> {
    pub fn new(output: W) -> Self {
        Self { output }
    }

    fn print(&mut self, sequence: &Sequence) -> std::io::Result<()> {
        for phase in Phase::SEQUENCE {
            writeln!(
                self.output,
                "{:<10} = {}",
                phase.duration_name(),
                sequence.timing.get(phase)
            )?;
        }
        for phase in Phase::SEQUENCE {
            writeln!(
                self.output,
                "i32_{} = {}",
                phase.count_name(),
                sequence.counts.get(phase)
            )?;
        }
        Ok(())
    }
}

impl<W: Write> Logger for PrintLogger<W> {
    fn sequence(&mut self, sequence: &Sequence) {
        if let Err(err) = self.print(sequence) {
            log::warn!("Failed to print sequence: {err}");
        }
    }
}
