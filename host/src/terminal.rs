//! Console transport over standard streams.

use std::fmt;
use std::io::{self, Bytes, Read, Write};

use double_pulse_control::console::Terminal;

pub struct StdTerminal<R, W> {
    input: Bytes<R>,
    output: W,
}

impl<R: Read, W: Write> StdTerminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input: input.bytes(),
            output,
        }
    }
}

impl<R: Read, W: Write> fmt::Write for StdTerminal<R, W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.output.write_all(s.as_bytes()).map_err(|_| fmt::Error)
    }
}

impl<R: Read, W: Write> Terminal for StdTerminal<R, W> {
    fn read(&mut self) -> Option<u8> {
        // The prompt has no line ending, make sure it is visible before
        // blocking on input.
        if let Err(err) = self.output.flush() {
            log::error!("Failed to flush output: {err}");
            return None;
        }

        match self.input.next()? {
            Ok(byte) => Some(byte),
            Err(err) if err.kind() == io::ErrorKind::Interrupted => self.read(),
            Err(err) => {
                log::error!("Failed to read input: {err}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fmt::Write as _;

    use super::*;

    #[test]
    fn it_reads_bytes_until_the_end_of_input() {
        let mut terminal = StdTerminal::new("c\n".as_bytes(), Vec::new());
        assert_eq!(terminal.read(), Some(b'c'));
        assert_eq!(terminal.read(), Some(b'\n'));
        assert_eq!(terminal.read(), None);
    }

    #[test]
    fn it_writes_text_to_output() {
        let mut terminal = StdTerminal::new(io::empty(), Vec::new());
        write!(terminal, ">").unwrap();
        assert_eq!(terminal.output, b">");
    }
}
