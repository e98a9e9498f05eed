//! Line oriented text console controlling the generator.
//!
//! The console is an optional adapter on top of [`PulseConfig`]. It knows
//! nothing about the transport, all it needs is a [`Terminal`] to read bytes
//! from and write text to. Single characters select commands:
//!
//! - `h` prints help,
//! - `c` asks for all four durations and then prints them,
//! - `i` prints the current durations,
//! - space raises the trigger,
//! - `q` asks the host to quit.
//!
//! Anything else, including the line ending following a command, is
//! ignored.

use core::fmt::{self, Write};

use crate::config::{Phase, PulseConfig};

pub const HEADER: &str = concat!(
    "  |--------------------|           |-----------|\n",
    "  |                    |           |           |\n",
    "  |         p1         |           |    p2     |\n",
    "  |                    |           |           |\n",
    "--|--------------------|--------- -|-----------|-----------|--> t [us]\n",
    "   <-------p1_ton-----> <-p1_toff-> <--p1_ton-> <-p1_toff->\n",
    "Press 'h' then 'Enter' to configure pulse timing.\n",
    "Press 'c' then 'Enter' to configure pulse timing.\n",
    "Press 'q' then 'Enter' when running on PC to quit.\n",
    "Press 'space' then 'Enter' to trigger double pulse.",
);

/// Byte oriented transport of the console.
pub trait Terminal: Write {
    /// Blocks until the next byte is available. Returns `None` once the
    /// input is closed.
    fn read(&mut self) -> Option<u8>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    Help,
    Configure,
    Info,
    Trigger,
    Quit,
    Ignore,
}

impl From<u8> for Command {
    fn from(byte: u8) -> Self {
        match byte {
            b'h' => Command::Help,
            b'c' => Command::Configure,
            b'i' => Command::Info,
            b' ' => Command::Trigger,
            b'q' => Command::Quit,
            _ => Command::Ignore,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Response {
    Continue,
    /// The operator asked to terminate. Only meaningful for hosted builds.
    Quit,
    /// The terminal has no more input.
    Closed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ReadError {
    NotAnInteger,
    OutOfRange,
    EndOfInput,
}

pub struct Console<T> {
    terminal: T,
    // Scanning a number reads one byte past its end.
    pending: Option<u8>,
}

impl<T: Terminal> Console<T> {
    pub fn new(terminal: T) -> Self {
        Self {
            terminal,
            pending: None,
        }
    }

    pub fn terminal(&self) -> &T {
        &self.terminal
    }

    pub fn free(self) -> T {
        self.terminal
    }

    /// Print the timing diagram together with a short help.
    ///
    /// # Errors
    ///
    /// Fails when the terminal cannot be written to.
    pub fn banner(&mut self) -> fmt::Result {
        writeln!(self.terminal, "{HEADER}")
    }

    /// Prompt for a single command and execute it.
    ///
    /// # Errors
    ///
    /// Fails when the terminal cannot be written to.
    pub fn poll(&mut self, config: &mut PulseConfig) -> Result<Response, fmt::Error> {
        write!(self.terminal, ">")?;
        let Some(byte) = self.next_byte() else {
            return Ok(Response::Closed);
        };

        match Command::from(byte) {
            Command::Help => {
                write!(self.terminal, "Help:")?;
                self.banner()?;
            }
            Command::Configure => {
                self.configure(config)?;
                self.info(config)?;
            }
            Command::Info => self.info(config)?,
            Command::Trigger => {
                writeln!(self.terminal, "Triggered!")?;
                config.raise_trigger();
            }
            Command::Quit => return Ok(Response::Quit),
            Command::Ignore => (),
        }

        Ok(Response::Continue)
    }

    fn configure(&mut self, config: &mut PulseConfig) -> fmt::Result {
        for phase in Phase::SEQUENCE {
            write!(self.terminal, "{:<10} = ", phase.duration_name())?;
            match self.read_integer() {
                Ok(us) => config.set_duration(phase, us.max(0)),
                Err(_) => {
                    self.discard_line();
                    writeln!(self.terminal, "Failed, value not changed!")?;
                }
            }
        }
        Ok(())
    }

    fn info(&mut self, config: &PulseConfig) -> fmt::Result {
        writeln!(self.terminal, "Timing info:")?;
        let timing = config.timing();
        for phase in Phase::SEQUENCE {
            writeln!(
                self.terminal,
                "{:<10} = {}",
                phase.duration_name(),
                timing.get(phase)
            )?;
        }
        Ok(())
    }

    fn next_byte(&mut self) -> Option<u8> {
        self.pending.take().or_else(|| self.terminal.read())
    }

    fn discard_line(&mut self) {
        while let Some(byte) = self.next_byte() {
            if byte == b'\n' {
                break;
            }
        }
    }

    /// Scan an integer the way C's `%i` conversion does.
    ///
    /// Leading whitespace is skipped, an optional sign may follow, then a
    /// `0x` prefix selects hexadecimal, a leading `0` octal, and anything
    /// else decimal. The byte terminating the number stays unread.
    fn read_integer(&mut self) -> Result<i32, ReadError> {
        let mut byte = self.next_byte().ok_or(ReadError::EndOfInput)?;
        while byte.is_ascii_whitespace() {
            byte = self.next_byte().ok_or(ReadError::EndOfInput)?;
        }

        let negative = byte == b'-';
        if matches!(byte, b'-' | b'+') {
            byte = self.next_byte().ok_or(ReadError::NotAnInteger)?;
        }

        let mut radix = 10;
        let mut seen_digit = false;
        let mut current = Some(byte);
        if byte == b'0' {
            seen_digit = true;
            current = self.next_byte();
            if matches!(current, Some(b'x' | b'X')) {
                radix = 16;
                seen_digit = false;
                current = self.next_byte();
            } else {
                radix = 8;
            }
        }

        let mut magnitude: i64 = 0;
        while let Some(digit) = current.and_then(|b| char::from(b).to_digit(radix)) {
            seen_digit = true;
            magnitude = magnitude
                .saturating_mul(i64::from(radix))
                .saturating_add(i64::from(digit));
            current = self.next_byte();
        }
        self.pending = current;

        if !seen_digit {
            return Err(ReadError::NotAnInteger);
        }

        let value = if negative { -magnitude } else { magnitude };
        i32::try_from(value).map_err(|_| ReadError::OutOfRange)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;
    use crate::config::Timing;

    #[derive(Default)]
    struct FakeTerminal {
        input: VecDeque<u8>,
        output: String,
    }

    impl FakeTerminal {
        fn with_input(input: &str) -> Self {
            Self {
                input: input.bytes().collect(),
                output: String::new(),
            }
        }
    }

    impl Write for FakeTerminal {
        fn write_str(&mut self, s: &str) -> fmt::Result {
            self.output.push_str(s);
            Ok(())
        }
    }

    impl Terminal for FakeTerminal {
        fn read(&mut self) -> Option<u8> {
            self.input.pop_front()
        }
    }

    fn config() -> PulseConfig {
        PulseConfig::new(
            100,
            Timing {
                p1_on_us: 1,
                p1_off_us: 2,
                p2_on_us: 3,
                p2_off_us: 4,
            },
        )
    }

    fn poll_all(console: &mut Console<FakeTerminal>, config: &mut PulseConfig) -> Response {
        loop {
            let response = console.poll(config).unwrap();
            if response != Response::Continue {
                return response;
            }
        }
    }

    #[test]
    fn banner_prints_header_with_line_ending() {
        let mut console = Console::new(FakeTerminal::default());
        console.banner().unwrap();
        assert_eq!(console.terminal().output, format!("{HEADER}\n"));
    }

    #[test]
    fn commands_are_selected_by_single_character() {
        assert_eq!(Command::from(b'h'), Command::Help);
        assert_eq!(Command::from(b'c'), Command::Configure);
        assert_eq!(Command::from(b'i'), Command::Info);
        assert_eq!(Command::from(b' '), Command::Trigger);
        assert_eq!(Command::from(b'q'), Command::Quit);
        assert_eq!(Command::from(b'\n'), Command::Ignore);
        assert_eq!(Command::from(b'x'), Command::Ignore);
    }

    #[test]
    fn when_help_is_requested_it_prints_header() {
        let mut console = Console::new(FakeTerminal::with_input("h"));
        let mut config = config();
        assert_eq!(console.poll(&mut config).unwrap(), Response::Continue);
        assert_eq!(console.terminal().output, format!(">Help:{HEADER}\n"));
    }

    #[test]
    fn when_info_is_requested_it_prints_timing() {
        let mut console = Console::new(FakeTerminal::with_input("i"));
        let mut config = config();
        console.poll(&mut config).unwrap();
        assert_eq!(
            console.terminal().output,
            concat!(
                ">Timing info:\n",
                "p1_ton_us  = 1\n",
                "p1_toff_us = 2\n",
                "p2_ton_us  = 3\n",
                "p2_toff_us = 4\n",
            )
        );
    }

    #[test]
    fn when_space_is_pressed_it_raises_trigger() {
        let mut console = Console::new(FakeTerminal::with_input(" \n"));
        let mut config = config();
        assert_eq!(poll_all(&mut console, &mut config), Response::Closed);
        assert!(config.trigger_pending());
        assert_eq!(console.terminal().output, ">Triggered!\n>>");
    }

    #[test]
    fn when_q_is_pressed_it_asks_to_quit() {
        let mut console = Console::new(FakeTerminal::with_input("xq"));
        let mut config = config();
        assert_eq!(poll_all(&mut console, &mut config), Response::Quit);
        assert_eq!(config, self::config());
    }

    #[test]
    fn when_input_closes_it_reports_it() {
        let mut console = Console::new(FakeTerminal::default());
        assert_eq!(console.poll(&mut config()).unwrap(), Response::Closed);
    }

    #[test]
    fn when_configured_it_stores_values_and_prints_them() {
        let mut console = Console::new(FakeTerminal::with_input("c\n10\n20\n30\n40\n"));
        let mut config = config();
        console.poll(&mut config).unwrap();
        assert_eq!(
            config.timing(),
            Timing {
                p1_on_us: 10,
                p1_off_us: 20,
                p2_on_us: 30,
                p2_off_us: 40,
            }
        );
        assert_eq!(
            console.terminal().output,
            concat!(
                ">p1_ton_us  = p1_toff_us = p2_ton_us  = p2_toff_us = ",
                "Timing info:\n",
                "p1_ton_us  = 10\n",
                "p1_toff_us = 20\n",
                "p2_ton_us  = 30\n",
                "p2_toff_us = 40\n",
            )
        );
    }

    #[test]
    fn when_configured_with_negative_value_it_is_clamped_to_zero() {
        let mut console = Console::new(FakeTerminal::with_input("c\n-5\n-5\n0\n7\n"));
        let mut config = config();
        console.poll(&mut config).unwrap();
        assert_eq!(
            config.timing(),
            Timing {
                p1_on_us: 0,
                p1_off_us: 0,
                p2_on_us: 0,
                p2_off_us: 7,
            }
        );
    }

    #[test]
    fn when_configured_with_garbage_it_keeps_value_and_continues() {
        let mut console = Console::new(FakeTerminal::with_input("c\n10\nabc\n30\n40\n"));
        let mut config = config();
        console.poll(&mut config).unwrap();
        assert_eq!(
            config.timing(),
            Timing {
                p1_on_us: 10,
                p1_off_us: 2,
                p2_on_us: 30,
                p2_off_us: 40,
            }
        );
        assert!(console
            .terminal()
            .output
            .contains("p1_toff_us = Failed, value not changed!\np2_ton_us  = "));
    }

    #[test]
    fn when_input_ends_during_configuration_remaining_fields_fail() {
        let mut console = Console::new(FakeTerminal::with_input("c 10"));
        let mut config = config();
        console.poll(&mut config).unwrap();
        assert_eq!(config.timing().p1_on_us, 10);
        assert_eq!(config.timing().p2_off_us, 4);
        assert_eq!(
            console
                .terminal()
                .output
                .matches("Failed, value not changed!")
                .count(),
            3
        );
    }

    #[test]
    fn when_value_does_not_fit_it_is_rejected() {
        let mut console = Console::new(FakeTerminal::with_input("c\n99999999999\n1\n1\n1\n"));
        let mut config = config();
        console.poll(&mut config).unwrap();
        assert_eq!(config.timing().p1_on_us, 1);
        assert!(console.terminal().output.contains("Failed, value not changed!"));
    }

    #[test]
    fn configured_values_follow_c_integer_prefixes() {
        let mut console = Console::new(FakeTerminal::with_input("c 0x1F 010 +12 0\n"));
        let mut config = config();
        console.poll(&mut config).unwrap();
        assert_eq!(
            config.timing(),
            Timing {
                p1_on_us: 31,
                p1_off_us: 8,
                p2_on_us: 12,
                p2_off_us: 0,
            }
        );
    }

    #[test]
    fn line_ending_after_configuration_is_ignored_by_next_poll() {
        let mut console = Console::new(FakeTerminal::with_input("c\n1\n2\n3\n4\n "));
        let mut config = config();
        console.poll(&mut config).unwrap();
        assert_eq!(console.poll(&mut config).unwrap(), Response::Continue);
        assert!(!config.trigger_pending());
        assert_eq!(console.poll(&mut config).unwrap(), Response::Continue);
        assert!(config.trigger_pending());
    }

    #[test]
    fn reading_integer_reports_the_reason_of_failure() {
        let mut console = Console::new(FakeTerminal::with_input("  x 0x 3000000000"));
        assert_eq!(console.read_integer(), Err(ReadError::NotAnInteger));
        console.pending = None;
        assert_eq!(console.read_integer(), Err(ReadError::NotAnInteger));
        assert_eq!(console.read_integer(), Err(ReadError::OutOfRange));
        assert_eq!(console.read_integer(), Err(ReadError::EndOfInput));
    }
}
