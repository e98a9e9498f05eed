//! Drive the double pulse generator from a terminal on a PC.
//!
//! There is no output pin on a PC. By default the pulses go nowhere and only
//! the busy-wait timing is exercised, with `--verbose` pin transitions and
//! loop counts get printed instead.

mod terminal;
mod verbose;

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use double_pulse_control::console::{Console, Response, Terminal};
use double_pulse_control::{
    BusyWait, Logger, NoPin, PulseConfig, PulsePin, Sequencer, Timing, DEFAULT_CALIBRATION,
};

use terminal::StdTerminal;
use verbose::{PrintLogger, PrintPin};

/// Double pulse generator controlled from standard input
#[derive(Parser)]
#[clap(version)]
struct Opts {
    /// Busy-wait loop iterations per microsecond, measured for this build.
    #[clap(long, default_value_t = DEFAULT_CALIBRATION)]
    calibration: i32,

    /// On time of the first pulse in microseconds.
    #[clap(long, default_value_t = Timing::default().p1_on_us)]
    p1_on: i32,

    /// Off time after the first pulse in microseconds.
    #[clap(long, default_value_t = Timing::default().p1_off_us)]
    p1_off: i32,

    /// On time of the second pulse in microseconds.
    #[clap(long, default_value_t = Timing::default().p2_on_us)]
    p2_on: i32,

    /// Off time after the second pulse in microseconds.
    #[clap(long, default_value_t = Timing::default().p2_off_us)]
    p2_off: i32,

    /// Print pin transitions and loop counts of every sequence.
    #[clap(short, long)]
    verbose: bool,

    /// Do not print the timing diagram on start.
    #[clap(long)]
    no_banner: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let opts: Opts = Opts::parse();

    let timing = Timing {
        p1_on_us: opts.p1_on,
        p1_off_us: opts.p1_off,
        p2_on_us: opts.p2_on,
        p2_off_us: opts.p2_off,
    };
    let mut config = PulseConfig::new(opts.calibration, timing);
    log::info!(
        "Calibration {} loops/us, timing {:?}",
        opts.calibration,
        timing
    );
    if opts.calibration <= 0 {
        log::warn!("Calibration is not positive, phases will have no delay");
    }

    let mut console = Console::new(StdTerminal::new(io::stdin().lock(), io::stdout()));
    if !opts.no_banner {
        console.banner().context("Could not print banner")?;
    }

    if opts.verbose {
        let sequencer = Sequencer::new(PrintPin::new(io::stdout()))
            .with_logger(PrintLogger::new(io::stdout()));
        serve(&mut console, &mut config, sequencer)
    } else {
        serve(&mut console, &mut config, Sequencer::new(NoPin))
    }
}

/// Alternate between the console and the sequencer until the operator quits
/// or the input closes.
fn serve<T, P, L>(
    console: &mut Console<T>,
    config: &mut PulseConfig,
    mut sequencer: Sequencer<P, BusyWait, L>,
) -> Result<()>
where
    T: Terminal,
    P: PulsePin,
    L: Logger,
{
    loop {
        match console.poll(config).context("Could not write to terminal")? {
            Response::Continue => (),
            Response::Quit => {
                log::info!("Quitting on request");
                return Ok(());
            }
            Response::Closed => {
                log::info!("Input closed");
                return Ok(());
            }
        }

        if sequencer.run_if_triggered(config) {
            log::debug!("Sequence finished");
        }
    }
}
