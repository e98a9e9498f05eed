#![no_main]
#![no_std]

use double_pulse_firmware as _; // global logger + panicking-behavior

#[rtic::app(device = stm32h7xx_hal::pac, peripherals = true, dispatchers = [EXTI0, EXTI1])]
mod app {
    use daisy::led::{Led, LedUser};
    use fugit::ExtU64;
    use systick_monotonic::Systick;

    use double_pulse_control::{BusyWait, DefmtLogger, PulseConfig, Sequencer};
    use double_pulse_firmware::system::button::Button;
    use double_pulse_firmware::system::gate::Gate;
    use double_pulse_firmware::system::System;
    use double_pulse_firmware::{CALIBRATION, TIMING};

    const BLINKS: u8 = 1;

    #[monotonic(binds = SysTick, default = true)]
    type Mono = Systick<1000>; // 1 kHz / 1 ms granularity

    #[shared]
    struct Shared {
        config: PulseConfig,
    }

    #[local]
    struct Local {
        status_led: LedUser,
        button: Button,
        sequencer: Sequencer<Gate, BusyWait, DefmtLogger>,
    }

    #[init]
    fn init(cx: init::Context) -> (Shared, Local, init::Monotonics) {
        defmt::info!("INIT");

        let system = System::init(cx.core, cx.device);
        let mono = system.mono;
        let status_led = system.status_led;
        let button = system.button;
        let sequencer = Sequencer::new(system.gate).with_logger(DefmtLogger);

        let config = PulseConfig::new(CALIBRATION, TIMING);
        defmt::info!("Configured {}", config);

        control::spawn().unwrap();
        pulse::spawn().unwrap();
        blink::spawn(true, BLINKS).unwrap();

        (
            Shared { config },
            Local {
                status_led,
                button,
                sequencer,
            },
            init::Monotonics(mono),
        )
    }

    #[task(local = [button], shared = [config], priority = 2)]
    fn control(mut cx: control::Context) {
        control::spawn_after(1.millis()).unwrap();

        let button = cx.local.button;
        button.sample();
        if button.clicked {
            defmt::info!("Triggered");
            cx.shared.config.lock(PulseConfig::raise_trigger);
        }
    }

    #[task(local = [sequencer], shared = [config], priority = 1)]
    fn pulse(mut cx: pulse::Context) {
        let sequence = cx.shared.config.lock(PulseConfig::take_triggered);
        if let Some(sequence) = sequence {
            let sequencer = cx.local.sequencer;
            // Nothing may preempt the waveform, interrupts would stretch
            // whichever phase they land in.
            cortex_m::interrupt::free(|_| sequencer.run(&sequence));
        }

        pulse::spawn_after(1.millis()).unwrap();
    }

    #[task(local = [status_led])]
    fn blink(cx: blink::Context, on: bool, blinks: u8) {
        let time_on = 200.millis();
        let time_off_short = 200.millis();
        let time_off_long = 2.secs();

        if on {
            cx.local.status_led.on();
            blink::spawn_after(time_on, false, blinks).unwrap();
        } else {
            cx.local.status_led.off();
            if blinks > 1 {
                blink::spawn_after(time_off_short, true, blinks - 1).unwrap();
            } else {
                blink::spawn_after(time_off_long, true, BLINKS).unwrap();
            }
        }
    }
}
