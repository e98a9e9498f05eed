pub mod button;
pub mod gate;

pub use daisy::hal;

use daisy::led::LedUser;
use hal::pac::CorePeripherals;
use hal::pac::Peripherals as DevicePeripherals;
use systick_monotonic::Systick;

use button::Button;
use gate::Gate;

pub struct System {
    pub mono: Systick<1000>,
    pub status_led: LedUser,
    pub button: Button,
    pub gate: Gate,
}

impl System {
    /// Initialize system abstraction
    ///
    /// # Panics
    ///
    /// The system can be initialized only once. It panics otherwise.
    #[must_use]
    pub fn init(mut cp: CorePeripherals, dp: DevicePeripherals) -> Self {
        enable_cache(&mut cp);

        let board = daisy::Board::take().unwrap();
        let ccdr = daisy::board_freeze_clocks!(board, dp);
        let pins = daisy::board_split_gpios!(board, ccdr, dp);

        let mono = Systick::new(cp.SYST, 480_000_000);
        let status_led = daisy::board_split_leds!(pins).USER;
        let button = Button::new(pins.GPIO.PIN_B7.into_floating_input());
        let gate = Gate::new(pins.GPIO.PIN_B6.into_push_pull_output());

        Self {
            mono,
            status_led,
            button,
            gate,
        }
    }
}

/// AN5212: Improve application performance when fetching instruction and
/// data, from both internal and external memories.
///
/// The busy-wait calibration assumes both caches are on.
fn enable_cache(cp: &mut CorePeripherals) {
    cp.SCB.enable_icache();
    cp.SCB.enable_dcache(&mut cp.CPUID);
}
