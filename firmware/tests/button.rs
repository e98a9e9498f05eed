#![no_std]
#![no_main]

use double_pulse_firmware as _; // Panic handler.

#[defmt_test::tests]
mod tests {
    use double_pulse_firmware::system::button::Button;
    use double_pulse_firmware::system::System;
    use double_pulse_firmware::testlib::{sample_until_button_is_clicked, MS};

    #[init]
    fn init() -> Button {
        let cp = cortex_m::Peripherals::take().unwrap();
        let dp = daisy::pac::Peripherals::take().unwrap();
        System::init(cp, dp).button
    }

    #[test]
    fn button_detects_click(button: &mut Button) {
        defmt::info!("Click the button");
        sample_until_button_is_clicked(button);
        defmt::info!("OK");
    }

    #[test]
    fn held_button_is_clicked_only_once(button: &mut Button) {
        defmt::info!("Press and hold the button for a second");
        sample_until_button_is_clicked(button);
        let mut clicks = 0;
        for _ in 0..500 {
            button.sample();
            if button.clicked {
                clicks += 1;
            }
            cortex_m::asm::delay(MS);
        }
        defmt::assert_eq!(clicks, 0);
        defmt::info!("OK");
    }
}
