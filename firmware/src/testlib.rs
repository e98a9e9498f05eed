use crate::system::button::Button;

pub const MS: u32 = 480_000_000 / 1000;

pub fn sample_until_button_is_clicked(button: &mut Button) {
    loop {
        button.sample();
        if button.clicked {
            break;
        }
        cortex_m::asm::delay(MS);
    }
}
