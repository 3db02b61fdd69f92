//! Tap tempo metronome for RP2350
//!
//! Tap the tempo on one button, clear it with the other, and watch the LED
//! pulse at the tapped tempo. Tempo changes are logged over defmt RTT.
//!
//! # Hardware
//!
//! - GPIO4: LED (active high, via resistor)
//! - GPIO5: Tap button to GND
//! - GPIO6: Reset button to GND
//!
//! Pulse length and debounce lockout can be set at build time with
//! `TAP_PULSE_MS` and `TAP_DEBOUNCE_MS`.
//!
//! # Usage
//!
//! ```bash
//! cargo run -p tempo_tapper_firmware --features pico2_w \
//!     --target thumbv8m.main-none-eabihf --release --bin tap_tempo
//! ```

#![no_std]
#![no_main]

use embassy_executor::Spawner;
use embassy_rp::block::ImageDef;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use tempo_tapper_firmware::app::{self, MetronomeTask};
use tempo_tapper_firmware::log_info;
use tempo_tapper_firmware::platform::{
    build_params, EmbassyButton, EmbassyLed, EmbassyTime, BOARD_PINS,
};
use {defmt_rtt as _, panic_probe as _};

#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: ImageDef = ImageDef::secure_exe();

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_rp::init(Default::default());

    let led = EmbassyLed::new(Output::new(p.PIN_4, Level::Low));
    let tap = EmbassyButton::new(Input::new(p.PIN_5, Pull::Up));
    let reset = EmbassyButton::new(Input::new(p.PIN_6, Pull::Up));

    log_info!(
        "Tap tempo ready: tap=GPIO{}, reset=GPIO{}, led=GPIO{}",
        BOARD_PINS.tap_button,
        BOARD_PINS.reset_button,
        BOARD_PINS.led
    );

    let params = build_params();
    log_info!(
        "Pulse {} ms, debounce {} ms",
        params.pulse_len_ms,
        params.debounce_ms
    );

    let task = MetronomeTask::new(EmbassyTime, tap, reset, led, params);
    app::run(task).await;
}
