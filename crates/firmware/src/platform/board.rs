//! Board wiring
//!
//! GPIO assignment for the tap tempo board. Embassy hands out pins as typed
//! peripherals, so these numbers document the wiring and are reported at
//! startup; the binary takes the matching `PIN_n` fields.

/// GPIO assignment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardPins {
    /// Beat LED output
    pub led: u8,
    /// Tap button input (active low)
    pub tap_button: u8,
    /// Reset button input (active low)
    pub reset_button: u8,
}

/// Default wiring: LED on GPIO4, tap on GPIO5, reset on GPIO6
pub const BOARD_PINS: BoardPins = BoardPins {
    led: 4,
    tap_button: 5,
    reset_button: 6,
};
