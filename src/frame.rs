//! Expander frame composition
//!
//! The PCF8574 drives the LCD bus with its eight port lines:
//!
//! P7 -> P0:
//! DB7 / DB6 / DB5 / DB4 / BL / E / RW / RS
//!
//! A [`Frame`] is one nibble on DB7..DB4 plus the register-select line.
//! [`Frame::pulse`] turns it into the pair of port writes that latches
//! the nibble into the controller.

use crate::command::{RegisterSelection, State};

/// Register select line, P0
pub const REGISTER_SELECT: u8 = 0b0000_0001;
/// Read/write line, P1, always low since this driver never reads back
pub const READ_WRITE: u8 = 0b0000_0010;
/// Enable line, P2, the controller latches DB7..DB4 on its falling edge
pub const ENABLE: u8 = 0b0000_0100;
/// Backlight switch, P3
pub const BACKLIGHT: u8 = 0b0000_1000;

/// One expander port image: a data nibble in bits 7-4, RS in bit 0
#[derive(Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Frame(u8);

impl Frame {
    /// Frame carrying the high nibble of `byte`
    pub fn high(byte: u8, rs: RegisterSelection) -> Self {
        Self::new(byte & 0b1111_0000, rs)
    }

    /// Frame carrying the low nibble of `byte`
    pub fn low(byte: u8, rs: RegisterSelection) -> Self {
        Self::new((byte << 4) & 0b1111_0000, rs)
    }

    fn new(data_bits: u8, rs: RegisterSelection) -> Self {
        match rs {
            RegisterSelection::Command => Frame(data_bits),
            RegisterSelection::Data => Frame(data_bits | REGISTER_SELECT),
        }
    }

    /// The pair of port writes latching this frame: enable is raised on
    /// the first and dropped on the second, the backlight rides on both
    pub fn pulse(self, backlight: State) -> [u8; 2] {
        let light = match backlight {
            State::On => BACKLIGHT,
            State::Off => 0,
        };

        let raised = self.0 | light | ENABLE;
        let lowered = (self.0 & !ENABLE) | light;

        [raised, lowered]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::BitOps;

    #[test]
    fn high_and_low_pick_their_nibbles() {
        assert_eq!(Frame::high(0xAB, RegisterSelection::Command).0, 0xA0);
        assert_eq!(Frame::low(0xAB, RegisterSelection::Command).0, 0xB0);
    }

    #[test]
    fn data_frames_raise_register_select() {
        assert_eq!(Frame::high(0xAB, RegisterSelection::Data).0, 0xA1);
        assert_eq!(Frame::low(0xAB, RegisterSelection::Data).0, 0xB1);
    }

    #[test]
    fn pulse_raises_then_drops_enable() {
        let frame = Frame::high(0x41, RegisterSelection::Data);
        assert_eq!(frame.pulse(State::On), [0x4D, 0x49]);
        assert_eq!(frame.pulse(State::Off), [0x45, 0x41]);

        let [raised, lowered] = frame.pulse(State::On);
        assert!(raised.check_bit(2));
        assert!(!lowered.check_bit(2));
    }

    #[test]
    fn control_masks_stay_clear_of_the_data_lines() {
        assert_eq!(
            (REGISTER_SELECT | READ_WRITE | ENABLE | BACKLIGHT) & 0b1111_0000,
            0
        );
    }

    #[test]
    fn any_byte_survives_the_nibble_split() {
        for value in 0..=u8::MAX {
            let high = Frame::high(value, RegisterSelection::Command);
            let low = Frame::low(value, RegisterSelection::Command);
            assert_eq!((high.0 & 0xF0) | (low.0 >> 4), value);
        }
    }
}
