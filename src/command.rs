//! The instruction set of the LCD controller
//!
//! [`CommandSet`] covers the instructions this driver issues, one variant
//! per instruction group. [`From<CommandSet>`] builds the raw instruction
//! byte that [`crate::lcd::Lcd::send_command`] splits into nibble frames.

use crate::utils::BitOps;

/// Instructions understood by the LCD controller
#[derive(Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CommandSet {
    /// Blank the whole display and move the cursor to the top left
    ClearDisplay,
    /// Move the cursor and the display window back to the origin
    ReturnHome,
    /// Select how the cursor and display move after each RAM write
    EntryModeSet(MoveDirection, ShiftType),
    /// Switch the display, the cursor and cursor blinking on or off
    DisplayOnOff {
        /// Whether the display shows its RAM content
        display: State,
        /// Whether the cursor is visible
        cursor: State,
        /// Whether the cursor position blinks
        cursor_blink: State,
    },
    /// Move the cursor or shift the whole display once, without writing RAM
    CursorOrDisplayShift(ShiftType, MoveDirection),
    /// Select bus width, line count and font
    FunctionSet(DataWidth, LineMode, Font),
}

/// Direction the cursor (or display window) travels
#[derive(Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MoveDirection {
    /// Entries run towards lower addresses
    RightToLeft,
    /// Entries run towards higher addresses
    LeftToRight,
}

/// What a shift operation moves
#[derive(Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ShiftType {
    /// Move the cursor only
    CursorOnly,
    /// Move the cursor and the display window together
    CursorAndDisplay,
}

/// On/off state of a display feature
#[derive(Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[allow(missing_docs)]
pub enum State {
    Off,
    On,
}

/// Width of the controller data bus
#[derive(Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[allow(missing_docs)]
pub enum DataWidth {
    Bit4,
    Bit8,
}

/// Number of display lines
#[derive(Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[allow(missing_docs)]
pub enum LineMode {
    OneLine,
    TwoLine,
}

/// Character glyph size
#[derive(Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Font {
    /// 5x8 dot matrix
    Font5x8,
    /// 5x11 dot matrix, only rendered in one-line mode
    Font5x11,
}

/// Which controller register a frame addresses
#[derive(Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RegisterSelection {
    /// The instruction register
    Command,
    /// The data register
    Data,
}

impl From<CommandSet> for u8 {
    fn from(command: CommandSet) -> Self {
        match command {
            CommandSet::ClearDisplay => 0b0000_0001,

            CommandSet::ReturnHome => 0b0000_0010,

            CommandSet::EntryModeSet(dir, st) => {
                let mut raw_bits: u8 = 0b0000_0100;

                match dir {
                    MoveDirection::RightToLeft => raw_bits.clear_bit(1),
                    MoveDirection::LeftToRight => raw_bits.set_bit(1),
                };

                match st {
                    ShiftType::CursorOnly => raw_bits.clear_bit(0),
                    ShiftType::CursorAndDisplay => raw_bits.set_bit(0),
                };

                raw_bits
            }

            CommandSet::DisplayOnOff {
                display,
                cursor,
                cursor_blink,
            } => {
                let mut raw_bits: u8 = 0b0000_1000;

                match display {
                    State::Off => raw_bits.clear_bit(2),
                    State::On => raw_bits.set_bit(2),
                };

                match cursor {
                    State::Off => raw_bits.clear_bit(1),
                    State::On => raw_bits.set_bit(1),
                };

                match cursor_blink {
                    State::Off => raw_bits.clear_bit(0),
                    State::On => raw_bits.set_bit(0),
                };

                raw_bits
            }

            CommandSet::CursorOrDisplayShift(st, dir) => {
                let mut raw_bits: u8 = 0b0001_0000;

                match st {
                    ShiftType::CursorOnly => raw_bits.clear_bit(3),
                    ShiftType::CursorAndDisplay => raw_bits.set_bit(3),
                };

                match dir {
                    MoveDirection::RightToLeft => raw_bits.clear_bit(2),
                    MoveDirection::LeftToRight => raw_bits.set_bit(2),
                };

                raw_bits
            }

            CommandSet::FunctionSet(width, line, font) => {
                let mut raw_bits: u8 = 0b0010_0000;

                match width {
                    DataWidth::Bit4 => raw_bits.clear_bit(4),
                    DataWidth::Bit8 => raw_bits.set_bit(4),
                };

                match line {
                    LineMode::OneLine => raw_bits.clear_bit(3),
                    LineMode::TwoLine => raw_bits.set_bit(3),
                };

                match font {
                    Font::Font5x8 => raw_bits.clear_bit(2),
                    Font::Font5x11 => raw_bits.set_bit(2),
                };

                raw_bits
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_instructions_encode_to_their_bytes() {
        assert_eq!(u8::from(CommandSet::ClearDisplay), 0x01);
        assert_eq!(u8::from(CommandSet::ReturnHome), 0x02);
    }

    #[test]
    fn entry_mode_packs_direction_and_shift() {
        assert_eq!(
            u8::from(CommandSet::EntryModeSet(
                MoveDirection::LeftToRight,
                ShiftType::CursorOnly,
            )),
            0x06
        );
        assert_eq!(
            u8::from(CommandSet::EntryModeSet(
                MoveDirection::RightToLeft,
                ShiftType::CursorAndDisplay,
            )),
            0x05
        );
    }

    #[test]
    fn display_control_packs_the_three_switches() {
        assert_eq!(
            u8::from(CommandSet::DisplayOnOff {
                display: State::On,
                cursor: State::Off,
                cursor_blink: State::Off,
            }),
            0x0C
        );
        assert_eq!(
            u8::from(CommandSet::DisplayOnOff {
                display: State::On,
                cursor: State::On,
                cursor_blink: State::On,
            }),
            0x0F
        );
        assert_eq!(
            u8::from(CommandSet::DisplayOnOff {
                display: State::Off,
                cursor: State::Off,
                cursor_blink: State::Off,
            }),
            0x08
        );
    }

    #[test]
    fn shift_packs_type_and_direction() {
        assert_eq!(
            u8::from(CommandSet::CursorOrDisplayShift(
                ShiftType::CursorAndDisplay,
                MoveDirection::LeftToRight,
            )),
            0x1C
        );
        assert_eq!(
            u8::from(CommandSet::CursorOrDisplayShift(
                ShiftType::CursorOnly,
                MoveDirection::RightToLeft,
            )),
            0x10
        );
    }

    #[test]
    fn function_set_packs_width_lines_and_font() {
        assert_eq!(
            u8::from(CommandSet::FunctionSet(
                DataWidth::Bit4,
                LineMode::TwoLine,
                Font::Font5x8,
            )),
            0x28
        );
        assert_eq!(
            u8::from(CommandSet::FunctionSet(
                DataWidth::Bit8,
                LineMode::OneLine,
                Font::Font5x11,
            )),
            0x34
        );
    }
}
