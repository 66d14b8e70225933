//! The LCD driver

use core::fmt;

use embedded_hal::{
    delay::DelayNs,
    i2c::{I2c, Operation},
};

use crate::{
    command::{
        CommandSet, DataWidth, Font, LineMode, MoveDirection, RegisterSelection, ShiftType, State,
    },
    frame::{self, Frame},
    state::LcdState,
};

/// Usual bus address of a PCF8574 backpack with all address jumpers open
pub const DEFAULT_ADDRESS: u8 = 0x27;

/// Power-on wait before the controller accepts instructions
const POWER_ON_DELAY_MS: u32 = 15;
/// Settle time after an instruction, long enough for clear and return-home
const COMMAND_DELAY_MS: u32 = 2;

/// Initial display configuration, consumed by [`Lcd::new_with_config`]
///
/// The default matches the common off-the-shelf module: two lines, 5x8
/// font, display on, cursor and blink off, left-to-right entry without
/// display shift, backlight on.
#[derive(Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    state: LcdState,
}

#[allow(missing_docs)]
impl Config {
    pub fn get_line_mode(&self) -> LineMode {
        self.state.get_line_mode()
    }

    pub fn set_line_mode(mut self, line: LineMode) -> Self {
        self.state.set_line_mode(line);
        self
    }

    pub fn get_font(&self) -> Font {
        self.state.get_font()
    }

    pub fn set_font(mut self, font: Font) -> Self {
        self.state.set_font(font);
        self
    }

    pub fn get_display_state(&self) -> State {
        self.state.get_display_state()
    }

    pub fn set_display_state(mut self, display: State) -> Self {
        self.state.set_display_state(display);
        self
    }

    pub fn get_cursor_state(&self) -> State {
        self.state.get_cursor_state()
    }

    pub fn set_cursor_state(mut self, cursor: State) -> Self {
        self.state.set_cursor_state(cursor);
        self
    }

    pub fn get_cursor_blink(&self) -> State {
        self.state.get_cursor_blink()
    }

    pub fn set_cursor_blink(mut self, blink: State) -> Self {
        self.state.set_cursor_blink(blink);
        self
    }

    pub fn get_direction(&self) -> MoveDirection {
        self.state.get_direction()
    }

    pub fn set_direction(mut self, dir: MoveDirection) -> Self {
        self.state.set_direction(dir);
        self
    }

    pub fn get_shift_type(&self) -> ShiftType {
        self.state.get_shift_type()
    }

    pub fn set_shift_type(mut self, shift: ShiftType) -> Self {
        self.state.set_shift_type(shift);
        self
    }

    pub fn get_backlight(&self) -> State {
        self.state.get_backlight()
    }

    pub fn set_backlight(mut self, backlight: State) -> Self {
        self.state.set_backlight(backlight);
        self
    }
}

/// An HD44780 LCD behind a PCF8574 expander
///
/// The driver owns the bus handle and the delay source for its whole
/// lifetime. All methods block until the controller has taken the
/// transfer, and every bus failure surfaces as the I2C error of the
/// underlying HAL.
pub struct Lcd<I2C, Delayer>
where
    I2C: I2c,
    Delayer: DelayNs,
{
    i2c: I2C,
    delayer: Delayer,
    address: u8,
    state: LcdState,
}

impl<I2C, Delayer> Lcd<I2C, Delayer>
where
    I2C: I2c,
    Delayer: DelayNs,
{
    /// Create a driver with the default [`Config`].
    ///
    /// No bus traffic happens here, call [`Lcd::init`] to bring the
    /// display up. `address` is usually [`DEFAULT_ADDRESS`].
    pub fn new(i2c: I2C, delayer: Delayer, address: u8) -> Self {
        Self::new_with_config(i2c, delayer, address, Config::default())
    }

    /// Create a driver with a custom [`Config`].
    pub fn new_with_config(i2c: I2C, delayer: Delayer, address: u8, config: Config) -> Self {
        Self {
            i2c,
            delayer,
            address,
            state: config.state,
        }
    }

    /// Run the power-on initialization sequence.
    ///
    /// Waits out the 15 ms power-on time, then issues return-home,
    /// function-set, display-control, entry-mode and clear, in that
    /// order. Can be called again at any time to reset the display to
    /// its configured state.
    pub fn init(&mut self) -> Result<(), I2C::Error> {
        self.delayer.delay_ms(POWER_ON_DELAY_MS);

        self.send_command(CommandSet::ReturnHome)?;
        self.send_command(CommandSet::FunctionSet(
            DataWidth::Bit4,
            self.state.get_line_mode(),
            self.state.get_font(),
        ))?;
        self.send_command(CommandSet::DisplayOnOff {
            display: self.state.get_display_state(),
            cursor: self.state.get_cursor_state(),
            cursor_blink: self.state.get_cursor_blink(),
        })?;
        self.send_command(CommandSet::EntryModeSet(
            self.state.get_direction(),
            self.state.get_shift_type(),
        ))?;
        self.send_command(CommandSet::ClearDisplay)
    }

    /// Send one instruction byte, high nibble first.
    ///
    /// Blocks for 2 ms afterwards, which covers the slowest
    /// instructions (clear and return-home).
    pub fn send_command(&mut self, command: impl Into<u8>) -> Result<(), I2C::Error> {
        let command = command.into();

        self.send_byte(Frame::high(command, RegisterSelection::Command))?;
        self.send_byte(Frame::low(command, RegisterSelection::Command))?;

        self.delayer.delay_ms(COMMAND_DELAY_MS);
        Ok(())
    }

    /// Send one character byte, high nibble first.
    ///
    /// No settle delay follows. The bus transfer itself takes longer
    /// than the 37 us a data write needs on the controller side.
    pub fn send_data(&mut self, data: u8) -> Result<(), I2C::Error> {
        self.send_byte(Frame::high(data, RegisterSelection::Data))?;
        self.send_byte(Frame::low(data, RegisterSelection::Data))
    }

    // One enable pulse per nibble frame. Both port writes travel in a
    // single transaction, so the bus stays claimed between the edges.
    fn send_byte(&mut self, frame: Frame) -> Result<(), I2C::Error> {
        let [raised, lowered] = frame.pulse(self.state.get_backlight());

        self.i2c.transaction(
            self.address,
            &mut [Operation::Write(&[raised]), Operation::Write(&[lowered])],
        )
    }

    /// Print a string at the current cursor position.
    ///
    /// Bytes are sent as-is. The controller's character ROM covers
    /// ASCII, anything else renders as whatever glyph the ROM holds
    /// there.
    pub fn print(&mut self, s: &str) -> Result<(), I2C::Error> {
        for byte in s.bytes() {
            self.send_data(byte)?;
        }
        Ok(())
    }

    /// Move the cursor to `row` and `col`.
    ///
    /// Row 0 issues the command byte `0x08 + col`, row 1 issues
    /// `0xC0 + col`. Any other row does nothing. Columns are added to
    /// the row base unchecked and wrap like the raw byte would.
    pub fn set_cursor(&mut self, row: u8, col: u8) -> Result<(), I2C::Error> {
        const FIRST_ROW: u8 = 0x08;
        const SECOND_ROW: u8 = 0xC0;

        match row {
            0 => self.send_command(FIRST_ROW.wrapping_add(col)),
            1 => self.send_command(SECOND_ROW.wrapping_add(col)),
            _ => Ok(()),
        }
    }

    /// Blank the display and move the cursor to the top left.
    pub fn clear(&mut self) -> Result<(), I2C::Error> {
        self.send_command(CommandSet::ClearDisplay)
    }

    /// Move the cursor and the display window back to the origin.
    pub fn return_home(&mut self) -> Result<(), I2C::Error> {
        self.send_command(CommandSet::ReturnHome)
    }

    /// Switch the whole display on or off. The backlight is unaffected.
    pub fn set_display_state(&mut self, display: State) -> Result<(), I2C::Error> {
        self.state.set_display_state(display);

        self.send_command(CommandSet::DisplayOnOff {
            display: self.get_display_state(),
            cursor: self.get_cursor_state(),
            cursor_blink: self.get_cursor_blink_state(),
        })
    }

    /// Whether the display currently shows its RAM content.
    pub fn get_display_state(&self) -> State {
        self.state.get_display_state()
    }

    /// Show or hide the cursor.
    pub fn set_cursor_state(&mut self, cursor: State) -> Result<(), I2C::Error> {
        self.state.set_cursor_state(cursor);

        self.send_command(CommandSet::DisplayOnOff {
            display: self.get_display_state(),
            cursor: self.get_cursor_state(),
            cursor_blink: self.get_cursor_blink_state(),
        })
    }

    /// Whether the cursor is visible.
    pub fn get_cursor_state(&self) -> State {
        self.state.get_cursor_state()
    }

    /// Switch cursor blinking on or off.
    pub fn set_cursor_blink_state(&mut self, blink: State) -> Result<(), I2C::Error> {
        self.state.set_cursor_blink(blink);

        self.send_command(CommandSet::DisplayOnOff {
            display: self.get_display_state(),
            cursor: self.get_cursor_state(),
            cursor_blink: self.get_cursor_blink_state(),
        })
    }

    /// Whether the cursor position blinks.
    pub fn get_cursor_blink_state(&self) -> State {
        self.state.get_cursor_blink()
    }

    /// Select the direction the cursor moves after each written byte.
    pub fn set_direction(&mut self, dir: MoveDirection) -> Result<(), I2C::Error> {
        self.state.set_direction(dir);

        self.send_command(CommandSet::EntryModeSet(
            self.get_direction(),
            self.get_shift_type(),
        ))
    }

    /// The configured entry direction.
    pub fn get_direction(&self) -> MoveDirection {
        self.state.get_direction()
    }

    /// Select whether writes shift the display window along with the cursor.
    pub fn set_shift_type(&mut self, shift: ShiftType) -> Result<(), I2C::Error> {
        self.state.set_shift_type(shift);

        self.send_command(CommandSet::EntryModeSet(
            self.get_direction(),
            self.get_shift_type(),
        ))
    }

    /// The configured shift type.
    pub fn get_shift_type(&self) -> ShiftType {
        self.state.get_shift_type()
    }

    /// Move the cursor, or shift the display window, one step without
    /// touching RAM.
    pub fn shift_cursor_or_display(
        &mut self,
        shift_type: ShiftType,
        dir: MoveDirection,
    ) -> Result<(), I2C::Error> {
        self.send_command(CommandSet::CursorOrDisplayShift(shift_type, dir))
    }

    /// Turn the backlight on or off.
    ///
    /// Takes effect immediately with a single port write, and rides
    /// along on every following frame.
    pub fn set_backlight(&mut self, backlight: State) -> Result<(), I2C::Error> {
        self.state.set_backlight(backlight);

        let light = match backlight {
            State::On => frame::BACKLIGHT,
            State::Off => 0,
        };
        self.i2c.write(self.address, &[light])
    }

    /// Whether the backlight is lit.
    pub fn get_backlight(&self) -> State {
        self.state.get_backlight()
    }

    /// The configured line mode.
    pub fn get_line_mode(&self) -> LineMode {
        self.state.get_line_mode()
    }

    /// The configured font.
    pub fn get_font(&self) -> Font {
        self.state.get_font()
    }

    /// Wait for specified milliseconds.
    pub fn delay_ms(&mut self, ms: u32) {
        self.delayer.delay_ms(ms);
    }

    /// Wait for specified microseconds.
    pub fn delay_us(&mut self, us: u32) {
        self.delayer.delay_us(us);
    }
}

impl<I2C, Delayer> fmt::Write for Lcd<I2C, Delayer>
where
    I2C: I2c,
    Delayer: DelayNs,
{
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.print(s).map_err(|_| fmt::Error)
    }
}
