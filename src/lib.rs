/*!
# LCD1602 I2C Driver

A driver for HD44780 character LCDs wired behind a PCF8574 I2C expander,
the "backpack" board commonly soldered to LCD1602 and LCD2004 modules.

Basic Usage:

1. Bring up an I2C bus and a delay source with your HAL <br/>
    Any pair implementing [`embedded_hal::i2c::I2c`] and
    [`embedded_hal::delay::DelayNs`] will do.
<br/>
<br/>
2. Use [`lcd::Lcd::new()`] (or [`lcd::Lcd::new_with_config()`]) to create a
    [`lcd::Lcd`], then call [`lcd::Lcd::init()`] to initialize the LCD hardware
<br/>
<br/>
3. Use any method provided by [`lcd::Lcd`] to control the display
*/

#![no_std]
#![warn(missing_docs)]

pub mod command;
pub mod frame;
pub mod lcd;
mod state;
pub mod utils;
