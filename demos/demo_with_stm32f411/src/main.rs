//! Drive an LCD1602 behind a PCF8574 backpack with an STM32F411RET6
//!
//! Wiring diagram
//!
//! backpack <-> STM32F411RET6
//!      GND <-> GND
//!      VCC <-> 5V (the F411 I2C pins are 5V tolerant in open drain mode)
//!      SDA <-> PB7
//!      SCL <-> PB6
//!
//! The contrast potentiometer sits on the backpack itself.

#![no_std]
#![no_main]

use panic_rtt_target as _;
use rtt_target::{rprintln, rtt_init_print};
use stm32f4xx_hal::{
    i2c::{self, I2c},
    pac,
    prelude::*,
};

use lcd1602_i2c::lcd::{Lcd, DEFAULT_ADDRESS};

#[cortex_m_rt::entry]
fn main() -> ! {
    rtt_init_print!();

    let dp = pac::Peripherals::take().expect("Cannot take device peripherals");
    let cp = pac::CorePeripherals::take().expect("Cannot take core peripherals");

    let rcc = dp.RCC.constrain();
    let clocks = rcc.cfgr.use_hse(12.MHz()).freeze();

    let delayer = cp.SYST.delay(&clocks);

    let gpiob = dp.GPIOB.split();

    let i2c = I2c::new(
        dp.I2C1,
        (gpiob.pb6, gpiob.pb7),
        i2c::Mode::standard(100.kHz()), // the PCF8574T tops out at 100 kHz
        &clocks,
    );

    let mut lcd = Lcd::new(i2c, delayer, DEFAULT_ADDRESS);
    lcd.init().expect("LCD did not answer during init");

    rprintln!("LCD up, looping the banner");

    loop {
        lcd.print("  Hello World!").unwrap();
        lcd.delay_ms(1_000);

        lcd.set_cursor(1, 0).unwrap();
        lcd.print("LCD1602 over I2C").unwrap();
        lcd.delay_ms(2_000);

        // init doubles as a full reset, wiping both rows for the next pass
        lcd.init().unwrap();
    }
}
