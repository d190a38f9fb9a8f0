//! ESP32 board bring-up: dials on ADC1, the pull-up mode switch, two LEDC servo channels, and
//! the 9600-baud diagnostic UART.
//!
//! Pins follow the wiring constants; `Hardware::init` logs them at start-up.
//!
//! | role              | GPIO | constant            |
//! |-------------------|------|---------------------|
//! | tx potentiometer  | 39   | [`TX_DIAL_PIN`]     |
//! | ant potentiometer | 38   | [`ANT_DIAL_PIN`]    |
//! | mode switch       | 32   | [`MODE_SWITCH_PIN`] |
//! | tx servo          | 0    | [`TX_SERVO_PIN`]    |
//! | ant servo         | 23   | [`ANT_SERVO_PIN`]   |

use core::cell::RefCell;
use core::convert::Infallible;

use embedded_hal::pwm::{ErrorType, SetDutyCycle};
use esp_hal::Blocking;
use esp_hal::analog::adc::{Adc, AdcChannel, AdcConfig, AdcPin, Attenuation};
use esp_hal::clock::CpuClock;
use esp_hal::gpio::{DriveMode, Input, InputConfig, Pull};
use esp_hal::ledc::channel::{self, ChannelHW, ChannelIFace};
use esp_hal::ledc::timer::{self, TimerIFace};
use esp_hal::ledc::{LSGlobalClkSource, Ledc, LowSpeed};
use esp_hal::peripherals::{ADC1, GPIO38, GPIO39};
use esp_hal::time::Rate;
use esp_hal::timer::timg::TimerGroup;
use esp_hal::uart::{Config as UartConfig, Uart};
use static_cell::StaticCell;

use crate::log::info;
use crate::{
    ANT_DIAL_PIN, ANT_SERVO_PIN, AnalogInput, Error, MODE_SWITCH_PIN, Result, SERIAL_BAUD,
    SERVO_FRAME_HZ, SerialConsole, TX_DIAL_PIN, TX_SERVO_PIN,
};

/// LEDC duty resolution for the servo timer.
const DUTY_RESOLUTION: timer::config::Duty = timer::config::Duty::Duty14Bit;
const DUTY_MAX: u16 = (1 << 14) - 1;

/// ESP32 ADC1 delivers 12-bit samples; the dial scale is calibrated for 10 bits.
const ADC_EXTRA_BITS: u16 = 2;

type SharedAdc = RefCell<Adc<'static, ADC1<'static>, Blocking>>;

static ADC: StaticCell<SharedAdc> = StaticCell::new();
static LEDC: StaticCell<Ledc<'static>> = StaticCell::new();
static SERVO_TIMER: StaticCell<timer::Timer<'static, LowSpeed>> = StaticCell::new();

pub type TxDial = AdcDial<GPIO39<'static>>;
pub type AntDial = AdcDial<GPIO38<'static>>;

/// A potentiometer on one ADC1 channel. Both dials share the converter.
pub struct AdcDial<PIN> {
    adc: &'static SharedAdc,
    pin: AdcPin<PIN, ADC1<'static>>,
}

impl<PIN: AdcChannel> AnalogInput for AdcDial<PIN> {
    fn read_raw(&mut self) -> Result<i32> {
        let raw: u16 = nb::block!(self.adc.borrow_mut().read_oneshot(&mut self.pin))
            .map_err(|()| Error::AnalogRead)?;
        Ok(i32::from(raw >> ADC_EXTRA_BITS))
    }
}

/// One LEDC low-speed channel running the 50 Hz servo timer.
pub struct LedcPwm {
    channel: channel::Channel<'static, LowSpeed>,
}

impl ErrorType for LedcPwm {
    type Error = Infallible;
}

impl SetDutyCycle for LedcPwm {
    fn max_duty_cycle(&self) -> u16 {
        DUTY_MAX
    }

    fn set_duty_cycle(&mut self, duty: u16) -> core::result::Result<(), Self::Error> {
        self.channel.set_duty_hw(u32::from(duty));
        Ok(())
    }
}

pub struct Hardware {
    pub switch: Input<'static>,
    pub tx_dial: TxDial,
    pub ant_dial: AntDial,
    pub tx_servo: LedcPwm,
    pub ant_servo: LedcPwm,
    pub console: SerialConsole<Uart<'static, Blocking>>,
}

impl Hardware {
    /// Initialize the chip, start the embassy time driver, and claim the matcher's pins.
    ///
    /// Call once.
    ///
    /// # Errors
    /// Returns an error if the servo timer, a servo channel or the UART rejects its
    /// configuration.
    pub fn init() -> Result<Self> {
        let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
        let peripherals = esp_hal::init(config);

        let timg0 = TimerGroup::new(peripherals.TIMG0);
        esp_rtos::start(timg0.timer0);

        let switch = Input::new(
            peripherals.GPIO32,
            InputConfig::default().with_pull(Pull::Up),
        );

        let mut adc_config = AdcConfig::new();
        let tx_pin = adc_config.enable_pin(peripherals.GPIO39, Attenuation::_11dB);
        let ant_pin = adc_config.enable_pin(peripherals.GPIO38, Attenuation::_11dB);
        let adc: &'static SharedAdc =
            ADC.init(RefCell::new(Adc::new(peripherals.ADC1, adc_config)));
        let tx_dial = AdcDial { adc, pin: tx_pin };
        let ant_dial = AdcDial { adc, pin: ant_pin };

        let mut ledc_driver = Ledc::new(peripherals.LEDC);
        ledc_driver.set_global_slow_clock(LSGlobalClkSource::APBClk);
        let ledc: &'static Ledc<'static> = LEDC.init(ledc_driver);

        let mut timer_driver = ledc.timer::<LowSpeed>(timer::Number::Timer0);
        timer_driver.configure(timer::config::Config {
            duty: DUTY_RESOLUTION,
            clock_source: timer::LSClockSource::APBClk,
            frequency: Rate::from_hz(SERVO_FRAME_HZ),
        })?;
        let servo_timer: &'static timer::Timer<'static, LowSpeed> = SERVO_TIMER.init(timer_driver);

        let mut tx_channel = ledc.channel(channel::Number::Channel0, peripherals.GPIO0);
        tx_channel.configure(channel::config::Config {
            timer: servo_timer,
            duty_pct: 0,
            drive_mode: DriveMode::PushPull,
        })?;
        let mut ant_channel = ledc.channel(channel::Number::Channel1, peripherals.GPIO23);
        ant_channel.configure(channel::config::Config {
            timer: servo_timer,
            duty_pct: 0,
            drive_mode: DriveMode::PushPull,
        })?;

        let uart = Uart::new(
            peripherals.UART0,
            UartConfig::default().with_baudrate(SERIAL_BAUD),
        )?
        .with_tx(peripherals.GPIO1)
        .with_rx(peripherals.GPIO3);

        info!(
            "pins: tx dial {}, ant dial {}, switch {}, tx servo {}, ant servo {}",
            TX_DIAL_PIN,
            ANT_DIAL_PIN,
            MODE_SWITCH_PIN,
            TX_SERVO_PIN,
            ANT_SERVO_PIN
        );
        info!(
            "servo timer {}Hz/14-bit, console {} baud",
            SERVO_FRAME_HZ,
            SERIAL_BAUD
        );

        Ok(Self {
            switch,
            tx_dial,
            ant_dial,
            tx_servo: LedcPwm {
                channel: tx_channel,
            },
            ant_servo: LedcPwm {
                channel: ant_channel,
            },
            console: SerialConsole::new(uart),
        })
    }
}
