//! Automatic impedance matcher firmware for an ESP32 board.
//!
//! Flip the mode switch closed for automated mode; leave it open to steer the tx and ant
//! servos with the two dials. Diagnostic lines go out on UART0 at 9600 baud.
#![no_std]
#![no_main]
#![allow(clippy::future_not_send, reason = "Single-threaded")]

use defmt::info;
use embassy_executor::Spawner;
use embassy_time::Delay;
use impedance_matcher::{
    CYCLE_PERIOD, Controller, Hardware, ModeSwitch, Never, Result, SERVO_MAX_US, SERVO_MIN_US,
    Servo, ServoPair, VswrSimulator,
};
use panic_rtt_target as _;

// This creates a default app-descriptor required by the esp-idf bootloader.
esp_bootloader_esp_idf::esp_app_desc!();

#[esp_rtos::main]
async fn main(_spawner: Spawner) -> ! {
    rtt_target::rtt_init_defmt!();

    // If it returns, something went wrong.
    let Err(err) = inner_main().await;
    panic!("{err}");
}

async fn inner_main() -> Result<Never> {
    let hardware = Hardware::init()?;

    let servos = ServoPair::new(
        Servo::new(hardware.tx_servo, SERVO_MIN_US, SERVO_MAX_US)?,
        Servo::new(hardware.ant_servo, SERVO_MIN_US, SERVO_MAX_US)?,
    );

    let mut controller = Controller::new(
        ModeSwitch::new(hardware.switch),
        hardware.tx_dial,
        hardware.ant_dial,
        servos,
        VswrSimulator::new(),
        hardware.console,
    );

    info!("Starting matcher loop, one cycle every {}", CYCLE_PERIOD);
    controller.run(&mut Delay).await
}
