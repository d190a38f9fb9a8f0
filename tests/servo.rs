//! Host-level tests for the servo driver and the tx/ant pair.

mod common;

use common::MockPwm;
use embedded_hal::pwm::ErrorKind;
use impedance_matcher::{Error, Servo, ServoPair};

#[test]
fn new_servo_starts_centered() {
    let pwm = MockPwm::microseconds();
    let duty = pwm.duty.clone();

    let servo = Servo::new(pwm, 500, 2500).unwrap();

    assert_eq!(servo.degrees(), 90);
    assert_eq!(servo.pulse_us(), 1500);
    assert_eq!(duty.get(), 1500);
}

#[test]
fn degrees_clamp_to_servo_range() {
    let pwm = MockPwm::microseconds();
    let duty = pwm.duty.clone();
    let mut servo = Servo::new(pwm, 500, 2500).unwrap();

    servo.set_degrees(-10).unwrap();
    assert_eq!((servo.degrees(), duty.get()), (0, 500));

    servo.set_degrees(270).unwrap();
    assert_eq!((servo.degrees(), duty.get()), (180, 2500));

    servo.set_degrees(45).unwrap();
    assert_eq!((servo.degrees(), duty.get()), (45, 1000));
}

#[test]
fn duty_scales_to_channel_resolution() {
    // 14-bit LEDC channel: 1500 µs of 20 000 µs.
    let pwm = MockPwm::new((1 << 14) - 1);
    let duty = pwm.duty.clone();

    let _servo = Servo::new(pwm, 500, 2500).unwrap();

    assert_eq!(duty.get(), 1228);
}

#[test]
fn pulse_is_clamped_to_frame() {
    let pwm = MockPwm::microseconds();
    let duty = pwm.duty.clone();
    let mut servo = Servo::new(pwm, 500, 2500).unwrap();

    servo.set_pulse_us(u16::MAX).unwrap();

    assert_eq!(servo.pulse_us(), 19_999);
    assert_eq!(duty.get(), 19_999);
}

#[test]
fn disabled_servo_holds_commands_until_enabled() {
    let pwm = MockPwm::microseconds();
    let duty = pwm.duty.clone();
    let mut servo = Servo::new(pwm, 500, 2500).unwrap();

    servo.disable().unwrap();
    assert!(!servo.is_enabled());
    assert_eq!(duty.get(), 0);

    servo.set_degrees(180).unwrap();
    assert_eq!(duty.get(), 0);
    assert_eq!(servo.degrees(), 180);

    servo.enable().unwrap();
    assert_eq!(duty.get(), 2500);
}

#[test]
fn pwm_failure_is_reported() {
    let pwm = MockPwm::microseconds();
    let fail = pwm.fail.clone();
    let mut servo = Servo::new(pwm, 500, 2500).unwrap();

    fail.set(true);

    assert!(matches!(
        servo.set_degrees(10),
        Err(Error::Pwm(ErrorKind::Other))
    ));
}

#[test]
fn pair_addresses_servos_by_role() {
    let tx = MockPwm::microseconds();
    let ant = MockPwm::microseconds();
    let (tx_duty, ant_duty) = (tx.duty.clone(), ant.duty.clone());
    let mut servos = ServoPair::new(
        Servo::new(tx, 500, 2500).unwrap(),
        Servo::new(ant, 500, 2500).unwrap(),
    );

    servos.set_degrees_tx(180).unwrap();
    servos.set_degrees_ant(0).unwrap();
    assert_eq!(servos.degrees(), (180, 0));
    assert_eq!((tx_duty.get(), ant_duty.get()), (2500, 500));

    servos.center().unwrap();
    assert_eq!(servos.degrees(), (90, 90));

    servos.home().unwrap();
    assert_eq!(servos.degrees(), (0, 0));

    servos.disable().unwrap();
    assert!(!servos.tx().is_enabled() && !servos.ant().is_enabled());
    assert_eq!((tx_duty.get(), ant_duty.get()), (0, 0));

    servos.enable().unwrap();
    assert_eq!((tx_duty.get(), ant_duty.get()), (500, 500));
}
