//! Host stand-ins for the board: a scripted switch, settable dials, duty-recording PWM
//! channels, and a delay that logs instead of sleeping.
#![allow(dead_code, reason = "Each test binary uses a different subset of the helpers")]

extern crate alloc;

use alloc::collections::VecDeque;
use alloc::rc::Rc;
use core::cell::{Cell, RefCell};

use embedded_hal::{digital, pwm};
use embedded_hal_async::delay::DelayNs;
use impedance_matcher::{AnalogInput, Controller, ModeSwitch, Servo, ServoPair, VswrSimulator};

pub const OPEN: bool = true; // switch open: pulled high
pub const CLOSED: bool = false; // switch closed: pulled low

#[derive(Debug)]
pub struct Fault;

impl digital::Error for Fault {
    fn kind(&self) -> digital::ErrorKind {
        digital::ErrorKind::Other
    }
}

impl pwm::Error for Fault {
    fn kind(&self) -> pwm::ErrorKind {
        pwm::ErrorKind::Other
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    SwitchRead,
    DelayNs(u32),
    DelayMs(u32),
}

pub type Events = Rc<RefCell<Vec<Event>>>;

/// Plays back a script of switch levels, then fails every read.
pub struct ScriptedSwitch {
    levels: VecDeque<bool>,
    events: Events,
}

impl ScriptedSwitch {
    pub fn new(levels: &[bool], events: Events) -> Self {
        Self {
            levels: levels.iter().copied().collect(),
            events,
        }
    }
}

impl digital::ErrorType for ScriptedSwitch {
    type Error = Fault;
}

impl digital::InputPin for ScriptedSwitch {
    fn is_high(&mut self) -> Result<bool, Fault> {
        self.events.borrow_mut().push(Event::SwitchRead);
        self.levels.pop_front().ok_or(Fault)
    }

    fn is_low(&mut self) -> Result<bool, Fault> {
        self.is_high().map(|high| !high)
    }
}

/// A dial whose value the test can change between cycles.
#[derive(Clone, Default)]
pub struct Dial(pub Rc<Cell<i32>>);

impl AnalogInput for Dial {
    fn read_raw(&mut self) -> impedance_matcher::Result<i32> {
        Ok(self.0.get())
    }
}

/// Records the last duty written. `max_duty` is configurable so duty can equal microseconds.
pub struct MockPwm {
    pub duty: Rc<Cell<u16>>,
    pub fail: Rc<Cell<bool>>,
    max_duty: u16,
}

impl MockPwm {
    pub fn new(max_duty: u16) -> Self {
        Self {
            duty: Rc::default(),
            fail: Rc::default(),
            max_duty,
        }
    }

    /// A channel where one duty step is one microsecond of a 20 ms frame.
    pub fn microseconds() -> Self {
        Self::new(20_000)
    }
}

impl pwm::ErrorType for MockPwm {
    type Error = Fault;
}

impl pwm::SetDutyCycle for MockPwm {
    fn max_duty_cycle(&self) -> u16 {
        self.max_duty
    }

    fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Fault> {
        if self.fail.get() {
            return Err(Fault);
        }
        self.duty.set(duty);
        Ok(())
    }
}

/// Logs each requested pause instead of sleeping.
pub struct RecordingDelay {
    pub events: Events,
}

impl DelayNs for RecordingDelay {
    async fn delay_ns(&mut self, ns: u32) {
        self.events.borrow_mut().push(Event::DelayNs(ns));
    }

    async fn delay_ms(&mut self, ms: u32) {
        self.events.borrow_mut().push(Event::DelayMs(ms));
    }
}

pub type Output = heapless::String<4096>;

pub type TestController =
    Controller<ScriptedSwitch, Dial, Dial, MockPwm, MockPwm, VswrSimulator, Output>;

/// A controller on mock hardware plus handles to poke and inspect it.
pub struct Rig {
    pub controller: TestController,
    pub tx_dial: Rc<Cell<i32>>,
    pub ant_dial: Rc<Cell<i32>>,
    pub tx_duty: Rc<Cell<u16>>,
    pub ant_duty: Rc<Cell<u16>>,
    pub events: Events,
}

impl Rig {
    pub fn new(levels: &[bool]) -> Self {
        let events = Events::default();
        let switch = ScriptedSwitch::new(levels, Rc::clone(&events));
        let tx_dial = Dial::default();
        let ant_dial = Dial::default();
        let tx_pwm = MockPwm::microseconds();
        let ant_pwm = MockPwm::microseconds();
        let tx_duty = Rc::clone(&tx_pwm.duty);
        let ant_duty = Rc::clone(&ant_pwm.duty);

        let servos = ServoPair::new(
            Servo::new(tx_pwm, 500, 2500).expect("mock PWM accepts every duty"),
            Servo::new(ant_pwm, 500, 2500).expect("mock PWM accepts every duty"),
        );

        Self {
            controller: Controller::new(
                ModeSwitch::new(switch),
                tx_dial.clone(),
                ant_dial.clone(),
                servos,
                VswrSimulator::new(),
                Output::new(),
            ),
            tx_dial: tx_dial.0,
            ant_dial: ant_dial.0,
            tx_duty,
            ant_duty,
            events,
        }
    }

    pub fn delay(&self) -> RecordingDelay {
        RecordingDelay {
            events: Rc::clone(&self.events),
        }
    }

    pub fn lines(&self) -> Vec<&str> {
        self.controller.output().split_terminator("\r\n").collect()
    }
}
