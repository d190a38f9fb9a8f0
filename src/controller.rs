//! The sense-decide-actuate loop.

use core::fmt::Write;

use derive_more::derive::Display;
use embedded_hal::digital::InputPin;
use embedded_hal::pwm::SetDutyCycle;
use embedded_hal_async::delay::DelayNs;

use crate::log::{debug, info};
use crate::{
    AnalogInput, CYCLE_PERIOD_MS, Mode, ModeSwitch, Never, Result, ServoPair, VswrSource,
    scale_to_degrees,
};

/// What one control cycle read and commanded. Its `Display` form is the diagnostic line.
#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum CycleReport {
    #[display(
        "MANUAL: tx_dial={tx_dial}, tx_angle={tx_angle}, ant_dial={ant_dial}, ant_angle={ant_angle}"
    )]
    Manual {
        tx_dial: i32,
        tx_angle: u8,
        ant_dial: i32,
        ant_angle: u8,
    },
    #[display("AUTOMATED: vswr={vswr}, tx_angle={tx_angle}")]
    Automated { vswr: i32, tx_angle: u8 },
}

impl CycleReport {
    #[must_use]
    pub const fn mode(&self) -> Mode {
        match self {
            Self::Manual { .. } => Mode::Manual,
            Self::Automated { .. } => Mode::Automated,
        }
    }
}

/// Owns everything the loop touches.
///
/// That is the inputs, the servo pair, the VSWR source, the diagnostic output and the current
/// mode.
pub struct Controller<Switch, TxDial, AntDial, TxPwm, AntPwm, Vswr, Out> {
    switch: ModeSwitch<Switch>,
    tx_dial: TxDial,
    ant_dial: AntDial,
    servos: ServoPair<TxPwm, AntPwm>,
    vswr: Vswr,
    out: Out,
    mode: Mode,
}

impl<Switch, TxDial, AntDial, TxPwm, AntPwm, Vswr, Out>
    Controller<Switch, TxDial, AntDial, TxPwm, AntPwm, Vswr, Out>
where
    Switch: InputPin,
    TxDial: AnalogInput,
    AntDial: AnalogInput,
    TxPwm: SetDutyCycle,
    AntPwm: SetDutyCycle,
    Vswr: VswrSource,
    Out: Write,
{
    #[must_use]
    pub const fn new(
        switch: ModeSwitch<Switch>,
        tx_dial: TxDial,
        ant_dial: AntDial,
        servos: ServoPair<TxPwm, AntPwm>,
        vswr: Vswr,
        out: Out,
    ) -> Self {
        Self {
            switch,
            tx_dial,
            ant_dial,
            servos,
            vswr,
            out,
            mode: Mode::Manual,
        }
    }

    /// Run one cycle per [`CYCLE_PERIOD_MS`], forever.
    ///
    /// # Errors
    /// Returns the first error a cycle hits; that is the only way out of the loop.
    pub async fn run<D: DelayNs>(&mut self, delay: &mut D) -> Result<Never> {
        info!("controller running, period={}ms", CYCLE_PERIOD_MS);
        loop {
            self.step()?;
            delay.delay_ms(CYCLE_PERIOD_MS).await;
        }
    }

    /// Read the mode switch and run the matching handler once.
    ///
    /// The mode is re-read every cycle; nothing carries over from the previous one.
    ///
    /// # Errors
    /// Returns an error if the switch, a dial, the VSWR source or a servo channel fails.
    pub fn step(&mut self) -> Result<CycleReport> {
        let mode = self.switch.read_mode()?;
        if mode != self.mode {
            info!("mode {} -> {}", self.mode, mode);
            self.mode = mode;
        }
        match mode {
            Mode::Manual => self.manual_cycle(),
            Mode::Automated => self.automated_cycle(),
        }
    }

    /// Position each servo from its dial.
    ///
    /// # Errors
    /// Returns an error if a dial cannot be read or a servo channel rejects the write.
    pub fn manual_cycle(&mut self) -> Result<CycleReport> {
        let tx_dial = self.tx_dial.read_raw()?;
        let ant_dial = self.ant_dial.read_raw()?;

        let tx_angle = scale_to_degrees(tx_dial);
        let ant_angle = scale_to_degrees(ant_dial);

        self.servos.set_degrees_tx(i32::from(tx_angle))?;
        self.servos.set_degrees_ant(i32::from(ant_angle))?;

        Ok(self.emit(CycleReport::Manual {
            tx_dial,
            tx_angle,
            ant_dial,
            ant_angle,
        }))
    }

    /// Placeholder control law.
    ///
    /// The tx servo tracks the VSWR reading on the dial scale and the ant servo is parked at 0°.
    ///
    /// # Errors
    /// Returns an error if the VSWR source cannot be sampled or a servo channel rejects the
    /// write.
    pub fn automated_cycle(&mut self) -> Result<CycleReport> {
        let vswr = self.vswr.sample()?;
        let tx_angle = scale_to_degrees(vswr);

        self.servos.set_degrees_tx(i32::from(tx_angle))?;
        self.servos.set_degrees_ant(0)?;

        Ok(self.emit(CycleReport::Automated { vswr, tx_angle }))
    }

    /// Drive both servos to their 0° reference.
    ///
    /// # Errors
    /// Returns [`Error::Pwm`](crate::Error::Pwm) if a servo channel rejects the write.
    pub fn home(&mut self) -> Result<()> {
        info!("homing servos");
        self.servos.home()
    }

    /// Write the diagnostic line. A failed write drops the line; the cycle still stands.
    fn emit(&mut self, report: CycleReport) -> CycleReport {
        if write!(self.out, "{report}\r\n").is_err() {
            debug!("diagnostic line dropped");
        }
        report
    }

    /// Mode selected by the most recent cycle ([`Mode::Manual`] before the first).
    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub const fn servos(&self) -> &ServoPair<TxPwm, AntPwm> {
        &self.servos
    }

    #[must_use]
    pub const fn vswr(&self) -> &Vswr {
        &self.vswr
    }

    #[must_use]
    pub const fn output(&self) -> &Out {
        &self.out
    }
}
