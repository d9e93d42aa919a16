use std::cell::{Cell, RefCell};
use std::convert::Infallible;
use std::rc::Rc;

use embedded_hal::digital::{ErrorType, InputPin};
use proximity_servo::{Actuator, DiagnosticsReporter, MicrosClock};

/// Moves forward one microsecond on every read.
#[derive(Clone, Default)]
pub struct SteppingClock(Rc<Cell<u64>>);

impl SteppingClock {
    pub fn now(&self) -> u64 {
        self.0.get()
    }
}

impl MicrosClock for SteppingClock {
    fn now_us(&self) -> u64 {
        let now = self.0.get() + 1;
        self.0.set(now);
        now
    }
}

/// Answers every trigger with the next queued echo width. A width of 0 never
/// raises the line.
pub struct EchoResponder {
    clock: SteppingClock,
    widths: Vec<u64>,
    current: Option<(u64, u64)>,
}

const ECHO_LATENCY_US: u64 = 450;

impl EchoResponder {
    pub fn new(clock: SteppingClock, widths: &[u64]) -> Self {
        Self {
            clock,
            widths: widths.iter().rev().copied().collect(),
            current: None,
        }
    }
}

impl ErrorType for EchoResponder {
    type Error = Infallible;
}

impl InputPin for EchoResponder {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        let now = self.clock.now();
        match self.current {
            Some((_, end)) if now >= end => self.current = None,
            _ => {}
        }
        if self.current.is_none() {
            if let Some(width) = self.widths.pop() {
                let start = now + ECHO_LATENCY_US;
                let end = if width == 0 { start } else { start + width };
                self.current = Some((start, end));
            }
        }

        Ok(matches!(self.current, Some((start, end)) if start <= now && now < end))
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        self.is_high().map(|high| !high)
    }
}

#[derive(Clone, Default)]
pub struct ServoLog(pub Rc<RefCell<Vec<u8>>>);

impl Actuator for ServoLog {
    type Error = Infallible;

    fn write_angle(&mut self, angle_deg: u8) -> Result<(), Self::Error> {
        self.0.borrow_mut().push(angle_deg);
        Ok(())
    }
}

#[derive(Default)]
pub struct Readings(pub Vec<f64>);

impl DiagnosticsReporter for Readings {
    fn report(&mut self, distance_cm: f64) {
        self.0.push(distance_cm);
    }
}
