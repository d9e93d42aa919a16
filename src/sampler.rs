use derive_more::Display;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{Error as _, ErrorKind, InputPin, OutputPin, PinState};

use crate::config::Config;
use crate::Result;

#[derive(Debug, Display)]
pub enum Error {
    #[display("Failed to drive trigger line {state:?}. Error: {kind:?}")]
    Trigger { state: PinState, kind: ErrorKind },
    #[display("Failed to read echo line. Error: {_0:?}")]
    Echo(ErrorKind),
}

/// Free running microsecond counter.
pub trait MicrosClock {
    fn now_us(&self) -> u64;
}

impl<C: MicrosClock + ?Sized> MicrosClock for &C {
    fn now_us(&self) -> u64 {
        (**self).now_us()
    }
}

/// Source of echo round-trip times, in microseconds. A reading of 0 means no
/// echo came back in time.
pub trait EchoSource {
    fn measure_echo_us(&mut self) -> Result<u32>;
}

/// HC-SR04 style ranging over a trigger output and an echo input.
///
/// Measuring blocks the caller until the echo pulse is over or the timeout
/// expires, up to `echo_timeout_us`.
pub struct RangeSampler<T, E, D, C> {
    trigger: T,
    echo: E,
    delay: D,
    clock: C,
    settle_us: u32,
    pulse_us: u32,
    timeout_us: u32,
}

impl<T, E, D, C> RangeSampler<T, E, D, C>
where
    T: OutputPin,
    E: InputPin,
    D: DelayNs,
    C: MicrosClock,
{
    pub fn new(trigger: T, echo: E, delay: D, clock: C, config: &Config) -> Self {
        Self {
            trigger,
            echo,
            delay,
            clock,
            settle_us: config.trigger_settle_us,
            pulse_us: config.trigger_pulse_us,
            timeout_us: config.echo_timeout_us,
        }
    }

    /// LOW for the settle time, HIGH for the pulse width, then back to LOW.
    pub fn emit_trigger(&mut self) -> Result<()> {
        self.drive(PinState::Low)?;
        self.delay.delay_us(self.settle_us);
        self.drive(PinState::High)?;
        self.delay.delay_us(self.pulse_us);
        self.drive(PinState::Low)?;

        Ok(())
    }

    /// Width of the next high pulse on the echo line.
    ///
    /// A pulse already in progress is skipped, its width would be partial.
    /// Returns 0 when the timeout runs out at any stage.
    pub fn pulse_in(&mut self) -> Result<u32> {
        let start = self.clock.now_us();

        if self.wait_for(false, start)?.is_none() {
            return Ok(self.timed_out("previous pulse to end"));
        }
        let Some(rise) = self.wait_for(true, start)? else {
            return Ok(self.timed_out("rising edge"));
        };
        let Some(fall) = self.wait_for(false, start)? else {
            return Ok(self.timed_out("falling edge"));
        };

        Ok(u32::try_from(fall - rise).unwrap_or(u32::MAX))
    }

    pub fn release(self) -> (T, E, D, C) {
        (self.trigger, self.echo, self.delay, self.clock)
    }

    fn drive(&mut self, state: PinState) -> Result<()> {
        self.trigger.set_state(state).map_err(|e| Error::Trigger {
            state,
            kind: e.kind(),
        })?;

        Ok(())
    }

    fn wait_for(&mut self, high: bool, start: u64) -> Result<Option<u64>> {
        let timeout = u64::from(self.timeout_us);

        loop {
            let now = self.clock.now_us();
            let level = self.echo.is_high().map_err(|e| Error::Echo(e.kind()))?;
            if level == high {
                return Ok(Some(now));
            }
            if now.saturating_sub(start) >= timeout {
                return Ok(None);
            }
        }
    }

    fn timed_out(&self, stage: &str) -> u32 {
        log::debug!("No {stage} within {}us", self.timeout_us);
        0
    }
}

impl<T, E, D, C> EchoSource for RangeSampler<T, E, D, C>
where
    T: OutputPin,
    E: InputPin,
    D: DelayNs,
    C: MicrosClock,
{
    fn measure_echo_us(&mut self) -> Result<u32> {
        self.emit_trigger()?;
        self.pulse_in()
    }
}
