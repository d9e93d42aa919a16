use embedded_hal::delay::DelayNs;

use crate::actuator::{self, Actuator, ActuatorCommand};
use crate::config::Config;
use crate::estimator::to_distance_cm;
use crate::report::DiagnosticsReporter;
use crate::sampler::EchoSource;
use crate::Result;

/// Outcome of a single measure, decide and actuate pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cycle {
    pub duration_us: u32,
    pub distance_cm: f64,
    pub command: ActuatorCommand,
}

pub struct ControlLoop<S, A, R, D> {
    source: S,
    actuator: A,
    reporter: R,
    delay: D,
    config: Config,
}

impl<S, A, R, D> ControlLoop<S, A, R, D>
where
    S: EchoSource,
    A: Actuator,
    R: DiagnosticsReporter,
    D: DelayNs,
{
    pub fn new(source: S, actuator: A, reporter: R, delay: D, config: Config) -> Self {
        Self {
            source,
            actuator,
            reporter,
            delay,
            config,
        }
    }

    /// Nothing is carried over from previous cycles, the command only depends
    /// on this cycle's reading.
    pub fn run_cycle(&mut self) -> Result<Cycle> {
        let duration_us = self.source.measure_echo_us()?;
        let distance_cm = to_distance_cm(duration_us, self.config.speed_of_sound_cm_per_us);
        let command = actuator::decide(distance_cm, self.config.threshold_cm);
        log::debug!("{duration_us}us -> {distance_cm:.2}cm -> {command}");

        let written = actuator::apply(&mut self.actuator, command);
        self.reporter.report(distance_cm);
        written?;

        Ok(Cycle {
            duration_us,
            distance_cm,
            command,
        })
    }

    pub fn run(&mut self) -> ! {
        log::info!(
            "Control loop started, threshold {}cm, every {}ms",
            self.config.threshold_cm,
            self.config.cycle_delay_ms
        );

        loop {
            self.step();
        }
    }

    /// One loop iteration: a failed cycle is logged, then the pacing delay
    /// runs either way.
    pub fn step(&mut self) -> Option<Cycle> {
        let cycle = self
            .run_cycle()
            .inspect_err(|e| log::warn!("Cycle skipped: {e}"))
            .ok();
        self.delay.delay_ms(self.config.cycle_delay_ms);

        cycle
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn release(self) -> (S, A, R, D) {
        (self.source, self.actuator, self.reporter, self.delay)
    }
}
