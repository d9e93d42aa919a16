use crate::actuator::THRESHOLD_CM;
use crate::estimator::SPEED_OF_SOUND_CM_PER_US;

/// Trigger line held low before the pulse so the sensor sees a clean rising edge.
pub const TRIGGER_SETTLE_US: u32 = 2;
/// Minimum trigger width accepted by the HC-SR04.
pub const TRIGGER_PULSE_US: u32 = 10;
/// Upper bound on the whole echo wait, after which the reading is 0.
pub const ECHO_TIMEOUT_US: u32 = 1_000_000;
pub const CYCLE_DELAY_MS: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    pub threshold_cm: f64,
    pub speed_of_sound_cm_per_us: f64,
    pub trigger_settle_us: u32,
    pub trigger_pulse_us: u32,
    pub echo_timeout_us: u32,
    pub cycle_delay_ms: u32,
}

impl Config {
    #[must_use]
    pub fn threshold_cm(mut self, threshold_cm: f64) -> Self {
        self.threshold_cm = threshold_cm;
        self
    }

    #[must_use]
    pub fn speed_of_sound_cm_per_us(mut self, speed: f64) -> Self {
        self.speed_of_sound_cm_per_us = speed;
        self
    }

    #[must_use]
    pub fn trigger_settle_us(mut self, us: u32) -> Self {
        self.trigger_settle_us = us;
        self
    }

    #[must_use]
    pub fn trigger_pulse_us(mut self, us: u32) -> Self {
        self.trigger_pulse_us = us;
        self
    }

    #[must_use]
    pub fn echo_timeout_us(mut self, us: u32) -> Self {
        self.echo_timeout_us = us;
        self
    }

    #[must_use]
    pub fn cycle_delay_ms(mut self, ms: u32) -> Self {
        self.cycle_delay_ms = ms;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            threshold_cm: THRESHOLD_CM,
            speed_of_sound_cm_per_us: SPEED_OF_SOUND_CM_PER_US,
            trigger_settle_us: TRIGGER_SETTLE_US,
            trigger_pulse_us: TRIGGER_PULSE_US,
            echo_timeout_us: ECHO_TIMEOUT_US,
            cycle_delay_ms: CYCLE_DELAY_MS,
        }
    }
}
