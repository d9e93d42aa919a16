/// Pulse timing of a positional hobby servo driven at a fixed PWM period.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ServoTiming {
    pub min_pulse_us: f32,
    pub max_pulse_us: f32,
    pub period_us: f32,
    pub max_angle: f32,
}

impl Default for ServoTiming {
    /// SG90 at 50Hz.
    fn default() -> Self {
        Self {
            min_pulse_us: 500.,
            max_pulse_us: 2500.,
            period_us: 20_000.,
            max_angle: 180.,
        }
    }
}

impl ServoTiming {
    pub fn pulse_us(&self, angle: u8) -> f32 {
        let angle = f32::from(angle).min(self.max_angle);

        (angle / self.max_angle) * (self.max_pulse_us - self.min_pulse_us) + self.min_pulse_us
    }

    pub fn duty(&self, angle: u8, max_duty: u32) -> u32 {
        (self.pulse_us(angle) * max_duty as f32 / self.period_us) as u32
    }

    /// Inverse of [`ServoTiming::duty`], up to the PWM resolution.
    pub fn angle(&self, duty: u32, max_duty: u32) -> u8 {
        if max_duty == 0 {
            return 0;
        }
        let pulse_us = duty as f32 * self.period_us / max_duty as f32;
        let angle = (pulse_us - self.min_pulse_us) / (self.max_pulse_us - self.min_pulse_us)
            * self.max_angle;

        angle.round().clamp(0., self.max_angle) as u8
    }
}
