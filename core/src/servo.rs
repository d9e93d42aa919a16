use derive_more::Display;
use esp_idf_svc::{
    hal::{
        gpio::OutputPin,
        ledc::{
            config::TimerConfig, LedcChannel, LedcDriver, LedcTimer, LedcTimerDriver, Resolution,
        },
        peripheral::Peripheral,
        units::Hertz,
    },
    sys::EspError,
};
use proximity_servo::{servo::ServoTiming, Actuator};

use crate::Result;

const FREQ_HZ: Hertz = Hertz(50);
const RESOLUTION: Resolution = Resolution::Bits11;

#[derive(Debug, Display)]
pub enum Error {
    #[display("Failed to create LedcTimerDriver. Error: {_0:?}")]
    CreateLedcTimerDriver(EspError),
    #[display("Failed to create LedcDriver. Error: {_0:?}")]
    CreateLedcDriver(EspError),
    #[display("Failed to set duty cycle with value {value}. Error: {error:?}")]
    SetDuty { value: u32, error: EspError },
}

pub struct ServoSG90<'a> {
    driver: LedcDriver<'a>,
    max_duty: u32,
    timing: ServoTiming,
}

impl<'a> ServoSG90<'a> {
    pub fn new<C: LedcChannel<SpeedMode = <T>::SpeedMode>, T: LedcTimer + 'a>(
        channel: impl Peripheral<P = C> + 'a,
        timer: impl Peripheral<P = T> + 'a,
        gpio: impl Peripheral<P = impl OutputPin> + 'a,
        timing: ServoTiming,
    ) -> Result<Self> {
        let timer_config = TimerConfig {
            frequency: FREQ_HZ,
            resolution: RESOLUTION,
        };
        let timer_driver =
            LedcTimerDriver::new(timer, &timer_config).map_err(Error::CreateLedcTimerDriver)?;
        let driver =
            LedcDriver::new(channel, timer_driver, gpio).map_err(Error::CreateLedcDriver)?;
        log::info!("LedcDriver created.");

        let max_duty = driver.get_max_duty() - 1;

        Ok(Self {
            driver,
            max_duty,
            timing,
        })
    }

    pub fn read_angle(&self) -> u8 {
        self.timing.angle(self.driver.get_duty(), self.max_duty)
    }
}

impl Actuator for ServoSG90<'_> {
    type Error = Error;

    fn write_angle(&mut self, angle_deg: u8) -> core::result::Result<(), Error> {
        let duty = self.timing.duty(angle_deg, self.max_duty);
        self.driver.set_duty(duty).map_err(|e| Error::SetDuty {
            value: duty,
            error: e,
        })
    }
}
