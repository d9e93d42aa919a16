use esp_idf_svc::hal::{
    delay::{Delay, FreeRtos},
    gpio::PinDriver,
    peripherals::Peripherals,
};
use proximity_servo::{
    servo::ServoTiming, Actuator, ActuatorCommand, Config, ControlLoop, RangeSampler,
    SerialReporter,
};

use clock::EspTimerClock;
use error::Result;
use servo::ServoSG90;

mod clock;
mod error;
mod servo;

fn main() -> Result<()> {
    esp_idf_svc::sys::link_patches();
    esp_idf_svc::log::EspLogger::initialize_default();

    let peripherals = Peripherals::take()?;
    let config = Config::default();

    // HC-SR04 runs at 5V, echo goes through a divider down to 3.3V
    let trigger = PinDriver::output(peripherals.pins.gpio2)?;
    let echo = PinDriver::input(peripherals.pins.gpio3)?;
    let sampler = RangeSampler::new(
        trigger,
        echo,
        Delay::new_default(),
        EspTimerClock,
        &config,
    );
    log::info!("Range sampler ready, trigger on gpio2, echo on gpio3.");

    let mut servo = ServoSG90::new(
        peripherals.ledc.channel0,
        peripherals.ledc.timer0,
        peripherals.pins.gpio6,
        ServoTiming::default(),
    )?;
    servo.write_angle(ActuatorCommand::Far.angle())?;
    log::info!("Servo parked at {}°.", servo.read_angle());

    let mut control = ControlLoop::new(sampler, servo, SerialReporter, FreeRtos, config);
    control.run()
}
