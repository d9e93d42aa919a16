use derive_more::Display;

use crate::Result;

pub const THRESHOLD_CM: f64 = 15.;

pub const NEAR_ANGLE_DEG: u8 = 180;
pub const FAR_ANGLE_DEG: u8 = 0;

#[derive(Debug, Display)]
pub enum Error {
    #[display("Failed to move actuator to {angle}°. Error: {cause}")]
    Write { angle: u8, cause: String },
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum ActuatorCommand {
    #[display("near")]
    Near,
    #[display("far")]
    Far,
}

impl ActuatorCommand {
    pub const fn angle(self) -> u8 {
        match self {
            Self::Near => NEAR_ANGLE_DEG,
            Self::Far => FAR_ANGLE_DEG,
        }
    }
}

/// Anything that can be told to hold an angle between 0° and 180°.
pub trait Actuator {
    type Error: core::fmt::Debug;

    fn write_angle(&mut self, angle_deg: u8) -> core::result::Result<(), Self::Error>;
}

impl<A: Actuator + ?Sized> Actuator for &mut A {
    type Error = A::Error;

    fn write_angle(&mut self, angle_deg: u8) -> core::result::Result<(), Self::Error> {
        (**self).write_angle(angle_deg)
    }
}

/// Objects at or below the threshold are near. There is no hysteresis band,
/// a reading jittering around the threshold flips the command every cycle.
pub fn decide(distance_cm: f64, threshold_cm: f64) -> ActuatorCommand {
    if distance_cm <= threshold_cm {
        ActuatorCommand::Near
    } else {
        ActuatorCommand::Far
    }
}

/// Sends a single write, no retry and no read back.
pub fn apply<A: Actuator>(actuator: &mut A, command: ActuatorCommand) -> Result<()> {
    let angle = command.angle();
    actuator.write_angle(angle).map_err(|e| Error::Write {
        angle,
        cause: format!("{e:?}"),
    })?;

    Ok(())
}
