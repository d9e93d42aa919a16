//! Ultrasonic proximity switch for a hobby servo.
//!
//! Every cycle an HC-SR04 style sensor is triggered, the echo width is
//! converted into centimeters and the servo is sent to one of two positions:
//! 180° when something is within the threshold, 0° otherwise.
//!
//! The crate only depends on `embedded-hal` traits, the board specific
//! wiring lives in the firmware crate under `core/`.

mod error;

pub mod actuator;
pub mod config;
pub mod control;
pub mod estimator;
pub mod report;
pub mod sampler;
pub mod servo;

pub use actuator::{decide, Actuator, ActuatorCommand};
pub use config::Config;
pub use control::{ControlLoop, Cycle};
pub use error::{Error, Result};
pub use estimator::to_distance_cm;
pub use report::{DiagnosticsReporter, LogReporter, SerialReporter};
pub use sampler::{EchoSource, MicrosClock, RangeSampler};
