use derive_more::{Display, From};
use esp_idf_svc::sys::EspError;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Display, From)]
pub enum Error {
    // -- Modules
    #[display("Servo: {_0}")]
    #[from]
    Servo(crate::servo::Error),
    #[display("Control loop: {_0}")]
    #[from]
    Control(proximity_servo::Error),

    // -- Externals
    #[display("ESP-IDF: {_0}")]
    #[from]
    Esp(EspError),
}
