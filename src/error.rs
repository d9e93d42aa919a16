use derive_more::From;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, From)]
pub enum Error {
    // -- Modules
    #[from]
    Sampler(crate::sampler::Error),
    #[from]
    Actuator(crate::actuator::Error),
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Sampler(e) => write!(f, "{e}"),
            Self::Actuator(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {}
