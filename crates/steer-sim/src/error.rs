use steer_core::SteerError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("unknown scenario `{0}` (expected one of: seek, avoid, avoid-vehicles, seek-avoid)")]
    UnknownScenario(String),

    #[error("vehicle id space exhausted after {0} spawns")]
    IdsExhausted(u32),

    #[error(transparent)]
    Core(#[from] SteerError),
}

pub type SimResult<T> = Result<T, SimError>;
