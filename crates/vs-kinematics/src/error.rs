use rand_distr::NormalError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum KinematicsError {
    #[error("invalid speed noise (sigma = {sigma}): {source}")]
    SpeedNoise {
        sigma:  f64,
        source: NormalError,
    },
}

pub type KinematicsResult<T> = Result<T, KinematicsError>;
