use crate::ephemeris::types::GeoLocation;
use async_trait::async_trait;
use thiserror::Error;

/// Errors from a geocoding provider. Zero matches is NOT an error; it is an
/// empty result vector.
#[derive(Error, Debug)]
pub enum GeocodeError {
    #[error("location service unreachable: {0}")]
    Unreachable(String),
    #[error("location service error: {0}")]
    Provider(String),
}

/// Free-text place name to candidate coordinates. Implementations may hit the
/// network; callers bound each search with a timeout.
#[async_trait]
pub trait LocationResolver: Send + Sync {
    async fn search(&self, query: &str) -> Result<Vec<GeoLocation>, GeocodeError>;
}
