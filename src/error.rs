use crate::position::PositionError;
use crate::request::RequestError;
use crate::types::block::Block;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DarkSkyError {
    #[error(transparent)]
    Request(#[from] RequestError),

    #[error(transparent)]
    Position(#[from] PositionError),

    /// Raised synchronously at construction, never as a failed future.
    #[error("no Dark Sky api key set and no proxy url set")]
    MissingApiKeyOrProxy,

    /// A time-machine request without an instant. Raised before any network
    /// access.
    #[error("no time supplied for time machine request")]
    MissingTime,

    /// No coordinates are set and no position provider is configured, so
    /// deferred initialization cannot run. Raised before any network access.
    #[error("no position set and no position provider configured")]
    MissingPosition,

    /// The response did not contain a block the operation requested.
    #[error("response did not contain the '{0}' block")]
    MissingBlock(Block),
}
