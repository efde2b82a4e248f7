//! Geographic position types and the geolocation collaborator seam.
//!
//! The facade only needs one capability from its environment: "resolve the
//! current coordinates". Implementations wrap whatever the host application
//! has available (a browser geolocation bridge, a GPS daemon, an IP lookup
//! service); tests inject stubs.

use async_trait::async_trait;
use thiserror::Error;

/// Represents a geographical coordinate using latitude and longitude.
///
/// Latitude is the first element (index 0), and longitude is the second (index 1).
/// Both values are represented as `f64` and are passed to the API uninterpreted,
/// without range validation.
///
/// # Examples
///
/// ```
/// use darksky::LatLon;
///
/// let berlin_center = LatLon(52.5200, 13.4050);
/// assert_eq!(berlin_center.0, 52.5200); // Latitude
/// assert_eq!(berlin_center.1, 13.4050); // Longitude
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLon(pub f64, pub f64);

#[derive(Debug, Error)]
pub enum PositionError {
    #[error("device position is unavailable: {0}")]
    Unavailable(String),

    #[error("access to the device position was denied")]
    Denied,
}

/// Resolves the device's current coordinates.
///
/// A failure here propagates as the failure of whichever retrieval operation
/// triggered the resolution.
#[async_trait]
pub trait PositionProvider: Send + Sync {
    async fn current_position(&self) -> Result<LatLon, PositionError>;
}
