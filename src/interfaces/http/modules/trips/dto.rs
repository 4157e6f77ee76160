//! Trip query DTOs

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::Neighbor;

/// Query parameters for the nearby-cities lookup
#[derive(Debug, Deserialize, IntoParams)]
pub struct NearbyCitiesParams {
    /// Destination city to search around
    pub destination: String,
    /// Maximum distance from the destination, inclusive. Defaults to 250
    pub max_distance: Option<f64>,
}

/// A city within range of the requested destination
#[derive(Debug, Serialize, ToSchema)]
pub struct NearbyCityDto {
    pub city: String,
    pub distance: f64,
}

impl From<Neighbor> for NearbyCityDto {
    fn from(n: Neighbor) -> Self {
        Self {
            city: n.city,
            distance: n.distance,
        }
    }
}
