//! A restaurant's geographic placement — the read-only input record the
//! distance engine consumes.  Owned by the catalog; the engine never mutates
//! or stores it.

use crate::{GeoPoint, RestaurantId};

/// A restaurant paired with its position.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RestaurantLocation {
    pub id: RestaurantId,
    pub pos: GeoPoint,
}

impl RestaurantLocation {
    #[inline]
    pub fn new(id: RestaurantId, pos: GeoPoint) -> Self {
        Self { id, pos }
    }
}
