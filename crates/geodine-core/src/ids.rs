//! Strongly typed restaurant identifier.
//!
//! `RestaurantId` wraps the catalog's external primary key (a `u64`, not a
//! dense index), so it deliberately has no `index()` helper.  It is
//! `Copy + Ord + Hash` so it can serve as a map key and as the deterministic
//! tie-breaker when two restaurants sit at the same distance.

use std::fmt;

/// External identifier of a restaurant in the catalog.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RestaurantId(pub u64);

impl fmt::Display for RestaurantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RestaurantId({})", self.0)
    }
}

impl From<u64> for RestaurantId {
    #[inline]
    fn from(raw: u64) -> Self {
        RestaurantId(raw)
    }
}
