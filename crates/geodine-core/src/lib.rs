//! `geodine-core` — foundational types for the `geodine` proximity-search
//! library.
//!
//! This crate is a dependency of every other `geodine-*` crate.  It
//! intentionally has no `geodine-*` dependencies and minimal external ones
//! (only `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                              |
//! |--------------|-------------------------------------------------------|
//! | [`ids`]      | `RestaurantId`                                        |
//! | [`geo`]      | `GeoPoint` (validated), bounding-box margin helpers   |
//! | [`location`] | `RestaurantLocation`                                  |
//! | [`error`]    | `GeoError`, `GeoResult`                               |
//!
//! Distance computation itself lives in `geodine-distance`; this crate only
//! guarantees that a `GeoPoint` handed to a formula is already valid.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod geo;
pub mod ids;
pub mod location;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{GeoError, GeoResult};
pub use geo::{GeoPoint, EARTH_RADIUS_KM};
pub use ids::RestaurantId;
pub use location::RestaurantLocation;
