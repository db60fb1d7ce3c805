//! `geodine-catalog` — the restaurant location store.
//!
//! The catalog owns the `RestaurantLocation` records that the distance
//! engine reads.  It answers "which restaurants could possibly be within
//! this radius?" with a cheap R-tree envelope query so the engine's exact
//! formula pass only sees plausible candidates; it never computes a final
//! distance itself.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                  |
//! |------------|-----------------------------------------------------------|
//! | [`store`]  | `RestaurantCatalog` (R-tree + id index), `CatalogBuilder` |
//! | [`loader`] | CSV loading (`restaurant_id,lat,lon`)                     |
//! | [`error`]  | `CatalogError`, `CatalogResult<T>`                        |

pub mod error;
pub mod loader;
pub mod store;


pub use error::{CatalogError, CatalogResult};
pub use loader::{load_catalog_csv, load_catalog_reader};
pub use store::{CatalogBuilder, RestaurantCatalog};
