//! `geodine-search` — the caller side of the distance engine.
//!
//! The engine deliberately returns one unranked distance per input point;
//! radius filtering and nearest-first ordering are policy, and they live
//! here.  [`rank`] is the standalone policy function; [`ProximitySearch`]
//! wires it together with a catalog and an engine into a one-call search.
//!
//! # Crate layout
//!
//! | Module     | Contents                                    |
//! |------------|---------------------------------------------|
//! | [`query`]  | `SearchRequest`                             |
//! | [`search`] | `rank`, `ProximitySearch`                   |
//! | [`error`]  | `SearchError`, `SearchResult<T>`            |

pub mod error;
pub mod query;
pub mod search;


pub use error::{SearchError, SearchResult};
pub use query::SearchRequest;
pub use search::{rank, ProximitySearch};
