//! Response interpretation for drinkmap.
//!
//! Splits a completed model answer into typed segments: a summary, the
//! "Gdje popiti" and "Gdje kupiti" place lists, and a trailing disclaimer.
//! Everything here is synchronous and pure. Malformed input never
//! produces an error, only fewer segments.

pub mod extract;
pub mod markers;
pub mod places;
pub mod references;

mod text;

pub use extract::extract;
pub use markers::{find_marker, locate_markers, Marker, MarkerKind};
pub use places::parse_places;
pub use references::resolve_map_link;
