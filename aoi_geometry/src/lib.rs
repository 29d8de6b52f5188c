//! Geometry model and ring analysis for simplifying area-of-interest (AOI) boundaries stored as GeoJSON.
//!
//! A GeoJSON document is parsed into a [`GeoCollection`], walked into either a flat
//! [`CoordinateSequence`] or a structural [`RingSet`], and then analysed: holes are detected and
//! filled, two overlapping rings are tested and merged, and the vertex count is reduced with a
//! concave hull. Results are returned as new collections; persisting them is left to a [`GeoSink`].

mod error;
pub mod geojson;
pub mod holes;
pub mod model;
pub mod overlap;
pub mod reduce;
pub mod rings;
pub mod sequence;
pub mod sink;

pub use error::*;
pub use geojson::*;
pub use holes::{fill_holes, has_holes};
pub use model::*;
pub use overlap::{check_overlap, fix_overlap};
pub use reduce::reduce_vertices;
pub use rings::{RingSet, extract_rings};
pub use sequence::*;
pub use sink::*;
