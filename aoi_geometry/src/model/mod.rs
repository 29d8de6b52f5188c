//! The in-memory GeoJSON model: positions, rings, polygons and the geometry enum, plus the
//! feature and collection envelopes. Conversions to and from the `geo` backend live next to
//! each type.

mod collection;
mod coordinates;
mod feature;
mod geometry;
mod macros;
mod multi_polygon;
mod polygon;
mod ring;

pub use collection::*;
pub use coordinates::*;
pub use feature::*;
pub use geometry::*;
pub use multi_polygon::*;
pub use polygon::*;
pub use ring::*;
