//! Reading GeoJSON into the crate's model types, [`crate::GeoCollection`], [`crate::GeoFeature`]
//! and [`crate::Geometry`].

mod parse;
mod read;

pub use parse::*;
pub use read::*;
