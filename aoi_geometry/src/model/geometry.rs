use super::*;
use crate::{Error, Result};
use serde_json::{Value, json};
use std::fmt::Debug;

/// The geometry kinds an AOI document may contain.
///
/// Every other GeoJSON geometry type is kept as [`Geometry::Unsupported`] with its type name, so
/// callers decide explicitly how to treat it.
#[derive(Clone, PartialEq)]
pub enum Geometry {
	Point(Coordinates),
	LineString(Vec<Coordinates>),
	Polygon(PolygonGeometry),
	MultiPolygon(MultiPolygonGeometry),
	Unsupported(String),
}

impl Geometry {
	pub fn new_polygon<T>(value: Vec<T>) -> Self
	where
		RingGeometry: From<T>,
	{
		Self::Polygon(PolygonGeometry::from(value))
	}

	pub fn new_multi_polygon<T>(value: Vec<T>) -> Self
	where
		PolygonGeometry: From<T>,
	{
		Self::MultiPolygon(MultiPolygonGeometry::from(value))
	}

	pub fn get_type_name(&self) -> &str {
		match self {
			Geometry::Point(_) => "Point",
			Geometry::LineString(_) => "LineString",
			Geometry::Polygon(_) => "Polygon",
			Geometry::MultiPolygon(_) => "MultiPolygon",
			Geometry::Unsupported(name) => name,
		}
	}

	/// All positions of the geometry in document order, closing duplicates included.
	pub fn positions(&self) -> Vec<Coordinates> {
		match self {
			Geometry::Point(c) => vec![*c],
			Geometry::LineString(line) => line.clone(),
			Geometry::Polygon(polygon) => polygon.0.iter().flat_map(|r| r.0.iter().copied()).collect(),
			Geometry::MultiPolygon(multi) => multi
				.0
				.iter()
				.flat_map(|p| p.0.iter())
				.flat_map(|r| r.0.iter().copied())
				.collect(),
			Geometry::Unsupported(_) => Vec::new(),
		}
	}

	pub fn to_coord_json(&self, precision: Option<u8>) -> Result<Value> {
		Ok(match self {
			Geometry::Point(c) => c.to_json(precision),
			Geometry::LineString(line) => Value::from(line.iter().map(|c| c.to_json(precision)).collect::<Vec<_>>()),
			Geometry::Polygon(polygon) => polygon.to_coord_json(precision),
			Geometry::MultiPolygon(multi) => multi.to_coord_json(precision),
			Geometry::Unsupported(name) => {
				return Err(Error::malformed(format!("cannot serialize unsupported geometry type '{name}'")));
			}
		})
	}

	pub fn to_json(&self, precision: Option<u8>) -> Result<Value> {
		Ok(json!({
			"type": self.get_type_name(),
			"coordinates": self.to_coord_json(precision)?,
		}))
	}
}

/// A backend result becomes a `Polygon` when it has exactly one part, a `MultiPolygon` otherwise.
impl From<geo::MultiPolygon<f64>> for Geometry {
	fn from(geometry: geo::MultiPolygon<f64>) -> Self {
		let mut multi = MultiPolygonGeometry::from(geometry);
		match multi.0.len() {
			1 => Geometry::Polygon(multi.0.remove(0)),
			_ => Geometry::MultiPolygon(multi),
		}
	}
}

impl From<geo::Polygon<f64>> for Geometry {
	fn from(geometry: geo::Polygon<f64>) -> Self {
		Geometry::Polygon(PolygonGeometry::from(geometry))
	}
}

impl Debug for Geometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let inner: &dyn Debug = match self {
			Geometry::Point(g) => g,
			Geometry::LineString(g) => g,
			Geometry::Polygon(g) => g,
			Geometry::MultiPolygon(g) => g,
			Geometry::Unsupported(_) => &"..",
		};
		f.debug_tuple(self.get_type_name()).field(inner).finish()
	}
}
