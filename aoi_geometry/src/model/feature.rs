use super::Geometry;
use crate::Result;
use serde_json::{Map, Value, json};

#[derive(Clone, Debug, PartialEq)]
pub struct GeoFeature {
	pub geometry: Geometry,
	pub properties: Map<String, Value>,
}

impl GeoFeature {
	/// Creates a feature with empty properties, the shape of every feature this crate writes.
	pub fn new(geometry: Geometry) -> Self {
		Self {
			geometry,
			properties: Map::new(),
		}
	}

	pub fn to_json(&self, precision: Option<u8>) -> Result<Value> {
		Ok(json!({
			"type": "Feature",
			"geometry": self.geometry.to_json(precision)?,
			"properties": Value::Object(self.properties.clone()),
		}))
	}
}

impl From<Geometry> for GeoFeature {
	fn from(geometry: Geometry) -> Self {
		Self::new(geometry)
	}
}
