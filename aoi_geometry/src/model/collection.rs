use super::GeoFeature;
use crate::{Result, geojson::parse_geojson};
use serde_json::{Value, json};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GeoCollection {
	pub features: Vec<GeoFeature>,
}

impl GeoCollection {
	pub fn from(features: Vec<GeoFeature>) -> Self {
		Self { features }
	}

	pub fn from_json_str(json_str: &str) -> Result<Self> {
		parse_geojson(json_str)
	}

	pub fn to_json(&self, precision: Option<u8>) -> Result<Value> {
		let features = self
			.features
			.iter()
			.map(|f| f.to_json(precision))
			.collect::<Result<Vec<_>>>()?;
		Ok(json!({
			"type": "FeatureCollection",
			"features": features,
		}))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{Coordinates, Geometry};
	use pretty_assertions::assert_eq;

	#[test]
	fn to_json_writes_empty_properties() {
		let collection = GeoCollection::from(vec![GeoFeature::new(Geometry::Point(Coordinates::new(1.0, 2.0)))]);
		assert_eq!(
			collection.to_json(None).unwrap().to_string(),
			r#"{"features":[{"geometry":{"coordinates":[1.0,2.0],"type":"Point"},"properties":{},"type":"Feature"}],"type":"FeatureCollection"}"#
		);
	}

	#[test]
	fn parses_what_it_writes() {
		let collection = GeoCollection::from(vec![GeoFeature::new(Geometry::new_polygon(vec![vec![
			[0.0, 0.0],
			[1.0, 0.0],
			[1.0, 1.0],
			[0.0, 0.0],
		]]))]);
		let json = collection.to_json(None).unwrap().to_string();
		assert_eq!(GeoCollection::from_json_str(&json).unwrap(), collection);
	}
}
