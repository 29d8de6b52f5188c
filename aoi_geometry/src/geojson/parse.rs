use crate::{
	Coordinates, Error, GeoCollection, GeoFeature, Geometry, MultiPolygonGeometry, PolygonGeometry, Result, RingGeometry,
};
use serde_json::{Map, Value};

pub fn parse_geojson(json: &str) -> Result<GeoCollection> {
	let value: Value = serde_json::from_str(json)?;
	parse_geojson_collection(&value)
}

/// Parses a FeatureCollection. Only the structure needed for AOI analysis is checked: a
/// `features` array whose entries each carry a `geometry` with `type` and `coordinates`.
pub fn parse_geojson_collection(value: &Value) -> Result<GeoCollection> {
	let object = as_object(value, "document")?;
	let features = object
		.get("features")
		.ok_or_else(|| Error::malformed("document is missing 'features'"))?
		.as_array()
		.ok_or_else(|| Error::malformed("'features' must be an array"))?;

	let features = features
		.iter()
		.enumerate()
		.map(|(index, feature)| {
			parse_geojson_feature(feature).map_err(|e| match e {
				Error::MalformedInput(msg) => Error::malformed(format!("feature {index}: {msg}")),
				other => other,
			})
		})
		.collect::<Result<Vec<_>>>()?;

	Ok(GeoCollection { features })
}

pub fn parse_geojson_feature(value: &Value) -> Result<GeoFeature> {
	let object = as_object(value, "feature")?;
	let geometry = object
		.get("geometry")
		.ok_or_else(|| Error::malformed("feature is missing 'geometry'"))?;

	let properties = match object.get("properties") {
		Some(Value::Object(map)) => map.clone(),
		_ => Map::new(),
	};

	Ok(GeoFeature {
		geometry: parse_geojson_geometry(geometry)?,
		properties,
	})
}

pub fn parse_geojson_geometry(value: &Value) -> Result<Geometry> {
	let object = as_object(value, "geometry")?;
	let geometry_type = object
		.get("type")
		.ok_or_else(|| Error::malformed("geometry must have a type"))?
		.as_str()
		.ok_or_else(|| Error::malformed("geometry type must be a string"))?;
	let coordinates = object
		.get("coordinates")
		.ok_or_else(|| Error::malformed("geometry must have coordinates"))?;

	Ok(match geometry_type {
		"Point" => Geometry::Point(parse_position(coordinates)?),
		"LineString" => Geometry::LineString(parse_positions(coordinates)?),
		"Polygon" => Geometry::Polygon(parse_polygon(coordinates)?),
		"MultiPolygon" => Geometry::MultiPolygon(MultiPolygonGeometry(
			as_array(coordinates, "multipolygon")?
				.iter()
				.map(parse_polygon)
				.collect::<Result<_>>()?,
		)),
		other => Geometry::Unsupported(other.to_string()),
	})
}

fn parse_polygon(value: &Value) -> Result<PolygonGeometry> {
	as_array(value, "polygon")?
		.iter()
		.map(|ring| parse_positions(ring).map(RingGeometry))
		.collect::<Result<_>>()
		.map(PolygonGeometry)
}

fn parse_positions(value: &Value) -> Result<Vec<Coordinates>> {
	as_array(value, "position list")?.iter().map(parse_position).collect()
}

fn parse_position(value: &Value) -> Result<Coordinates> {
	let values = as_array(value, "position")?
		.iter()
		.map(|v| {
			v.as_f64()
				.ok_or_else(|| Error::malformed(format!("position values must be numbers, got {v}")))
		})
		.collect::<Result<Vec<f64>>>()?;

	match values.as_slice() {
		&[x, y] => Ok(Coordinates::new(x, y)),
		&[x, y, z] => Ok(Coordinates::new_3d(x, y, z)),
		_ => Err(Error::malformed(format!(
			"positions must have two or three values, got {}",
			values.len()
		))),
	}
}

fn as_object<'a>(value: &'a Value, name: &str) -> Result<&'a Map<String, Value>> {
	value
		.as_object()
		.ok_or_else(|| Error::malformed(format!("{name} must be an object")))
}

fn as_array<'a>(value: &'a Value, name: &str) -> Result<&'a Vec<Value>> {
	value
		.as_array()
		.ok_or_else(|| Error::malformed(format!("{name} must be an array")))
}
