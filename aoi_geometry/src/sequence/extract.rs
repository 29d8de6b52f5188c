use super::{CoordinateSequence, SequenceEntry};
use crate::{GeoCollection, Geometry, PolygonGeometry};

/// Flattens every feature of `collection` into one [`CoordinateSequence`] in document order.
///
/// - `Point` and `LineString` contribute a single entry each, the raw position or the whole line.
/// - `Polygon` contributes every vertex of every ring, exterior first.
/// - `MultiPolygon` contributes every vertex of every ring of every polygon.
/// - Unsupported geometries contribute nothing.
///
/// Positions are neither deduplicated nor reordered.
pub fn extract(collection: &GeoCollection) -> CoordinateSequence {
	let mut sequence = CoordinateSequence::new();

	for geometry in collection.features.iter().map(|f| &f.geometry) {
		match geometry {
			Geometry::Point(c) => sequence.push(SequenceEntry::Position(*c)),
			Geometry::LineString(line) => sequence.push(SequenceEntry::Line(line.clone())),
			Geometry::Polygon(polygon) => push_polygon(&mut sequence, polygon),
			Geometry::MultiPolygon(multi) => {
				for polygon in &multi.0 {
					push_polygon(&mut sequence, polygon);
				}
			}
			Geometry::Unsupported(name) => log::debug!("skipping unsupported geometry type '{name}'"),
		}
	}

	log::trace!(
		"extracted {} entries from {} features",
		sequence.len(),
		collection.features.len()
	);
	sequence
}

fn push_polygon(sequence: &mut CoordinateSequence, polygon: &PolygonGeometry) {
	for ring in &polygon.0 {
		sequence.0.extend(ring.0.iter().copied().map(SequenceEntry::Position));
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{Coordinates, parse_geojson};
	use pretty_assertions::assert_eq;

	fn extract_str(json: &str) -> CoordinateSequence {
		extract(&parse_geojson(json).unwrap())
	}

	#[test]
	fn point_and_line_are_single_entries() {
		let sequence = extract_str(
			r#"{"type":"FeatureCollection","features":[
				{"type":"Feature","properties":{},"geometry":{"type":"Point","coordinates":[1,2]}},
				{"type":"Feature","properties":{},"geometry":{"type":"LineString","coordinates":[[0,0],[1,1],[2,0]]}}
			]}"#,
		);

		assert_eq!(
			sequence.0,
			vec![
				SequenceEntry::Position(Coordinates::new(1.0, 2.0)),
				SequenceEntry::Line(vec![
					Coordinates::new(0.0, 0.0),
					Coordinates::new(1.0, 1.0),
					Coordinates::new(2.0, 0.0)
				]),
			]
		);
	}

	#[test]
	fn polygon_rings_are_flattened_in_order() {
		let sequence = extract_str(
			r#"{"features":[{"geometry":{"type":"Polygon","coordinates":[
				[[0,0],[4,0],[4,4],[0,0]],
				[[1,1],[2,1],[2,2],[1,1]]
			]}}]}"#,
		);

		assert_eq!(sequence, CoordinateSequence::from(&[
			[0, 0], [4, 0], [4, 4], [0, 0],
			[1, 1], [2, 1], [2, 2], [1, 1],
		]));
	}

	#[test]
	fn multipolygons_follow_features_in_array_order() {
		let sequence = extract_str(
			r#"{"features":[
				{"geometry":{"type":"MultiPolygon","coordinates":[
					[[[0,0],[1,0],[1,1],[0,0]]],
					[[[5,5],[6,5],[6,6],[5,5]]]
				]}},
				{"geometry":{"type":"Point","coordinates":[9,9]}}
			]}"#,
		);

		assert_eq!(sequence.len(), 9);
		assert_eq!(sequence.position(4).unwrap(), Coordinates::new(5.0, 5.0));
		assert_eq!(sequence.position(8).unwrap(), Coordinates::new(9.0, 9.0));
	}

	#[test]
	fn unsupported_geometries_are_skipped() {
		let sequence = extract_str(
			r#"{"features":[
				{"geometry":{"type":"MultiLineString","coordinates":[[[0,0],[1,1]]]}},
				{"geometry":{"type":"Point","coordinates":[3,4]}}
			]}"#,
		);
		assert_eq!(sequence, CoordinateSequence::from(&[[3, 4]]));
	}

	#[test]
	fn single_ring_vertex_count() {
		let sequence = extract_str(
			r#"{"features":[{"geometry":{"type":"Polygon","coordinates":[[[0,0],[2,0],[2,2],[0,2],[0,0]]]}}]}"#,
		);
		assert_eq!(sequence.vertex_count(), 4);
	}
}
