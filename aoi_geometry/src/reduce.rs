use crate::{Coordinates, Error, GeoCollection, GeoFeature, Geometry, Result};
use geo::{BooleanOps, ConcaveHull, ConvexHull, MultiPoint, MultiPolygon, Point, Polygon};
use std::collections::HashSet;

/// Backend concavity used for a ratio of 0.5. The ratio scales around this value.
const CONCAVITY_AT_HALF_RATIO: f64 = 2.0;

/// Maps a ratio onto the backend's concavity. `None` selects the convex hull.
///
/// A ratio of 0 is the most concave hull, 1 and above the convex hull. Negative and non-finite
/// ratios are rejected.
fn concavity_for_ratio(ratio: f64) -> Result<Option<f64>> {
	if !ratio.is_finite() || ratio < 0.0 {
		return Err(Error::geometry(format!("concave hull ratio must be a number >= 0, got {ratio}")));
	}
	if ratio >= 1.0 {
		return Ok(None);
	}
	Ok(Some(CONCAVITY_AT_HALF_RATIO * ratio / (1.0 - ratio)))
}

/// The planar positions without duplicates, in first-seen order.
fn distinct_points(positions: &[Coordinates]) -> Vec<Point<f64>> {
	let mut seen = HashSet::with_capacity(positions.len());
	positions
		.iter()
		.filter(|c| seen.insert((c.x().to_bits(), c.y().to_bits())))
		.map(|c| Point::from(c.to_geo()))
		.collect()
}

fn hull_of(index: usize, geometry: &Geometry, concavity: Option<f64>) -> Result<Polygon<f64>> {
	let positions = geometry.positions();
	if let Some(c) = positions.iter().find(|c| !c.is_finite()) {
		return Err(Error::geometry(format!("feature {index} contains a non-finite position {c:?}")));
	}
	let points = MultiPoint::new(distinct_points(&positions));
	if points.0.len() < 3 {
		return Err(Error::geometry(format!(
			"feature {index} has {} distinct positions, a hull needs at least 3",
			points.0.len()
		)));
	}

	let hull = match concavity {
		Some(concavity) => points.concave_hull(concavity),
		None => points.convex_hull(),
	};
	log::trace!(
		"feature {index}: {} positions reduced to {}",
		positions.len(),
		hull.exterior().0.len()
	);
	Ok(hull)
}

/// Unions all hulls into one geometry, one hull at a time.
fn dissolve(hulls: Vec<Polygon<f64>>) -> MultiPolygon<f64> {
	hulls
		.into_iter()
		.fold(MultiPolygon::new(Vec::new()), |dissolved, hull| {
			dissolved.union(&MultiPolygon::new(vec![hull]))
		})
}

/// Replaces every feature by its concave hull and dissolves all hulls into one geometry.
///
/// `ratio` runs from 0 (most concave, most detail kept) to 1 (convex hull). The result is a
/// collection with a single feature: a `Polygon` when the hulls form one connected area, a
/// `MultiPolygon` otherwise. Features of unsupported geometry types are skipped.
pub fn reduce_vertices(collection: &GeoCollection, ratio: f64) -> Result<GeoCollection> {
	let concavity = concavity_for_ratio(ratio)?;

	let mut hulls = Vec::with_capacity(collection.features.len());
	for (index, feature) in collection.features.iter().enumerate() {
		if let Geometry::Unsupported(name) = &feature.geometry {
			log::warn!("skipping feature {index} with unsupported geometry type '{name}'");
			continue;
		}
		hulls.push(hull_of(index, &feature.geometry, concavity)?);
	}

	if hulls.is_empty() {
		return Err(Error::malformed("no features with a supported geometry to reduce"));
	}

	let hull_count = hulls.len();
	let dissolved = dissolve(hulls);
	if dissolved.0.is_empty() {
		return Err(Error::geometry("dissolving the hulls produced an empty geometry"));
	}

	log::debug!(
		"dissolved {hull_count} hulls into {} parts with ratio {ratio}",
		dissolved.0.len()
	);
	Ok(GeoCollection::from(vec![GeoFeature::new(Geometry::from(dissolved))]))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{ErrorKind, extract, parse_geojson};
	use approx::assert_relative_eq;
	use geo::Area;
	use rstest::rstest;

	/// A 10x10 square with a notch cut into its top edge and an extra vertex on every side.
	const NOTCHED: &str = r#"{"type":"FeatureCollection","features":[{"type":"Feature","properties":{},
		"geometry":{"type":"Polygon","coordinates":[[
			[0,0],[5,0],[10,0],[10,5],[10,10],[6,10],[5,6],[4,10],[0,10],[0,5],[0,0]
		]]}}]}"#;

	fn area_of(collection: &GeoCollection) -> f64 {
		match &collection.features[0].geometry {
			Geometry::Polygon(p) => p.to_geo().unwrap().unsigned_area(),
			Geometry::MultiPolygon(m) => m.to_geo().unwrap().unsigned_area(),
			other => panic!("unexpected geometry {other:?}"),
		}
	}

	#[rstest]
	#[case(0.0, Some(0.0))]
	#[case(0.5, Some(2.0))]
	#[case(0.75, Some(6.0))]
	#[case(1.0, None)]
	#[case(3.0, None)]
	fn ratio_maps_to_concavity(#[case] ratio: f64, #[case] expected: Option<f64>) {
		assert_eq!(concavity_for_ratio(ratio).unwrap(), expected);
	}

	#[rstest]
	#[case(-0.1)]
	#[case(f64::NAN)]
	#[case(f64::INFINITY)]
	fn invalid_ratios_are_rejected(#[case] ratio: f64) {
		let collection = parse_geojson(NOTCHED).unwrap();
		let error = reduce_vertices(&collection, ratio).unwrap_err();
		assert_eq!(error.kind(), ErrorKind::ExternalGeometryFailure);
	}

	#[test]
	fn convex_hull_fills_the_notch() {
		let reduced = reduce_vertices(&parse_geojson(NOTCHED).unwrap(), 1.0).unwrap();
		assert_relative_eq!(area_of(&reduced), 100.0, epsilon = 1e-9);
		assert!(extract(&reduced).vertex_count() < 10);
	}

	#[test]
	fn concave_hull_never_exceeds_the_convex_hull() {
		let collection = parse_geojson(NOTCHED).unwrap();
		let concave = reduce_vertices(&collection, 0.0).unwrap();
		let convex = reduce_vertices(&collection, 1.0).unwrap();
		assert!(area_of(&concave) <= area_of(&convex) + 1e-9);
		assert!(extract(&concave).vertex_count() <= extract(&collection).vertex_count());
	}

	#[test]
	fn overlapping_features_dissolve_into_one_polygon() {
		let collection = parse_geojson(
			r#"{"features":[
				{"geometry":{"type":"Polygon","coordinates":[[[0,0],[2,0],[2,2],[0,2],[0,0]]]}},
				{"geometry":{"type":"Polygon","coordinates":[[[1,1],[3,1],[3,3],[1,3],[1,1]]]}}
			]}"#,
		)
		.unwrap();

		let reduced = reduce_vertices(&collection, 1.0).unwrap();
		assert_eq!(reduced.features.len(), 1);
		assert_eq!(reduced.features[0].geometry.get_type_name(), "Polygon");
		assert_relative_eq!(area_of(&reduced), 7.0, epsilon = 1e-9);
	}

	#[test]
	fn disjoint_features_stay_separate() {
		let collection = parse_geojson(
			r#"{"features":[
				{"geometry":{"type":"Polygon","coordinates":[[[0,0],[1,0],[1,1],[0,1],[0,0]]]}},
				{"geometry":{"type":"MultiPolygon","coordinates":[[[[5,5],[6,5],[6,6],[5,6],[5,5]]]]}}
			]}"#,
		)
		.unwrap();

		let reduced = reduce_vertices(&collection, 1.0).unwrap();
		assert_eq!(reduced.features[0].geometry.get_type_name(), "MultiPolygon");
	}

	fn unit_square(x: f64, y: f64) -> Polygon<f64> {
		Polygon::new(
			geo::LineString::from(vec![(x, y), (x + 1.0, y), (x + 1.0, y + 1.0), (x, y + 1.0), (x, y)]),
			vec![],
		)
	}

	#[test]
	fn dissolve_merges_overlapping_hulls() {
		let dissolved = dissolve(vec![unit_square(0.0, 0.0), unit_square(5.0, 5.0), unit_square(0.5, 0.0)]);
		assert_eq!(dissolved.0.len(), 2);
		assert_relative_eq!(dissolved.unsigned_area(), 2.5, epsilon = 1e-9);
	}

	#[test]
	fn dissolve_nothing_is_empty() {
		assert!(dissolve(Vec::new()).0.is_empty());
	}

	#[test]
	fn degenerate_features_are_rejected() {
		let collection =
			parse_geojson(r#"{"features":[{"geometry":{"type":"LineString","coordinates":[[0,0],[1,1],[0,0]]}}]}"#)
				.unwrap();
		let error = reduce_vertices(&collection, 0.5).unwrap_err();
		assert_eq!(error.kind(), ErrorKind::ExternalGeometryFailure);
		assert_eq!(
			error.to_string(),
			"geometry operation failed: feature 0 has 2 distinct positions, a hull needs at least 3"
		);
	}

	#[test]
	fn unsupported_features_are_skipped() {
		let collection = parse_geojson(
			r#"{"features":[
				{"geometry":{"type":"MultiPoint","coordinates":[[0,0],[9,9]]}},
				{"geometry":{"type":"Polygon","coordinates":[[[0,0],[1,0],[1,1],[0,1],[0,0]]]}}
			]}"#,
		)
		.unwrap();
		let reduced = reduce_vertices(&collection, 1.0).unwrap();
		assert_relative_eq!(area_of(&reduced), 1.0, epsilon = 1e-9);
	}

	#[test]
	fn nothing_to_reduce() {
		let collection = parse_geojson(r#"{"features":[]}"#).unwrap();
		assert_eq!(
			reduce_vertices(&collection, 0.5).unwrap_err().kind(),
			ErrorKind::MalformedInput
		);
	}
}
