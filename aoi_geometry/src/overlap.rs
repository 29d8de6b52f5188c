use crate::{Error, GeoCollection, GeoFeature, Geometry, PolygonGeometry, Result, RingSet};
use geo::{BooleanOps, Intersects, Polygon};

/// Builds one backend polygon from each of the two rings. Any other ring count is rejected.
fn split_two(rings: &RingSet) -> Result<(Polygon<f64>, Polygon<f64>)> {
	let list: Vec<_> = rings.rings().collect();
	let &[first, second] = list.as_slice() else {
		return Err(Error::UnexpectedRingCount { found: list.len() });
	};

	let to_polygon = |ring| PolygonGeometry(vec![ring]).to_geo();
	Ok((to_polygon(first.clone())?, to_polygon(second.clone())?))
}

/// Tests whether the polygons formed by the two rings intersect.
///
/// The predicate is the backend's `Intersects`, which also reports polygons that merely touch.
pub fn check_overlap(rings: &RingSet) -> Result<bool> {
	let (first, second) = split_two(rings)?;
	let overlap = first.intersects(&second);
	log::debug!("rings overlap: {overlap}");
	Ok(overlap)
}

/// Merges the two rings into their topological union, emitted as the single feature of a new
/// collection: a `Polygon` when the union is connected, a `MultiPolygon` otherwise.
pub fn fix_overlap(rings: &RingSet) -> Result<GeoCollection> {
	let (first, second) = split_two(rings)?;
	let union = first.union(&second);
	if union.0.is_empty() {
		return Err(Error::geometry("union of the two rings is empty"));
	}

	log::debug!("union has {} parts", union.0.len());
	Ok(GeoCollection::from(vec![GeoFeature::new(Geometry::from(union))]))
}
