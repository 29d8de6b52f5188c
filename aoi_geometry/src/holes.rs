use crate::{Error, GeoCollection, GeoFeature, Geometry, PolygonGeometry, Result, RingSet};

/// True iff some polygon carries more than one ring, i.e. at least one interior ring.
pub fn has_holes(rings: &RingSet) -> bool {
	rings.polygons().iter().any(|p| p.0.len() > 1)
}

/// Keeps only the first ring and wraps it as the single Polygon feature of a new collection.
///
/// Every later ring is dropped, the interior rings of the first polygon as well as the rings of
/// any further polygons. Running this on its own output returns an identical collection.
pub fn fill_holes(rings: &RingSet) -> Result<GeoCollection> {
	let first = rings
		.rings()
		.next()
		.ok_or_else(|| Error::malformed("no polygon ring to keep"))?;

	log::debug!(
		"keeping the first ring ({} positions), dropping {} more",
		first.len(),
		rings.ring_count() - 1
	);

	let polygon = PolygonGeometry(vec![first.clone()]);
	Ok(GeoCollection::from(vec![GeoFeature::new(Geometry::Polygon(polygon))]))
}
