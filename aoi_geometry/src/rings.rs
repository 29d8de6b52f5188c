//! Ring boundaries carried structurally from the GeoJSON walk onward.
//!
//! [`RingSet::from_collection`] keeps every polygon with its rings as they appear in the
//! document, so hole and overlap analysis never has to rediscover ring boundaries by comparing
//! coordinate values. [`RingSet::from_sequence`] is the fallback for callers that only hold a
//! flat [`CoordinateSequence`].

use crate::{CoordinateSequence, Error, GeoCollection, Geometry, PolygonGeometry, Result, RingGeometry, segment_all};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RingSet {
	polygons: Vec<PolygonGeometry>,
}

impl RingSet {
	#[must_use]
	pub fn new() -> Self {
		Self { polygons: Vec::new() }
	}

	/// Collects the polygons of every `Polygon` and `MultiPolygon` feature in document order.
	///
	/// Points and line strings carry no rings. Every ring must be closed; an open ring fails with
	/// [`Error::UnterminatedRing`] whose `start` is the ring's index in the flattened sequence
	/// that [`crate::extract`] would produce for the same document.
	pub fn from_collection(collection: &GeoCollection) -> Result<Self> {
		let mut set = RingSet::new();
		let mut offset = 0;

		for geometry in collection.features.iter().map(|f| &f.geometry) {
			match geometry {
				Geometry::Point(_) | Geometry::LineString(_) => offset += 1,
				Geometry::Polygon(polygon) => offset = set.push_polygon(polygon.clone(), offset)?,
				Geometry::MultiPolygon(multi) => {
					for polygon in &multi.0 {
						offset = set.push_polygon(polygon.clone(), offset)?;
					}
				}
				Geometry::Unsupported(name) => log::debug!("no rings taken from unsupported geometry '{name}'"),
			}
		}

		log::debug!("found {} rings in {} polygons", set.ring_count(), set.polygons.len());
		Ok(set)
	}

	/// Rebuilds rings from a flat sequence by value-equality segmentation.
	///
	/// A flat list does not record which rings belong to the same polygon, so every ring becomes
	/// a polygon of its own.
	pub fn from_sequence(sequence: &CoordinateSequence) -> Result<Self> {
		Ok(Self {
			polygons: segment_all(sequence)?
				.into_iter()
				.map(|ring| PolygonGeometry(vec![ring]))
				.collect(),
		})
	}

	fn push_polygon(&mut self, polygon: PolygonGeometry, mut offset: usize) -> Result<usize> {
		for ring in &polygon.0 {
			if ring.is_empty() {
				return Err(Error::malformed(format!("empty ring at index {offset}")));
			}
			if !ring.is_closed() {
				return Err(Error::UnterminatedRing { start: offset });
			}
			offset += ring.len();
		}
		self.polygons.push(polygon);
		Ok(offset)
	}

	pub fn polygons(&self) -> &[PolygonGeometry] {
		&self.polygons
	}

	/// Every ring of every polygon in document order.
	pub fn rings(&self) -> impl Iterator<Item = &RingGeometry> {
		self.polygons.iter().flat_map(|p| p.0.iter())
	}

	pub fn ring_count(&self) -> usize {
		self.polygons.iter().map(|p| p.0.len()).sum()
	}

	pub fn is_empty(&self) -> bool {
		self.ring_count() == 0
	}
}

/// Shorthand for [`RingSet::from_collection`].
pub fn extract_rings(collection: &GeoCollection) -> Result<RingSet> {
	RingSet::from_collection(collection)
}

impl From<Vec<PolygonGeometry>> for RingSet {
	fn from(polygons: Vec<PolygonGeometry>) -> Self {
		Self { polygons }
	}
}
