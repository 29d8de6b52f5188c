use super::RingGeometry;
use crate::{Error, Result};
use serde_json::Value;
use std::fmt::Debug;

/// A polygon as an ordered list of rings: the exterior first, then any holes.
#[derive(Clone, Default, PartialEq)]
pub struct PolygonGeometry(pub Vec<RingGeometry>);

impl PolygonGeometry {
	#[must_use]
	pub fn new() -> Self {
		Self(Vec::new())
	}

	pub fn exterior(&self) -> Option<&RingGeometry> {
		self.0.first()
	}

	/// The interior rings. Empty for a hole-free polygon.
	pub fn interiors(&self) -> &[RingGeometry] {
		self.0.get(1..).unwrap_or_default()
	}

	pub fn rings(&self) -> &[RingGeometry] {
		&self.0
	}

	pub fn push(&mut self, ring: RingGeometry) {
		self.0.push(ring);
	}

	pub fn verify(&self) -> Result<()> {
		if self.0.is_empty() {
			return Err(Error::malformed("polygon must have at least one ring"));
		}
		for ring in &self.0 {
			ring.verify()?;
		}
		Ok(())
	}

	pub fn to_coord_json(&self, precision: Option<u8>) -> Value {
		Value::from(self.0.iter().map(|r| r.to_coord_json(precision)).collect::<Vec<_>>())
	}

	pub fn to_geo(&self) -> Result<geo::Polygon<f64>> {
		let (exterior, interiors) = self
			.0
			.split_first()
			.ok_or_else(|| Error::geometry("polygon has no rings"))?;
		Ok(geo::Polygon::new(
			exterior.to_geo()?,
			interiors.iter().map(RingGeometry::to_geo).collect::<Result<Vec<_>>>()?,
		))
	}
}

impl Debug for PolygonGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(PolygonGeometry, RingGeometry);

impl From<geo::Polygon<f64>> for PolygonGeometry {
	fn from(geometry: geo::Polygon<f64>) -> Self {
		let (exterior, interiors) = geometry.into_inner();
		let mut rings = Vec::with_capacity(interiors.len() + 1);
		rings.push(RingGeometry::from(exterior));
		for interior in interiors {
			rings.push(RingGeometry::from(interior));
		}
		PolygonGeometry(rings)
	}
}
