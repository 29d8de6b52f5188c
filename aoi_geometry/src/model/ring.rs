use super::Coordinates;
use crate::{Error, Result};
use serde_json::Value;
use std::fmt::Debug;

/// Represents a closed ring, a connected series of coordinates forming a loop.
/// The first and last positions must be identical to form a closed shape.
#[derive(Clone, PartialEq)]
pub struct RingGeometry(pub Vec<Coordinates>);

impl RingGeometry {
	#[must_use]
	pub fn new() -> Self {
		Self(Vec::new())
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn first(&self) -> Option<&Coordinates> {
		self.0.first()
	}

	pub fn last(&self) -> Option<&Coordinates> {
		self.0.last()
	}

	pub fn is_closed(&self) -> bool {
		!self.0.is_empty() && self.0.first() == self.0.last()
	}

	/// Verifies that the ring is valid by checking:
	/// - It has at least 4 coordinates (3 unique points plus the closing point).
	/// - It is closed, i.e., the first and last points are identical.
	pub fn verify(&self) -> Result<()> {
		if self.0.len() < 4 {
			return Err(Error::malformed(format!(
				"ring must have at least 4 positions, found {}",
				self.0.len()
			)));
		}
		if !self.is_closed() {
			return Err(Error::malformed("ring must be closed"));
		}
		Ok(())
	}

	/// Returns the coordinates of the ring as a JSON array.
	pub fn to_coord_json(&self, precision: Option<u8>) -> Value {
		Value::from(self.0.iter().map(|c| c.to_json(precision)).collect::<Vec<_>>())
	}

	/// Converts the ring into a backend line string.
	///
	/// Rings the backend cannot handle (too short, open, or with non-finite values) are rejected
	/// as [`Error::ExternalGeometryFailure`].
	pub fn to_geo(&self) -> Result<geo::LineString<f64>> {
		self.verify().map_err(|e| Error::geometry(e.to_string()))?;
		if let Some(c) = self.0.iter().find(|c| !c.is_finite()) {
			return Err(Error::geometry(format!("ring contains a non-finite position {c:?}")));
		}
		Ok(geo::LineString::from(
			self.0.iter().map(Coordinates::to_geo).collect::<Vec<_>>(),
		))
	}
}

impl Default for RingGeometry {
	fn default() -> Self {
		Self::new()
	}
}

impl Debug for RingGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(RingGeometry, Coordinates);

/// Converts a `geo::LineString<f64>`, preserving the order of coordinates.
impl From<geo::LineString<f64>> for RingGeometry {
	fn from(geometry: geo::LineString<f64>) -> Self {
		RingGeometry(geometry.into_iter().map(Coordinates::from).collect())
	}
}
