use serde_json::Value;
use std::fmt::Debug;

/// A GeoJSON position: x, y and an optional z.
///
/// Equality is exact value equality, which is what ring closure detection relies on.
#[derive(Clone, Copy, PartialEq)]
pub struct Coordinates {
	xy: [f64; 2],
	z: Option<f64>,
}

impl Coordinates {
	#[must_use]
	pub fn new(x: f64, y: f64) -> Self {
		Self { xy: [x, y], z: None }
	}

	#[must_use]
	pub fn new_3d(x: f64, y: f64, z: f64) -> Self {
		Self { xy: [x, y], z: Some(z) }
	}

	#[must_use]
	pub fn x(&self) -> f64 {
		self.xy[0]
	}

	#[must_use]
	pub fn y(&self) -> f64 {
		self.xy[1]
	}

	#[must_use]
	pub fn z(&self) -> Option<f64> {
		self.z
	}

	pub fn is_finite(&self) -> bool {
		self.xy.iter().chain(self.z.iter()).all(|v| v.is_finite())
	}

	/// Renders the position as a JSON array, rounding every value when a precision is given.
	#[must_use]
	pub fn to_json(&self, precision: Option<u8>) -> Value {
		let round = |v: f64| match precision {
			Some(prec) => {
				let factor = 10f64.powi(i32::from(prec));
				(v * factor).round() / factor
			}
			None => v,
		};
		let mut values = vec![round(self.xy[0]), round(self.xy[1])];
		if let Some(z) = self.z {
			values.push(round(z));
		}
		Value::from(values)
	}

	/// The planar projection used by the geometry backend. `z` is dropped.
	#[must_use]
	pub fn to_geo(&self) -> geo::Coord<f64> {
		geo::Coord {
			x: self.xy[0],
			y: self.xy[1],
		}
	}
}

impl From<[f64; 2]> for Coordinates {
	fn from(value: [f64; 2]) -> Self {
		Coordinates::new(value[0], value[1])
	}
}

impl From<[f64; 3]> for Coordinates {
	fn from(value: [f64; 3]) -> Self {
		Coordinates::new_3d(value[0], value[1], value[2])
	}
}

impl<'a, T> From<&'a [T; 2]> for Coordinates
where
	T: Copy + Into<f64>,
{
	fn from(value: &'a [T; 2]) -> Self {
		Coordinates::new(value[0].into(), value[1].into())
	}
}

impl From<(f64, f64)> for Coordinates {
	fn from(value: (f64, f64)) -> Self {
		Coordinates::new(value.0, value.1)
	}
}

impl From<geo::Coord<f64>> for Coordinates {
	fn from(value: geo::Coord<f64>) -> Self {
		Coordinates::new(value.x, value.y)
	}
}

impl Debug for Coordinates {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self.z {
			Some(z) => [self.xy[0], self.xy[1], z].fmt(f),
			None => self.xy.fmt(f),
		}
	}
}
