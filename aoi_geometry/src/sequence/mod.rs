//! The flattened view of a document: one ordered list of entries covering every point, line
//! and polygon vertex of every feature.

mod extract;
mod segment;

pub use extract::*;
pub use segment::*;

use crate::{Coordinates, Error, Result};
use std::fmt::Debug;

/// One element of a [`CoordinateSequence`].
///
/// Polygon vertices and points contribute a `Position` each, while a LineString contributes its
/// whole vertex list as a single opaque `Line`.
#[derive(Clone, PartialEq)]
pub enum SequenceEntry {
	Position(Coordinates),
	Line(Vec<Coordinates>),
}

impl SequenceEntry {
	pub fn as_position(&self) -> Option<&Coordinates> {
		match self {
			SequenceEntry::Position(c) => Some(c),
			SequenceEntry::Line(_) => None,
		}
	}
}

impl Debug for SequenceEntry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			SequenceEntry::Position(c) => c.fmt(f),
			SequenceEntry::Line(line) => f.debug_tuple("Line").field(line).finish(),
		}
	}
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CoordinateSequence(pub Vec<SequenceEntry>);

impl CoordinateSequence {
	#[must_use]
	pub fn new() -> Self {
		Self(Vec::new())
	}

	pub fn push(&mut self, entry: SequenceEntry) {
		self.0.push(entry);
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn iter(&self) -> std::slice::Iter<'_, SequenceEntry> {
		self.0.iter()
	}

	/// Returns the position at `index`, failing for out-of-range indexes and `Line` entries.
	pub fn position(&self, index: usize) -> Result<Coordinates> {
		match self.0.get(index) {
			Some(SequenceEntry::Position(c)) => Ok(*c),
			Some(SequenceEntry::Line(_)) => Err(Error::malformed(format!(
				"entry {index} is a line string, not a position"
			))),
			None => Err(Error::malformed(format!(
				"index {index} is outside a sequence of {} entries",
				self.0.len()
			))),
		}
	}

	/// The number of vertices: every entry except the closing duplicate of a single ring.
	///
	/// An empty sequence counts as zero vertices.
	pub fn vertex_count(&self) -> usize {
		self.0.len().saturating_sub(1)
	}
}

impl<'a> IntoIterator for &'a CoordinateSequence {
	type Item = &'a SequenceEntry;
	type IntoIter = std::slice::Iter<'a, SequenceEntry>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.iter()
	}
}

impl From<Vec<Coordinates>> for CoordinateSequence {
	fn from(positions: Vec<Coordinates>) -> Self {
		Self(positions.into_iter().map(SequenceEntry::Position).collect())
	}
}

impl<'a, T, const N: usize> From<&'a [T; N]> for CoordinateSequence
where
	Coordinates: From<&'a T>,
{
	fn from(value: &'a [T; N]) -> Self {
		Self(value.iter().map(|v| SequenceEntry::Position(Coordinates::from(v))).collect())
	}
}
