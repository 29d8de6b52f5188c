use super::{CoordinateSequence, SequenceEntry};
use crate::{Error, Result, RingGeometry};

/// Carves one ring out of `sequence`, starting at `start`.
///
/// The position at `start` is the anchor. The ring runs up to and including the first later
/// position equal to the anchor, so a ring that passes through a repeated point is still closed
/// by the earliest recurrence. Returns the ring and the index just past its closing position.
///
/// Fails with [`Error::UnterminatedRing`] when the anchor never recurs, and with
/// [`Error::MalformedInput`] when `start` is out of range or a `Line` entry is hit, since a ring
/// can only be built from positions.
pub fn segment(sequence: &CoordinateSequence, start: usize) -> Result<(RingGeometry, usize)> {
	let anchor = sequence.position(start)?;
	let mut ring = vec![anchor];

	for (index, entry) in sequence.iter().enumerate().skip(start + 1) {
		let position = match entry {
			SequenceEntry::Position(c) => *c,
			SequenceEntry::Line(_) => {
				return Err(Error::malformed(format!(
					"line string at index {index} inside the ring starting at index {start}"
				)));
			}
		};
		ring.push(position);
		if position == anchor {
			log::trace!("ring {start}..={index} closed with {} positions", ring.len());
			return Ok((RingGeometry(ring), index + 1));
		}
	}

	Err(Error::UnterminatedRing { start })
}

/// Splits the whole sequence into consecutive rings, starting at index 0 and continuing at each
/// returned next index until the sequence is exhausted.
///
/// An empty sequence yields no rings. This relies on distinct rings never starting with the same
/// position as one another; sequences violating that are split at the wrong place.
pub fn segment_all(sequence: &CoordinateSequence) -> Result<Vec<RingGeometry>> {
	let mut rings = Vec::new();
	let mut next = 0;

	while next < sequence.len() {
		let (ring, after) = segment(sequence, next)?;
		rings.push(ring);
		next = after;
	}

	log::debug!("segmented {} entries into {} rings", sequence.len(), rings.len());
	Ok(rings)
}
