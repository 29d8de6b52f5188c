//! File-level access to the AOI operations of [`aoi_geometry`].
//!
//! [`AoiFile`] reads one GeoJSON document and runs the analyses on it. Every error it returns
//! names the file it came from.

use aoi_geometry::{
	CoordinateSequence, GeoCollection, Result, RingSet, check_overlap, extract, extract_rings, fill_holes, fix_overlap,
	has_holes, read_geojson_file, reduce_vertices,
};
use std::path::{Path, PathBuf};

pub use aoi_geometry;

#[derive(Clone, Debug)]
pub struct AoiFile {
	path: PathBuf,
	collection: GeoCollection,
}

impl AoiFile {
	/// Reads and parses the whole file. The file is closed again before this returns.
	pub fn open(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		Ok(Self {
			collection: read_geojson_file(path)?,
			path: path.to_path_buf(),
		})
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	pub fn collection(&self) -> &GeoCollection {
		&self.collection
	}

	pub fn sequence(&self) -> CoordinateSequence {
		extract(&self.collection)
	}

	pub fn rings(&self) -> Result<RingSet> {
		extract_rings(&self.collection).map_err(|e| e.in_file(&self.path))
	}

	/// Number of vertices, not counting the closing position of a single ring.
	pub fn vertex_count(&self) -> usize {
		self.sequence().vertex_count()
	}

	pub fn has_holes(&self) -> Result<bool> {
		Ok(has_holes(&self.rings()?))
	}

	pub fn fill_holes(&self) -> Result<GeoCollection> {
		fill_holes(&self.rings()?).map_err(|e| e.in_file(&self.path))
	}

	pub fn check_overlap(&self) -> Result<bool> {
		check_overlap(&self.rings()?).map_err(|e| e.in_file(&self.path))
	}

	pub fn fix_overlap(&self) -> Result<GeoCollection> {
		fix_overlap(&self.rings()?).map_err(|e| e.in_file(&self.path))
	}

	pub fn reduce_vertices(&self, ratio: f64) -> Result<GeoCollection> {
		reduce_vertices(&self.collection, ratio).map_err(|e| e.in_file(&self.path))
	}
}
