//! Where results go. Every operation returns a [`GeoCollection`]; a [`GeoSink`] decides how
//! to persist it.
//!
//! Sinks render the whole document before touching their destination, so a rendering error
//! never leaves a truncated file behind. Nothing here locks: two sinks writing the same path at
//! the same time race, and callers have to serialize them.

use crate::{Error, GeoCollection, Result};
use std::{
	io::Write,
	path::{Path, PathBuf},
};

/// Default output file of the vertex reduction.
pub const REDUCED_VERTEX_FILE: &str = "reduced_vertex.geojson";
/// Default output file of the hole filling.
pub const FILLED_HOLES_FILE: &str = "filled_holes.geojson";
/// Default output file of the overlap correction.
pub const CORRECTED_OVERLAP_FILE: &str = "corrected_overlap.geojson";

pub trait GeoSink {
	fn write(&mut self, collection: &GeoCollection) -> Result<()>;
}

/// Serializes a collection as compact GeoJSON, rounding coordinates when `precision` is set.
pub fn to_geojson_string(collection: &GeoCollection, precision: Option<u8>) -> Result<String> {
	Ok(serde_json::to_string(&collection.to_json(precision)?)?)
}

/// Creates or overwrites a file.
#[derive(Clone, Debug)]
pub struct FileSink {
	path: PathBuf,
	precision: Option<u8>,
}

impl FileSink {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self {
			path: path.into(),
			precision: None,
		}
	}

	#[must_use]
	pub fn with_precision(mut self, precision: Option<u8>) -> Self {
		self.precision = precision;
		self
	}

	pub fn path(&self) -> &Path {
		&self.path
	}
}

impl GeoSink for FileSink {
	fn write(&mut self, collection: &GeoCollection) -> Result<()> {
		let json = to_geojson_string(collection, self.precision).map_err(|e| e.in_file(&self.path))?;
		std::fs::write(&self.path, json).map_err(|e| Error::from(e).in_file(&self.path))?;
		log::debug!("saved {} features to {:?}", collection.features.len(), self.path);
		Ok(())
	}
}

/// Writes into any [`Write`] implementation, e.g. stdout or an in-memory buffer.
#[derive(Debug)]
pub struct WriterSink<W: Write> {
	writer: W,
	precision: Option<u8>,
}

impl<W: Write> WriterSink<W> {
	pub fn new(writer: W) -> Self {
		Self { writer, precision: None }
	}

	#[must_use]
	pub fn with_precision(mut self, precision: Option<u8>) -> Self {
		self.precision = precision;
		self
	}

	pub fn into_inner(self) -> W {
		self.writer
	}
}

impl<W: Write> GeoSink for WriterSink<W> {
	fn write(&mut self, collection: &GeoCollection) -> Result<()> {
		let json = to_geojson_string(collection, self.precision)?;
		self.writer.write_all(json.as_bytes())?;
		self.writer.flush()?;
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{Coordinates, ErrorKind, GeoFeature, Geometry, read_geojson_file};
	use pretty_assertions::assert_eq;

	fn point_collection() -> GeoCollection {
		GeoCollection::from(vec![GeoFeature::new(Geometry::Point(Coordinates::new(1.23456, 7.0)))])
	}

	#[test]
	fn writer_sink_renders_compact_json() -> Result<()> {
		let mut sink = WriterSink::new(Vec::new()).with_precision(Some(2));
		sink.write(&point_collection())?;
		assert_eq!(
			String::from_utf8(sink.into_inner()).unwrap(),
			r#"{"features":[{"geometry":{"coordinates":[1.23,7.0],"type":"Point"},"properties":{},"type":"Feature"}],"type":"FeatureCollection"}"#
		);
		Ok(())
	}

	#[test]
	fn file_sink_overwrites() -> Result<()> {
		let dir = tempfile::tempdir()?;
		let path = dir.path().join(FILLED_HOLES_FILE);
		std::fs::write(&path, "previous content that is longer than the new one")?;

		let mut sink = FileSink::new(&path);
		sink.write(&point_collection())?;

		assert_eq!(read_geojson_file(&path)?, point_collection());
		Ok(())
	}

	#[test]
	fn file_sink_writes_nothing_when_rendering_fails() -> Result<()> {
		let dir = tempfile::tempdir()?;
		let path = dir.path().join(CORRECTED_OVERLAP_FILE);
		let collection = GeoCollection::from(vec![GeoFeature::new(Geometry::Unsupported("Curve".into()))]);

		let error = FileSink::new(&path).write(&collection).unwrap_err();
		assert_eq!(error.kind(), ErrorKind::MalformedInput);
		assert_eq!(error.path(), Some(path.as_path()));
		assert!(!path.exists());
		Ok(())
	}

	#[test]
	fn file_sink_reports_unwritable_path() -> Result<()> {
		let dir = tempfile::tempdir()?;
		let path = dir.path().join("missing").join(REDUCED_VERTEX_FILE);
		let error = FileSink::new(&path).write(&point_collection()).unwrap_err();
		assert_eq!(error.kind(), ErrorKind::Io);
		Ok(())
	}
}
