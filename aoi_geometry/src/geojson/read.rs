use super::parse_geojson;
use crate::{Error, GeoCollection, Result};
use std::{
	fs::File,
	io::{BufReader, Read},
	path::Path,
};

pub fn read_geojson(mut reader: impl Read) -> Result<GeoCollection> {
	let mut buffer = String::new();
	reader.read_to_string(&mut buffer)?;
	parse_geojson(&buffer)
}

/// Reads a whole GeoJSON file. Any error is tagged with `path`; the file handle is released
/// before this returns, on success and failure alike.
pub fn read_geojson_file(path: impl AsRef<Path>) -> Result<GeoCollection> {
	let path = path.as_ref();
	log::debug!("reading GeoJSON from {path:?}");

	let collection = File::open(path)
		.map_err(Error::from)
		.and_then(|file| read_geojson(BufReader::new(file)))
		.map_err(|e| e.in_file(path))?;

	log::debug!("read {} features from {path:?}", collection.features.len());
	Ok(collection)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{ErrorKind, Geometry};
	use std::io::{Cursor, Write};

	#[test]
	fn test_read_geojson_basic() -> Result<()> {
		let json = r#"{"type":"FeatureCollection","features":[{"type":"Feature","geometry":{"type":"Point","coordinates":[0,0]},"properties":{}}]}"#;
		let collection = read_geojson(Cursor::new(json))?;
		assert_eq!(collection.features.len(), 1);
		assert_eq!(collection.features[0].geometry.get_type_name(), "Point");
		Ok(())
	}

	#[test]
	fn test_read_geojson_file() -> Result<()> {
		let mut file = tempfile::NamedTempFile::new()?;
		file.write_all(br#"{"features":[{"geometry":{"type":"LineString","coordinates":[[0,0],[1,1]]}}]}"#)?;
		let collection = read_geojson_file(file.path())?;
		assert!(matches!(collection.features[0].geometry, Geometry::LineString(ref line) if line.len() == 2));
		Ok(())
	}

	#[test]
	fn test_read_geojson_file_reports_path() -> Result<()> {
		let mut file = tempfile::NamedTempFile::new()?;
		file.write_all(b"{\"type\":\"FeatureCollection\"}")?;
		let error = read_geojson_file(file.path()).unwrap_err();
		assert_eq!(error.kind(), ErrorKind::MalformedInput);
		assert_eq!(error.path(), Some(file.path()));
		Ok(())
	}

	#[test]
	fn test_read_geojson_file_missing() {
		let error = read_geojson_file("does/not/exist.geojson").unwrap_err();
		assert_eq!(error.kind(), ErrorKind::Io);
		assert!(error.to_string().starts_with("does/not/exist.geojson: I/O error"));
	}
}
