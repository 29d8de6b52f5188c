use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while reading, analysing or writing AOI geometry.
#[derive(Error, Debug)]
pub enum Error {
	/// The document does not have the expected GeoJSON structure.
	#[error("malformed input: {0}")]
	MalformedInput(String),

	/// A ring was scanned to the end of its sequence without returning to its first position.
	#[error("ring starting at index {start} is never closed")]
	UnterminatedRing { start: usize },

	/// Overlap analysis needs exactly two rings.
	#[error("expected exactly two rings, found {found}")]
	UnexpectedRingCount { found: usize },

	/// The planar-geometry backend could not process the geometry.
	#[error("geometry operation failed: {0}")]
	ExternalGeometryFailure(String),

	#[error("invalid JSON: {0}")]
	Json(#[from] serde_json::Error),

	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),

	/// Wraps any other error with the file it originated from.
	#[error("{}: {}", .path.display(), .source)]
	InFile { path: PathBuf, source: Box<Error> },
}

/// The category of an [`Error`], independent of any file context wrapped around it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
	MalformedInput,
	UnterminatedRing,
	UnexpectedRingCount,
	ExternalGeometryFailure,
	Io,
}

impl Error {
	pub fn malformed(message: impl Into<String>) -> Self {
		Error::MalformedInput(message.into())
	}

	pub fn geometry(message: impl Into<String>) -> Self {
		Error::ExternalGeometryFailure(message.into())
	}

	/// Attaches the offending file path. Errors that already carry a path are left unchanged.
	pub fn in_file(self, path: impl AsRef<Path>) -> Self {
		match self {
			Error::InFile { .. } => self,
			other => Error::InFile {
				path: path.as_ref().to_path_buf(),
				source: Box::new(other),
			},
		}
	}

	/// Returns the file path attached by [`Error::in_file`], if any.
	pub fn path(&self) -> Option<&Path> {
		match self {
			Error::InFile { path, .. } => Some(path),
			_ => None,
		}
	}

	pub fn kind(&self) -> ErrorKind {
		match self {
			Error::MalformedInput(_) | Error::Json(_) => ErrorKind::MalformedInput,
			Error::UnterminatedRing { .. } => ErrorKind::UnterminatedRing,
			Error::UnexpectedRingCount { .. } => ErrorKind::UnexpectedRingCount,
			Error::ExternalGeometryFailure(_) => ErrorKind::ExternalGeometryFailure,
			Error::Io(_) => ErrorKind::Io,
			Error::InFile { source, .. } => source.kind(),
		}
	}
}

pub type Result<T> = std::result::Result<T, Error>;
