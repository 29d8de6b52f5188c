pub mod check_overlap;
pub mod count;
pub mod fill_holes;
pub mod fix_overlap;
pub mod has_holes;
pub mod reduce;

use aoi::aoi_geometry::{FileSink, GeoCollection, GeoSink};
use anyhow::{Context, Result};
use std::path::Path;

/// Writes `collection` to `output`, replacing any previous file.
pub fn save(collection: &GeoCollection, output: &Path, precision: Option<u8>) -> Result<()> {
	FileSink::new(output)
		.with_precision(precision)
		.write(collection)
		.with_context(|| format!("Failed to write output file \"{}\"", output.display()))?;
	log::info!("saved to {output:?}");
	Ok(())
}
