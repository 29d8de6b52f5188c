use aoi::{AoiFile, aoi_geometry::CORRECTED_OVERLAP_FILE};
use anyhow::{Context, Result};
use std::path::PathBuf;

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// GeoJSON file containing exactly two rings
	#[arg(value_name = "INPUT_FILE")]
	input: PathBuf,

	/// Output file, overwritten if it exists
	#[arg(long, short, default_value = CORRECTED_OVERLAP_FILE)]
	output: PathBuf,

	/// Round output coordinates to this many decimal places
	#[arg(long)]
	precision: Option<u8>,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	log::debug!("merging the rings of {:?}", arguments.input);

	let file = AoiFile::open(&arguments.input).context("Failed to read input")?;
	let merged = file.fix_overlap().context("Failed to fix overlap")?;
	super::save(&merged, &arguments.output, arguments.precision)
}
