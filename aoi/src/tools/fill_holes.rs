use aoi::{AoiFile, aoi_geometry::FILLED_HOLES_FILE};
use anyhow::{Context, Result};
use std::path::PathBuf;

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// GeoJSON file with holes
	#[arg(value_name = "INPUT_FILE")]
	input: PathBuf,

	/// Output file, overwritten if it exists
	#[arg(long, short, default_value = FILLED_HOLES_FILE)]
	output: PathBuf,

	/// Round output coordinates to this many decimal places
	#[arg(long)]
	precision: Option<u8>,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	log::debug!("filling holes of {:?}", arguments.input);

	let file = AoiFile::open(&arguments.input).context("Failed to read input")?;
	let filled = file.fill_holes().context("Failed to fill holes")?;
	super::save(&filled, &arguments.output, arguments.precision)
}
