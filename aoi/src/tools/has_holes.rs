use aoi::AoiFile;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// GeoJSON file to inspect
	#[arg(value_name = "INPUT_FILE")]
	input: PathBuf,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	println!("{}", has_holes(&arguments.input)?);
	Ok(())
}

fn has_holes(input: &Path) -> Result<bool> {
	let file = AoiFile::open(input).context("Failed to read input")?;
	file.has_holes().context("Failed to analyse rings")
}
