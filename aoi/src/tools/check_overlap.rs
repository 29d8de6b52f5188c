use aoi::AoiFile;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// GeoJSON file containing exactly two rings
	#[arg(value_name = "INPUT_FILE")]
	input: PathBuf,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	println!("{}", check_overlap(&arguments.input)?);
	Ok(())
}

fn check_overlap(input: &Path) -> Result<bool> {
	let file = AoiFile::open(input).context("Failed to read input")?;
	file.check_overlap().context("Failed to check overlap")
}
