use aoi::AoiFile;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// GeoJSON file to count
	#[arg(value_name = "INPUT_FILE")]
	input: PathBuf,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	println!("{}", vertex_count(&arguments.input)?);
	Ok(())
}

fn vertex_count(input: &Path) -> Result<usize> {
	let file = AoiFile::open(input).context("Failed to read input")?;
	Ok(file.vertex_count())
}
