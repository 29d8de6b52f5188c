use aoi::{AoiFile, aoi_geometry::REDUCED_VERTEX_FILE};
use anyhow::{Context, Result};
use std::path::PathBuf;

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// GeoJSON file to simplify
	#[arg(value_name = "INPUT_FILE")]
	input: PathBuf,

	/// Output file, overwritten if it exists
	#[arg(long, short, default_value = REDUCED_VERTEX_FILE)]
	output: PathBuf,

	/// Concave hull ratio: 0 keeps the most detail, 1 gives the convex hull
	#[arg(long, short, default_value_t = 0.5)]
	ratio: f64,

	/// Round output coordinates to this many decimal places
	#[arg(long)]
	precision: Option<u8>,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	let file = AoiFile::open(&arguments.input).context("Failed to read input")?;
	let before = file.vertex_count();

	let reduced = file
		.reduce_vertices(arguments.ratio)
		.with_context(|| format!("Failed to reduce vertices with ratio {}", arguments.ratio))?;

	let after = aoi::aoi_geometry::extract(&reduced).vertex_count();
	log::info!("reduced {before} vertices to {after}");

	super::save(&reduced, &arguments.output, arguments.precision)
}
