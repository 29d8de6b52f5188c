mod tools;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{ErrorLevel, Verbosity};

#[derive(Parser, Debug)]
#[command(
	author,
	version,
	about,
	long_about = None,
	propagate_version = true,
	disable_help_subcommand = true,
)]
struct Cli {
	#[command(subcommand)]
	command: Commands,

	#[command(flatten)]
	verbose: Verbosity<ErrorLevel>,
}

#[derive(Subcommand, Debug)]
enum Commands {
	/// Count the vertices of a GeoJSON file
	Count(tools::count::Subcommand),

	/// Report whether any polygon has interior rings
	HasHoles(tools::has_holes::Subcommand),

	/// Keep only the first ring and drop all holes
	FillHoles(tools::fill_holes::Subcommand),

	/// Report whether the two rings of a file overlap
	CheckOverlap(tools::check_overlap::Subcommand),

	/// Merge the two rings of a file into their union
	FixOverlap(tools::fix_overlap::Subcommand),

	#[clap(alias = "simplify")]
	/// Reduce the vertex count with a concave hull
	Reduce(tools::reduce::Subcommand),
}

fn main() -> Result<()> {
	let cli = Cli::parse();

	env_logger::Builder::new()
		.filter_level(cli.verbose.log_level_filter())
		.format_timestamp(None)
		.init();

	run(cli)
}

fn run(cli: Cli) -> Result<()> {
	match &cli.command {
		Commands::Count(arguments) => tools::count::run(arguments),
		Commands::HasHoles(arguments) => tools::has_holes::run(arguments),
		Commands::FillHoles(arguments) => tools::fill_holes::run(arguments),
		Commands::CheckOverlap(arguments) => tools::check_overlap::run(arguments),
		Commands::FixOverlap(arguments) => tools::fix_overlap::run(arguments),
		Commands::Reduce(arguments) => tools::reduce::run(arguments),
	}
}
