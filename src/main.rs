use anyhow::Result;
use clap::Parser;

use segmask_rs::{cli, hsv, output, threshold};

fn main() {
	// Progress lines go to stdout; errors to stderr via `anyhow`.
	if let Err(e) = run() {
		eprintln!("{e:#}");
		std::process::exit(1);
	}
}

fn run() -> Result<()> {
	let args = cli::Args::parse();

	let img = match image::open(&args.input) {
		Ok(img) => img.into_rgb8(),
		Err(e) => {
			// Matches the original tool: report and end the run without
			// touching the filesystem.
			eprintln!("could not load image {}: {e}", args.input.display());
			return Ok(());
		}
	};

	let mask = match args.method {
		cli::Method::Hsv => hsv::segment(&img, &args),
		cli::Method::Threshold => threshold::segment(&img, args.thresh_val, args.thresh_inv)
	};

	output::save_results(&img, &mask, &args.input);
	Ok(())
}
