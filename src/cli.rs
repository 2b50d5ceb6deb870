use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Method {
	/// Color-range segmentation in HSV space.
	Hsv,
	/// Grayscale intensity threshold.
	Threshold
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Target {
	/// Green hue range (H 20-60 on the 0-180 scale).
	Green,
	/// Blue hue range (H 90-130 on the 0-180 scale).
	Blue
}

impl Target {
	pub fn name(self) -> &'static str {
		match self {
			Target::Green => "green",
			Target::Blue => "blue"
		}
	}
}

#[derive(Debug, Parser)]
#[command(name = "segmask", version, about = "Segment one image into a binary mask plus a masked overlay")]
pub struct Args {
	/// Input image path.
	#[arg(long)]
	pub input: PathBuf,

	/// Segmentation method.
	#[arg(long, value_enum)]
	pub method: Method,

	/// Target color for HSV segmentation.
	#[arg(long, value_enum, default_value_t = Target::Green)]
	pub target: Target,

	/// Minimum hue (H). Overrides the target default.
	#[arg(long, allow_negative_numbers = true)]
	pub hmin: Option<i32>,

	/// Maximum hue (H).
	#[arg(long, allow_negative_numbers = true)]
	pub hmax: Option<i32>,

	/// Minimum saturation (S).
	#[arg(long, allow_negative_numbers = true)]
	pub smin: Option<i32>,

	/// Maximum saturation (S).
	#[arg(long, allow_negative_numbers = true)]
	pub smax: Option<i32>,

	/// Minimum value (V).
	#[arg(long, allow_negative_numbers = true)]
	pub vmin: Option<i32>,

	/// Maximum value (V).
	#[arg(long, allow_negative_numbers = true)]
	pub vmax: Option<i32>,

	/// Threshold value (0-255) for the threshold method.
	#[arg(long, default_value_t = 127, allow_negative_numbers = true)]
	pub thresh_val: i32,

	/// Invert the threshold (select pixels at or below --thresh-val).
	#[arg(long)]
	pub thresh_inv: bool
}
