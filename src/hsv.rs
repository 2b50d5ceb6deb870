use image::{GrayImage, Luma, RgbImage};

use crate::cli::{Args, Target};

/// Per-target default bound triples, H,S,V order. Hue is on the halved
/// 8-bit scale (0-180); saturation and value default to the full range.
fn default_bounds(target: Target) -> ([i32; 3], [i32; 3]) {
	match target {
		Target::Green => ([20, 0, 0], [60, 255, 255]),
		Target::Blue => ([90, 0, 0], [130, 255, 255])
	}
}

/// Start from the target defaults and overwrite each slot the CLI supplied.
/// No validation: contradictory bounds pass through and simply select nothing.
pub fn resolve_bounds(args: &Args) -> ([i32; 3], [i32; 3]) {
	let (mut lower, mut upper) = default_bounds(args.target);

	if let Some(h) = args.hmin { lower[0] = h; }
	if let Some(s) = args.smin { lower[1] = s; }
	if let Some(v) = args.vmin { lower[2] = v; }
	if let Some(h) = args.hmax { upper[0] = h; }
	if let Some(s) = args.smax { upper[1] = s; }
	if let Some(v) = args.vmax { upper[2] = v; }

	(lower, upper)
}

/// RGB to HSV on the 8-bit convention of the usual vision libraries:
/// hue in [0,180] (degrees halved), saturation and value in [0,255].
/// Achromatic pixels get hue 0.
fn rgb_to_hsv(r: u8, g: u8, b: u8) -> [i32; 3] {
	let (r, g, b) = (r as f32, g as f32, b as f32);
	let max = r.max(g).max(b);
	let min = r.min(g).min(b);
	let delta = max - min;

	let v = max;
	let s = if max == 0.0 { 0.0 } else { 255.0 * delta / max };

	let h = if delta == 0.0 {
		0.0
	} else if max == r {
		60.0 * (g - b) / delta
	} else if max == g {
		120.0 + 60.0 * (b - r) / delta
	} else {
		240.0 + 60.0 * (r - g) / delta
	};
	let h = if h < 0.0 { h + 360.0 } else { h };

	[(h / 2.0).round() as i32, s.round() as i32, v.round() as i32]
}

/// Mask every pixel whose HSV components all fall inside [lower, upper]
/// inclusive. Prints the resolved target and bounds before computing.
pub fn segment(img: &RgbImage, args: &Args) -> GrayImage {
	let (lower, upper) = resolve_bounds(args);

	println!("Segmenting HSV for '{}' with bounds:", args.target.name());
	println!("  lower: {lower:?}");
	println!("  upper: {upper:?}");

	let (w, h) = (img.width(), img.height());
	let mut mask = GrayImage::new(w, h);

	for y in 0..h {
		for x in 0..w {
			let p = img.get_pixel(x, y);
			let hsv = rgb_to_hsv(p[0], p[1], p[2]);
			let inside = (0..3).all(|i| lower[i] <= hsv[i] && hsv[i] <= upper[i]);
			mask.put_pixel(x, y, Luma([if inside { 255 } else { 0 }]));
		}
	}

	mask
}
