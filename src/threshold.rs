use image::{GrayImage, RgbImage, imageops};

/// Reduce to luma and binary-threshold at `thresh_val`.
///
/// Plain: mask is 255 where intensity > `thresh_val`. Inverse: 255 where
/// intensity <= `thresh_val`. The comparison happens in `i32`, so a value
/// outside 0-255 is not clamped; it just degrades to an all-zero or
/// all-255 mask.
pub fn segment(img: &RgbImage, thresh_val: i32, invert: bool) -> GrayImage {
	let mut gray = imageops::grayscale(img);

	for p in gray.pixels_mut() {
		let above = p.0[0] as i32 > thresh_val;
		p.0[0] = if above != invert { 255 } else { 0 };
	}

	gray
}
