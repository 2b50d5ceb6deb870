use image::{GrayImage, Rgb, RgbImage};

/// Apply the mask to the original image: where the mask is 255 the pixel is
/// kept, everywhere else it is blacked out. Channel-wise AND with the mask
/// broadcast across all three channels.
pub fn apply_mask(img: &RgbImage, mask: &GrayImage) -> RgbImage {
	let (w, h) = (img.width(), img.height());
	let mut out = RgbImage::new(w, h);

	for y in 0..h {
		for x in 0..w {
			let p = img.get_pixel(x, y);
			let m = mask.get_pixel(x, y)[0];
			out.put_pixel(x, y, Rgb([p[0] & m, p[1] & m, p[2] & m]));
		}
	}

	out
}
