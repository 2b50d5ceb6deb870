use std::path::{Path, PathBuf};

use anyhow::Context;
use image::{GrayImage, RgbImage};

use crate::compose;

/// `photo.jpg` -> `photo<suffix>`, keeping the directory. Stripping the
/// extension from a name that has none is a no-op.
fn derived_path(input: &Path, suffix: &str) -> PathBuf {
	let stem = input
		.file_stem()
		.and_then(|s| s.to_str())
		.unwrap_or("out");
	input.with_file_name(format!("{stem}{suffix}"))
}

pub fn mask_path(input: &Path) -> PathBuf {
	derived_path(input, "_mask.png")
}

pub fn overlay_path(input: &Path) -> PathBuf {
	derived_path(input, "_overlay.jpg")
}

/// Write the mask (lossless PNG) and the masked overlay (JPEG) next to the
/// input. Each write is best-effort: a failure is reported to stderr and
/// does not stop the other write or the process.
pub fn save_results(img: &RgbImage, mask: &GrayImage, input: &Path) {
	let overlay = compose::apply_mask(img, mask);
	let mask_out = mask_path(input);
	let overlay_out = overlay_path(input);

	println!("Saving results:");

	match mask.save(&mask_out).with_context(|| format!("write mask: {}", mask_out.display())) {
		Ok(()) => println!("  mask: {}", mask_out.display()),
		Err(e) => eprintln!("{e:#}")
	}

	match overlay.save(&overlay_out).with_context(|| format!("write overlay: {}", overlay_out.display())) {
		Ok(()) => println!("  overlay: {}", overlay_out.display()),
		Err(e) => eprintln!("{e:#}")
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use image::{Luma, Rgb};

	#[test]
	fn extension_is_stripped_before_suffixing() {
		assert_eq!(mask_path(Path::new("photo.jpg")), Path::new("photo_mask.png"));
		assert_eq!(overlay_path(Path::new("photo.jpg")), Path::new("photo_overlay.jpg"));
	}

	#[test]
	fn no_extension_input_gets_the_same_names() {
		assert_eq!(mask_path(Path::new("photo")), Path::new("photo_mask.png"));
		assert_eq!(overlay_path(Path::new("photo")), Path::new("photo_overlay.jpg"));
	}

	#[test]
	fn directory_component_is_preserved() {
		assert_eq!(
			mask_path(Path::new("shots/2024/photo.png")),
			Path::new("shots/2024/photo_mask.png")
		);
	}

	#[test]
	fn writes_land_next_to_the_input() {
		let dir = tempfile::tempdir().unwrap();
		let input = dir.path().join("frame.png");

		let img = RgbImage::from_pixel(4, 4, Rgb([10, 250, 10]));
		let mut mask = GrayImage::new(4, 4);
		mask.put_pixel(0, 0, Luma([255]));

		save_results(&img, &mask, &input);

		assert!(dir.path().join("frame_mask.png").exists());
		assert!(dir.path().join("frame_overlay.jpg").exists());

		// PNG mask round-trips losslessly.
		let reloaded = image::open(dir.path().join("frame_mask.png")).unwrap().into_luma8();
		assert_eq!(reloaded, mask);
	}

	#[test]
	fn unwritable_destination_does_not_panic() {
		let img = RgbImage::new(1, 1);
		let mask = GrayImage::new(1, 1);
		save_results(&img, &mask, Path::new("/nonexistent-dir/frame.png"));
	}
}
