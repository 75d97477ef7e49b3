use super::color::Hsla;

/// Something a partition tree can be built from: a grid of colors with
/// known dimensions.
pub trait PixelSource {
	fn width(&self) -> u32;
	fn height(&self) -> u32;
	/// Color of the pixel at `(x, y)`. May panic when out of bounds.
	fn pixel(&self, x: u32, y: u32) -> Hsla;
}

/// Something a partition tree can be rendered into.
pub trait PixelSink: PixelSource {
	/// Overwrites the pixel at `(x, y)`. May panic when out of bounds.
	fn put_pixel(&mut self, x: u32, y: u32, color: Hsla);
}

/// A row-major grid of `Hsla` colors.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HslaImage {
	width: u32,
	height: u32,
	pixels: Vec<Hsla>,
}

impl HslaImage {
	/// Makes a grid filled with the default (fully transparent black) color.
	pub fn new(width: u32, height: u32) -> Self {
		Self::from_pixel(width, height, Hsla::default())
	}

	pub fn from_pixel(width: u32, height: u32, color: Hsla) -> Self {
		HslaImage {
			width,
			height,
			pixels: vec![color; width as usize * height as usize],
		}
	}

	pub fn from_fn<F: FnMut(u32, u32) -> Hsla>(width: u32, height: u32, mut f: F) -> Self {
		let mut pixels = Vec::with_capacity(width as usize * height as usize);
		for y in 0..height {
			for x in 0..width {
				pixels.push(f(x, y));
			}
		}
		HslaImage { width, height, pixels }
	}

	pub fn width(&self) -> u32 {
		self.width
	}

	pub fn height(&self) -> u32 {
		self.height
	}

	pub fn dimensions(&self) -> (u32, u32) {
		(self.width, self.height)
	}

	/// # Panics
	///
	/// When `(x, y)` is outside the grid.
	pub fn get_pixel(&self, x: u32, y: u32) -> Hsla {
		self.pixels[self.index(x, y)]
	}

	/// # Panics
	///
	/// When `(x, y)` is outside the grid.
	pub fn put_pixel(&mut self, x: u32, y: u32, color: Hsla) {
		let ind = self.index(x, y);
		self.pixels[ind] = color;
	}

	/// All colors, row by row.
	pub fn pixels(&self) -> &[Hsla] {
		&self.pixels
	}

	/// Converts to 8-bit RGBA, rounding each channel.
	pub fn to_rgba(&self) -> image::RgbaImage {
		image::RgbaImage::from_fn(self.width, self.height, |x, y| self.get_pixel(x, y).to_rgba())
	}

	fn index(&self, x: u32, y: u32) -> usize {
		assert!(x < self.width && y < self.height,
			"pixel ({}, {}) out of bounds for {}x{} image", x, y, self.width, self.height);
		y as usize * self.width as usize + x as usize
	}
}

impl From<&image::RgbaImage> for HslaImage {
	fn from(img: &image::RgbaImage) -> Self {
		HslaImage::from_fn(img.width(), img.height(), |x, y| Hsla::from_rgba(*img.get_pixel(x, y)))
	}
}

impl PixelSource for HslaImage {
	fn width(&self) -> u32 {
		self.width
	}
	fn height(&self) -> u32 {
		self.height
	}
	fn pixel(&self, x: u32, y: u32) -> Hsla {
		self.get_pixel(x, y)
	}
}

impl PixelSink for HslaImage {
	fn put_pixel(&mut self, x: u32, y: u32, color: Hsla) {
		HslaImage::put_pixel(self, x, y, color)
	}
}

impl PixelSource for image::RgbaImage {
	fn width(&self) -> u32 {
		image::RgbaImage::width(self)
	}
	fn height(&self) -> u32 {
		image::RgbaImage::height(self)
	}
	fn pixel(&self, x: u32, y: u32) -> Hsla {
		Hsla::from_rgba(*self.get_pixel(x, y))
	}
}

impl PixelSink for image::RgbaImage {
	fn put_pixel(&mut self, x: u32, y: u32, color: Hsla) {
		image::RgbaImage::put_pixel(self, x, y, color.to_rgba())
	}
}

impl super::PartitionNode {
	/// Paints every leaf below this node into `sink`, each over its whole
	/// region in its average color. Branch nodes paint nothing themselves.
	///
	/// The leaves must lie inside the sink.
	pub(crate) fn paint<S: PixelSink + ?Sized>(&self, sink: &mut S) {
		match self.sections {
			Some(ref sects) => {
				for section in sects.iter() {
					section.paint(&mut *sink);
				}
			},
			None => {
				for (x, y) in self.region.pixels() {
					sink.put_pixel(x, y, self.average);
				}
			},
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::node::{PartitionNode, Region};

	#[test]
	fn from_fn_is_row_major() {
		let img = HslaImage::from_fn(3, 2, |x, y| Hsla::new(0., 0., (y * 3 + x) as f64 / 10., 1.));
		let ls: Vec<_> = img.pixels().iter().map(|c| c.l).collect();
		assert_eq!(ls, vec![0., 0.1, 0.2, 0.3, 0.4, 0.5]);
		assert_eq!(img.get_pixel(2, 1).l, 0.5);
	}

	#[test]
	#[should_panic]
	fn out_of_bounds_read_panics() {
		HslaImage::new(2, 2).get_pixel(2, 0);
	}

	#[test]
	fn rgba_conversion_round_trips() {
		let rgba = image::RgbaImage::from_fn(4, 3, |x, y| image::Rgba([x as u8 * 60, y as u8 * 90, 17, 255 - x as u8]));
		assert_eq!(HslaImage::from(&rgba).to_rgba(), rgba);
	}

	#[test]
	fn paints_pruned_leaf_over_its_whole_region() {
		let color = Hsla::new(200., 0.5, 0.25, 1.);
		let leaf = PartitionNode {
			region: Region::new(1, 1, 2, 2),
			average: color,
			sections: None,
		};
		let mut img = HslaImage::new(4, 4);
		leaf.paint(&mut img);
		for y in 0..4 {
			for x in 0..4 {
				let inside = (1..3).contains(&x) && (1..3).contains(&y);
				assert_eq!(img.get_pixel(x, y) == color, inside, "at ({}, {})", x, y);
			}
		}
	}

	#[test]
	fn paints_into_rgba_buffer() {
		let src = image::RgbaImage::from_fn(3, 3, |x, y| image::Rgba([x as u8 * 100, y as u8 * 100, 50, 255]));
		let root = PartitionNode::build(&src, Region::new(0, 0, 3, 3));
		let mut out = image::RgbaImage::new(3, 3);
		root.paint(&mut out);
		assert_eq!(out, src);
	}
}
