use std::f64::consts::PI;

/// Bytes-per-channel color used by the `image` crate buffers.
pub type Rgba = image::Rgba<u8>;

/// Chroma below which a color is treated as gray, with hue pinned to 0.
const GRAY_CHROMA: f64 = 1e-9;

/// A color in hue/saturation/luminance/alpha form.
///
/// `h` is in degrees, `[0, 360)`. `s`, `l` and `a` are fractions in `[0, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Hsla {
	pub h: f64,
	pub s: f64,
	pub l: f64,
	pub a: f64,
}

/// Projects a hue angle onto the x axis of the unit circle.
pub fn deg_to_x(deg: f64) -> f64 {
	(deg * PI / 180.).cos()
}

/// Projects a hue angle onto the y axis of the unit circle.
pub fn deg_to_y(deg: f64) -> f64 {
	(deg * PI / 180.).sin()
}

/// Converts a point around the unit circle back into a hue angle in `[0, 360)`.
///
/// The origin maps to 0.
pub fn xy_to_deg(x: f64, y: f64) -> f64 {
	normalize_hue(y.atan2(x) * 180. / PI)
}

fn normalize_hue(deg: f64) -> f64 {
	let deg = deg.rem_euclid(360.);
	// `rem_euclid` can round up to exactly 360 for tiny negative inputs
	if deg >= 360. { 0. } else { deg }
}

impl Hsla {
	pub fn new(h: f64, s: f64, l: f64, a: f64) -> Self {
		Self { h: normalize_hue(h), s, l, a }
	}

	/// Distance between two colors.
	///
	/// Hue difference is taken the short way around the circle and scaled
	/// to `[0, 1]`, then combined with the saturation and luminance
	/// differences as a Euclidean length. Alpha is not considered.
	pub fn distance(&self, other: &Hsla) -> f64 {
		let dh = (self.h - other.h).abs();
		let dh = dh.min(360. - dh) / 180.;
		let ds = self.s - other.s;
		let dl = self.l - other.l;
		(dh * dh + ds * ds + dl * dl).sqrt()
	}

	/// Averages a collection of colors.
	///
	/// Hue is averaged through its unit-circle projection so that, for
	/// instance, 350° and 10° average to 0° rather than 180°. Returns `None`
	/// for an empty collection.
	pub fn average<I: IntoIterator<Item = Hsla>>(colors: I) -> Option<Hsla> {
		let mut count = 0usize;
		let (mut x, mut y) = (0., 0.);
		let (mut s, mut l, mut a) = (0., 0., 0.);
		for c in colors {
			x += deg_to_x(c.h);
			y += deg_to_y(c.h);
			s += c.s;
			l += c.l;
			a += c.a;
			count += 1;
		}
		if count == 0 {
			return None;
		}
		let n = count as f64;
		Some(Hsla {
			h: xy_to_deg(x / n, y / n),
			s: s / n,
			l: l / n,
			a: a / n,
		})
	}

	/// Converts from 8-bit RGBA.
	pub fn from_rgba(c: Rgba) -> Self {
		let r = c.0[0] as f64 / 255.;
		let g = c.0[1] as f64 / 255.;
		let b = c.0[2] as f64 / 255.;
		let a = c.0[3] as f64 / 255.;

		let max = r.max(g.max(b));
		let min = r.min(g.min(b));
		let chroma = max - min;
		let l = (max + min) / 2.;

		if chroma <= GRAY_CHROMA {
			return Hsla { h: 0., s: 0., l, a };
		}

		let s = chroma / (1. - (2. * l - 1.).abs());
		let (diff, sector) = if max == r {
			(g - b, 0.)
		} else if max == g {
			(b - r, 2.)
		} else {
			(r - g, 4.)
		};
		Hsla { h: normalize_hue((diff / chroma + sector) * 60.), s, l, a }
	}

	/// Converts to 8-bit RGBA, rounding each channel to the nearest value.
	pub fn to_rgba(&self) -> Rgba {
		let chroma = (1. - (2. * self.l - 1.).abs()) * self.s;
		let hp = normalize_hue(self.h) / 60.;
		let x = chroma * (1. - (hp % 2. - 1.).abs());
		let (r, g, b) = match hp as u32 {
			0 => (chroma, x, 0.),
			1 => (x, chroma, 0.),
			2 => (0., chroma, x),
			3 => (0., x, chroma),
			4 => (x, 0., chroma),
			_ => (chroma, 0., x),
		};
		let m = self.l - chroma / 2.;
		image::Rgba([
			to_byte(r + m),
			to_byte(g + m),
			to_byte(b + m),
			to_byte(self.a),
		])
	}
}

fn to_byte(v: f64) -> u8 {
	(v * 255.).round().max(0.).min(255.) as u8
}

impl From<Rgba> for Hsla {
	fn from(c: Rgba) -> Self {
		Hsla::from_rgba(c)
	}
}

impl From<Hsla> for Rgba {
	fn from(c: Hsla) -> Self {
		c.to_rgba()
	}
}
