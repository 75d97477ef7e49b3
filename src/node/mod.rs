pub mod color;
pub mod error;

use color::Hsla;
use raster::PixelSource;

/// Axis-aligned rectangle of pixels, in the coordinate space of the
/// image the tree was built from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Region {
	pub x: u32,
	pub y: u32,
	pub width: u32,
	pub height: u32,
}

impl Region {
	pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
		Region { x, y, width, height }
	}

	pub fn area(&self) -> u64 {
		self.width as u64 * self.height as u64
	}

	/// Bisects the region, or returns `None` for a single pixel.
	///
	/// Regions taller than they are wide are cut into a top and a bottom
	/// half; all others (square included) into a left and a right half.
	/// When the cut dimension is odd, the second half gets the extra row
	/// or column.
	pub fn split(&self) -> Option<(Region, Region)> {
		if self.width <= 1 && self.height <= 1 {
			return None;
		}
		if self.height > self.width {
			let top = self.height / 2;
			Some((
				Region::new(self.x, self.y, self.width, top),
				Region::new(self.x, self.y + top, self.width, self.height - top),
			))
		} else {
			let left = self.width / 2;
			Some((
				Region::new(self.x, self.y, left, self.height),
				Region::new(self.x + left, self.y, self.width - left, self.height),
			))
		}
	}

	/// Iterates over every pixel coordinate in the region, row by row.
	pub fn pixels(&self) -> impl Iterator<Item = (u32, u32)> {
		let Region { x, y, width, height } = *self;
		(y..y + height).flat_map(move |row| (x..x + width).map(move |col| (col, row)))
	}
}

/// Node in a partition tree.
///
/// May contain two subnodes (branch node) or none (leaf node). The
/// subnodes split this node's region between them with no gap or overlap.
///
/// Every node holds the average color of its whole region, taken from
/// the source pixels when the node was built, so that a leaf made by
/// pruning can still be drawn with the right color.
#[derive(Clone, Debug, PartialEq)]
pub struct PartitionNode {
	pub(crate) region: Region,
	pub(crate) average: Hsla,
	pub(crate) sections: Option<Box<[PartitionNode; 2]>>,
}

impl PartitionNode {
	/// Recursively builds the node covering `region` of `source`, down to
	/// single-pixel leaves.
	///
	/// `region` must lie inside `source` and have a nonzero width and height.
	pub(crate) fn build<S: PixelSource + ?Sized>(source: &S, region: Region) -> Self {
		// Computed over the whole region, not merged from the subnodes
		let average = Hsla::average(region.pixels().map(|(x, y)| source.pixel(x, y)))
			.unwrap_or_default();
		let sections = region.split().map(|(first, second)| Box::new([
			Self::build(source, first),
			Self::build(source, second),
		]));
		PartitionNode { region, average, sections }
	}

	pub fn region(&self) -> Region {
		self.region
	}

	pub fn average(&self) -> Hsla {
		self.average
	}

	pub fn is_leaf(&self) -> bool {
		self.sections.is_none()
	}

	/// The subnode nearer the origin (left or top).
	pub fn left(&self) -> Option<&PartitionNode> {
		self.sections.as_ref().map(|s| &s[0])
	}

	/// The subnode further from the origin (right or bottom).
	pub fn right(&self) -> Option<&PartitionNode> {
		self.sections.as_ref().map(|s| &s[1])
	}

	/// Number of nodes in this subtree, this one included.
	pub fn size(&self) -> usize {
		1 + self.sections.as_ref()
			.map(|s| s.iter().map(PartitionNode::size).sum::<usize>())
			.unwrap_or(0)
	}

	pub fn num_leaves(&self) -> usize {
		match self.sections {
			Some(ref s) => s.iter().map(PartitionNode::num_leaves).sum(),
			None => 1,
		}
	}

	/// Number of nodes on the longest path from this node down to a leaf.
	pub fn depth(&self) -> usize {
		1 + self.sections.as_ref()
			.map(|s| s.iter().map(PartitionNode::depth).max().unwrap_or(0))
			.unwrap_or(0)
	}

	/// Collects the leaves of this subtree, left before right.
	pub fn leaves(&self) -> Vec<&PartitionNode> {
		let mut out = Vec::new();
		self.collect_leaves(&mut out);
		out
	}

	fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a PartitionNode>) {
		match self.sections {
			Some(ref s) => s.iter().for_each(|n| n.collect_leaves(out)),
			None => out.push(self),
		}
	}
}

pub mod raster;
pub mod transform;
