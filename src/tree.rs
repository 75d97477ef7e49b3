use bitvec::order::Msb0;
use bitvec::vec::BitVec;
use tracing::{debug, warn};

use crate::node::error::*;
use crate::node::raster::{HslaImage, PixelSink, PixelSource};
use crate::node::{PartitionNode, Region};

/// One bit per pixel of the root region, row-major.
type CoverageBitVec = BitVec<u8, Msb0>;

/// Binary space-partitioning tree over the pixels of an image.
///
/// The root covers the whole image. Every branch splits its region in two
/// (across the longer side, or left/right when square) and every leaf of a
/// freshly built tree is a single pixel. Each node remembers the average
/// color of its region, so the tree can be pruned back to a coarser
/// approximation and rendered at that level of detail.
///
/// Cloning makes a fully independent copy, including whether the tree has
/// been pruned.
#[derive(Clone, Debug, Default)]
pub struct PartitionTree {
	root: Option<PartitionNode>,
	pruned: bool,
}

impl PartitionTree {
	/// Builds a tree whose root covers all of `source`.
	pub fn build<S: PixelSource + ?Sized>(source: &S) -> Result<Self, BuildError> {
		let (width, height) = (source.width(), source.height());
		if width == 0 {
			return Err(BuildError::ZeroWidth);
		}
		if height == 0 {
			return Err(BuildError::ZeroHeight);
		}
		let root = PartitionNode::build(source, Region::new(0, 0, width, height));
		debug!(width, height, nodes = root.size(), "built partition tree");
		Ok(PartitionTree { root: Some(root), pruned: false })
	}

	/// Read-only access to the root node, if any.
	pub fn root(&self) -> Option<&PartitionNode> {
		self.root.as_ref()
	}

	pub fn is_empty(&self) -> bool {
		self.root.is_none()
	}

	/// Whether this tree, or the tree it was cloned from, has been pruned.
	pub fn is_pruned(&self) -> bool {
		self.pruned
	}

	/// Releases every node, leaving an empty tree.
	pub fn clear(&mut self) {
		self.root = None;
		self.pruned = false;
	}

	/// Total number of nodes, branches and leaves alike.
	pub fn size(&self) -> usize {
		self.root.as_ref().map(PartitionNode::size).unwrap_or(0)
	}

	pub fn num_leaves(&self) -> usize {
		self.root.as_ref().map(PartitionNode::num_leaves).unwrap_or(0)
	}

	/// Number of nodes on the longest root-to-leaf path.
	pub fn depth(&self) -> usize {
		self.root.as_ref().map(PartitionNode::depth).unwrap_or(0)
	}

	/// Renders the leaves into a new image the size of the root region.
	///
	/// An empty tree renders a 0x0 image.
	pub fn render(&self) -> HslaImage {
		match self.root {
			Some(ref root) => {
				let mut out = HslaImage::new(root.region.width, root.region.height);
				root.paint(&mut out);
				out
			},
			None => HslaImage::new(0, 0),
		}
	}

	/// Renders the leaves into an existing buffer, which must be exactly
	/// the size of the root region.
	pub fn render_into<S: PixelSink + ?Sized>(&self, sink: &mut S) -> Result<(), DrawError> {
		let root = self.root.as_ref().ok_or(DrawError::EmptyTree)?;
		let expected = (root.region.width, root.region.height);
		let found = (sink.width(), sink.height());
		if expected != found {
			return Err(DrawError::DimensionMismatch { expected, found });
		}
		root.paint(sink);
		Ok(())
	}

	/// Collapses every subtree whose leaves are all within `tolerance` of
	/// the subtree root's average color into a single leaf, as close to the
	/// root as possible.
	///
	/// Only meaningful on a tree whose leaves are still single pixels, so
	/// it may be done once per tree; later calls, including on clones of a
	/// pruned tree, fail and change nothing.
	///
	/// Returns the number of subtrees collapsed.
	pub fn prune(&mut self, tolerance: f64) -> Result<usize, PruneError> {
		if self.pruned {
			warn!(tolerance, "refusing to prune an already pruned tree");
			return Err(PruneError::AlreadyPruned);
		}
		let root = match self.root {
			Some(ref mut root) => root,
			None => return Ok(0),
		};
		let collapsed = root.prune(tolerance);
		self.pruned = true;
		debug!(tolerance, collapsed, leaves = self.num_leaves(), "pruned partition tree");
		Ok(collapsed)
	}

	/// Rearranges the leaves so that rendering gives the image mirrored
	/// left to right.
	pub fn flip_horizontal(&mut self) {
		if let Some(ref mut root) = self.root {
			let width = root.region.width;
			root.flip_horizontal(width);
			debug!(width, "flipped partition tree horizontally");
		}
	}

	/// Rearranges the leaves so that rendering gives the image mirrored
	/// top to bottom.
	pub fn flip_vertical(&mut self) {
		if let Some(ref mut root) = self.root {
			let height = root.region.height;
			root.flip_vertical(height);
			debug!(height, "flipped partition tree vertically");
		}
	}

	/// Checks that the leaves cover every pixel of the root region exactly
	/// once. An empty tree trivially passes.
	pub fn check_tiling(&self) -> Result<(), TilingError> {
		let root = match self.root {
			Some(ref root) => root,
			None => return Ok(()),
		};
		let (width, height) = (root.region.width, root.region.height);
		let mut covered = CoverageBitVec::repeat(false, width as usize * height as usize);
		for leaf in root.leaves() {
			for (x, y) in leaf.region.pixels() {
				if x >= width || y >= height {
					return Err(TilingError::OutOfBounds { x, y });
				}
				if covered.replace(y as usize * width as usize + x as usize, true) {
					return Err(TilingError::Overlap { x, y });
				}
			}
		}
		match covered.count_zeros() {
			0 => Ok(()),
			uncovered => Err(TilingError::Gap { uncovered }),
		}
	}
}
