use thiserror::Error;

/// Reason why an image couldn't be turned into a partition tree.
#[derive(Debug, Error, PartialEq)]
pub enum BuildError {
	/// The source image has no columns.
	#[error("source image has zero width")]
	ZeroWidth,
	/// The source image has no rows.
	#[error("source image has zero height")]
	ZeroHeight,
}

/// Reason why a partition tree couldn't be pruned.
#[derive(Debug, Error, PartialEq)]
pub enum PruneError {
	/// The tree, or the tree it was cloned from, has already been pruned.
	/// Pruning compares against per-pixel leaves, which no longer exist.
	#[error("tree has already been pruned")]
	AlreadyPruned,
}

/// Reason why a partition tree couldn't be rendered to a pixel buffer.
#[derive(Debug, Error, PartialEq)]
pub enum DrawError {
	/// The tree has no root.
	#[error("tree is empty")]
	EmptyTree,
	/// The buffer's dimensions differ from the root region.
	#[error("buffer is {found:?} pixels, tree covers {expected:?}")]
	DimensionMismatch {
		expected: (u32, u32),
		found: (u32, u32),
	},
}

/// Reason why the leaves of a tree don't exactly cover its root region.
#[derive(Debug, Error, PartialEq)]
pub enum TilingError {
	/// A leaf reaches outside the root region.
	#[error("leaf covers ({x}, {y}), outside the root region")]
	OutOfBounds { x: u32, y: u32 },
	/// Two leaves cover the same pixel.
	#[error("pixel ({x}, {y}) is covered by more than one leaf")]
	Overlap { x: u32, y: u32 },
	/// Some pixels are covered by no leaf.
	#[error("{uncovered} pixels are not covered by any leaf")]
	Gap { uncovered: usize },
}
