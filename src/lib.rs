//! Binary space-partitioning trees over image pixels.
//!
//! A [`PartitionTree`] is built from any [`PixelSource`] (an
//! [`image::RgbaImage`] or an [`HslaImage`]) by halving the image again
//! and again until every leaf is a single pixel. Every node keeps the
//! average color of its region, so the tree can then be pruned down to a
//! coarser approximation of the image, mirrored, and rendered back out.

pub mod node;
pub mod tree;

pub use node::color::Hsla;
pub use node::error::*;
pub use node::raster::{HslaImage, PixelSink, PixelSource};
pub use node::{PartitionNode, Region};
pub use tree::PartitionTree;
