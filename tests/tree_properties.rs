//! Property tests for partition trees built from arbitrary small images.
//!
//! 1. Area is conserved at every branch; leaf count equals pixel count.
//! 2. Rendering an unpruned tree reproduces the source.
//! 3. Pruned leaves stay within tolerance of every pixel they cover.
//! 4. A larger tolerance never leaves more leaves.
//! 5. Each flip undoes itself.
//! 6. Rendering after a flip mirrors the original render.
//! 7. Leaves tile the image through pruning and flipping.

use image::{Rgba, RgbaImage};
use proptest::prelude::*;
use ptree_img::{Hsla, PartitionNode, PartitionTree, Region};

// ── Helpers ─────────────────────────────────────────────────────────────

fn image_strategy() -> impl Strategy<Value = RgbaImage> {
	(1u32..=9, 1u32..=9).prop_flat_map(|(w, h)| {
		prop::collection::vec(any::<[u8; 4]>(), (w * h) as usize).prop_map(move |px| {
			RgbaImage::from_fn(w, h, |x, y| Rgba(px[(y * w + x) as usize]))
		})
	})
}

/// Few distinct colors, so pruning has flat regions to find.
fn blocky_image_strategy() -> impl Strategy<Value = RgbaImage> {
	(1u32..=12, 1u32..=12, prop::collection::vec(any::<[u8; 4]>(), 3)).prop_map(|(w, h, palette)| {
		RgbaImage::from_fn(w, h, |x, y| Rgba(palette[((x / 3 + y / 4) % 3) as usize]))
	})
}

fn check_areas(node: &PartitionNode) -> Result<(), TestCaseError> {
	if let (Some(l), Some(r)) = (node.left(), node.right()) {
		prop_assert_eq!(node.region().area(), l.region().area() + r.region().area());
		check_areas(l)?;
		check_areas(r)?;
	}
	Ok(())
}

fn leaf_regions(tree: &PartitionTree) -> Vec<Region> {
	tree.root().map(|r| r.leaves().iter().map(|l| l.region()).collect()).unwrap_or_default()
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Area conservation
// ═════════════════════════════════════════════════════════════════════════

proptest! {
	#[test]
	fn area_is_conserved(img in image_strategy()) {
		let tree = PartitionTree::build(&img).unwrap();
		check_areas(tree.root().unwrap())?;
		prop_assert_eq!(tree.num_leaves() as u32, img.width() * img.height());
		prop_assert_eq!(tree.size(), 2 * tree.num_leaves() - 1);
	}
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Round-trip render
// ═════════════════════════════════════════════════════════════════════════

proptest! {
	#[test]
	fn unpruned_render_round_trips(img in image_strategy()) {
		let tree = PartitionTree::build(&img).unwrap();
		prop_assert_eq!(tree.render().to_rgba(), img);
	}
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Pruned leaves honor the tolerance
// ═════════════════════════════════════════════════════════════════════════

proptest! {
	#[test]
	fn pruned_leaves_are_within_tolerance(img in blocky_image_strategy(), tolerance in 0.0f64..0.8) {
		let mut tree = PartitionTree::build(&img).unwrap();
		tree.prune(tolerance).unwrap();
		let rendered = tree.render();
		for leaf in tree.root().unwrap().leaves() {
			let avg = leaf.average();
			for (x, y) in leaf.region().pixels() {
				prop_assert_eq!(rendered.get_pixel(x, y), avg);
				let original = Hsla::from_rgba(*img.get_pixel(x, y));
				prop_assert!(avg.distance(&original) <= tolerance + 1e-9);
			}
		}
	}
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Prune monotonicity
// ═════════════════════════════════════════════════════════════════════════

proptest! {
	#[test]
	fn larger_tolerance_never_adds_leaves(
		img in blocky_image_strategy(),
		low in 0.0f64..0.6,
		extra in 0.0f64..0.6
	) {
		let tree = PartitionTree::build(&img).unwrap();
		let mut fine = tree.clone();
		let mut coarse = tree.clone();
		fine.prune(low).unwrap();
		coarse.prune(low + extra).unwrap();
		prop_assert!(coarse.num_leaves() <= fine.num_leaves());
		prop_assert_eq!(tree.num_leaves() as u32, img.width() * img.height());
	}
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Flip involution
// ═════════════════════════════════════════════════════════════════════════

proptest! {
	#[test]
	fn flips_are_involutions(img in blocky_image_strategy(), tolerance in 0.0f64..0.5, prune in any::<bool>()) {
		let mut tree = PartitionTree::build(&img).unwrap();
		if prune {
			tree.prune(tolerance).unwrap();
		}
		let before = leaf_regions(&tree);

		tree.flip_horizontal();
		tree.flip_horizontal();
		prop_assert_eq!(&leaf_regions(&tree), &before);

		tree.flip_vertical();
		tree.flip_vertical();
		prop_assert_eq!(&leaf_regions(&tree), &before);
	}
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Flip-render correspondence
// ═════════════════════════════════════════════════════════════════════════

proptest! {
	#[test]
	fn flipped_render_is_mirrored(img in blocky_image_strategy(), tolerance in 0.0f64..0.5) {
		let mut tree = PartitionTree::build(&img).unwrap();
		tree.prune(tolerance).unwrap();
		let original = tree.render();
		let (w, h) = original.dimensions();

		let mut horizontal = tree.clone();
		horizontal.flip_horizontal();
		let flipped = horizontal.render();
		for y in 0..h {
			for x in 0..w {
				prop_assert_eq!(flipped.get_pixel(x, y), original.get_pixel(w - 1 - x, y));
			}
		}

		let mut vertical = tree.clone();
		vertical.flip_vertical();
		let flipped = vertical.render();
		for y in 0..h {
			for x in 0..w {
				prop_assert_eq!(flipped.get_pixel(x, y), original.get_pixel(x, h - 1 - y));
			}
		}
	}
}

// ═════════════════════════════════════════════════════════════════════════
// 7. Tiling
// ═════════════════════════════════════════════════════════════════════════

proptest! {
	#[test]
	fn leaves_tile_the_image(img in blocky_image_strategy(), tolerance in 0.0f64..1.0) {
		let mut tree = PartitionTree::build(&img).unwrap();
		prop_assert_eq!(tree.check_tiling(), Ok(()));
		tree.prune(tolerance).unwrap();
		prop_assert_eq!(tree.check_tiling(), Ok(()));
		tree.flip_vertical();
		tree.flip_horizontal();
		prop_assert_eq!(tree.check_tiling(), Ok(()));
	}
}
