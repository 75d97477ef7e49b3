use super::color::Hsla;

impl super::PartitionNode {
	/// Collapses, as close to this node as possible, every subtree whose
	/// leaves all lie within `tolerance` of the subtree root's average.
	///
	/// A collapsed node drops its subnodes and keeps its own region and
	/// average. Subtrees that can't be collapsed as a whole are processed
	/// subnode by subnode, each against its own average.
	///
	/// Returns the number of subtrees collapsed.
	pub(crate) fn prune(&mut self, tolerance: f64) -> usize {
		let average = self.average;
		let collapse = match self.sections {
			Some(ref sects) => sects.iter().all(|s| s.leaves_within(&average, tolerance)),
			None => return 0,
		};
		if collapse {
			self.sections = None;
			1
		} else {
			self.sections.as_mut()
				.map(|sects| sects.iter_mut().map(|s| s.prune(tolerance)).sum::<usize>())
				.unwrap_or(0)
		}
	}

	/// Whether every leaf under this node is within `tolerance` of `average`.
	fn leaves_within(&self, average: &Hsla, tolerance: f64) -> bool {
		match self.sections {
			Some(ref sects) => sects.iter().all(|s| s.leaves_within(average, tolerance)),
			None => self.average.distance(average) <= tolerance,
		}
	}

	/// Mirrors every leaf across the vertical center line of a root region
	/// `root_width` pixels wide. Branch nodes are left as they are.
	pub(crate) fn flip_horizontal(&mut self, root_width: u32) {
		match self.sections {
			Some(ref mut sects) => sects.iter_mut().for_each(|s| s.flip_horizontal(root_width)),
			None => self.region.x = root_width - self.region.width - self.region.x,
		}
	}

	/// Mirrors every leaf across the horizontal center line of a root region
	/// `root_height` pixels tall. Branch nodes are left as they are.
	pub(crate) fn flip_vertical(&mut self, root_height: u32) {
		match self.sections {
			Some(ref mut sects) => sects.iter_mut().for_each(|s| s.flip_vertical(root_height)),
			None => self.region.y = root_height - self.region.height - self.region.y,
		}
	}
}
