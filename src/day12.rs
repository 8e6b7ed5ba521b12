// Copyright (c) 2022 Bastiaan Marinus van de Weerd


#[derive(Debug, clap::Args)]
pub(crate) struct Options {}


struct Heightmap {
	heights: Vec<u8>,
	width: usize,
	start: usize,
	end: usize,
}

impl Heightmap {
	fn xy(&self, pos: usize) -> (usize, usize) {
		(pos % self.width, pos / self.width)
	}

	/// Returns an [`Iterator`] with as its [`Iterator::Item`]s pairs of position and height.
	fn adjacent_heights(&self, pos: usize) -> impl Iterator<Item = (usize, u8)> + '_ {
		let w = self.width;
		macro_rules! item { ( $pos:expr ) => { ($pos, self.heights[$pos]) } }
		let above = (pos >= w).then(|| item!(pos - w));
		let left = (pos % w > 0).then(|| item!(pos - 1));
		let right = (pos % w < w - 1).then(|| item!(pos + 1));
		let below = (pos + w < self.heights.len()).then(|| item!(pos + w));
		[above, left, right, below].into_iter().flatten()
	}

	/// Positions that can be stepped to from `pos`.
	fn reachable_adjacent_heights(&self, pos: usize) -> impl Iterator<Item = (usize, u8)> + '_ {
		let height = self.heights[pos];
		self.adjacent_heights(pos).filter(move |&(_, h)| h <= height + 1)
	}

	/// Positions from which `pos` can be stepped to.
	fn reaching_adjacent_heights(&self, pos: usize) -> impl Iterator<Item = (usize, u8)> + '_ {
		let height = self.heights[pos];
		self.adjacent_heights(pos).filter(move |&(_, h)| h + 1 >= height)
	}

	/// Breadth-first search; returns the fewest steps from `from` to a position satisfying `to`.
	fn find_steps<Next: Iterator<Item = (usize, u8)>>(
		&self,
		from: usize,
		to: impl Fn(usize) -> bool,
		next_steps: impl Fn(usize) -> Next,
	) -> Option<usize> {
		use std::collections::VecDeque;

		let mut queue = VecDeque::from([(from, 0)]);
		let mut visited = vec![false; self.heights.len()];
		visited[from] = true;

		while let Some((pos, steps)) = queue.pop_front() {
			if to(pos) {
				tracing::debug!(from = ?self.xy(from), to = ?self.xy(pos), steps);
				return Some(steps)
			}
			for (next, _) in next_steps(pos) {
				if visited[next] { continue }
				visited[next] = true;
				queue.push_back((next, steps + 1));
			}
		}

		tracing::debug!(from = ?self.xy(from), visited = visited.iter().filter(|&&v| v).count(), "no path");
		None
	}
}

#[derive(Debug, thiserror::Error)]
enum ClimbError {
	#[error("No path from the start to the best signal location")]
	FromStart,
	#[error("No path from any lowest square to the best signal location")]
	FromLowest,
}


fn input_heightmap_from_str(s: &str) -> Result<Heightmap, parsing::HeightmapError> {
	s.parse()
}


fn part1_impl(input_heightmap: &Heightmap) -> Result<usize, ClimbError> {
	input_heightmap.find_steps(
		input_heightmap.start,
		|pos| pos == input_heightmap.end,
		|pos| input_heightmap.reachable_adjacent_heights(pos),
	).ok_or(ClimbError::FromStart)
}

pub(crate) fn part1(input: &str, _: &Options) -> anyhow::Result<usize> {
	Ok(part1_impl(&input_heightmap_from_str(input)?)?)
}


/// Searches backwards from the end, so one search covers every lowest square.
fn part2_impl(input_heightmap: &Heightmap) -> Result<usize, ClimbError> {
	input_heightmap.find_steps(
		input_heightmap.end,
		|pos| input_heightmap.heights[pos] == 0,
		|pos| input_heightmap.reaching_adjacent_heights(pos),
	).ok_or(ClimbError::FromLowest)
}

pub(crate) fn part2(input: &str, _: &Options) -> anyhow::Result<usize> {
	Ok(part2_impl(&input_heightmap_from_str(input)?)?)
}


mod parsing {
	use std::str::FromStr;
	use super::Heightmap;

	#[derive(Debug, thiserror::Error)]
	pub(super) enum HeightmapError {
		#[error("Empty input")]
		Empty,
		#[error("Line {line} has {found} squares, expected {len}")]
		LineLen { line: usize, len: usize, found: usize },
		#[error("Invalid byte {found:#04x} at line {line}, column {column}")]
		InvalidByte { line: usize, column: usize, found: u8 },
		#[error("Second start at line {line}, column {column}")]
		DuplicateStart { line: usize, column: usize },
		#[error("Second best signal location at line {line}, column {column}")]
		DuplicateEnd { line: usize, column: usize },
		#[error("No start (“S”)")]
		NoStart,
		#[error("No best signal location (“E”)")]
		NoEnd,
	}

	impl FromStr for Heightmap {
		type Err = HeightmapError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			use HeightmapError::*;
			if s.trim().is_empty() { return Err(Empty) }

			let mut heights = vec![];
			let mut width = None;
			let mut start = None;
			let mut end = None;

			for (l, line) in s.lines().enumerate() {
				match width {
					None => width = Some(line.len()),
					Some(len) if line.len() != len =>
						return Err(LineLen { line: l + 1, len, found: line.len() }),
					Some(_) => (),
				}

				for (c, b) in line.bytes().enumerate() {
					macro_rules! set_once { ( $which:ident, $err:ident, $height:literal ) => { {
						if $which.is_some() { return Err($err { line: l + 1, column: c + 1 }) }
						$which = Some(heights.len());
						$height
					} } }

					let height = match b {
						b'S' => set_once!(start, DuplicateStart, 0),
						b'E' => set_once!(end, DuplicateEnd, 25),
						b'a'..=b'z' => b - b'a',
						found => return Err(InvalidByte { line: l + 1, column: c + 1, found }),
					};
					heights.push(height);
				}
			}

			let width = width.filter(|&w| w > 0).ok_or(Empty)?;
			Ok(Heightmap {
				heights,
				width,
				start: start.ok_or(NoStart)?,
				end: end.ok_or(NoEnd)?,
			})
		}
	}
}
