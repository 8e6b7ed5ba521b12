// Copyright (c) 2022 Bastiaan Marinus van de Weerd


#[derive(Debug, clap::Args)]
pub(crate) struct Options {}


struct Grid {
	tree_heights: Vec<u8>,
	width: usize,
}

impl Grid {
	fn height(&self) -> usize {
		self.tree_heights.len() / self.width
	}

	fn tree_height_xy(&self, x: usize, y: usize) -> u8 {
		self.tree_heights[y * self.width + x]
	}

	/// Returns the trees seen looking up, left, right and down from `(x, y)`, nearest first.
	fn sightlines(&self, x: usize, y: usize) -> [Box<dyn Iterator<Item = u8> + '_>; 4] {
		[
			Box::new((0..y).rev().map(move |y| self.tree_height_xy(x, y))),
			Box::new((0..x).rev().map(move |x| self.tree_height_xy(x, y))),
			Box::new((x + 1..self.width).map(move |x| self.tree_height_xy(x, y))),
			Box::new((y + 1..self.height()).map(move |y| self.tree_height_xy(x, y))),
		]
	}

	fn positions(&self) -> impl Iterator<Item = (usize, usize)> {
		itertools::iproduct!(0..self.height(), 0..self.width).map(|(y, x)| (x, y))
	}
}

/// Counts trees up to and including the first one at least as tall as `height`.
fn viewing_distance(sightline: impl Iterator<Item = u8>, height: u8) -> usize {
	let mut distance = 0;
	for tree in sightline {
		distance += 1;
		if tree >= height { break }
	}
	distance
}


fn input_grid_from_str(s: &str) -> Result<Grid, parsing::GridError> {
	s.parse()
}


fn part1_impl(input_grid: &Grid) -> usize {
	tracing::trace!("grid:\n{input_grid}");
	input_grid.positions()
		.filter(|&(x, y)| {
			let height = input_grid.tree_height_xy(x, y);
			input_grid.sightlines(x, y).into_iter()
				.any(|mut sightline| sightline.all(|tree| tree < height))
		})
		.count()
}

pub(crate) fn part1(input: &str, _: &Options) -> anyhow::Result<usize> {
	Ok(part1_impl(&input_grid_from_str(input)?))
}


fn part2_impl(input_grid: &Grid) -> u64 {
	input_grid.positions()
		.map(|(x, y)| {
			let height = input_grid.tree_height_xy(x, y);
			input_grid.sightlines(x, y).into_iter()
				.map(|sightline| viewing_distance(sightline, height) as u64)
				.product::<u64>()
		})
		.max()
		.unwrap_or(0)
}

pub(crate) fn part2(input: &str, _: &Options) -> anyhow::Result<u64> {
	Ok(part2_impl(&input_grid_from_str(input)?))
}


mod parsing {
	use std::str::FromStr;
	use super::Grid;

	#[derive(Debug, thiserror::Error)]
	pub(super) enum GridError {
		#[error("Empty input")]
		Empty,
		#[error("Line {line} has {found} trees, expected {len}")]
		LineLen { line: usize, len: usize, found: usize },
		#[error("Invalid byte {found:#04x} at line {line}, column {column}")]
		InvalidByte { line: usize, column: usize, found: u8 },
	}

	impl FromStr for Grid {
		type Err = GridError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			if s.trim().is_empty() { return Err(GridError::Empty) }

			let mut tree_heights = vec![];
			let mut width = None;

			for (l, line) in s.lines().enumerate() {
				for (c, b) in line.bytes().enumerate() {
					if !b.is_ascii_digit() {
						return Err(GridError::InvalidByte { line: l + 1, column: c + 1, found: b })
					}
					tree_heights.push(b - b'0');
				}

				match width {
					None => width = Some(line.len()),
					Some(len) if line.len() != len =>
						return Err(GridError::LineLen { line: l + 1, len, found: line.len() }),
					Some(_) => (),
				}
			}

			match width {
				Some(width) if width > 0 => Ok(Grid { tree_heights, width }),
				_ => Err(GridError::Empty),
			}
		}
	}
}


impl std::fmt::Display for Grid {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use std::fmt::Write;
		for y in 0..self.height() {
			for x in 0..self.width {
				f.write_char((b'0' + self.tree_height_xy(x, y)) as char)?;
			}
			if y < self.height() - 1 { f.write_char('\n')? }
		}
		Ok(())
	}
}
