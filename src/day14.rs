// Copyright (c) 2022 Bastiaan Marinus van de Weerd


#[derive(Debug, clap::Args)]
pub(crate) struct Options {}


const SOURCE_X: usize = 500;
/// Deepest rock accepted; bounds the grid allocation.
const MAX_DEPTH: usize = 2_000;


#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Cell { Air, Rock, Sand }

/// Sand spreads at most one column per row it falls, so only the triangle below the source
/// down to the floor (two rows below the deepest rock) is stored. Rocks outside of it are
/// never touched and get dropped.
struct Cave {
	cells: Vec<Cell>,
	width: usize,
	floor: usize,
}

impl Cave {
	fn from_paths(paths: &[Vec<[usize; 2]>]) -> Self {
		use itertools::{iproduct, Itertools as _};

		let max_y = paths.iter().flatten().map(|&[_, y]| y).max().unwrap_or(0);
		let floor = max_y + 2;
		let width = 2 * floor + 1;
		let mut cave = Cave { cells: vec![Cell::Air; width * floor], width, floor };
		let (min_x, max_x) = (SOURCE_X.saturating_sub(floor), SOURCE_X + floor);

		for path in paths {
			let segments = path.iter().tuple_windows().map(|(&from, &to)| [from, to]);
			let points = path.first().filter(|_| path.len() == 1).map(|&point| [point, point]);
			for [[x0, y0], [x1, y1]] in segments.chain(points) {
				let xs = x0.min(x1).max(min_x)..=x0.max(x1).min(max_x);
				for (x, y) in iproduct!(xs, y0.min(y1)..=y0.max(y1)) {
					if let Some(col) = cave.col(x) { cave.cells[y * width + col] = Cell::Rock }
				}
			}
		}

		tracing::debug!(floor, width, num_rocks = cave.cells.iter().filter(|&&c| c == Cell::Rock).count());
		cave
	}

	fn col(&self, x: usize) -> Option<usize> {
		x.checked_add(self.floor)?.checked_sub(SOURCE_X).filter(|&col| col < self.width)
	}

	fn cell(&self, col: usize, y: usize) -> Cell {
		self.cells[y * self.width + col]
	}
}

impl std::fmt::Display for Cave {
	/// Draws the smallest area holding the source and everything that isn’t air.
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use {std::fmt::Write, itertools::Itertools as _};

		let source_col = self.floor;
		let occupied = self.cells.iter().positions(|&cell| cell != Cell::Air);
		let (cols, max_y) = occupied.fold(((source_col, source_col), 0), |((min, max), _), i| {
			let col = i % self.width;
			((min.min(col), max.max(col)), i / self.width)
		});

		for y in 0..=max_y {
			for col in cols.0..=cols.1 {
				f.write_char(match self.cell(col, y) {
					Cell::Air if [col, y] == [source_col, 0] => '+',
					Cell::Air => '.',
					Cell::Rock => '#',
					Cell::Sand => 'o',
				})?
			}
			if y < max_y { f.write_char('\n')? }
		}

		Ok(())
	}
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Bottom {
	/// Sand falling past the deepest rock is lost.
	Abyss,
	/// Sand comes to rest on the floor.
	Floor,
}

struct Simulation {
	cave: Cave,
	bottom: Bottom,
	grains_at_rest: usize,
}

impl Simulation {
	fn new(cave: Cave, bottom: Bottom) -> Self {
		Simulation { cave, bottom, grains_at_rest: 0 }
	}

	/// Returns where a new grain comes to rest, or `None` if it falls into the abyss or the
	/// source is blocked.
	fn drop_grain(&mut self) -> Option<[usize; 2]> {
		let cave = &mut self.cave;
		let (mut col, mut y) = (cave.floor, 0);
		if cave.cell(col, y) != Cell::Air { return None }

		loop {
			if y + 1 == cave.floor {
				match self.bottom { Bottom::Abyss => return None, Bottom::Floor => break }
			}
			match [col, col - 1, col + 1].into_iter().find(|&next| cave.cell(next, y + 1) == Cell::Air) {
				Some(next) => { col = next; y += 1 }
				None => break,
			}
		}

		cave.cells[y * cave.width + col] = Cell::Sand;
		self.grains_at_rest += 1;
		Some([col, y])
	}

	fn run(&mut self) -> usize {
		while let Some([col, y]) = self.drop_grain() {
			let x = (col + SOURCE_X) as isize - self.cave.floor as isize;
			tracing::trace!(grain = self.grains_at_rest, x, y);
		}
		tracing::debug!(bottom = ?self.bottom, grains = self.grains_at_rest);
		tracing::trace!("cave:\n{}", self.cave);
		self.grains_at_rest
	}
}


fn input_cave_from_str(s: &str) -> Result<Cave, parsing::CaveError> {
	s.parse()
}


fn part1_impl(input_cave: Cave) -> usize {
	Simulation::new(input_cave, Bottom::Abyss).run()
}

pub(crate) fn part1(input: &str, _: &Options) -> anyhow::Result<usize> {
	Ok(part1_impl(input_cave_from_str(input)?))
}


fn part2_impl(input_cave: Cave) -> usize {
	Simulation::new(input_cave, Bottom::Floor).run()
}

pub(crate) fn part2(input: &str, _: &Options) -> anyhow::Result<usize> {
	Ok(part2_impl(input_cave_from_str(input)?))
}


mod parsing {
	use std::{num::ParseIntError, str::FromStr};
	use super::{Cave, MAX_DEPTH};

	#[derive(Debug, thiserror::Error)]
	pub(super) enum PointError {
		#[error("expected “X,Y”")]
		Format,
		#[error("invalid x: {0}")]
		X(ParseIntError),
		#[error("invalid y: {0}")]
		Y(ParseIntError),
		#[error("not in line with the previous point")]
		Unaligned,
		#[error("deeper than {MAX_DEPTH}")]
		TooDeep,
	}

	#[derive(Debug, thiserror::Error)]
	pub(super) enum CaveError {
		#[error("Empty input")]
		Empty,
		#[error("Invalid point at line {line}, column {column}: {source}")]
		Point { line: usize, column: usize, source: PointError },
	}

	fn try_path_from_str(line: &str) -> Result<Vec<[usize; 2]>, (usize, PointError)> {
		let mut path: Vec<[usize; 2]> = vec![];
		let mut column = 1;
		for point in line.split(" -> ") {
			let err = |e| (column, e);
			let (x, y) = point.split_once(',').ok_or(err(PointError::Format))?;
			let x: usize = x.parse().map_err(|e| err(PointError::X(e)))?;
			let y: usize = y.parse().map_err(|e| err(PointError::Y(e)))?;
			if y > MAX_DEPTH { return Err(err(PointError::TooDeep)) }
			if let Some(&[prev_x, prev_y]) = path.last() {
				if prev_x != x && prev_y != y { return Err(err(PointError::Unaligned)) }
			}
			path.push([x, y]);
			column += point.len() + " -> ".len();
		}
		Ok(path)
	}

	impl FromStr for Cave {
		type Err = CaveError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			if s.trim().is_empty() { return Err(CaveError::Empty) }
			let paths = s.lines()
				.enumerate()
				.map(|(l, line)| try_path_from_str(line)
					.map_err(|(column, source)| CaveError::Point { line: l + 1, column, source }))
				.collect::<Result<Vec<_>, _>>()?;
			Ok(Cave::from_paths(&paths))
		}
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUT: &str = indoc::indoc! { "
		498,4 -> 498,6 -> 496,6
		503,4 -> 502,4 -> 502,9 -> 494,9
	" };

	#[test]
	fn example() {
		let cave = input_cave_from_str(INPUT).unwrap();
		assert_eq!((cave.floor, cave.width), (11, 23));
		assert_eq!(cave.to_string(), indoc::indoc! { "
			......+...
			..........
			..........
			..........
			....#...##
			....#...#.
			..###...#.
			........#.
			........#.
			#########.
		" }.trim_end());
		assert_eq!(part1_impl(cave), 24);
		assert_eq!(part2_impl(input_cave_from_str(INPUT).unwrap()), 93);
	}

	#[test]
	fn abyss() {
		let mut simulation = Simulation::new(input_cave_from_str(INPUT).unwrap(), Bottom::Abyss);
		assert_eq!(simulation.run(), 24);
		assert_eq!(simulation.cave.to_string(), indoc::indoc! { "
			......+...
			..........
			......o...
			.....ooo..
			....#ooo##
			...o#ooo#.
			..###ooo#.
			....oooo#.
			.o.ooooo#.
			#########.
		" }.trim_end());
		assert_eq!(simulation.drop_grain(), None);
	}

	#[test]
	fn floor() {
		// Sand fills the whole triangle above the floor, around the one rock
		let cave = input_cave_from_str("500,3").unwrap();
		assert_eq!(part1_impl(input_cave_from_str("500,3").unwrap()), 0);
		assert_eq!(part2_impl(cave), (1 + 3 + 5 + 7 + 9) - 1);

		// Rocks too far out to ever be reached are dropped
		let cave = input_cave_from_str("400,1 -> 600,1").unwrap();
		assert_eq!(cave.width, 7);
		assert_eq!(part2_impl(cave), 1);
	}

	#[test]
	fn far_out_rocks() {
		let far = format!("{},5\n498,9 -> 502,9", usize::MAX);
		assert_eq!(part1(&far, &Options {}).unwrap(), part1("498,9 -> 502,9", &Options {}).unwrap());
		assert_eq!(part2(&far, &Options {}).unwrap(), part2("498,9 -> 502,9", &Options {}).unwrap());

		// Only the reachable columns of a very long ledge are visited
		let cave = input_cave_from_str(&format!("0,5 -> {},5", usize::MAX)).unwrap();
		assert_eq!((cave.floor, cave.width), (7, 15));
		assert_eq!(cave.cells.iter().filter(|&&cell| cell == Cell::Rock).count(), 15);
		assert_eq!(part1_impl(cave), 1 + 3 + 5 + 7 + 9);
	}

	#[test]
	fn errors() {
		use parsing::{CaveError as E, PointError};
		assert!(matches!(input_cave_from_str(""), Err(E::Empty)));
		assert!(matches!(input_cave_from_str("498,4 -> 496,6"),
			Err(E::Point { line: 1, column: 10, source: PointError::Unaligned })));
		assert!(matches!(input_cave_from_str("498,4\n498,4 -> 498;6"),
			Err(E::Point { line: 2, column: 10, source: PointError::Format })));
		assert!(matches!(input_cave_from_str("x,4"),
			Err(E::Point { line: 1, column: 1, source: PointError::X(_) })));
		assert!(matches!(input_cave_from_str("498,4 ->498,6"),
			Err(E::Point { line: 1, column: 1, source: PointError::Y(_) })));
		assert!(matches!(input_cave_from_str("498,4 -> 498,2001"),
			Err(E::Point { line: 1, column: 10, source: PointError::TooDeep })));
	}
}
