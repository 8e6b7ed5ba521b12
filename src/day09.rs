// Copyright (c) 2022 Bastiaan Marinus van de Weerd


#[derive(Debug, clap::Args)]
pub(crate) struct Options {
	/// Number of knots in the part 2 rope, head included
	#[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u16).range(2..))]
	num_knots: u16,
}


#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Dir { Up, Down, Left, Right }

#[derive(Debug)]
struct Move(Dir, usize);

impl Dir {
	fn delta(self) -> [isize; 2] {
		match self { Dir::Up => [0, 1], Dir::Down => [0, -1], Dir::Left => [-1, 0], Dir::Right => [1, 0] }
	}
}


#[derive(Debug, thiserror::Error)]
#[error("A rope needs at least 2 knots, got {0}")]
struct TooFewKnots(usize);


fn input_moves_from_str(s: &str) -> Result<Vec<Move>, parsing::MovesError> {
	parsing::moves_from_str(s).collect()
}


/// Returns the number of distinct positions visited by the last of `num_knots` knots.
fn part1and2_impl(input_moves: &[Move], num_knots: usize) -> Result<usize, TooFewKnots> {
	use std::collections::BTreeSet;
	if num_knots < 2 { return Err(TooFewKnots(num_knots)) }

	let mut knots = vec![[0_isize; 2]; num_knots];
	let mut tail_visited = BTreeSet::new();
	tail_visited.insert(knots[num_knots - 1]);

	for &Move(dir, amount) in input_moves {
		let delta = dir.delta();
		for _ in 0..amount {
			knots[0][0] += delta[0];
			knots[0][1] += delta[1];

			for i in 1..num_knots {
				let (ahead, behind) = knots.split_at_mut(i);
				let (target, knot) = (&ahead[i - 1], &mut behind[0]);

				let delta = [target[0] - knot[0], target[1] - knot[1]];
				// Touching (overlapping or adjacent, also diagonally); the rest of the rope stays put too
				if delta[0] * delta[0] + delta[1] * delta[1] <= 2 { break }

				knot[0] += delta[0].signum();
				knot[1] += delta[1].signum();
				if i == num_knots - 1 { tail_visited.insert(*knot); }
			}
		}
	}

	tracing::debug!(num_knots, visited = tail_visited.len());
	Ok(tail_visited.len())
}

pub(crate) fn part1(input: &str, _: &Options) -> anyhow::Result<usize> {
	Ok(part1and2_impl(&input_moves_from_str(input)?, 2)?)
}

pub(crate) fn part2(input: &str, options: &Options) -> anyhow::Result<usize> {
	Ok(part1and2_impl(&input_moves_from_str(input)?, options.num_knots as usize)?)
}


mod parsing {
	use {std::{num::ParseIntError, str::FromStr}, itertools::Itertools as _};
	use super::{Dir, Move};

	impl TryFrom<u8> for Dir {
		type Error = ();
		fn try_from(b: u8) -> Result<Self, Self::Error> {
			match b {
				b'U' => Ok(Dir::Up),
				b'D' => Ok(Dir::Down),
				b'L' => Ok(Dir::Left),
				b'R' => Ok(Dir::Right),
				_ => Err(())
			}
		}
	}

	#[derive(Debug, thiserror::Error)]
	pub(super) enum DirError {
		#[error("expected a single character, found {0}")]
		Len(usize),
		#[error("invalid direction {0:?}")]
		Invalid(char),
	}

	impl FromStr for Dir {
		type Err = DirError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let b = s.bytes().exactly_one().map_err(|i| DirError::Len(i.count()))?;
			b.try_into().map_err(|_| DirError::Invalid(b as char))
		}
	}

	#[derive(Debug, thiserror::Error)]
	pub(super) enum MoveError {
		#[error("expected “DIR AMOUNT”")]
		NoSpace,
		#[error(transparent)]
		Dir(DirError),
		#[error("invalid amount: {0}")]
		Amount(ParseIntError)
	}

	impl FromStr for Move {
		type Err = MoveError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let (dir, amount) = s.split_once(' ').ok_or(MoveError::NoSpace)?;
			let dir = dir.parse().map_err(MoveError::Dir)?;
			let amount = amount.parse().map_err(MoveError::Amount)?;
			Ok(Move(dir, amount))
		}
	}

	#[derive(Debug, thiserror::Error)]
	pub(super) enum MovesError {
		#[error("Empty input")]
		Empty,
		#[error("Invalid move on line {line}: {source}")]
		Move { line: usize, source: MoveError },
	}

	pub(super) fn moves_from_str(s: &str) -> impl Iterator<Item = Result<Move, MovesError>> + '_ {
		use {std::iter::once, either::Either::*};
		if s.is_empty() { return Left(once(Err(MovesError::Empty))) }
		Right(s.lines().enumerate()
			.map(|(l, line)| line.parse()
				.map_err(|e| MovesError::Move { line: l + 1, source: e })))
	}
}
