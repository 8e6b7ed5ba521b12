// Copyright (c) 2022 Bastiaan Marinus van de Weerd


#[derive(Debug, clap::Args)]
pub(crate) struct Options {}


#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Play { Rock = 1, Paper = 2, Scissors = 3 }

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum End { Lose = 0, Draw = 3, Win = 6 }

/// The strategy guide’s second column, whose meaning is only revealed in part 2.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Hint { X, Y, Z }

impl Hint {
	fn as_play(self) -> Play {
		match self { Hint::X => Play::Rock, Hint::Y => Play::Paper, Hint::Z => Play::Scissors }
	}

	fn as_end(self) -> End {
		match self { Hint::X => End::Lose, Hint::Y => End::Draw, Hint::Z => End::Win }
	}
}

struct Round(Play, Hint);


fn score(other: Play, you: Play) -> u64 {
	use {Play::*, End::*};
	let end = match (other, you) {
		(Rock, Scissors) | (Paper, Rock) | (Scissors, Paper) => Lose,
		(Rock, Rock) | (Paper, Paper) | (Scissors, Scissors) => Draw,
		(Rock, Paper) | (Paper, Scissors) | (Scissors, Rock) => Win,
	};
	you as u64 + end as u64
}


fn input_rounds_from_str(s: &str) -> Result<Vec<Round>, parsing::RoundsError> {
	parsing::rounds_from_str(s).collect()
}


fn part1_impl(input_rounds: impl Iterator<Item = Round>) -> u64 {
	input_rounds
		.map(|Round(other, hint)| score(other, hint.as_play()))
		.sum()
}

pub(crate) fn part1(input: &str, _: &Options) -> anyhow::Result<u64> {
	Ok(part1_impl(input_rounds_from_str(input)?.into_iter()))
}


fn part2_impl(input_rounds: impl Iterator<Item = Round>) -> u64 {
	input_rounds
		.map(|Round(other, hint)| {
			use {Play::*, End::*};
			let you = match (other, hint.as_end()) {
				(Paper, Lose) | (Rock, Draw) | (Scissors, Win) => Rock,
				(Scissors, Lose) | (Paper, Draw) | (Rock, Win) => Paper,
				(Rock, Lose) | (Scissors, Draw) | (Paper, Win) => Scissors,
			};
			score(other, you)
		})
		.sum()
}

pub(crate) fn part2(input: &str, _: &Options) -> anyhow::Result<u64> {
	Ok(part2_impl(input_rounds_from_str(input)?.into_iter()))
}


mod parsing {
	use {std::str::FromStr, itertools::Itertools as _};
	use super::{Play, Hint, Round};

	impl TryFrom<char> for Play {
		type Error = ();
		fn try_from(value: char) -> Result<Self, Self::Error> {
			match value {
				'A' => Ok(Play::Rock),
				'B' => Ok(Play::Paper),
				'C' => Ok(Play::Scissors),
				_ => Err(())
			}
		}
	}

	impl TryFrom<char> for Hint {
		type Error = ();
		fn try_from(value: char) -> Result<Self, Self::Error> {
			match value {
				'X' => Ok(Hint::X),
				'Y' => Ok(Hint::Y),
				'Z' => Ok(Hint::Z),
				_ => Err(())
			}
		}
	}

	#[derive(Debug, thiserror::Error)]
	pub(super) enum ColumnError {
		#[error("expected a single character, found {len}")]
		Format { len: usize },
		#[error("invalid character {found:?}")]
		Invalid { found: char },
	}

	fn column_from_str<T: TryFrom<char>>(s: &str) -> Result<T, ColumnError> {
		match s.chars().exactly_one() {
			Ok(chr) => T::try_from(chr).map_err(|_| ColumnError::Invalid { found: chr }),
			Err(chars) => Err(ColumnError::Format { len: chars.count() }),
		}
	}

	#[derive(Debug, thiserror::Error)]
	pub(super) enum RoundError {
		#[error("expected two space-separated columns")]
		Format,
		#[error("first column: {0}")]
		Play(ColumnError),
		#[error("second column: {0}")]
		Hint(ColumnError),
	}

	impl FromStr for Round {
		type Err = RoundError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let (play, hint) = s.split_once(' ').ok_or(RoundError::Format)?;
			Ok(Round(
				column_from_str(play).map_err(RoundError::Play)?,
				column_from_str(hint).map_err(RoundError::Hint)?,
			))
		}
	}

	#[derive(Debug, thiserror::Error)]
	pub(super) enum RoundsError {
		#[error("Empty input")]
		Empty,
		#[error("Invalid round on line {line}: {source}")]
		Round { line: usize, source: RoundError },
	}

	pub(super) fn rounds_from_str(s: &str) -> impl Iterator<Item = Result<Round, RoundsError>> + '_ {
		use {std::iter::once, either::Either};
		if s.is_empty() { return Either::Left(once(Err(RoundsError::Empty))) }
		Either::Right(s.lines()
			.enumerate()
			.map(|(l, line)| line.parse()
				.map_err(|e| RoundsError::Round { line: l + 1, source: e })))
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		A Y
		B X
		C Z
	" };
	assert_eq!(part1_impl(input_rounds_from_str(INPUT).unwrap().into_iter()), 15);
	assert_eq!(part2_impl(input_rounds_from_str(INPUT).unwrap().into_iter()), 12);

	use parsing::{RoundsError, RoundError, ColumnError};
	assert!(matches!(input_rounds_from_str(""), Err(RoundsError::Empty)));
	assert!(matches!(input_rounds_from_str("A Y\nAY\n"),
		Err(RoundsError::Round { line: 2, source: RoundError::Format })));
	assert!(matches!(input_rounds_from_str("X Y"),
		Err(RoundsError::Round { source: RoundError::Play(ColumnError::Invalid { found: 'X' }), .. })));
	assert!(matches!(input_rounds_from_str("A YY"),
		Err(RoundsError::Round { source: RoundError::Hint(ColumnError::Format { len: 2 }), .. })));
}
