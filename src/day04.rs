// Copyright (c) 2022 Bastiaan Marinus van de Weerd


#[derive(Debug, clap::Args)]
pub(crate) struct Options {}


type Assignment = std::ops::RangeInclusive<usize>;
struct AssignmentsPair([Assignment; 2]);

trait RangeInclusiveExt {
	fn contains_range(&self, other: &Self) -> bool;
	fn overlaps_range(&self, other: &Self) -> bool;
}

impl<T: PartialOrd> RangeInclusiveExt for std::ops::RangeInclusive<T> {
	fn contains_range(&self, other: &Self) -> bool {
		*self.start() <= *other.start() && *self.end() >= *other.end()
	}

	fn overlaps_range(&self, other: &Self) -> bool {
		*self.start() <= *other.end() && *self.end() >= *other.start()
	}
}

impl AssignmentsPair {
	fn is_contained(&self) -> bool {
		let [left, right] = &self.0;
		left.contains_range(right) || right.contains_range(left)
	}

	fn is_overlapping(&self) -> bool {
		let [left, right] = &self.0;
		left.overlaps_range(right)
	}
}


fn input_assignments_pairs_from_str(s: &str) -> Result<Vec<AssignmentsPair>, parsing::AssignmentsPairsError> {
	parsing::assignments_pairs_from_str(s).collect()
}


fn part1_impl(input_assignment_pairs: &[AssignmentsPair]) -> usize {
	input_assignment_pairs.iter().filter(|pair| pair.is_contained()).count()
}

pub(crate) fn part1(input: &str, _: &Options) -> anyhow::Result<usize> {
	Ok(part1_impl(&input_assignments_pairs_from_str(input)?))
}


fn part2_impl(input_assignment_pairs: &[AssignmentsPair]) -> usize {
	input_assignment_pairs.iter().filter(|pair| pair.is_overlapping()).count()
}

pub(crate) fn part2(input: &str, _: &Options) -> anyhow::Result<usize> {
	Ok(part2_impl(&input_assignments_pairs_from_str(input)?))
}


mod parsing {
	use std::{num::ParseIntError, ops::RangeInclusive, str::FromStr};
	use super::AssignmentsPair;

	#[derive(Debug, thiserror::Error)]
	pub(super) enum AssignmentError {
		#[error("missing '-'")]
		NoHyphen,
		#[error("invalid start: {0}")]
		StartError(ParseIntError),
		#[error("invalid end: {0}")]
		EndError(ParseIntError),
		#[error("end {end} precedes start {start}")]
		Negative { start: usize, end: usize },
	}

	#[derive(Debug, thiserror::Error)]
	pub(super) enum AssignmentsPairError {
		#[error("missing ','")]
		NoComma,
		#[error("left assignment: {0}")]
		LeftAssignment(AssignmentError),
		#[error("right assignment: {0}")]
		RightAssignment(AssignmentError),
	}

	fn assignment_from_str(s: &str) -> Result<RangeInclusive<usize>, AssignmentError> {
		let (start, end) = s.split_once('-')
			.ok_or(AssignmentError::NoHyphen)?;
		let start = start.parse().map_err(AssignmentError::StartError)?;
		let end = end.parse().map_err(AssignmentError::EndError)?;
		if end < start { return Err(AssignmentError::Negative { start, end }) }
		Ok(start..=end)
	}

	impl FromStr for AssignmentsPair {
		type Err = AssignmentsPairError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let (left, right) = s.split_once(',')
				.ok_or(AssignmentsPairError::NoComma)?;
			let left = assignment_from_str(left)
				.map_err(AssignmentsPairError::LeftAssignment)?;
			let right = assignment_from_str(right)
				.map_err(AssignmentsPairError::RightAssignment)?;
			Ok(AssignmentsPair([left, right]))
		}
	}

	#[derive(Debug, thiserror::Error)]
	pub(super) enum AssignmentsPairsError {
		#[error("Empty input")]
		Empty,
		#[error("Invalid assignments pair on line {line}: {source}")]
		Pair { line: usize, source: AssignmentsPairError }
	}

	pub(super) fn assignments_pairs_from_str(s: &str) -> impl Iterator<Item = Result<AssignmentsPair, AssignmentsPairsError>> + '_ {
		use {std::iter::once, either::Either::*};
		if s.is_empty() { return Left(once(Err(AssignmentsPairsError::Empty))) }
		Right(s.lines()
			.enumerate()
			.map(|(l, line)| line.parse()
				.map_err(|e| AssignmentsPairsError::Pair { line: l + 1, source: e })))
	}
}


#[cfg(test)]
mod tests {
	use super::*;
	use test_case::test_case;

	const INPUT: &str = indoc::indoc! { "
		2-4,6-8
		2-3,4-5
		5-7,7-9
		2-8,3-7
		6-6,4-6
		2-6,4-8
	" };

	#[test]
	fn example() {
		let pairs = input_assignments_pairs_from_str(INPUT).unwrap();
		assert_eq!(part1_impl(&pairs), 2);
		assert_eq!(part2_impl(&pairs), 4);
	}

	#[test_case("2-4,6-8", false, false)]
	#[test_case("5-7,7-9", false, true)]
	#[test_case("2-8,3-7", true, true)]
	#[test_case("6-6,4-6", true, true)]
	#[test_case("3-3,3-3", true, true)]
	#[test_case("1-2,3-4", false, false)]
	fn pair(line: &str, contained: bool, overlapping: bool) {
		let pair = line.parse::<AssignmentsPair>().unwrap();
		assert_eq!(pair.is_contained(), contained);
		assert_eq!(pair.is_overlapping(), overlapping);
	}

	#[test]
	fn contained_implies_overlapping() {
		use itertools::iproduct;
		for (s0, e0, s1, e1) in iproduct!(0..6, 0..6, 0..6, 0..6) {
			if e0 < s0 || e1 < s1 { continue }
			let pair = AssignmentsPair([s0..=e0, s1..=e1]);
			assert!(!pair.is_contained() || pair.is_overlapping(), "{s0}-{e0},{s1}-{e1}");
		}
	}

	#[test]
	fn errors() {
		use parsing::{AssignmentsPairsError as E, AssignmentsPairError as PE, AssignmentError as AE};
		assert!(matches!(input_assignments_pairs_from_str(""), Err(E::Empty)));
		assert!(matches!(input_assignments_pairs_from_str("2-4,6-8\n2-4"),
			Err(E::Pair { line: 2, source: PE::NoComma })));
		assert!(matches!(input_assignments_pairs_from_str("4-2,6-8"),
			Err(E::Pair { source: PE::LeftAssignment(AE::Negative { start: 4, end: 2 }), .. })));
		assert!(matches!(input_assignments_pairs_from_str("2-4,x-8"),
			Err(E::Pair { source: PE::RightAssignment(AE::StartError(_)), .. })));
	}
}
