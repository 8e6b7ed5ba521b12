// Copyright (c) 2022 Bastiaan Marinus van de Weerd


#[derive(Debug, clap::Args)]
pub(crate) struct Options {}


struct Rucksack<'s>(&'s str);

/// Set of items, bit `p` standing for the item with priority `p`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
struct Items(u64);

impl Items {
	fn priority(item: u8) -> u32 {
		if item >= b'a' { 1 + (item - b'a') as u32 } else { 27 + (item - b'A') as u32 }
	}

	fn from_bytes(s: &str) -> Self {
		Items(s.bytes().fold(0, |acc, b| acc | 1 << Self::priority(b)))
	}

	fn intersection(self, other: Self) -> Self {
		Items(self.0 & other.0)
	}

	/// Returns the priority of the single item in the set, if there is exactly one.
	fn single_priority(self) -> Result<u64, usize> {
		if self.0.count_ones() != 1 { return Err(self.0.count_ones() as usize) }
		Ok(self.0.trailing_zeros() as u64)
	}
}

impl Rucksack<'_> {
	fn compartments(&self) -> [Items; 2] {
		let half_len = self.0.len() / 2;
		[Items::from_bytes(&self.0[..half_len]), Items::from_bytes(&self.0[half_len..])]
	}

	fn items(&self) -> Items {
		Items::from_bytes(self.0)
	}
}

#[derive(Debug, thiserror::Error)]
enum CommonItemError {
	#[error("Rucksack {rucksack} has {found} items in both compartments, expected 1")]
	Compartments { rucksack: usize, found: usize },
	#[error("Group {group} has {found} items in common, expected 1")]
	Group { group: usize, found: usize },
	#[error("Found {0} rucksacks, expected a multiple of 3")]
	GroupSize(usize),
}


fn input_rucksacks_from_str(s: &str) -> Result<Vec<Rucksack<'_>>, parsing::RucksacksError> {
	parsing::rucksacks_from_str(s).collect()
}


fn part1_impl(input_rucksacks: &[Rucksack<'_>]) -> Result<u64, CommonItemError> {
	input_rucksacks.iter()
		.enumerate()
		.map(|(i, r)| {
			let [c0, c1] = r.compartments();
			let priority = c0.intersection(c1).single_priority()
				.map_err(|found| CommonItemError::Compartments { rucksack: i + 1, found })?;
			tracing::trace!(rucksack = i + 1, priority);
			Ok(priority)
		})
		.sum()
}

pub(crate) fn part1(input: &str, _: &Options) -> anyhow::Result<u64> {
	Ok(part1_impl(&input_rucksacks_from_str(input)?)?)
}


fn part2_impl(input_rucksacks: &[Rucksack<'_>]) -> Result<u64, CommonItemError> {
	if input_rucksacks.len() % 3 != 0 {
		return Err(CommonItemError::GroupSize(input_rucksacks.len()))
	}
	input_rucksacks
		.chunks(3)
		.enumerate()
		.map(|(i, group)| group.iter()
			.map(Rucksack::items)
			.reduce(Items::intersection)
			.map_or(Err(0), Items::single_priority)
			.map_err(|found| CommonItemError::Group { group: i + 1, found }))
		.sum()
}

pub(crate) fn part2(input: &str, _: &Options) -> anyhow::Result<u64> {
	Ok(part2_impl(&input_rucksacks_from_str(input)?)?)
}


mod parsing {
	use super::Rucksack;

	#[derive(Debug, thiserror::Error)]
	pub(super) enum RucksackError {
		#[error("odd number of items ({0})")]
		OddLen(usize),
		#[error("invalid item {0:?}")]
		InvalidItem(char),
	}

	impl<'s> TryFrom<&'s str> for Rucksack<'s> {
		type Error = RucksackError;
		fn try_from(s: &'s str) -> Result<Self, Self::Error> {
			use RucksackError::*;
			if let Some(c) = s.chars().find(|c| !c.is_ascii_alphabetic()) {
				return Err(InvalidItem(c))
			}
			if s.len() % 2 != 0 { return Err(OddLen(s.len())); }
			Ok(Rucksack(s))
		}
	}

	#[derive(Debug, thiserror::Error)]
	pub(super) enum RucksacksError {
		#[error("Empty input")]
		Empty,
		#[error("Invalid rucksack on line {line}: {source}")]
		Rucksack { line: usize, source: RucksackError }
	}

	pub(super) fn rucksacks_from_str(s: &str) -> impl Iterator<Item = Result<Rucksack<'_>, RucksacksError>> + '_ {
		use {std::iter::once, either::Either::*};
		if s.is_empty() { return Left(once(Err(RucksacksError::Empty))) }
		Right(s.lines()
			.enumerate()
			.map(|(l, line)| line.try_into()
				.map_err(|e| RucksacksError::Rucksack { line: l + 1, source: e})))
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUT: &str = indoc::indoc! { "
		vJrwpWtwJgWrhcsFMMfFFhFp
		jqHRNqRjqzjGDLGLrsFMfFZSrLrFZsSL
		PmmdzqPrVvPwwTWBwg
		wMqvLMZHhHMvwLHjbvcjnnSBnvTQFn
		ttgJtRGJQctTZtZT
		CrZsJsPPZsGzwwsLwLmpwMDw
	" };

	#[test]
	fn example() {
		let rucksacks = input_rucksacks_from_str(INPUT).unwrap();
		assert_eq!(part1_impl(&rucksacks).unwrap(), 157);
		assert_eq!(part2_impl(&rucksacks).unwrap(), 70);
	}

	#[test]
	fn priorities() {
		assert_eq!(Items::priority(b'a'), 1);
		assert_eq!(Items::priority(b'z'), 26);
		assert_eq!(Items::priority(b'A'), 27);
		assert_eq!(Items::priority(b'Z'), 52);
	}

	#[test]
	fn order_invariance() {
		let reversed = INPUT.lines()
			.map(|line| {
				let (c0, c1) = line.split_at(line.len() / 2);
				format!("{}{}", c0.chars().rev().collect::<String>(), c1.chars().rev().collect::<String>())
			})
			.collect::<Vec<_>>()
			.join("\n");
		let rucksacks = input_rucksacks_from_str(&reversed).unwrap();
		assert_eq!(part1_impl(&rucksacks).unwrap(), 157);
		assert_eq!(part2_impl(&rucksacks).unwrap(), 70);
	}

	#[test]
	fn errors() {
		use parsing::{RucksacksError, RucksackError};
		assert!(matches!(input_rucksacks_from_str(""), Err(RucksacksError::Empty)));
		assert!(matches!(input_rucksacks_from_str("abc"),
			Err(RucksacksError::Rucksack { line: 1, source: RucksackError::OddLen(3) })));
		assert!(matches!(input_rucksacks_from_str("ab\na1"),
			Err(RucksacksError::Rucksack { line: 2, source: RucksackError::InvalidItem('1') })));

		let rucksacks = input_rucksacks_from_str("abcd").unwrap();
		assert!(matches!(part1_impl(&rucksacks),
			Err(CommonItemError::Compartments { rucksack: 1, found: 0 })));
		assert!(matches!(part2_impl(&rucksacks), Err(CommonItemError::GroupSize(1))));
	}
}
