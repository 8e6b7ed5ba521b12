// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use anyhow::Context as _;


#[derive(Debug, clap::Args)]
pub(crate) struct Options {
	/// Number of best-stocked elves whose calories part 2 sums
	#[arg(long, default_value_t = 3)]
	top: usize,
}


/// The last group counts even when the input doesn’t end in a blank line, and so does the
/// first one after leading blank lines.
fn calories_per_elf(input_calories: impl Iterator<Item = Option<usize>>) -> impl Iterator<Item = usize> {
	use itertools::Itertools;
	input_calories
		.coalesce(|left, right|
			if let Some(right) = right {
				Ok(Some(left.map_or(right, |left| left + right)))
			} else {
				Err((left, Some(0)))
			})
		.flatten()
}


fn input_calories_from_str(s: &str) -> Result<Vec<Option<usize>>, parsing::CaloriesError> {
	parsing::calories_from_str(s).collect()
}


fn part1_impl(input_calories: impl Iterator<Item = Option<usize>>) -> Option<usize> {
	calories_per_elf(input_calories).max()
}

pub(crate) fn part1(input: &str, _: &Options) -> anyhow::Result<usize> {
	part1_impl(input_calories_from_str(input)?.into_iter())
		.context("No elf carries any food")
}


fn part2_impl(input_calories: impl Iterator<Item = Option<usize>>, top: usize) -> usize {
	use itertools::Itertools as _;
	calories_per_elf(input_calories)
		.sorted_by(|left, right| right.cmp(left))
		.take(top)
		.sum()
}

pub(crate) fn part2(input: &str, options: &Options) -> anyhow::Result<usize> {
	anyhow::ensure!(options.top > 0, "At least one elf must be counted");
	Ok(part2_impl(input_calories_from_str(input)?.into_iter(), options.top))
}


mod parsing {
	use std::num::ParseIntError;

	#[derive(Debug, thiserror::Error)]
	pub(super) enum CaloriesError {
		#[error("Empty input")]
		Empty,
		#[error("Invalid calories on line {line}")]
		Invalid { line: usize, #[source] source: ParseIntError },
	}

	pub(super) fn calories_from_str(s: &str) -> impl Iterator<Item = Result<Option<usize>, CaloriesError>> + '_ {
		use {std::iter::once, either::Either};
		if s.trim().is_empty() { return Either::Left(once(Err(CaloriesError::Empty))) }

		Either::Right(s.lines()
			.enumerate()
			.map(|(l, line)| (!line.is_empty())
				.then(|| line.parse()
					.map_err(|e| CaloriesError::Invalid { line: l + 1, source: e }))
				.transpose()))
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUT: &str = indoc::indoc! { "
		1000
		2000
		3000

		4000

		5000
		6000

		7000
		8000
		9000

		10000
	" };

	#[test]
	fn example() {
		assert_eq!(part1_impl(input_calories_from_str(INPUT).unwrap().into_iter()), Some(24_000));
		assert_eq!(part2_impl(input_calories_from_str(INPUT).unwrap().into_iter(), 3), 45_000);
		assert_eq!(part2_impl(input_calories_from_str(INPUT).unwrap().into_iter(), 1), 24_000);
	}

	#[test]
	fn unterminated_last_group() {
		let calories = input_calories_from_str("1\n\n2\n3").unwrap();
		assert_eq!(calories_per_elf(calories.into_iter()).collect::<Vec<_>>(), [1, 5]);
		assert_eq!(part1(INPUT.trim_end(), &Options { top: 3 }).unwrap(), 24_000);
	}

	#[test]
	fn leading_blank_line() {
		let calories = input_calories_from_str("\n5000\n2000\n\n3000\n").unwrap();
		assert_eq!(calories_per_elf(calories.into_iter()).collect::<Vec<_>>(), [7000, 3000]);
		assert_eq!(part1("\n5000\n2000\n\n3000\n", &Options { top: 3 }).unwrap(), 7000);
	}

	#[test]
	fn errors() {
		use parsing::CaloriesError;
		assert!(matches!(input_calories_from_str(""), Err(CaloriesError::Empty)));
		assert!(matches!(input_calories_from_str("\n\n"), Err(CaloriesError::Empty)));
		assert!(matches!(input_calories_from_str("1000\nabc\n"),
			Err(CaloriesError::Invalid { line: 2, .. })));
		assert!(part2(INPUT, &Options { top: 0 }).is_err());
	}
}
