// Copyright (c) 2022 Bastiaan Marinus van de Weerd


#[derive(Debug, clap::Args)]
pub(crate) struct Options {}


#[derive(Clone, Copy, PartialEq, Eq, Debug)]
struct Crate(u8);

#[derive(PartialEq, Eq, Debug)]
struct Stacks(Vec<Vec<Crate>>);

#[derive(Debug)]
struct Step {
	num_crates: std::num::NonZeroUsize,
	from_stack: usize,
	to_stack: usize,
}

#[derive(Clone, Copy)]
enum CrateMover {
	/// Moves crates one at a time.
	Model9000,
	/// Moves crates all at once, keeping their order.
	Model9001,
}

#[derive(Debug, thiserror::Error)]
#[error("Step {step} moves {num_crates} crates from stack {}, which holds only {found}", .from_stack + 1)]
struct OperateError { step: usize, num_crates: usize, from_stack: usize, found: usize }

impl Stacks {
	fn operate(&mut self, step: &Step, crate_mover: CrateMover) -> Result<(), usize> {
		let num_crates = step.num_crates.get();
		let from = &mut self.0[step.from_stack];
		if from.len() < num_crates { return Err(from.len()) }
		let mut moved = from.split_off(from.len() - num_crates);
		if let CrateMover::Model9000 = crate_mover { moved.reverse() }
		self.0[step.to_stack].extend(moved);
		Ok(())
	}

	fn top_crates(&self) -> String {
		self.0.iter()
			.filter_map(|stack| stack.last().map(|c| char::from(c.0)))
			.collect()
	}
}


fn input_from_str(s: &str) -> Result<(Stacks, Vec<Step>), parsing::StacksAndStepsError> {
	parsing::try_stacks_and_steps_from_str(s)
}


fn part1and2_impl(input: (Stacks, Vec<Step>), crate_mover: CrateMover) -> Result<String, OperateError> {
	let (mut stacks, steps) = input;
	for (i, step) in steps.iter().enumerate() {
		stacks.operate(step, crate_mover).map_err(|found| OperateError {
			step: i + 1, num_crates: step.num_crates.get(), from_stack: step.from_stack, found })?;
		tracing::trace!(step = i + 1, tops = %stacks.top_crates());
	}
	Ok(stacks.top_crates())
}

pub(crate) fn part1(input: &str, _: &Options) -> anyhow::Result<String> {
	Ok(part1and2_impl(input_from_str(input)?, CrateMover::Model9000)?)
}

pub(crate) fn part2(input: &str, _: &Options) -> anyhow::Result<String> {
	Ok(part1and2_impl(input_from_str(input)?, CrateMover::Model9001)?)
}


mod parsing {
	use std::{str::FromStr, num::{ParseIntError, NonZeroUsize}};
	use super::{Crate, Stacks, Step};

	impl TryFrom<u8> for Crate {
		type Error = ();
		fn try_from(value: u8) -> Result<Self, Self::Error> {
			if !value.is_ascii_uppercase() { return Err(()) }
			Ok(Crate(value))
		}
	}

	#[derive(Debug, thiserror::Error)]
	pub(super) enum StacksError {
		#[error("missing stack labels")]
		NoLabels,
		#[error("expected stack label {expected} at column {column}")]
		InvalidLabel { column: usize, expected: usize },
		#[error("invalid crate at line {line}, column {column}")]
		InvalidCrate { line: usize, column: usize },
		#[error("crate at line {line}, column {column} is beyond the last stack")]
		TooWide { line: usize, column: usize },
		#[error("crate at line {line}, column {column} floats above an empty spot")]
		VoidBelowCrates { line: usize, column: usize },
	}

	/// Parses the drawing bottom-up; `lines` excludes the blank line that ends it.
	fn try_stacks_from_lines(lines: &[&str]) -> Result<Stacks, StacksError> {
		use StacksError::*;

		let (labels, crate_lines) = lines.split_last().ok_or(NoLabels)?;
		let mut num_stacks = 0;
		for (c, label) in labels.char_indices().filter(|(_, c)| !c.is_whitespace()) {
			if label.to_digit(10) != Some(num_stacks as u32 + 1) || c != num_stacks * 4 + 1 {
				return Err(InvalidLabel { column: c + 1, expected: num_stacks + 1 })
			}
			num_stacks += 1;
		}
		if num_stacks == 0 { return Err(NoLabels) }

		let mut stacks = vec![vec![]; num_stacks];
		let mut voids = vec![false; num_stacks];
		for (l, line) in crate_lines.iter().enumerate().rev() {
			for (i, chunk) in line.as_bytes().chunks(4).enumerate() {
				let column = i * 4 + 1;
				let crat = match *chunk {
					[b'[', b, b']'] | [b'[', b, b']', b' '] => Some(b),
					_ if chunk.iter().all(|b| *b == b' ') => None,
					_ => return Err(InvalidCrate { line: l + 1, column }),
				};
				match crat {
					Some(_) if i >= num_stacks => return Err(TooWide { line: l + 1, column }),
					Some(_) if voids[i] => return Err(VoidBelowCrates { line: l + 1, column: column + 1 }),
					Some(b) => stacks[i].push(b.try_into()
						.map_err(|_| InvalidCrate { line: l + 1, column: column + 1 })?),
					None if i < num_stacks => voids[i] = true,
					None => (),
				}
			}
			let len = (line.len() + 3) / 4;
			voids.iter_mut().skip(len).for_each(|void| *void = true);
		}

		Ok(Stacks(stacks))
	}

	impl FromStr for Stacks {
		type Err = StacksError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			try_stacks_from_lines(&s.lines().collect::<Vec<_>>())
		}
	}

	#[derive(Debug, thiserror::Error)]
	pub(super) enum StepError {
		#[error("expected “move N from A to B”, mismatch at column {column}")]
		Format { column: usize },
		#[error("invalid number of crates: {0}")]
		NumCrates(ParseIntError),
		#[error("invalid source stack: {0}")]
		FromStack(ParseIntError),
		#[error("invalid target stack: {0}")]
		ToStack(ParseIntError),
		#[error("source and target stack are the same")]
		SameStack,
	}

	impl FromStr for Step {
		type Err = StepError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let column = |rest: &str| s.len() - rest.len() + 1;
			fn split_word(s: &str) -> (&str, &str) { s.split_at(s.find(' ').unwrap_or(s.len())) }

			let rest = s.strip_prefix("move ").ok_or(StepError::Format { column: 1 })?;
			let (num_crates, rest) = split_word(rest);
			let num_crates = num_crates.parse().map_err(StepError::NumCrates)?;

			let rest = rest.strip_prefix(" from ")
				.ok_or_else(|| StepError::Format { column: column(rest) })?;
			let (from_stack, rest) = split_word(rest);
			let from_stack = from_stack.parse::<NonZeroUsize>().map_err(StepError::FromStack)?;

			let rest = rest.strip_prefix(" to ")
				.ok_or_else(|| StepError::Format { column: column(rest) })?;
			let to_stack = rest.parse::<NonZeroUsize>().map_err(StepError::ToStack)?;

			if from_stack == to_stack { return Err(StepError::SameStack) }

			Ok(Step {
				num_crates,
				from_stack: from_stack.get() - 1,
				to_stack: to_stack.get() - 1,
			})
		}
	}

	#[derive(Debug, thiserror::Error)]
	pub(super) enum StacksAndStepsError {
		#[error("Empty input")]
		Empty,
		#[error("Invalid drawing: {0}")]
		Stacks(StacksError),
		#[error("Missing blank line after the drawing")]
		NoBlank,
		#[error("Invalid step on line {line}: {source}")]
		Step { line: usize, source: StepError },
		#[error("No steps")]
		NoSteps,
		#[error("Step on line {line} refers to stack {stack}, which doesn’t exist")]
		InvalidStack { line: usize, stack: usize },
	}

	pub(super) fn try_stacks_and_steps_from_str(s: &str)
	-> Result<(Stacks, Vec<Step>), StacksAndStepsError> {
		use StacksAndStepsError as E;
		if s.trim().is_empty() { return Err(E::Empty) }

		let lines = s.lines().collect::<Vec<_>>();
		let blank = lines.iter().position(|line| line.is_empty()).ok_or(E::NoBlank)?;
		let stacks = try_stacks_from_lines(&lines[..blank]).map_err(E::Stacks)?;

		// Trailing blank lines are ignored
		let end = lines.iter().rposition(|line| !line.is_empty()).map_or(0, |l| l + 1).max(blank + 1);
		let steps = lines[blank + 1..end].iter()
			.enumerate()
			.map(|(l, line)| {
				let l = blank + 1 + l;
				let step = line.parse::<Step>()
					.map_err(|e| E::Step { line: l + 1, source: e })?;
				for stack in [step.from_stack, step.to_stack] {
					if stack >= stacks.0.len() { return Err(
						E::InvalidStack { line: l + 1, stack: stack + 1 }) }
				}
				Ok(step)
			})
			.collect::<Result<Vec<_>, _>>()?;
		if steps.is_empty() { return Err(E::NoSteps) }

		Ok((stacks, steps))
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUT: &str = indoc::indoc! { "
		    [D]
		[N] [C]
		[Z] [M] [P]
		 1   2   3

		move 1 from 2 to 1
		move 3 from 1 to 3
		move 2 from 2 to 1
		move 1 from 1 to 2
	" };

	#[test]
	fn example() {
		assert_eq!(part1and2_impl(input_from_str(INPUT).unwrap(), CrateMover::Model9000).unwrap(), "CMZ");
		assert_eq!(part1and2_impl(input_from_str(INPUT).unwrap(), CrateMover::Model9001).unwrap(), "MCD");
	}

	#[test]
	fn trailing_blank_lines() {
		let input = format!("{INPUT}\n\n");
		assert_eq!(part1and2_impl(input_from_str(&input).unwrap(), CrateMover::Model9000).unwrap(), "CMZ");
		assert!(matches!(input_from_str(&INPUT.replacen("\nmove 2", "\n\nmove 2", 1)),
			Err(parsing::StacksAndStepsError::Step { line: 8, .. })));
	}

	#[test]
	fn drawing() {
		let stacks = "    [D]\n[N] [C]\n[Z] [M] [P]\n 1   2   3".parse::<Stacks>().unwrap();
		assert_eq!(stacks, Stacks(vec![
			vec![Crate(b'Z'), Crate(b'N')],
			vec![Crate(b'M'), Crate(b'C'), Crate(b'D')],
			vec![Crate(b'P')],
		]));

		use parsing::StacksError;
		assert!(matches!("[A]\n 2 ".parse::<Stacks>(), Err(StacksError::InvalidLabel { column: 2, expected: 1 })));
		assert!(matches!("[A] [B]\n 1 ".parse::<Stacks>(), Err(StacksError::TooWide { line: 1, column: 5 })));
		assert!(matches!("[A]\n   \n 1 ".parse::<Stacks>(), Err(StacksError::VoidBelowCrates { line: 1, .. })));
		assert!(matches!("[a]\n 1 ".parse::<Stacks>(), Err(StacksError::InvalidCrate { line: 1, column: 2 })));
	}

	#[test]
	fn step() {
		let step = "move 3 from 1 to 2".parse::<Step>().unwrap();
		assert_eq!((step.num_crates.get(), step.from_stack, step.to_stack), (3, 0, 1));

		use parsing::StepError;
		assert!(matches!("move 3 from 1 to 1".parse::<Step>(), Err(StepError::SameStack)));
		assert!(matches!("move 0 from 1 to 2".parse::<Step>(), Err(StepError::NumCrates(_))));
		assert!(matches!("move 3 form 1 to 2".parse::<Step>(), Err(StepError::Format { column: 7 })));
		assert!(matches!("shift 3".parse::<Step>(), Err(StepError::Format { column: 1 })));
	}

	#[test]
	fn errors() {
		use parsing::StacksAndStepsError as E;
		assert!(matches!(input_from_str(""), Err(E::Empty)));
		assert!(matches!(input_from_str("[A]\n 1 \nmove 1 from 1 to 2"), Err(E::NoBlank)));
		assert!(matches!(input_from_str("[A]\n 1 \n\n"), Err(E::NoSteps)));
		assert!(matches!(input_from_str("[A]\n 1 \n\n\n\n"), Err(E::NoSteps)));
		assert!(matches!(input_from_str("[A]\n 1 \n\nmove 1 from 1 to 2"),
			Err(E::InvalidStack { line: 4, stack: 2 })));

		let input = input_from_str("[A]    \n 1   2 \n\nmove 2 from 1 to 2").unwrap();
		assert!(matches!(part1and2_impl(input, CrateMover::Model9000),
			Err(OperateError { step: 1, num_crates: 2, from_stack: 0, found: 1 })));
	}
}
