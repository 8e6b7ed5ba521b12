// Copyright (c) 2022 Bastiaan Marinus van de Weerd


#[derive(Debug, clap::Args)]
pub(crate) struct Options {
	/// Last cycle whose signal strength part 1 includes
	#[arg(long, default_value_t = 220)]
	num_cycles: usize,
}


const CRT_WIDTH: usize = 40;
const CRT_HEIGHT: usize = 6;


#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Instr {
	Nop,
	AddX(i64),
}

impl Instr {
	fn cycles(self) -> u8 {
		match self { Instr::Nop => 1, Instr::AddX(_) => 2 }
	}
}

mod cpu {
	use super::Instr;

	/// Yields the value of the X register *during* every clock cycle. An instruction’s effect
	/// only shows once its last cycle has completed.
	pub(super) struct Cpu<I> {
		program: I,
		x: i64,
		current: Option<(Instr, u8)>,
	}

	impl<I: Iterator<Item = Instr>> Cpu<I> {
		pub(super) fn new(program: I) -> Self {
			Cpu { program, x: 1, current: None }
		}
	}

	impl<I: Iterator<Item = Instr>> Iterator for Cpu<I> {
		type Item = i64;
		fn next(&mut self) -> Option<Self::Item> {
			let (instr, cycles_remaining) = match self.current.take() {
				Some(current) => current,
				None => {
					let instr = self.program.next()?;
					(instr, instr.cycles())
				}
			};
			let x = self.x;
			match (instr, cycles_remaining - 1) {
				(Instr::AddX(v), 0) => self.x += v,
				(_, 0) => (),
				(instr, cycles_remaining) => self.current = Some((instr, cycles_remaining)),
			}
			Some(x)
		}
	}
}

struct Crt([bool; CRT_WIDTH * CRT_HEIGHT]);

impl std::fmt::Display for Crt {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use std::fmt::Write;
		for (y, row) in self.0.chunks(CRT_WIDTH).enumerate() {
			for &pixel in row {
				f.write_char(if pixel { '#' } else { '.' })?
			}
			if y < CRT_HEIGHT - 1 { f.write_char('\n')? }
		}
		Ok(())
	}
}


fn input_instrs_from_str(s: &str) -> Result<Vec<Instr>, parsing::InstrsError> {
	parsing::instrs_from_str(s).collect()
}


fn part1_impl(input_instrs: impl Iterator<Item = Instr>, num_cycles: usize) -> i64 {
	cpu::Cpu::new(input_instrs)
		.take(num_cycles)
		.enumerate()
		.filter_map(|(i, x)| (i >= 19 && (i - 19) % 40 == 0)
			.then(|| {
				tracing::trace!(cycle = i + 1, x);
				(i as i64 + 1) * x
			}))
		.sum()
}

pub(crate) fn part1(input: &str, options: &Options) -> anyhow::Result<i64> {
	Ok(part1_impl(input_instrs_from_str(input)?.into_iter(), options.num_cycles))
}


/// Pixels past the end of the program stay dark.
fn part2_impl(input_instrs: impl Iterator<Item = Instr>) -> Crt {
	let mut pixels = [false; CRT_WIDTH * CRT_HEIGHT];
	for (i, x) in cpu::Cpu::new(input_instrs).take(pixels.len()).enumerate() {
		pixels[i] = ((i % CRT_WIDTH) as i64).abs_diff(x) <= 1
	}
	Crt(pixels)
}

pub(crate) fn part2(input: &str, _: &Options) -> anyhow::Result<impl std::fmt::Display> {
	Ok(part2_impl(input_instrs_from_str(input)?.into_iter()))
}


mod parsing {
	use std::{num::ParseIntError, str::FromStr};
	use super::Instr;

	#[derive(Debug, thiserror::Error)]
	pub(super) enum InstrError {
		#[error("empty line")]
		Empty,
		#[error("unknown instruction")]
		Invalid,
		#[error("invalid addx operand: {0}")]
		AddX(ParseIntError),
	}

	impl FromStr for Instr {
		type Err = InstrError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			if s.is_empty() { Err(InstrError::Empty) }
			else if s == "noop" { Ok(Instr::Nop) }
			else if let Some(v) = s.strip_prefix("addx ") {
				Ok(Instr::AddX(v.parse().map_err(InstrError::AddX)?)) }
			else { Err(InstrError::Invalid) }
		}
	}

	#[derive(Debug, thiserror::Error)]
	pub(super) enum InstrsError {
		#[error("Empty input")]
		Empty,
		#[error("Invalid instruction on line {line}: {source}")]
		Instr { line: usize, source: InstrError },
	}

	pub(super) fn instrs_from_str(s: &str)
	-> impl Iterator<Item = Result<Instr, InstrsError>> + '_ {
		use {std::iter::once, either::Either::*};
		if s.is_empty() { return Left(once(Err(InstrsError::Empty))) }
		Right(s.lines()
			.enumerate()
			.map(|(l, line)| line.parse()
				.map_err(|e| InstrsError::Instr { line: l + 1, source: e })))
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn small_program() {
		const INPUT: &str = indoc::indoc! { "
			noop
			addx 3
			addx -5
		" };
		let instrs = input_instrs_from_str(INPUT).unwrap();
		assert_eq!(cpu::Cpu::new(instrs.iter().copied()).collect::<Vec<_>>(), [1, 1, 1, 4, 4]);
		assert_eq!(part1_impl(instrs.into_iter(), 220), 0);
	}

	#[test]
	fn signal_strengths() {
		let noops = "noop\n".repeat(240);
		assert_eq!(part1_impl(input_instrs_from_str(&noops).unwrap().into_iter(), 220), 720);
		assert_eq!(part1_impl(input_instrs_from_str(&noops).unwrap().into_iter(), 100), 180);
		assert_eq!(part1_impl(input_instrs_from_str(&noops).unwrap().into_iter(), 19), 0);

		let program = format!("addx 19\n{noops}");
		assert_eq!(part1(&program, &Options { num_cycles: 220 }).unwrap(), 20 * 720);
	}

	#[test]
	fn crt() {
		let program = format!("noop\n{}", "addx 1\n".repeat(120));
		let row = (0..CRT_WIDTH)
			.map(|c| {
				let x = (c as i64 - 1).max(0) / 2 + 1;
				if (c as i64).abs_diff(x) <= 1 { '#' } else { '.' }
			})
			.collect::<String>();
		assert_eq!(&row[..8], "####....");
		let crt = part2(&program, &Options { num_cycles: 220 }).unwrap().to_string();
		assert_eq!(crt.lines().next(), Some(row.as_str()));
		assert_eq!(crt.lines().count(), CRT_HEIGHT);

		let crt = part2_impl(input_instrs_from_str("noop").unwrap().into_iter()).to_string();
		assert_eq!(crt.lines().next(), Some(format!("#{}", ".".repeat(CRT_WIDTH - 1)).as_str()));
		assert!(crt.lines().skip(1).all(|row| row == ".".repeat(CRT_WIDTH)));
	}

	#[test]
	fn errors() {
		use parsing::{InstrsError, InstrError};
		assert!(matches!(input_instrs_from_str(""), Err(InstrsError::Empty)));
		assert!(matches!(input_instrs_from_str("noop\naddx"),
			Err(InstrsError::Instr { line: 2, source: InstrError::Invalid })));
		assert!(matches!(input_instrs_from_str("addx x"),
			Err(InstrsError::Instr { line: 1, source: InstrError::AddX(_) })));
		assert!(matches!(input_instrs_from_str("noop\n\nnoop"),
			Err(InstrsError::Instr { line: 2, source: InstrError::Empty })));
	}
}
