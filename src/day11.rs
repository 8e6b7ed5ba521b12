// Copyright (c) 2022 Bastiaan Marinus van de Weerd


#[derive(Debug, clap::Args)]
pub(crate) struct Options {
	/// Rounds to simulate [default: 20 for part 1, 10000 for part 2]
	#[arg(long)]
	num_rounds: Option<usize>,
	/// Relief divisor applied after every inspection [default: 3 for part 1, 1 for part 2]
	#[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
	worry_drop: Option<u64>,
}


#[derive(Debug)]
struct ThrowTest {
	div_by: u64,
	if_true: usize,
	if_false: usize,
}

impl ThrowTest {
	fn target(&self, worry_level: u64) -> usize {
		if worry_level % self.div_by == 0 { self.if_true } else { self.if_false }
	}
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Operator { Add, Mul }
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Operand { Value(u64), Old }
/// Left operand is always [`Operand::Old`].
#[derive(PartialEq, Eq, Debug)]
struct Operation(Operator, Operand);

impl Operation {
	/// Returns `None` on overflow.
	fn execute(&self, worry_level: u64) -> Option<u64> {
		use {Operator::*, Operand::*};
		let rhs = match self.1 { Value(v) => v, Old => worry_level };
		match self.0 { Add => worry_level.checked_add(rhs), Mul => worry_level.checked_mul(rhs) }
	}
}

#[derive(Debug)]
struct Monkey {
	items: Vec<u64>,
	operation: Operation,
	throw_test: ThrowTest,
}

#[derive(Debug, thiserror::Error)]
enum SimulationError {
	#[error("Worry level overflowed in round {round} when monkey {monkey} inspected an item at {worry_level}")]
	Overflow { round: usize, monkey: usize, worry_level: u64 },
}

struct Troop {
	monkeys: Vec<Monkey>,
	inspected_count: Vec<usize>,
	relief: u64,
	/// Product of all test divisors and the relief divisor. Reducing modulo this before the
	/// relief division keeps every test’s outcome, since `(v % (m * r)) / r ≡ v / r (mod m)`.
	/// `None` if the product overflows.
	modulus: Option<u64>,
	round: usize,
}

impl Troop {
	fn new(monkeys: Vec<Monkey>, relief: u64) -> Self {
		let modulus = monkeys.iter()
			.try_fold(relief, |acc, monkey| acc.checked_mul(monkey.throw_test.div_by));
		Troop { inspected_count: vec![0; monkeys.len()], monkeys, relief, modulus, round: 0 }
	}

	fn play_round(&mut self) -> Result<(), SimulationError> {
		self.round += 1;
		for i in 0..self.monkeys.len() {
			let items = std::mem::take(&mut self.monkeys[i].items);
			self.inspected_count[i] += items.len();

			for worry_level in items {
				let monkey = &self.monkeys[i];
				let new_worry_level = monkey.operation.execute(worry_level)
					.ok_or(SimulationError::Overflow { round: self.round, monkey: i, worry_level })?;
				let new_worry_level = self.modulus.map_or(new_worry_level, |m| new_worry_level % m)
					/ self.relief;
				let target = monkey.throw_test.target(new_worry_level);
				tracing::trace!(round = self.round, monkey = i, worry_level, new_worry_level, target);
				self.monkeys[target].items.push(new_worry_level);
			}
		}

		if self.round == 1 || self.round % 1000 == 0 {
			tracing::debug!(round = self.round, inspected = ?self.inspected_count);
		}
		Ok(())
	}

	fn monkey_business(&self) -> u64 {
		use itertools::Itertools as _;
		self.inspected_count.iter()
			.sorted_by(|left, right| right.cmp(left))
			.take(2)
			.map(|&count| count as u64)
			.product()
	}
}


fn input_monkeys_from_str(s: &str) -> Result<Vec<Monkey>, parsing::MonkeysError> {
	parsing::try_monkeys_from_str(s)
}


fn part1and2_impl(input_monkeys: Vec<Monkey>, num_rounds: usize, relief: u64) -> Result<u64, SimulationError> {
	let mut troop = Troop::new(input_monkeys, relief);
	for _ in 0..num_rounds { troop.play_round()? }
	Ok(troop.monkey_business())
}

pub(crate) fn part1(input: &str, options: &Options) -> anyhow::Result<u64> {
	Ok(part1and2_impl(
		input_monkeys_from_str(input)?,
		options.num_rounds.unwrap_or(20),
		options.worry_drop.unwrap_or(3))?)
}

pub(crate) fn part2(input: &str, options: &Options) -> anyhow::Result<u64> {
	Ok(part1and2_impl(
		input_monkeys_from_str(input)?,
		options.num_rounds.unwrap_or(10_000),
		options.worry_drop.unwrap_or(1))?)
}


mod parsing {
	use std::{num::ParseIntError, str::FromStr};
	use super::{ThrowTest, Operator, Operand, Operation, Monkey};

	#[derive(Debug, thiserror::Error)]
	pub(super) enum OperationError {
		#[error("expected “new = old OPERATOR OPERAND”")]
		Format,
		#[error("invalid operator {0:?}")]
		Operator(String),
		#[error("invalid operand: {0}")]
		Operand(ParseIntError),
	}

	impl FromStr for Operator {
		type Err = OperationError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			match s {
				"+" => Ok(Operator::Add),
				"*" => Ok(Operator::Mul),
				_ => Err(OperationError::Operator(s.to_owned())),
			}
		}
	}

	impl FromStr for Operand {
		type Err = OperationError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			match s {
				"old" => Ok(Operand::Old),
				value => Ok(Operand::Value(value.parse().map_err(OperationError::Operand)?)),
			}
		}
	}

	impl FromStr for Operation {
		type Err = OperationError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let mut tokens = s.split_whitespace();
			let (Some("new"), Some("="), Some("old"), Some(operator), Some(operand), None) = (
				tokens.next(), tokens.next(), tokens.next(),
				tokens.next(), tokens.next(), tokens.next(),
			) else { return Err(OperationError::Format) };
			Ok(Operation(operator.parse()?, operand.parse()?))
		}
	}

	#[derive(Debug, thiserror::Error)]
	pub(super) enum MonkeyErrorKind {
		#[error("expected “{0}”")]
		Format(&'static str),
		#[error("invalid number: {0}")]
		Int(#[from] ParseIntError),
		#[error(transparent)]
		Operation(OperationError),
		#[error("expected monkey {expected}")]
		Id { expected: usize },
		#[error("divisor must be positive")]
		ZeroDivisor,
		#[error("monkey cannot throw to itself")]
		ThrowToSelf,
	}

	#[derive(Debug, thiserror::Error)]
	pub(super) enum MonkeysError {
		#[error("Empty input")]
		Empty,
		#[error("Line {line}: {kind}")]
		Line { line: usize, kind: MonkeyErrorKind },
		#[error("Input ends before “{0}”")]
		EndOfInput(&'static str),
		#[error("Found {0} monkeys, need at least 2")]
		TooFew(usize),
		#[error("Monkey {monkey} throws to monkey {target}, which doesn’t exist")]
		UnknownTarget { monkey: usize, target: usize },
	}

	/// Returns the line index and what follows `prefix` on the next line.
	fn next_field<'s>(lines: &mut impl Iterator<Item = (usize, &'s str)>, prefix: &'static str)
	-> Result<(usize, &'s str), MonkeysError> {
		let (l, line) = lines.next().ok_or(MonkeysError::EndOfInput(prefix))?;
		let rest = line.trim_start().strip_prefix(prefix)
			.ok_or(MonkeysError::Line { line: l + 1, kind: MonkeyErrorKind::Format(prefix) })?;
		Ok((l, rest.trim_end()))
	}

	fn try_monkey_from_lines<'s>(id: usize, lines: &mut impl Iterator<Item = (usize, &'s str)>)
	-> Result<Monkey, MonkeysError> {
		use MonkeyErrorKind as K;

		macro_rules! field { ( $prefix:literal, |$rest:ident| $parse:expr ) => { {
			let (l, $rest) = next_field(lines, $prefix)?;
			let result: Result<_, K> = $parse;
			result.map_err(|kind| MonkeysError::Line { line: l + 1, kind })?
		} } }

		let throw_target = |target: Result<usize, ParseIntError>| match target {
			Ok(target) if target == id => Err(K::ThrowToSelf),
			target => target.map_err(K::Int),
		};

		field!("Monkey ", |rest| match rest.strip_suffix(':').map(str::parse::<usize>) {
			Some(Ok(found)) if found == id => Ok(()),
			Some(Err(e)) => Err(K::Int(e)),
			_ => Err(K::Id { expected: id }),
		});
		let items: Vec<u64> = field!("Starting items:", |rest| if rest.is_empty() { Ok(vec![]) } else {
			rest.split(',').map(|item| item.trim().parse::<u64>().map_err(K::Int)).collect()
		});
		let operation = field!("Operation: ", |rest| rest.parse::<Operation>().map_err(K::Operation));
		let div_by = field!("Test: divisible by ", |rest| match rest.parse::<u64>() {
			Ok(0) => Err(K::ZeroDivisor),
			div_by => div_by.map_err(K::Int),
		});
		let if_true = field!("If true: throw to monkey ", |rest| throw_target(rest.parse()));
		let if_false = field!("If false: throw to monkey ", |rest| throw_target(rest.parse()));

		Ok(Monkey { items, operation, throw_test: ThrowTest { div_by, if_true, if_false } })
	}

	pub(super) fn try_monkeys_from_str(s: &str) -> Result<Vec<Monkey>, MonkeysError> {
		if s.trim().is_empty() { return Err(MonkeysError::Empty) }

		let mut lines = s.lines()
			.enumerate()
			.filter(|(_, line)| !line.trim().is_empty())
			.peekable();
		let mut monkeys = vec![];
		while lines.peek().is_some() {
			monkeys.push(try_monkey_from_lines(monkeys.len(), &mut lines)?);
		}

		if monkeys.len() < 2 { return Err(MonkeysError::TooFew(monkeys.len())) }
		for (i, monkey) in monkeys.iter().enumerate() {
			let ThrowTest { if_true, if_false, .. } = monkey.throw_test;
			if let Some(target) = [if_true, if_false].into_iter().find(|&t| t >= monkeys.len()) {
				return Err(MonkeysError::UnknownTarget { monkey: i, target })
			}
		}
		Ok(monkeys)
	}
}
