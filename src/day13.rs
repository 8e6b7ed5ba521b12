// Copyright (c) 2022 Bastiaan Marinus van de Weerd


#[derive(Debug, clap::Args)]
pub(crate) struct Options {}


#[derive(Clone, Debug)]
enum Value {
	Int(u32),
	List(Vec<Value>),
}

impl Ord for Value {
	/// An integer compared with a list compares as a list holding only that integer.
	fn cmp(&self, other: &Self) -> std::cmp::Ordering {
		use {std::slice::from_ref, Value::*};
		match (self, other) {
			(Int(left), Int(right)) => left.cmp(right),
			(List(left), List(right)) => left.cmp(right),
			(left @ Int(_), List(right)) => from_ref(left).cmp(right.as_slice()),
			(List(left), right @ Int(_)) => left.as_slice().cmp(from_ref(right)),
		}
	}
}

impl PartialOrd for Value {
	fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
		Some(self.cmp(other))
	}
}

/// Consistent with [`Ord`], so `1` equals `[1]` and `[[1]]`.
impl PartialEq for Value {
	fn eq(&self, other: &Self) -> bool {
		self.cmp(other).is_eq()
	}
}

impl Eq for Value {}

impl std::fmt::Display for Value {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Value::Int(int) => write!(f, "{int}"),
			Value::List(values) => {
				use itertools::Itertools as _;
				write!(f, "[{}]", values.iter().format(","))
			}
		}
	}
}

#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Debug)]
struct Packet(Vec<Value>);

impl Packet {
	fn dividers() -> [Packet; 2] {
		use Value::*;
		[Packet(vec![List(vec![Int(2)])]), Packet(vec![List(vec![Int(6)])])]
	}
}

impl std::fmt::Display for Packet {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use itertools::Itertools as _;
		write!(f, "[{}]", self.0.iter().format(","))
	}
}


fn input_pairs_from_str(s: &str) -> Result<Vec<(Packet, Packet)>, parsing::PairsError> {
	parsing::try_pairs_from_str(s)
}


fn part1_impl(input_pairs: &[(Packet, Packet)]) -> usize {
	input_pairs.iter()
		.enumerate()
		.filter_map(|(i, (left, right))| {
			let in_order = left < right;
			tracing::trace!(pair = i + 1, %left, %right, in_order);
			in_order.then_some(i + 1)
		})
		.sum()
}

pub(crate) fn part1(input: &str, _: &Options) -> anyhow::Result<usize> {
	Ok(part1_impl(&input_pairs_from_str(input)?))
}


fn part2_impl(input_pairs: &[(Packet, Packet)]) -> Option<usize> {
	use itertools::Itertools as _;

	let dividers = Packet::dividers();
	let mut packets = input_pairs.iter()
		.flat_map(|(left, right)| [(left, false), (right, false)])
		.chain(dividers.iter().map(|divider| (divider, true)))
		.collect::<Vec<_>>();
	// Stable, so each divider sorts after input packets equal to it
	packets.sort_by(|(left, _), (right, _)| left.cmp(right));

	let mut positions = packets.iter().positions(|&(_, is_divider)| is_divider).map(|i| i + 1);
	let (first, second) = (positions.next()?, positions.next()?);
	tracing::debug!(num_packets = packets.len(), first, second);
	Some(first * second)
}

pub(crate) fn part2(input: &str, _: &Options) -> anyhow::Result<usize> {
	use anyhow::Context as _;
	part2_impl(&input_pairs_from_str(input)?).context("Divider packets not found among sorted packets")
}


mod parsing {
	use std::{num::ParseIntError, str::FromStr};
	use super::{Value, Packet};

	#[derive(Debug, thiserror::Error)]
	pub(super) enum ValueError {
		#[error("invalid integer at column {column}: {source}")]
		Int { column: usize, source: ParseIntError },
		#[error("invalid byte {found:#04x} at column {column}")]
		InvalidByte { column: usize, found: u8 },
		#[error("unexpected end of line")]
		EndOfString,
	}

	impl FromStr for Value {
		type Err = ValueError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			use ValueError::*;

			let byte = |c: usize| s.as_bytes().get(c).copied();
			let unexpected = |c: usize| match byte(c) {
				Some(found) => InvalidByte { column: c + 1, found },
				None => EndOfString,
			};

			// Lists still open, innermost last
			let mut stack: Vec<Vec<Value>> = vec![];
			let mut c = 0;

			loop {
				let mut value = match byte(c) {
					Some(b'[') if byte(c + 1) == Some(b']') => { c += 2; Value::List(vec![]) }
					Some(b'[') => { c += 1; stack.push(vec![]); continue }
					Some(b'0'..=b'9') => {
						let len = s[c..].bytes().take_while(u8::is_ascii_digit).count();
						let int = s[c..c + len].parse()
							.map_err(|source| Int { column: c + 1, source })?;
						c += len;
						Value::Int(int)
					}
					_ => return Err(unexpected(c)),
				};

				// Close as many lists as the value completes
				loop {
					let Some(mut values) = stack.pop() else {
						return if c == s.len() { Ok(value) } else { Err(unexpected(c)) }
					};
					values.push(value);
					match byte(c) {
						Some(b',') => { c += 1; stack.push(values); break }
						Some(b']') => { c += 1; value = Value::List(values) }
						_ => return Err(unexpected(c)),
					}
				}
			}
		}
	}

	#[derive(Debug, thiserror::Error)]
	pub(super) enum PacketError {
		#[error("packet is not a list")]
		NotAList,
		#[error(transparent)]
		Value(ValueError),
	}

	impl FromStr for Packet {
		type Err = PacketError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			match s.parse().map_err(PacketError::Value)? {
				Value::List(values) => Ok(Packet(values)),
				Value::Int(_) => Err(PacketError::NotAList),
			}
		}
	}

	#[derive(Debug, thiserror::Error)]
	pub(super) enum PairsError {
		#[error("Empty input")]
		Empty,
		#[error("Invalid packet on line {line}: {source}")]
		Packet { line: usize, source: PacketError },
		#[error("Group starting on line {line} has {found} packets instead of a pair")]
		NotAPair { line: usize, found: usize },
	}

	pub(super) fn try_pairs_from_str(s: &str) -> Result<Vec<(Packet, Packet)>, PairsError> {
		if s.trim().is_empty() { return Err(PairsError::Empty) }

		let mut lines = s.lines().enumerate().peekable();
		let mut pairs = vec![];
		while let Some(&(l, _)) = lines.peek() {
			let packets = lines.by_ref()
				.take_while(|(_, line)| !line.is_empty())
				.map(|(l, line)| line.parse()
					.map_err(|source| PairsError::Packet { line: l + 1, source }))
				.collect::<Result<Vec<_>, _>>()?;
			match <[Packet; 2]>::try_from(packets) {
				Ok([left, right]) => pairs.push((left, right)),
				Err(packets) if packets.is_empty() => (),
				Err(packets) => return Err(PairsError::NotAPair { line: l + 1, found: packets.len() }),
			}
		}
		Ok(pairs)
	}
}
