// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use anyhow::Context as _;


#[derive(Debug, clap::Args)]
pub(crate) struct Options {}


fn input_datastream_buffer_from_str(s: &str) -> Result<&[u8], parsing::DatastreamError> {
	parsing::datastream_buffer_from_str(s)
}


/// Returns the number of characters processed up to and including the first window of
/// `N` distinct characters, i.e. the smallest such window’s end.
fn part1and2_impl<const N: usize>(input_datastream_buffer: &[u8]) -> Option<usize> {
	input_datastream_buffer
		.windows(N)
		.position(|w| w.iter()
			.scan(0_u32, |acc, b| {
				let prev_acc = *acc;
				*acc |= 1 << (*b - b'a');
				Some(*acc != prev_acc)
			})
			.all(std::convert::identity))
		.map(|p| p + N)
}

pub(crate) fn part1(input: &str, _: &Options) -> anyhow::Result<usize> {
	part1and2_impl::<4>(input_datastream_buffer_from_str(input)?)
		.context("No start-of-packet marker found")
}

pub(crate) fn part2(input: &str, _: &Options) -> anyhow::Result<usize> {
	part1and2_impl::<14>(input_datastream_buffer_from_str(input)?)
		.context("No start-of-message marker found")
}


mod parsing {
	#[derive(Debug, thiserror::Error)]
	pub(super) enum DatastreamError {
		#[error("Empty input")]
		Empty,
		#[error("Invalid byte {found:#04x} at column {column}")]
		InvalidByte { column: usize, found: u8 },
	}

	pub(super) fn datastream_buffer_from_str(s: &str) -> Result<&[u8], DatastreamError> {
		let s = s.trim_end();
		if s.is_empty() { return Err(DatastreamError::Empty) }
		if let Some((c, &found)) = s.as_bytes().iter().enumerate().find(|(_, b)| !b.is_ascii_lowercase()) {
			return Err(DatastreamError::InvalidByte { column: c + 1, found })
		}
		Ok(s.as_bytes())
	}
}
