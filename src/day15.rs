// Copyright (c) 2022 Bastiaan Marinus van de Weerd


#[derive(Debug, clap::Args)]
pub(crate) struct Options {
	/// Row whose covered positions part 1 counts
	#[arg(long, default_value_t = 2_000_000, allow_negative_numbers = true)]
	target_row: i64,
	/// Smallest x and y coordinate part 2 searches
	#[arg(long, default_value_t = 0, allow_negative_numbers = true)]
	min_coord: i64,
	/// Largest x and y coordinate part 2 searches (inclusive)
	#[arg(long, default_value_t = 4_000_000, allow_negative_numbers = true)]
	max_coord: i64,
}


use std::ops::RangeInclusive;

#[derive(Clone, Debug)]
struct Sensor {
	pos: [i64; 2],
	beacon: [i64; 2],
}

impl Sensor {
	fn radius(&self) -> i64 {
		(self.beacon[0].abs_diff(self.pos[0]) + self.beacon[1].abs_diff(self.pos[1])) as i64
	}

	/// Positions on `row` no closer to the sensor than its beacon.
	fn row_range(&self, row: i64) -> Option<RangeInclusive<i64>> {
		let delta = self.radius() - self.pos[1].abs_diff(row) as i64;
		(delta >= 0).then(|| self.pos[0] - delta..=self.pos[0] + delta)
	}
}

struct Sensors(Vec<Sensor>);

impl Sensors {
	/// Returns the positions on `row` covered by any sensor, as sorted, disjoint and
	/// non-adjacent ranges.
	fn row_coverage(&self, row: i64) -> Vec<RangeInclusive<i64>> {
		use itertools::Itertools as _;
		self.0.iter()
			.filter_map(|sensor| sensor.row_range(row))
			.sorted_by_key(|range| *range.start())
			.coalesce(|left, right| if *right.start() <= *left.end() + 1 {
				Ok(*left.start()..=*left.end().max(right.end()))
			} else {
				Err((left, right))
			})
			.collect()
	}

	/// Returns the leftmost position within `bounds` on `row` not covered by any sensor.
	fn first_uncovered(&self, row: i64, bounds: &RangeInclusive<i64>) -> Option<i64> {
		let mut x = *bounds.start();
		for range in self.row_coverage(row) {
			if x > *bounds.end() { return None }
			if *range.start() > x { return Some(x) }
			x = x.max(*range.end() + 1);
		}
		(x <= *bounds.end()).then_some(x)
	}
}

#[derive(Debug, thiserror::Error)]
enum SearchError {
	#[error("Search area is empty: {min} > {max}")]
	EmptyArea { min: i64, max: i64 },
	#[error("No uncovered position within {min}..={max}")]
	NotFound { min: i64, max: i64 },
}


fn input_sensors_from_str(s: &str) -> Result<Sensors, parsing::SensorsError> {
	Ok(Sensors(parsing::sensors_from_str(s).collect::<Result<_, _>>()?))
}


/// Beacons on the row don’t count as positions that cannot hold one.
fn part1_impl(input_sensors: &Sensors, target_row: i64) -> usize {
	use std::collections::BTreeSet;

	let covered = input_sensors.row_coverage(target_row).into_iter()
		.map(|range| (range.end() - range.start() + 1) as usize)
		.sum::<usize>();
	let beacons = input_sensors.0.iter()
		.filter_map(|sensor| (sensor.beacon[1] == target_row).then_some(sensor.beacon[0]))
		.collect::<BTreeSet<_>>();

	tracing::debug!(target_row, covered, beacons = beacons.len());
	covered - beacons.len()
}

pub(crate) fn part1(input: &str, options: &Options) -> anyhow::Result<usize> {
	Ok(part1_impl(&input_sensors_from_str(input)?, options.target_row))
}


fn part2_impl(input_sensors: &Sensors, bounds: RangeInclusive<i64>) -> Result<i64, SearchError> {
	use rayon::prelude::{IntoParallelIterator as _, ParallelIterator as _};

	let (min, max) = (*bounds.start(), *bounds.end());
	if min > max { return Err(SearchError::EmptyArea { min, max }) }

	let [x, y] = bounds.clone()
		.into_par_iter()
		.find_map_any(|y| input_sensors.first_uncovered(y, &bounds).map(|x| [x, y]))
		.ok_or(SearchError::NotFound { min, max })?;

	tracing::info!(x, y, "distress beacon");
	Ok(x * 4_000_000 + y)
}

pub(crate) fn part2(input: &str, options: &Options) -> anyhow::Result<i64> {
	let bounds = options.min_coord..=options.max_coord;
	Ok(part2_impl(&input_sensors_from_str(input)?, bounds)?)
}


mod parsing {
	use std::num::ParseIntError;
	use super::Sensor;

	#[derive(Debug, thiserror::Error)]
	pub(super) enum SensorError {
		#[error("expected “{expected}” at column {column}")]
		Format { column: usize, expected: &'static str },
		#[error("invalid coordinate at column {column}: {source}")]
		Int { column: usize, source: ParseIntError },
		#[error("unexpected trailing characters at column {column}")]
		Trailing { column: usize },
	}

	fn try_sensor_from_str(line: &str) -> Result<Sensor, SensorError> {
		const PREFIXES: [&str; 4] = ["Sensor at x=", ", y=", ": closest beacon is at x=", ", y="];
		let column = |rest: &str| line.len() - rest.len() + 1;

		let mut rest = line;
		let mut coords = [0; 4];
		for (coord, expected) in coords.iter_mut().zip(PREFIXES) {
			rest = rest.strip_prefix(expected)
				.ok_or(SensorError::Format { column: column(rest), expected })?;
			let len = rest.bytes()
				.enumerate()
				.take_while(|&(i, b)| b.is_ascii_digit() || i == 0 && b == b'-')
				.count();
			*coord = rest[..len].parse()
				.map_err(|source| SensorError::Int { column: column(rest), source })?;
			rest = &rest[len..];
		}

		if !rest.is_empty() { return Err(SensorError::Trailing { column: column(rest) }) }
		let [x, y, beacon_x, beacon_y] = coords;
		Ok(Sensor { pos: [x, y], beacon: [beacon_x, beacon_y] })
	}

	#[derive(Debug, thiserror::Error)]
	pub(super) enum SensorsError {
		#[error("Empty input")]
		Empty,
		#[error("Invalid sensor on line {line}: {source}")]
		Sensor { line: usize, source: SensorError },
	}

	pub(super) fn sensors_from_str(s: &str) -> impl Iterator<Item = Result<Sensor, SensorsError>> + '_ {
		use {std::iter::once, either::Either::*};
		if s.trim().is_empty() { return Left(once(Err(SensorsError::Empty))) }
		Right(s.lines()
			.enumerate()
			.map(|(l, line)| try_sensor_from_str(line)
				.map_err(|source| SensorsError::Sensor { line: l + 1, source })))
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUT: &str = indoc::indoc! { "
		Sensor at x=2, y=18: closest beacon is at x=-2, y=15
		Sensor at x=9, y=16: closest beacon is at x=10, y=16
		Sensor at x=13, y=2: closest beacon is at x=15, y=3
		Sensor at x=12, y=14: closest beacon is at x=10, y=16
		Sensor at x=10, y=20: closest beacon is at x=10, y=16
		Sensor at x=14, y=17: closest beacon is at x=10, y=16
		Sensor at x=8, y=7: closest beacon is at x=2, y=10
		Sensor at x=2, y=0: closest beacon is at x=2, y=10
		Sensor at x=0, y=11: closest beacon is at x=2, y=10
		Sensor at x=20, y=14: closest beacon is at x=25, y=17
		Sensor at x=17, y=20: closest beacon is at x=21, y=22
		Sensor at x=16, y=7: closest beacon is at x=15, y=3
		Sensor at x=14, y=3: closest beacon is at x=15, y=3
		Sensor at x=20, y=1: closest beacon is at x=15, y=3
	" };

	#[test]
	fn example() {
		let sensors = input_sensors_from_str(INPUT).unwrap();
		assert_eq!(sensors.0.len(), 14);
		assert_eq!(sensors.0[6].radius(), 9);
		assert_eq!(sensors.row_coverage(10), [-2..=24]);
		assert_eq!(part1_impl(&sensors, 10), 26);
		assert_eq!(sensors.first_uncovered(11, &(0..=20)), Some(14));
		assert_eq!(part2_impl(&sensors, 0..=20).unwrap(), 56000011);

		let options = Options { target_row: 10, min_coord: 0, max_coord: 20 };
		assert_eq!(part1(INPUT, &options).unwrap(), 26);
		assert_eq!(part2(INPUT, &options).unwrap(), 56000011);
	}

	#[test]
	fn row_range() {
		let sensor = Sensor { pos: [8, 7], beacon: [2, 10] };
		assert_eq!(sensor.row_range(7), Some(-1..=17));
		assert_eq!(sensor.row_range(16), Some(8..=8));
		assert_eq!(sensor.row_range(-2), Some(8..=8));
		assert_eq!(sensor.row_range(17), None);
	}

	#[test]
	fn coverage() {
		let sensors = Sensors(vec![
			Sensor { pos: [0, 0], beacon: [1, 0] },
			Sensor { pos: [3, 0], beacon: [4, 0] },
			Sensor { pos: [8, 0], beacon: [8, 1] },
		]);
		// Adjacent ranges merge, separated ones don’t
		assert_eq!(sensors.row_coverage(0), [-1..=4, 7..=9]);
		assert_eq!(part1_impl(&sensors, 0), 6 + 3 - 2);
		assert_eq!(sensors.first_uncovered(0, &(-1..=9)), Some(5));
		assert_eq!(sensors.first_uncovered(0, &(-5..=9)), Some(-5));
		assert_eq!(sensors.first_uncovered(0, &(7..=9)), None);
		assert_eq!(sensors.first_uncovered(0, &(7..=10)), Some(10));
		assert_eq!(sensors.first_uncovered(5, &(0..=3)), Some(0));
	}

	#[test]
	fn search_errors() {
		let sensors = input_sensors_from_str(INPUT).unwrap();
		assert!(matches!(part2_impl(&sensors, 5..=4), Err(SearchError::EmptyArea { min: 5, max: 4 })));
		assert!(matches!(part2_impl(&sensors, 0..=10), Err(SearchError::NotFound { min: 0, max: 10 })));
	}

	#[test]
	fn errors() {
		use parsing::{SensorsError as E, SensorError};
		assert!(matches!(input_sensors_from_str("\n"), Err(E::Empty)));
		assert!(matches!(input_sensors_from_str("Sensor at x=2, y=18: closest beacon is at x=-2; y=15"),
			Err(E::Sensor { line: 1, source: SensorError::Format { column: 47, expected: ", y=" } })));
		assert!(matches!(input_sensors_from_str("Sensor at x=2, y=18: closest beacon is at x=-2, y=15\nSensor at x=, y=1: closest beacon is at x=0, y=0"),
			Err(E::Sensor { line: 2, source: SensorError::Int { column: 13, .. } })));
		assert!(matches!(input_sensors_from_str("Sensor at x=2, y=18: closest beacon is at x=-2, y=15!"),
			Err(E::Sensor { line: 1, source: SensorError::Trailing { column: 53 } })));
		assert!(matches!(input_sensors_from_str("Beacon at x=2, y=18: closest beacon is at x=-2, y=15"),
			Err(E::Sensor { line: 1, source: SensorError::Format { column: 1, .. } })));
	}
}
