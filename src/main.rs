// Copyright (c) 2022 Bastiaan Marinus van de Weerd

mod util;
util::mod_days![
	01: "Calorie Counting",
	02: "Rock Paper Scissors",
	03: "Rucksack Reorganization",
	04: "Camp Cleanup",
	05: "Supply Stacks",
	06: "Tuning Trouble",
	07: "No Space Left On Device",
	08: "Treetop Tree House",
	09: "Rope Bridge",
	10: "Cathode-Ray Tube",
	11: "Monkey in the Middle",
	12: "Hill Climbing Algorithm",
	13: "Distress Signal",
	14: "Regolith Reservoir",
	15: "Beacon Exclusion Zone",
];

/// Solutions to the 2022 Advent of Code puzzles
#[derive(Debug, clap::Parser)]
#[command(version)]
struct Args {
	/// Log more (repeatable); `RUST_LOG` overrides this
	#[arg(short, long, action = clap::ArgAction::Count, global = true)]
	verbose: u8,
	#[command(subcommand)]
	day: Day,
}

fn main() -> anyhow::Result<()> {
	use clap::Parser as _;
	let args = Args::parse();
	util::init_tracing(args.verbose)?;
	args.day.run()
}


#[test]
fn cli() {
	use clap::{CommandFactory as _, Parser as _};
	Args::command().debug_assert();

	let args = Args::try_parse_from(["advent22", "-v", "day11", "input.txt", "--num-rounds", "5"]).unwrap();
	assert_eq!(args.verbose, 1);
	assert!(matches!(args.day, Day::Day11 { .. }));

	let args = Args::try_parse_from(["advent22", "day05", "input.txt", "--part", "2"]).unwrap();
	let Day::Day05 { input, .. } = args.day else { panic!("expected day05") };
	assert_eq!(input.part, Some(util::Part::Two));

	assert!(Args::try_parse_from(["advent22", "day12"]).is_err());
	assert!(Args::try_parse_from(["advent22", "day16", "input.txt"]).is_err());
}
