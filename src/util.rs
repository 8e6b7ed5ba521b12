// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::path::{Path, PathBuf};


#[derive(Clone, Copy, PartialEq, Eq, Debug, clap::ValueEnum)]
pub(crate) enum Part {
	#[value(name = "1")]
	One,
	#[value(name = "2")]
	Two,
}

impl std::fmt::Display for Part {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(match self { Part::One => "1", Part::Two => "2" })
	}
}

/// Arguments shared by every day’s subcommand.
#[derive(Debug, clap::Args)]
pub(crate) struct InputArgs {
	/// Path to the puzzle input
	pub(crate) file: PathBuf,
	/// Only compute this part (default: both)
	#[arg(short, long, value_enum)]
	pub(crate) part: Option<Part>,
}

impl InputArgs {
	pub(crate) fn includes(&self, part: Part) -> bool {
		self.part.map_or(true, |p| p == part)
	}
}


pub(crate) fn read_input(path: &Path) -> anyhow::Result<String> {
	use anyhow::Context as _;
	let input = std::fs::read_to_string(path)
		.with_context(|| format!("reading puzzle input {}", path.display()))?;
	tracing::debug!(path = %path.display(), bytes = input.len(), "read puzzle input");
	Ok(input)
}

pub(crate) fn print_answer(day: &str, part: Part, answer: impl std::fmt::Display) {
	let answer = answer.to_string();
	if answer.contains('\n') {
		println!("Day {day}; part {part}:\n{answer}")
	} else {
		println!("Day {day}; part {part}: {answer}")
	}
}

/// Logs go to stderr; `RUST_LOG` takes precedence over `verbosity`.
pub(crate) fn init_tracing(verbosity: u8) -> anyhow::Result<()> {
	use tracing_subscriber::{prelude::*, EnvFilter};
	let default = match verbosity { 0 => "warn", 1 => "info", 2 => "debug", _ => "trace" };
	let filter = EnvFilter::try_from_default_env()
		.or_else(|_| EnvFilter::try_new(default))?;
	tracing_subscriber::registry()
		.with(filter)
		.with(tracing_subscriber::fmt::layer()
			.with_target(true)
			.with_writer(std::io::stderr))
		.try_init()?;
	Ok(())
}


/// Declares the `dayNN` modules and the [`clap::Subcommand`] that dispatches to them. Every
/// module must provide an `Options` type implementing [`clap::Args`], and `part1` and `part2`
/// functions taking the input text and `&Options`, returning an `anyhow::Result` of something
/// [`Display`](std::fmt::Display)able.
macro_rules! mod_days { ( $( $day:literal : $about:literal ),* $(,)? ) => { paste::paste! {
	$( mod [<day $day>]; )*

	#[derive(Debug, clap::Subcommand)]
	pub(crate) enum Day {
		$(
			#[command(about = $about)]
			[<Day $day>] {
				#[command(flatten)]
				input: $crate::util::InputArgs,
				#[command(flatten)]
				options: [<day $day>]::Options,
			},
		)*
	}

	impl Day {
		pub(crate) fn run(&self) -> anyhow::Result<()> {
			use $crate::util::{Part, read_input, print_answer};
			match self { $(
				Day::[<Day $day>] { input, options } => {
					let _span = tracing::info_span!("day", day = stringify!($day)).entered();
					let text = read_input(&input.file)?;
					if input.includes(Part::One) {
						print_answer(stringify!($day), Part::One, [<day $day>]::part1(&text, options)?);
					}
					if input.includes(Part::Two) {
						print_answer(stringify!($day), Part::Two, [<day $day>]::part2(&text, options)?);
					}
					Ok(())
				}
			)* }
		}
	}
} } }

pub(crate) use mod_days;


#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn read_missing_input() {
		let path = std::env::temp_dir().join("advent22-solver-missing-input.txt");
		let err = read_input(&path).unwrap_err();
		assert!(err.to_string().starts_with("reading puzzle input"));
		assert!(err.chain().any(|e| e.downcast_ref::<std::io::Error>()
			.map_or(false, |e| e.kind() == std::io::ErrorKind::NotFound)));
	}

	#[test]
	fn read_existing_input() {
		let path = std::env::temp_dir().join(format!("advent22-solver-{}.txt", std::process::id()));
		std::fs::write(&path, "noop\n").unwrap();
		let input = read_input(&path);
		std::fs::remove_file(&path).unwrap();
		assert_eq!(input.unwrap(), "noop\n");
	}

	#[test]
	fn part_selection() {
		let input = |part| InputArgs { file: PathBuf::from("input.txt"), part };
		assert!(input(None).includes(Part::One) && input(None).includes(Part::Two));
		assert!(input(Some(Part::One)).includes(Part::One));
		assert!(!input(Some(Part::One)).includes(Part::Two));
	}
}
