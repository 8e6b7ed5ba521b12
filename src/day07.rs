// Copyright (c) 2022 Bastiaan Marinus van de Weerd


#[derive(Debug, clap::Args)]
pub(crate) struct Options {}


const DISK_SIZE: usize = 70_000_000;
const UPDATE_SIZE: usize = 30_000_000;
const SMALL_DIR_SIZE: usize = 100_000;


#[cfg_attr(test, derive(Debug))]
struct Dir<'s> {
	name: &'s str,
	parent: Option<usize>,
	subdirs: Vec<usize>,
	/// Sum of the sizes of the files directly in this directory.
	files_size: usize,
}

/// Directories are stored in creation order, so subdirectories always follow their parent.
/// The root directory is at index 0.
#[cfg_attr(test, derive(Debug))]
struct Filesystem<'s> {
	dirs: Vec<Dir<'s>>,
}

impl<'s> Filesystem<'s> {
	fn new() -> Self {
		Filesystem { dirs: vec![Dir { name: "/", parent: None, subdirs: vec![], files_size: 0 }] }
	}

	fn subdir(&self, dir: usize, name: &str) -> Option<usize> {
		self.dirs[dir].subdirs.iter().copied().find(|&d| self.dirs[d].name == name)
	}

	fn add_subdir(&mut self, dir: usize, name: &'s str) {
		if self.subdir(dir, name).is_some() { return }
		let subdir = self.dirs.len();
		self.dirs.push(Dir { name, parent: Some(dir), subdirs: vec![], files_size: 0 });
		self.dirs[dir].subdirs.push(subdir);
	}

	/// Returns the total size of every directory, indexed like `dirs`.
	fn total_sizes(&self) -> Vec<usize> {
		let mut sizes = self.dirs.iter().map(|dir| dir.files_size).collect::<Vec<_>>();
		for (d, dir) in self.dirs.iter().enumerate().skip(1).rev() {
			if let Some(parent) = dir.parent { sizes[parent] += sizes[d] }
		}
		sizes
	}
}


fn input_filesystem_from_str(s: &str) -> Result<Filesystem<'_>, parsing::LineError> {
	parsing::try_filesystem_from_str(s)
}


fn part1_impl(input_filesystem: &Filesystem<'_>) -> usize {
	input_filesystem.total_sizes().into_iter()
		.filter(|&size| size <= SMALL_DIR_SIZE)
		.sum()
}

pub(crate) fn part1(input: &str, _: &Options) -> anyhow::Result<usize> {
	Ok(part1_impl(&input_filesystem_from_str(input)?))
}


/// Returns 0 when the disk already has enough free space.
fn part2_impl(input_filesystem: &Filesystem<'_>) -> usize {
	let sizes = input_filesystem.total_sizes();
	let free = DISK_SIZE.saturating_sub(sizes[0]);
	let size_needed = UPDATE_SIZE.saturating_sub(free);
	if size_needed == 0 { return 0 }
	tracing::debug!(used = sizes[0], free, size_needed);
	sizes.iter().copied()
		.filter(|&size| size >= size_needed)
		.min()
		.unwrap_or(sizes[0])
}

pub(crate) fn part2(input: &str, _: &Options) -> anyhow::Result<usize> {
	Ok(part2_impl(&input_filesystem_from_str(input)?))
}


mod parsing {
	use std::num::ParseIntError;
	use super::Filesystem;

	#[derive(Debug, thiserror::Error)]
	pub(super) enum EntryError {
		#[error("expected “dir NAME” or “SIZE NAME”")]
		NoSpace,
		#[error("invalid file size: {0}")]
		InvalidFilesize(ParseIntError),
		#[error("invalid character in name at column {column}")]
		InvalidName { column: usize },
	}

	enum Entry<'s> {
		Dir(&'s str),
		File(usize),
	}

	impl<'s> TryFrom<&'s str> for Entry<'s> {
		type Error = EntryError;
		fn try_from(line: &'s str) -> Result<Self, Self::Error> {
			let (prefix, name) = line.split_once(' ').ok_or(EntryError::NoSpace)?;
			if let Some(c) = name.bytes().position(|b| !(b.is_ascii_alphanumeric() || b == b'.' || b == b'_')) {
				return Err(EntryError::InvalidName { column: prefix.len() + c + 2 })
			}
			if prefix == "dir" { return Ok(Entry::Dir(name)) }
			Ok(Entry::File(prefix.parse().map_err(EntryError::InvalidFilesize)?))
		}
	}

	#[derive(Debug, thiserror::Error)]
	pub(super) enum LineErrorKind {
		#[error("cannot change out of the root directory")]
		CannotChangeOutOfRootDir,
		#[error("no directory “{0}” listed")]
		ChangeIntoDirNotFound(String),
		#[error("invalid command")]
		InvalidCommand,
		#[error("output without a preceding “ls”")]
		UnexpectedOutput,
		#[error(transparent)]
		InvalidEntry(EntryError),
	}

	#[derive(Debug, thiserror::Error)]
	pub(super) enum LineError {
		#[error("Empty input")]
		Empty,
		#[error("Line {line}: {kind}")]
		Line { line: usize, kind: LineErrorKind },
	}

	pub(super) fn try_filesystem_from_str(s: &str) -> Result<Filesystem<'_>, LineError> {
		use LineErrorKind::*;
		if s.trim().is_empty() { return Err(LineError::Empty) }

		let mut filesystem = Filesystem::new();
		let mut cwd = 0;
		let mut listing = false;

		for (l, line) in s.lines().enumerate() {
			let err = |kind| LineError::Line { line: l + 1, kind };

			let Some(command) = line.strip_prefix("$ ") else {
				if !listing { return Err(err(UnexpectedOutput)) }
				match Entry::try_from(line).map_err(|e| err(InvalidEntry(e)))? {
					Entry::Dir(name) => filesystem.add_subdir(cwd, name),
					Entry::File(size) => filesystem.dirs[cwd].files_size += size,
				}
				continue
			};

			listing = false;
			match command.strip_prefix("cd ") {
				Some("/") => cwd = 0,
				Some("..") => cwd = filesystem.dirs[cwd].parent
					.ok_or_else(|| err(CannotChangeOutOfRootDir))?,
				Some(name) => cwd = filesystem.subdir(cwd, name)
					.ok_or_else(|| err(ChangeIntoDirNotFound(name.to_owned())))?,
				None if command == "ls" => {
					// Listing a directory again replaces what was previously listed
					filesystem.dirs[cwd].files_size = 0;
					listing = true
				}
				None => return Err(err(InvalidCommand)),
			}
			tracing::trace!(line = l + 1, cwd = filesystem.dirs[cwd].name, listing);
		}

		Ok(filesystem)
	}
}
