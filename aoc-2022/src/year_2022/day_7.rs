//! Day 7: No Space Left On Device

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use std::collections::BTreeMap;

use crate::parsing::line_error;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 7, tags = ["2022", "tree"])]
pub struct NoSpaceLeftOnDevice;

pub const DISK_SIZE: u64 = 70_000_000;
pub const SPACE_NEEDED: u64 = 30_000_000;
pub const SMALL_DIRECTORY_LIMIT: u64 = 100_000;

#[derive(Debug, Clone, Default)]
pub struct Directory {
    pub name: String,
    pub parent: Option<usize>,
    pub children: BTreeMap<String, usize>,
    pub files: BTreeMap<String, u64>,
}

/// Directory tree stored as an arena; index 0 is `/`
///
/// A directory is always pushed after its parent, so every child has a
/// larger index than its parent.
#[derive(Debug, Clone)]
pub struct FileSystem {
    dirs: Vec<Directory>,
}

impl Default for FileSystem {
    fn default() -> Self {
        Self {
            dirs: vec![Directory {
                name: "/".to_string(),
                ..Directory::default()
            }],
        }
    }
}

impl FileSystem {
    pub const ROOT: usize = 0;

    pub fn directory(&self, id: usize) -> &Directory {
        &self.dirs[id]
    }

    pub fn len(&self) -> usize {
        self.dirs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dirs.is_empty()
    }

    /// Child `name` of `parent`, created if it was never listed
    fn child(&mut self, parent: usize, name: &str) -> usize {
        if let Some(&id) = self.dirs[parent].children.get(name) {
            return id;
        }
        let id = self.dirs.len();
        self.dirs.push(Directory {
            name: name.to_string(),
            parent: Some(parent),
            ..Directory::default()
        });
        self.dirs[parent].children.insert(name.to_string(), id);
        id
    }

    /// Size of `id` including everything below it
    pub fn total_size(&self, id: usize) -> u64 {
        let dir = &self.dirs[id];
        dir.files.values().sum::<u64>()
            + dir
                .children
                .values()
                .map(|&child| self.total_size(child))
                .sum::<u64>()
    }

    /// Total size of every directory, indexed like the arena
    pub fn directory_sizes(&self) -> Vec<u64> {
        let mut sizes: Vec<u64> = self
            .dirs
            .iter()
            .map(|dir| dir.files.values().sum())
            .collect();
        for id in (1..self.dirs.len()).rev() {
            if let Some(parent) = self.dirs[id].parent {
                sizes[parent] += sizes[id];
            }
        }
        sizes
    }

    /// Build the tree from a shell transcript
    pub fn from_transcript(input: &str) -> Result<Self, ParseError> {
        let mut fs = FileSystem::default();
        let mut cwd = Self::ROOT;
        let mut listing = false;

        for (idx, line) in input.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if let Some(command) = line.strip_prefix("$ ") {
                listing = false;
                match command.split_whitespace().collect::<Vec<_>>()[..] {
                    ["cd", "/"] => cwd = Self::ROOT,
                    ["cd", ".."] => {
                        cwd = fs.dirs[cwd]
                            .parent
                            .ok_or_else(|| line_error(idx, "cannot leave the root directory"))?;
                    }
                    ["cd", name] => cwd = fs.child(cwd, name),
                    ["ls"] => listing = true,
                    _ => return Err(line_error(idx, format!("unknown command {command:?}"))),
                }
                continue;
            }

            if !listing {
                return Err(line_error(idx, format!("output outside of ls: {line:?}")));
            }
            match line.split_once(' ') {
                Some(("dir", name)) => {
                    fs.child(cwd, name.trim());
                }
                Some((size, name)) => {
                    let size: u64 = size
                        .parse()
                        .map_err(|_| line_error(idx, format!("bad file size {size:?}")))?;
                    // listing a directory twice must not count its files twice
                    fs.dirs[cwd].files.insert(name.trim().to_string(), size);
                }
                None => return Err(line_error(idx, format!("bad listing entry {line:?}"))),
            }
        }
        Ok(fs)
    }
}

/// Parsed tree plus directory sizes, computed on first use
#[derive(Debug)]
pub struct SharedData {
    fs: FileSystem,
    sizes: Option<Vec<u64>>,
}

fn sizes(shared: &mut SharedData) -> &[u64] {
    shared
        .sizes
        .get_or_insert_with(|| shared.fs.directory_sizes())
}

/// Size of the smallest directory that frees enough space for the update
pub fn smallest_deletion(sizes: &[u64], disk: u64, needed: u64) -> u64 {
    let used = sizes[FileSystem::ROOT];
    let free = disk.saturating_sub(used);
    let missing = needed.saturating_sub(free);
    if missing == 0 {
        return 0;
    }
    sizes
        .iter()
        .copied()
        .filter(|&size| size >= missing)
        .min()
        .unwrap_or(used)
}

impl AocParser for NoSpaceLeftOnDevice {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Ok(SharedData {
            fs: FileSystem::from_transcript(input)?,
            sizes: None,
        })
    }
}

impl PartSolver<1> for NoSpaceLeftOnDevice {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total: u64 = sizes(shared)
            .iter()
            .filter(|&&size| size <= SMALL_DIRECTORY_LIMIT)
            .sum();
        Ok(total.to_string())
    }
}

impl PartSolver<2> for NoSpaceLeftOnDevice {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(smallest_deletion(sizes(shared), DISK_SIZE, SPACE_NEEDED).to_string())
    }
}
