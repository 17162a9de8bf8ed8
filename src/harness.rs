//! Line-oriented driver that feeds integers read from a text stream into a `RedBlackSet<i64>` and
//! reports the contents and shape of the set after every line.

use crate::error::Result;
use crate::red_black_tree::{HeightSize, RedBlackSet};
use log::LevelFilter;
use std::io::{BufRead, Write};
use std::str::FromStr;

/// Keys inserted by the demo that runs before any input is read.
pub const DEMO_KEYS: [i64; 10] = [1, 2, 7, 9, 3, 4, 5, 6, 8, 0];

/// Environment variable holding the log level of the binary.
pub const LOG_LEVEL_VAR: &str = "BALANCED_LOG";

/// Parses a log level, falling back to `Info` when it is missing or unrecognized.
pub fn log_level(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|value| LevelFilter::from_str(value.trim()).ok())
        .unwrap_or(LevelFilter::Info)
}

pub fn parse_key(line: &str) -> Result<i64> {
    Ok(line.trim().parse::<i64>()?)
}

/// Writes every key of the set in order along with its depth in the tree.
pub fn write_contents<W>(out: &mut W, set: &RedBlackSet<i64>) -> Result<()>
where
    W: Write,
{
    for (key, depth) in set.depths() {
        writeln!(out, "item: {}, depth: {}", key, depth)?;
    }
    Ok(())
}

pub fn run_demo<W>(out: &mut W, keys: &[i64]) -> Result<RedBlackSet<i64>>
where
    W: Write,
{
    let mut set = RedBlackSet::new();
    for key in keys {
        writeln!(out, "Adding: {}", key)?;
        info!("demo: adding {}", key);
        set.insert(*key);
    }
    writeln!(out, "Tree items in order:")?;
    write_contents(out, &set)?;
    Ok(set)
}

/// A single set that outlives every line read from the input.
pub struct Session<W> {
    set: RedBlackSet<i64>,
    out: W,
    lines: usize,
    rejected: usize,
}

impl<W> Session<W>
where
    W: Write,
{
    pub fn new(out: W) -> Self {
        Session {
            set: RedBlackSet::new(),
            out,
            lines: 0,
            rejected: 0,
        }
    }

    pub fn set(&self) -> &RedBlackSet<i64> {
        &self.set
    }

    /// Returns the number of lines that could not be parsed.
    pub fn rejected(&self) -> usize {
        self.rejected
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Inserts the integer on a line, or reports the line and skips it if it does not parse.
    /// The set is reported either way.
    pub fn process_line(&mut self, line: &str) -> Result<()> {
        self.lines += 1;
        match parse_key(line) {
            Ok(key) => {
                if self.set.insert(key) {
                    debug!("line {}: inserted {}", self.lines, key);
                } else {
                    debug!("line {}: {} is already present", self.lines, key);
                }
            },
            Err(err) => {
                self.rejected += 1;
                warn!("line {}: skipping {:?}: {}", self.lines, line.trim(), err);
                writeln!(self.out, "Not a valid input: {}", line.trim())?;
            },
        }
        self.set.validate()?;
        self.report()
    }

    pub fn report(&mut self) -> Result<()> {
        write_contents(&mut self.out, &self.set)?;
        let HeightSize { height, size } = self.set.height_and_size();
        writeln!(self.out, "Height: {}, Size: {}", height, size)?;
        Ok(())
    }

    pub fn run<R>(&mut self, mut input: R) -> Result<()>
    where
        R: BufRead,
    {
        let mut buf = Vec::new();
        // bytes that are not UTF-8 fail to parse like any other bad token
        while input.read_until(b'\n', &mut buf)? > 0 {
            let line = String::from_utf8_lossy(&buf).into_owned();
            self.process_line(line.trim_end_matches(&['\n', '\r'][..]))?;
            buf.clear();
        }
        info!(
            "read {} lines, rejected {}, set holds {} keys",
            self.lines,
            self.rejected,
            self.set.len(),
        );
        Ok(())
    }
}
