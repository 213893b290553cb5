//! Drives a [`Tree`] from a stream of command lines.
//!
//! Each recognized line produces exactly one output line. The phrasing is fixed so the
//! output can be compared byte for byte:
//!
//! ```
//! use bst_commands::Dispatcher;
//!
//! let script = "insert 5\ninsert 3\ninsert 8\ninorder\nsuccessor 8\nsearch 10\n";
//! let mut output = Vec::new();
//! Dispatcher::new().run(script.as_bytes(), &mut output).unwrap();
//!
//! assert_eq!(
//!     String::from_utf8(output).unwrap(),
//!     "5 inserted\n3 inserted\n8 inserted\n3 5 8 \nsuccessor of 8 does not exist\n10 not found\n",
//! );
//! ```

use std::io::{self, BufRead, Write};

use log::{debug, trace};

use crate::command::{Command, Key};
use crate::error::Error;
use crate::tree::{Neighbor, Tree};

/// Counts gathered while running a command stream.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    /// Lines read from the input.
    pub lines: usize,
    /// Lines that parsed into a command and were executed.
    pub executed: usize,
    /// Lines skipped because they weren't a recognized command.
    pub ignored: usize,
}

/// Owns the tree a command stream operates on.
#[derive(Debug, Default)]
pub struct Dispatcher {
    tree: Tree<Key>,
}

impl Dispatcher {
    /// A dispatcher over an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// The tree as the commands so far have left it.
    pub fn tree(&self) -> &Tree<Key> {
        &self.tree
    }

    /// Reads `input` line by line until it's exhausted, executing every recognized
    /// command and writing its result to `output`. Lines that don't parse are skipped
    /// silently. `output` is flushed before returning.
    pub fn run<R, W>(&mut self, mut input: R, mut output: W) -> Result<Summary, Error>
    where
        R: BufRead,
        W: Write,
    {
        let mut summary = Summary::default();
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf).map_err(Error::Read)? == 0 {
                break;
            }
            summary.lines += 1;

            let line = String::from_utf8_lossy(&buf);
            match Command::parse(&line) {
                Some(command) => {
                    debug!("line {}: {}", summary.lines, command);
                    self.execute(command, &mut output).map_err(Error::Write)?;
                    summary.executed += 1;
                }
                None => {
                    trace!("line {}: ignoring {:?}", summary.lines, line.trim_end());
                    summary.ignored += 1;
                }
            }
        }
        output.flush().map_err(Error::Write)?;
        Ok(summary)
    }

    /// Executes a single command, writing its one line of output.
    pub fn execute<W>(&mut self, command: Command, out: &mut W) -> io::Result<()>
    where
        W: Write,
    {
        match command {
            Command::Insert(key) => {
                // Reported as inserted even when the key was already present.
                self.tree.insert(key);
                writeln!(out, "{} inserted", key)
            }
            Command::Inorder => write_keys(out, self.tree.inorder()),
            Command::Preorder => write_keys(out, self.tree.preorder()),
            Command::Postorder => write_keys(out, self.tree.postorder()),
            Command::Minimum => write_optional(out, self.tree.minimum()),
            Command::Maximum => write_optional(out, self.tree.maximum()),
            Command::Search(key) => {
                if self.tree.contains(&key) {
                    writeln!(out, "{} found", key)
                } else {
                    writeln!(out, "{} not found", key)
                }
            }
            Command::Successor(key) => {
                write_neighbor(out, "successor", key, &self.tree, Tree::successor)
            }
            Command::Predecessor(key) => {
                write_neighbor(out, "predecessor", key, &self.tree, Tree::predecessor)
            }
        }
    }
}

/// Every key followed by a single space, then a newline.
fn write_keys<'a, W, I>(out: &mut W, keys: I) -> io::Result<()>
where
    W: Write,
    I: Iterator<Item = &'a Key>,
{
    for key in keys {
        write!(out, "{} ", key)?;
    }
    writeln!(out)
}

fn write_optional<W: Write>(out: &mut W, key: Option<&Key>) -> io::Result<()> {
    match key {
        Some(key) => writeln!(out, "{}", key),
        None => writeln!(out),
    }
}

fn write_neighbor<W, F>(
    out: &mut W,
    relation: &str,
    key: Key,
    tree: &Tree<Key>,
    find: F,
) -> io::Result<()>
where
    W: Write,
    F: for<'t> Fn(&'t Tree<Key>, &Key) -> Neighbor<&'t Key>,
{
    if tree.is_empty() {
        return writeln!(out, "Tree is empty");
    }
    match find(tree, &key) {
        Neighbor::NotPresent => writeln!(out, "{} does not exist", key),
        Neighbor::None => writeln!(out, "{} of {} does not exist", relation, key),
        Neighbor::Key(neighbor) => writeln!(out, "{}", neighbor),
    }
}
