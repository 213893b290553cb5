//! Parsing of single command lines.
//!
//! A line is a command name followed, for the commands that need one, by an integer
//! key, separated by whitespace. Anything that doesn't fit that shape is not an error:
//! [`Command::parse`] returns `None` and the line is skipped.

use std::fmt;

/// The key type command scripts operate on.
pub type Key = i32;

/// One request against the tree.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// `insert <key>`
    Insert(Key),
    /// `inorder`
    Inorder,
    /// `preorder`
    Preorder,
    /// `postorder`
    Postorder,
    /// `minimum`
    Minimum,
    /// `maximum`
    Maximum,
    /// `search <key>`
    Search(Key),
    /// `successor <key>`
    Successor(Key),
    /// `predecessor <key>`
    Predecessor(Key),
}

impl Command {
    /// Parses one line. Unknown command names, blank lines and missing or non-numeric
    /// keys all yield `None`. Tokens after the ones a command needs are ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_commands::Command;
    ///
    /// assert_eq!(Command::parse("insert 5\n"), Some(Command::Insert(5)));
    /// assert_eq!(Command::parse("  inorder  "), Some(Command::Inorder));
    /// assert_eq!(Command::parse("insert"), None);
    /// assert_eq!(Command::parse("delete 5"), None);
    /// ```
    pub fn parse(line: &str) -> Option<Self> {
        let mut tokens = line.split_whitespace();
        let name = tokens.next()?;
        let mut key = || tokens.next()?.parse::<Key>().ok();

        let command = match name {
            "insert" => Self::Insert(key()?),
            "inorder" => Self::Inorder,
            "preorder" => Self::Preorder,
            "postorder" => Self::Postorder,
            "minimum" => Self::Minimum,
            "maximum" => Self::Maximum,
            "search" => Self::Search(key()?),
            "successor" => Self::Successor(key()?),
            "predecessor" => Self::Predecessor(key()?),
            _ => return None,
        };
        Some(command)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Insert(k) => write!(f, "insert {}", k),
            Self::Inorder => f.write_str("inorder"),
            Self::Preorder => f.write_str("preorder"),
            Self::Postorder => f.write_str("postorder"),
            Self::Minimum => f.write_str("minimum"),
            Self::Maximum => f.write_str("maximum"),
            Self::Search(k) => write!(f, "search {}", k),
            Self::Successor(k) => write!(f, "successor {}", k),
            Self::Predecessor(k) => write!(f, "predecessor {}", k),
        }
    }
}
