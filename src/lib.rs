//! This crate runs scripts of textual commands against a Binary Search Tree (BST)
//! of integers and reports the result of each command as a line of text.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert and find stored keys. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of key (the key that was inserted, for example) and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for keys in the tree takes `O(height)` (where `height` is defined as the
//! longest path from the root `Node` to a leaf `Node`). The [`tree::Tree`] here does no
//! balancing, so its height is decided entirely by insertion order: sorted input builds
//! a tree that is really a linked list. Visiting the left subtree, then the subtree
//! root, then the right subtree yields the keys in sorted order.
//!
//! ## Commands
//!
//! A [`Dispatcher`] owns one tree and feeds it [`Command`]s parsed from lines such as
//! `insert 5`, `inorder` or `successor 5`, writing one line of output per command.
//! Lines that aren't commands are skipped without complaint.
//!
//! ```
//! use bst_commands::Dispatcher;
//!
//! let mut output = Vec::new();
//! let summary = Dispatcher::new()
//!     .run(&b"insert 2\ninsert 1\nfrobnicate\npredecessor 2\n"[..], &mut output)
//!     .unwrap();
//!
//! assert_eq!(output, b"2 inserted\n1 inserted\n1\n");
//! assert_eq!(summary.ignored, 1);
//! ```

#![deny(missing_docs)]

pub mod command;
pub mod dispatch;
mod error;
pub mod tree;

pub use command::{Command, Key};
pub use dispatch::{Dispatcher, Summary};
pub use error::Error;
