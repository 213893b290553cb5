use std::collections::BTreeSet;
use std::fmt::Write as _;

use bst_commands::{Command, Dispatcher};
use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;

/// A line of a command script: usually a command with a small key so keys collide,
/// sometimes junk the dispatcher has to skip.
#[derive(Clone, Debug)]
struct Line(String);

impl Arbitrary for Line {
    fn arbitrary(g: &mut Gen) -> Self {
        let key = i32::from(i8::arbitrary(g) % 16);
        let line = match g.choose(&[0, 0, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9]).unwrap() {
            0 => format!("insert {}", key),
            1 => "inorder".to_string(),
            2 => "preorder".to_string(),
            3 => "postorder".to_string(),
            4 => "minimum".to_string(),
            5 => "maximum".to_string(),
            6 => format!("search {}", key),
            7 => format!("successor {}", key),
            8 => format!("predecessor {}", key),
            9 => g
                .choose(&["", "insert", "delete 3", "search x", "Inorder"])
                .unwrap()
                .to_string(),
            _ => unreachable!(),
        };
        Line(line)
    }
}

/// What the dispatcher should print for `command`, computed from a sorted set instead of
/// a tree. Preorder and postorder depend on the tree's shape, so only their key sets are
/// checked (see `traversals_visit_every_key`).
fn expected(command: Command, set: &mut BTreeSet<i32>) -> Option<String> {
    let line = match command {
        Command::Insert(k) => {
            set.insert(k);
            format!("{} inserted", k)
        }
        Command::Inorder => set.iter().fold(String::new(), |mut out, k| {
            let _ = write!(out, "{} ", k);
            out
        }),
        Command::Preorder | Command::Postorder => return None,
        Command::Minimum => set.iter().next().map(i32::to_string).unwrap_or_default(),
        Command::Maximum => set.iter().next_back().map(i32::to_string).unwrap_or_default(),
        Command::Search(k) if set.contains(&k) => format!("{} found", k),
        Command::Search(k) => format!("{} not found", k),
        Command::Successor(_) | Command::Predecessor(_) if set.is_empty() => {
            "Tree is empty".to_string()
        }
        Command::Successor(k) | Command::Predecessor(k) if !set.contains(&k) => {
            format!("{} does not exist", k)
        }
        Command::Successor(k) => match set.range(k + 1..).next() {
            Some(s) => s.to_string(),
            None => format!("successor of {} does not exist", k),
        },
        Command::Predecessor(k) => match set.range(..k).next_back() {
            Some(p) => p.to_string(),
            None => format!("predecessor of {} does not exist", k),
        },
    };
    Some(line)
}

fn run(lines: &[Line]) -> Vec<String> {
    let script: String = lines.iter().map(|l| format!("{}\n", l.0)).collect();
    let mut output = Vec::new();
    Dispatcher::new().run(script.as_bytes(), &mut output).unwrap();
    String::from_utf8(output)
        .unwrap()
        .lines()
        .map(str::to_owned)
        .collect()
}

#[quickcheck]
fn matches_sorted_set_model(lines: Vec<Line>) -> bool {
    let actual = run(&lines);
    let commands: Vec<_> = lines.iter().filter_map(|l| Command::parse(&l.0)).collect();
    if actual.len() != commands.len() {
        return false;
    }

    let mut set = BTreeSet::new();
    commands
        .into_iter()
        .zip(actual)
        .all(|(command, got)| expected(command, &mut set).map_or(true, |want| want == got))
}

#[quickcheck]
fn traversals_visit_every_key(keys: Vec<i8>) -> bool {
    let mut lines: Vec<_> = keys.iter().map(|k| Line(format!("insert {}", k))).collect();
    lines.push(Line("preorder".to_string()));
    lines.push(Line("postorder".to_string()));
    lines.push(Line("inorder".to_string()));
    let output = run(&lines);

    let sorted = |line: &str| {
        let mut keys: Vec<i32> = line.split_whitespace().map(|k| k.parse().unwrap()).collect();
        keys.sort_unstable();
        keys
    };
    let n = keys.len();
    let inorder = sorted(output[n + 2].as_str());

    sorted(output[n].as_str()) == inorder && sorted(output[n + 1].as_str()) == inorder
}

#[quickcheck]
fn traversals_are_idempotent(keys: Vec<i8>) -> bool {
    let mut lines: Vec<_> = keys.iter().map(|k| Line(format!("insert {}", k))).collect();
    for traversal in ["preorder", "postorder", "inorder"] {
        lines.push(Line(traversal.to_string()));
        lines.push(Line(traversal.to_string()));
    }
    let output = run(&lines);
    let traversals = &output[keys.len()..];

    traversals.chunks(2).all(|pair| pair[0] == pair[1])
}

#[quickcheck]
fn duplicate_inserts_keep_shape(keys: Vec<i8>) -> bool {
    let mut lines: Vec<_> = keys.iter().map(|k| Line(format!("insert {}", k))).collect();
    lines.push(Line("preorder".to_string()));
    lines.extend(keys.iter().map(|k| Line(format!("insert {}", k))));
    lines.push(Line("preorder".to_string()));
    let output = run(&lines);

    output[keys.len()] == output[output.len() - 1]
}
