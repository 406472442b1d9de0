//! Build a tree from a fixed key sequence, draw it, delete a key and draw it
//! again.
//!
//! Rebalancing rotations are logged to stderr.

use avltree::AvlTree;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

const KEYS: [usize; 8] = [33, 13, 52, 9, 21, 61, 8, 11];
const DELETE: usize = 13;

fn main() {
    if let Err(e) = TermLogger::init(
        LevelFilter::Trace,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) {
        eprintln!("failed to initialise logging: {e}");
    }

    let mut t = AvlTree::new();
    for key in KEYS {
        t.insert(key);
    }
    print!("{t}");

    t.remove(&DELETE);
    println!("After Deletion: ");
    print!("{t}");
}
