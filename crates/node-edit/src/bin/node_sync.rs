//! `node-sync` — write edited fields back into the object at a path.
//!
//! Usage:
//!   node-sync '<path>' '<fields>'
//!
//! The document is read from stdin. `<path>` is a JSON array of keys and
//! indices; `<fields>` is a JSON array of `{key, value, type}` objects
//! where `value` is the edited text and `type` one of string, number,
//! boolean, null, array, object. The new document is written to stdout.

use json_node_edit::cli::run_sync;
use std::io::{self, Read, Write};

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let (path, fields) = match (args.get(1), args.get(2)) {
        (Some(p), Some(f)) => (p.clone(), f.clone()),
        _ => {
            eprintln!("Usage: node-sync '<path>' '<fields>'");
            std::process::exit(1);
        }
    };

    let mut buf = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut buf) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    match run_sync(buf.trim(), &path, &fields) {
        Ok(out) => {
            io::stdout().write_all(out.as_bytes()).unwrap();
            io::stdout().write_all(b"\n").unwrap();
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
