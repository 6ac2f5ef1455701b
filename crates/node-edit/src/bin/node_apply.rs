//! `node-apply` — replace the value at a path inside a JSON document.
//!
//! Usage:
//!   node-apply '<path>' '<value>'
//!
//! The document is read from stdin. `<path>` is a JSON array of keys and
//! indices (e.g. '["a",0,"b"]'); `<value>` is the replacement as JSON.
//! The new document is written to stdout.

use json_node_edit::cli::run_apply;
use std::io::{self, Read, Write};

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let (path, value) = match (args.get(1), args.get(2)) {
        (Some(p), Some(v)) => (p.clone(), v.clone()),
        _ => {
            eprintln!("Usage: node-apply '<path>' '<value>'");
            std::process::exit(1);
        }
    };

    let mut buf = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut buf) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    match run_apply(buf.trim(), &path, &value) {
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
