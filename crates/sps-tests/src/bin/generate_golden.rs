//! Golden fixture generator for the SPS conformance tests.
//!
//! Writes every binary fixture under `tests/golden/`. Run it after
//! changing the fixture builders; the conformance tests compare the
//! committed files against the builders byte for byte.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin generate_golden -p sps-tests
//! ```
//!
//! # Generated fixtures
//!
//! | Directory | Contents                                              |
//! |-----------|-------------------------------------------------------|
//! | reference | One set, one `VT_LPWSTR` record holding an account SID |
//! | summary   | Summary information set + user-defined named set      |

#![allow(clippy::pedantic)]

use std::path::Path;

use sps_tests::{REFERENCE_STORE, summary_store};

fn write_fixture(root: &Path, name: &str, bytes: &[u8]) {
    let dir = root.join(name);
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("store.bin");
    std::fs::write(&path, bytes).unwrap();
    println!("  {} ({} bytes)", path.display(), bytes.len());
}

fn main() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/golden");
    println!("writing fixtures to {}", root.display());

    write_fixture(&root, "reference", &REFERENCE_STORE);
    write_fixture(&root, "summary", &summary_store());
}
