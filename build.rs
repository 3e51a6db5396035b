//! Build script to embed the bundled puzzle set
//!
//! Scans `data/puzzles/` for JSON files and generates Rust source with a const
//! array of `(id, json)` pairs, sorted by file name.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let puzzle_dir = Path::new(&manifest_dir).join("data").join("puzzles");

    generate_puzzle_table(
        &puzzle_dir,
        &Path::new(&out_dir).join("bundled.rs"),
        "BUNDLED_PUZZLES",
        "Default puzzles compiled into the binary",
    );

    // Rebuild if puzzles are added, removed or edited
    println!("cargo:rerun-if-changed=data/puzzles");
}

fn generate_puzzle_table(
    input_dir: &Path,
    output_path: &Path,
    const_name: &str,
    doc_comment: &str,
) {
    let mut files: Vec<_> = fs::read_dir(input_dir)
        .unwrap_or_else(|e| panic!("Failed to read {}: {e}", input_dir.display()))
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    files.sort();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated puzzle table").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[(&str, &str)] = &[").unwrap();

    for path in &files {
        let id = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or_else(|| panic!("Non UTF-8 puzzle file name: {}", path.display()));
        writeln!(output, "    ({id:?}, include_str!({:?})),", path.display().to_string()).unwrap();
        println!("cargo:rerun-if-changed={}", path.display());
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of puzzles in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {};", files.len()).unwrap();
}
