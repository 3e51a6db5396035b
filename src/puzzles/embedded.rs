//! Embedded puzzle data
//!
//! Puzzle JSON compiled into the binary at build time.

// Include generated puzzle table from build script
include!(concat!(env!("OUT_DIR"), "/bundled.rs"));
