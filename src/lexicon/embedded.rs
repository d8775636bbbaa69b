//! Embedded default lists
//!
//! Dictionary and adjacency pair lists compiled into the binary at build time.

// Include generated lists from the build script
include!(concat!(env!("OUT_DIR"), "/words.rs"));
include!(concat!(env!("OUT_DIR"), "/pairs.rs"));
