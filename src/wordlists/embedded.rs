//! Embedded word list
//!
//! Word/hint pairs compiled into the binary at build time.

// Include generated word list from build script
include!(concat!(env!("OUT_DIR"), "/words.rs"));
