#![forbid(unsafe_code)]
//! filetree — render a directory tree as a collapsible HTML page whose embedded
//! script copies the expanded tree to the clipboard as ASCII art.

pub mod cli;
pub mod filter;
pub mod render;
pub mod tree;
