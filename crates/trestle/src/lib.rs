//! Trestle - Minimum spanning tree analysis for transportation networks.
//!
//! This crate provides both a CLI application and a library for computing
//! MSTs with Prim's and Kruskal's algorithms, cross-checking their costs,
//! and recording operation counts and timings.

#![forbid(unsafe_code)]

// Public modules for library usage
pub mod config;
pub mod error;
pub mod graph;
pub mod io;
pub mod mst;
pub mod output;

// Public CLI module (needed by binary)
pub mod cli;
