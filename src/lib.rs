//! # alg
//!
//! A workbook of dynamic connectivity algorithms: given `N` sites, connect
//! pairs of them and answer whether two sites belong to the same component.

#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// The algs4 union-find client and the algorithm comparison runner
pub mod client;
/// Time complexity tables for every union-find strategy
pub mod complexity;
/// Environment driven configuration
pub mod config;
/// Reading connectivity datasets (JSON and algs4 text)
pub mod input;
/// The union-find abstraction and its implementations
pub mod uf;
