//! Wayfinder Core Library
//!
//! Heap-backed priority queues and a weighted graph toolkit with
//! Dijkstra shortest paths and Prim minimum spanning trees.

pub mod association;
pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod heap;
pub mod loader;
pub mod logging;
pub mod priority_queue;
pub mod records;
