//! Graph algorithm implementations
//!
//! - `dijkstra`: single-source shortest paths
//! - `prim`: minimum spanning tree
//! - `shared`: bookkeeping and result-graph reconstruction used by both

pub mod dijkstra;
pub mod prim;
mod shared;

pub use dijkstra::{find_shortest_paths, shortest_path, PathResult};
pub use prim::find_minimal_spanning_tree;
