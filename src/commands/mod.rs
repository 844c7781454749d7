//! CLI commands for wayfinder

pub mod dispatch;
pub mod info;
pub mod mst;
pub mod path;
pub mod paths;

mod shared;
