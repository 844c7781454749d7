use std::path::PathBuf;

use clap::Args;

#[derive(Args, Debug, Clone)]
pub struct PathsArgs {
    /// Graph document (.json or .toml)
    pub file: PathBuf,

    /// Label of the source vertex
    #[arg(long, short)]
    pub from: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct PathArgs {
    /// Graph document (.json or .toml)
    pub file: PathBuf,

    /// Label of the start vertex
    #[arg(long, short)]
    pub from: Option<String>,

    /// Label of the target vertex
    #[arg(long, short)]
    pub to: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct MstArgs {
    /// Graph document (.json or .toml)
    pub file: PathBuf,

    /// Label of the vertex the tree is grown from
    #[arg(long, short)]
    pub from: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct InfoArgs {
    /// Graph document (.json or .toml)
    pub file: PathBuf,
}
