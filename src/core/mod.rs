//! Core configuration types: the section tree and the layered root.

mod builder;
mod node;
pub mod path;
mod root;

pub use builder::ConfigRootBuilder;
pub use node::{ConfigNode, Configuration};
pub use root::ConfigRoot;
