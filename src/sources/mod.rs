//! Configuration source and provider implementations.

mod config_source;
mod env;
mod file;
mod flat;
mod memory;
mod provider;

pub use config_source::ConfigSource;
pub use env::EnvSource;
pub use file::FileSource;
pub use flat::FlatValues;
pub use memory::MemorySource;
pub use provider::{LoadedProvider, Provider, ProviderKey, ProviderKind};
