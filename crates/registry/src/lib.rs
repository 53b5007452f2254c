//! xlend Registry
//!
//! Static catalog of the chains, tokens and vaults the SDK knows about.
//! A [`Registry`] is built once from catalog data (the bundled mainnet
//! catalog, a JSON document, or a [`RegistryBuilder`]) and then queried
//! immutably by the planner and providers.

pub mod catalog;
pub mod errors;
pub mod registry;

pub use catalog::{CatalogDoc, ChainEntry, TokenEntry, VaultEntry};
pub use errors::RegistryError;
pub use registry::{ChainMeta, Registry, RegistryBuilder};
