//! Registry errors

use thiserror::Error;
use xlend_types::{ChainId, VaultError};

#[derive(Debug, Error)]
pub enum RegistryError {
	#[error("unknown chain {chain_id}")]
	UnknownChain { chain_id: ChainId },

	#[error("invalid catalog: {reason}")]
	InvalidCatalog { reason: String },

	#[error("invalid vault: {0}")]
	Vault(#[from] VaultError),

	#[error("catalog parse error: {0}")]
	Parse(#[from] serde_json::Error),

	#[error("catalog io error: {0}")]
	Io(#[from] std::io::Error),
}
