//! Rate provider errors

use alloy::primitives::Address;
use thiserror::Error;

use crate::models::ChainId;

#[derive(Debug, Clone, Error)]
pub enum ProviderError {
	#[error("rate query failed for vault {vault}: {reason}")]
	QueryFailed { vault: Address, reason: String },

	#[error("rate query timed out for vault {vault}")]
	Timeout { vault: Address },

	#[error("no RPC endpoint configured for chain {chain_id}")]
	MissingEndpoint { chain_id: ChainId },

	#[error("rpc transport error: {0}")]
	Rpc(String),
}

pub type ProviderResult<T> = Result<T, ProviderError>;
