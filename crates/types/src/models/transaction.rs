//! Transaction request model

use alloy::primitives::{Address, Bytes, U256};
use serde::{Deserialize, Serialize};

use super::ChainId;

/// Unsigned call ready to be handed to a wallet or signer.
///
/// Carries only the fields this crate can determine. Gas and nonce are
/// left to the caller's signing stack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRequest {
	pub chain_id: ChainId,
	pub from: Address,
	pub to: Address,
	pub data: Bytes,
	#[serde(default)]
	pub value: U256,
}

impl TransactionRequest {
	pub fn new(chain_id: ChainId, from: Address, to: Address, data: Bytes) -> Self {
		Self {
			chain_id,
			from,
			to,
			data,
			value: U256::ZERO,
		}
	}
}
