//! Borrowing vault entity

use crate::models::{ChainId, Currency};
use alloy::primitives::Address;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when constructing a [`Vault`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VaultError {
	#[error("vault currencies must share one chain: collateral on {collateral_chain}, debt on {debt_chain}")]
	ChainMismatch {
		collateral_chain: ChainId,
		debt_chain: ChainId,
	},
}

/// Lending vault holding one collateral and one debt currency on a single
/// chain.
///
/// Immutable value object. The chain is derived from the currency pair at
/// construction, so both currencies are guaranteed to live on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vault {
	address: Address,
	chain_id: ChainId,
	collateral: Currency,
	debt: Currency,
}

impl Vault {
	/// Build a vault from its deployed address and currency pair.
	pub fn new(address: Address, collateral: Currency, debt: Currency) -> Result<Self, VaultError> {
		if collateral.chain_id() != debt.chain_id() {
			return Err(VaultError::ChainMismatch {
				collateral_chain: collateral.chain_id(),
				debt_chain: debt.chain_id(),
			});
		}
		Ok(Self {
			address,
			chain_id: collateral.chain_id(),
			collateral,
			debt,
		})
	}

	pub fn address(&self) -> Address {
		self.address
	}

	pub fn chain_id(&self) -> ChainId {
		self.chain_id
	}

	pub fn collateral(&self) -> &Currency {
		&self.collateral
	}

	pub fn debt(&self) -> &Currency {
		&self.debt
	}
}
