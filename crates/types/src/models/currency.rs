//! Currencies: chain-native coins and ERC-20 tokens

use crate::models::ChainId;
use alloy::primitives::Address;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// ERC-20 token on a specific chain
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
	pub chain_id: ChainId,
	/// Contract address
	pub address: Address,
	pub decimals: u8,
	pub symbol: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
}

impl Token {
	pub fn new(chain_id: ChainId, address: Address, decimals: u8, symbol: impl Into<String>) -> Self {
		Self {
			chain_id,
			address,
			decimals,
			symbol: symbol.into(),
			name: None,
		}
	}

	pub fn with_name(mut self, name: impl Into<String>) -> Self {
		self.name = Some(name.into());
		self
	}
}

/// Native currency of a chain (ETH, MATIC, xDAI, ...)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NativeCurrency {
	pub chain_id: ChainId,
	pub decimals: u8,
	pub symbol: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
}

impl NativeCurrency {
	pub fn new(chain_id: ChainId, decimals: u8, symbol: impl Into<String>) -> Self {
		Self {
			chain_id,
			decimals,
			symbol: symbol.into(),
			name: None,
		}
	}
}

/// Either the chain-native coin or an ERC-20 token.
///
/// Two currencies are equal when they are the same kind on the same chain
/// and, for tokens, at the same contract address. Display metadata such as
/// name and decimals does not participate in equality.
#[derive(Debug, Clone, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Currency {
	Native(NativeCurrency),
	Token(Token),
}

impl Currency {
	pub fn chain_id(&self) -> ChainId {
		match self {
			Currency::Native(n) => n.chain_id,
			Currency::Token(t) => t.chain_id,
		}
	}

	pub fn decimals(&self) -> u8 {
		match self {
			Currency::Native(n) => n.decimals,
			Currency::Token(t) => t.decimals,
		}
	}

	pub fn symbol(&self) -> &str {
		match self {
			Currency::Native(n) => &n.symbol,
			Currency::Token(t) => &t.symbol,
		}
	}

	pub fn name(&self) -> Option<&str> {
		match self {
			Currency::Native(n) => n.name.as_deref(),
			Currency::Token(t) => t.name.as_deref(),
		}
	}

	/// Contract address, `None` for native currencies.
	pub fn address(&self) -> Option<Address> {
		match self {
			Currency::Native(_) => None,
			Currency::Token(t) => Some(t.address),
		}
	}

	pub fn is_native(&self) -> bool {
		matches!(self, Currency::Native(_))
	}

	pub fn is_token(&self) -> bool {
		matches!(self, Currency::Token(_))
	}
}

impl PartialEq for Currency {
	fn eq(&self, other: &Self) -> bool {
		match (self, other) {
			(Currency::Native(a), Currency::Native(b)) => {
				a.chain_id == b.chain_id && a.symbol == b.symbol
			},
			(Currency::Token(a), Currency::Token(b)) => {
				a.chain_id == b.chain_id && a.address == b.address
			},
			_ => false,
		}
	}
}

impl Hash for Currency {
	fn hash<H: Hasher>(&self, state: &mut H) {
		match self {
			Currency::Native(n) => {
				0u8.hash(state);
				n.chain_id.hash(state);
				n.symbol.hash(state);
			},
			Currency::Token(t) => {
				1u8.hash(state);
				t.chain_id.hash(state);
				t.address.hash(state);
			},
		}
	}
}
